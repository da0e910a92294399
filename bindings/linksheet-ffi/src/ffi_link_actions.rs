#[derive(uniffi::Enum, Clone)]
pub enum LinkAction {
    CreateWithText,
    Create,
    Edit { url: String },
}

impl From<linksheet::LinkAction> for LinkAction {
    fn from(inner: linksheet::LinkAction) -> Self {
        match inner {
            linksheet::LinkAction::CreateWithText => Self::CreateWithText,
            linksheet::LinkAction::Create => Self::Create,
            linksheet::LinkAction::Edit(url) => Self::Edit { url },
        }
    }
}
