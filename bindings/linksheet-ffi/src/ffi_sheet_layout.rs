#[derive(uniffi::Enum, Clone)]
pub enum KeyboardKind {
    Default,
    Url,
}

impl From<linksheet::KeyboardKind> for KeyboardKind {
    fn from(inner: linksheet::KeyboardKind) -> Self {
        match inner {
            linksheet::KeyboardKind::Default => Self::Default,
            linksheet::KeyboardKind::Url => Self::Url,
        }
    }
}

#[derive(uniffi::Record, Clone)]
pub struct TextField {
    pub label: String,
    pub value: String,
    pub keyboard: KeyboardKind,
}

impl From<linksheet::TextField> for TextField {
    fn from(inner: linksheet::TextField) -> Self {
        Self {
            label: inner.label,
            value: inner.value,
            keyboard: inner.keyboard.into(),
        }
    }
}

#[derive(uniffi::Record, Clone)]
pub struct ToggleField {
    pub label: String,
    pub value: bool,
}

impl From<linksheet::ToggleField> for ToggleField {
    fn from(inner: linksheet::ToggleField) -> Self {
        Self {
            label: inner.label,
            value: inner.value,
        }
    }
}

#[derive(uniffi::Record, Clone)]
pub struct SheetLayout {
    pub title: String,
    pub remove_label: String,
    pub done_label: String,
    pub url_field: TextField,
    pub text_field: TextField,
    pub new_window_toggle: ToggleField,
}

impl From<linksheet::SheetLayout> for SheetLayout {
    fn from(inner: linksheet::SheetLayout) -> Self {
        Self {
            title: inner.title,
            remove_label: inner.remove_label,
            done_label: inner.done_label,
            url_field: inner.url_field.into(),
            text_field: inner.text_field.into(),
            new_window_toggle: inner.new_window_toggle.into(),
        }
    }
}
