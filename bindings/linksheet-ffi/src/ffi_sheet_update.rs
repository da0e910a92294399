use crate::ffi_rich_text::RichTextValue;

#[derive(uniffi::Enum, Clone)]
pub enum TextUpdate {
    Keep,
    ReplaceAll { value: RichTextValue },
}

impl From<linksheet::TextUpdate> for TextUpdate {
    fn from(inner: linksheet::TextUpdate) -> Self {
        match inner {
            linksheet::TextUpdate::Keep => Self::Keep,
            linksheet::TextUpdate::ReplaceAll(value) => Self::ReplaceAll {
                value: RichTextValue::from(&value),
            },
        }
    }
}

#[derive(uniffi::Enum, Clone)]
pub enum LinkEvent {
    None,
    Removed,
}

impl From<linksheet::LinkEvent> for LinkEvent {
    fn from(inner: linksheet::LinkEvent) -> Self {
        match inner {
            linksheet::LinkEvent::None => Self::None,
            linksheet::LinkEvent::Removed => Self::Removed,
        }
    }
}

#[derive(uniffi::Enum, Clone)]
pub enum Politeness {
    Polite,
    Assertive,
}

impl From<linksheet::Politeness> for Politeness {
    fn from(inner: linksheet::Politeness) -> Self {
        match inner {
            linksheet::Politeness::Polite => Self::Polite,
            linksheet::Politeness::Assertive => Self::Assertive,
        }
    }
}

#[derive(uniffi::Record, Clone)]
pub struct Announcement {
    pub message: String,
    pub politeness: Politeness,
}

impl From<linksheet::Announcement> for Announcement {
    fn from(inner: linksheet::Announcement) -> Self {
        Self {
            message: inner.message,
            politeness: inner.politeness.into(),
        }
    }
}

#[derive(uniffi::Record, Clone)]
pub struct SheetUpdate {
    pub text_update: TextUpdate,
    pub link_event: LinkEvent,
    pub announcement: Option<Announcement>,
    pub dismiss: bool,
}

impl From<linksheet::SheetUpdate> for SheetUpdate {
    fn from(inner: linksheet::SheetUpdate) -> Self {
        Self {
            text_update: inner.text_update.into(),
            link_event: inner.link_event.into(),
            announcement: inner.announcement.map(Into::into),
            dismiss: inner.dismiss,
        }
    }
}
