use std::sync::{Arc, Mutex};

use crate::ffi_link_actions::LinkAction;
use crate::ffi_rich_text::RichTextValue;
use crate::ffi_sheet_layout::SheetLayout;
use crate::ffi_sheet_update::SheetUpdate;

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum SheetError {
    #[error("invalid rich text value: {reason}")]
    InvalidValue { reason: String },
}

#[derive(uniffi::Object)]
pub struct LinkSheet {
    inner: Mutex<linksheet::LinkSheet>,
}

/// Open a link sheet for the given document value.
///
/// `is_active` says whether the cursor sits in an existing link and
/// `active_url` carries that link's URL. Span or selection indices that
/// don't fit the text are rejected.
#[uniffi::export]
pub fn new_link_sheet(
    value: RichTextValue,
    is_active: bool,
    active_url: Option<String>,
) -> Result<Arc<LinkSheet>, SheetError> {
    let value = linksheet::RichTextValue::try_from(value).map_err(|e| {
        SheetError::InvalidValue {
            reason: e.to_string(),
        }
    })?;
    Ok(Arc::new(LinkSheet {
        inner: Mutex::new(linksheet::LinkSheet::new(
            value,
            is_active,
            active_url.as_deref(),
        )),
    }))
}

#[uniffi::export]
impl LinkSheet {
    pub fn set_url(self: &Arc<Self>, url: String) {
        self.inner.lock().unwrap().set_url(&url);
    }

    pub fn set_text(self: &Arc<Self>, text: String) {
        self.inner.lock().unwrap().set_text(&text);
    }

    pub fn set_opens_in_new_window(
        self: &Arc<Self>,
        opens_in_new_window: bool,
    ) {
        self.inner
            .lock()
            .unwrap()
            .set_opens_in_new_window(opens_in_new_window);
    }

    pub fn url(self: &Arc<Self>) -> String {
        self.inner.lock().unwrap().url().to_owned()
    }

    pub fn text(self: &Arc<Self>) -> String {
        self.inner.lock().unwrap().text().to_owned()
    }

    pub fn opens_in_new_window(self: &Arc<Self>) -> bool {
        self.inner.lock().unwrap().opens_in_new_window()
    }

    pub fn layout(self: &Arc<Self>) -> SheetLayout {
        self.inner.lock().unwrap().layout().into()
    }

    pub fn link_selection(self: &Arc<Self>) -> RichTextValue {
        RichTextValue::from(&self.inner.lock().unwrap().link_selection())
    }

    pub fn link_action(self: &Arc<Self>) -> LinkAction {
        self.inner.lock().unwrap().value().link_action().into()
    }

    pub fn submit(self: &Arc<Self>) -> SheetUpdate {
        self.inner.lock().unwrap().submit().into()
    }

    pub fn remove(self: &Arc<Self>) -> SheetUpdate {
        self.inner.lock().unwrap().remove().into()
    }
}
