// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::RichTextValue;

/// The link settings sheet model.
///
/// Local editable state is exactly three fields: the URL input, the link
/// label text, and the opens-in-new-window flag. State changes go through
/// the explicit setters; there is no implicit binding to the document
/// value, which stays read-only until [`submit`](Self::submit) derives a
/// new one.
pub struct LinkSheet {
    /// The document value at the moment the sheet opened.
    pub(crate) value: RichTextValue,

    /// Whether the sheet was opened on an existing link.
    pub(crate) is_active: bool,

    /// URL field content.
    pub(crate) input_value: String,

    /// Link label field content.
    pub(crate) text: String,

    /// New-window toggle.
    pub(crate) opens_in_new_window: bool,
}

impl LinkSheet {
    /// Open the sheet for `value`.
    ///
    /// `active_url` is the URL of the link the cursor sits in, when there
    /// is one; it seeds the URL field. The label field is seeded with the
    /// text of the resolved link selection, so editing a link shows its
    /// current label.
    pub fn new(
        value: RichTextValue,
        is_active: bool,
        active_url: Option<&str>,
    ) -> Self {
        let mut sheet = Self {
            value,
            is_active,
            input_value: active_url.unwrap_or_default().to_owned(),
            text: String::new(),
            opens_in_new_window: false,
        };
        sheet.text = sheet.link_selection().selected_text();
        sheet
    }

    pub fn set_url(&mut self, url: &str) {
        self.input_value = url.to_owned();
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    pub fn set_opens_in_new_window(&mut self, opens_in_new_window: bool) {
        self.opens_in_new_window = opens_in_new_window;
    }

    pub fn url(&self) -> &str {
        &self.input_value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn opens_in_new_window(&self) -> bool {
        self.opens_in_new_window
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn value(&self) -> &RichTextValue {
        &self.value
    }
}
