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

//! Declarative description of the sheet surface.
//!
//! The host platform owns the modal, its animation, and its styling; it
//! renders whatever [`LinkSheet::layout`] describes. The description has
//! no state of its own — it reflects the sheet's three local fields.

use super::LinkSheet;

/// Which soft keyboard a text field should raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardKind {
    Default,
    Url,
}

/// A labelled single-line text input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextField {
    pub label: String,
    pub value: String,
    pub keyboard: KeyboardKind,
}

/// A labelled on/off switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleField {
    pub label: String,
    pub value: bool,
}

/// The sheet surface: a header row with the remove and done actions, a
/// URL field, a label field, and the new-window toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    pub title: String,
    pub remove_label: String,
    pub done_label: String,
    pub url_field: TextField,
    pub text_field: TextField,
    pub new_window_toggle: ToggleField,
}

impl LinkSheet {
    /// Describe the sheet surface for the host to render.
    pub fn layout(&self) -> SheetLayout {
        SheetLayout {
            title: "Link Settings".to_owned(),
            remove_label: "Remove".to_owned(),
            done_label: "Done".to_owned(),
            url_field: TextField {
                label: "URL".to_owned(),
                value: self.input_value.clone(),
                keyboard: KeyboardKind::Url,
            },
            text_field: TextField {
                label: "Link Text".to_owned(),
                value: self.text.clone(),
                keyboard: KeyboardKind::Default,
            },
            new_window_toggle: ToggleField {
                label: "Open in a new window".to_owned(),
                value: self.opens_in_new_window,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{KeyboardKind, LinkSheet, RichTextValue};

    fn sheet() -> LinkSheet {
        let value = RichTextValue::from_text("hello").select(2, 2);
        LinkSheet::new(value, false, None)
    }

    #[test]
    fn layout_labels_are_fixed() {
        let layout = sheet().layout();
        assert_eq!(layout.title, "Link Settings");
        assert_eq!(layout.remove_label, "Remove");
        assert_eq!(layout.done_label, "Done");
        assert_eq!(layout.url_field.label, "URL");
        assert_eq!(layout.text_field.label, "Link Text");
        assert_eq!(layout.new_window_toggle.label, "Open in a new window");
    }

    #[test]
    fn url_field_raises_the_url_keyboard() {
        let layout = sheet().layout();
        assert_eq!(layout.url_field.keyboard, KeyboardKind::Url);
        assert_eq!(layout.text_field.keyboard, KeyboardKind::Default);
    }

    #[test]
    fn layout_reflects_local_state() {
        let mut sheet = sheet();
        sheet.set_url("https://matrix.org");
        sheet.set_text("Matrix");
        sheet.set_opens_in_new_window(true);

        let layout = sheet.layout();
        assert_eq!(layout.url_field.value, "https://matrix.org");
        assert_eq!(layout.text_field.value, "Matrix");
        assert!(layout.new_window_toggle.value);
    }

    #[test]
    fn layout_tracks_field_changes() {
        let mut sheet = sheet();
        sheet.set_url("https://one.example");
        assert_eq!(sheet.layout().url_field.value, "https://one.example");
        sheet.set_url("https://two.example");
        assert_eq!(sheet.layout().url_field.value, "https://two.example");
    }
}
