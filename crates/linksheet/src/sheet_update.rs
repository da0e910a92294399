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

//! What the host should do after a sheet handler runs.

use crate::RichTextValue;

/// Text change requested from the host editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextUpdate {
    /// Leave the document as it is.
    Keep,
    /// Replace the document value (text, formats, and selection).
    ReplaceAll(RichTextValue),
}

/// A link lifecycle event the host must act on itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkEvent {
    None,
    /// Unlink the range the sheet was opened for.
    Removed,
}

/// How urgently a screen reader should speak an announcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Politeness {
    Polite,
    Assertive,
}

/// A spoken accessibility announcement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub message: String,
    pub politeness: Politeness,
}

impl Announcement {
    pub fn assertive(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            politeness: Politeness::Assertive,
        }
    }
}

/// The outcome of a sheet handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetUpdate {
    pub text_update: TextUpdate,
    pub link_event: LinkEvent,
    pub announcement: Option<Announcement>,
    /// Whether the sheet should be closed.
    pub dismiss: bool,
}

impl SheetUpdate {
    /// Nothing changed; the sheet stays open.
    pub fn keep() -> Self {
        Self {
            text_update: TextUpdate::Keep,
            link_event: LinkEvent::None,
            announcement: None,
            dismiss: false,
        }
    }

    /// A committed edit: new document value, announcement, sheet closed.
    pub(crate) fn replace_all(
        value: RichTextValue,
        announcement: Announcement,
    ) -> Self {
        Self {
            text_update: TextUpdate::ReplaceAll(value),
            link_event: LinkEvent::None,
            announcement: Some(announcement),
            dismiss: true,
        }
    }

    /// Link removal requested; the host unlinks, the sheet closes.
    pub(crate) fn removed() -> Self {
        Self {
            text_update: TextUpdate::Keep,
            link_event: LinkEvent::Removed,
            announcement: None,
            dismiss: true,
        }
    }
}
