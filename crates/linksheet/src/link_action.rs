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

//! The link action available at the current selection, used by hosts to
//! decide which mode the link sheet opens in.

use crate::{Format, FormatKind, RichTextValue};

/// What a link button should do for the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Collapsed cursor outside any link: the sheet asks for text and URL.
    CreateWithText,
    /// Range selection: the sheet asks for a URL to wrap it in.
    Create,
    /// Collapsed cursor inside a link: the sheet edits it.
    Edit(String),
}

impl RichTextValue {
    /// Query the link action available at the current selection.
    pub fn link_action(&self) -> LinkAction {
        if !self.is_collapsed() {
            return LinkAction::Create;
        }
        if let Some(url) = self
            .get_active_format(FormatKind::Link)
            .and_then(Format::url)
        {
            return LinkAction::Edit(url.to_owned());
        }
        LinkAction::CreateWithText
    }
}
