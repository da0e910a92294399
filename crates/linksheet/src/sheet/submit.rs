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

//! Submit and remove handlers.

use log::{debug, warn};

use super::LinkSheet;
use crate::url_utils::{is_valid_href, prepend_http};
use crate::{Announcement, Format, RichTextValue, SheetUpdate};

impl LinkSheet {
    /// Commit the sheet: apply exactly one of three mutations and close.
    ///
    /// In order:
    /// 1. collapsed selection and no active link — insert the label (or
    ///    the URL, when the label is empty) at the cursor, fully covered
    ///    by the link format;
    /// 2. the label differs from the selected text — replace the selected
    ///    span with the label, reapplying the formats;
    /// 3. otherwise — reapply the formats over the selection, leaving the
    ///    text alone.
    ///
    /// The URL is normalized first, and any formats pending on the
    /// resolved selection are carried onto the mutated span. The edit is
    /// committed even when the URL looks invalid; that case only swaps the
    /// announcement for a warning.
    pub fn submit(&self) -> SheetUpdate {
        let link = self.link_selection();
        let url = prepend_http(&self.input_value);

        let link_text = if self.text.is_empty() {
            self.input_value.clone()
        } else {
            self.text.clone()
        };

        let mut formats = link.pending_formats().to_vec();
        formats.push(Format::link(&url, self.opens_in_new_window));

        let new_value = if link.is_collapsed() && !self.is_active {
            debug!("inserting a new link at the cursor");
            link.insert_at_selection(&styled(&link_text, &formats))
        } else if self.text != link.selected_text() {
            debug!("replacing the link label");
            link.insert(
                &styled(&self.text, &formats),
                link.sel_start(),
                link.sel_end(),
            )
        } else {
            debug!("reapplying the link format over the selection");
            link.apply_formats(&formats, link.sel_start(), link.sel_end())
        };

        let announcement = if !is_valid_href(&url) {
            warn!("link committed with a questionable url: {url}");
            Announcement::assertive(
                "Warning: the link has been inserted but may have errors. \
                 Please test it.",
            )
        } else if self.is_active {
            Announcement::assertive("Link edited.")
        } else {
            Announcement::assertive("Link inserted")
        };

        SheetUpdate::replace_all(new_value, announcement)
    }

    /// Ask the host to unlink and close the sheet. Unsaved field edits are
    /// discarded with it.
    pub fn remove(&self) -> SheetUpdate {
        SheetUpdate::removed()
    }
}

/// A value holding `text` with `formats` covering all of it.
fn styled(text: &str, formats: &[Format]) -> RichTextValue {
    let value = RichTextValue::from_text(text);
    let len = value.len_utf16();
    value.apply_formats(formats, 0, len)
}
