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

//! The link selection resolver.

use log::debug;

use super::LinkSheet;
use crate::{FormatKind, RichTextValue};

impl LinkSheet {
    /// The document value with its selection expanded to the full extent
    /// of the link under the cursor.
    ///
    /// Only a collapsed cursor on an active link is expanded: the scan
    /// walks left while the preceding code unit carries the same link
    /// format (kind and attributes equal), then right, stopping at the
    /// text bounds. Anything else — a range selection, or no link at the
    /// cursor — comes back unchanged.
    pub fn link_selection(&self) -> RichTextValue {
        let value = &self.value;

        if !(self.is_active && value.is_collapsed()) {
            return value.clone();
        }
        let Some(link) =
            value.get_active_format(FormatKind::Link).cloned()
        else {
            return value.clone();
        };

        // Anchor on whichever side of the cursor carries the link, so a
        // cursor at either edge of the link still resolves its extent.
        let cursor = value.sel_start();
        let anchor = if value.has_format_at(cursor, &link) {
            cursor
        } else if cursor > 0 && value.has_format_at(cursor - 1, &link) {
            cursor - 1
        } else {
            return value.clone();
        };

        let mut start = anchor;
        while start > 0 && value.has_format_at(start - 1, &link) {
            start -= 1;
        }

        let len = value.len_utf16();
        let mut end = anchor + 1;
        while end < len && value.has_format_at(end, &link) {
            end += 1;
        }

        debug!("resolved link selection to {start}..{end}");
        value.select(start, end)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Format, FormatSpan, LinkSheet, RichTextValue};

    fn link_format() -> Format {
        Format::link("https://matrix.org", false)
    }

    fn linked_value(text: &str, start: usize, end: usize) -> RichTextValue {
        let span = FormatSpan { start, end, format: link_format() };
        RichTextValue::with_spans(text, &[span], 0, 0)
            .expect("span within bounds")
    }

    fn sheet_at(value: RichTextValue, cursor: usize) -> LinkSheet {
        LinkSheet::new(
            value.select(cursor, cursor),
            true,
            Some("https://matrix.org"),
        )
    }

    // ===================================================================
    // Expansion from inside a link
    // ===================================================================

    #[test]
    fn resolves_full_extent_from_the_middle() {
        let sheet = sheet_at(linked_value("say hello there", 4, 9), 6);
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (4, 9));
        assert_eq!(link.selected_text(), "hello");
    }

    #[test]
    fn resolves_the_same_extent_from_every_position_inside() {
        let value = linked_value("say hello there", 4, 9);
        for cursor in 4..=9 {
            let link = sheet_at(value.clone(), cursor).link_selection();
            assert_eq!(
                (link.start(), link.end()),
                (4, 9),
                "cursor at {cursor} should resolve the whole link"
            );
        }
    }

    #[test]
    fn resolves_a_single_character_link() {
        let sheet = sheet_at(linked_value("a b c", 2, 3), 2);
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (2, 3));
    }

    // ===================================================================
    // Text boundaries (the scan must not leave the array)
    // ===================================================================

    #[test]
    fn link_touching_text_start_stops_at_zero() {
        let sheet = sheet_at(linked_value("hello world", 0, 5), 2);
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (0, 5));
    }

    #[test]
    fn link_touching_text_end_stops_at_length() {
        let sheet = sheet_at(linked_value("hello world", 6, 11), 8);
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (6, 11));
    }

    #[test]
    fn link_covering_the_whole_text_resolves_everything() {
        let sheet = sheet_at(linked_value("hello", 0, 5), 3);
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (0, 5));
        // cursor at the very end of the text as well
        let link = sheet_at(linked_value("hello", 0, 5), 5).link_selection();
        assert_eq!((link.start(), link.end()), (0, 5));
    }

    // ===================================================================
    // Cases that must come back unchanged
    // ===================================================================

    #[test]
    fn range_selection_is_returned_unchanged() {
        let value = linked_value("say hello there", 4, 9).select(5, 8);
        let sheet =
            LinkSheet::new(value, true, Some("https://matrix.org"));
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (5, 8));
    }

    #[test]
    fn inactive_sheet_does_not_expand() {
        let value = linked_value("hello", 0, 5).select(2, 2);
        let sheet = LinkSheet::new(value, false, None);
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (2, 2));
    }

    #[test]
    fn cursor_with_no_link_nearby_is_returned_unchanged() {
        let value = linked_value("hello world", 0, 5);
        let sheet = sheet_at(value, 8);
        // active flag is set but the cursor is not on the link
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (8, 8));
    }

    // ===================================================================
    // Format identity
    // ===================================================================

    #[test]
    fn adjacent_links_with_different_urls_do_not_merge() {
        let spans = [
            FormatSpan {
                start: 0,
                end: 3,
                format: Format::link("https://one.example", false),
            },
            FormatSpan {
                start: 3,
                end: 6,
                format: Format::link("https://two.example", false),
            },
        ];
        let value = RichTextValue::with_spans("abcdef", &spans, 0, 0)
            .expect("valid");

        // Cursor inside the second link resolves only its own extent
        let sheet = LinkSheet::new(
            value.select(4, 4),
            true,
            Some("https://two.example"),
        );
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (3, 6));
    }

    #[test]
    fn trailing_edge_cursor_resolves_the_link_before_it() {
        let sheet = sheet_at(linked_value("hello world", 0, 5), 5);
        let link = sheet.link_selection();
        assert_eq!((link.start(), link.end()), (0, 5));
    }
}
