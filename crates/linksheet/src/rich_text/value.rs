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

//! The [`RichTextValue`] type and its operations.

use thiserror::Error;
use widestring::Utf16String;

use super::{Format, FormatKind, FormatSpan};

/// Error building a value from untrusted span/selection indices.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error(
        "format span {start}..{end} is out of bounds for text of length {len}"
    )]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
    #[error(
        "selection {start}..{end} is out of bounds for text of length {len}"
    )]
    SelectionOutOfBounds { start: usize, end: usize, len: usize },
}

/// Styled text with a selection.
///
/// Text is stored as UTF-16 code units and every offset in this API is a
/// UTF-16 code-unit offset, matching platform text APIs. `formats[i]` holds
/// the set of formats active on code unit `i`; the invariant
/// `formats.len() == text.len()` holds for every value this type produces.
///
/// A selection with `start == end` is a collapsed cursor. Backward
/// selections (`start > end`) are legal; operations normalise them with
/// [`sel_start`](Self::sel_start) / [`sel_end`](Self::sel_end).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RichTextValue {
    text: Utf16String,
    formats: Vec<Vec<Format>>,
    start: usize,
    end: usize,

    /// Formats toggled at a collapsed cursor, applied to the next insertion.
    pending_formats: Vec<Format>,
}

impl RichTextValue {
    /// An empty value with a cursor at position 0.
    pub fn new() -> Self {
        Self {
            text: Utf16String::new(),
            formats: Vec::new(),
            start: 0,
            end: 0,
            pending_formats: Vec::new(),
        }
    }

    /// An unformatted value holding `text`, cursor at position 0.
    pub fn from_text(text: &str) -> Self {
        let text = Utf16String::from_str(text);
        let formats = vec![Vec::new(); text.len()];
        let value = Self {
            text,
            formats,
            start: 0,
            end: 0,
            pending_formats: Vec::new(),
        };
        value.assert_invariants();
        value
    }

    /// Build a value from text, format spans, and a selection.
    ///
    /// This is the form values arrive in from host platforms; the indices
    /// are untrusted and validated here rather than clamped silently.
    pub fn with_spans(
        text: &str,
        spans: &[FormatSpan],
        start: usize,
        end: usize,
    ) -> Result<Self, ValueError> {
        let text = Utf16String::from_str(text);
        let len = text.len();

        if start.max(end) > len {
            return Err(ValueError::SelectionOutOfBounds { start, end, len });
        }

        let mut formats: Vec<Vec<Format>> = vec![Vec::new(); len];
        for span in spans {
            if span.start > span.end || span.end > len {
                return Err(ValueError::SpanOutOfBounds {
                    start: span.start,
                    end: span.end,
                    len,
                });
            }
            for set in &mut formats[span.start..span.end] {
                set.retain(|f| f.kind() != span.format.kind());
                set.push(span.format.clone());
            }
        }

        let value = Self {
            text,
            formats,
            start,
            end,
            pending_formats: Vec::new(),
        };
        value.assert_invariants();
        Ok(value)
    }

    /// The text length in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the selection is a pure cursor position.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Raw selection start, as set (may exceed end for backward selections).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Raw selection end, as set.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Selection start, ensuring start <= end.
    pub fn sel_start(&self) -> usize {
        self.start.min(self.end)
    }

    /// Selection end, ensuring start <= end.
    pub fn sel_end(&self) -> usize {
        self.start.max(self.end)
    }

    /// The full text, formatting stripped.
    pub fn text_content(&self) -> String {
        self.text.to_string()
    }

    /// The text covered by the selection, formatting stripped.
    pub fn selected_text(&self) -> String {
        self.text[self.sel_start()..self.sel_end()].to_string()
    }

    /// Formats active on code unit `index`; empty when out of range.
    pub fn format_at(&self, index: usize) -> &[Format] {
        self.formats.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether code unit `index` carries exactly `format`.
    /// Out-of-range indices carry nothing.
    pub fn has_format_at(&self, index: usize, format: &Format) -> bool {
        self.format_at(index).contains(format)
    }

    /// Formats pending at a collapsed cursor.
    pub fn pending_formats(&self) -> &[Format] {
        &self.pending_formats
    }

    /// The active format of the given kind at the selection, if any.
    ///
    /// Pending formats win. For a collapsed cursor the code unit after the
    /// cursor is checked first, then the one before it, so a cursor sitting
    /// at the trailing edge of a link still resolves it.
    pub fn get_active_format(&self, kind: FormatKind) -> Option<&Format> {
        if let Some(format) =
            self.pending_formats.iter().find(|f| f.kind() == kind)
        {
            return Some(format);
        }

        let start = self.sel_start();
        let find = |set: &[Format]| -> bool {
            set.iter().any(|f| f.kind() == kind)
        };

        if find(self.format_at(start)) {
            return self.format_at(start).iter().find(|f| f.kind() == kind);
        }
        if self.is_collapsed() && start > 0 && find(self.format_at(start - 1))
        {
            return self
                .format_at(start - 1)
                .iter()
                .find(|f| f.kind() == kind);
        }
        None
    }

    /// A copy of this value with the selection set to `[start, end)`,
    /// clamped to the text bounds. Pending formats are cleared, as any
    /// selection change invalidates them.
    pub fn select(&self, start: usize, end: usize) -> Self {
        let len = self.text.len();
        let mut value = self.clone();
        value.start = start.min(len);
        value.end = end.min(len);
        value.pending_formats.clear();
        value.assert_invariants();
        value
    }

    /// The sub-value covering `[start, end)`, clamped to the text bounds.
    /// The slice carries no selection of its own.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let len = self.text.len();
        let end = end.min(len);
        let start = start.min(end);

        let value = Self {
            text: self.text[start..end].to_owned(),
            formats: self.formats[start..end].to_vec(),
            start: 0,
            end: 0,
            pending_formats: Vec::new(),
        };
        value.assert_invariants();
        value
    }

    /// Replace `[start, end)` with another value, splicing its text and
    /// formats in. The caret collapses after the insertion.
    pub fn insert(
        &self,
        to_insert: &RichTextValue,
        start: usize,
        end: usize,
    ) -> Self {
        let len = self.text.len();
        let lo = start.min(end).min(len);
        let hi = start.max(end).min(len);

        let mut text = self.text[..lo].to_owned();
        text.push_utfstr(&to_insert.text);
        text.push_utfstr(&self.text[hi..]);

        let mut formats = self.formats[..lo].to_vec();
        formats.extend_from_slice(&to_insert.formats);
        formats.extend_from_slice(&self.formats[hi..]);

        let caret = lo + to_insert.text.len();
        let value = Self {
            text,
            formats,
            start: caret,
            end: caret,
            pending_formats: Vec::new(),
        };
        value.assert_invariants();
        value
    }

    /// Replace the current selection with another value.
    pub fn insert_at_selection(&self, to_insert: &RichTextValue) -> Self {
        self.insert(to_insert, self.sel_start(), self.sel_end())
    }

    /// Apply formats over `[start, end)`, clamped to the text bounds.
    ///
    /// An existing format of the same kind is replaced, so re-linking a
    /// span refreshes the URL rather than stacking links. On a collapsed
    /// range the formats are recorded as pending instead and will cover the
    /// next insertion.
    pub fn apply_formats(
        &self,
        formats: &[Format],
        start: usize,
        end: usize,
    ) -> Self {
        let len = self.text.len();
        let end = end.min(len);
        let start = start.min(end);

        let mut value = self.clone();
        if start == end {
            for format in formats {
                value
                    .pending_formats
                    .retain(|f| f.kind() != format.kind());
                value.pending_formats.push(format.clone());
            }
        } else {
            for set in &mut value.formats[start..end] {
                for format in formats {
                    set.retain(|f| f.kind() != format.kind());
                    set.push(format.clone());
                }
            }
        }
        value.assert_invariants();
        value
    }

    /// Remove every format of the given kind from `[start, end)`.
    /// On a collapsed range the pending format of that kind is dropped.
    pub fn remove_format(
        &self,
        kind: FormatKind,
        start: usize,
        end: usize,
    ) -> Self {
        let len = self.text.len();
        let end = end.min(len);
        let start = start.min(end);

        let mut value = self.clone();
        if start == end {
            value.pending_formats.retain(|f| f.kind() != kind);
        } else {
            for set in &mut value.formats[start..end] {
                set.retain(|f| f.kind() != kind);
            }
        }
        value.assert_invariants();
        value
    }

    /// Coalesce the per-code-unit annotations into contiguous spans.
    pub fn format_spans(&self) -> Vec<FormatSpan> {
        let len = self.formats.len();
        let mut spans = Vec::new();

        for start in 0..len {
            for format in &self.formats[start] {
                if start > 0 && self.formats[start - 1].contains(format) {
                    continue;
                }
                let mut end = start + 1;
                while end < len && self.formats[end].contains(format) {
                    end += 1;
                }
                spans.push(FormatSpan {
                    start,
                    end,
                    format: format.clone(),
                });
            }
        }

        spans
    }

    pub(crate) fn text(&self) -> &widestring::Utf16Str {
        &self.text
    }

    pub(crate) fn formats(&self) -> &[Vec<Format>] {
        &self.formats
    }

    #[cfg(feature = "assert-invariants")]
    fn assert_invariants(&self) {
        assert_eq!(
            self.formats.len(),
            self.text.len(),
            "formats array must parallel the text"
        );
        assert!(
            self.start.max(self.end) <= self.text.len(),
            "selection must stay within the text"
        );
    }

    #[cfg(not(feature = "assert-invariants"))]
    fn assert_invariants(&self) {}
}

impl Default for RichTextValue {
    fn default() -> Self {
        Self::new()
    }
}
