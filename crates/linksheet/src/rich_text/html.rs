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

//! HTML and debug-tree rendering of a [`RichTextValue`].

use super::{Format, FormatKind, RichTextValue};

impl RichTextValue {
    /// Render the value as HTML.
    ///
    /// Runs of code units sharing a format set become one tag group; tags
    /// nest in a fixed order with links outermost. Text and attribute
    /// values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();

        for (start, end) in self.format_runs() {
            let mut formats: Vec<&Format> =
                self.format_at(start).iter().collect();
            formats.sort_by_key(|f| tag_rank(f.kind()));

            for format in &formats {
                open_tag(&mut out, format);
            }
            out.push_str(&html_escape::encode_text(
                &self.text()[start..end].to_string(),
            ));
            for format in formats.iter().rev() {
                out.push_str("</");
                out.push_str(tag_name(format.kind()));
                out.push('>');
            }
        }

        out
    }

    /// Render a debug tree: the selection on one line, then one line per
    /// format run, with `|` marking a cursor and `{`/`}` a range.
    pub fn to_tree(&self) -> String {
        let sel_start = self.sel_start();
        let sel_end = self.sel_end();

        let mut out = format!("sel: ({},{})\n", self.start(), self.end());

        for (start, end) in self.format_runs() {
            let display = annotate_selection(
                &self.text()[start..end].to_string(),
                start,
                sel_start,
                sel_end,
            );

            let mut marks = String::new();
            for format in self.format_at(start) {
                if !marks.is_empty() {
                    marks.push_str(", ");
                }
                marks.push_str(&describe(format));
            }

            if marks.is_empty() {
                out.push_str(&format!("│  \"{display}\"\n"));
            } else {
                out.push_str(&format!("│  \"{display}\" [{marks}]\n"));
            }
        }

        // Cursor at the very end of the text
        if self.is_collapsed() && sel_start == self.len_utf16() {
            out.push_str("│  |\n");
        }

        out
    }

    /// Maximal runs `[start, end)` of code units sharing a format set.
    fn format_runs(&self) -> Vec<(usize, usize)> {
        let len = self.len_utf16();
        let mut runs = Vec::new();
        let mut start = 0;
        while start < len {
            let mut end = start + 1;
            while end < len && self.formats()[end] == self.formats()[start] {
                end += 1;
            }
            runs.push((start, end));
            start = end;
        }
        runs
    }
}

fn tag_name(kind: FormatKind) -> &'static str {
    match kind {
        FormatKind::Link => "a",
        FormatKind::Bold => "strong",
        FormatKind::Italic => "em",
        FormatKind::Strikethrough => "del",
        FormatKind::Underline => "u",
        FormatKind::InlineCode => "code",
    }
}

/// Nesting order: links outermost, code innermost.
fn tag_rank(kind: FormatKind) -> u8 {
    match kind {
        FormatKind::Link => 0,
        FormatKind::Bold => 1,
        FormatKind::Italic => 2,
        FormatKind::Strikethrough => 3,
        FormatKind::Underline => 4,
        FormatKind::InlineCode => 5,
    }
}

fn open_tag(out: &mut String, format: &Format) {
    out.push('<');
    out.push_str(tag_name(format.kind()));
    for attribute in format.attributes() {
        // the model's `url` attribute renders as `href`
        let name = if attribute.key == "url" {
            "href"
        } else {
            attribute.key.as_str()
        };
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(
            attribute.value.as_str(),
        ));
        out.push('"');
    }
    out.push('>');
}

fn describe(format: &Format) -> String {
    let mut s = format.kind().as_ref().to_string();
    for attribute in format.attributes() {
        s.push_str(&format!(" {}=\"{}\"", attribute.key, attribute.value));
    }
    s
}

/// Insert `|` (cursor) or `{`/`}` (range) markers into one run's text.
///
/// `run_offset` is the UTF-16 offset at which this run starts in the
/// document; `sel_start`/`sel_end` are document-level selection bounds.
fn annotate_selection(
    text: &str,
    run_offset: usize,
    sel_start: usize,
    sel_end: usize,
) -> String {
    let run_end =
        run_offset + text.chars().map(char::len_utf16).sum::<usize>();

    // A cursor on a run boundary belongs to the run after it; a cursor at
    // the very end of the text belongs to no run and is drawn by to_tree.
    let outside = if sel_start == sel_end {
        sel_start < run_offset || sel_start >= run_end
    } else {
        sel_end <= run_offset || sel_start >= run_end
    };
    if outside {
        return text.to_string();
    }

    let mut result = String::new();
    let mut pos = run_offset;
    for ch in text.chars() {
        if pos == sel_start {
            result.push(if sel_start == sel_end { '|' } else { '{' });
        }
        result.push(ch);
        pos += ch.len_utf16();
        if pos == sel_end && sel_start != sel_end {
            result.push('}');
        }
    }

    result
}
