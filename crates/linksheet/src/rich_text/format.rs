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

//! Format annotations.
//!
//! | Format         | Name               | Attributes              |
//! |----------------|--------------------|-------------------------|
//! | Link           | `"link"`           | `url`, `target`, `rel`  |
//! | Bold           | `"bold"`           | —                       |
//! | Italic         | `"italic"`         | —                       |
//! | Strikethrough  | `"strikethrough"`  | —                       |
//! | Underline      | `"underline"`      | —                       |
//! | Inline code    | `"inline_code"`    | —                       |

use strum_macros::{AsRefStr, Display, EnumString};

/// A key-value attribute pair carried by a format.
/// Mirrors the FFI `Attribute` record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// The kind of a format annotation, with a stable string name.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum FormatKind {
    Link,
    Bold,
    Italic,
    Strikethrough,
    Underline,
    InlineCode,
}

/// A tagged annotation applied to a contiguous character range.
///
/// Two formats are the same identity when both kind and attributes are
/// equal. The link selection resolver relies on this: two adjacent links
/// with different URLs never merge into one extent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format {
    kind: FormatKind,
    attributes: Vec<Attribute>,
}

impl Format {
    /// An attribute-less format of the given kind.
    pub fn new(kind: FormatKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(
        kind: FormatKind,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self { kind, attributes }
    }

    /// Build a link format for `url`.
    ///
    /// When `opens_in_new_window` is set the format also carries
    /// `target="_blank"` and `rel="noreferrer noopener"`.
    pub fn link(url: &str, opens_in_new_window: bool) -> Self {
        let mut attributes = vec![Attribute::new("url", url)];
        if opens_in_new_window {
            attributes.push(Attribute::new("target", "_blank"));
            attributes.push(Attribute::new("rel", "noreferrer noopener"));
        }
        Self {
            kind: FormatKind::Link,
            attributes,
        }
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute by key. Returns the value if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// The `url` attribute, for link formats.
    pub fn url(&self) -> Option<&str> {
        self.attribute("url")
    }
}

/// A contiguous run of code units `[start, end)` carrying one format.
/// The span form of the per-character representation, used at the FFI
/// boundary and by rendering hosts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatSpan {
    pub start: usize,
    pub end: usize,
    pub format: Format,
}
