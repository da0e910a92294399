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

//! The rich-text value representation.
//!
//! A [`RichTextValue`] holds text as UTF-16 code units with a parallel
//! per-code-unit array of [`Format`] annotations and a selection range.
//! Values are immutable; every operation returns a new value, so the host
//! editor keeps ownership of the document it handed in.

mod format;
mod html;
mod value;

pub use format::{Attribute, Format, FormatKind, FormatSpan};
pub use value::{RichTextValue, ValueError};
