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

//! Model code to power the link settings sheet of a mobile rich text
//! editor.
//!
//! The host editor hands the sheet a [`RichTextValue`] — styled text with
//! a selection — when the user taps the link button. The sheet resolves
//! the link under the cursor, lets the user edit the URL, label, and
//! new-window flag, and on submit derives a new value for the host to
//! apply, along with an accessibility announcement. All offsets are
//! UTF-16 code units, matching platform text APIs.
//!
//! Platform shells consume this crate through the `linksheet-ffi`
//! bindings.

mod link_action;
mod rich_text;
mod sheet;
mod sheet_update;
mod url_utils;

pub use link_action::LinkAction;
pub use rich_text::{
    Attribute, Format, FormatKind, FormatSpan, RichTextValue, ValueError,
};
pub use sheet::{
    KeyboardKind, LinkSheet, SheetLayout, TextField, ToggleField,
};
pub use sheet_update::{
    Announcement, LinkEvent, Politeness, SheetUpdate, TextUpdate,
};
pub use url_utils::{is_valid_href, prepend_http};
