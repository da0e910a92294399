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

//! The link settings sheet.
//!
//! [`LinkSheet`] is the model behind the bottom sheet a mobile editor
//! shows for inserting or editing a hyperlink. It owns three fields of
//! local editable state and nothing else; the document value it reads is
//! owned by the host editor, and every handler returns a
//! [`SheetUpdate`](crate::SheetUpdate) describing what the host should do.

mod base;
mod layout;
mod selection;
mod submit;

pub use base::LinkSheet;
pub use layout::{KeyboardKind, SheetLayout, TextField, ToggleField};
