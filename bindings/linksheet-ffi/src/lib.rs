mod ffi_link_actions;
mod ffi_link_sheet;
mod ffi_rich_text;
mod ffi_sheet_layout;
mod ffi_sheet_update;

pub use crate::ffi_link_actions::LinkAction;
pub use crate::ffi_link_sheet::{new_link_sheet, LinkSheet, SheetError};
pub use crate::ffi_rich_text::{
    Attribute, Format, FormatKind, FormatSpan, RichTextValue,
};
pub use crate::ffi_sheet_layout::{
    KeyboardKind, SheetLayout, TextField, ToggleField,
};
pub use crate::ffi_sheet_update::{
    Announcement, LinkEvent, Politeness, SheetUpdate, TextUpdate,
};

uniffi::setup_scaffolding!();
