//! Logical multimedia key names and their HID encoding parameters

pub mod table;

pub use table::{
    KeyDefinition, KeyEntry, KeyTable, CONTROL_CODE, KEYBOARD_CONTROL_CODE, WAKE_KEY,
};
