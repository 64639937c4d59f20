//! hidg-media-keys - Multimedia key presses through a USB HID gadget
//!
//! Translates named commands such as `VOLUME_UP` or `NEXT_SONG` into raw HID
//! input reports and writes them to a Linux gadget device (`/dev/hidg0`)
//! with the press, hold and release timing host HID drivers expect.

pub mod app;
pub mod config;
pub mod device;
pub mod error;
pub mod hid;
pub mod keys;
pub mod report;
pub mod testing;

pub use config::Config;
pub use error::{Error, Result};
pub use hid::{HidReport, Transmitter, TransmitterOptions};
pub use keys::{KeyDefinition, KeyTable};
