//! Access to the USB gadget HID character device
//!
//! The gadget's HID function is configured outside this crate (configfs or
//! a legacy gadget driver). It shows up as `/dev/hidgN` and accepts raw
//! input reports through plain writes.

use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Device used when none is configured
pub const DEFAULT_DEVICE: &str = "/dev/hidg0";

/// Open the gadget device for writing.
///
/// The device is never created or truncated. The handle closes when dropped,
/// including on early returns after a failed write.
pub fn open(path: &Path) -> Result<File> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidConfiguration(
            "no HID device specified, set one with -d".to_string(),
        ));
    }

    log::debug!("Opening HID device {}", path.display());
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
}
