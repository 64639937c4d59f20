//! Fixed 8-byte input report written to the gadget device
//!
//! | Byte | Contents |
//! |------|----------|
//! | 0 | control code |
//! | 1 | multimedia button bitmask |
//! | 2 | keyboard usage |
//! | 3-7 | zero |

use crate::keys::KeyDefinition;
use std::fmt;

/// Report length expected by the pre-configured HID function
pub const REPORT_LEN: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HidReport([u8; REPORT_LEN]);

impl HidReport {
    /// The "no buttons pressed" report
    pub const fn release() -> Self {
        Self([0; REPORT_LEN])
    }

    /// Key-down report for a definition
    pub const fn press(definition: &KeyDefinition) -> Self {
        let mut buf = [0; REPORT_LEN];
        buf[0] = definition.control_code;
        buf[1] = definition.reserved_bitmask;
        buf[2] = definition.keyboard_usage;
        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8; REPORT_LEN] {
        &self.0
    }

    pub fn is_release(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Lowercase hex with no separators, e.g. `0220000000000000`
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for HidReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|b| format!("{:02X}", b)).collect();
        write!(f, "[{}]", parts.join(" "))
    }
}
