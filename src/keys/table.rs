//! Static key table mapping logical names to report parameters
//!
//! Multimedia reports on the gadget carry control code `0x02` in byte 0 and
//! the button bitmask in byte 1. Standard keyboard reports use control code
//! `0x00` and put their usage in byte 2 instead.

use crate::error::Error;
use std::time::Duration;

/// Control code for multimedia (consumer control) reports
pub const CONTROL_CODE: u8 = 0x02;

/// Control code used by standard keyboard reports
pub const KEYBOARD_CONTROL_CODE: u8 = 0x00;

/// Reserved name of the priming entry sent before a real command
pub const WAKE_KEY: &str = "WAKE";

/// Keyboard usage sent by the wake entry. Unused by any printable key.
const WAKE_USAGE: u8 = 0x81;

const TAP_SECS: f64 = 0.1;
const SCRUB_SECS: f64 = 1.2;
const WAKE_SECS: f64 = 2.0;

const NEXT_BIT: u8 = 1 << 0;
const PREVIOUS_BIT: u8 = 1 << 1;
const STOP_BIT: u8 = 1 << 2;
const PLAY_BIT: u8 = 1 << 3;
const MUTE_BIT: u8 = 1 << 4;
const VOLUME_UP_BIT: u8 = 1 << 5;
const VOLUME_DOWN_BIT: u8 = 1 << 6;

/// Transmission parameters for one logical command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyDefinition {
    /// Multimedia button bit(s), 0 when no button is pressed
    pub reserved_bitmask: u8,
    /// Report type discriminant written to byte 0
    pub control_code: u8,
    /// Auxiliary usage byte, only set for the wake entry
    pub keyboard_usage: u8,
    /// Seconds the key-down report stays asserted
    pub hold_secs: f64,
}

impl KeyDefinition {
    /// A multimedia button press with the given hold time
    pub const fn media(reserved_bitmask: u8, hold_secs: f64) -> Self {
        Self {
            reserved_bitmask,
            control_code: CONTROL_CODE,
            keyboard_usage: 0x00,
            hold_secs,
        }
    }

    /// The synthetic wake press: no button, no control code, an unused usage
    pub const fn wake() -> Self {
        Self {
            reserved_bitmask: 0,
            control_code: KEYBOARD_CONTROL_CODE,
            keyboard_usage: WAKE_USAGE,
            hold_secs: WAKE_SECS,
        }
    }

    /// Hold time as a `Duration`. Negative or NaN values clamp to zero.
    pub fn hold_duration(&self) -> Duration {
        Duration::from_secs_f64(self.hold_secs.max(0.0))
    }

    /// True when at most one multimedia button is set
    pub fn is_single_button(&self) -> bool {
        self.reserved_bitmask == 0 || self.reserved_bitmask.is_power_of_two()
    }
}

/// A named entry in the key table
#[derive(Debug, Clone, Copy)]
pub struct KeyEntry {
    pub name: &'static str,
    pub definition: KeyDefinition,
}

impl KeyEntry {
    const fn new(name: &'static str, definition: KeyDefinition) -> Self {
        Self { name, definition }
    }
}

const SCRUB_FORWARD: KeyDefinition = KeyDefinition::media(NEXT_BIT, SCRUB_SECS);
const SCRUB_BACKWARD: KeyDefinition = KeyDefinition::media(PREVIOUS_BIT, SCRUB_SECS);
const NEXT_SONG: KeyDefinition = KeyDefinition::media(NEXT_BIT, TAP_SECS);
const PREVIOUS_SONG: KeyDefinition = KeyDefinition::media(PREVIOUS_BIT, TAP_SECS);

// Scrubbing is a long press of the skip buttons; there is no separate usage.
static ENTRIES: [KeyEntry; 14] = [
    KeyEntry::new(WAKE_KEY, KeyDefinition::wake()),
    KeyEntry::new("SCRUB_FORWARD", SCRUB_FORWARD),
    KeyEntry::new("FORWARD", SCRUB_FORWARD),
    KeyEntry::new("SCRUB_BACKWARD", SCRUB_BACKWARD),
    KeyEntry::new("BACKWARD", SCRUB_BACKWARD),
    KeyEntry::new("NEXT_SONG", NEXT_SONG),
    KeyEntry::new("NEXT", NEXT_SONG),
    KeyEntry::new("PREVIOUS_SONG", PREVIOUS_SONG),
    KeyEntry::new("BACK", PREVIOUS_SONG),
    // Some hosts (iPad) ignore STOP, PLAY toggles play/pause instead
    KeyEntry::new("STOP", KeyDefinition::media(STOP_BIT, TAP_SECS)),
    KeyEntry::new("PLAY", KeyDefinition::media(PLAY_BIT, TAP_SECS)),
    KeyEntry::new("MUTE", KeyDefinition::media(MUTE_BIT, TAP_SECS)),
    KeyEntry::new("VOLUME_UP", KeyDefinition::media(VOLUME_UP_BIT, TAP_SECS)),
    KeyEntry::new("VOLUME_DOWN", KeyDefinition::media(VOLUME_DOWN_BIT, TAP_SECS)),
];

/// Read-only lookup from case-sensitive key name to its definition
#[derive(Debug, Clone, Copy)]
pub struct KeyTable {
    entries: &'static [KeyEntry],
}

impl KeyTable {
    /// The built-in multimedia key table
    pub fn standard() -> Self {
        Self { entries: &ENTRIES }
    }

    /// Resolve a key name, failing with `UnknownKey` when absent
    pub fn lookup(&self, name: &str) -> Result<KeyDefinition, Error> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.definition)
            .ok_or_else(|| Error::UnknownKey {
                name: name.to_string(),
                valid: self.names_joined(),
            })
    }

    /// Every valid key name, in table order
    pub fn all_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// Valid names joined for usage and error text
    pub fn names_joined(&self) -> String {
        self.all_names().join(", ")
    }

    pub fn entries(&self) -> &'static [KeyEntry] {
        self.entries
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::standard()
    }
}
