//! HID report encoding and the timed press/release protocol

mod clock;
mod report;
mod transmitter;

pub use clock::{Clock, SystemClock};
pub use report::{HidReport, REPORT_LEN};
pub use transmitter::{Transmission, Transmitter, TransmitterOptions};
