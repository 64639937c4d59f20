//! Deterministic stand-ins for the device sink and the hold clock
//!
//! A `ManualClock` advances virtual time instead of sleeping. A
//! `RecordingSink` built with `with_clock` shares the clock's event log, so
//! writes and waits can be checked in the order they happened.

use crate::hid::Clock;
use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

/// One observed action on a sink or clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Write { bytes: Vec<u8> },
    Sleep(Duration),
}

type EventLog = Rc<RefCell<Vec<SinkEvent>>>;

/// Clock that records waits and returns immediately
#[derive(Debug, Default)]
pub struct ManualClock {
    events: EventLog,
    elapsed: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time slept
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Sleep(d) => Some(*d),
                SinkEvent::Write { .. } => None,
            })
            .collect()
    }
}

impl Clock for ManualClock {
    fn sleep(&self, duration: Duration) {
        self.elapsed.set(self.elapsed.get() + duration);
        self.events.borrow_mut().push(SinkEvent::Sleep(duration));
    }
}

/// Sink that records each write call as a separate report
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: EventLog,
    flushes: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share the event log of `clock`
    pub fn with_clock(clock: &ManualClock) -> Self {
        Self {
            events: Rc::clone(&clock.events),
            flushes: 0,
        }
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.borrow().clone()
    }

    /// Bytes of each write, in order
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Write { bytes } => Some(bytes.clone()),
                SinkEvent::Sleep(_) => None,
            })
            .collect()
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Write for RecordingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.events.borrow_mut().push(SinkEvent::Write {
            bytes: buf.to_vec(),
        });
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Sink whose write number `fail_on` (zero based) fails with `BrokenPipe`
#[derive(Debug)]
pub struct FailingSink {
    fail_on: usize,
    attempts: usize,
    written: Vec<Vec<u8>>,
}

impl FailingSink {
    pub fn new(fail_on: usize) -> Self {
        Self {
            fail_on,
            attempts: 0,
            written: Vec::new(),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Writes that succeeded before the failure
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.written.clone()
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let attempt = self.attempts;
        self.attempts += 1;
        if attempt == self.fail_on {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device closed"));
        }
        self.written.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_accumulates() {
        let clock = ManualClock::new();
        clock.sleep(Duration::from_millis(100));
        clock.sleep(Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(350));
        assert_eq!(clock.sleeps().len(), 2);
    }

    #[test]
    fn recording_sink_shares_clock_log() {
        let clock = ManualClock::new();
        let mut sink = RecordingSink::with_clock(&clock);
        sink.write_all(&[1, 2]).unwrap();
        clock.sleep(Duration::from_millis(1));
        sink.write_all(&[0, 0]).unwrap();
        sink.flush().unwrap();

        assert_eq!(sink.events().len(), 3);
        assert_eq!(sink.writes(), vec![vec![1, 2], vec![0, 0]]);
        assert_eq!(sink.flushes(), 1);
    }

    #[test]
    fn failing_sink_fails_on_requested_write() {
        let mut sink = FailingSink::new(1);
        assert!(sink.write_all(&[1]).is_ok());
        assert!(sink.write_all(&[2]).is_err());
        assert_eq!(sink.attempts(), 2);
        assert_eq!(sink.written(), vec![vec![1]]);
    }
}
