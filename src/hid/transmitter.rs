//! Press/hold/release transmission against a writable sink
//!
//! Every transmission is exactly two writes: the key-down report, then after
//! the key's hold duration an all-zero key-up report. Hosts treat a missing
//! key-up report as a stuck key. Writes are not retried; a failure on either
//! write aborts the transmission, which can leave the key asserted on the
//! host if the key-down write already landed.

use super::{Clock, HidReport, SystemClock};
use crate::error::{Error, Phase, Result};
use crate::keys::{KeyDefinition, KeyTable, WAKE_KEY};
use chrono::{DateTime, Utc};
use log::{log, Level};
use std::io::Write;
use std::time::Duration;

/// Settings fixed when the transmitter is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransmitterOptions {
    /// Trace each write and wait at `info` instead of `trace`
    pub verbose: bool,
}

/// Record of one completed press/release cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Transmission {
    pub key: String,
    pub press: HidReport,
    pub release: HidReport,
    pub hold: Duration,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Drives the timed press/release sequence
#[derive(Debug, Clone)]
pub struct Transmitter<C = SystemClock> {
    clock: C,
    options: TransmitterOptions,
}

impl Transmitter<SystemClock> {
    /// Transmitter that waits in real time
    pub fn new(options: TransmitterOptions) -> Self {
        Self::with_clock(SystemClock, options)
    }
}

impl<C: Clock> Transmitter<C> {
    pub fn with_clock(clock: C, options: TransmitterOptions) -> Self {
        Self { clock, options }
    }

    fn level(&self) -> Level {
        if self.options.verbose {
            Level::Info
        } else {
            Level::Trace
        }
    }

    fn write_report<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        report: &HidReport,
        phase: Phase,
    ) -> Result<()> {
        log!(self.level(), "Writing {} report {}", phase, report);
        sink.write_all(report.as_bytes())
            .and_then(|_| sink.flush())
            .map_err(|source| Error::Write { phase, source })
    }

    /// Send the key-down report, hold, then send the key-up report
    pub fn transmit<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        key: &str,
        definition: &KeyDefinition,
    ) -> Result<Transmission> {
        let press = HidReport::press(definition);
        let release = HidReport::release();
        let hold = definition.hold_duration();
        let started_at = Utc::now();

        self.write_report(sink, &press, Phase::KeyDown)?;

        log!(
            self.level(),
            "Holding {} for {:.3} second(s)...",
            key,
            hold.as_secs_f64()
        );
        self.clock.sleep(hold);

        self.write_report(sink, &release, Phase::KeyUp)?;

        Ok(Transmission {
            key: key.to_string(),
            press,
            release,
            hold,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Resolve `key` and transmit it, optionally preceded by a full wake cycle.
    ///
    /// The key name is validated before anything is written. The wake
    /// transmission's key-up write completes before the key's key-down
    /// write starts.
    pub fn send<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        table: &KeyTable,
        key: &str,
        wake: bool,
    ) -> Result<Vec<Transmission>> {
        let definition = table.lookup(key)?;
        let mut sent = Vec::with_capacity(2);

        if wake {
            let wake_definition = table.lookup(WAKE_KEY)?;
            log!(self.level(), "Waking host before sending {}", key);
            sent.push(self.transmit(sink, WAKE_KEY, &wake_definition)?);
        }

        log!(self.level(), "Sending {}", key);
        sent.push(self.transmit(sink, key, &definition)?);
        Ok(sent)
    }
}
