//! One invocation: validate the request, open the device, send the key
//!
//! All validation runs before the device is opened, so a bad key name or
//! device path never leaves a report half-sent.

use crate::config::Config;
use crate::device;
use crate::error::{Error, Result};
use crate::hid::{Clock, Transmission, Transmitter, TransmitterOptions};
use crate::keys::KeyTable;
use std::path::PathBuf;

/// Request as collected from config and command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub key: Option<String>,
    pub device: PathBuf,
    pub wake: bool,
    pub verbose: bool,
}

impl Request {
    /// Request carrying the config defaults and no key
    pub fn from_config(config: &Config) -> Self {
        Self {
            key: None,
            device: config.device.path.clone(),
            wake: config.device.wake,
            verbose: config.output.verbose,
        }
    }

    /// Check the key and device without touching the device
    pub fn validate(&self, table: &KeyTable) -> Result<ValidRequest> {
        let key = match self.key.as_deref() {
            Some(k) if !k.is_empty() => k,
            _ => {
                return Err(Error::InvalidConfiguration(
                    "a key to send must be specified with -k".to_string(),
                ))
            }
        };

        table.lookup(key)?;

        if self.device.as_os_str().is_empty() {
            return Err(Error::InvalidConfiguration(
                "no HID device specified, set one with -d".to_string(),
            ));
        }

        Ok(ValidRequest {
            key: key.to_string(),
            device: self.device.clone(),
            wake: self.wake,
            options: TransmitterOptions {
                verbose: self.verbose,
            },
        })
    }
}

/// A request whose key and device have been checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub key: String,
    pub device: PathBuf,
    pub wake: bool,
    pub options: TransmitterOptions,
}

/// Validate and send a request in real time
pub fn run(request: &Request, table: &KeyTable) -> Result<Vec<Transmission>> {
    let valid = request.validate(table)?;
    let transmitter = Transmitter::new(valid.options);
    run_with(&valid, table, &transmitter)
}

/// Open the request's device and send through `transmitter`.
///
/// The device stays open for the whole wake + key sequence and is closed on
/// return, whether or not a write failed.
pub fn run_with<C: Clock>(
    request: &ValidRequest,
    table: &KeyTable,
    transmitter: &Transmitter<C>,
) -> Result<Vec<Transmission>> {
    log::debug!(
        "Requested to send {} to {}",
        request.key,
        request.device.display()
    );
    let mut sink = device::open(&request.device)?;
    transmitter.send(&mut sink, table, &request.key, request.wake)
}
