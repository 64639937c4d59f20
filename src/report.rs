//! Transmission report and export functionality

use crate::hid::Transmission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Everything sent during one invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Transmissions in the order they were sent
    pub transmissions: Vec<TransmissionEntry>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Report generation timestamp
    pub generated_at: String,
    /// Application version
    pub version: String,
    /// Device the reports were written to
    pub device: String,
}

/// Single press/release cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransmissionEntry {
    pub key: String,
    /// Key-down report as hex
    pub press: String,
    /// Key-up report as hex
    pub release: String,
    pub hold_secs: f64,
    pub started_at: String,
    pub finished_at: String,
}

impl From<&Transmission> for TransmissionEntry {
    fn from(t: &Transmission) -> Self {
        Self {
            key: t.key.clone(),
            press: t.press.to_hex(),
            release: t.release.to_hex(),
            hold_secs: t.hold.as_secs_f64(),
            started_at: t.started_at.to_rfc3339(),
            finished_at: t.finished_at.to_rfc3339(),
        }
    }
}

impl SessionReport {
    /// Create a new session report
    pub fn new(device: &Path, transmissions: &[Transmission]) -> Self {
        let now: DateTime<Utc> = Utc::now();
        Self {
            metadata: ReportMetadata {
                generated_at: now.to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                device: device.display().to_string(),
            },
            transmissions: transmissions.iter().map(TransmissionEntry::from).collect(),
        }
    }

    /// Export report to JSON file
    pub fn export_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Export report to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
