//! hidg-media-keys - send one multimedia key press through a USB HID gadget
//!
//! ```text
//! hidg-media-keys -k VOLUME_UP
//! hidg-media-keys -k NEXT_SONG -w -d /dev/hidg1
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::path::PathBuf;

use hidg_media_keys::{
    app::{self, Request},
    config::Config,
    device::DEFAULT_DEVICE,
    report::SessionReport,
    HidReport, KeyTable,
};

fn keypress_help() -> String {
    format!(
        "Key to send to the USB gadget HID device, must be one of ({})",
        KeyTable::standard().names_joined()
    )
}

fn device_help() -> String {
    format!("HID gadget device to write to (default: {})", DEFAULT_DEVICE)
}

/// Send multimedia key presses through a Linux USB HID gadget device.
#[derive(Parser, Debug)]
#[command(name = "hidg-media-keys", version, about)]
struct Cli {
    #[arg(short = 'k', long = "keypress", value_name = "KEY", help = keypress_help())]
    keypress: Option<String>,

    #[arg(short = 'd', long = "hid-device", value_name = "PATH", help = device_help())]
    device: Option<PathBuf>,

    /// Trace every report write and hold wait
    #[arg(short, long)]
    verbose: bool,

    /// Send an unused key press first to wake a sleeping host (e.g. an iPad
    /// in power saving mode), so it fully processes the real key press
    #[arg(short, long)]
    wake: bool,

    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print every key name with its report bytes and hold time
    #[arg(short, long)]
    list_keys: bool,

    /// Write a JSON report of the transmissions to FILE
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Save the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

/// Start the logger before anything else logs.
///
/// With `-v` the crate logs at `debug`. Otherwise only the transmitter's
/// `info` tracing passes, which is emitted when verbose output is enabled in
/// the config file. `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp_millis()
        .init();
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,hidg_media_keys=debug"
    } else {
        "warn,hidg_media_keys=info"
    }
}

fn print_keys(table: &KeyTable) {
    for entry in table.entries() {
        println!(
            "{:<15} {}  hold {:.1}s",
            entry.name,
            HidReport::press(&entry.definition),
            entry.definition.hold_secs
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(&cli)?;
    config.apply_overrides(cli.device.clone(), cli.wake, cli.verbose);

    let table = KeyTable::standard();

    if cli.list_keys {
        print_keys(&table);
        return Ok(());
    }

    if cli.write_config {
        let path = match &cli.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let mut request = Request::from_config(&config);
    request.key = cli.keypress.clone();

    let transmissions = match app::run(&request, &table) {
        Ok(sent) => sent,
        Err(e) => {
            if e.is_validation() {
                eprintln!("{}", Cli::command().render_usage());
            }
            return Err(e.into());
        }
    };

    if let Some(path) = &cli.report {
        SessionReport::new(&request.device, &transmissions)
            .export_json(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        log::debug!("Report written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_original_flags() {
        let cli = Cli::parse_from(["hidg-media-keys", "-k", "PLAY", "-d", "/dev/hidg1", "-v", "-w"]);
        assert_eq!(cli.keypress.as_deref(), Some("PLAY"));
        assert_eq!(cli.device, Some(PathBuf::from("/dev/hidg1")));
        assert!(cli.verbose);
        assert!(cli.wake);
    }

    #[test]
    fn verbose_filter_enables_crate_debug() {
        assert_eq!(default_filter(true), "warn,hidg_media_keys=debug");
        assert_eq!(default_filter(false), "warn,hidg_media_keys=info");
    }

    #[test]
    fn keypress_help_lists_keys() {
        let help = keypress_help();
        assert!(help.contains("VOLUME_UP"));
        assert!(help.contains("SCRUB_BACKWARD"));
    }
}
