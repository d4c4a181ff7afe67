//! CLI argument parsing with clap, and command execution.

use crate::config::Config;
use crate::output::{render_check_report, render_comparison_report, to_json};
use crate::processing::log_overlapping_pairs;
use crate::{compare_ip_sets, extract_and_check_ips};
use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ip-overlap-check")]
#[command(version, about = "Find overlapping IPv4 networks in pasted text and compare network lists")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, value_enum, env = "IPCHECK_FORMAT", default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract addresses from text and report invalid tokens and overlaps
    Check {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Compare the networks found in two inputs
    Compare {
        /// First input file
        first: PathBuf,
        /// Second input file
        second: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Read at most `max_input_bytes + 1` bytes, so an oversized input is
/// detected without loading all of it.
fn read_bounded<R: Read>(reader: R, name: &str, config: &Config) -> Result<String, Box<dyn Error>> {
    let mut bytes = Vec::new();
    reader
        .take(config.max_input_bytes as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| format!("Error reading {name}: {e}"))?;
    config.check_input_size(name, bytes.len())?;
    String::from_utf8(bytes).map_err(|e| format!("Input {name} is not valid UTF-8: {e}").into())
}

/// Read one input, refusing it if it exceeds the configured size.
fn read_input(path: Option<&Path>, config: &Config) -> Result<String, Box<dyn Error>> {
    let (name, text) = match path {
        Some(path) => {
            let name = path.display().to_string();
            let file = std::fs::File::open(path)
                .map_err(|e| format!("Error reading input file {name}: {e}"))?;
            let len = file
                .metadata()
                .map_err(|e| format!("Error reading input file {name}: {e}"))?
                .len();
            config.check_input_size(&name, usize::try_from(len).unwrap_or(usize::MAX))?;
            let text = read_bounded(file, &name, config)?;
            (name, text)
        }
        None => {
            let name = "stdin".to_string();
            let text = read_bounded(std::io::stdin(), &name, config)?;
            (name, text)
        }
    };
    log::info!("Read {} bytes from {name}", text.len());
    Ok(text)
}

/// Run `command` and return the rendered report.
pub fn execute(
    command: &Commands,
    format: OutputFormat,
    config: &Config,
) -> Result<String, Box<dyn Error>> {
    match command {
        Commands::Check { file } => {
            let text = read_input(file.as_deref(), config)?;
            let result = extract_and_check_ips(&text);
            log_overlapping_pairs(&result.overlapping_pairs);
            if !result.invalid_strings.is_empty() {
                log::warn!(
                    "Skipped {} invalid token(s): {:?}",
                    result.invalid_strings.len(),
                    result.invalid_strings
                );
            }
            match format {
                OutputFormat::Text => Ok(render_check_report(&result)),
                OutputFormat::Json => to_json(&result),
            }
        }
        Commands::Compare { first, second } => {
            let first = extract_and_check_ips(&read_input(Some(first.as_path()), config)?);
            let second = extract_and_check_ips(&read_input(Some(second.as_path()), config)?);
            let result = compare_ip_sets(&first.valid_networks, &second.valid_networks);
            log::info!(
                "Compared {} and {} networks, identical={}",
                result.total_first,
                result.total_second,
                result.identical
            );
            match format {
                OutputFormat::Text => Ok(render_comparison_report(&result)),
                OutputFormat::Json => to_json(&result),
            }
        }
    }
}
