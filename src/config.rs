//! Command line arguments and environment configuration.
//!
//! Environment (optionally loaded from `.env`):
//! - `SUBNET_CALC_DEFAULT_PREFIX` - prefix used when none is given (default 24)
//! - `SUBNET_CALC_FORMAT` - `text`, `csv` or `json` (default text)
//! - `NO_COLOR` - disable colored output when set

use crate::error::{CalcError, Result};
use crate::output::OutputFormat;
use crate::processing::validate_prefix;
use clap::Parser;
use std::env;

pub const DEFAULT_PREFIX: &str = "24";
pub const ENV_DEFAULT_PREFIX: &str = "SUBNET_CALC_DEFAULT_PREFIX";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";

#[derive(Debug, Clone, Parser)]
#[command(name = "subnet-calc")]
#[command(about = "Calculate IPv4 subnet properties from an address and prefix length")]
pub struct Args {
    /// IPv4 address, e.g. 192.168.1.10 or 192.168.1.10/24
    pub address: String,

    /// Prefix length 0-32, e.g. 24 or /24
    pub prefix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Settings taken from the environment, before command line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Raw prefix text, validated only when a request falls back to it.
    pub default_prefix: String,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_prefix: DEFAULT_PREFIX.to_string(),
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_prefix =
            lookup(ENV_DEFAULT_PREFIX).unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        let format = match lookup(ENV_FORMAT) {
            Some(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("{ENV_FORMAT}: {e}, using text");
                OutputFormat::Text
            }),
            None => OutputFormat::Text,
        };
        let color = lookup("NO_COLOR").is_none();
        Config {
            default_prefix,
            format,
            color,
        }
    }

    /// Apply command line overrides.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(format) = args.format {
            self.format = format;
        }
        if args.no_color {
            self.color = false;
        }
        self
    }
}

/// A calculation request resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub address: String,
    pub prefix: String,
}

impl Request {
    /// Split `ADDRESS [PREFIX]`, falling back to the configured default prefix.
    ///
    /// An address with `/p` and a separate prefix is rejected as ambiguous.
    /// The configured default is only checked when it is the one used.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self> {
        let address = args.address.trim();
        match (address.split_once('/'), &args.prefix) {
            (Some(_), Some(prefix)) => Err(CalcError::InvalidPrefix(prefix.clone())),
            (Some((addr, prefix)), None) => Ok(Request {
                address: addr.to_string(),
                prefix: prefix.to_string(),
            }),
            (None, Some(prefix)) => Ok(Request {
                address: address.to_string(),
                prefix: prefix.clone(),
            }),
            (None, None) => {
                validate_prefix(&config.default_prefix)?;
                Ok(Request {
                    address: address.to_string(),
                    prefix: config.default_prefix.clone(),
                })
            }
        }
    }
}
