//! Error types returned by the calculator.

use thiserror::Error;

/// Failure kinds for a single calculation request.
///
/// Both are detected before any arithmetic runs and carry the rejected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("invalid IPv4 address: '{0}'")]
    InvalidAddress(String),

    #[error("invalid prefix length: '{0}' (expected 0-32)")]
    InvalidPrefix(String),
}

impl CalcError {
    /// Message shown to a user of the command line tool.
    pub fn user_message(&self) -> &'static str {
        match self {
            CalcError::InvalidAddress(_) => "Please enter a valid IPv4 address.",
            CalcError::InvalidPrefix(_) => "Please enter a valid prefix length from 0 to 32.",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
