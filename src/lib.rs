//! IPv4 subnet calculator.
//!
//! Derives network, broadcast, usable range, masks, class and type from an
//! address and CIDR prefix length. All arithmetic is on `u32`.
//!
//! # Modules
//! - [`models`] - Data types and bit arithmetic
//! - [`processing`] - Input validation, classification and [`calculate`]
//! - [`output`] - Text, CSV and JSON rendering
//! - [`config`] - Command line and environment settings

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CalcError;
pub use models::SubnetResult;
pub use processing::{calculate, calculate_cidr};
