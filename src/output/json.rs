//! JSON output for a subnet result.

use crate::models::SubnetResult;

/// Pretty printed JSON of the whole result; absent usable addresses are `null`.
pub fn render_json(result: &SubnetResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
