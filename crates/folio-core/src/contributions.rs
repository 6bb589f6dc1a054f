//! GitHub contribution counter payloads.

use serde_json::Value;

/// Extract `totalContributions` from an untyped contributions payload.
///
/// Returns `None` unless the payload is an object whose
/// `totalContributions` field is a non-negative integer.
pub fn parse_contribution_total(payload: &Value) -> Option<u64> {
    payload.as_object()?.get("totalContributions")?.as_u64()
}
