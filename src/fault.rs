//! Decoding of protocol faults into failure outcomes.
//!
//! The service reports faults with a generic protocol-level code and a
//! nested exception payload whose message text often embeds a more
//! specific bracketed code, e.g. `"[203] too many results"`. The decoder
//! pulls those embedded codes out and keeps the original payload intact
//! for callers.

use regex::Regex;
use serde_json::Value;

use crate::response::Outcome;

// ============ Extraction Patterns ============

/// Fault-code extraction pattern, selected per operation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultCodePattern {
    /// Codes of alphanumerics, colons and underscores, as the watchlist
    /// search family embeds them.
    #[default]
    ServiceCode,
    /// Purely numeric codes, as the business instant-ID family embeds
    /// them.
    Numeric,
}

impl FaultCodePattern {
    fn regex(&self) -> Regex {
        let pattern = match self {
            FaultCodePattern::ServiceCode => r"\[([a-zA-Z\d:_]+)\]",
            FaultCodePattern::Numeric => r"\[(\d+)\]",
        };
        Regex::new(pattern).unwrap()
    }
}

/// Extracts the first bracketed code from fault message text, if any.
pub fn extract_code(pattern: FaultCodePattern, message: &str) -> Option<String> {
    pattern
        .regex()
        .captures(message)
        .map(|captures| captures[1].to_string())
}

// ============ Fault Entries ============

/// One decoded remote exception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultEntry {
    /// Message text as returned by the service, if present.
    pub message: Option<String>,
    /// Code extracted from the message text, if one matched.
    pub code: Option<String>,
}

/// Decodes each raw exception entry into its message and embedded code.
pub fn decode_entries(pattern: FaultCodePattern, entries: &[Value]) -> Vec<FaultEntry> {
    entries
        .iter()
        .map(|entry| {
            let message = entry.get("message").and_then(Value::as_str);
            FaultEntry {
                code: message.and_then(|text| extract_code(pattern, text)),
                message: message.map(str::to_string),
            }
        })
        .collect()
}

/// Decodes a protocol fault into a failure outcome.
///
/// The service returns either a single exception object or a list; both
/// normalize to a list. The outcome's code is the first code successfully
/// extracted from an entry message, falling back to the protocol-level
/// fault code when no entry yields one — a specific embedded code always
/// wins over the generic protocol code. The original entries are
/// preserved unmodified as the outcome's errors.
pub fn decode(pattern: FaultCodePattern, fault_code: &str, exceptions: Value) -> Outcome {
    let entries = normalize_entries(exceptions);

    // The service may return one or more exceptions; log them all.
    for entry in &entries {
        tracing::warn!("screening service fault entry: {}", entry);
    }

    let code = decode_entries(pattern, &entries)
        .into_iter()
        .find_map(|entry| entry.code)
        .unwrap_or_else(|| fault_code.to_string());

    Outcome::failure(code, Value::Array(entries))
}

fn normalize_entries(exceptions: Value) -> Vec<Value> {
    match exceptions {
        Value::Array(entries) => entries,
        single => vec![single],
    }
}
