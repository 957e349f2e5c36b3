//! Marker-based answer extraction from completion replies.
//!
//! The reply is expected to carry a fixed marker such as `MainCategory:`.
//! When the marker is present, the reply is split on the first colon in the
//! whole text and everything after it is the answer. The first-colon split is
//! a compatibility contract: a colon inside the value passes through intact,
//! and a marker buried mid-sentence gets no special handling.

use std::fmt;

/// Sentinel label standing in for "no confident answer".
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Maximum number of manufacturer names kept from a list answer.
pub const MAX_LIST_ITEMS: usize = 4;

/// Outcome of locating a labeled value in a completion reply.
///
/// Distinguishes a recovered answer from an unparsable reply while keeping
/// the sentinel string as the default rendering, so output stays identical
/// for callers that only want the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    /// The marker was present and a value was recovered.
    Parsed(String),
    /// No marker (or no colon) in the reply; the raw text is kept so callers
    /// can log or inspect what the model actually said.
    Unrecognized(String),
}

impl LabelOutcome {
    /// The answer label, or the `Unknown` sentinel for unparsable replies.
    pub fn into_label(self) -> String {
        match self {
            LabelOutcome::Parsed(value) => value,
            LabelOutcome::Unrecognized(_) => UNKNOWN_LABEL.to_string(),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, LabelOutcome::Parsed(_))
    }
}

impl fmt::Display for LabelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelOutcome::Parsed(value) => f.write_str(value),
            LabelOutcome::Unrecognized(_) => f.write_str(UNKNOWN_LABEL),
        }
    }
}

/// Locate `marker` in a reply and recover the value after the first colon.
pub fn extract_label(reply: &str, marker: &str) -> LabelOutcome {
    if !reply.contains(marker) {
        return LabelOutcome::Unrecognized(reply.to_string());
    }
    match reply.split_once(':') {
        Some((_, rest)) => LabelOutcome::Parsed(rest.trim().to_string()),
        None => LabelOutcome::Unrecognized(reply.to_string()),
    }
}

/// Single-label extraction with sentinel rendering.
pub fn extract_labeled_value(reply: &str, marker: &str) -> String {
    extract_label(reply, marker).into_label()
}

/// List extraction: split the recovered value on commas, trim each piece,
/// drop empties, and keep at most [`MAX_LIST_ITEMS`] names. An unparsable
/// reply yields an empty list.
pub fn extract_labeled_list(reply: &str, marker: &str) -> Vec<String> {
    match extract_label(reply, marker) {
        LabelOutcome::Parsed(value) => value
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .take(MAX_LIST_ITEMS)
            .map(str::to_string)
            .collect(),
        LabelOutcome::Unrecognized(_) => Vec::new(),
    }
}
