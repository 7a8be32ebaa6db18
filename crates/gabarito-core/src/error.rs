//! Label-parse error types.
//!
//! The scoring functions themselves never fail; unknown labels fall back to
//! documented defaults. These errors exist for callers that want strict
//! parsing (`FromStr`) instead of the lenient `from_label` variants.

use thiserror::Error;

/// Errors from strict difficulty/level label parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLabelError {
    /// The string is not a known arithmetic difficulty tier.
    #[error("unknown difficulty tier: {0}")]
    UnknownTier(String),

    /// The string is not a known project difficulty tier.
    #[error("unknown project tier: {0}")]
    UnknownProjectTier(String),
}
