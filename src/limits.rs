//! Dialect constants.
//!
//! The dialect is deliberately small; these values pin down the few
//! places where a count decides how a line is classified.

/// Deepest heading level. Longer `#` runs are capped, not rejected.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Minimum run of identical `-`, `*` or `_` characters forming a rule.
pub const MIN_RULE_MARKERS: usize = 3;

/// Exact number of backticks in a code fence delimiter.
pub const FENCE_BACKTICKS: usize = 3;
