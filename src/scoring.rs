//! Relevance scoring for search hits.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD_WEIGHT_DOMINANCE
//! The weights MUST satisfy these inequalities:
//!
//! ```text
//! AbnExact > Name + MaxFilterBonus
//! Name > Service + MaxFilterBonus
//! ```
//!
//! Fuzzy-filter stages add a similarity bonus in [0, 1] per stage, so a
//! single hit in a stronger field always outranks a hit in a weaker field
//! regardless of bonuses. With current values: `1000 > 100 + 1` and
//! `100 > 10 + 1`.
//!
//! Relevance is accumulated additively across matched query tokens and
//! filter stages, and exposed on every hit so callers can re-rank.

/// Which indexed field a query token matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    /// Exact ABN lookup — the high-precision key.
    AbnExact,
    Name,
    Service,
}

/// Maximum bonus a fuzzy filter stage may add to a hit's score.
pub const MAX_FILTER_BONUS: f64 = 1.0;

/// Base score contributed by one query-token match in the given field.
pub fn field_weight(field: MatchField) -> f64 {
    // INVARIANT: FIELD_WEIGHT_DOMINANCE
    // Keep gaps wider than MAX_FILTER_BONUS or filter bonuses can invert
    // the field hierarchy.
    match field {
        MatchField::AbnExact => 1000.0,
        MatchField::Name => 100.0,
        MatchField::Service => 10.0,
    }
}
