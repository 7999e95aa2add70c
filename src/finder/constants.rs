/// Half-width of the acceptance band around the budget, in currency units.
pub const PRICE_TOLERANCE: i64 = 10;

/// Budget used when the entered text is not a whole number.
pub const FALLBACK_BUDGET: i64 = 0;

/// Minimum Jaro-Winkler score for a fuzzy menu search hit.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy hits returned by a menu search.
pub const FUZZY_MATCH_LIMIT: usize = 5;
