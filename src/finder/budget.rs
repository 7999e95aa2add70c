use serde::Serialize;
use tracing::debug;

use crate::finder::constants::{FALLBACK_BUDGET, PRICE_TOLERANCE};

/// Coerce free-text budget input into a whole-number budget.
///
/// The text is parsed as typed: an optional sign followed by ASCII digits,
/// with no trimming. Anything else, including non-ASCII digits, including values that do not fit a 32-bit
/// integer, falls back to 0 without surfacing an error.
pub fn parse_budget(text: &str) -> i64 {
    match text.parse::<i32>() {
        Ok(value) => i64::from(value),
        Err(err) => {
            debug!(input = text, error = %err, "budget text not numeric, using fallback");
            FALLBACK_BUDGET
        }
    }
}

/// Closed price window `[budget - tolerance, budget + tolerance]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBand {
    pub floor: i64,
    pub ceiling: i64,
}

impl PriceBand {
    pub fn for_budget(budget: i64) -> Self {
        Self {
            floor: budget.saturating_sub(PRICE_TOLERANCE),
            ceiling: budget.saturating_add(PRICE_TOLERANCE),
        }
    }

    /// Ceiling check applied before an item joins a running combination.
    /// An overflowing sum never fits.
    pub fn admits(&self, running_price: i64, item_price: i64) -> bool {
        running_price
            .checked_add(item_price)
            .is_some_and(|total| total <= self.ceiling)
    }

    /// Emission check: the total lies inside the closed band.
    pub fn contains(&self, total_price: i64) -> bool {
        (self.floor..=self.ceiling).contains(&total_price)
    }
}
