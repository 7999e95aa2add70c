use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::finder::{PriceBand, find_combinations, parse_budget};
use crate::models::{Combination, MenuItem};

/// Holds the current budget input and the combinations derived from it.
///
/// Every change to the budget text recomputes the results from scratch.
pub struct PlannerSession {
    menu: Vec<MenuItem>,
    budget_text: String,
    budget: i64,
    combinations: Vec<Combination>,
}

impl PlannerSession {
    /// Create a session over a menu with empty budget input.
    pub fn new(menu: Vec<MenuItem>) -> Self {
        let mut session = Self {
            menu,
            budget_text: String::new(),
            budget: 0,
            combinations: Vec::new(),
        };
        session.recompute();
        session
    }

    /// Replace the budget input and derive fresh results.
    pub fn set_budget_text(&mut self, text: &str) -> &[Combination] {
        self.budget_text = text.to_string();
        self.recompute();
        &self.combinations
    }

    fn recompute(&mut self) {
        self.budget = parse_budget(&self.budget_text);
        self.combinations = find_combinations(self.budget, &self.menu);
        debug!(
            budget_text = %self.budget_text,
            budget = self.budget,
            combinations = self.combinations.len(),
            "session recomputed"
        );
    }

    pub fn budget_text(&self) -> &str {
        &self.budget_text
    }

    pub fn budget(&self) -> i64 {
        self.budget
    }

    pub fn band(&self) -> PriceBand {
        PriceBand::for_budget(self.budget)
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Look up a result by its 1-based display number.
    pub fn combination(&self, number: usize) -> Option<&Combination> {
        number
            .checked_sub(1)
            .and_then(|idx| self.combinations.get(idx))
    }

    /// Like [`combination`](Self::combination), but reports a missing entry.
    pub fn require_combination(&self, number: usize) -> Result<&Combination> {
        self.combination(number)
            .ok_or(PlannerError::CombinationNotFound {
                index: number,
                available: self.combinations.len(),
            })
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Count of results for the current budget.
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    /// Check if the current budget produced no results.
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Margherita", 200, 250, 30, 10, 9),
            MenuItem::new("Pepsi 500ml", 60, 150, 40, 0, 0),
            MenuItem::new("Choco Lava Cake", 110, 200, 30, 2, 10),
        ]
    }

    #[test]
    fn test_new_session_uses_zero_budget() {
        let session = PlannerSession::new(sample_menu());
        assert_eq!(session.budget_text(), "");
        assert_eq!(session.budget(), 0);
        assert!(session.is_empty());
    }

    #[test]
    fn test_recomputes_on_each_change() {
        let mut session = PlannerSession::new(sample_menu());

        assert_eq!(session.set_budget_text("260").len(), 1);
        assert_eq!(session.combination(1).map(|c| c.total_price()), Some(260));

        // Typing another digit changes the results entirely
        assert!(session.set_budget_text("2600").is_empty());

        assert_eq!(session.set_budget_text("110").len(), 1);
        assert_eq!(session.band(), PriceBand::for_budget(110));
    }

    #[test]
    fn test_non_numeric_text_coerced() {
        let mut session = PlannerSession::new(sample_menu());
        session.set_budget_text("two hundred");
        assert_eq!(session.budget(), 0);
        assert_eq!(session.budget_text(), "two hundred");
    }

    #[test]
    fn test_combination_numbering_is_one_based() {
        let mut session = PlannerSession::new(sample_menu());
        session.set_budget_text("200");

        assert!(session.combination(0).is_none());
        assert_eq!(session.combination(1).map(|c| c.len()), Some(1));
        assert!(matches!(
            session.require_combination(5),
            Err(PlannerError::CombinationNotFound {
                index: 5,
                available: 1
            })
        ));
    }
}
