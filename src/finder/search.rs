use tracing::{debug, trace};

use crate::finder::budget::PriceBand;
use crate::models::{Combination, MenuItem, NutritionTotals};

/// Find every menu-order combination whose price lands near the budget.
///
/// For each starting index the search walks forward through the menu,
/// appending each item whose price still keeps the running total at or under
/// `budget + 10`. Items that would overshoot are skipped, and the walk carries
/// on with the same running state, so a cheaper later item can still join.
/// After every append, a copy of the running combination is emitted if its
/// total lies in `[budget - 10, budget + 10]`.
///
/// Results are ordered by starting index, then by length within one start.
/// The function is total: an empty menu or any budget simply yields fewer
/// (or no) results.
pub fn find_combinations(budget: i64, menu: &[MenuItem]) -> Vec<Combination> {
    let band = PriceBand::for_budget(budget);
    let mut found = Vec::new();

    for start in 0..menu.len() {
        let mut running: Vec<MenuItem> = Vec::new();
        let mut running_price: i64 = 0;
        let mut running_totals = NutritionTotals::default();

        for item in &menu[start..] {
            if !band.admits(running_price, item.price) {
                continue;
            }

            running.push(item.clone());
            running_price += item.price;
            running_totals.add(item);

            if band.contains(running_price) {
                trace!(
                    start,
                    items = running.len(),
                    price = running_price,
                    calories = running_totals.calories,
                    "combination in band"
                );
                found.push(Combination::new(running.clone()));
            }
        }
    }

    debug!(
        budget,
        floor = band.floor,
        ceiling = band.ceiling,
        menu_items = menu.len(),
        combinations = found.len(),
        "combination search complete"
    );

    found
}
