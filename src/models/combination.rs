use serde::Serialize;

use crate::models::MenuItem;

/// Summed nutrition of a combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NutritionTotals {
    pub calories: u64,
    pub carbs: u64,
    pub protein: u64,
    pub fat: u64,
}

impl NutritionTotals {
    /// Add one item's nutrition to the running totals.
    pub fn add(&mut self, item: &MenuItem) {
        self.calories += u64::from(item.calories);
        self.carbs += u64::from(item.carbs);
        self.protein += u64::from(item.protein);
        self.fat += u64::from(item.fat);
    }
}

/// A contiguous run of menu items, in menu order.
///
/// Totals are never cached: every accessor sums over the owned items, so a
/// combination cannot disagree with its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Combination {
    items: Vec<MenuItem>,
}

impl Combination {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_price(&self) -> i64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn totals(&self) -> NutritionTotals {
        let mut totals = NutritionTotals::default();
        for item in &self.items {
            totals.add(item);
        }
        totals
    }

    /// Item names joined with " + ", for one-line summaries.
    pub fn names(&self) -> String {
        self.items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Whether `self` extends `other` by at least one trailing item.
    pub fn is_strict_extension_of(&self, other: &Combination) -> bool {
        self.items.len() > other.items.len() && self.items.starts_with(&other.items)
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> MenuItem {
        MenuItem::new("Margherita", 200, 250, 30, 10, 9)
    }

    fn drink() -> MenuItem {
        MenuItem::new("Pepsi 500ml", 60, 150, 40, 0, 0)
    }

    #[test]
    fn test_totals_sum_every_field() {
        let combo = Combination::new(vec![pizza(), drink()]);

        assert_eq!(combo.total_price(), 260);
        assert_eq!(
            combo.totals(),
            NutritionTotals {
                calories: 400,
                carbs: 70,
                protein: 10,
                fat: 9,
            }
        );
    }

    #[test]
    fn test_empty_combination_totals_are_zero() {
        let combo = Combination::default();
        assert!(combo.is_empty());
        assert_eq!(combo.total_price(), 0);
        assert_eq!(combo.totals(), NutritionTotals::default());
    }

    #[test]
    fn test_names_joined() {
        let combo = Combination::new(vec![pizza(), drink()]);
        assert_eq!(combo.names(), "Margherita + Pepsi 500ml");
    }

    #[test]
    fn test_strict_extension() {
        let short = Combination::new(vec![pizza()]);
        let long = Combination::new(vec![pizza(), drink()]);

        assert!(long.is_strict_extension_of(&short));
        assert!(!short.is_strict_extension_of(&long));
        assert!(!short.is_strict_extension_of(&short));

        let reordered = Combination::new(vec![drink(), pizza()]);
        assert!(!reordered.is_strict_extension_of(&short));
    }
}
