use std::cmp::Ordering;

use strsim::jaro_winkler;

use crate::finder::constants::{FUZZY_MATCH_LIMIT, FUZZY_MATCH_THRESHOLD};
use crate::models::MenuItem;

/// Search menu items by name.
///
/// Exact and substring matches (case-insensitive) come first, in menu order.
/// If none exist, the best Jaro-Winkler matches above the threshold are
/// returned, best first.
pub fn search_menu<'a>(menu: &'a [MenuItem], query: &str) -> Vec<&'a MenuItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let direct: Vec<&MenuItem> = menu
        .iter()
        .filter(|item| item.key().contains(&query))
        .collect();

    if !direct.is_empty() {
        return direct;
    }

    let mut candidates: Vec<(&MenuItem, f64)> = menu
        .iter()
        .map(|item| (item, jaro_winkler(&item.key(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    candidates
        .into_iter()
        .take(FUZZY_MATCH_LIMIT)
        .map(|(item, _)| item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::builtin_menu;

    #[test]
    fn test_substring_matches_in_menu_order() {
        let hits = search_menu(builtin_menu(), "ice cream");
        let names: Vec<&str> = hits.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Vanilla Ice Cream",
                "Strawberry Ice Cream",
                "Chocolate Ice Cream",
                "Dessert Combo: Choco Lava Cake + Brownie + Ice Cream",
            ]
        );
    }

    #[test]
    fn test_fuzzy_match_on_typo() {
        let hits = search_menu(builtin_menu(), "margarita");
        assert!(!hits.is_empty());
        assert_eq!(hits[0].name, "Margherita");
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(search_menu(builtin_menu(), "   ").is_empty());
    }
}
