use crate::finder::PriceBand;
use crate::models::{Combination, MenuItem};

const CARD_RULE: &str = "────────────────────────────────────────";

/// Render one combination as a text card.
pub fn format_combination_card(number: usize, combination: &Combination) -> String {
    let mut lines = Vec::new();
    lines.push(format!("#{} {}", number, CARD_RULE));

    for item in combination {
        lines.push(format!("{} - ₹{}", item.name, item.price));
        lines.push(format!("  Calories: {} kcal", item.calories));
        lines.push(format!("  Carbs: {} g", item.carbs));
        lines.push(format!("  Protein: {} g", item.protein));
        lines.push(format!("  Fat: {} g", item.fat));
    }

    let totals = combination.totals();
    lines.push(String::new());
    lines.push(format!("Total: ₹{}", combination.total_price()));
    lines.push(format!("Total Calories: {} kcal", totals.calories));
    lines.push(format!("Total Carbs: {} g", totals.carbs));
    lines.push(format!("Total Protein: {} g", totals.protein));
    lines.push(format!("Total Fat: {} g", totals.fat));

    lines.join("\n")
}

/// Display the combinations found for a budget, one card each.
pub fn display_combinations(budget: i64, combinations: &[Combination]) {
    let band = PriceBand::for_budget(budget);

    if combinations.is_empty() {
        println!(
            "No combinations found for ₹{} (₹{}..=₹{}).",
            budget, band.floor, band.ceiling
        );
        return;
    }

    println!();
    println!(
        "=== {} combinations for ₹{} (₹{}..=₹{}) ===",
        combinations.len(),
        budget,
        band.floor,
        band.ceiling
    );
    println!();

    for (i, combination) in combinations.iter().enumerate() {
        println!("{}", format_combination_card(i + 1, combination));
        println!();
    }
}

/// Display menu items in an aligned table.
pub fn display_menu(items: &[&MenuItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    let max_name_len = items.iter().map(|i| i.name.chars().count()).max().unwrap_or(10);

    for item in items {
        println!(
            "  {:<width$}  ₹{:>5} | {:>4} kcal | C:{:>3} P:{:>3} F:{:>3}",
            item.name,
            item.price,
            item.calories,
            item.carbs,
            item.protein,
            item.fat,
            width = max_name_len
        );
    }

    println!();
}
