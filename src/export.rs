use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::finder::PriceBand;
use crate::models::Combination;

/// Write one CSV row per combination.
pub fn write_csv(combinations: &[Combination], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "items",
        "item_count",
        "total_price",
        "total_calories",
        "total_carbs",
        "total_protein",
        "total_fat",
    ])?;

    for (i, combination) in combinations.iter().enumerate() {
        let totals = combination.totals();
        wtr.write_record([
            (i + 1).to_string(),
            combination.names(),
            combination.len().to_string(),
            combination.total_price().to_string(),
            totals.calories.to_string(),
            totals.carbs.to_string(),
            totals.protein.to_string(),
            totals.fat.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the budget, its band, and every combination with totals as JSON.
pub fn write_json(budget: i64, combinations: &[Combination], path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "budget": budget,
        "band": PriceBand::for_budget(budget),
        "combinations": combinations.iter().enumerate().map(|(i, c)| {
            serde_json::json!({
                "rank": i + 1,
                "items": c.items(),
                "total_price": c.total_price(),
                "totals": c.totals(),
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}
