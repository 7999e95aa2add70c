use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::Combination;

/// Prompt for budget text. Returns `None` when the user submits nothing.
///
/// The text is returned untouched; coercion to a number happens downstream.
pub fn prompt_budget_text() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Enter your budget (empty to quit)")
        .allow_empty(true)
        .interact_text()?;

    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}

/// Let the user pick a combination to share.
///
/// Returns the 1-based number of the chosen combination, or `None` for "Done".
pub fn prompt_combination_choice(combinations: &[Combination]) -> Result<Option<usize>> {
    let mut options: Vec<String> = combinations
        .iter()
        .enumerate()
        .map(|(i, c)| format!("#{} ₹{} - {}", i + 1, c.total_price(), c.names()))
        .collect();
    options.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("Share a combination?")
        .items(&options)
        .default(options.len() - 1)
        .interact()?;

    if selection < combinations.len() {
        Ok(Some(selection + 1))
    } else {
        Ok(None)
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
