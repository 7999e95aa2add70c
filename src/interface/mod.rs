pub mod prompts;
pub mod render;

pub use prompts::{prompt_budget_text, prompt_combination_choice, prompt_yes_no};
pub use render::{display_combinations, display_menu, format_combination_card};
