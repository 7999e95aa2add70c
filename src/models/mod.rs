mod combination;
mod menu_item;

pub use combination::{Combination, NutritionTotals};
pub use menu_item::MenuItem;
