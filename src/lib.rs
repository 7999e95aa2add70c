pub mod cli;
pub mod error;
pub mod export;
pub mod finder;
pub mod interface;
pub mod logging;
pub mod menu;
pub mod models;
pub mod share;
pub mod state;

pub use error::{PlannerError, Result};
pub use finder::{find_combinations, parse_budget};
pub use models::{Combination, MenuItem};
