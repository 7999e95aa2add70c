pub mod budget;
pub mod constants;
pub mod search;

pub use budget::{PriceBand, parse_budget};
pub use constants::*;
pub use search::find_combinations;
