mod catalog;
mod lookup;
mod persistence;

pub use catalog::builtin_menu;
pub use lookup::search_menu;
pub use persistence::{load_menu, save_menu, validate_menu};
