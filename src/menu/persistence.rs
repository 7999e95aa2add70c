use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::MenuItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuFormat {
    Json,
    Csv,
}

fn menu_format(path: &Path) -> Result<MenuFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("json") => Ok(MenuFormat::Json),
        Some("csv") => Ok(MenuFormat::Csv),
        _ => Err(PlannerError::InvalidInput(format!(
            "unsupported menu file '{}' (expected .json or .csv)",
            path.display()
        ))),
    }
}

/// Load a menu from a JSON array or a CSV file with a header row.
///
/// Items keep their file order; duplicates are kept as-is.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let path = path.as_ref();

    let items: Vec<MenuItem> = match menu_format(path)? {
        MenuFormat::Json => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        MenuFormat::Csv => {
            let mut rdr = csv::Reader::from_path(path)?;
            rdr.deserialize::<MenuItem>()
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    validate_menu(&items)?;
    debug!(path = %path.display(), items = items.len(), "loaded menu file");
    Ok(items)
}

/// Save a menu in the format implied by the file extension.
pub fn save_menu<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    let path = path.as_ref();

    match menu_format(path)? {
        MenuFormat::Json => {
            let json = serde_json::to_string_pretty(items)?;
            fs::write(path, json)?;
        }
        MenuFormat::Csv => {
            let mut wtr = csv::Writer::from_path(path)?;
            for item in items {
                wtr.serialize(item)?;
            }
            wtr.flush()?;
        }
    }

    Ok(())
}

/// Reject entries that cannot be shown to a user.
pub fn validate_menu(items: &[MenuItem]) -> Result<()> {
    if let Some(pos) = items.iter().position(|item| item.name.trim().is_empty()) {
        return Err(PlannerError::InvalidInput(format!(
            "menu item #{} has an empty name",
            pos + 1
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_with(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_preserves_order() {
        let json = r#"[
            {"name": "Pepsi 500ml", "price": 60, "calories": 150, "carbs": 40, "protein": 0, "fat": 0},
            {"name": "Margherita", "price": 200, "calories": 250, "carbs": 30, "protein": 10, "fat": 9}
        ]"#;
        let file = temp_with(".json", json);

        let items = load_menu(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Pepsi 500ml");
        assert_eq!(items[1].price, 200);
    }

    #[test]
    fn test_load_csv_keeps_duplicates() {
        let csv = "name,price,calories,carbs,protein,fat\n\
                   Potato Wedges,90,150,30,2,5\n\
                   Potato Wedges,90,150,30,2,5\n";
        let file = temp_with(".csv", csv);

        let items = load_menu(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], items[1]);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = temp_with(".txt", "[]");
        assert!(matches!(
            load_menu(file.path()),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let json =
            r#"[{"name": " ", "price": 10, "calories": 0, "carbs": 0, "protein": 0, "fat": 0}]"#;
        let file = temp_with(".json", json);
        assert!(matches!(
            load_menu(file.path()),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_nutrition_rejected_by_type() {
        let json =
            r#"[{"name": "Odd", "price": 10, "calories": -1, "carbs": 0, "protein": 0, "fat": 0}]"#;
        let file = temp_with(".json", json);
        assert!(matches!(load_menu(file.path()), Err(PlannerError::Json(_))));
    }

    #[test]
    fn test_save_and_reload_csv() {
        let items = vec![
            MenuItem::new("Choco Lava Cake", 110, 200, 30, 2, 10),
            MenuItem::new("Iced Tea", 70, 120, 30, 0, 0),
        ];
        let out = Builder::new().suffix(".csv").tempfile().unwrap();

        save_menu(out.path(), &items).unwrap();
        assert_eq!(load_menu(out.path()).unwrap(), items);
    }
}
