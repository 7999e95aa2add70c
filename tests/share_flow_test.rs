use std::fs;
use std::io::Write;

use meal_combo_planner_rs::error::PlannerError;
use meal_combo_planner_rs::menu::{builtin_menu, load_menu, save_menu, search_menu};
use meal_combo_planner_rs::share::{FileShare, ShareTarget, share_combination, share_message};
use meal_combo_planner_rs::state::PlannerSession;

#[test]
fn test_session_result_shared_to_file() {
    let mut session = PlannerSession::new(builtin_menu().to_vec());
    session.set_budget_text("200");

    let combination = session.require_combination(1).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let target = FileShare::new(dir.path().join("combo.txt"));

    assert!(share_combination(&target, combination));
    assert_eq!(
        fs::read_to_string(target.path()).unwrap(),
        "Check out this Domino's Meal Combo:\n\nMargherita - ₹200\n\nTotal: ₹200"
    );
}

#[test]
fn test_share_failure_reports_and_continues() {
    let mut session = PlannerSession::new(builtin_menu().to_vec());
    session.set_budget_text("200");
    let combination = session.require_combination(1).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = FileShare::new(dir.path().join("no-such-dir").join("combo.txt"));

    assert!(matches!(
        target.share(&share_message(combination)),
        Err(PlannerError::ShareUnavailable(_))
    ));
    assert!(!share_combination(&target, combination));
}

#[test]
fn test_garbage_budget_text_yields_zero_budget() {
    let mut session = PlannerSession::new(builtin_menu().to_vec());

    assert!(session.set_budget_text("two hundred").is_empty());
    assert_eq!(session.budget(), 0);
    assert!(matches!(
        session.require_combination(1),
        Err(PlannerError::CombinationNotFound {
            index: 1,
            available: 0
        })
    ));
}

#[test]
fn test_custom_csv_menu_drives_search() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(
        b"name,price,calories,carbs,protein,fat\n\
          Farmhouse,280,300,35,12,10\n\
          Pepsi 500ml,60,150,40,0,0\n\
          Potato Wedges,90,150,30,2,5\n",
    )
    .unwrap();

    let menu = load_menu(file.path()).unwrap();
    let mut session = PlannerSession::new(menu);
    let combos = session.set_budget_text("340");

    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].names(), "Farmhouse + Pepsi 500ml");
    assert_eq!(combos[0].total_price(), 340);
}

#[test]
fn test_builtin_menu_json_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");

    save_menu(&path, builtin_menu()).unwrap();
    let reloaded = load_menu(&path).unwrap();

    assert_eq!(reloaded.as_slice(), builtin_menu());
}

#[test]
fn test_menu_search_finds_pasta() {
    let hits = search_menu(builtin_menu(), "PASTA");
    assert_eq!(hits.len(), 4);
    assert!(hits.iter().all(|i| i.name.contains("Pasta")));
}
