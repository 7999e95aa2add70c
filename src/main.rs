use clap::Parser;
use std::path::Path;

use tracing::info;

use meal_combo_planner_rs::cli::{Cli, Command, ShareTargetArgs};
use meal_combo_planner_rs::error::{PlannerError, Result};
use meal_combo_planner_rs::export::{write_csv, write_json};
use meal_combo_planner_rs::interface::{
    display_combinations, display_menu, prompt_budget_text, prompt_combination_choice,
    prompt_yes_no,
};
use meal_combo_planner_rs::logging::{LoggingConfig, init_logging, parse_level};
use meal_combo_planner_rs::menu::{builtin_menu, load_menu, save_menu, search_menu};
use meal_combo_planner_rs::models::MenuItem;
use meal_combo_planner_rs::share::{
    CommandShare, FileShare, SHARE_FAILED_NOTICE, ShareTarget, StdoutShare, share_combination,
};
use meal_combo_planner_rs::state::PlannerSession;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::with_level(parse_level(&cli.log_level)));

    let menu = resolve_menu(cli.menu.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(menu),
        Command::Find { budget, limit } => cmd_find(menu, &budget, limit),
        Command::Share {
            budget,
            index,
            target,
        } => cmd_share(menu, &budget, index, &target),
        Command::Menu { search, save } => cmd_menu(&menu, search.as_deref(), save.as_deref()),
        Command::Export { budget, csv, json } => {
            cmd_export(menu, &budget, csv.as_deref(), json.as_deref())
        }
    }
}

/// Use the menu file if one was given, otherwise the built-in menu.
fn resolve_menu(path: Option<&Path>) -> Result<Vec<MenuItem>> {
    match path {
        Some(path) => {
            let items = load_menu(path)?;
            info!(path = %path.display(), items = items.len(), "using menu file");
            Ok(items)
        }
        None => Ok(builtin_menu().to_vec()),
    }
}

/// Pick the share target requested on the command line.
fn resolve_share_target(args: &ShareTargetArgs) -> Result<Box<dyn ShareTarget>> {
    if let Some(path) = &args.output {
        return Ok(Box::new(FileShare::new(path)));
    }
    if let Some(line) = &args.pipe {
        return Ok(Box::new(CommandShare::from_command_line(line)?));
    }
    if args.stdout {
        return Ok(Box::new(StdoutShare));
    }
    Ok(Box::new(CommandShare::detect()?))
}

/// Prompt for budgets until the user enters nothing.
fn cmd_interactive(menu: Vec<MenuItem>) -> Result<()> {
    let mut session = PlannerSession::new(menu);

    println!("Loaded {} menu items", session.menu().len());
    println!();

    while let Some(text) = prompt_budget_text()? {
        session.set_budget_text(&text);
        display_combinations(session.budget(), session.combinations());

        if session.is_empty() {
            continue;
        }

        while let Some(number) = prompt_combination_choice(session.combinations())? {
            let combination = session.require_combination(number)?;

            match CommandShare::detect() {
                Ok(target) => {
                    if share_combination(&target, combination) {
                        println!("Combo #{} copied via {}.", number, target.describe());
                    }
                }
                Err(_) => {
                    eprintln!("{}", SHARE_FAILED_NOTICE);
                    let fallback = FileShare::new(format!("combo-{}.txt", number));
                    let question = format!(
                        "No share handler found. Save to {}?",
                        fallback.path().display()
                    );
                    let save = prompt_yes_no(&question, true)?;
                    if !save {
                        share_combination(&StdoutShare, combination);
                    } else if share_combination(&fallback, combination) {
                        println!("Saved {}.", fallback.path().display());
                    }
                }
            }
        }
    }

    Ok(())
}

/// Show the combinations for one budget.
fn cmd_find(menu: Vec<MenuItem>, budget_text: &str, limit: Option<usize>) -> Result<()> {
    let mut session = PlannerSession::new(menu);
    session.set_budget_text(budget_text);

    let combinations = session.combinations();
    let shown = &combinations[..limit.unwrap_or(combinations.len()).min(combinations.len())];

    display_combinations(session.budget(), shown);

    if shown.len() < combinations.len() {
        println!(
            "Showing {} of {} combinations.",
            shown.len(),
            combinations.len()
        );
    }

    Ok(())
}

/// Share one combination through the requested target.
fn cmd_share(
    menu: Vec<MenuItem>,
    budget_text: &str,
    number: usize,
    target_args: &ShareTargetArgs,
) -> Result<()> {
    let mut session = PlannerSession::new(menu);
    session.set_budget_text(budget_text);

    let combination = session.require_combination(number)?;

    // A missing handler is a share failure, not a command failure
    let target = match resolve_share_target(target_args) {
        Ok(target) => target,
        Err(PlannerError::ShareUnavailable(reason)) => {
            info!(%reason, "no share target");
            eprintln!("{}", SHARE_FAILED_NOTICE);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if share_combination(target.as_ref(), combination) && !target_args.stdout {
        println!("Shared combo #{} via {}.", number, target.describe());
    }

    Ok(())
}

/// List, search, or save the menu.
fn cmd_menu(menu: &[MenuItem], search: Option<&str>, save: Option<&Path>) -> Result<()> {
    if let Some(path) = save {
        save_menu(path, menu)?;
        println!("Saved {} menu items to {}.", menu.len(), path.display());
        return Ok(());
    }

    match search {
        Some(query) => {
            let hits = search_menu(menu, query);
            display_menu(&hits, &format!("Matches for '{}'", query));
        }
        None => {
            let all: Vec<&MenuItem> = menu.iter().collect();
            display_menu(&all, "Menu");
        }
    }

    Ok(())
}

/// Write the combinations for a budget to CSV and/or JSON.
fn cmd_export(
    menu: Vec<MenuItem>,
    budget_text: &str,
    csv: Option<&Path>,
    json: Option<&Path>,
) -> Result<()> {
    if csv.is_none() && json.is_none() {
        return Err(PlannerError::InvalidInput(
            "export needs --csv and/or --json".to_string(),
        ));
    }

    let mut session = PlannerSession::new(menu);
    session.set_budget_text(budget_text);

    if let Some(path) = csv {
        write_csv(session.combinations(), path)?;
        println!("Wrote {} combinations to {}.", session.len(), path.display());
    }

    if let Some(path) = json {
        write_json(session.budget(), session.combinations(), path)?;
        println!("Wrote {} combinations to {}.", session.len(), path.display());
    }

    Ok(())
}
