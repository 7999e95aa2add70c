use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Meal Combo Planner — find menu combinations priced around your budget.
#[derive(Parser, Debug)]
#[command(name = "meal_combo_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Load the menu from a JSON or CSV file instead of the built-in one.
    #[arg(short, long, global = true)]
    pub menu: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter budgets interactively and share combinations.
    Interactive,

    /// Show the combinations for a budget.
    Find {
        /// Budget text; anything that is not a whole number counts as 0.
        #[arg(allow_hyphen_values = true)]
        budget: String,

        /// Show at most this many combinations.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Share one combination for a budget.
    Share {
        /// Budget text; anything that is not a whole number counts as 0.
        #[arg(allow_hyphen_values = true)]
        budget: String,

        /// Combination number as shown by `find` (starting at 1).
        index: usize,

        #[command(flatten)]
        target: ShareTargetArgs,
    },

    /// List or search the menu.
    Menu {
        /// Show only items whose name matches this text.
        #[arg(short, long)]
        search: Option<String>,

        /// Write the menu to a JSON or CSV file.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Write the combinations for a budget to a file.
    Export {
        /// Budget text; anything that is not a whole number counts as 0.
        #[arg(allow_hyphen_values = true)]
        budget: String,

        /// Output CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output JSON file.
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

/// Where a shared combo goes. Defaults to the system clipboard helper.
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ShareTargetArgs {
    /// Save the message to a text file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pipe the message into this command (e.g. "xclip -selection clipboard").
    #[arg(long = "command", value_name = "PROGRAM")]
    pub pipe: Option<String>,

    /// Print the message instead of sharing it.
    #[arg(long)]
    pub stdout: bool,
}
