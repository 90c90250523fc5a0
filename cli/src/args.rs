use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `label: score` line per combination.
    #[default]
    Text,
    /// A JSON array of rows.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "teramatch", author, version, about)]
pub struct Args {
    /// JSON type chart to use instead of the built-in standard chart.
    #[arg(long, global = true, value_name = "PATH")]
    pub chart: Option<PathBuf>,

    /// Log more (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    // None runs `rank` with default options
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score every combination against every non-tera combination.
    Rank(RankArgs),

    /// Compare two combinations head to head, e.g. `Water/Ground@Electric Fire`.
    Versus {
        /// Combination whose perspective the verdict is reported from.
        combo: String,
        opponent: String,
    },

    /// Show what a combination is weak to, resists, and is immune to.
    Inspect { combo: String },

    /// Print the active chart as JSON.
    Chart,
}

#[derive(Debug, Default, clap::Args)]
pub struct RankArgs {
    /// Order by score, best first, instead of enumeration order.
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Only print the first N rows.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Terastallize every candidate into this type.
    #[arg(long, value_name = "TYPE", conflicts_with = "all_tera")]
    pub tera: Option<String>,

    /// Rank every combination paired with every tera type.
    #[arg(long, default_value_t = false)]
    pub all_tera: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}
