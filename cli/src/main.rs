//! `teramatch` - rank Pokemon type combinations by their STAB matchups

mod args;
mod commands;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use teramatch_matchup::TypeChart;

use args::{Args, Command, RankArgs};

fn main() -> Result<()> {
    let args = Args::parse();
    telemetry::init(args.verbose);

    let chart = match &args.chart {
        Some(path) => TypeChart::from_path(path)
            .with_context(|| format!("Failed to load type chart from {}", path.display()))?,
        None => TypeChart::standard(),
    };
    tracing::debug!(types = chart.len(), "Type chart ready");

    match args.command.unwrap_or_else(|| Command::Rank(RankArgs::default())) {
        Command::Rank(rank) => commands::rank(&chart, &rank),
        Command::Versus { combo, opponent } => commands::versus(&chart, &combo, &opponent),
        Command::Inspect { combo } => commands::inspect(&chart, &combo),
        Command::Chart => commands::chart(&chart),
    }
}
