use anyhow::{Context, Result};
use serde::Serialize;
use teramatch_matchup::{
    MatchupEngine, Standing, TypeChart, TypeCombination, TypeId, all_tera_combinations,
    all_type_combinations, query, rank as rank_standings,
};

use crate::args::{Format, RankArgs};

/// JSON shape of one ranked combination
#[derive(Debug, Serialize)]
struct StandingRow<'a> {
    label: String,
    primary: &'a str,
    secondary: Option<&'a str>,
    tera: Option<&'a str>,
    score: i32,
}

impl<'a> StandingRow<'a> {
    fn new(chart: &'a TypeChart, standing: &Standing) -> Self {
        let combo = &standing.combo;
        Self {
            label: combo.display(chart).to_string(),
            primary: chart.name(combo.primary()),
            secondary: combo.secondary().map(|t| chart.name(t)),
            tera: combo.tera().map(|t| chart.name(t)),
            score: standing.score,
        }
    }
}

fn parse_combo(chart: &TypeChart, s: &str) -> Result<TypeCombination> {
    TypeCombination::parse(chart, s).with_context(|| format!("Invalid type combination {s:?}"))
}

/// Combinations to score: one tera type, every tera variant, or the plain field
fn candidates(
    chart: &TypeChart,
    args: &RankArgs,
    field: &[TypeCombination],
) -> Result<Vec<TypeCombination>> {
    match (&args.tera, args.all_tera) {
        (Some(name), _) => {
            let tera = chart
                .id(name)
                .with_context(|| format!("Invalid --tera value {name:?}"))?;
            Ok(all_tera_combinations(chart)
                .into_iter()
                .filter(|combo| combo.tera() == Some(tera))
                .collect())
        }
        (None, true) => Ok(all_tera_combinations(chart).into_iter().collect()),
        (None, false) => Ok(field.to_vec()),
    }
}

fn take_top(standings: &[Standing], top: Option<usize>) -> &[Standing] {
    match top {
        Some(n) => &standings[..n.min(standings.len())],
        None => standings,
    }
}

/// Sum every candidate's verdicts against the non-tera field and print the totals
pub fn rank(chart: &TypeChart, args: &RankArgs) -> Result<()> {
    let engine = MatchupEngine::new(chart);
    let field: Vec<_> = all_type_combinations(chart).into_iter().collect();
    let candidates = candidates(chart, args, &field)?;

    let mut standings = engine.standings(&candidates, &field);
    if args.sort {
        rank_standings(&mut standings);
    }
    let shown = take_top(&standings, args.top);

    match args.format {
        Format::Text => {
            for standing in shown {
                println!("{}: {}", standing.combo.display(chart), standing.score);
            }
        }
        Format::Json => {
            let rows: Vec<_> = shown.iter().map(|s| StandingRow::new(chart, s)).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}

/// Print both best-STAB multipliers and the verdict from `combo`'s side
pub fn versus(chart: &TypeChart, combo: &str, opponent: &str) -> Result<()> {
    let engine = MatchupEngine::new(chart);
    let combo = parse_combo(chart, combo)?;
    let opponent = parse_combo(chart, opponent)?;

    let dealt = engine.damage_from_pokemon(&opponent, &combo);
    let taken = engine.damage_from_pokemon(&combo, &opponent);
    let verdict = engine.matchup(&combo, &opponent);

    println!("{} deals {}x", combo.display(chart), dealt);
    println!("{} deals {}x", opponent.display(chart), taken);
    println!("Verdict: {} ({:+})", verdict, verdict.score());

    Ok(())
}

/// Print the defensive profile of a combination
pub fn inspect(chart: &TypeChart, combo: &str) -> Result<()> {
    let engine = MatchupEngine::new(chart);
    let combo = parse_combo(chart, combo)?;

    let describe = |types: Vec<TypeId>| -> String {
        if types.is_empty() {
            return "none".to_string();
        }
        types
            .iter()
            .map(|t| format!("{} ({}x)", chart.name(*t), engine.damage_from_move(&combo, *t)))
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("{}", combo.display(chart));
    println!("  Weak to:   {}", describe(query::weaknesses(&engine, &combo)));
    println!("  Resists:   {}", describe(query::resistances(&engine, &combo)));
    println!("  Immune to: {}", describe(query::immunities(&engine, &combo)));

    Ok(())
}

/// Dump the active chart in its file format
pub fn chart(chart: &TypeChart) -> Result<()> {
    let json = serde_json::to_string_pretty(&chart.to_records())
        .context("Failed to serialize type chart")?;
    println!("{json}");
    Ok(())
}
