//! Type matchup evaluation for Pokemon type combinations.
//!
//! # Overview
//!
//! ```text
//! teramatch-chart (type chart data)
//!        │
//!        ▼
//! teramatch-matchup (combinations + matchup engine) ← THIS CRATE
//!        │
//!        └─> teramatch-cli (standings driver)
//! ```
//!
//! # Main Types
//!
//! - [`TypeCombination`] - one or two natural types plus an optional tera type
//! - [`MatchupEngine`] - damage multipliers and verdicts over a borrowed [`TypeChart`]
//! - [`Verdict`] - win/lose/neutral outcome of a matchup
//! - [`Standing`] - aggregate matchup score of a combination against a field
//!
//! # Example Usage
//!
//! ```
//! use teramatch_matchup::{MatchupEngine, TypeChart, TypeCombination, Verdict};
//!
//! let chart = TypeChart::standard();
//! let engine = MatchupEngine::new(&chart);
//!
//! let fire = TypeCombination::parse(&chart, "Fire").unwrap();
//! let grass = TypeCombination::parse(&chart, "Grass").unwrap();
//!
//! assert_eq!(engine.damage_from_pokemon(&grass, &fire), 3.0);
//! assert_eq!(engine.matchup(&fire, &grass), Verdict::Win);
//! ```

use thiserror::Error;

mod combo;
mod engine;
mod enumerate;
pub mod query;
mod standings;

pub use combo::{ComboDisplay, TypeCombination};
pub use engine::{MatchupEngine, STAB, TERA_STAB, Verdict};
pub use enumerate::{all_tera_combinations, all_type_combinations};
pub use standings::{Standing, rank};

// Re-export chart types so callers need a single dependency
pub use teramatch_chart::{ChartError, Type, TypeChart, TypeId};

#[derive(Error, Debug)]
pub enum ComboError {
    #[error("Missing type name in {0:?}")]
    MissingType(String),

    #[error("Too many types in {0:?}, expected at most two")]
    TooManyTypes(String),

    #[error(transparent)]
    Chart(#[from] ChartError),
}
