//! Pokemon type chart data and effectiveness lookups.
//!
//! A [`TypeChart`] maps every type to the set of attacking types it is weak to,
//! resists, or is immune to. Charts are plain immutable values: build one with
//! [`TypeChart::standard`] or load one from JSON, then borrow it wherever
//! effectiveness needs to be computed.
//!
//! # Chart Format
//!
//! ```text
//! {
//!   "Fire": { "_id": 1, "weakness": ["Water", "Ground", "Rock"], "resistance": [...], "immunity": [] },
//!   ...
//! }
//! ```
//!
//! Ordinals (`_id`) must be unique and contiguous from zero. Type names are
//! matched case-insensitively.
//!
//! # Example Usage
//!
//! ```
//! use teramatch_chart::{Type, TypeChart};
//!
//! let chart = TypeChart::standard();
//! let fire = chart.id("fire").unwrap();
//! let grass = chart.type_id(Type::Grass).unwrap();
//! assert_eq!(chart.multiplier(fire, grass), 2.0);
//! ```

use thiserror::Error;

mod chart;
mod types;

pub use chart::{TypeChart, TypeId, TypeRecord};
pub use types::{STANDARD_CHART, Type};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Type name defined more than once: {0}")]
    DuplicateName(String),

    #[error("Ordinal {ordinal} is shared by {first} and {second}")]
    DuplicateOrdinal {
        ordinal: u8,
        first: String,
        second: String,
    },

    #[error("Ordinal {ordinal} of {name} is outside 0..{len}")]
    OrdinalOutOfRange { name: String, ordinal: u8, len: usize },

    #[error("{attacker} is listed more than once in the relations of {defender}")]
    OverlappingRelation { defender: String, attacker: String },

    #[error("Chart defines no types")]
    Empty,

    #[error("Chart defines {0} types, at most 256 are supported")]
    TooManyTypes(usize),

    #[error("Invalid chart JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read chart: {0}")]
    Io(#[from] std::io::Error),
}
