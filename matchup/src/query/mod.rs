//! Query helpers for defensive profiles
//!
//! These answer questions about a single combination, such as which types
//! it is weak to, for display and decision making.

mod profile;

pub use profile::{immunities, is_immune_to, is_weak_to_any, resistances, resists_all, weaknesses};
