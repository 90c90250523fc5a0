//! Aggregate matchup scores across a field of combinations

use std::cmp::Reverse;

use crate::combo::TypeCombination;
use crate::engine::MatchupEngine;

/// A combination's summed verdict score against a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub combo: TypeCombination,
    pub score: i32,
}

impl MatchupEngine<'_> {
    /// Score each candidate against every member of `field`
    ///
    /// A candidate that is also in the field meets itself, which is always
    /// neutral. Output order follows `candidates`.
    pub fn standings(&self, candidates: &[TypeCombination], field: &[TypeCombination]) -> Vec<Standing> {
        tracing::debug!(
            candidates = candidates.len(),
            field = field.len(),
            "Computing standings"
        );

        candidates
            .iter()
            .map(|combo| Standing {
                combo: *combo,
                score: field
                    .iter()
                    .map(|opponent| self.matchup(combo, opponent).score())
                    .sum(),
            })
            .collect()
    }
}

/// Order standings by score, best first; ties keep their current order
pub fn rank(standings: &mut [Standing]) {
    standings.sort_by_key(|standing| Reverse(standing.score));
}
