//! MatchupEngine - damage multipliers and verdicts between combinations

use std::ops::Neg;

use teramatch_chart::{TypeChart, TypeId};

use crate::combo::TypeCombination;

/// Same-type attack bonus
pub const STAB: f32 = 1.5;

/// Bonus for a move matching both a natural type and the tera type
pub const TERA_STAB: f32 = 2.0;

/// Outcome of a matchup from the perspective of the evaluating combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Win,
    Lose,
    Neutral,
}

impl Verdict {
    /// +1 for a win, -1 for a loss, 0 otherwise
    pub fn score(self) -> i32 {
        match self {
            Verdict::Win => 1,
            Verdict::Lose => -1,
            Verdict::Neutral => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Win => "win",
            Verdict::Lose => "lose",
            Verdict::Neutral => "neutral",
        }
    }
}

impl Neg for Verdict {
    type Output = Verdict;

    /// The same matchup seen from the opponent's side
    fn neg(self) -> Verdict {
        match self {
            Verdict::Win => Verdict::Lose,
            Verdict::Lose => Verdict::Win,
            Verdict::Neutral => Verdict::Neutral,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Evaluates combinations against a borrowed chart
///
/// Combinations must be built from ids issued by the same chart.
#[derive(Debug, Clone, Copy)]
pub struct MatchupEngine<'c> {
    chart: &'c TypeChart,
}

impl<'c> MatchupEngine<'c> {
    pub fn new(chart: &'c TypeChart) -> Self {
        Self { chart }
    }

    pub fn chart(&self) -> &'c TypeChart {
        self.chart
    }

    /// Multiplier a move of type `attack` deals to `defender`
    ///
    /// A tera type replaces the natural types entirely; otherwise the
    /// multipliers of both natural types stack.
    pub fn damage_from_move(&self, defender: &TypeCombination, attack: TypeId) -> f32 {
        if let Some(tera) = defender.tera() {
            return self.chart.multiplier(attack, tera);
        }

        let multiplier = self.chart.multiplier(attack, defender.primary());
        match defender.secondary() {
            Some(secondary) => multiplier * self.chart.multiplier(attack, secondary),
            None => multiplier,
        }
    }

    /// Best multiplier a same-type move of `attacker` deals to `defender`, STAB included
    pub fn damage_from_pokemon(&self, defender: &TypeCombination, attacker: &TypeCombination) -> f32 {
        let bonus = |ty: TypeId| {
            if attacker.tera() == Some(ty) {
                TERA_STAB
            } else {
                STAB
            }
        };

        let primary = attacker.primary();
        let mut best = bonus(primary) * self.damage_from_move(defender, primary);

        if let Some(secondary) = attacker.secondary() {
            let candidate = bonus(secondary) * self.damage_from_move(defender, secondary);
            // a tera-matching secondary already outranks a plain tera move of the same type
            if attacker.tera() == Some(secondary) {
                return best.max(candidate);
            }
            best = best.max(candidate);
        }

        if let Some(tera) = attacker.tera()
            && tera != primary
        {
            best = best.max(STAB * self.damage_from_move(defender, tera));
        }

        best
    }

    /// Compare the best damage `combo` deals to `opponent` with the best damage it takes back
    pub fn matchup(&self, combo: &TypeCombination, opponent: &TypeCombination) -> Verdict {
        let dealt = self.damage_from_pokemon(opponent, combo);
        let taken = self.damage_from_pokemon(combo, opponent);

        tracing::trace!(
            combo = %combo.display(self.chart),
            opponent = %opponent.display(self.chart),
            dealt,
            taken,
            "Evaluated matchup"
        );

        if dealt > taken {
            Verdict::Win
        } else if dealt < taken {
            Verdict::Lose
        } else {
            Verdict::Neutral
        }
    }
}
