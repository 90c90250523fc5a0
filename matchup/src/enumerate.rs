//! Enumeration of every combination a chart allows

use std::collections::BTreeSet;

use teramatch_chart::TypeChart;

use crate::combo::TypeCombination;

/// Every monotype and every unordered pair of distinct types, without tera
///
/// An 18-type chart yields 18 + 153 = 171 combinations. Iteration order
/// follows the chart ordinals: each monotype, then its pairs with later types.
pub fn all_type_combinations(chart: &TypeChart) -> BTreeSet<TypeCombination> {
    let mut combos = BTreeSet::new();
    for first in chart.ids() {
        combos.insert(TypeCombination::mono(first));
        for second in chart.ids() {
            if second.ordinal() > first.ordinal() {
                combos.insert(TypeCombination::dual(first, second));
            }
        }
    }

    tracing::debug!(count = combos.len(), "Enumerated type combinations");
    combos
}

/// Every combination from [`all_type_combinations`] terastallized into every type
pub fn all_tera_combinations(chart: &TypeChart) -> BTreeSet<TypeCombination> {
    let combos: BTreeSet<_> = all_type_combinations(chart)
        .into_iter()
        .flat_map(move |combo| chart.ids().map(move |tera| combo.with_tera(tera)))
        .collect();

    tracing::debug!(count = combos.len(), "Enumerated tera combinations");
    combos
}
