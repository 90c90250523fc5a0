//! TypeChart - validated, read-only effectiveness data

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ChartError;
use crate::types::Type;

/// Ordinal handle for a type within the chart that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u8);

impl TypeId {
    pub(crate) const fn new(ordinal: u8) -> Self {
        Self(ordinal)
    }

    /// Chart ordinal (0..len)
    pub const fn ordinal(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// One entry of a chart file, keyed by type name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(rename = "_id")]
    pub ordinal: u8,
    /// Attacking types dealing double damage
    #[serde(default)]
    pub weakness: Vec<String>,
    /// Attacking types dealing half damage
    #[serde(default)]
    pub resistance: Vec<String>,
    /// Attacking types dealing no damage
    #[serde(default)]
    pub immunity: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TypeEntry {
    name: String,
    weakness: BTreeSet<TypeId>,
    resistance: BTreeSet<TypeId>,
    immunity: BTreeSet<TypeId>,
}

impl TypeEntry {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weakness: BTreeSet::new(),
            resistance: BTreeSet::new(),
            immunity: BTreeSet::new(),
        }
    }
}

/// Immutable type effectiveness chart
///
/// Entries are stored by ordinal, so every [`TypeId`] issued by this chart
/// indexes it directly. Passing an id from a larger chart panics.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    entries: Vec<TypeEntry>,
    // lowercased name -> id
    index: HashMap<String, TypeId>,
}

impl TypeChart {
    /// The standard 18-type chart (Gen 6+)
    pub fn standard() -> Self {
        let mut entries: Vec<TypeEntry> = Type::ALL
            .iter()
            .map(|ty| TypeEntry::new(ty.as_str()))
            .collect();

        for defender in Type::ALL {
            let entry = &mut entries[usize::from(defender.ordinal())];
            for attacker in Type::ALL {
                let value = attacker.effectiveness(defender);
                if value == 2.0 {
                    entry.weakness.insert(attacker.standard_id());
                } else if value == 0.5 {
                    entry.resistance.insert(attacker.standard_id());
                } else if value == 0.0 {
                    entry.immunity.insert(attacker.standard_id());
                }
            }
        }

        let index = Type::ALL
            .iter()
            .map(|ty| (ty.as_str().to_lowercase(), ty.standard_id()))
            .collect();

        Self { entries, index }
    }

    /// Build a chart from name -> record pairs, validating ordinals and relations
    pub fn from_records(records: BTreeMap<String, TypeRecord>) -> Result<Self, ChartError> {
        Self::build(&records).inspect_err(|e| tracing::warn!(error = %e, "Rejected type chart"))
    }

    /// Parse a chart from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let records: BTreeMap<String, TypeRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read and parse a JSON chart file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading type chart");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn build(records: &BTreeMap<String, TypeRecord>) -> Result<Self, ChartError> {
        let len = records.len();
        if len == 0 {
            return Err(ChartError::Empty);
        }
        if len > usize::from(u8::MAX) + 1 {
            return Err(ChartError::TooManyTypes(len));
        }

        let mut slots: Vec<Option<&str>> = vec![None; len];
        let mut index = HashMap::with_capacity(len);

        for (name, record) in records {
            let slot = usize::from(record.ordinal);
            if slot >= len {
                return Err(ChartError::OrdinalOutOfRange {
                    name: name.clone(),
                    ordinal: record.ordinal,
                    len,
                });
            }
            if let Some(first) = slots[slot] {
                return Err(ChartError::DuplicateOrdinal {
                    ordinal: record.ordinal,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
            if index
                .insert(name.trim().to_lowercase(), TypeId::new(record.ordinal))
                .is_some()
            {
                return Err(ChartError::DuplicateName(name.clone()));
            }
            slots[slot] = Some(name.as_str());
        }

        // len distinct ordinals below len: every slot is filled
        let mut entries: Vec<TypeEntry> = slots.into_iter().flatten().map(TypeEntry::new).collect();

        for (name, record) in records {
            let entry = &mut entries[usize::from(record.ordinal)];
            let mut seen = BTreeSet::new();
            let relations = [
                (&record.weakness, &mut entry.weakness),
                (&record.resistance, &mut entry.resistance),
                (&record.immunity, &mut entry.immunity),
            ];

            for (attackers, set) in relations {
                for attacker in attackers {
                    let id = lookup(&index, attacker)?;
                    if !seen.insert(id) {
                        return Err(ChartError::OverlappingRelation {
                            defender: name.clone(),
                            attacker: attacker.clone(),
                        });
                    }
                    set.insert(id);
                }
            }
        }

        tracing::debug!(types = len, "Built type chart");
        Ok(Self { entries, index })
    }

    /// Export the chart in its file representation
    pub fn to_records(&self) -> BTreeMap<String, TypeRecord> {
        let names = |set: &BTreeSet<TypeId>| -> Vec<String> {
            set.iter().map(|id| self.name(*id).to_string()).collect()
        };

        self.entries
            .iter()
            .zip(self.ids())
            .map(|(entry, id)| {
                let record = TypeRecord {
                    ordinal: id.ordinal(),
                    weakness: names(&entry.weakness),
                    resistance: names(&entry.resistance),
                    immunity: names(&entry.immunity),
                };
                (entry.name.clone(), record)
            })
            .collect()
    }

    /// Resolve a type name (case-insensitive)
    pub fn id(&self, name: &str) -> Result<TypeId, ChartError> {
        lookup(&self.index, name)
    }

    /// Resolve a standard type by name, failing if this chart does not define it
    pub fn type_id(&self, ty: Type) -> Result<TypeId, ChartError> {
        self.id(ty.as_str())
    }

    /// Name of a type as it appears in the chart
    pub fn name(&self, id: TypeId) -> &str {
        &self.entries[id.index()].name
    }

    /// Number of types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All type ids in ordinal order
    pub fn ids(&self) -> impl Iterator<Item = TypeId> {
        // build() caps len at 256
        (0..self.entries.len()).map(|i| TypeId::new(i as u8))
    }

    /// Attacking types that deal double damage to `id`
    pub fn weaknesses(&self, id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        self.entries[id.index()].weakness.iter().copied()
    }

    /// Attacking types that deal half damage to `id`
    pub fn resistances(&self, id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        self.entries[id.index()].resistance.iter().copied()
    }

    /// Attacking types that deal no damage to `id`
    pub fn immunities(&self, id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        self.entries[id.index()].immunity.iter().copied()
    }

    /// Damage multiplier of an `attack` move against a single `defend` type
    ///
    /// Values: 0.0 = immune, 0.5 = resisted, 1.0 = neutral, 2.0 = weak
    pub fn multiplier(&self, attack: TypeId, defend: TypeId) -> f32 {
        let entry = &self.entries[defend.index()];
        if entry.weakness.contains(&attack) {
            2.0
        } else if entry.resistance.contains(&attack) {
            0.5
        } else if entry.immunity.contains(&attack) {
            0.0
        } else {
            1.0
        }
    }
}

fn lookup(index: &HashMap<String, TypeId>, name: &str) -> Result<TypeId, ChartError> {
    index
        .get(&name.trim().to_lowercase())
        .copied()
        .ok_or_else(|| ChartError::UnknownType(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chart_matches_matrix() {
        let chart = TypeChart::standard();
        assert_eq!(chart.len(), 18);
        for attacker in Type::ALL {
            for defender in Type::ALL {
                assert_eq!(
                    chart.multiplier(attacker.standard_id(), defender.standard_id()),
                    attacker.effectiveness(defender),
                    "{attacker} vs {defender}"
                );
            }
        }
    }

    #[test]
    fn test_multiplier_branches() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier(Type::Fire.standard_id(), Type::Grass.standard_id()), 2.0);
        assert_eq!(chart.multiplier(Type::Fire.standard_id(), Type::Water.standard_id()), 0.5);
        assert_eq!(chart.multiplier(Type::Ground.standard_id(), Type::Flying.standard_id()), 0.0);
        assert_eq!(chart.multiplier(Type::Fire.standard_id(), Type::Normal.standard_id()), 1.0);
    }

    #[test]
    fn test_self_interaction_is_only_explicit() {
        let chart = TypeChart::standard();
        for id in chart.ids() {
            let expected = if chart.weaknesses(id).any(|t| t == id) {
                2.0
            } else if chart.resistances(id).any(|t| t == id) {
                0.5
            } else if chart.immunities(id).any(|t| t == id) {
                0.0
            } else {
                1.0
            };
            assert_eq!(chart.multiplier(id, id), expected);
        }
        // Normal has no self relation at all
        assert_eq!(chart.multiplier(Type::Normal.standard_id(), Type::Normal.standard_id()), 1.0);
        assert_eq!(chart.multiplier(Type::Ghost.standard_id(), Type::Ghost.standard_id()), 2.0);
    }

    #[test]
    fn test_relations_are_disjoint() {
        let chart = TypeChart::standard();
        for id in chart.ids() {
            let weak: BTreeSet<_> = chart.weaknesses(id).collect();
            let resist: BTreeSet<_> = chart.resistances(id).collect();
            let immune: BTreeSet<_> = chart.immunities(id).collect();
            assert!(weak.is_disjoint(&resist));
            assert!(weak.is_disjoint(&immune));
            assert!(resist.is_disjoint(&immune));
        }
    }

    #[test]
    fn test_id_lookup() {
        let chart = TypeChart::standard();
        assert_eq!(chart.id("Fire").unwrap(), Type::Fire.standard_id());
        assert_eq!(chart.id("fairy").unwrap().ordinal(), 17);
        assert_eq!(chart.name(Type::Psychic.standard_id()), "Psychic");
        assert!(matches!(chart.id("Stellar"), Err(ChartError::UnknownType(name)) if name == "Stellar"));
    }

    #[test]
    fn test_type_id_on_standard_chart() {
        let chart = TypeChart::standard();
        for ty in Type::ALL {
            assert_eq!(chart.type_id(ty).unwrap(), ty.standard_id());
        }
    }

    #[test]
    fn test_type_id_resolves_by_name_on_custom_chart() {
        let chart = TypeChart::from_json(
            r#"{ "Rock": { "_id": 0 }, "Paper": { "_id": 1 }, "Fire": { "_id": 2 } }"#,
        )
        .unwrap();
        let fire = chart.type_id(Type::Fire).unwrap();

        assert_eq!(fire.ordinal(), 2);
        assert_eq!(chart.name(fire), "Fire");
    }

    #[test]
    fn test_type_id_missing_from_custom_chart() {
        let chart =
            TypeChart::from_json(r#"{ "Rock": { "_id": 0 }, "Paper": { "_id": 1 } }"#).unwrap();

        assert!(matches!(
            chart.type_id(Type::Fire),
            Err(ChartError::UnknownType(name)) if name == "Fire"
        ));
        assert!(matches!(chart.type_id(Type::Fairy), Err(ChartError::UnknownType(_))));
    }

    #[test]
    fn test_ids_in_ordinal_order() {
        let chart = TypeChart::standard();
        let ordinals: Vec<u8> = chart.ids().map(TypeId::ordinal).collect();
        assert_eq!(ordinals, (0..18).collect::<Vec<u8>>());
    }

    #[test]
    fn test_to_records_round_trip() {
        let chart = TypeChart::standard();
        let rebuilt = TypeChart::from_records(chart.to_records()).unwrap();
        assert_eq!(rebuilt, chart);
    }
}
