//! TypeCombination - a Pokemon's typing

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use teramatch_chart::{TypeChart, TypeId};

use crate::ComboError;

/// One or two natural types plus an optional tera type
///
/// Equality, hashing and ordering ignore which natural type is primary:
/// `Fire/Water` and `Water/Fire` are the same combination.
#[derive(Debug, Clone, Copy)]
pub struct TypeCombination {
    primary: TypeId,
    /// Never equal to `primary`
    secondary: Option<TypeId>,
    /// When set, replaces the natural types defensively
    tera: Option<TypeId>,
}

impl TypeCombination {
    /// Create a combination. A secondary type equal to the primary collapses to a monotype.
    pub fn new(primary: TypeId, secondary: Option<TypeId>, tera: Option<TypeId>) -> Self {
        Self {
            primary,
            secondary: secondary.filter(|t| *t != primary),
            tera,
        }
    }

    pub fn mono(primary: TypeId) -> Self {
        Self::new(primary, None, None)
    }

    pub fn dual(primary: TypeId, secondary: TypeId) -> Self {
        Self::new(primary, Some(secondary), None)
    }

    /// Same natural types, terastallized into `tera`
    pub fn with_tera(self, tera: TypeId) -> Self {
        Self {
            tera: Some(tera),
            ..self
        }
    }

    /// Parse `Primary[/Secondary][@Tera]`, e.g. `Water/Ground@Electric`
    pub fn parse(chart: &TypeChart, s: &str) -> Result<Self, ComboError> {
        let (natural, tera) = match s.split_once('@') {
            Some((natural, tera)) => (natural, Some(tera)),
            None => (s, None),
        };

        let names: Vec<&str> = natural.split('/').map(str::trim).collect();
        if names.iter().any(|name| name.is_empty()) {
            return Err(ComboError::MissingType(s.to_string()));
        }

        let (primary, secondary) = match names.as_slice() {
            [primary] => (chart.id(primary)?, None),
            [primary, secondary] => (chart.id(primary)?, Some(chart.id(secondary)?)),
            _ => return Err(ComboError::TooManyTypes(s.to_string())),
        };

        let tera = match tera.map(str::trim) {
            Some("") => return Err(ComboError::MissingType(s.to_string())),
            Some(name) => Some(chart.id(name)?),
            None => None,
        };

        Ok(Self::new(primary, secondary, tera))
    }

    pub fn primary(&self) -> TypeId {
        self.primary
    }

    pub fn secondary(&self) -> Option<TypeId> {
        self.secondary
    }

    pub fn tera(&self) -> Option<TypeId> {
        self.tera
    }

    pub fn is_monotype(&self) -> bool {
        self.secondary.is_none()
    }

    pub fn is_terastallized(&self) -> bool {
        self.tera.is_some()
    }

    /// Primary type, then secondary type if present
    pub fn natural_types(&self) -> impl Iterator<Item = TypeId> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    /// Label in the form `Primary, Secondary (tera Tera)`
    pub fn display<'a>(&'a self, chart: &'a TypeChart) -> ComboDisplay<'a> {
        ComboDisplay { combo: self, chart }
    }

    // (lower ordinal, higher ordinal, tera); monotypes repeat the primary
    fn key(&self) -> (TypeId, TypeId, Option<TypeId>) {
        let other = self.secondary.unwrap_or(self.primary);
        (
            self.primary.min(other),
            self.primary.max(other),
            self.tera,
        )
    }
}

impl PartialEq for TypeCombination {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TypeCombination {}

impl Hash for TypeCombination {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for TypeCombination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeCombination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Helper for printing a [`TypeCombination`] with chart names
pub struct ComboDisplay<'a> {
    combo: &'a TypeCombination,
    chart: &'a TypeChart,
}

impl fmt::Display for ComboDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chart.name(self.combo.primary))?;
        if let Some(secondary) = self.combo.secondary {
            write!(f, ", {}", self.chart.name(secondary))?;
        }
        if let Some(tera) = self.combo.tera {
            write!(f, " (tera {})", self.chart.name(tera))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use teramatch_chart::Type;

    use super::*;

    fn id(ty: Type) -> TypeId {
        TypeChart::standard().type_id(ty).unwrap()
    }

    #[test]
    fn test_secondary_equal_to_primary_collapses() {
        let combo = TypeCombination::dual(id(Type::Fire), id(Type::Fire));

        assert!(combo.is_monotype());
        assert_eq!(combo.secondary(), None);
        assert_eq!(combo, TypeCombination::mono(id(Type::Fire)));
    }

    #[test]
    fn test_equality_ignores_order() {
        let fire_water = TypeCombination::dual(id(Type::Fire), id(Type::Water));
        let water_fire = TypeCombination::dual(id(Type::Water), id(Type::Fire));

        assert_eq!(fire_water, water_fire);

        let set: HashSet<_> = [fire_water, water_fire].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_tera_is_part_of_identity() {
        let base = TypeCombination::dual(id(Type::Water), id(Type::Ground));
        let tera = base.with_tera(id(Type::Electric));

        assert_ne!(base, tera);
        assert_eq!(tera, TypeCombination::dual(id(Type::Ground), id(Type::Water)).with_tera(id(Type::Electric)));
        assert!(tera.is_terastallized());
        assert!(!base.is_terastallized());
    }

    #[test]
    fn test_ordering_follows_ordinals() {
        let normal = TypeCombination::mono(id(Type::Normal));
        let normal_fire = TypeCombination::dual(id(Type::Fire), id(Type::Normal));
        let fire = TypeCombination::mono(id(Type::Fire));

        assert!(normal < normal_fire);
        assert!(normal_fire < fire);
        assert!(fire < fire.with_tera(id(Type::Normal)));
    }

    #[test]
    fn test_natural_types() {
        let combo = TypeCombination::dual(id(Type::Water), id(Type::Ground));
        let types: Vec<_> = combo.natural_types().collect();

        assert_eq!(types, vec![id(Type::Water), id(Type::Ground)]);
        assert_eq!(TypeCombination::mono(id(Type::Ice)).natural_types().count(), 1);
    }

    #[test]
    fn test_parse() {
        let chart = TypeChart::standard();

        let combo = TypeCombination::parse(&chart, "water / ground @ Electric").unwrap();
        assert_eq!(combo.primary(), id(Type::Water));
        assert_eq!(combo.secondary(), Some(id(Type::Ground)));
        assert_eq!(combo.tera(), Some(id(Type::Electric)));

        let mono = TypeCombination::parse(&chart, "Fire/Fire").unwrap();
        assert!(mono.is_monotype());
    }

    #[test]
    fn test_parse_errors() {
        let chart = TypeChart::standard();

        assert!(matches!(
            TypeCombination::parse(&chart, ""),
            Err(ComboError::MissingType(_))
        ));
        assert!(matches!(
            TypeCombination::parse(&chart, "Fire/"),
            Err(ComboError::MissingType(_))
        ));
        assert!(matches!(
            TypeCombination::parse(&chart, "Fire@"),
            Err(ComboError::MissingType(_))
        ));
        assert!(matches!(
            TypeCombination::parse(&chart, "Fire/Water/Grass"),
            Err(ComboError::TooManyTypes(_))
        ));
        assert!(matches!(
            TypeCombination::parse(&chart, "Fire/Sound"),
            Err(ComboError::Chart(_))
        ));
    }

    #[test]
    fn test_display() {
        let chart = TypeChart::standard();
        let mono = TypeCombination::mono(id(Type::Fire));
        let dual = TypeCombination::dual(id(Type::Water), id(Type::Ground));
        let tera = dual.with_tera(id(Type::Electric));

        assert_eq!(mono.display(&chart).to_string(), "Fire");
        assert_eq!(dual.display(&chart).to_string(), "Water, Ground");
        assert_eq!(tera.display(&chart).to_string(), "Water, Ground (tera Electric)");
    }
}
