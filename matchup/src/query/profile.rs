//! Defensive profile of a type combination

use teramatch_chart::TypeId;

use crate::combo::TypeCombination;
use crate::engine::MatchupEngine;

/// Check if defender takes more than 1x from any of the attacking types
pub fn is_weak_to_any(engine: &MatchupEngine<'_>, defender: &TypeCombination, attacking: &[TypeId]) -> bool {
    attacking
        .iter()
        .any(|t| engine.damage_from_move(defender, *t) > 1.0)
}

/// Check if defender takes less than 1x from all of the attacking types
pub fn resists_all(engine: &MatchupEngine<'_>, defender: &TypeCombination, attacking: &[TypeId]) -> bool {
    if attacking.is_empty() {
        return false;
    }
    attacking
        .iter()
        .all(|t| engine.damage_from_move(defender, *t) < 1.0)
}

/// Check if defender takes no damage from a type
pub fn is_immune_to(engine: &MatchupEngine<'_>, defender: &TypeCombination, attacking: TypeId) -> bool {
    engine.damage_from_move(defender, attacking) == 0.0
}

/// All types that are super effective against the defender
pub fn weaknesses(engine: &MatchupEngine<'_>, defender: &TypeCombination) -> Vec<TypeId> {
    engine
        .chart()
        .ids()
        .filter(|t| engine.damage_from_move(defender, *t) > 1.0)
        .collect()
}

/// All types the defender resists (0 < multiplier < 1)
pub fn resistances(engine: &MatchupEngine<'_>, defender: &TypeCombination) -> Vec<TypeId> {
    engine
        .chart()
        .ids()
        .filter(|t| {
            let multiplier = engine.damage_from_move(defender, *t);
            multiplier > 0.0 && multiplier < 1.0
        })
        .collect()
}

/// All types the defender is immune to
pub fn immunities(engine: &MatchupEngine<'_>, defender: &TypeCombination) -> Vec<TypeId> {
    engine
        .chart()
        .ids()
        .filter(|t| engine.damage_from_move(defender, *t) == 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use teramatch_chart::{Type, TypeChart};

    use super::*;

    fn id(ty: Type) -> TypeId {
        TypeChart::standard().type_id(ty).unwrap()
    }

    fn mono(ty: Type) -> TypeCombination {
        TypeCombination::mono(id(ty))
    }

    fn ids(types: &[Type]) -> Vec<TypeId> {
        types.iter().map(|t| id(*t)).collect()
    }

    #[test]
    fn test_is_weak_to_any() {
        let chart = TypeChart::standard();
        let engine = MatchupEngine::new(&chart);
        let water = mono(Type::Water);

        assert!(is_weak_to_any(&engine, &water, &ids(&[Type::Electric, Type::Grass])));
        assert!(!is_weak_to_any(&engine, &water, &ids(&[Type::Fire, Type::Ice])));
    }

    #[test]
    fn test_resists_all() {
        let chart = TypeChart::standard();
        let engine = MatchupEngine::new(&chart);
        let steel = mono(Type::Steel);

        assert!(resists_all(&engine, &steel, &ids(&[Type::Normal, Type::Ice, Type::Fairy])));
        assert!(!resists_all(&engine, &steel, &ids(&[Type::Fire, Type::Ice])));
        assert!(!resists_all(&engine, &steel, &[]));
    }

    #[test]
    fn test_is_immune_to() {
        let chart = TypeChart::standard();
        let engine = MatchupEngine::new(&chart);
        let ghost = mono(Type::Ghost);

        assert!(is_immune_to(&engine, &ghost, id(Type::Normal)));
        assert!(is_immune_to(&engine, &ghost, id(Type::Fighting)));
        assert!(!is_immune_to(&engine, &ghost, id(Type::Dark)));
        assert!(is_immune_to(&engine, &mono(Type::Ground), id(Type::Electric)));
    }

    #[test]
    fn test_weaknesses() {
        let chart = TypeChart::standard();
        let engine = MatchupEngine::new(&chart);

        // Steel is weak to Fire, Fighting, Ground
        assert_eq!(
            weaknesses(&engine, &mono(Type::Steel)),
            ids(&[Type::Fire, Type::Fighting, Type::Ground])
        );
    }

    #[test]
    fn test_weaknesses_dual_type() {
        let chart = TypeChart::standard();
        let engine = MatchupEngine::new(&chart);

        // Water/Ground is only weak to Grass (4x)
        let swampert = TypeCombination::dual(id(Type::Water), id(Type::Ground));
        assert_eq!(weaknesses(&engine, &swampert), ids(&[Type::Grass]));
    }

    #[test]
    fn test_weaknesses_follow_tera() {
        let chart = TypeChart::standard();
        let engine = MatchupEngine::new(&chart);

        let tera_electric = TypeCombination::dual(id(Type::Water), id(Type::Ground))
            .with_tera(id(Type::Electric));
        assert_eq!(weaknesses(&engine, &tera_electric), ids(&[Type::Ground]));
        assert!(immunities(&engine, &tera_electric).is_empty());
    }

    #[test]
    fn test_resistances() {
        let chart = TypeChart::standard();
        let engine = MatchupEngine::new(&chart);
        let resists = resistances(&engine, &mono(Type::Steel));

        assert!(resists.contains(&id(Type::Normal)));
        assert!(resists.contains(&id(Type::Ice)));
        assert!(resists.contains(&id(Type::Fairy)));
        assert!(!resists.contains(&id(Type::Fire)));
        // Poison is an immunity, not a resistance
        assert!(!resists.contains(&id(Type::Poison)));
    }

    #[test]
    fn test_immunities() {
        let chart = TypeChart::standard();
        let engine = MatchupEngine::new(&chart);

        assert_eq!(
            immunities(&engine, &mono(Type::Ghost)),
            ids(&[Type::Normal, Type::Fighting])
        );
    }
}
