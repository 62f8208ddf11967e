//! # Stat Formulas
//!
//! Attribute bonuses, combat stats and weapon dice, all driven by the
//! combined scaling factor (quality stat multiplier times power scale).

use super::WeaponProfile;
use crate::utils::{at_least_one, pick, scaled_floor, RandomSource};
use crate::{
    Attribute, BaseStats, CombatStats, ConsumableType, DamageType, ItemCategory, LootError,
    LootResult, Quality, StatValue, WeaponStats,
};

/// Most dice a weapon can roll.
const MAX_DICE: u32 = 4;

/// Rolls attribute bonuses.
///
/// Between one and `max(1, min(6, floor(factor * 2)))` distinct attributes
/// are chosen, each worth `max(1, floor(factor * d3))`.
pub fn generate_base_stats(factor: f64, rng: &mut dyn RandomSource) -> BaseStats {
    let max_stats = scaled_floor(factor * 2.0).clamp(1, Attribute::ALL.len() as u32);
    let count = rng.random_int(1, max_stats);

    let mut pool = Attribute::ALL.to_vec();
    let mut stats = BaseStats::new();
    for _ in 0..count {
        let Some(index) = rng.pick_index(pool.len()) else {
            break;
        };
        let attribute = pool.remove(index);
        let value = at_least_one(factor * rng.random_int(1, 3) as f64);
        stats.insert(attribute, StatValue::flat(value));
    }
    stats
}

/// Rolls combat stats for weapons and armor. Other categories get none.
///
/// Weapons may gain a flat damage bonus: never when poor, half the time
/// when common, always above that. Armor always gets an armor class, plus
/// one elemental resistance from uncommon upwards.
pub fn generate_combat_stats(
    category: ItemCategory,
    quality: Quality,
    factor: f64,
    rng: &mut dyn RandomSource,
) -> CombatStats {
    let mut stats = CombatStats::default();
    match category {
        ItemCategory::Weapon => {
            let rolls_damage = match quality {
                Quality::Poor => false,
                Quality::Common => rng.chance(0.5),
                _ => true,
            };
            if rolls_damage {
                let value = at_least_one(factor * rng.random_int(1, 3) as f64);
                stats.damage = Some(StatValue::flat(value));
            }
        }
        ItemCategory::Armor => {
            let armor_class = at_least_one(factor * rng.random_int(1, 5) as f64);
            stats.armor_class = Some(StatValue::flat(armor_class));

            if quality >= Quality::Uncommon {
                if let Some(resistance) = pick(rng, &DamageType::ELEMENTAL).copied() {
                    let value = at_least_one(factor * rng.random_int(1, 5) as f64);
                    stats.resistances.insert(resistance, StatValue::flat(value));
                }
            }
        }
        _ => {}
    }
    stats
}

/// Rolls the dice descriptor of a weapon.
///
/// The dice count is `floor(factor)` clamped to 1..=4 and the die size is
/// taken from `dice_ladder` at index `floor(factor * 2)`, capped at the top
/// rung. Bonus damage needs better than common quality; a bonus damage type
/// needs better than uncommon.
pub fn generate_weapon_stats(
    profile: WeaponProfile,
    quality: Quality,
    factor: f64,
    dice_ladder: &[u32],
    rng: &mut dyn RandomSource,
) -> LootResult<WeaponStats> {
    let top = dice_ladder
        .len()
        .checked_sub(1)
        .ok_or_else(|| LootError::missing("dice ladder", "any rung"))?;

    let dice_count = scaled_floor(factor).clamp(1, MAX_DICE);
    let rung = (scaled_floor(factor * 2.0) as usize).min(top);
    let dice_type = dice_ladder[rung];

    let mut bonus_damage = 0;
    let mut bonus_damage_type = None;
    if quality > Quality::Common {
        bonus_damage = at_least_one(factor);
        if quality > Quality::Uncommon {
            bonus_damage_type = pick(rng, &DamageType::ELEMENTAL).copied();
        }
    }

    Ok(WeaponStats::new(
        dice_count,
        dice_type,
        profile.damage_type,
        bonus_damage,
        bonus_damage_type,
    ))
}

/// Rolls the effects of a consumable.
///
/// One of health or mana restore is seeded, then the subtype adjusts it:
/// potions double the seeded value, elixirs add an attribute boost and food
/// replaces the health restore with a larger roll.
pub fn generate_consumable_stats(
    subtype: ConsumableType,
    factor: f64,
    rng: &mut dyn RandomSource,
) -> (BaseStats, CombatStats) {
    let mut base_stats = BaseStats::new();
    let mut combat_stats = CombatStats::default();

    let restore = StatValue::flat(at_least_one(factor * rng.random_int(1, 5) as f64));
    if rng.chance(0.5) {
        combat_stats.health_restore = Some(restore);
    } else {
        combat_stats.mana_restore = Some(restore);
    }

    match subtype {
        ConsumableType::Potion => {
            if let Some(health) = combat_stats.health_restore.as_mut() {
                health.value *= 2;
            } else if let Some(mana) = combat_stats.mana_restore.as_mut() {
                mana.value *= 2;
            }
        }
        ConsumableType::Elixir => {
            if let Some(attribute) = pick(rng, &Attribute::ELIXIR).copied() {
                let value = at_least_one(factor * rng.random_int(1, 3) as f64);
                base_stats.insert(attribute, StatValue::flat(value));
            }
        }
        ConsumableType::Food => {
            let value = at_least_one(factor * rng.random_int(2, 6) as f64);
            combat_stats.health_restore = Some(StatValue::flat(value));
        }
        ConsumableType::Scroll | ConsumableType::Bandage => {}
    }

    (base_stats, combat_stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SequenceSource;
    use crate::WieldStyle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const LADDER: [u32; 5] = [4, 6, 8, 10, 12];

    fn slashing() -> WeaponProfile {
        WeaponProfile {
            wield: WieldStyle::OneHanded,
            damage_type: DamageType::Slashing,
        }
    }

    #[test]
    fn test_base_stat_count_is_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            // factor 0.5: floor(1.0) = 1 stat at most
            assert_eq!(generate_base_stats(0.5, &mut rng).len(), 1);
            let stats = generate_base_stats(1.5, &mut rng);
            assert!((1..=3).contains(&stats.len()));
            assert!(stats.values().all(|stat| stat.value >= 1 && !stat.is_percentage));
        }
    }

    #[test]
    fn test_high_factor_can_roll_every_attribute() {
        // count draw 0.99 -> six stats, each worth at least the factor
        let mut rng = SequenceSource::new(vec![0.99, 0.0, 0.5]);
        let stats = generate_base_stats(8.0, &mut rng);
        assert_eq!(stats.len(), 6);
        assert!(stats.values().all(|stat| stat.value >= 8));
    }

    #[test]
    fn test_tiny_factor_floors_to_one() {
        let mut rng = StdRng::seed_from_u64(5);
        let stats = generate_base_stats(0.01, &mut rng);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.values().next().unwrap().value, 1);
    }

    #[test]
    fn test_poor_weapons_never_roll_damage() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let stats = generate_combat_stats(ItemCategory::Weapon, Quality::Poor, 0.5, &mut rng);
            assert!(stats.damage.is_none());
        }
    }

    #[test]
    fn test_common_weapon_damage_is_a_coin_flip() {
        let mut heads = SequenceSource::new(vec![0.1, 0.0]);
        let stats = generate_combat_stats(ItemCategory::Weapon, Quality::Common, 1.0, &mut heads);
        assert_eq!(stats.damage, Some(StatValue::flat(1)));

        let mut tails = SequenceSource::constant(0.9);
        let stats = generate_combat_stats(ItemCategory::Weapon, Quality::Common, 1.0, &mut tails);
        assert!(stats.damage.is_none());
    }

    #[test]
    fn test_armor_resistance_gated_by_quality() {
        let mut rng = StdRng::seed_from_u64(2);
        let common = generate_combat_stats(ItemCategory::Armor, Quality::Common, 1.0, &mut rng);
        assert!(common.armor_class.is_some());
        assert!(common.resistances.is_empty());

        let rare = generate_combat_stats(ItemCategory::Armor, Quality::Rare, 2.0, &mut rng);
        assert!(rare.armor_class.unwrap().value >= 2);
        assert_eq!(rare.resistances.len(), 1);
        let resistance = rare.resistances.keys().next().unwrap();
        assert!(DamageType::ELEMENTAL.contains(resistance));
    }

    #[test]
    fn test_accessories_have_no_combat_stats() {
        let mut rng = StdRng::seed_from_u64(2);
        let stats = generate_combat_stats(ItemCategory::Accessory, Quality::Epic, 2.5, &mut rng);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_weapon_dice_scale_with_factor() {
        let mut rng = StdRng::seed_from_u64(4);

        let poor = generate_weapon_stats(slashing(), Quality::Poor, 0.5, &LADDER, &mut rng).unwrap();
        assert_eq!((poor.dice_count, poor.dice_type), (1, 6));
        assert_eq!(poor.bonus_damage, 0);
        assert_eq!(poor.bonus_damage_type, None);

        let rare = generate_weapon_stats(slashing(), Quality::Rare, 2.0, &LADDER, &mut rng).unwrap();
        assert_eq!((rare.dice_count, rare.dice_type), (2, 12));
        assert_eq!(rare.bonus_damage, 2);
        assert!(rare.bonus_damage_type.is_some());
        assert_eq!(rare.notation(), "2d12");

        let artifact =
            generate_weapon_stats(slashing(), Quality::Artifact, 8.0, &LADDER, &mut rng).unwrap();
        assert_eq!(artifact.dice_count, 4);
    }

    #[test]
    fn test_uncommon_weapon_bonus_has_no_type() {
        let mut rng = StdRng::seed_from_u64(4);
        let stats =
            generate_weapon_stats(slashing(), Quality::Uncommon, 1.5, &LADDER, &mut rng).unwrap();
        assert_eq!(stats.bonus_damage, 1);
        assert_eq!(stats.bonus_damage_type, None);
        assert_eq!(stats.damage_type, DamageType::Slashing);
    }

    #[test]
    fn test_empty_dice_ladder_is_an_error() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(generate_weapon_stats(slashing(), Quality::Rare, 2.0, &[], &mut rng).is_err());
    }

    #[test]
    fn test_potion_doubles_seeded_restore() {
        // restore roll 0.0 -> 1, coin 0.1 -> health
        let mut rng = SequenceSource::new(vec![0.0, 0.1]);
        let (base, combat) = generate_consumable_stats(ConsumableType::Potion, 2.0, &mut rng);
        assert!(base.is_empty());
        assert_eq!(combat.health_restore, Some(StatValue::flat(4)));
        assert!(combat.mana_restore.is_none());
    }

    #[test]
    fn test_consumables_seed_exactly_one_restore() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let (_, combat) = generate_consumable_stats(ConsumableType::Bandage, 1.0, &mut rng);
            assert!(combat.health_restore.is_some() ^ combat.mana_restore.is_some());
        }
    }

    #[test]
    fn test_elixir_boosts_an_attribute_other_than_charisma() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..100 {
            let (base, _) = generate_consumable_stats(ConsumableType::Elixir, 1.0, &mut rng);
            assert_eq!(base.len(), 1);
            assert!(!base.contains_key(&Attribute::Charisma));
        }
    }

    #[test]
    fn test_food_always_restores_health() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..100 {
            let (_, combat) = generate_consumable_stats(ConsumableType::Food, 1.0, &mut rng);
            assert!(combat.health_restore.unwrap().value >= 2);
        }
    }
}
