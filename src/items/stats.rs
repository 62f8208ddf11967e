//! # Item Stats
//!
//! Attribute bonuses, combat stats, dice damage and equip slots carried by
//! stat-bearing items.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Primary character attribute that an item can boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Agility,
    Constitution,
    Intelligence,
    Spirit,
    Charisma,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Spirit,
        Attribute::Charisma,
    ];

    /// Attributes an elixir may boost. Charisma is never brewed.
    pub const ELIXIR: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Spirit,
    ];
}

/// A single stat magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatValue {
    pub value: u32,
    pub is_percentage: bool,
}

impl StatValue {
    /// A flat (non-percentage) stat.
    pub fn flat(value: u32) -> Self {
        Self {
            value,
            is_percentage: false,
        }
    }
}

/// Attribute bonuses keyed by attribute.
pub type BaseStats = BTreeMap<Attribute, StatValue>;

/// Damage types used by weapon dice, bonus damage and armor resistances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    Slashing,
    Piercing,
    Bludgeoning,
    Fire,
    Cold,
    Lightning,
    Acid,
    Force,
    Necrotic,
    Radiant,
    Poison,
    Psychic,
    Thunder,
}

impl DamageType {
    /// Elemental and condition types used for resistances and bonus damage.
    pub const ELEMENTAL: [DamageType; 10] = [
        DamageType::Fire,
        DamageType::Cold,
        DamageType::Lightning,
        DamageType::Acid,
        DamageType::Force,
        DamageType::Necrotic,
        DamageType::Radiant,
        DamageType::Poison,
        DamageType::Psychic,
        DamageType::Thunder,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DamageType::Slashing => "slashing",
            DamageType::Piercing => "piercing",
            DamageType::Bludgeoning => "bludgeoning",
            DamageType::Fire => "fire",
            DamageType::Cold => "cold",
            DamageType::Lightning => "lightning",
            DamageType::Acid => "acid",
            DamageType::Force => "force",
            DamageType::Necrotic => "necrotic",
            DamageType::Radiant => "radiant",
            DamageType::Poison => "poison",
            DamageType::Psychic => "psychic",
            DamageType::Thunder => "thunder",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Combat-facing stats. Only the fields that were rolled are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<StatValue>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resistances: BTreeMap<DamageType, StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_restore: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_restore: Option<StatValue>,
}

impl CombatStats {
    pub fn is_empty(&self) -> bool {
        self.damage.is_none()
            && self.armor_class.is_none()
            && self.resistances.is_empty()
            && self.health_restore.is_none()
            && self.mana_restore.is_none()
    }
}

/// Dice damage descriptor for weapons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponStats {
    pub dice_count: u32,
    pub dice_type: u32,
    pub damage_type: DamageType,
    pub bonus_damage: u32,
    #[serde(default)]
    pub bonus_damage_type: Option<DamageType>,
    pub display: DamageDisplay,
}

impl WeaponStats {
    pub fn new(
        dice_count: u32,
        dice_type: u32,
        damage_type: DamageType,
        bonus_damage: u32,
        bonus_damage_type: Option<DamageType>,
    ) -> Self {
        let display = DamageDisplay {
            base: format!("{}d{}", dice_count, dice_type),
            damage_type,
            bonus: (bonus_damage > 0).then_some(bonus_damage),
            bonus_type: bonus_damage_type,
        };
        Self {
            dice_count,
            dice_type,
            damage_type,
            bonus_damage,
            bonus_damage_type,
            display,
        }
    }

    /// Dice notation such as `2d8`.
    pub fn notation(&self) -> &str {
        &self.display.base
    }
}

/// Pre-rendered damage summary for tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageDisplay {
    pub base: String,
    #[serde(rename = "type")]
    pub damage_type: DamageType,
    pub bonus: Option<u32>,
    pub bonus_type: Option<DamageType>,
}

/// Equipment slot an item can be worn or wielded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipSlot {
    MainHand,
    OffHand,
    TwoHand,
    Ranged,
    Chest,
    Finger,
    Neck,
    Trinket,
    Back,
    Waist,
}

/// How a weapon is wielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WieldStyle {
    OneHanded,
    MainHand,
    OffHand,
    TwoHanded,
    Ranged,
}

impl WieldStyle {
    /// Slot a weapon with this wielding style occupies.
    pub fn slot(self) -> EquipSlot {
        match self {
            WieldStyle::TwoHanded => EquipSlot::TwoHand,
            WieldStyle::Ranged => EquipSlot::Ranged,
            WieldStyle::OffHand => EquipSlot::OffHand,
            WieldStyle::OneHanded | WieldStyle::MainHand => EquipSlot::MainHand,
        }
    }

    /// Hand shown on the weapon record.
    pub fn hand(self) -> Hand {
        match self {
            WieldStyle::Ranged => Hand::Ranged,
            _ => Hand::MainHand,
        }
    }
}

/// Hand reported on a weapon record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Hand {
    MainHand,
    Ranged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_stats_display() {
        let stats = WeaponStats::new(2, 8, DamageType::Slashing, 3, Some(DamageType::Fire));
        assert_eq!(stats.notation(), "2d8");
        assert_eq!(stats.display.bonus, Some(3));
        assert_eq!(stats.display.bonus_type, Some(DamageType::Fire));

        let plain = WeaponStats::new(1, 4, DamageType::Piercing, 0, None);
        assert_eq!(plain.display.bonus, None);
    }

    #[test]
    fn test_wield_style_slots() {
        assert_eq!(WieldStyle::TwoHanded.slot(), EquipSlot::TwoHand);
        assert_eq!(WieldStyle::Ranged.slot(), EquipSlot::Ranged);
        assert_eq!(WieldStyle::OffHand.slot(), EquipSlot::OffHand);
        assert_eq!(WieldStyle::OneHanded.slot(), EquipSlot::MainHand);
        assert_eq!(WieldStyle::Ranged.hand(), Hand::Ranged);
        assert_eq!(WieldStyle::TwoHanded.hand(), Hand::MainHand);
    }

    #[test]
    fn test_combat_stats_emptiness() {
        let mut stats = CombatStats::default();
        assert!(stats.is_empty());
        stats.resistances.insert(DamageType::Cold, StatValue::flat(2));
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_combat_stats_serialization_skips_absent_fields() {
        let stats = CombatStats {
            armor_class: Some(StatValue::flat(4)),
            ..CombatStats::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["armorClass"]["value"], 4);
        assert!(json.get("damage").is_none());
        assert!(json.get("resistances").is_none());
    }
}
