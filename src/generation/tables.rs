//! # Generation Tables
//!
//! Every static lookup the engine consults, gathered into one immutable
//! [`GenerationTables`] value.
//!
//! `GenerationTables::default()` carries the production tables. Callers can
//! load overrides from JSON; any field missing from the document keeps its
//! production value.

use super::DimensionTable;
use crate::config;
use crate::{
    AccessoryType, ArmorType, ConsumableType, ContainerSize, CurrencyPreset, CurrencyValue,
    DamageType, Denomination, EquipSlot, FillLevel, GridSize, ItemCategory, ItemSubtype,
    LootError, LootResult, MiscType, Quality, WeaponType, WieldStyle,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const FALLBACK_PRESETS: &[CurrencyPreset] = &[CurrencyPreset::ModestSum];

/// Stat and value weights of one quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityWeights {
    pub stat_multiplier: f64,
    pub value_multiplier: f64,
}

/// One entry of a quality distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityWeight {
    pub quality: Quality,
    pub weight: u32,
}

impl QualityWeight {
    pub fn new(quality: Quality, weight: u32) -> Self {
        Self { quality, weight }
    }
}

/// How a weapon subtype is wielded and what damage it deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponProfile {
    pub wield: WieldStyle,
    pub damage_type: DamageType,
}

impl Default for WeaponProfile {
    fn default() -> Self {
        Self {
            wield: WieldStyle::OneHanded,
            damage_type: DamageType::Slashing,
        }
    }
}

/// A named amount of coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPresetInfo {
    /// Denomination of the lump `value`
    pub denomination: Denomination,
    pub value: u32,
    /// Per-denomination amounts; when present they replace the lump value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_display: Option<CurrencyValue>,
    pub icon: String,
    pub description: String,
}

/// Container icons for one size class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerIcons {
    pub standard: String,
    /// Used for epic and better containers
    pub ornate: String,
}

/// Immutable configuration consulted by every generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationTables {
    pub qualities: BTreeMap<Quality, QualityWeights>,
    /// Inclusive range of the random base value before scaling
    pub value_base_range: (u32, u32),
    pub dimensions: DimensionTable,
    pub container_grids: BTreeMap<ContainerSize, GridSize>,
    /// Fill percentage (0-100) per fill level
    pub fill_levels: BTreeMap<FillLevel, u32>,
    pub quality_distributions: BTreeMap<Quality, Vec<QualityWeight>>,
    /// Used when a container quality has no distribution of its own
    pub fallback_distribution: Vec<QualityWeight>,
    pub dice_ladder: Vec<u32>,
    pub weapon_profiles: BTreeMap<WeaponType, WeaponProfile>,
    pub equip_slots: BTreeMap<ItemSubtype, Vec<EquipSlot>>,
    pub currency_presets: BTreeMap<CurrencyPreset, CurrencyPresetInfo>,
    /// Presets a currency item of each quality chooses between
    pub currency_by_quality: BTreeMap<Quality, Vec<CurrencyPreset>>,
    /// Name prefix of currency items; tiers without an entry use the bare preset name
    pub currency_prefixes: BTreeMap<Quality, String>,
    pub name_prefixes: BTreeMap<Quality, Vec<String>>,
    pub container_nouns: BTreeMap<ContainerSize, Vec<String>>,
    pub descriptions: BTreeMap<ItemCategory, BTreeMap<Quality, String>>,
    pub icon_pools: BTreeMap<ItemSubtype, Vec<String>>,
    pub category_icons: BTreeMap<ItemCategory, String>,
    pub fallback_icon: String,
    pub container_icons: BTreeMap<ContainerSize, ContainerIcons>,
    pub icon_base_url: String,
    /// Categories the container filler draws from
    pub fill_categories: Vec<ItemCategory>,
    pub max_fill_attempts: u32,
    pub max_stack_size: u32,
}

impl GenerationTables {
    /// Parses tables from JSON. Missing fields keep their production values.
    pub fn from_json(json: &str) -> LootResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> LootResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and parses a JSON table file.
    pub fn load(path: impl AsRef<Path>) -> LootResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn quality_weights(&self, quality: Quality) -> LootResult<QualityWeights> {
        self.qualities
            .get(&quality)
            .copied()
            .ok_or_else(|| LootError::missing("quality", quality))
    }

    /// Combined scaling factor: the tier's stat multiplier times the power scale.
    pub fn scaling_factor(&self, quality: Quality, power_scale: f64) -> LootResult<f64> {
        Ok(self.quality_weights(quality)?.stat_multiplier * power_scale)
    }

    pub fn grid_size(&self, size: ContainerSize) -> LootResult<GridSize> {
        self.container_grids
            .get(&size)
            .copied()
            .ok_or_else(|| LootError::missing("container grid", size))
    }

    pub fn fill_percentage(&self, level: FillLevel) -> LootResult<u32> {
        self.fill_levels
            .get(&level)
            .copied()
            .ok_or_else(|| LootError::missing("fill level", level))
    }

    /// Quality distribution for items found in a container of `quality`.
    pub fn distribution_for(&self, quality: Quality) -> &[QualityWeight] {
        self.quality_distributions
            .get(&quality)
            .map(Vec::as_slice)
            .unwrap_or(self.fallback_distribution.as_slice())
    }

    pub fn weapon_profile(&self, weapon: WeaponType) -> WeaponProfile {
        self.weapon_profiles.get(&weapon).copied().unwrap_or_default()
    }

    /// Equip slots of a non-weapon subtype; empty when unmapped.
    pub fn slots_for(&self, subtype: ItemSubtype) -> Vec<EquipSlot> {
        self.equip_slots.get(&subtype).cloned().unwrap_or_default()
    }

    pub fn currency_preset(&self, preset: CurrencyPreset) -> LootResult<&CurrencyPresetInfo> {
        self.currency_presets
            .get(&preset)
            .ok_or_else(|| LootError::missing("currency preset", preset))
    }

    /// Presets a currency item of `quality` may use.
    pub fn currency_choices(&self, quality: Quality) -> &[CurrencyPreset] {
        self.currency_by_quality
            .get(&quality)
            .map(Vec::as_slice)
            .unwrap_or(FALLBACK_PRESETS)
    }

    pub fn name_prefixes(&self, quality: Quality) -> LootResult<&[String]> {
        self.name_prefixes
            .get(&quality)
            .map(Vec::as_slice)
            .filter(|prefixes| !prefixes.is_empty())
            .ok_or_else(|| LootError::missing("name prefix", quality))
    }

    pub fn description(&self, category: ItemCategory, quality: Quality) -> LootResult<&str> {
        self.descriptions
            .get(&category)
            .and_then(|by_quality| by_quality.get(&quality))
            .map(String::as_str)
            .ok_or_else(|| LootError::missing("description", format!("{}/{}", category, quality)))
    }

    /// Checks the internal consistency of the tables.
    ///
    /// Every distribution must sum to 100 and quality weights must increase
    /// with the tier.
    pub fn validate(&self) -> LootResult<()> {
        for (quality, distribution) in &self.quality_distributions {
            let total: u32 = distribution.iter().map(|entry| entry.weight).sum();
            if total != 100 {
                return Err(LootError::InvalidRequest(format!(
                    "quality distribution for {} sums to {}, expected 100",
                    quality, total
                )));
            }
        }

        let fallback: u32 = self.fallback_distribution.iter().map(|entry| entry.weight).sum();
        if fallback != 100 {
            return Err(LootError::InvalidRequest(format!(
                "fallback quality distribution sums to {}, expected 100",
                fallback
            )));
        }

        let weights: Vec<&QualityWeights> = self.qualities.values().collect();
        for pair in weights.windows(2) {
            if pair[1].stat_multiplier <= pair[0].stat_multiplier
                || pair[1].value_multiplier <= pair[0].value_multiplier
            {
                return Err(LootError::InvalidRequest(
                    "quality multipliers must increase with the tier".to_string(),
                ));
            }
        }

        if self.dice_ladder.is_empty() {
            return Err(LootError::InvalidRequest("dice ladder is empty".to_string()));
        }

        if let Some((level, percentage)) = self.fill_levels.iter().find(|(_, p)| **p > 100) {
            return Err(LootError::InvalidRequest(format!(
                "fill level {} is {}%",
                level, percentage
            )));
        }

        let (min, max) = self.value_base_range;
        if min > max {
            return Err(LootError::InvalidRequest(format!(
                "value base range {}..={} is reversed",
                min, max
            )));
        }

        let sides = 1..=config::MAX_GRID_SIDE;
        if let Some((size, grid)) = self
            .container_grids
            .iter()
            .find(|(_, grid)| !sides.contains(&grid.rows) || !sides.contains(&grid.cols))
        {
            return Err(LootError::InvalidRequest(format!(
                "{} grid is {}x{}, each side must be 1 to {}",
                size,
                grid.rows,
                grid.cols,
                config::MAX_GRID_SIDE
            )));
        }

        Ok(())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn by_quality<T>(values: [T; 7]) -> BTreeMap<Quality, T> {
    Quality::ALL.into_iter().zip(values).collect()
}

fn default_qualities() -> BTreeMap<Quality, QualityWeights> {
    let weights = |stat_multiplier, value_multiplier| QualityWeights {
        stat_multiplier,
        value_multiplier,
    };
    by_quality([
        weights(0.5, 0.1),
        weights(1.0, 0.5),
        weights(1.5, 2.0),
        weights(2.0, 10.0),
        weights(2.5, 50.0),
        weights(3.0, 200.0),
        weights(4.0, 1000.0),
    ])
}

fn default_distributions() -> BTreeMap<Quality, Vec<QualityWeight>> {
    use Quality::*;
    let table = |entries: &[(Quality, u32)]| {
        entries
            .iter()
            .map(|(quality, weight)| QualityWeight::new(*quality, *weight))
            .collect::<Vec<_>>()
    };
    BTreeMap::from([
        (Poor, table(&[(Poor, 70), (Common, 30)])),
        (Common, table(&[(Poor, 30), (Common, 60), (Uncommon, 10)])),
        (Uncommon, table(&[(Poor, 10), (Common, 50), (Uncommon, 35), (Rare, 5)])),
        (Rare, table(&[(Common, 30), (Uncommon, 50), (Rare, 18), (Epic, 2)])),
        (Epic, table(&[(Uncommon, 20), (Rare, 50), (Epic, 28), (Legendary, 2)])),
        (Legendary, table(&[(Rare, 20), (Epic, 50), (Legendary, 28), (Artifact, 2)])),
        (Artifact, table(&[(Epic, 10), (Legendary, 60), (Artifact, 30)])),
    ])
}

fn default_weapon_profiles() -> BTreeMap<WeaponType, WeaponProfile> {
    use DamageType::*;
    use WieldStyle::*;
    let profile = |wield, damage_type| WeaponProfile { wield, damage_type };
    BTreeMap::from([
        (WeaponType::Sword, profile(OneHanded, Slashing)),
        (WeaponType::Axe, profile(OneHanded, Slashing)),
        (WeaponType::Mace, profile(OneHanded, Bludgeoning)),
        (WeaponType::Dagger, profile(OneHanded, Piercing)),
        (WeaponType::Staff, profile(TwoHanded, Bludgeoning)),
        (WeaponType::Polearm, profile(TwoHanded, Slashing)),
        (WeaponType::Bow, profile(Ranged, Piercing)),
        (WeaponType::Crossbow, profile(Ranged, Piercing)),
        (WeaponType::Wand, profile(Ranged, Force)),
        (WeaponType::Greatsword, profile(TwoHanded, Slashing)),
        (WeaponType::Greataxe, profile(TwoHanded, Slashing)),
        (WeaponType::Maul, profile(TwoHanded, Bludgeoning)),
        (WeaponType::Halberd, profile(TwoHanded, Slashing)),
        (WeaponType::Spear, profile(OneHanded, Piercing)),
        (WeaponType::Rapier, profile(MainHand, Piercing)),
        (WeaponType::Saber, profile(MainHand, Slashing)),
        (WeaponType::ParryingDagger, profile(OffHand, Piercing)),
        (WeaponType::Thrown, profile(Ranged, Slashing)),
        (WeaponType::Sling, profile(Ranged, Bludgeoning)),
    ])
}

fn default_equip_slots() -> BTreeMap<ItemSubtype, Vec<EquipSlot>> {
    BTreeMap::from([
        (ItemSubtype::Armor(ArmorType::Cloth), vec![EquipSlot::Chest]),
        (ItemSubtype::Armor(ArmorType::Leather), vec![EquipSlot::Chest]),
        (ItemSubtype::Armor(ArmorType::Mail), vec![EquipSlot::Chest]),
        (ItemSubtype::Armor(ArmorType::Plate), vec![EquipSlot::Chest]),
        (ItemSubtype::Armor(ArmorType::Shield), vec![EquipSlot::OffHand]),
        (ItemSubtype::Accessory(AccessoryType::Ring), vec![EquipSlot::Finger]),
        (ItemSubtype::Accessory(AccessoryType::Necklace), vec![EquipSlot::Neck]),
        (ItemSubtype::Accessory(AccessoryType::Trinket), vec![EquipSlot::Trinket]),
        (ItemSubtype::Accessory(AccessoryType::Cloak), vec![EquipSlot::Back]),
        (ItemSubtype::Accessory(AccessoryType::Belt), vec![EquipSlot::Waist]),
    ])
}

fn default_currency_presets() -> BTreeMap<CurrencyPreset, CurrencyPresetInfo> {
    let preset = |denomination, value, value_display, icon: &str, description: &str| {
        CurrencyPresetInfo {
            denomination,
            value,
            value_display,
            icon: icon.to_string(),
            description: description.to_string(),
        }
    };
    BTreeMap::from([
        (
            CurrencyPreset::HandfulOfCoins,
            preset(
                Denomination::Copper,
                25,
                None,
                "inv_misc_coin_05",
                "A handful of loose copper coins.",
            ),
        ),
        (
            CurrencyPreset::SmallPouch,
            preset(
                Denomination::Silver,
                5,
                Some(CurrencyValue::new(0, 5, 20)),
                "inv_misc_coin_03",
                "A small leather pouch jingling with coins.",
            ),
        ),
        (
            CurrencyPreset::ModestSum,
            preset(
                Denomination::Silver,
                20,
                Some(CurrencyValue::new(0, 15, 50)),
                "inv_misc_coin_04",
                "A modest sum, enough for a few nights at an inn.",
            ),
        ),
        (
            CurrencyPreset::MerchantPurse,
            preset(
                Denomination::Gold,
                2,
                Some(CurrencyValue::new(2, 50, 0)),
                "inv_misc_coin_02",
                "A merchant's purse, heavy with the day's takings.",
            ),
        ),
        (
            CurrencyPreset::AdventurerEarnings,
            preset(
                Denomination::Gold,
                10,
                Some(CurrencyValue::new(10, 25, 0)),
                "inv_misc_coin_01",
                "The hard-won earnings of a successful expedition.",
            ),
        ),
        (
            CurrencyPreset::NoblePayment,
            preset(
                Denomination::Gold,
                50,
                None,
                "inv_misc_coin_17",
                "A payment fit for a noble house.",
            ),
        ),
        (
            CurrencyPreset::RoyalBounty,
            preset(
                Denomination::Gold,
                200,
                Some(CurrencyValue::new(200, 0, 0)),
                "inv_misc_coin_18",
                "A bounty paid from the royal treasury.",
            ),
        ),
    ])
}

fn default_currency_by_quality() -> BTreeMap<Quality, Vec<CurrencyPreset>> {
    use CurrencyPreset::*;
    by_quality([
        vec![HandfulOfCoins, SmallPouch],
        vec![HandfulOfCoins, SmallPouch],
        vec![SmallPouch, ModestSum],
        vec![ModestSum, MerchantPurse],
        vec![MerchantPurse, AdventurerEarnings],
        vec![AdventurerEarnings, NoblePayment],
        vec![NoblePayment, RoyalBounty],
    ])
}

fn default_currency_prefixes() -> BTreeMap<Quality, String> {
    BTreeMap::from([
        (Quality::Poor, "Meager".to_string()),
        (Quality::Uncommon, "Generous".to_string()),
        (Quality::Rare, "Abundant".to_string()),
        (Quality::Epic, "Exceptional".to_string()),
        (Quality::Legendary, "Legendary".to_string()),
        (Quality::Artifact, "Mythical".to_string()),
    ])
}

fn default_name_prefixes() -> BTreeMap<Quality, Vec<String>> {
    by_quality([
        strings(&["Broken", "Damaged", "Worn", "Tattered", "Rusty"]),
        strings(&["Simple", "Basic", "Standard", "Plain", "Ordinary"]),
        strings(&["Fine", "Quality", "Sturdy", "Reliable", "Solid"]),
        strings(&["Superior", "Exceptional", "Excellent", "Remarkable", "Impressive"]),
        strings(&["Magnificent", "Glorious", "Majestic", "Splendid", "Exquisite"]),
        strings(&["Legendary", "Mythical", "Ancient", "Fabled", "Storied"]),
        strings(&["Divine", "Celestial", "Transcendent", "Godly", "Immortal"]),
    ])
}

fn default_container_nouns() -> BTreeMap<ContainerSize, Vec<String>> {
    BTreeMap::from([
        (
            ContainerSize::Small,
            strings(&["Pouch", "Satchel", "Purse", "Wallet", "Bag"]),
        ),
        (
            ContainerSize::Medium,
            strings(&["Backpack", "Knapsack", "Rucksack", "Haversack", "Pack"]),
        ),
        (
            ContainerSize::Large,
            strings(&["Chest", "Trunk", "Coffer", "Strongbox", "Crate"]),
        ),
        (
            ContainerSize::ExtraLarge,
            strings(&[
                "Large Chest",
                "Massive Trunk",
                "Great Coffer",
                "Huge Strongbox",
                "Enormous Crate",
            ]),
        ),
    ])
}

fn default_descriptions() -> BTreeMap<ItemCategory, BTreeMap<Quality, String>> {
    let lines = |values: [&str; 7]| by_quality(values.map(str::to_string));
    BTreeMap::from([
        (
            ItemCategory::Weapon,
            lines([
                "A damaged weapon that has seen better days.",
                "A simple weapon of average craftsmanship.",
                "A well-crafted weapon with good balance.",
                "A superior weapon crafted by a master smith.",
                "A magnificent weapon of exceptional quality.",
                "A legendary weapon with a storied history.",
                "A divine weapon of immense power.",
            ]),
        ),
        (
            ItemCategory::Armor,
            lines([
                "A damaged piece of armor with little protection.",
                "A simple piece of armor offering basic protection.",
                "A well-crafted piece of armor with good protection.",
                "A superior piece of armor crafted by a master smith.",
                "A magnificent piece of armor of exceptional quality.",
                "A legendary piece of armor with a storied history.",
                "A divine piece of armor of immense power.",
            ]),
        ),
        (
            ItemCategory::Accessory,
            lines([
                "A damaged accessory with little value.",
                "A simple accessory of average craftsmanship.",
                "A well-crafted accessory with good quality.",
                "A superior accessory crafted by a master jeweler.",
                "A magnificent accessory of exceptional quality.",
                "A legendary accessory with a storied history.",
                "A divine accessory of immense power.",
            ]),
        ),
        (
            ItemCategory::Consumable,
            lines([
                "A questionable consumable of dubious quality.",
                "A simple consumable of average quality.",
                "A well-crafted consumable with good potency.",
                "A superior consumable crafted by a master alchemist.",
                "A magnificent consumable of exceptional potency.",
                "A legendary consumable with miraculous effects.",
                "A divine consumable of immense power.",
            ]),
        ),
        (
            ItemCategory::Miscellaneous,
            lines([
                "A damaged item with little value.",
                "A simple item of average quality.",
                "A well-crafted item with good quality.",
                "A superior item of remarkable quality.",
                "A magnificent item of exceptional quality.",
                "A legendary item with a storied history.",
                "A divine item of immense significance.",
            ]),
        ),
        (
            ItemCategory::Currency,
            lines([
                "A few coins of little value.",
                "A small amount of currency.",
                "A modest sum of currency.",
                "A substantial amount of currency.",
                "A significant amount of currency.",
                "A fortune in currency.",
                "An immense treasure of currency.",
            ]),
        ),
        (
            ItemCategory::Container,
            lines([
                "A worn container that has seen better days.",
                "A simple container of average craftsmanship.",
                "A well-crafted container with good durability.",
                "A superior container crafted by a master artisan.",
                "A magnificent container of exceptional quality.",
                "A legendary container with a storied history.",
                "A divine container of immense significance.",
            ]),
        ),
    ])
}

fn default_icon_pools() -> BTreeMap<ItemSubtype, Vec<String>> {
    use ItemSubtype::{Accessory, Armor, Consumable, Miscellaneous, Weapon};
    BTreeMap::from([
        (
            Weapon(WeaponType::Sword),
            strings(&["inv_sword_04", "inv_sword_23", "inv_sword_34", "inv_sword_27", "inv_sword_15"]),
        ),
        (
            Weapon(WeaponType::Axe),
            strings(&["inv_axe_01", "inv_axe_09", "inv_axe_17", "inv_axe_11"]),
        ),
        (
            Weapon(WeaponType::Mace),
            strings(&["inv_mace_01", "inv_mace_06", "inv_hammer_16", "inv_mace_13"]),
        ),
        (
            Weapon(WeaponType::Dagger),
            strings(&[
                "inv_weapon_shortblade_01",
                "inv_weapon_shortblade_05",
                "inv_weapon_shortblade_15",
            ]),
        ),
        (
            Weapon(WeaponType::Staff),
            strings(&["inv_staff_07", "inv_staff_20", "inv_staff_31", "inv_staff_14"]),
        ),
        (
            Weapon(WeaponType::Polearm),
            strings(&["inv_spear_01", "inv_spear_06", "inv_spear_08"]),
        ),
        (
            Weapon(WeaponType::Bow),
            strings(&["inv_weapon_bow_07", "inv_weapon_bow_02", "inv_weapon_bow_11"]),
        ),
        (
            Weapon(WeaponType::Crossbow),
            strings(&["inv_weapon_crossbow_02", "inv_weapon_crossbow_01", "inv_weapon_crossbow_03"]),
        ),
        (
            Weapon(WeaponType::Wand),
            strings(&["inv_wand_01", "inv_wand_02", "inv_wand_07", "inv_wand_12"]),
        ),
        (
            Weapon(WeaponType::Greatsword),
            strings(&["inv_sword_39", "inv_sword_31"]),
        ),
        (
            Weapon(WeaponType::Greataxe),
            strings(&["inv_axe_22", "inv_throwingaxe_01"]),
        ),
        (
            Weapon(WeaponType::Maul),
            strings(&["inv_hammer_20", "inv_mace_21"]),
        ),
        (Weapon(WeaponType::Spear), strings(&["inv_spear_03"])),
        (
            Armor(ArmorType::Cloth),
            strings(&["inv_chest_cloth_01", "inv_chest_cloth_23", "inv_chest_cloth_21"]),
        ),
        (
            Armor(ArmorType::Leather),
            strings(&["inv_chest_leather_01", "inv_chest_leather_08", "inv_chest_leather_06"]),
        ),
        (
            Armor(ArmorType::Mail),
            strings(&["inv_chest_chain", "inv_chest_chain_05", "inv_chest_chain_12"]),
        ),
        (
            Armor(ArmorType::Plate),
            strings(&["inv_chest_plate04", "inv_chest_plate03", "inv_chest_plate16"]),
        ),
        (
            Armor(ArmorType::Shield),
            strings(&["inv_shield_04", "inv_shield_06", "inv_shield_14", "inv_shield_20"]),
        ),
        (
            Accessory(AccessoryType::Ring),
            strings(&["inv_jewelry_ring_01", "inv_jewelry_ring_03", "inv_jewelry_ring_27"]),
        ),
        (
            Accessory(AccessoryType::Necklace),
            strings(&["inv_jewelry_necklace_01", "inv_jewelry_necklace_07", "inv_jewelry_necklace_13"]),
        ),
        (
            Accessory(AccessoryType::Trinket),
            strings(&["inv_jewelry_talisman_01", "inv_misc_idol_02", "inv_misc_orb_01"]),
        ),
        (
            Accessory(AccessoryType::Cloak),
            strings(&["inv_misc_cape_01", "inv_misc_cape_02", "inv_misc_cape_18"]),
        ),
        (
            Accessory(AccessoryType::Belt),
            strings(&["inv_belt_04", "inv_belt_13", "inv_belt_16"]),
        ),
        (
            Consumable(ConsumableType::Potion),
            strings(&["inv_potion_51", "inv_potion_52", "inv_potion_54", "inv_potion_35"]),
        ),
        (
            Consumable(ConsumableType::Scroll),
            strings(&["inv_scroll_02", "inv_scroll_03", "inv_scroll_06"]),
        ),
        (
            Consumable(ConsumableType::Food),
            strings(&["inv_misc_food_15", "inv_misc_food_23", "inv_misc_food_14"]),
        ),
        (
            Consumable(ConsumableType::Elixir),
            strings(&["inv_potion_27", "inv_potion_28", "inv_potion_39"]),
        ),
        (
            Consumable(ConsumableType::Bandage),
            strings(&["inv_misc_bandage_15", "inv_misc_bandage_16", "inv_misc_bandage_17"]),
        ),
        (
            Miscellaneous(MiscType::Quest),
            strings(&["inv_misc_note_01", "inv_misc_book_08", "inv_misc_questionmark"]),
        ),
        (
            Miscellaneous(MiscType::Reagent),
            strings(&["inv_misc_herb_01", "inv_misc_herb_02", "inv_misc_dust_01"]),
        ),
        (
            Miscellaneous(MiscType::Crafting),
            strings(&["inv_misc_leatherscrap_01", "inv_ingot_03", "inv_fabric_wool_01"]),
        ),
        (
            Miscellaneous(MiscType::TradeGoods),
            strings(&["inv_misc_gem_variety_01", "inv_misc_pelt_wolf_01", "inv_misc_coin_08"]),
        ),
        (
            Miscellaneous(MiscType::Key),
            strings(&["inv_misc_key_01", "inv_misc_key_02", "inv_misc_key_03", "inv_misc_key_10"]),
        ),
        (
            Miscellaneous(MiscType::Junk),
            strings(&["inv_misc_bone_01", "inv_misc_dust_02", "inv_misc_coin_05", "inv_misc_food_19"]),
        ),
    ])
}

fn default_category_icons() -> BTreeMap<ItemCategory, String> {
    BTreeMap::from([
        (ItemCategory::Weapon, "inv_sword_04".to_string()),
        (ItemCategory::Armor, "inv_chest_cloth_01".to_string()),
        (ItemCategory::Accessory, "inv_jewelry_ring_01".to_string()),
        (ItemCategory::Consumable, "inv_potion_51".to_string()),
        (ItemCategory::Miscellaneous, "inv_misc_bag_08".to_string()),
        (ItemCategory::Currency, "inv_misc_coin_01".to_string()),
        (ItemCategory::Container, "inv_misc_bag_08".to_string()),
    ])
}

fn default_container_icons() -> BTreeMap<ContainerSize, ContainerIcons> {
    let icons = |standard: &str, ornate: &str| ContainerIcons {
        standard: standard.to_string(),
        ornate: ornate.to_string(),
    };
    BTreeMap::from([
        (ContainerSize::Small, icons("inv_misc_bag_10", "inv_misc_bag_19")),
        (ContainerSize::Medium, icons("inv_misc_bag_08", "inv_misc_bag_17")),
        (ContainerSize::Large, icons("inv_box_01", "inv_box_02")),
        (ContainerSize::ExtraLarge, icons("inv_box_03", "inv_box_04")),
    ])
}

impl Default for GenerationTables {
    fn default() -> Self {
        Self {
            qualities: default_qualities(),
            value_base_range: config::VALUE_BASE_RANGE,
            dimensions: DimensionTable::default(),
            container_grids: BTreeMap::from([
                (ContainerSize::Small, GridSize::new(3, 4)),
                (ContainerSize::Medium, GridSize::new(4, 6)),
                (ContainerSize::Large, GridSize::new(5, 8)),
                (ContainerSize::ExtraLarge, GridSize::new(6, 10)),
            ]),
            fill_levels: BTreeMap::from([
                (FillLevel::Empty, 0),
                (FillLevel::FewItems, 20),
                (FillLevel::HalfFull, 50),
                (FillLevel::MostlyFull, 75),
                (FillLevel::Full, 90),
            ]),
            quality_distributions: default_distributions(),
            fallback_distribution: vec![
                QualityWeight::new(Quality::Common, 60),
                QualityWeight::new(Quality::Uncommon, 30),
                QualityWeight::new(Quality::Rare, 10),
            ],
            dice_ladder: vec![4, 6, 8, 10, 12],
            weapon_profiles: default_weapon_profiles(),
            equip_slots: default_equip_slots(),
            currency_presets: default_currency_presets(),
            currency_by_quality: default_currency_by_quality(),
            currency_prefixes: default_currency_prefixes(),
            name_prefixes: default_name_prefixes(),
            container_nouns: default_container_nouns(),
            descriptions: default_descriptions(),
            icon_pools: default_icon_pools(),
            category_icons: default_category_icons(),
            fallback_icon: "inv_misc_gem_01".to_string(),
            container_icons: default_container_icons(),
            icon_base_url: config::ICON_BASE_URL.to_string(),
            fill_categories: vec![
                ItemCategory::Weapon,
                ItemCategory::Armor,
                ItemCategory::Accessory,
                ItemCategory::Consumable,
                ItemCategory::Miscellaneous,
            ],
            max_fill_attempts: config::MAX_FILL_ATTEMPTS,
            max_stack_size: config::DEFAULT_MAX_STACK_SIZE,
        }
    }
}
