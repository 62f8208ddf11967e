//! # Generated Items
//!
//! The record produced by every generation call.
//!
//! Fields shared by all items live on [`GeneratedItem`]. Everything that only
//! some kinds of item have lives in [`ItemDetails`], one variant per kind, so a
//! junk item simply has no place to put combat stats.

use super::{
    AccessoryType, ArmorType, BaseStats, CombatStats, ConsumableType, ContainerProperties,
    CurrencyPreset, CurrencyValue, Dimensions, EquipSlot, GridPosition, Hand, ItemCategory,
    ItemSubtype, MiscType, Quality, Rotation, WeaponStats, WeaponType, WieldStyle,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fully specified generated item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItem {
    pub id: Uuid,
    pub name: String,
    /// Always equal to `details.category()`
    pub category: ItemCategory,
    /// Subtype key, `null` only for containers
    #[serde(default)]
    pub subtype: Option<ItemSubtype>,
    pub quality: Quality,
    pub description: String,
    pub icon_id: String,
    pub image_url: String,
    pub value: CurrencyValue,
    pub width: u32,
    pub height: u32,
    pub rotation: Rotation,
    /// Cell of the top-left corner when the item sits in a container grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<GridPosition>,
    pub stackable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stack_size: Option<u32>,
    pub details: ItemDetails,
}

/// Shared fields handed to [`GeneratedItem::assemble`].
#[derive(Debug, Clone)]
pub struct ItemHeader {
    pub name: String,
    pub quality: Quality,
    pub description: String,
    pub icon_id: String,
    pub image_url: String,
    pub value: CurrencyValue,
    pub dimensions: Dimensions,
}

impl GeneratedItem {
    /// Builds an item with a fresh id, upright and unplaced.
    ///
    /// Stackability follows the category: consumables and miscellaneous
    /// items stack up to `max_stack_size`, everything else does not stack.
    pub fn assemble(header: ItemHeader, details: ItemDetails, max_stack_size: u32) -> Self {
        let category = details.category();
        let stackable = category.is_stackable();
        Self {
            id: Uuid::new_v4(),
            name: header.name,
            category,
            subtype: details.subtype(),
            quality: header.quality,
            description: header.description,
            icon_id: header.icon_id,
            image_url: header.image_url,
            value: header.value,
            width: header.dimensions.width,
            height: header.dimensions.height,
            rotation: Rotation::Upright,
            position: None,
            stackable,
            max_stack_size: stackable.then_some(max_stack_size),
            details,
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.details.category()
    }

    /// Subtype of the item, `None` for containers.
    pub fn subtype(&self) -> Option<ItemSubtype> {
        self.details.subtype()
    }

    /// True when the top-level `category` and `subtype` fields agree with
    /// `details`.
    pub fn labels_match_details(&self) -> bool {
        self.category == self.details.category() && self.subtype == self.details.subtype()
    }

    /// Footprint as stored, ignoring rotation.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Footprint after rotation, i.e. the cells actually covered in a grid.
    pub fn effective_dimensions(&self) -> Dimensions {
        self.dimensions().rotated(self.rotation)
    }

    pub fn base_stats(&self) -> Option<&BaseStats> {
        match &self.details {
            ItemDetails::Weapon(weapon) => Some(&weapon.base_stats),
            ItemDetails::Armor(armor) => Some(&armor.base_stats),
            ItemDetails::Accessory(accessory) => Some(&accessory.base_stats),
            ItemDetails::Consumable(consumable) => Some(&consumable.base_stats),
            _ => None,
        }
    }

    pub fn combat_stats(&self) -> Option<&CombatStats> {
        match &self.details {
            ItemDetails::Weapon(weapon) => Some(&weapon.combat_stats),
            ItemDetails::Armor(armor) => Some(&armor.combat_stats),
            ItemDetails::Consumable(consumable) => Some(&consumable.combat_stats),
            _ => None,
        }
    }

    pub fn weapon_stats(&self) -> Option<&WeaponStats> {
        match &self.details {
            ItemDetails::Weapon(weapon) => Some(&weapon.weapon_stats),
            _ => None,
        }
    }

    pub fn slots(&self) -> &[EquipSlot] {
        match &self.details {
            ItemDetails::Weapon(weapon) => &weapon.slots,
            ItemDetails::Armor(armor) => &armor.slots,
            ItemDetails::Accessory(accessory) => &accessory.slots,
            _ => &[],
        }
    }

    pub fn container(&self) -> Option<&ContainerProperties> {
        match &self.details {
            ItemDetails::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn is_currency(&self) -> bool {
        matches!(self.details, ItemDetails::Currency(_))
    }
}

/// Per-kind item payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDetails {
    Weapon(WeaponDetails),
    Armor(ArmorDetails),
    Accessory(AccessoryDetails),
    Consumable(ConsumableDetails),
    Quest(QuestDetails),
    Material(MaterialDetails),
    Key(KeyDetails),
    Junk(JunkDetails),
    Currency(CurrencyDetails),
    Container(ContainerProperties),
}

impl ItemDetails {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemDetails::Weapon(_) => ItemCategory::Weapon,
            ItemDetails::Armor(_) => ItemCategory::Armor,
            ItemDetails::Accessory(_) => ItemCategory::Accessory,
            ItemDetails::Consumable(_) => ItemCategory::Consumable,
            ItemDetails::Quest(_)
            | ItemDetails::Material(_)
            | ItemDetails::Key(_)
            | ItemDetails::Junk(_) => ItemCategory::Miscellaneous,
            ItemDetails::Currency(_) => ItemCategory::Currency,
            ItemDetails::Container(_) => ItemCategory::Container,
        }
    }

    pub fn subtype(&self) -> Option<ItemSubtype> {
        match self {
            ItemDetails::Weapon(weapon) => Some(ItemSubtype::Weapon(weapon.subtype)),
            ItemDetails::Armor(armor) => Some(ItemSubtype::Armor(armor.subtype)),
            ItemDetails::Accessory(accessory) => Some(ItemSubtype::Accessory(accessory.subtype)),
            ItemDetails::Consumable(consumable) => {
                Some(ItemSubtype::Consumable(consumable.subtype))
            }
            ItemDetails::Quest(_) => Some(ItemSubtype::Miscellaneous(MiscType::Quest)),
            ItemDetails::Material(material) => Some(ItemSubtype::Miscellaneous(material.subtype)),
            ItemDetails::Key(_) => Some(ItemSubtype::Miscellaneous(MiscType::Key)),
            ItemDetails::Junk(_) => Some(ItemSubtype::Miscellaneous(MiscType::Junk)),
            ItemDetails::Currency(currency) => Some(ItemSubtype::Currency(currency.preset)),
            ItemDetails::Container(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDetails {
    pub subtype: WeaponType,
    pub weapon_slot: WieldStyle,
    pub hand: Hand,
    pub slots: Vec<EquipSlot>,
    #[serde(default, skip_serializing_if = "BaseStats::is_empty")]
    pub base_stats: BaseStats,
    #[serde(default, skip_serializing_if = "CombatStats::is_empty")]
    pub combat_stats: CombatStats,
    pub weapon_stats: WeaponStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorDetails {
    pub subtype: ArmorType,
    /// Armor class surfaced for display, 0 when none was rolled
    pub armor_class: u32,
    pub slots: Vec<EquipSlot>,
    #[serde(default, skip_serializing_if = "BaseStats::is_empty")]
    pub base_stats: BaseStats,
    #[serde(default, skip_serializing_if = "CombatStats::is_empty")]
    pub combat_stats: CombatStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryDetails {
    pub subtype: AccessoryType,
    pub slots: Vec<EquipSlot>,
    #[serde(default, skip_serializing_if = "BaseStats::is_empty")]
    pub base_stats: BaseStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumableDetails {
    pub subtype: ConsumableType,
    #[serde(default, skip_serializing_if = "BaseStats::is_empty")]
    pub base_stats: BaseStats,
    #[serde(default, skip_serializing_if = "CombatStats::is_empty")]
    pub combat_stats: CombatStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestDetails {
    pub quest_giver: String,
    pub quest_objectives: String,
    pub time_limit: u32,
    pub required_level: u32,
}

/// Reagents, crafting materials and trade goods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDetails {
    pub subtype: MiscType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDetails {
    pub key_type: String,
    pub key_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JunkDetails {
    /// Half the item's value, in copper
    pub sell_price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyDetails {
    pub preset: CurrencyPreset,
    pub currency_type: Denomination,
    /// Scaled lump amount in `currency_type`
    pub currency_value: u32,
}

/// One of the three coin denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    Gold,
    Silver,
    Copper,
}
