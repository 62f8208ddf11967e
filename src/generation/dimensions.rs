//! # Dimension Resolver
//!
//! Maps an item's category and subtype (or a container's size class) to the
//! footprint it occupies on a container grid.

use crate::{
    AccessoryType, ArmorType, ContainerSize, Dimensions, ItemCategory, ItemSubtype, WeaponType,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static footprint lookup.
///
/// Subtypes without an entry occupy a single cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DimensionTable {
    pub subtypes: BTreeMap<ItemSubtype, Dimensions>,
    pub containers: BTreeMap<ContainerSize, Dimensions>,
    /// Footprint of a container whose size class is unknown
    pub default_container: Dimensions,
}

impl DimensionTable {
    /// Resolves the footprint of an item.
    ///
    /// `container_size` is only consulted for containers. The result is
    /// always at least 1x1.
    ///
    /// # Examples
    ///
    /// ```
    /// use lootsmith::{DimensionTable, Dimensions, ItemCategory, ItemSubtype, WeaponType};
    ///
    /// let table = DimensionTable::default();
    /// let greatsword = Some(ItemSubtype::Weapon(WeaponType::Greatsword));
    /// assert_eq!(table.resolve(ItemCategory::Weapon, greatsword, None), Dimensions::new(2, 4));
    /// ```
    pub fn resolve(
        &self,
        category: ItemCategory,
        subtype: Option<ItemSubtype>,
        container_size: Option<ContainerSize>,
    ) -> Dimensions {
        let found = match category {
            ItemCategory::Container => match container_size {
                Some(size) => self.containers.get(&size).copied(),
                None => Some(self.default_container),
            },
            _ => subtype
                .filter(|subtype| subtype.category() == category)
                .and_then(|subtype| self.subtypes.get(&subtype).copied()),
        };

        let dimensions = found.unwrap_or(Dimensions::UNIT);
        Dimensions::new(dimensions.width.max(1), dimensions.height.max(1))
    }
}

impl Default for DimensionTable {
    fn default() -> Self {
        let weapon = |subtype, width, height| {
            (ItemSubtype::Weapon(subtype), Dimensions::new(width, height))
        };
        let armor = |subtype, width, height| {
            (ItemSubtype::Armor(subtype), Dimensions::new(width, height))
        };
        let accessory = |subtype, width, height| {
            (ItemSubtype::Accessory(subtype), Dimensions::new(width, height))
        };

        let subtypes = BTreeMap::from([
            weapon(WeaponType::Greatsword, 2, 4),
            weapon(WeaponType::Greataxe, 2, 4),
            weapon(WeaponType::Polearm, 2, 4),
            weapon(WeaponType::Maul, 2, 4),
            weapon(WeaponType::Halberd, 2, 4),
            weapon(WeaponType::Staff, 1, 4),
            weapon(WeaponType::Spear, 1, 4),
            weapon(WeaponType::Sword, 1, 3),
            weapon(WeaponType::Rapier, 1, 3),
            weapon(WeaponType::Saber, 1, 3),
            weapon(WeaponType::Axe, 1, 2),
            weapon(WeaponType::Mace, 1, 2),
            weapon(WeaponType::Dagger, 1, 1),
            weapon(WeaponType::Bow, 2, 3),
            weapon(WeaponType::Crossbow, 2, 3),
            weapon(WeaponType::Wand, 1, 1),
            armor(ArmorType::Plate, 2, 2),
            armor(ArmorType::Mail, 2, 2),
            armor(ArmorType::Shield, 2, 2),
            armor(ArmorType::Leather, 1, 2),
            armor(ArmorType::Cloth, 1, 2),
            accessory(AccessoryType::Ring, 1, 1),
            accessory(AccessoryType::Necklace, 1, 1),
            accessory(AccessoryType::Trinket, 1, 1),
            accessory(AccessoryType::Cloak, 2, 2),
            accessory(AccessoryType::Belt, 2, 1),
        ]);

        let containers = BTreeMap::from([
            (ContainerSize::Small, Dimensions::new(1, 1)),
            (ContainerSize::Medium, Dimensions::new(2, 2)),
            (ContainerSize::Large, Dimensions::new(2, 3)),
            (ContainerSize::ExtraLarge, Dimensions::new(3, 3)),
        ]);

        Self {
            subtypes,
            containers,
            default_container: Dimensions::new(2, 2),
        }
    }
}
