//! # Item Subtypes
//!
//! Subtype catalogues for each category and the [`ItemSubtype`] sum that
//! ties a subtype to its category.
//!
//! Subtype keys are unique across all categories, so a bare key such as
//! `"DAGGER"` or `"ROYAL_BOUNTY"` identifies both the category and the subtype.

use super::ItemCategory;
use crate::utils::RandomSource;
use crate::LootError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! subtype_catalogue {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($key:literal, $display:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $key)] $variant,)+
        }

        impl $name {
            /// Every subtype in catalogue order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Upper-case key, e.g. `TRADE_GOODS`.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// Human readable name used in generated item names.
            pub fn display_name(self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }

            /// Looks a subtype up by key, ignoring ASCII case.
            pub fn from_key(key: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|subtype| subtype.key().eq_ignore_ascii_case(key.trim()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

subtype_catalogue! {
    /// Weapon subtypes.
    WeaponType {
        Sword => ("SWORD", "Sword"),
        Axe => ("AXE", "Axe"),
        Mace => ("MACE", "Mace"),
        Dagger => ("DAGGER", "Dagger"),
        Staff => ("STAFF", "Staff"),
        Polearm => ("POLEARM", "Polearm"),
        Bow => ("BOW", "Bow"),
        Crossbow => ("CROSSBOW", "Crossbow"),
        Wand => ("WAND", "Wand"),
        Greatsword => ("GREATSWORD", "Greatsword"),
        Greataxe => ("GREATAXE", "Greataxe"),
        Maul => ("MAUL", "Maul"),
        Halberd => ("HALBERD", "Halberd"),
        Spear => ("SPEAR", "Spear"),
        Rapier => ("RAPIER", "Rapier"),
        Saber => ("SABER", "Saber"),
        ParryingDagger => ("PARRYING_DAGGER", "Parrying Dagger"),
        Thrown => ("THROWN", "Thrown Weapon"),
        Sling => ("SLING", "Sling"),
    }
}

subtype_catalogue! {
    /// Armor subtypes.
    ArmorType {
        Cloth => ("CLOTH", "Cloth"),
        Leather => ("LEATHER", "Leather"),
        Mail => ("MAIL", "Mail"),
        Plate => ("PLATE", "Plate"),
        Shield => ("SHIELD", "Shield"),
    }
}

subtype_catalogue! {
    /// Accessory subtypes.
    AccessoryType {
        Ring => ("RING", "Ring"),
        Necklace => ("NECKLACE", "Necklace"),
        Trinket => ("TRINKET", "Trinket"),
        Cloak => ("CLOAK", "Cloak"),
        Belt => ("BELT", "Belt"),
    }
}

subtype_catalogue! {
    /// Consumable subtypes.
    ConsumableType {
        Potion => ("POTION", "Potion"),
        Scroll => ("SCROLL", "Scroll"),
        Food => ("FOOD", "Food"),
        Elixir => ("ELIXIR", "Elixir"),
        Bandage => ("BANDAGE", "Bandage"),
    }
}

subtype_catalogue! {
    /// Miscellaneous subtypes. None of these carry combat stats.
    MiscType {
        Quest => ("QUEST", "Quest Item"),
        Reagent => ("REAGENT", "Reagent"),
        Crafting => ("CRAFTING", "Crafting Material"),
        TradeGoods => ("TRADE_GOODS", "Trade Goods"),
        Key => ("KEY", "Key"),
        Junk => ("JUNK", "Junk"),
    }
}

subtype_catalogue! {
    /// Named currency presets, from smallest to largest.
    CurrencyPreset {
        HandfulOfCoins => ("HANDFUL_OF_COINS", "Handful of Coins"),
        SmallPouch => ("SMALL_POUCH", "Small Pouch of Coins"),
        ModestSum => ("MODEST_SUM", "Modest Sum"),
        MerchantPurse => ("MERCHANT_PURSE", "Merchant's Purse"),
        AdventurerEarnings => ("ADVENTURER_EARNINGS", "Adventurer's Earnings"),
        NoblePayment => ("NOBLE_PAYMENT", "Noble's Payment"),
        RoyalBounty => ("ROYAL_BOUNTY", "Royal Bounty"),
    }
}

impl MiscType {
    /// Reagents, crafting materials and trade goods.
    pub fn is_material(self) -> bool {
        matches!(self, MiscType::Reagent | MiscType::Crafting | MiscType::TradeGoods)
    }
}

/// A subtype together with the category it belongs to.
///
/// Serialized as its bare key so it can be used as a JSON map key in the
/// generation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ItemSubtype {
    Weapon(WeaponType),
    Armor(ArmorType),
    Accessory(AccessoryType),
    Consumable(ConsumableType),
    Miscellaneous(MiscType),
    Currency(CurrencyPreset),
}

impl ItemSubtype {
    pub fn category(self) -> ItemCategory {
        match self {
            ItemSubtype::Weapon(_) => ItemCategory::Weapon,
            ItemSubtype::Armor(_) => ItemCategory::Armor,
            ItemSubtype::Accessory(_) => ItemCategory::Accessory,
            ItemSubtype::Consumable(_) => ItemCategory::Consumable,
            ItemSubtype::Miscellaneous(_) => ItemCategory::Miscellaneous,
            ItemSubtype::Currency(_) => ItemCategory::Currency,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ItemSubtype::Weapon(subtype) => subtype.key(),
            ItemSubtype::Armor(subtype) => subtype.key(),
            ItemSubtype::Accessory(subtype) => subtype.key(),
            ItemSubtype::Consumable(subtype) => subtype.key(),
            ItemSubtype::Miscellaneous(subtype) => subtype.key(),
            ItemSubtype::Currency(subtype) => subtype.key(),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ItemSubtype::Weapon(subtype) => subtype.display_name(),
            ItemSubtype::Armor(subtype) => subtype.display_name(),
            ItemSubtype::Accessory(subtype) => subtype.display_name(),
            ItemSubtype::Consumable(subtype) => subtype.display_name(),
            ItemSubtype::Miscellaneous(subtype) => subtype.display_name(),
            ItemSubtype::Currency(subtype) => subtype.display_name(),
        }
    }

    /// Every subtype of `category`. Containers have none.
    pub fn all_for(category: ItemCategory) -> Vec<ItemSubtype> {
        match category {
            ItemCategory::Weapon => WeaponType::ALL.iter().map(|s| ItemSubtype::Weapon(*s)).collect(),
            ItemCategory::Armor => ArmorType::ALL.iter().map(|s| ItemSubtype::Armor(*s)).collect(),
            ItemCategory::Accessory => AccessoryType::ALL
                .iter()
                .map(|s| ItemSubtype::Accessory(*s))
                .collect(),
            ItemCategory::Consumable => ConsumableType::ALL
                .iter()
                .map(|s| ItemSubtype::Consumable(*s))
                .collect(),
            ItemCategory::Miscellaneous => MiscType::ALL
                .iter()
                .map(|s| ItemSubtype::Miscellaneous(*s))
                .collect(),
            ItemCategory::Currency => CurrencyPreset::ALL
                .iter()
                .map(|s| ItemSubtype::Currency(*s))
                .collect(),
            ItemCategory::Container => Vec::new(),
        }
    }

    /// Picks a subtype of `category` uniformly. Returns `None` for containers.
    pub fn random_for(category: ItemCategory, rng: &mut dyn RandomSource) -> Option<ItemSubtype> {
        let candidates = Self::all_for(category);
        rng.pick_index(candidates.len()).map(|index| candidates[index])
    }

    /// Parses a key within a known category.
    pub fn parse_in(category: ItemCategory, key: &str) -> Option<ItemSubtype> {
        match category {
            ItemCategory::Weapon => WeaponType::from_key(key).map(ItemSubtype::Weapon),
            ItemCategory::Armor => ArmorType::from_key(key).map(ItemSubtype::Armor),
            ItemCategory::Accessory => AccessoryType::from_key(key).map(ItemSubtype::Accessory),
            ItemCategory::Consumable => ConsumableType::from_key(key).map(ItemSubtype::Consumable),
            ItemCategory::Miscellaneous => MiscType::from_key(key).map(ItemSubtype::Miscellaneous),
            ItemCategory::Currency => CurrencyPreset::from_key(key).map(ItemSubtype::Currency),
            ItemCategory::Container => None,
        }
    }
}

impl fmt::Display for ItemSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ItemSubtype {
    type Err = LootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemCategory::ALL
            .into_iter()
            .find_map(|category| ItemSubtype::parse_in(category, s))
            .ok_or_else(|| LootError::InvalidRequest(format!("unknown subtype '{}'", s)))
    }
}

impl TryFrom<String> for ItemSubtype {
    type Error = LootError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemSubtype> for String {
    fn from(subtype: ItemSubtype) -> Self {
        subtype.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SequenceSource;
    use std::collections::HashSet;

    #[test]
    fn test_subtype_keys_are_unique_across_categories() {
        let mut seen = HashSet::new();
        for category in ItemCategory::ALL {
            for subtype in ItemSubtype::all_for(category) {
                assert!(seen.insert(subtype.key()), "duplicate key {}", subtype.key());
            }
        }
    }

    #[test]
    fn test_subtype_round_trips_through_key() {
        for category in ItemCategory::ALL {
            for subtype in ItemSubtype::all_for(category) {
                let parsed: ItemSubtype = subtype.key().parse().unwrap();
                assert_eq!(parsed, subtype);
                assert_eq!(parsed.category(), category);
            }
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "greatsword".parse::<ItemSubtype>().unwrap(),
            ItemSubtype::Weapon(WeaponType::Greatsword)
        );
        assert_eq!(
            ItemSubtype::parse_in(ItemCategory::Miscellaneous, "junk"),
            Some(ItemSubtype::Miscellaneous(MiscType::Junk))
        );
        assert_eq!(ItemSubtype::parse_in(ItemCategory::Armor, "junk"), None);
    }

    #[test]
    fn test_random_subtype_matches_category() {
        let mut rng = SequenceSource::new(vec![0.0, 0.3, 0.99]);
        for _ in 0..3 {
            let subtype = ItemSubtype::random_for(ItemCategory::Consumable, &mut rng).unwrap();
            assert_eq!(subtype.category(), ItemCategory::Consumable);
        }
        assert!(ItemSubtype::random_for(ItemCategory::Container, &mut rng).is_none());
    }

    #[test]
    fn test_material_subtypes() {
        assert!(MiscType::Reagent.is_material());
        assert!(MiscType::TradeGoods.is_material());
        assert!(!MiscType::Junk.is_material());
        assert!(!MiscType::Key.is_material());
    }

    #[test]
    fn test_subtype_serializes_as_bare_key() {
        let json = serde_json::to_string(&ItemSubtype::Armor(ArmorType::Plate)).unwrap();
        assert_eq!(json, "\"PLATE\"");
        let parsed: ItemSubtype = serde_json::from_str("\"ROYAL_BOUNTY\"").unwrap();
        assert_eq!(parsed, ItemSubtype::Currency(CurrencyPreset::RoyalBounty));
    }
}
