//! # Item Generation
//!
//! The item factory: turns an [`ItemRequest`] into a complete
//! [`GeneratedItem`], branching per category.
//!
//! Weapons, armor and accessories roll attributes and combat stats and get
//! equip slots from the tables. Consumables roll a restore effect. The
//! miscellaneous kinds (quest items, materials, keys, junk) carry no stats at
//! all. Currency comes from named presets, and containers are filled by the
//! container filler.

use super::{
    calculate_item_value, container_icon, generate_base_stats, generate_combat_stats,
    generate_consumable_stats, generate_container_name, generate_currency_item,
    generate_item_name, generate_weapon_stats, image_url, item_description, item_icon,
    placements_are_valid, ContainerSpec, GenerationTables, Generator, ItemRequest,
};
use crate::utils::{scaled_floor, RandomSource};
use crate::{
    AccessoryDetails, ArmorDetails, ConsumableDetails, ContainerOptions, ContainerProperties,
    CurrencyValue, FillLevel, GeneratedItem, ItemCategory, ItemDetails, ItemHeader, ItemSubtype,
    JunkDetails, KeyDetails, LootError, LootResult, MaterialDetails, MiscType, Quality,
    QuestDetails, WeaponDetails,
};

/// Hex digits in a key id.
const KEY_ID_LEN: usize = 8;

/// Builds generated items from a set of [`GenerationTables`].
#[derive(Debug, Clone, Default)]
pub struct ItemFactory {
    tables: GenerationTables,
}

impl ItemFactory {
    /// Creates a factory over the given tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use lootsmith::{GenerationTables, Generator, ItemCategory, ItemFactory, ItemRequest, Quality};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let factory = ItemFactory::new(GenerationTables::default());
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let item = factory
    ///     .generate(&ItemRequest::new(ItemCategory::Armor, Quality::Rare), &mut rng)
    ///     .unwrap();
    /// assert_eq!(item.category(), ItemCategory::Armor);
    /// assert!(!item.stackable);
    /// ```
    pub fn new(tables: GenerationTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &GenerationTables {
        &self.tables
    }

    /// Keeps `requested` when it belongs to `category`, otherwise picks a
    /// random subtype of `category`. Containers have no subtype.
    pub fn resolve_subtype(
        &self,
        category: ItemCategory,
        requested: Option<ItemSubtype>,
        rng: &mut dyn RandomSource,
    ) -> Option<ItemSubtype> {
        match requested {
            Some(subtype) if subtype.category() == category => Some(subtype),
            _ => ItemSubtype::random_for(category, rng),
        }
    }

    /// Builds one item of any category.
    ///
    /// Containers built here start empty; containers with contents come from
    /// [`ItemFactory::build_container`].
    pub fn build_item(
        &self,
        category: ItemCategory,
        subtype: Option<ItemSubtype>,
        quality: Quality,
        power_scale: f64,
        rng: &mut dyn RandomSource,
    ) -> LootResult<GeneratedItem> {
        match category {
            ItemCategory::Currency => {
                let preset = match subtype {
                    Some(ItemSubtype::Currency(preset)) => Some(preset),
                    _ => None,
                };
                generate_currency_item(&self.tables, preset, quality, power_scale, rng)
            }
            ItemCategory::Container => {
                let spec = ContainerSpec {
                    quality,
                    size: ContainerOptions::default().size,
                    fill_level: FillLevel::Empty,
                    include_currency: false,
                    power_scale,
                };
                self.build_container(&spec, None, rng)
            }
            _ => self.build_standard_item(category, subtype, quality, power_scale, rng),
        }
    }

    /// Builds a container and fills it according to `spec`.
    ///
    /// When `previous` is a container, its lock, failure and flavor
    /// configuration carry over to the new one.
    pub fn build_container(
        &self,
        spec: &ContainerSpec,
        previous: Option<&GeneratedItem>,
        rng: &mut dyn RandomSource,
    ) -> LootResult<GeneratedItem> {
        let tables = &self.tables;
        let fill = self.fill_container(spec, rng)?;

        let mut properties = ContainerProperties::unlocked(fill.grid, fill.items);
        if let Some(previous) = previous.and_then(GeneratedItem::container) {
            properties.preserve_configuration(previous);
        }

        let icon_id = container_icon(tables, spec.size, spec.quality);
        let header = ItemHeader {
            name: generate_container_name(tables, spec.size, spec.quality, rng)?,
            quality: spec.quality,
            description: item_description(tables, ItemCategory::Container, spec.quality)?,
            image_url: image_url(tables, &icon_id),
            icon_id,
            value: calculate_item_value(tables, spec.quality, spec.power_scale, rng)?,
            dimensions: tables
                .dimensions
                .resolve(ItemCategory::Container, None, Some(spec.size)),
        };

        Ok(GeneratedItem::assemble(
            header,
            ItemDetails::Container(properties),
            tables.max_stack_size,
        ))
    }

    fn build_standard_item(
        &self,
        category: ItemCategory,
        subtype: Option<ItemSubtype>,
        quality: Quality,
        power_scale: f64,
        rng: &mut dyn RandomSource,
    ) -> LootResult<GeneratedItem> {
        let tables = &self.tables;
        let subtype = self
            .resolve_subtype(category, subtype, rng)
            .ok_or_else(|| LootError::missing("subtype catalogue", category))?;
        let factor = tables.scaling_factor(quality, power_scale)?;

        let icon_id = item_icon(tables, category, Some(subtype), rng);
        let header = ItemHeader {
            name: generate_item_name(tables, category, Some(subtype), quality, rng)?,
            quality,
            description: item_description(tables, category, quality)?,
            image_url: image_url(tables, &icon_id),
            icon_id,
            value: calculate_item_value(tables, quality, power_scale, rng)?,
            dimensions: tables.dimensions.resolve(category, Some(subtype), None),
        };

        let details = self.roll_details(subtype, quality, power_scale, factor, header.value, rng)?;
        Ok(GeneratedItem::assemble(header, details, tables.max_stack_size))
    }

    fn roll_details(
        &self,
        subtype: ItemSubtype,
        quality: Quality,
        power_scale: f64,
        factor: f64,
        value: CurrencyValue,
        rng: &mut dyn RandomSource,
    ) -> LootResult<ItemDetails> {
        let tables = &self.tables;
        let details = match subtype {
            ItemSubtype::Weapon(weapon) => {
                let profile = tables.weapon_profile(weapon);
                ItemDetails::Weapon(WeaponDetails {
                    subtype: weapon,
                    weapon_slot: profile.wield,
                    hand: profile.wield.hand(),
                    slots: vec![profile.wield.slot()],
                    base_stats: generate_base_stats(factor, rng),
                    combat_stats: generate_combat_stats(ItemCategory::Weapon, quality, factor, rng),
                    weapon_stats: generate_weapon_stats(
                        profile,
                        quality,
                        factor,
                        &tables.dice_ladder,
                        rng,
                    )?,
                })
            }
            ItemSubtype::Armor(armor) => {
                let base_stats = generate_base_stats(factor, rng);
                let combat_stats = generate_combat_stats(ItemCategory::Armor, quality, factor, rng);
                ItemDetails::Armor(ArmorDetails {
                    subtype: armor,
                    armor_class: combat_stats.armor_class.map(|ac| ac.value).unwrap_or(0),
                    slots: tables.slots_for(subtype),
                    base_stats,
                    combat_stats,
                })
            }
            ItemSubtype::Accessory(accessory) => ItemDetails::Accessory(AccessoryDetails {
                subtype: accessory,
                slots: tables.slots_for(subtype),
                base_stats: generate_base_stats(factor, rng),
            }),
            ItemSubtype::Consumable(consumable) => {
                let (base_stats, combat_stats) = generate_consumable_stats(consumable, factor, rng);
                ItemDetails::Consumable(ConsumableDetails {
                    subtype: consumable,
                    base_stats,
                    combat_stats,
                })
            }
            ItemSubtype::Miscellaneous(misc) => match misc {
                MiscType::Quest => ItemDetails::Quest(QuestDetails {
                    quest_giver: "Unknown".to_string(),
                    quest_objectives: "Bring this item to its rightful owner.".to_string(),
                    time_limit: 0,
                    required_level: scaled_floor(power_scale * 5.0),
                }),
                MiscType::Reagent | MiscType::Crafting | MiscType::TradeGoods => {
                    ItemDetails::Material(MaterialDetails { subtype: misc })
                }
                MiscType::Key => ItemDetails::Key(KeyDetails {
                    key_type: "door".to_string(),
                    key_id: roll_key_id(rng),
                }),
                MiscType::Junk => ItemDetails::Junk(JunkDetails {
                    sell_price: value.total_copper() as f64 / 2.0,
                }),
            },
            ItemSubtype::Currency(_) => {
                return Err(LootError::GenerationFailed(
                    "currency presets are not standard items".to_string(),
                ))
            }
        };
        Ok(details)
    }
}

/// Lowercase hex key id drawn from `rng`.
fn roll_key_id(rng: &mut dyn RandomSource) -> String {
    (0..KEY_ID_LEN)
        .map(|_| char::from_digit(rng.random_int(0, 15), 16).unwrap_or('0'))
        .collect()
}

/// Checks the invariants every generated item must hold.
///
/// Footprints are at least 1x1, the value is never zero, stacking follows
/// the category, and a container's contents are placed, in bounds and
/// non-overlapping.
pub fn validate_item(item: &GeneratedItem) -> LootResult<()> {
    if item.width == 0 || item.height == 0 {
        return Err(LootError::GenerationFailed(format!(
            "'{}' has an empty footprint {}x{}",
            item.name, item.width, item.height
        )));
    }

    if !item.labels_match_details() {
        return Err(LootError::GenerationFailed(format!(
            "'{}' is labelled {} / {:?} but holds {} details",
            item.name,
            item.category,
            item.subtype,
            item.details.category()
        )));
    }

    if item.value.is_zero() {
        return Err(LootError::GenerationFailed(format!("'{}' is worth nothing", item.name)));
    }

    if item.stackable != item.category().is_stackable() {
        return Err(LootError::GenerationFailed(format!(
            "'{}' has stackable={} for category {}",
            item.name,
            item.stackable,
            item.category()
        )));
    }

    if let Some(container) = item.container() {
        if container.items.iter().any(|nested| nested.position.is_none()) {
            return Err(LootError::GenerationFailed(format!(
                "'{}' holds an unplaced item",
                item.name
            )));
        }
        if !placements_are_valid(&container.items, container.grid_size) {
            return Err(LootError::GenerationFailed(format!(
                "'{}' has overlapping or out-of-bounds contents",
                item.name
            )));
        }
        for nested in &container.items {
            validate_item(nested)?;
        }
    }

    Ok(())
}

impl Generator<GeneratedItem> for ItemFactory {
    fn generate(
        &self,
        request: &ItemRequest,
        rng: &mut dyn RandomSource,
    ) -> LootResult<GeneratedItem> {
        let mut item = match request.category {
            ItemCategory::Container => {
                self.build_container(&request.container_spec(), request.previous.as_ref(), rng)?
            }
            category => self.build_item(
                category,
                request.subtype,
                request.quality,
                request.power_scale,
                rng,
            )?,
        };

        if let Some(previous) = &request.previous {
            item.id = previous.id;
        }

        log::debug!(
            "Generated {} {} '{}' ({}x{})",
            item.quality,
            item.category(),
            item.name,
            item.width,
            item.height
        );
        Ok(item)
    }

    fn validate(&self, item: &GeneratedItem, request: &ItemRequest) -> LootResult<()> {
        if item.category() != request.category {
            return Err(LootError::GenerationFailed(format!(
                "requested {} but generated {}",
                request.category,
                item.category()
            )));
        }
        validate_item(item)
    }

    fn generator_type(&self) -> &'static str {
        "ItemFactory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SequenceSource;
    use crate::{
        ArmorType, ConsumableType, ContainerSize, Dimensions, EquipSlot, FailureAction, Hand,
        LockType, WeaponType, WieldStyle,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn factory() -> ItemFactory {
        ItemFactory::default()
    }

    fn generate(request: &ItemRequest, seed: u64) -> GeneratedItem {
        let mut rng = StdRng::seed_from_u64(seed);
        let factory = factory();
        let item = factory.generate(request, &mut rng).unwrap();
        factory.validate(&item, request).unwrap();
        item
    }

    #[test]
    fn test_weapon_footprints_are_fixed() {
        for seed in 0..20 {
            let dagger = generate(
                &ItemRequest::for_subtype(ItemSubtype::Weapon(WeaponType::Dagger), Quality::Rare),
                seed,
            );
            assert_eq!(dagger.dimensions(), Dimensions::new(1, 1));

            let greatsword = generate(
                &ItemRequest::for_subtype(ItemSubtype::Weapon(WeaponType::Greatsword), Quality::Epic),
                seed,
            );
            assert_eq!(greatsword.dimensions(), Dimensions::new(2, 4));
        }
    }

    #[test]
    fn test_weapon_record() {
        let bow = generate(
            &ItemRequest::for_subtype(ItemSubtype::Weapon(WeaponType::Bow), Quality::Rare),
            3,
        );
        match &bow.details {
            ItemDetails::Weapon(weapon) => {
                assert_eq!(weapon.weapon_slot, WieldStyle::Ranged);
                assert_eq!(weapon.hand, Hand::Ranged);
                assert_eq!(weapon.slots, vec![EquipSlot::Ranged]);
                assert!(!weapon.base_stats.is_empty());
                assert!(weapon.combat_stats.damage.is_some());
                assert!(weapon.weapon_stats.bonus_damage_type.is_some());
            }
            other => panic!("expected weapon, got {:?}", other),
        }
        assert!(bow.name.ends_with("Bow"));
        assert!(!bow.stackable);
        assert_eq!(bow.max_stack_size, None);
    }

    #[test]
    fn test_two_handed_weapons_use_two_hand_slot() {
        let maul = generate(
            &ItemRequest::for_subtype(ItemSubtype::Weapon(WeaponType::Maul), Quality::Common),
            5,
        );
        assert_eq!(maul.slots(), &[EquipSlot::TwoHand]);
    }

    #[test]
    fn test_armor_exposes_armor_class() {
        let shield = generate(
            &ItemRequest::for_subtype(ItemSubtype::Armor(ArmorType::Shield), Quality::Uncommon),
            8,
        );
        match &shield.details {
            ItemDetails::Armor(armor) => {
                assert_eq!(armor.slots, vec![EquipSlot::OffHand]);
                let rolled = armor.combat_stats.armor_class.unwrap().value;
                assert_eq!(armor.armor_class, rolled);
                assert!(rolled >= 1);
                assert_eq!(armor.combat_stats.resistances.len(), 1);
            }
            other => panic!("expected armor, got {:?}", other),
        }
    }

    #[test]
    fn test_consumables_stack() {
        let food = generate(
            &ItemRequest::for_subtype(ItemSubtype::Consumable(ConsumableType::Food), Quality::Common),
            2,
        );
        assert!(food.stackable);
        assert_eq!(food.max_stack_size, Some(5));
        assert!(food.combat_stats().unwrap().health_restore.is_some());
    }

    #[test]
    fn test_junk_has_no_stats_and_half_price() {
        for seed in 0..20 {
            let junk = generate(
                &ItemRequest::for_subtype(ItemSubtype::Miscellaneous(MiscType::Junk), Quality::Poor),
                seed,
            );
            assert!(junk.base_stats().is_none());
            assert!(junk.combat_stats().is_none());
            let json = serde_json::to_value(&junk).unwrap();
            assert!(json["details"].get("baseStats").is_none());
            assert!(json["details"].get("combatStats").is_none());
            match &junk.details {
                ItemDetails::Junk(details) => {
                    assert_eq!(details.sell_price, junk.value.total_copper() as f64 / 2.0);
                }
                other => panic!("expected junk, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_quest_key_and_material_shapes() {
        let quest = generate(
            &ItemRequest::for_subtype(ItemSubtype::Miscellaneous(MiscType::Quest), Quality::Rare)
                .with_power_scale(1.5),
            1,
        );
        match &quest.details {
            ItemDetails::Quest(details) => {
                assert_eq!(details.quest_giver, "Unknown");
                assert_eq!(details.required_level, 7);
                assert_eq!(details.time_limit, 0);
            }
            other => panic!("expected quest item, got {:?}", other),
        }

        let key = generate(
            &ItemRequest::for_subtype(ItemSubtype::Miscellaneous(MiscType::Key), Quality::Common),
            1,
        );
        match &key.details {
            ItemDetails::Key(details) => {
                assert_eq!(details.key_type, "door");
                assert_eq!(details.key_id.len(), 8);
            }
            other => panic!("expected key, got {:?}", other),
        }

        let herbs = generate(
            &ItemRequest::for_subtype(ItemSubtype::Miscellaneous(MiscType::Reagent), Quality::Common),
            1,
        );
        assert!(matches!(herbs.details, ItemDetails::Material(_)));
        assert_eq!(herbs.max_stack_size, Some(5));
    }

    #[test]
    fn test_key_id_comes_from_random_source() {
        assert_eq!(roll_key_id(&mut SequenceSource::constant(0.0)), "00000000");
        assert_eq!(roll_key_id(&mut SequenceSource::constant(0.99)), "ffffffff");

        let request =
            ItemRequest::for_subtype(ItemSubtype::Miscellaneous(MiscType::Key), Quality::Common);
        let a = generate(&request, 1);
        let b = generate(&request, 1);
        assert_eq!(a.details, b.details);
        match &a.details {
            ItemDetails::Key(details) => {
                assert!(details.key_id.chars().all(|c| c.is_ascii_hexdigit()));
            }
            other => panic!("expected key, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_stale_labels() {
        let factory = factory();
        let request = ItemRequest::new(ItemCategory::Consumable, Quality::Common);
        let mut item = generate(&request, 3);
        item.subtype = Some(ItemSubtype::Miscellaneous(MiscType::Junk));
        assert!(factory.validate(&item, &request).is_err());
    }

    #[test]
    fn test_mismatched_subtype_falls_back_to_category() {
        let request = ItemRequest::new(ItemCategory::Accessory, Quality::Common)
            .with_subtype(ItemSubtype::Weapon(WeaponType::Sword));
        for seed in 0..10 {
            let item = generate(&request, seed);
            assert_eq!(item.category(), ItemCategory::Accessory);
            assert!(matches!(item.subtype(), Some(ItemSubtype::Accessory(_))));
        }
    }

    #[test]
    fn test_random_subtype_when_none_requested() {
        let request = ItemRequest::new(ItemCategory::Weapon, Quality::Common);
        let mut rng = SequenceSource::constant(0.0);
        let item = factory().generate(&request, &mut rng).unwrap();
        assert_eq!(item.subtype(), Some(ItemSubtype::Weapon(WeaponType::Sword)));
    }

    #[test]
    fn test_every_category_validates() {
        for (index, category) in ItemCategory::ALL.into_iter().enumerate() {
            for quality in Quality::ALL {
                let request = ItemRequest::new(category, quality);
                let item = generate(&request, index as u64 * 31 + quality as u64);
                assert_eq!(item.category(), category);
                assert!(item.width >= 1 && item.height >= 1);
            }
        }
    }

    #[test]
    fn test_container_build() {
        let options = ContainerOptions {
            size: ContainerSize::Large,
            fill_level: FillLevel::HalfFull,
            include_currency: true,
        };
        let chest = generate(&ItemRequest::container(Quality::Epic, options), 12);
        let container = chest.container().unwrap();

        assert_eq!(chest.dimensions(), Dimensions::new(2, 3));
        assert_eq!(chest.icon_id, "inv_box_02");
        assert_eq!(container.grid_size.cells(), 40);
        assert!(container.items[0].is_currency());
        assert!(container.has_had_items);
        assert!(!container.is_locked);
        assert!(chest.subtype().is_none());
    }

    #[test]
    fn test_editing_preserves_id_and_lock() {
        let factory = factory();
        let mut rng = StdRng::seed_from_u64(17);
        let options = ContainerOptions::default();

        let mut original = factory
            .generate(&ItemRequest::container(Quality::Rare, options), &mut rng)
            .unwrap();
        if let ItemDetails::Container(properties) = &mut original.details {
            properties.is_locked = true;
            properties.lock_type = LockType::Code;
            properties.lock_code = "4521".to_string();
            properties.failure_action = FailureAction::Destroy;
            properties.flavor_text = "Sealed with wax.".to_string();
        }

        let request = ItemRequest::container(Quality::Legendary, options).editing(original.clone());
        let edited = factory.generate(&request, &mut rng).unwrap();
        let properties = edited.container().unwrap();

        assert_eq!(edited.id, original.id);
        assert_eq!(edited.quality, Quality::Legendary);
        assert!(properties.is_locked);
        assert_eq!(properties.lock_type, LockType::Code);
        assert_eq!(properties.lock_code, "4521");
        assert_eq!(properties.failure_action, FailureAction::Destroy);
        assert_eq!(properties.flavor_text, "Sealed with wax.");
    }

    #[test]
    fn test_editing_plain_item_keeps_id() {
        let factory = factory();
        let mut rng = StdRng::seed_from_u64(4);
        let request = ItemRequest::new(ItemCategory::Consumable, Quality::Common);
        let first = factory.generate(&request, &mut rng).unwrap();
        let second = factory
            .generate(&request.clone().editing(first.clone()), &mut rng)
            .unwrap();
        assert_eq!(second.id, first.id);
    }

    #[test]
    fn test_validate_rejects_broken_items() {
        let factory = factory();
        let request = ItemRequest::new(ItemCategory::Armor, Quality::Common);
        let mut item = generate(&request, 1);

        item.stackable = true;
        assert!(factory.validate(&item, &request).is_err());

        item.stackable = false;
        item.value = CurrencyValue::default();
        assert!(factory.validate(&item, &request).is_err());

        let other = ItemRequest::new(ItemCategory::Weapon, Quality::Common);
        assert!(factory.validate(&generate(&request, 2), &other).is_err());
    }

    #[test]
    fn test_reduced_quality_table_fails_cleanly() {
        let mut tables = GenerationTables::default();
        tables.qualities.retain(|quality, _| *quality <= Quality::Common);
        let factory = ItemFactory::new(tables);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(factory
            .generate(&ItemRequest::new(ItemCategory::Weapon, Quality::Common), &mut rng)
            .is_ok());
        assert!(matches!(
            factory.generate(&ItemRequest::new(ItemCategory::Weapon, Quality::Epic), &mut rng),
            Err(LootError::MissingTableEntry { .. })
        ));
    }
}
