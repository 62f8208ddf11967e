//! # Naming
//!
//! Names, descriptions and icons for generated items.

use super::GenerationTables;
use crate::utils::{pick, RandomSource};
use crate::{ContainerSize, CurrencyPreset, ItemCategory, ItemSubtype, LootResult, Quality};

/// `"<quality prefix> <subtype name>"`, e.g. `"Sturdy Crossbow"`.
///
/// Falls back to the category name when the subtype is missing or belongs
/// to another category.
pub fn generate_item_name(
    tables: &GenerationTables,
    category: ItemCategory,
    subtype: Option<ItemSubtype>,
    quality: Quality,
    rng: &mut dyn RandomSource,
) -> LootResult<String> {
    let prefix = pick_prefix(tables, quality, rng)?;
    let noun = subtype
        .filter(|subtype| subtype.category() == category)
        .map(ItemSubtype::display_name)
        .unwrap_or_else(|| category.display_name());
    Ok(format!("{} {}", prefix, noun))
}

/// `"<quality prefix> <size noun>"`, e.g. `"Glorious Strongbox"`.
pub fn generate_container_name(
    tables: &GenerationTables,
    size: ContainerSize,
    quality: Quality,
    rng: &mut dyn RandomSource,
) -> LootResult<String> {
    let prefix = pick_prefix(tables, quality, rng)?;
    let noun = tables
        .container_nouns
        .get(&size)
        .and_then(|nouns| pick(rng, nouns))
        .map(String::as_str)
        .unwrap_or("Container");
    Ok(format!("{} {}", prefix, noun))
}

/// Preset name with the quality's currency prefix, if it has one.
pub fn currency_name(tables: &GenerationTables, preset: CurrencyPreset, quality: Quality) -> String {
    match tables.currency_prefixes.get(&quality) {
        Some(prefix) => format!("{} {}", prefix, preset.display_name()),
        None => preset.display_name().to_string(),
    }
}

pub fn item_description(
    tables: &GenerationTables,
    category: ItemCategory,
    quality: Quality,
) -> LootResult<String> {
    tables.description(category, quality).map(str::to_string)
}

/// Random icon from the subtype's pool, else the category icon, else the
/// global fallback.
pub fn item_icon(
    tables: &GenerationTables,
    category: ItemCategory,
    subtype: Option<ItemSubtype>,
    rng: &mut dyn RandomSource,
) -> String {
    subtype
        .and_then(|subtype| tables.icon_pools.get(&subtype))
        .and_then(|pool| pick(rng, pool))
        .or_else(|| tables.category_icons.get(&category))
        .unwrap_or(&tables.fallback_icon)
        .clone()
}

/// Icon for a container; epic and better containers use the ornate variant.
pub fn container_icon(tables: &GenerationTables, size: ContainerSize, quality: Quality) -> String {
    match tables.container_icons.get(&size) {
        Some(icons) if quality >= Quality::Epic => icons.ornate.clone(),
        Some(icons) => icons.standard.clone(),
        None => tables
            .category_icons
            .get(&ItemCategory::Container)
            .unwrap_or(&tables.fallback_icon)
            .clone(),
    }
}

/// Full image URL of an icon.
pub fn image_url(tables: &GenerationTables, icon_id: &str) -> String {
    format!("{}{}.jpg", tables.icon_base_url, icon_id)
}

fn pick_prefix<'a>(
    tables: &'a GenerationTables,
    quality: Quality,
    rng: &mut dyn RandomSource,
) -> LootResult<&'a str> {
    let prefixes = tables.name_prefixes(quality)?;
    Ok(pick(rng, prefixes).map(String::as_str).unwrap_or_default())
}
