//! # Currency Items
//!
//! Coin items built from named presets, used on their own and to seed
//! container contents.

use super::{currency_name, image_url, CurrencyPresetInfo, GenerationTables};
use crate::utils::{at_least_one, pick, RandomSource};
use crate::{
    CurrencyDetails, CurrencyPreset, CurrencyValue, Denomination, GeneratedItem, ItemCategory,
    ItemDetails, ItemHeader, ItemSubtype, LootResult, Quality,
};

/// Picks one of the presets configured for `quality`.
pub fn select_currency_preset(
    tables: &GenerationTables,
    quality: Quality,
    rng: &mut dyn RandomSource,
) -> CurrencyPreset {
    pick(rng, tables.currency_choices(quality))
        .copied()
        .unwrap_or(CurrencyPreset::ModestSum)
}

/// Scales a preset by `factor`.
///
/// Returns the coin value and the lump amount in the preset's own
/// denomination. When the preset has a per-denomination table, every listed
/// denomination is scaled and floored at one; otherwise the lump amount is
/// paid in the native denomination.
///
/// # Examples
///
/// ```
/// use lootsmith::{scale_currency, CurrencyPresetInfo, CurrencyValue, Denomination};
///
/// let info = CurrencyPresetInfo {
///     denomination: Denomination::Gold,
///     value: 50,
///     value_display: None,
///     icon: "inv_misc_coin_17".to_string(),
///     description: String::new(),
/// };
/// let (value, lump) = scale_currency(&info, 2.0);
/// assert_eq!(lump, 100);
/// assert_eq!(value, CurrencyValue::new(100, 0, 0));
/// ```
pub fn scale_currency(info: &CurrencyPresetInfo, factor: f64) -> (CurrencyValue, u32) {
    let lump = at_least_one(info.value as f64 * factor);
    let scale = |amount: u32| {
        if amount > 0 {
            at_least_one(amount as f64 * factor)
        } else {
            0
        }
    };

    let from_display = info.value_display.map(|display| {
        CurrencyValue::new(scale(display.gold), scale(display.silver), scale(display.copper))
    });

    let value = match from_display {
        Some(value) if !value.is_zero() => value,
        _ => match info.denomination {
            Denomination::Gold => CurrencyValue::new(lump, 0, 0),
            Denomination::Silver => CurrencyValue::new(0, lump, 0),
            Denomination::Copper => CurrencyValue::new(0, 0, lump),
        },
    };
    (value, lump)
}

/// Builds a currency item.
///
/// `preset` of `None` selects one of the presets configured for `quality`.
/// The preset is scaled by the quality's stat multiplier times the power scale.
pub fn generate_currency_item(
    tables: &GenerationTables,
    preset: Option<CurrencyPreset>,
    quality: Quality,
    power_scale: f64,
    rng: &mut dyn RandomSource,
) -> LootResult<GeneratedItem> {
    let factor = tables.scaling_factor(quality, power_scale)?;
    let preset = preset.unwrap_or_else(|| select_currency_preset(tables, quality, rng));
    let info = tables.currency_preset(preset)?;
    let (value, lump) = scale_currency(info, factor);

    let header = ItemHeader {
        name: currency_name(tables, preset, quality),
        quality,
        description: info.description.clone(),
        icon_id: info.icon.clone(),
        image_url: image_url(tables, &info.icon),
        value,
        dimensions: tables.dimensions.resolve(
            ItemCategory::Currency,
            Some(ItemSubtype::Currency(preset)),
            None,
        ),
    };
    let details = ItemDetails::Currency(CurrencyDetails {
        preset,
        currency_type: info.denomination,
        currency_value: lump,
    });

    Ok(GeneratedItem::assemble(header, details, tables.max_stack_size))
}
