//! Integration tests for loading and substituting generation tables.

use lootsmith::{
    ContainerSize, GenerationTables, Generator, GridSize, ItemCategory, ItemFactory, ItemRequest,
    LootError, LootResult, Quality,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

#[test]
fn test_default_tables_are_consistent() -> LootResult<()> {
    let tables = GenerationTables::default();
    tables.validate()?;

    for quality in Quality::ALL {
        let total: u32 = tables
            .distribution_for(quality)
            .iter()
            .map(|entry| entry.weight)
            .sum();
        assert_eq!(total, 100, "{} distribution", quality);
    }
    Ok(())
}

#[test]
fn test_load_overrides_from_file() -> LootResult<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{ "containerGrids": {{ "SMALL": {{ "rows": 2, "cols": 2 }} }}, "maxFillAttempts": 12 }}"#
    )?;

    let tables = GenerationTables::load(file.path())?;
    assert_eq!(tables.grid_size(ContainerSize::Small)?, GridSize::new(2, 2));
    assert_eq!(tables.max_fill_attempts, 12);
    assert!(matches!(
        tables.grid_size(ContainerSize::Large),
        Err(LootError::MissingTableEntry { .. })
    ));
    // Untouched tables keep their production values
    assert_eq!(tables.dice_ladder, vec![4, 6, 8, 10, 12]);
    Ok(())
}

#[test]
fn test_saved_tables_drive_the_same_generation() -> LootResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tables.json");
    std::fs::write(&path, GenerationTables::default().to_json()?)?;

    let loaded = ItemFactory::new(GenerationTables::load(&path)?);
    let builtin = ItemFactory::default();
    let request = ItemRequest::new(ItemCategory::Consumable, Quality::Rare);

    let a = loaded.generate(&request, &mut StdRng::seed_from_u64(9))?;
    let b = builtin.generate(&request, &mut StdRng::seed_from_u64(9))?;
    assert_eq!(a.name, b.name);
    assert_eq!(a.value, b.value);
    assert_eq!(a.details, b.details);
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = GenerationTables::load(dir.path().join("absent.json"));
    assert!(matches!(result, Err(LootError::Io(_))));
}

#[test]
fn test_malformed_file_is_a_serde_error() -> LootResult<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{{ not json")?;
    assert!(matches!(
        GenerationTables::load(file.path()),
        Err(LootError::Serde(_))
    ));
    Ok(())
}
