//! # Container Filling
//!
//! Fills a container grid with randomly generated contents.
//!
//! The filler works against a cell budget: `floor(cells * fill% / 100)`.
//! Currency, when requested, is pinned to the top-left cell first. After
//! that each attempt picks a category from the fill set, a random subtype
//! and a quality drawn from the container's distribution, then generates
//! the item. An item is kept only if its area fits the remaining budget
//! and the grid has a free spot for it. Attempts are capped, so a grid that
//! cannot reach its budget still terminates.

use super::{
    find_valid_position, generate_currency_item, sample_item_quality, GridOccupancy, ItemFactory,
};
use crate::utils::{pick, RandomSource};
use crate::{
    ContainerSize, FillLevel, GeneratedItem, GridPosition, GridSize, ItemSubtype, LootError,
    LootResult, Quality,
};
use uuid::Uuid;

/// Container parameters the filler works from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSpec {
    pub quality: Quality,
    pub size: ContainerSize,
    pub fill_level: FillLevel,
    pub include_currency: bool,
    pub power_scale: f64,
}

/// Outcome of one placement attempt.
#[derive(Debug)]
pub enum FillAttempt {
    Placed {
        item_id: Uuid,
        position: GridPosition,
        area: u32,
    },
    /// The item would push the filled cells past the budget.
    OverBudget { area: u32 },
    /// No free spot on the grid is large enough.
    NoFit { width: u32, height: u32 },
    /// Generating the candidate failed; the filler moved on.
    Failed(LootError),
}

impl FillAttempt {
    pub fn is_placed(&self) -> bool {
        matches!(self, FillAttempt::Placed { .. })
    }
}

/// Result of filling one container.
#[derive(Debug)]
pub struct ContainerFill {
    pub grid: GridSize,
    /// Placed items, currency first when it was requested and fit
    pub items: Vec<GeneratedItem>,
    /// Outcome of seeding the currency, if requested
    pub currency: Option<FillAttempt>,
    /// One entry per attempt of the main loop
    pub attempts: Vec<FillAttempt>,
    pub cells_to_fill: u32,
    pub cells_filled: u32,
}

impl ContainerFill {
    fn new(grid: GridSize, cells_to_fill: u32) -> Self {
        Self {
            grid,
            items: Vec::new(),
            currency: None,
            attempts: Vec::new(),
            cells_to_fill,
            cells_filled: 0,
        }
    }

    /// Number of main-loop attempts made, placed or not.
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Cells left before the budget is reached.
    pub fn remaining_budget(&self) -> u32 {
        self.cells_to_fill.saturating_sub(self.cells_filled)
    }

    /// Puts `item` at `position` and charges its area to the budget.
    fn place(&mut self, mut item: GeneratedItem, position: GridPosition) -> FillAttempt {
        let area = item.effective_dimensions().area();
        item.position = Some(position);
        let attempt = FillAttempt::Placed {
            item_id: item.id,
            position,
            area,
        };
        self.cells_filled += area;
        self.items.push(item);
        attempt
    }
}

impl ItemFactory {
    /// Generates the contents of a container.
    ///
    /// Fails only when the tables have no grid or fill level for the spec;
    /// individual items that fail to generate are logged and skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lootsmith::{ContainerSize, ContainerSpec, FillLevel, ItemFactory, Quality};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let factory = ItemFactory::default();
    /// let spec = ContainerSpec {
    ///     quality: Quality::Rare,
    ///     size: ContainerSize::Small,
    ///     fill_level: FillLevel::Full,
    ///     include_currency: true,
    ///     power_scale: 1.0,
    /// };
    /// let fill = factory.fill_container(&spec, &mut StdRng::seed_from_u64(3)).unwrap();
    /// assert_eq!(fill.cells_to_fill, 10);
    /// assert!(fill.cells_filled <= 10);
    /// ```
    pub fn fill_container(
        &self,
        spec: &ContainerSpec,
        rng: &mut dyn RandomSource,
    ) -> LootResult<ContainerFill> {
        let tables = self.tables();
        let grid = tables.grid_size(spec.size)?;
        let percentage = tables.fill_percentage(spec.fill_level)?;
        let cells_to_fill =
            u32::try_from(u64::from(grid.cells()) * u64::from(percentage) / 100).unwrap_or(u32::MAX);
        let mut fill = ContainerFill::new(grid, cells_to_fill);

        if spec.include_currency {
            fill.currency = Some(self.seed_currency(spec, &mut fill, rng));
        }

        if cells_to_fill == 0 {
            return Ok(fill);
        }

        if tables.fill_categories.is_empty() {
            log::warn!("No fill categories configured, leaving {} container empty", spec.size);
            return Ok(fill);
        }

        let mut attempts = 0;
        while fill.cells_filled < fill.cells_to_fill && attempts < tables.max_fill_attempts {
            attempts += 1;
            let outcome = self.fill_attempt(spec, &mut fill, rng);
            if let FillAttempt::Failed(err) = &outcome {
                log::warn!("Fill attempt {} for {} container failed: {}", attempts, spec.size, err);
            }
            fill.attempts.push(outcome);
        }

        log::debug!(
            "Filled {} container ({}): {} items, {}/{} cells after {} attempts",
            spec.size,
            spec.fill_level,
            fill.items.len(),
            fill.cells_filled,
            fill.cells_to_fill,
            attempts
        );
        Ok(fill)
    }

    fn seed_currency(
        &self,
        spec: &ContainerSpec,
        fill: &mut ContainerFill,
        rng: &mut dyn RandomSource,
    ) -> FillAttempt {
        let coins = match generate_currency_item(
            self.tables(),
            None,
            spec.quality,
            spec.power_scale,
            rng,
        ) {
            Ok(coins) => coins,
            Err(err) => {
                log::warn!("Could not generate currency for {} container: {}", spec.size, err);
                return FillAttempt::Failed(err);
            }
        };

        let footprint = coins.effective_dimensions();
        let origin = GridPosition::origin();
        if GridOccupancy::new(fill.grid).fits(origin, footprint) {
            fill.place(coins, origin)
        } else {
            FillAttempt::NoFit {
                width: footprint.width,
                height: footprint.height,
            }
        }
    }

    fn fill_attempt(
        &self,
        spec: &ContainerSpec,
        fill: &mut ContainerFill,
        rng: &mut dyn RandomSource,
    ) -> FillAttempt {
        let tables = self.tables();
        let Some(category) = pick(rng, &tables.fill_categories).copied() else {
            return FillAttempt::Failed(LootError::missing("fill categories", "any"));
        };
        let subtype = ItemSubtype::random_for(category, rng);
        let quality = sample_item_quality(tables, spec.quality, rng);

        let item = match self.build_item(category, subtype, quality, spec.power_scale, rng) {
            Ok(item) => item,
            Err(err) => return FillAttempt::Failed(err),
        };

        let footprint = item.effective_dimensions();
        let area = footprint.area();
        if area > fill.remaining_budget() {
            return FillAttempt::OverBudget { area };
        }

        match find_valid_position(&fill.items, fill.grid, footprint) {
            Some(position) => fill.place(item, position),
            None => FillAttempt::NoFit {
                width: footprint.width,
                height: footprint.height,
            },
        }
    }
}
