//! # Grid Placement
//!
//! First-fit placement of rectangular items on a container grid.
//!
//! The occupancy model is rebuilt from the item list on every call, so the
//! engine never holds state between placements.

use crate::{Dimensions, GeneratedItem, GridPosition, GridSize};

/// Cell occupancy of a container grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOccupancy {
    grid: GridSize,
    cells: Vec<bool>,
}

impl GridOccupancy {
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            cells: vec![false; grid.cells() as usize],
        }
    }

    /// Marks the cells of every placed item. Unplaced items are ignored and
    /// cells outside the grid are clipped.
    pub fn from_items(grid: GridSize, items: &[GeneratedItem]) -> Self {
        let mut occupancy = Self::new(grid);
        for item in items {
            if let Some(position) = item.position {
                occupancy.mark(position, item.effective_dimensions());
            }
        }
        occupancy
    }

    /// Marks a rectangle as occupied, clipping anything outside the grid.
    pub fn mark(&mut self, position: GridPosition, footprint: Dimensions) {
        let row_end = position.row.saturating_add(footprint.height).min(self.grid.rows);
        let col_end = position.col.saturating_add(footprint.width).min(self.grid.cols);
        for row in position.row..row_end {
            for col in position.col..col_end {
                let index = self.index(row, col);
                self.cells[index] = true;
            }
        }
    }

    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        row < self.grid.rows && col < self.grid.cols && self.cells[self.index(row, col)]
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }

    /// True when the whole rectangle lies inside the grid and is free.
    pub fn fits(&self, position: GridPosition, footprint: Dimensions) -> bool {
        let row_end = position.row as u64 + footprint.height as u64;
        let col_end = position.col as u64 + footprint.width as u64;
        if row_end > self.grid.rows as u64 || col_end > self.grid.cols as u64 {
            return false;
        }
        (position.row..position.row + footprint.height).all(|row| {
            (position.col..position.col + footprint.width).all(|col| !self.is_occupied(row, col))
        })
    }

    /// Scans top-left cells in row-major order and returns the first one
    /// where `footprint` fits.
    pub fn first_fit(&self, footprint: Dimensions) -> Option<GridPosition> {
        if footprint.width == 0
            || footprint.height == 0
            || footprint.height > self.grid.rows
            || footprint.width > self.grid.cols
        {
            return None;
        }

        for row in 0..=self.grid.rows - footprint.height {
            for col in 0..=self.grid.cols - footprint.width {
                let candidate = GridPosition::new(row, col);
                if self.fits(candidate, footprint) {
                    return Some(candidate);
                }
            }
        }
        None
    }

    fn index(&self, row: u32, col: u32) -> usize {
        (row * self.grid.cols + col) as usize
    }
}

/// Finds the first free cell for an item of size `footprint`.
///
/// Existing items contribute their rotation-adjusted rectangle at their
/// stored position. Returns `None` when nothing fits; callers skip the item.
///
/// # Examples
///
/// ```
/// use lootsmith::{find_valid_position, Dimensions, GridPosition, GridSize};
///
/// let position = find_valid_position(&[], GridSize::new(4, 6), Dimensions::new(2, 2));
/// assert_eq!(position, Some(GridPosition::new(0, 0)));
/// ```
pub fn find_valid_position(
    existing: &[GeneratedItem],
    grid: GridSize,
    footprint: Dimensions,
) -> Option<GridPosition> {
    GridOccupancy::from_items(grid, existing).first_fit(footprint)
}

/// True when no two placed items overlap and every placed item lies inside
/// the grid.
pub fn placements_are_valid(items: &[GeneratedItem], grid: GridSize) -> bool {
    let mut occupancy = GridOccupancy::new(grid);
    for item in items {
        let Some(position) = item.position else {
            continue;
        };
        let footprint = item.effective_dimensions();
        if !occupancy.fits(position, footprint) {
            return false;
        }
        occupancy.mark(position, footprint);
    }
    true
}
