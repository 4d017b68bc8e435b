//! Main inventory grid addressing.
//!
//! The main grid is 9 columns by 5 rows, hotbar row included. Slots are
//! numbered row-major from zero, so slot `i` lives at column `i % 9`,
//! row `i / 9`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Columns in the main grid.
pub const GRID_COLUMNS: u8 = 9;

/// Rows in the main grid.
pub const GRID_ROWS: u8 = 5;

/// Slots in the main grid.
pub const MAIN_GRID_SIZE: usize = GRID_COLUMNS as usize * GRID_ROWS as usize;

/// Errors from constructing grid addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Linear slot index outside `0..=44`.
    #[error("slot {0} is outside the main inventory grid (expected 0..=44)")]
    SlotOutOfRange(i64),
    /// Column or row outside the 9x5 grid.
    #[error("coordinate ({column}, {row}) is outside the 9x5 main inventory grid")]
    CoordinateOutOfRange {
        /// Offending column.
        column: u8,
        /// Offending row.
        row: u8,
    },
}

/// Zero-based, row-major index into the main grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// First slot (top-left of the hotbar row).
    pub const MIN: Self = Self(0);

    /// Last slot.
    pub const MAX: Self = Self(MAIN_GRID_SIZE as u8 - 1);

    /// Validate a raw index.
    pub fn new(index: i64) -> Result<Self, GridError> {
        if (0..MAIN_GRID_SIZE as i64).contains(&index) {
            Ok(Self(index as u8))
        } else {
            Err(GridError::SlotOutOfRange(index))
        }
    }

    /// Raw index.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index usable for slice access.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Grid position of this slot.
    pub const fn coordinate(self) -> GridCoordinate {
        GridCoordinate {
            column: self.0 % GRID_COLUMNS,
            row: self.0 / GRID_COLUMNS,
        }
    }

    /// Every valid slot in ascending order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..MAIN_GRID_SIZE as u8).map(SlotIndex)
    }
}

impl TryFrom<i64> for SlotIndex {
    type Error = GridError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SlotIndex> for u8 {
    fn from(slot: SlotIndex) -> Self {
        slot.0
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `(column, row)` position in the main grid, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCoordinate {
    column: u8,
    row: u8,
}

impl GridCoordinate {
    /// Validate a column/row pair.
    pub fn new(column: u8, row: u8) -> Result<Self, GridError> {
        if column < GRID_COLUMNS && row < GRID_ROWS {
            Ok(Self { column, row })
        } else {
            Err(GridError::CoordinateOutOfRange { column, row })
        }
    }

    /// Column (`0..=8`).
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Row (`0..=4`).
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Linear slot for this coordinate.
    pub const fn slot(self) -> SlotIndex {
        SlotIndex(self.row * GRID_COLUMNS + self.column)
    }
}

impl From<SlotIndex> for GridCoordinate {
    fn from(slot: SlotIndex) -> Self {
        slot.coordinate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn boundary_slots() {
        let first = SlotIndex::new(0).unwrap().coordinate();
        assert_eq!((first.column(), first.row()), (0, 0));

        let last = SlotIndex::new(44).unwrap().coordinate();
        assert_eq!((last.column(), last.row()), (8, 4));

        assert_eq!(SlotIndex::MIN.get(), 0);
        assert_eq!(SlotIndex::MAX.get(), 44);
    }

    #[test]
    fn slot_13_is_column_4_row_1() {
        let coord = SlotIndex::new(13).unwrap().coordinate();
        assert_eq!(coord, GridCoordinate::new(4, 1).unwrap());
    }

    #[test]
    fn rejects_out_of_range_slots() {
        assert_eq!(SlotIndex::new(45), Err(GridError::SlotOutOfRange(45)));
        assert_eq!(SlotIndex::new(-1), Err(GridError::SlotOutOfRange(-1)));
        assert!(SlotIndex::new(i64::MAX).is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(GridCoordinate::new(9, 0).is_err());
        assert!(GridCoordinate::new(0, 5).is_err());
        assert!(GridCoordinate::new(8, 4).is_ok());
    }

    #[test]
    fn mapping_covers_grid_exactly_once() {
        let coords: HashSet<_> = SlotIndex::all().map(SlotIndex::coordinate).collect();
        assert_eq!(coords.len(), MAIN_GRID_SIZE);
        for slot in SlotIndex::all() {
            assert_eq!(slot.coordinate().slot(), slot);
        }
    }

    #[test]
    fn serde_validates_range() {
        let slot: SlotIndex = serde_json::from_str("44").unwrap();
        assert_eq!(slot, SlotIndex::MAX);
        assert!(serde_json::from_str::<SlotIndex>("45").is_err());
        assert_eq!(serde_json::to_string(&SlotIndex::MIN).unwrap(), "0");
    }
}
