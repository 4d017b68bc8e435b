//! Property-based tests for main-grid addressing
//!
//! Validates the slot/coordinate mapping:
//! - Every valid slot lands inside the 9x5 grid
//! - The mapping round-trips through the coordinate
//! - Anything outside 0..=44 is rejected, never clamped

use playerinv_core::{GridCoordinate, GridError, SlotIndex, GRID_COLUMNS, GRID_ROWS};
use proptest::prelude::*;

proptest! {
    /// Property: row = i / 9 and column = i % 9, both within the grid.
    #[test]
    fn coordinate_matches_row_major_formula(i in 0i64..=44) {
        let coord = SlotIndex::new(i).unwrap().coordinate();

        prop_assert_eq!(i64::from(coord.row()), i / 9);
        prop_assert_eq!(i64::from(coord.column()), i % 9);
        prop_assert!(coord.column() < GRID_COLUMNS);
        prop_assert!(coord.row() < GRID_ROWS);
    }

    /// Property: slot -> coordinate -> slot is the identity.
    #[test]
    fn slot_roundtrips_through_coordinate(i in 0i64..=44) {
        let slot = SlotIndex::new(i).unwrap();
        prop_assert_eq!(slot.coordinate().slot(), slot);
    }

    /// Property: coordinate -> slot -> coordinate is the identity.
    #[test]
    fn coordinate_roundtrips_through_slot(column in 0u8..9, row in 0u8..5) {
        let coord = GridCoordinate::new(column, row).unwrap();
        prop_assert_eq!(coord.slot().coordinate(), coord);
    }

    /// Property: out-of-range indices are errors carrying the original value.
    #[test]
    fn out_of_range_is_rejected(
        i in prop_oneof![i64::MIN..0i64, 45i64..i64::MAX],
    ) {
        prop_assert_eq!(SlotIndex::new(i), Err(GridError::SlotOutOfRange(i)));
    }
}
