#![warn(missing_docs)]
//! Core data model for the `playerinv` placeholder: item keys, item
//! descriptors, main-grid addressing and the carried inventory.

pub mod grid;
pub mod inventory;
pub mod item;
pub mod registry;

pub use grid::{GridCoordinate, GridError, SlotIndex, GRID_COLUMNS, GRID_ROWS, MAIN_GRID_SIZE};
pub use inventory::{CarriedInventory, MainGridView};
pub use item::{ItemDescriptor, ItemMeta};
pub use registry::{RegistryKey, RegistryKeyError};
