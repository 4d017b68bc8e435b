//! Carried player inventory and its main-grid view.
//!
//! A carried inventory holds the 45-slot main grid plus armor, offhand and
//! crafting-input slots. Placeholders only ever see the main grid through a
//! borrowed [`MainGridView`].

use crate::grid::{GridCoordinate, SlotIndex, MAIN_GRID_SIZE};
use crate::item::ItemDescriptor;
use serde::{Deserialize, Serialize};

/// Number of armor slots (head, chest, legs, feet).
pub const ARMOR_SLOTS: usize = 4;

/// Number of crafting-input slots in the player's 2x2 grid.
pub const CRAFTING_SLOTS: usize = 4;

type MainSlots = [Option<ItemDescriptor>; MAIN_GRID_SIZE];

/// Everything a player carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarriedInventory {
    main: MainSlots,
    armor: [Option<ItemDescriptor>; ARMOR_SLOTS],
    offhand: Option<ItemDescriptor>,
    crafting: [Option<ItemDescriptor>; CRAFTING_SLOTS],
}

/// Wire form; `main` is length-checked on the way in.
#[derive(Serialize, Deserialize)]
struct CarriedInventoryRepr {
    main: Vec<Option<ItemDescriptor>>,
    #[serde(default)]
    armor: [Option<ItemDescriptor>; ARMOR_SLOTS],
    #[serde(default)]
    offhand: Option<ItemDescriptor>,
    #[serde(default)]
    crafting: [Option<ItemDescriptor>; CRAFTING_SLOTS],
}

impl Serialize for CarriedInventory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        CarriedInventoryRepr {
            main: self.main.to_vec(),
            armor: self.armor.clone(),
            offhand: self.offhand.clone(),
            crafting: self.crafting.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CarriedInventory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = CarriedInventoryRepr::deserialize(deserializer)?;
        let found = repr.main.len();
        let main: MainSlots = repr.main.try_into().map_err(|_| {
            serde::de::Error::custom(format!(
                "expected {MAIN_GRID_SIZE} main slots, got {found}"
            ))
        })?;

        Ok(Self {
            main,
            armor: repr.armor,
            offhand: repr.offhand,
            crafting: repr.crafting,
        })
    }
}

impl CarriedInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            main: std::array::from_fn(|_| None),
            armor: std::array::from_fn(|_| None),
            offhand: None,
            crafting: std::array::from_fn(|_| None),
        }
    }

    /// Stack in a main-grid slot.
    pub fn get(&self, slot: SlotIndex) -> Option<&ItemDescriptor> {
        self.main[slot.as_usize()].as_ref()
    }

    /// Replace a main-grid slot, returning the previous stack.
    pub fn set(&mut self, slot: SlotIndex, stack: Option<ItemDescriptor>) -> Option<ItemDescriptor> {
        std::mem::replace(&mut self.main[slot.as_usize()], stack)
    }

    /// Empty a main-grid slot.
    pub fn take(&mut self, slot: SlotIndex) -> Option<ItemDescriptor> {
        self.main[slot.as_usize()].take()
    }

    /// Armor slot (`0` = head .. `3` = feet). Out-of-range returns `None`.
    pub fn armor(&self, index: usize) -> Option<&ItemDescriptor> {
        self.armor.get(index).and_then(Option::as_ref)
    }

    /// Replace an armor slot. Returns `false` for an out-of-range index.
    pub fn set_armor(&mut self, index: usize, stack: Option<ItemDescriptor>) -> bool {
        match self.armor.get_mut(index) {
            Some(slot) => {
                *slot = stack;
                true
            }
            None => false,
        }
    }

    /// Offhand stack.
    pub fn offhand(&self) -> Option<&ItemDescriptor> {
        self.offhand.as_ref()
    }

    /// Replace the offhand stack.
    pub fn set_offhand(&mut self, stack: Option<ItemDescriptor>) {
        self.offhand = stack;
    }

    /// Replace a crafting-input slot. Returns `false` for an out-of-range index.
    pub fn set_crafting(&mut self, index: usize, stack: Option<ItemDescriptor>) -> bool {
        match self.crafting.get_mut(index) {
            Some(slot) => {
                *slot = stack;
                true
            }
            None => false,
        }
    }

    /// Read-only view over the main grid only.
    pub fn main_grid(&self) -> MainGridView<'_> {
        MainGridView { slots: &self.main }
    }

    /// Number of empty main-grid slots.
    pub fn empty_slots(&self) -> usize {
        self.main.iter().filter(|slot| slot.is_none()).count()
    }
}

impl Default for CarriedInventory {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed, read-only view of a 9x5 main grid.
#[derive(Debug, Clone, Copy)]
pub struct MainGridView<'a> {
    slots: &'a MainSlots,
}

impl<'a> MainGridView<'a> {
    /// Wrap host-owned slot storage.
    pub fn new(slots: &'a [Option<ItemDescriptor>; MAIN_GRID_SIZE]) -> Self {
        Self { slots }
    }

    /// Copy of the stack at `coord`, leaving the slot untouched.
    pub fn peek(&self, coord: GridCoordinate) -> Option<ItemDescriptor> {
        self.slots[coord.slot().as_usize()].clone()
    }

    /// Borrow the stack at `coord`.
    pub fn get(&self, coord: GridCoordinate) -> Option<&'a ItemDescriptor> {
        self.slots[coord.slot().as_usize()].as_ref()
    }
}
