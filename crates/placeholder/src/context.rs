//! Host-supplied context for a single resolution.

use playerinv_core::{CarriedInventory, MainGridView};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable player identifier assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The player a placeholder is being resolved for.
///
/// Owned by the host and borrowed for the duration of one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerContext {
    /// Host identifier.
    pub id: PlayerId,
    /// Display name, used in logs.
    pub name: String,
}

impl PlayerContext {
    /// Create a context.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Host adapter giving read access to player inventories.
pub trait InventoryProvider {
    /// The main-grid view of `player`'s carried inventory, or `None` if the
    /// host has no inventory for that player.
    fn main_grid(&self, player: &PlayerContext) -> Option<MainGridView<'_>>;
}

/// A lone inventory serves whichever player asks.
impl InventoryProvider for CarriedInventory {
    fn main_grid(&self, _player: &PlayerContext) -> Option<MainGridView<'_>> {
        Some(CarriedInventory::main_grid(self))
    }
}

/// Everything a placeholder may read during one call.
#[derive(Clone, Copy)]
pub struct PlaceholderContext<'a> {
    /// Invoking player, if any.
    pub player: Option<&'a PlayerContext>,
    /// Inventory access.
    pub inventories: &'a dyn InventoryProvider,
    /// Index of the schema overload the arguments matched.
    pub overload: usize,
}

impl<'a> PlaceholderContext<'a> {
    /// Context for the first overload.
    pub fn new(player: Option<&'a PlayerContext>, inventories: &'a dyn InventoryProvider) -> Self {
        Self {
            player,
            inventories,
            overload: 0,
        }
    }

    /// Same context with a different matched overload.
    pub fn with_overload(self, overload: usize) -> Self {
        Self { overload, ..self }
    }
}

impl fmt::Debug for PlaceholderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceholderContext")
            .field("player", &self.player)
            .field("overload", &self.overload)
            .finish_non_exhaustive()
    }
}
