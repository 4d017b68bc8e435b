#![warn(missing_docs)]
//! In-memory host surfaces for exercising placeholders without a server.

mod fixture;

use playerinv_core::{CarriedInventory, MainGridView};
use playerinv_placeholder::{InventoryProvider, PlayerContext, PlayerId};
use std::collections::BTreeMap;

pub use fixture::*;

/// Online players and their carried inventories, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventories {
    players: BTreeMap<PlayerId, (PlayerContext, CarriedInventory)>,
}

impl MemoryInventories {
    /// No players online.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a player, returning the previous inventory.
    pub fn insert(
        &mut self,
        player: PlayerContext,
        inventory: CarriedInventory,
    ) -> Option<CarriedInventory> {
        self.players
            .insert(player.id, (player, inventory))
            .map(|(_, previous)| previous)
    }

    /// Take a player offline.
    pub fn remove(&mut self, id: PlayerId) -> Option<CarriedInventory> {
        self.players.remove(&id).map(|(_, inventory)| inventory)
    }

    /// Context for an online player.
    pub fn player(&self, id: PlayerId) -> Option<&PlayerContext> {
        self.players.get(&id).map(|(player, _)| player)
    }

    /// Context for the first online player with `name` (ASCII case-insensitive).
    pub fn player_named(&self, name: &str) -> Option<&PlayerContext> {
        self.players
            .values()
            .map(|(player, _)| player)
            .find(|player| player.name.eq_ignore_ascii_case(name))
    }

    /// A player's inventory.
    pub fn inventory(&self, id: PlayerId) -> Option<&CarriedInventory> {
        self.players.get(&id).map(|(_, inventory)| inventory)
    }

    /// A player's inventory, for host-side changes between resolutions.
    pub fn inventory_mut(&mut self, id: PlayerId) -> Option<&mut CarriedInventory> {
        self.players.get_mut(&id).map(|(_, inventory)| inventory)
    }

    /// Online players in id order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerContext> {
        self.players.values().map(|(player, _)| player)
    }
}

impl InventoryProvider for MemoryInventories {
    fn main_grid(&self, player: &PlayerContext) -> Option<MainGridView<'_>> {
        self.inventory(player.id).map(CarriedInventory::main_grid)
    }
}
