//! TOML inventory fixtures.
//!
//! A fixture lists online players and what they carry:
//!
//! ```toml
//! [[players]]
//! id = 1
//! name = "Steve"
//!
//! [[players.slots]]
//! slot = 13
//! item = "minecraft:stone"
//! count = 5
//!
//! [[players.armor]]
//! slot = 0
//! item = "iron_helmet"
//! ```

use crate::MemoryInventories;
use anyhow::{bail, Context, Result};
use playerinv_core::inventory::ARMOR_SLOTS;
use playerinv_core::{CarriedInventory, ItemDescriptor, ItemMeta, RegistryKey, SlotIndex};
use playerinv_placeholder::{PlayerContext, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A stack placed at slot `slot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedStack<I> {
    /// Slot position.
    pub slot: I,
    /// Item type.
    pub item: RegistryKey,
    /// Stack size.
    #[serde(default = "default_count")]
    pub count: u32,
    /// Optional metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ItemMeta>,
}

fn default_count() -> u32 {
    1
}

impl<I> PlacedStack<I> {
    fn descriptor(&self) -> ItemDescriptor {
        match &self.meta {
            Some(meta) => ItemDescriptor::with_meta(self.item.clone(), self.count, meta.clone()),
            None => ItemDescriptor::new(self.item.clone(), self.count),
        }
    }

    fn from_descriptor(slot: I, stack: &ItemDescriptor) -> Self {
        Self {
            slot,
            item: stack.item.clone(),
            count: stack.count,
            meta: stack.meta.clone(),
        }
    }
}

/// One player's entry in a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFixture {
    /// Host identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Main-grid stacks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<PlacedStack<SlotIndex>>,
    /// Armor stacks (`0` = head .. `3` = feet).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub armor: Vec<PlacedStack<usize>>,
    /// Offhand stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offhand: Option<PlacedStack<u8>>,
}

impl PlayerFixture {
    fn build(&self) -> Result<(PlayerContext, CarriedInventory)> {
        let mut inventory = CarriedInventory::new();
        let mut seen = BTreeSet::new();

        for placed in &self.slots {
            if !seen.insert(placed.slot) {
                bail!("player {} lists slot {} twice", self.name, placed.slot);
            }
            inventory.set(placed.slot, Some(placed.descriptor()));
        }
        for placed in &self.armor {
            if !inventory.set_armor(placed.slot, Some(placed.descriptor())) {
                bail!(
                    "player {} has armor slot {} (expected < {ARMOR_SLOTS})",
                    self.name,
                    placed.slot
                );
            }
        }
        if let Some(placed) = &self.offhand {
            inventory.set_offhand(Some(placed.descriptor()));
        }

        Ok((PlayerContext::new(self.id, self.name.clone()), inventory))
    }

    fn capture(player: &PlayerContext, inventory: &CarriedInventory) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            slots: SlotIndex::all()
                .filter_map(|slot| inventory.get(slot).map(|s| PlacedStack::from_descriptor(slot, s)))
                .collect(),
            armor: (0..ARMOR_SLOTS)
                .filter_map(|i| inventory.armor(i).map(|s| PlacedStack::from_descriptor(i, s)))
                .collect(),
            offhand: inventory
                .offhand()
                .map(|s| PlacedStack::from_descriptor(0, s)),
        }
    }
}

/// A set of players with their inventories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryFixture {
    /// Players in the fixture.
    #[serde(default)]
    pub players: Vec<PlayerFixture>,
}

impl InventoryFixture {
    /// Parse fixture TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse inventory fixture")
    }

    /// Load a fixture file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read inventory fixture {}", path.display()))?;
        let fixture = Self::from_toml_str(&contents)
            .with_context(|| format!("in {}", path.display()))?;
        debug!(
            path = %path.display(),
            players = fixture.players.len(),
            "loaded inventory fixture"
        );
        Ok(fixture)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build an in-memory host. Duplicate ids, duplicate slots and
    /// out-of-range armor slots are rejected.
    pub fn build(&self) -> Result<MemoryInventories> {
        let mut host = MemoryInventories::new();
        for entry in &self.players {
            let (player, inventory) = entry.build()?;
            if host.insert(player, inventory).is_some() {
                bail!("player id {} appears more than once", entry.id);
            }
        }
        Ok(host)
    }

    /// Capture the current state of a host.
    pub fn capture(host: &MemoryInventories) -> Self {
        Self {
            players: host
                .players()
                .filter_map(|player| {
                    host.inventory(player.id)
                        .map(|inventory| PlayerFixture::capture(player, inventory))
                })
                .collect(),
        }
    }
}
