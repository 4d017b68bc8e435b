//! Item descriptors as seen by placeholders.

use crate::registry::RegistryKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry path of the empty item.
pub const AIR: &str = "air";

/// Optional per-stack metadata (custom name, lore, tool damage).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemMeta {
    /// Custom display name, if the stack was renamed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Lore lines shown under the item name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    /// Accumulated damage for items with durability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
}

impl ItemMeta {
    /// True when no field carries information.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.lore.is_empty() && self.damage.is_none()
    }
}

/// A stack of items occupying one inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    /// Item type.
    pub item: RegistryKey,
    /// Number of items in the stack.
    pub count: u32,
    /// Optional stack metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ItemMeta>,
}

impl ItemDescriptor {
    /// Create a stack without metadata.
    pub fn new(item: RegistryKey, count: u32) -> Self {
        Self {
            item,
            count,
            meta: None,
        }
    }

    /// Create a stack carrying metadata. Empty metadata is normalized to `None`.
    pub fn with_meta(item: RegistryKey, count: u32, meta: ItemMeta) -> Self {
        Self {
            item,
            count,
            meta: (!meta.is_empty()).then_some(meta),
        }
    }

    /// The empty-slot sentinel.
    ///
    /// Matches what the host item builder produces for air: quantity 1 and
    /// no metadata.
    pub fn air() -> Self {
        Self::new(RegistryKey::vanilla(AIR), 1)
    }

    /// True if this descriptor is the empty-slot sentinel type.
    pub fn is_air(&self) -> bool {
        self.item.namespace() == crate::registry::DEFAULT_NAMESPACE && self.item.path() == AIR
    }
}

impl fmt::Display for ItemDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {}", self.count, self.item)?;
        if let Some(name) = self.meta.as_ref().and_then(|m| m.display_name.as_deref()) {
            write!(f, " \"{name}\"")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> RegistryKey {
        RegistryKey::parse(s).unwrap()
    }

    #[test]
    fn air_sentinel() {
        let air = ItemDescriptor::air();
        assert!(air.is_air());
        assert_eq!(air.item.to_string(), "minecraft:air");
        assert_eq!(air.count, 1);
        assert!(air.meta.is_none());
        assert!(!ItemDescriptor::new(key("stone"), 1).is_air());
        // Same path, other namespace: not the sentinel.
        assert!(!ItemDescriptor::new(key("mymod:air"), 1).is_air());
    }

    #[test]
    fn empty_meta_is_dropped() {
        let stack = ItemDescriptor::with_meta(key("stone"), 3, ItemMeta::default());
        assert_eq!(stack, ItemDescriptor::new(key("stone"), 3));
    }

    #[test]
    fn display_includes_custom_name() {
        let meta = ItemMeta {
            display_name: Some("Excalibur".into()),
            ..ItemMeta::default()
        };
        let sword = ItemDescriptor::with_meta(key("diamond_sword"), 1, meta);
        assert_eq!(sword.to_string(), "1x minecraft:diamond_sword \"Excalibur\"");
        assert_eq!(
            ItemDescriptor::new(key("stone"), 5).to_string(),
            "5x minecraft:stone"
        );
    }

    #[test]
    fn json_omits_missing_meta() {
        let json = serde_json::to_value(ItemDescriptor::new(key("stone"), 5)).unwrap();
        assert_eq!(json, serde_json::json!({ "item": "minecraft:stone", "count": 5 }));
    }
}
