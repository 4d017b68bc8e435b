//! `$playerinv:<slot>`: the item in a slot of the player's main grid.

use crate::context::{InventoryProvider, PlaceholderContext, PlayerContext};
use crate::error::PlaceholderError;
use crate::schema::{ArgKind, ArgSpec, ArgValue, ValidationSchema};
use crate::Placeholder;
use playerinv_core::{ItemDescriptor, SlotIndex};
use tracing::{debug, trace};

/// Placeholder name.
pub const NAME: &str = "playerinv";

/// Resolves a main-grid slot index to the stack occupying it.
///
/// Stateless: every call reads the provider afresh.
#[derive(Debug, Clone)]
pub struct SlotResolver {
    schema: ValidationSchema,
}

impl SlotResolver {
    /// Create the resolver with its single `slot` overload.
    pub fn new() -> Self {
        let max = f64::from(SlotIndex::MAX.get());
        Self {
            schema: ValidationSchema::new(vec![vec![
                ArgSpec::new("slot", ArgKind::Int).with_range(0.0, max),
            ]]),
        }
    }

    /// Resolve `args` (overload 0: a single integer slot) for `player`.
    ///
    /// Returns `Ok(None)` when there is no player (or the provider has no
    /// inventory for them) and the air descriptor when the slot is empty.
    /// A missing, non-integer or out-of-range slot is an error; the index is
    /// never clamped.
    pub fn resolve(
        &self,
        player: Option<&PlayerContext>,
        inventories: &dyn InventoryProvider,
        args: &[ArgValue],
    ) -> Result<Option<ItemDescriptor>, PlaceholderError> {
        let Some(player) = player else {
            trace!("no player in context");
            return Ok(None);
        };

        let slot = slot_argument(args)?;
        let coord = slot.coordinate();

        let Some(grid) = inventories.main_grid(player) else {
            debug!(player = %player.name, id = %player.id, "no inventory for player");
            return Ok(None);
        };

        let stack = grid.peek(coord).unwrap_or_else(ItemDescriptor::air);
        trace!(
            player = %player.name,
            slot = slot.get(),
            column = coord.column(),
            row = coord.row(),
            item = %stack.item,
            "resolved playerinv"
        );
        Ok(Some(stack))
    }
}

impl Default for SlotResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Placeholder for SlotResolver {
    fn name(&self) -> &str {
        NAME
    }

    fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    fn resolve(
        &self,
        ctx: &PlaceholderContext<'_>,
        args: &[ArgValue],
    ) -> Result<Option<ItemDescriptor>, PlaceholderError> {
        match ctx.overload {
            0 => SlotResolver::resolve(self, ctx.player, ctx.inventories, args),
            overload => Err(PlaceholderError::UnsupportedOverload {
                placeholder: NAME.to_string(),
                overload,
            }),
        }
    }
}

fn slot_argument(args: &[ArgValue]) -> Result<SlotIndex, PlaceholderError> {
    let arg = args.first().ok_or_else(|| PlaceholderError::MissingArgument {
        index: 0,
        name: "slot".to_string(),
    })?;
    let raw = arg.as_int().ok_or_else(|| PlaceholderError::ArgumentType {
        index: 0,
        name: "slot".to_string(),
        expected: ArgKind::Int,
        found: arg.to_string(),
    })?;
    Ok(SlotIndex::new(raw)?)
}
