#![warn(missing_docs)]
//! Placeholder resolution for player-facing text.
//!
//! A host registers [`Placeholder`]s in a [`PlaceholderRegistry`], then
//! dispatches tokens such as `$playerinv:13` with the invoking player and an
//! [`InventoryProvider`]. Arguments are validated against each placeholder's
//! declarative [`ValidationSchema`] before it runs.

mod context;
mod error;
pub mod playerinv;
mod registry;
pub mod schema;

use playerinv_core::ItemDescriptor;

pub use context::{InventoryProvider, PlaceholderContext, PlayerContext, PlayerId};
pub use error::PlaceholderError;
pub use playerinv::SlotResolver;
pub use registry::{PlaceholderRegistry, PlaceholderToken};
pub use schema::{ArgKind, ArgSpec, ArgValue, ValidationSchema};

/// A named, schema-validated placeholder.
pub trait Placeholder {
    /// Name used in tokens (`$name:...`).
    fn name(&self) -> &str;

    /// Accepted argument shapes.
    fn schema(&self) -> &ValidationSchema;

    /// Resolve already-validated `args` for the overload in `ctx`.
    ///
    /// `Ok(None)` means "no result"; the host renders nothing.
    fn resolve(
        &self,
        ctx: &PlaceholderContext<'_>,
        args: &[ArgValue],
    ) -> Result<Option<ItemDescriptor>, PlaceholderError>;
}
