use crate::context::{InventoryProvider, PlaceholderContext, PlayerContext};
use crate::error::PlaceholderError;
use crate::schema::ArgValue;
use crate::{playerinv, Placeholder, SlotResolver};
use playerinv_core::ItemDescriptor;
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

/// Placeholders by name.
#[derive(Default)]
pub struct PlaceholderRegistry {
    entries: BTreeMap<String, Box<dyn Placeholder>>,
}

impl PlaceholderRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in placeholders.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .entries
            .insert(playerinv::NAME.to_string(), Box::new(SlotResolver::new()));
        registry
    }

    /// Add a placeholder under its own name.
    pub fn register(&mut self, placeholder: Box<dyn Placeholder>) -> Result<(), PlaceholderError> {
        let name = placeholder.name().to_string();
        if self.entries.contains_key(&name) {
            return Err(PlaceholderError::DuplicatePlaceholder(name));
        }
        debug!(placeholder = %name, "registered placeholder");
        self.entries.insert(name, placeholder);
        Ok(())
    }

    /// Look up a placeholder.
    pub fn get(&self, name: &str) -> Option<&dyn Placeholder> {
        self.entries.get(name).map(|p| &**p)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Validate `args` against `name`'s schema and resolve it.
    pub fn dispatch(
        &self,
        name: &str,
        player: Option<&PlayerContext>,
        inventories: &dyn InventoryProvider,
        args: &[ArgValue],
    ) -> Result<Option<ItemDescriptor>, PlaceholderError> {
        let placeholder = self
            .get(name)
            .ok_or_else(|| PlaceholderError::UnknownPlaceholder(name.to_string()))?;

        let overload = placeholder.schema().validate(name, args).inspect_err(|err| {
            debug!(placeholder = name, %err, "arguments rejected");
        })?;

        let ctx = PlaceholderContext::new(player, inventories).with_overload(overload);
        placeholder.resolve(&ctx, args)
    }

    /// Parse and dispatch token text such as `$playerinv:13`.
    pub fn resolve_token(
        &self,
        token: &str,
        player: Option<&PlayerContext>,
        inventories: &dyn InventoryProvider,
    ) -> Result<Option<ItemDescriptor>, PlaceholderError> {
        let token = PlaceholderToken::parse(token)?;
        self.dispatch(&token.name, player, inventories, &token.args)
    }
}

/// A placeholder token split into name and arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderToken {
    /// Placeholder name.
    pub name: String,
    /// Arguments, types inferred with [`ArgValue::parse`].
    pub args: Vec<ArgValue>,
}

impl PlaceholderToken {
    /// Parse `$name:arg1:arg2...`; the leading `$` is optional.
    pub fn parse(text: &str) -> Result<Self, PlaceholderError> {
        let trimmed = text.trim();
        let body = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let mut parts = body.split(':');

        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(PlaceholderError::MalformedToken(text.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            args: parts.map(ArgValue::parse).collect(),
        })
    }
}

impl FromStr for PlaceholderToken {
    type Err = PlaceholderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PlayerId;
    use crate::schema::ValidationSchema;
    use playerinv_core::{CarriedInventory, RegistryKey, SlotIndex};

    struct Constant {
        schema: ValidationSchema,
    }

    impl Placeholder for Constant {
        fn name(&self) -> &str {
            "constant"
        }

        fn schema(&self) -> &ValidationSchema {
            &self.schema
        }

        fn resolve(
            &self,
            _ctx: &PlaceholderContext<'_>,
            _args: &[ArgValue],
        ) -> Result<Option<ItemDescriptor>, PlaceholderError> {
            Ok(Some(ItemDescriptor::new(RegistryKey::parse("apple").unwrap(), 1)))
        }
    }

    #[test]
    fn parses_tokens() {
        let token = PlaceholderToken::parse("$playerinv:13").unwrap();
        assert_eq!(token.name, "playerinv");
        assert_eq!(token.args, vec![ArgValue::Int(13)]);

        let bare: PlaceholderToken = "playerinv".parse().unwrap();
        assert!(bare.args.is_empty());

        assert!(PlaceholderToken::parse("$").is_err());
        assert!(PlaceholderToken::parse("$:1").is_err());
        assert!(PlaceholderToken::parse("player inv:1").is_err());
    }

    #[test]
    fn defaults_include_playerinv() {
        let registry = PlaceholderRegistry::with_defaults();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["playerinv"]);
        assert!(registry.get("playerinv").is_some());
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut registry = PlaceholderRegistry::with_defaults();
        let err = registry.register(Box::new(SlotResolver::new())).unwrap_err();
        assert_eq!(err, PlaceholderError::DuplicatePlaceholder("playerinv".into()));
    }

    #[test]
    fn dispatches_through_schema() {
        let mut inv = CarriedInventory::new();
        let torch = ItemDescriptor::new(RegistryKey::parse("torch").unwrap(), 8);
        inv.set(SlotIndex::new(2).unwrap(), Some(torch.clone()));
        let alex = PlayerContext::new(PlayerId(7), "Alex");
        let registry = PlaceholderRegistry::with_defaults();

        assert_eq!(
            registry.resolve_token("$playerinv:2", Some(&alex), &inv),
            Ok(Some(torch))
        );
        assert!(matches!(
            registry.resolve_token("$playerinv:45", Some(&alex), &inv),
            Err(PlaceholderError::NoMatchingOverload { .. })
        ));
        assert_eq!(
            registry.resolve_token("$nope:1", Some(&alex), &inv),
            Err(PlaceholderError::UnknownPlaceholder("nope".into()))
        );
    }

    #[test]
    fn custom_placeholders_dispatch() {
        let mut registry = PlaceholderRegistry::new();
        registry
            .register(Box::new(Constant {
                schema: ValidationSchema::default(),
            }))
            .unwrap();

        let inv = CarriedInventory::new();
        let got = registry.dispatch("constant", None, &inv, &[]).unwrap();
        assert_eq!(got.map(|stack| stack.item.to_string()), Some("minecraft:apple".into()));
    }
}
