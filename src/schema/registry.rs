//! Schema registry - embedded JSON schemas

use rust_embed::Embed;
use std::collections::HashMap;

use crate::core::EntityPrefix;

#[derive(Embed)]
#[folder = "schemas/"]
struct EmbeddedSchemas;

/// The kinds of workspace file a schema exists for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Catalog,
    Profile,
    LineItem,
}

impl SchemaKind {
    pub fn all() -> &'static [SchemaKind] {
        &[SchemaKind::Catalog, SchemaKind::Profile, SchemaKind::LineItem]
    }

    /// Embedded schema filename
    pub fn filename(&self) -> &'static str {
        match self {
            SchemaKind::Catalog => "catalog.schema.json",
            SchemaKind::Profile => "msr.schema.json",
            SchemaKind::LineItem => "lni.schema.json",
        }
    }

    /// Schema for files carrying this id prefix
    pub fn for_prefix(prefix: EntityPrefix) -> SchemaKind {
        match prefix {
            EntityPrefix::Msr => SchemaKind::Profile,
            EntityPrefix::Lni => SchemaKind::LineItem,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            SchemaKind::Catalog => "catalog",
            SchemaKind::Profile => "measurement profile",
            SchemaKind::LineItem => "cart line item",
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Registry of JSON schemas for workspace file validation
pub struct SchemaRegistry {
    schemas: HashMap<SchemaKind, String>,
}

impl SchemaRegistry {
    /// Create a new schema registry with embedded schemas
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        for kind in SchemaKind::all() {
            if let Some(file) = EmbeddedSchemas::get(kind.filename()) {
                if let Ok(content) = std::str::from_utf8(&file.data) {
                    schemas.insert(*kind, content.to_string());
                }
            }
        }

        Self { schemas }
    }

    /// Get the JSON schema for a file kind
    pub fn get(&self, kind: SchemaKind) -> Option<&str> {
        self.schemas.get(&kind).map(|s| s.as_str())
    }

    /// Check if a schema exists for the given kind
    pub fn has_schema(&self, kind: SchemaKind) -> bool {
        self.schemas.contains_key(&kind)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_an_embedded_schema() {
        let registry = SchemaRegistry::new();
        for kind in SchemaKind::all() {
            assert!(registry.has_schema(*kind), "missing schema for {}", kind);
            let schema = registry.get(*kind).unwrap();
            serde_json::from_str::<serde_json::Value>(schema).unwrap();
        }
    }

    #[test]
    fn test_prefix_maps_to_schema_kind() {
        assert_eq!(
            SchemaKind::for_prefix(EntityPrefix::Msr),
            SchemaKind::Profile
        );
        assert_eq!(
            SchemaKind::for_prefix(EntityPrefix::Lni),
            SchemaKind::LineItem
        );
    }
}
