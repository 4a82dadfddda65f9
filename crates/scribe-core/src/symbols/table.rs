//! In-memory [`SymbolSource`] backed by a JSON manifest.

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EnumSymbol, SymbolSource, TypeSymbol};
use crate::error::{Result, ScribeError};

/// Serialized form of a [`SymbolTable`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeSymbol>,
    #[serde(default)]
    pub enums: Vec<EnumSymbol>,
    /// Fully-qualified names of types the emitted code may reference.
    #[serde(default)]
    pub available_types: Vec<String>,
}

/// Symbols indexed by qualified name, iterated in insertion order.
///
/// # Example
///
/// ```
/// use scribe_core::symbols::{SymbolSource, SymbolTable};
///
/// let table = SymbolTable::from_json(r#"{
///     "types": [{ "name": "Inventory", "kind": "class", "partial": true, "scribe": {} }],
///     "enums": [{ "name": "StockLevel", "variants": [{ "name": "Low" }] }]
/// }"#).unwrap();
///
/// assert_eq!(table.configured_types().count(), 1);
/// assert!(table.enum_symbol("StockLevel").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    types: Vec<TypeSymbol>,
    enums: Vec<EnumSymbol>,
    type_index: FxHashMap<String, usize>,
    enum_index: FxHashMap<String, usize>,
    available: FxHashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a manifest, checking names and nesting.
    pub fn from_manifest(manifest: Manifest) -> Result<Self> {
        let mut table = Self::new();
        for ty in manifest.types {
            table.insert_type(ty)?;
        }
        for symbol in manifest.enums {
            table.insert_enum(symbol)?;
        }
        for name in manifest.available_types {
            table.mark_available(name);
        }
        table.check_nesting()?;
        debug!(
            types = table.types.len(),
            enums = table.enums.len(),
            "Loaded symbol table"
        );
        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn insert_type(&mut self, ty: TypeSymbol) -> Result<()> {
        let name = ty.qualified_name();
        if self.type_index.contains_key(&name) {
            return Err(ScribeError::duplicate("type", name));
        }
        self.type_index.insert(name, self.types.len());
        self.types.push(ty);
        Ok(())
    }

    pub fn insert_enum(&mut self, symbol: EnumSymbol) -> Result<()> {
        let name = symbol.full_name();
        if self.enum_index.contains_key(&name) {
            return Err(ScribeError::duplicate("enum", name));
        }
        self.enum_index.insert(name, self.enums.len());
        self.enums.push(symbol);
        Ok(())
    }

    pub fn mark_available(&mut self, full_name: impl Into<String>) {
        self.available.insert(full_name.into());
    }

    /// Builder-style [`SymbolTable::insert_type`].
    pub fn with_type(mut self, ty: TypeSymbol) -> Result<Self> {
        self.insert_type(ty)?;
        Ok(self)
    }

    /// Builder-style [`SymbolTable::insert_enum`].
    pub fn with_enum(mut self, symbol: EnumSymbol) -> Result<Self> {
        self.insert_enum(symbol)?;
        Ok(self)
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumSymbol> {
        self.enums.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Every nested declaration must name a known enclosing type.
    pub fn check_nesting(&self) -> Result<()> {
        let nested_types = self
            .types
            .iter()
            .filter_map(|ty| ty.containing_type.as_ref().map(|parent| (ty.qualified_name(), parent)));
        let nested_enums = self
            .enums
            .iter()
            .filter_map(|e| e.containing_type.as_ref().map(|parent| (e.full_name(), parent)));

        for (name, parent) in nested_types.chain(nested_enums) {
            if !self.type_index.contains_key(parent) {
                return Err(ScribeError::UnknownContainingType {
                    name,
                    containing_type: parent.clone(),
                });
            }
        }
        Ok(())
    }
}

impl SymbolSource for SymbolTable {
    fn types(&self) -> Box<dyn Iterator<Item = &TypeSymbol> + '_> {
        Box::new(self.types.iter())
    }

    fn type_symbol(&self, qualified_name: &str) -> Option<&TypeSymbol> {
        self.type_index.get(qualified_name).map(|&idx| &self.types[idx])
    }

    fn enum_symbol(&self, full_name: &str) -> Option<&EnumSymbol> {
        self.enum_index.get(full_name).map(|&idx| &self.enums[idx])
    }

    fn is_type_available(&self, full_name: &str) -> bool {
        self.available.contains(full_name)
    }
}
