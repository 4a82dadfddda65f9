//! Records built during a pass.
//!
//! [`TypeRecord`]s live in a [`TypeArena`] and refer to each other through
//! [`TypeId`] handles; [`EnumRecord`]s are shared through [`EnumId`] handles
//! into the [`EnumCache`]. Nothing is removed before the pass ends.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use scribe_config::{ScribeOptions, Visibility};

use crate::symbols::{Location, TypeKind, TypeSymbol};

/// Handle to a [`TypeRecord`] in a [`TypeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(usize);

impl TypeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to an [`EnumRecord`] in an [`EnumCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnumId(usize);

impl EnumId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Serializers whose ignore attribute can be placed above derived accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Serializer {
    NewtonsoftJson,
    SystemTextJson,
}

impl Serializer {
    pub const ALL: [Serializer; 2] = [Serializer::NewtonsoftJson, Serializer::SystemTextJson];

    /// Fully-qualified name of the attribute type.
    pub fn attribute_type(self) -> &'static str {
        match self {
            Serializer::NewtonsoftJson => "Newtonsoft.Json.JsonIgnoreAttribute",
            Serializer::SystemTextJson => "System.Text.Json.Serialization.JsonIgnoreAttribute",
        }
    }

    /// Attribute usage as written above a member.
    pub fn attribute_usage(self) -> &'static str {
        match self {
            Serializer::NewtonsoftJson => "[global::Newtonsoft.Json.JsonIgnore]",
            Serializer::SystemTextJson => "[global::System.Text.Json.Serialization.JsonIgnore]",
        }
    }
}

/// Independent serialization-exclusion toggles of a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializationToggles {
    pub newtonsoft_json: bool,
    pub system_text_json: bool,
}

impl SerializationToggles {
    pub fn is_enabled(self, serializer: Serializer) -> bool {
        match serializer {
            Serializer::NewtonsoftJson => self.newtonsoft_json,
            Serializer::SystemTextJson => self.system_text_json,
        }
    }

    pub fn enabled(self) -> impl Iterator<Item = Serializer> {
        Serializer::ALL.into_iter().filter(move |s| self.is_enabled(*s))
    }
}

/// A caller-declared stub chosen as the synthesis target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubHandle {
    /// Index of the stub in the owning type symbol's member list.
    pub member_index: usize,
    pub visibility: Visibility,
    pub is_static: bool,
    pub returns_optional: bool,
}

/// How a selected member is synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisTarget {
    /// A new read-only accessor.
    NewAccessor,
    /// An implementation for an existing stub.
    ImplementStub(StubHandle),
}

/// One member selected for synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub name: String,
    /// `name` followed by the configured suffix.
    pub target_name: String,
    pub visibility: Visibility,
    pub is_optional: bool,
    pub is_static: bool,
    pub target: SynthesisTarget,
    pub enum_id: EnumId,
}

impl MemberRecord {
    /// Visibility of the emitted declaration.
    pub fn declared_visibility(&self) -> Visibility {
        match self.target {
            SynthesisTarget::NewAccessor => self.visibility,
            SynthesisTarget::ImplementStub(stub) => stub.visibility,
        }
    }

    pub fn declared_static(&self) -> bool {
        match self.target {
            SynthesisTarget::NewAccessor => self.is_static,
            SynthesisTarget::ImplementStub(stub) => stub.is_static,
        }
    }

    /// Whether the emitted declaration returns `string?`.
    pub fn returns_optional(&self) -> bool {
        match self.target {
            SynthesisTarget::NewAccessor => self.is_optional,
            SynthesisTarget::ImplementStub(stub) => stub.returns_optional,
        }
    }

    pub fn is_stub(&self) -> bool {
        matches!(self.target, SynthesisTarget::ImplementStub(_))
    }
}

/// One type participating in synthesis, configured or discovered as an ancestor.
#[derive(Debug, Clone)]
pub struct TypeRecord {
    pub qualified_name: String,
    pub name: String,
    pub generic_signature: String,
    pub namespace: Option<String>,
    pub kind: TypeKind,
    pub fragmentable: bool,
    pub parent: Option<TypeId>,
    pub children: Vec<TypeId>,
    pub members: Vec<MemberRecord>,
    /// Resolved options; `None` for types only seen as ancestors.
    pub options: Option<ScribeOptions>,
    pub serialization: SerializationToggles,
    pub should_synthesize: bool,
    pub location: Option<Location>,
}

impl TypeRecord {
    pub fn from_symbol(symbol: &TypeSymbol) -> Self {
        Self {
            qualified_name: symbol.qualified_name(),
            name: symbol.name.clone(),
            generic_signature: symbol.generic_signature(),
            namespace: symbol.namespace.clone(),
            kind: symbol.kind,
            fragmentable: symbol.partial,
            parent: None,
            children: Vec::new(),
            members: Vec::new(),
            options: None,
            serialization: SerializationToggles::default(),
            should_synthesize: false,
            location: symbol.location.clone(),
        }
    }

    /// Declaration header without modifiers, e.g. `class Box<T>`.
    pub fn declaration(&self) -> String {
        format!("{} {}{}", self.kind.keyword(), self.name, self.generic_signature)
    }
}

/// Storage for every [`TypeRecord`] of a pass, in discovery order.
#[derive(Debug, Default)]
pub struct TypeArena {
    records: Vec<TypeRecord>,
    index: FxHashMap<String, TypeId>,
}

impl TypeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. A record with the same qualified name must not exist.
    pub fn insert(&mut self, record: TypeRecord) -> TypeId {
        let id = TypeId(self.records.len());
        debug_assert!(!self.index.contains_key(&record.qualified_name));
        self.index.insert(record.qualified_name.clone(), id);
        self.records.push(record);
        id
    }

    pub fn lookup(&self, qualified_name: &str) -> Option<TypeId> {
        self.index.get(qualified_name).copied()
    }

    pub fn get(&self, id: TypeId) -> &TypeRecord {
        &self.records[id.0]
    }

    pub fn get_mut(&mut self, id: TypeId) -> &mut TypeRecord {
        &mut self.records[id.0]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeRecord)> {
        self.records.iter().enumerate().map(|(idx, record)| (TypeId(idx), record))
    }

    /// Records without a parent, in discovery order.
    pub fn roots(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.iter().filter(|(_, r)| r.parent.is_none()).map(|(id, _)| id)
    }

    /// Set `child`'s parent and append it to the parent's children once.
    pub fn link(&mut self, parent: TypeId, child: TypeId) {
        self.records[child.0].parent = Some(parent);
        let children = &mut self.records[parent.0].children;
        if !children.contains(&child) {
            children.push(child);
        }
    }

    /// A record is usable when it and every ancestor are fragmentable.
    pub fn is_usable(&self, id: TypeId) -> bool {
        let mut current = Some(id);
        while let Some(id) = current {
            let record = self.get(id);
            if !record.fragmentable {
                return false;
            }
            current = record.parent;
        }
        true
    }

    /// Whether a fragment must be emitted for `id`: it is fragmentable and it,
    /// or a descendant reachable through fragmentable types, synthesizes.
    pub fn needs_fragment(&self, id: TypeId) -> bool {
        let record = self.get(id);
        record.fragmentable
            && (record.should_synthesize || record.children.iter().any(|&c| self.needs_fragment(c)))
    }

    pub fn any_synthesizing(&self) -> bool {
        self.records.iter().any(|r| r.should_synthesize)
    }
}

/// One distinct enumeration and its ordered descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumRecord {
    pub full_name: String,
    pub in_global_namespace: bool,
    /// (variant, description) in declaration order.
    pub variants: Vec<(String, String)>,
}

impl EnumRecord {
    /// Name used in emitted code.
    pub fn output_name(&self) -> String {
        if self.in_global_namespace {
            format!("global::{}", self.full_name)
        } else {
            self.full_name.clone()
        }
    }
}

/// Descriptor records keyed by enumeration name, in first-reference order.
#[derive(Debug, Default)]
pub struct EnumCache {
    records: IndexMap<String, EnumRecord>,
}

impl EnumCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, full_name: &str) -> Option<EnumId> {
        self.records.get_index_of(full_name).map(EnumId)
    }

    /// Add a record, keeping the existing one if the name is already cached.
    pub fn insert(&mut self, record: EnumRecord) -> EnumId {
        let entry = self.records.entry(record.full_name.clone());
        let idx = entry.index();
        entry.or_insert(record);
        EnumId(idx)
    }

    pub fn get(&self, id: EnumId) -> Option<&EnumRecord> {
        self.records.get_index(id.0).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnumRecord> {
        self.records.values()
    }
}
