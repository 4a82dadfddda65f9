//! Symbol model consumed by the synthesis pass.
//!
//! The host compiler owns introspection; scribe only sees the declarations it
//! is handed through [`SymbolSource`]. Types, members and enumerations are
//! plain data so that a host can build them directly or load them from a
//! manifest (see [`SymbolTable`]).

mod table;
mod type_ref;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use scribe_config::{ScribeConfig, Visibility};
pub use table::{Manifest, SymbolTable};
pub use type_ref::TypeRef;

/// Source position of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    #[serde(default = "first_column")]
    pub column: u32,
}

fn first_column() -> u32 {
    1
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Structural kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Class,
    Record,
    Struct,
    RecordStruct,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Record => "record",
            TypeKind::Struct => "struct",
            TypeKind::RecordStruct => "record struct",
        }
    }
}

/// A class, record or struct declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSymbol {
    /// Simple name without generic parameters.
    pub name: String,
    /// Containing namespace; `None` for the global namespace.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Qualified name of the enclosing type, if nested.
    #[serde(default)]
    pub containing_type: Option<String>,
    pub kind: TypeKind,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Whether the declaration can be extended by another fragment.
    #[serde(default)]
    pub partial: bool,
    #[serde(default)]
    pub members: Vec<MemberSymbol>,
    /// Present when the type is configured for synthesis.
    #[serde(default)]
    pub scribe: Option<ScribeConfig>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl TypeSymbol {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            containing_type: None,
            kind,
            type_parameters: Vec::new(),
            partial: true,
            members: Vec::new(),
            scribe: None,
            location: None,
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn nested_in(mut self, containing_type: impl Into<String>) -> Self {
        self.containing_type = Some(containing_type.into());
        self
    }

    pub fn with_type_parameters<I, T>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.type_parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    pub fn with_member(mut self, member: MemberSymbol) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_scribe(mut self, config: ScribeConfig) -> Self {
        self.scribe = Some(config);
        self
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Generic parameter list as written in a declaration, e.g. `<TKey, TValue>`.
    pub fn generic_signature(&self) -> String {
        if self.type_parameters.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.type_parameters.join(", "))
        }
    }

    /// Name that uniquely identifies this type: namespace, enclosing types,
    /// simple name and generic signature.
    pub fn qualified_name(&self) -> String {
        let local = format!("{}{}", self.name, self.generic_signature());
        match (&self.containing_type, &self.namespace) {
            (Some(parent), _) => format!("{parent}.{local}"),
            (None, Some(namespace)) => format!("{namespace}.{local}"),
            (None, None) => local,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.scribe.is_some()
    }
}

/// Member kind plus the shape data needed for stub matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MemberKind {
    Property,
    Field {
        /// Compiler-synthesized storage such as a property backing field.
        #[serde(default)]
        implicit: bool,
    },
    Method {
        #[serde(default)]
        parameter_count: usize,
        #[serde(default)]
        is_generic: bool,
        /// Declared with `partial` and no body.
        #[serde(default)]
        is_partial_definition: bool,
        /// A separate implementing declaration already exists.
        #[serde(default)]
        has_implementation: bool,
    },
    /// Events, indexers, nested type names and anything else that occupies a name.
    Other,
}

/// A member declared on a [`TypeSymbol`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSymbol {
    pub name: String,
    #[serde(flatten)]
    pub kind: MemberKind,
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    /// Declared type; the return type for methods.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Carries the per-member exclude marker.
    #[serde(default)]
    pub exclude: bool,
    #[serde(default)]
    pub location: Option<Location>,
}

impl MemberSymbol {
    pub fn new(name: impl Into<String>, kind: MemberKind, visibility: Visibility, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility,
            is_static: false,
            ty,
            exclude: false,
            location: None,
        }
    }

    pub fn property(name: impl Into<String>, visibility: Visibility, ty: TypeRef) -> Self {
        Self::new(name, MemberKind::Property, visibility, ty)
    }

    pub fn field(name: impl Into<String>, visibility: Visibility, ty: TypeRef) -> Self {
        Self::new(name, MemberKind::Field { implicit: false }, visibility, ty)
    }

    /// An unfinished zero-parameter partial method.
    pub fn stub(name: impl Into<String>, visibility: Visibility, returns: TypeRef) -> Self {
        Self::new(
            name,
            MemberKind::Method {
                parameter_count: 0,
                is_generic: false,
                is_partial_definition: true,
                has_implementation: false,
            },
            visibility,
            returns,
        )
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// An unfinished stub that could be implemented with a description body:
    /// partial definition, no implementation, no parameters, not generic,
    /// returning `string` or `string?`.
    pub fn is_description_stub(&self) -> bool {
        matches!(
            self.kind,
            MemberKind::Method {
                parameter_count: 0,
                is_generic: false,
                is_partial_definition: true,
                has_implementation: false,
            }
        ) && self.ty.unwrap_optional() == &TypeRef::String
    }
}

/// An enumeration declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumSymbol {
    pub name: String,
    /// Namespace of the enumeration, also when it is nested in a type.
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub containing_type: Option<String>,
    #[serde(default)]
    pub variants: Vec<VariantSymbol>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl EnumSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            containing_type: None,
            variants: Vec::new(),
            location: None,
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn nested_in(mut self, containing_type: impl Into<String>) -> Self {
        self.containing_type = Some(containing_type.into());
        self
    }

    pub fn with_variant(mut self, variant: VariantSymbol) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn full_name(&self) -> String {
        match (&self.containing_type, &self.namespace) {
            (Some(parent), _) => format!("{parent}.{}", self.name),
            (None, Some(namespace)) => format!("{namespace}.{}", self.name),
            (None, None) => self.name.clone(),
        }
    }

    pub fn in_global_namespace(&self) -> bool {
        self.namespace.is_none()
    }
}

/// Why a description annotation yields no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MalformedDescription {
    /// Annotation applied without an argument.
    MissingArgument,
    /// Argument is the null literal.
    NullArgument,
    /// Argument is not a string constant.
    NonTextArgument,
}

/// The description annotation of a variant, as seen by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation<'a> {
    Absent,
    Text(&'a str),
    Malformed(MalformedDescription),
}

/// One enumeration variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSymbol {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub malformed: Option<MalformedDescription>,
}

impl VariantSymbol {
    /// Variant without a description annotation.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            malformed: None,
        }
    }

    pub fn described(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::bare(name)
        }
    }

    pub fn malformed(name: impl Into<String>, malformed: MalformedDescription) -> Self {
        Self {
            malformed: Some(malformed),
            ..Self::bare(name)
        }
    }

    pub fn annotation(&self) -> Annotation<'_> {
        match (&self.malformed, &self.description) {
            (Some(malformed), _) => Annotation::Malformed(*malformed),
            (None, Some(text)) => Annotation::Text(text),
            (None, None) => Annotation::Absent,
        }
    }
}

/// Read access to the host's symbols.
///
/// Iteration order is discovery order and must be stable for a given input;
/// emitted artifacts follow it.
pub trait SymbolSource {
    /// All type declarations known to the host.
    fn types(&self) -> Box<dyn Iterator<Item = &TypeSymbol> + '_>;

    /// Type declarations carrying a configuration, in discovery order.
    fn configured_types(&self) -> Box<dyn Iterator<Item = &TypeSymbol> + '_> {
        Box::new(self.types().filter(|ty| ty.is_configured()))
    }

    fn type_symbol(&self, qualified_name: &str) -> Option<&TypeSymbol>;

    fn enum_symbol(&self, full_name: &str) -> Option<&EnumSymbol>;

    /// Whether a type (for example a serializer attribute) can be referenced by emitted code.
    fn is_type_available(&self, full_name: &str) -> bool;

    /// Resolve a member type to its enumeration, unwrapping one optional layer.
    fn enum_for(&self, ty: &TypeRef) -> Option<&EnumSymbol> {
        match ty.unwrap_optional() {
            TypeRef::Named(name) => self.enum_symbol(name),
            _ => None,
        }
    }
}
