use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScribeError;

/// A reference to a declared type.
///
/// Written compactly in manifests: `string`, `Acme.StockLevel`, and a trailing
/// `?` for an optional wrapper (`Acme.StockLevel?`, `string?`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    String,
    Named(String),
    Optional(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn optional(inner: TypeRef) -> Self {
        TypeRef::Optional(Box::new(inner))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeRef::Optional(_))
    }

    /// The wrapped type for an optional, otherwise `self`.
    pub fn unwrap_optional(&self) -> &TypeRef {
        match self {
            TypeRef::Optional(inner) => inner,
            other => other,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::String => f.write_str("string"),
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::Optional(inner) => write!(f, "{inner}?"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s.strip_suffix('?') {
            let inner: TypeRef = inner.parse()?;
            if inner.is_optional() {
                return Err(ScribeError::invalid_type_ref(s, "optional types cannot be nested"));
            }
            return Ok(TypeRef::optional(inner));
        }

        match s {
            "" => Err(ScribeError::invalid_type_ref(s, "type name is empty")),
            "string" | "String" | "System.String" => Ok(TypeRef::String),
            name => Ok(TypeRef::Named(name.to_string())),
        }
    }
}

impl TryFrom<String> for TypeRef {
    type Error = ScribeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}
