//! Host type descriptors.
//!
//! A `TypeDef` describes one type of the host type system: its optional
//! declared name, its structural kind, and whether it controls its own
//! serialization. Definitions live in a [`TypeGraph`](crate::TypeGraph) and
//! are referred to by [`TypeId`] handles.

use std::fmt;

use serde::Deserialize;

use crate::StructTag;

/// A lightweight handle to a type stored in a [`TypeGraph`](crate::TypeGraph).
///
/// Two handles from the same graph compare equal iff they denote the same
/// host type, which makes `TypeId` suitable as a map key for dedup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    /// Raw index for debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declared name of a host type.
///
/// Identity of a named type is its package plus its name; the package is
/// not part of the emitted declaration.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeName {
    package: Option<String>,
    name: String,
}

impl TypeName {
    /// A name without a package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            package: None,
            name: name.into(),
        }
    }

    /// A name qualified by the package that declares it.
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            name: name.into(),
        }
    }

    /// Parse a `package.Name` key. The package is everything before the last dot.
    pub fn from_key(key: &str) -> Self {
        match key.rsplit_once('.') {
            Some((package, name)) if !package.is_empty() && !name.is_empty() => {
                Self::qualified(package, name)
            }
            _ => Self::new(key),
        }
    }

    /// The well-known timestamp type, serialized as a string by default.
    pub fn timestamp() -> Self {
        Self::qualified("time", "Time")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.package {
            Some(package) => write!(f, "{}.{}", package, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Primitive kinds of the host type system.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Primitive {
    Bool,
    String,
    /// Pointer-sized signed integer.
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    /// Pointer-sized unsigned integer.
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Float32,
    Float64,
}

impl Primitive {
    pub const ALL: [Primitive; 16] = [
        Self::Bool,
        Self::String,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Int128,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uint128,
        Self::Float32,
        Self::Float64,
    ];

    /// Look up a primitive by its Go or Rust spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        let p = match name {
            "bool" => Self::Bool,
            "string" | "String" | "str" | "char" => Self::String,
            "int" | "isize" => Self::Int,
            "int8" | "i8" => Self::Int8,
            "int16" | "i16" => Self::Int16,
            "int32" | "rune" | "i32" => Self::Int32,
            "int64" | "i64" => Self::Int64,
            "int128" | "i128" => Self::Int128,
            "uint" | "usize" | "uintptr" => Self::Uint,
            "uint8" | "byte" | "u8" => Self::Uint8,
            "uint16" | "u16" => Self::Uint16,
            "uint32" | "u32" => Self::Uint32,
            "uint64" | "u64" => Self::Uint64,
            "uint128" | "u128" => Self::Uint128,
            "float32" | "f32" => Self::Float32,
            "float64" | "f64" => Self::Float64,
            _ => return None,
        };
        Some(p)
    }

    /// Canonical host spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "string",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int128 => "int128",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uint128 => "uint128",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }
}

/// Custom serialization capability of a type.
///
/// A type carrying a marshaler decides its own wire form, so its structure
/// may not reflect what is actually serialized.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marshaler {
    /// Self-describing JSON serialization.
    Json,
    /// Serialization through a textual form.
    Text,
}

impl Marshaler {
    /// Host-side name of the capability.
    pub fn interface_name(self) -> &'static str {
        match self {
            Self::Json => "json.Marshaler",
            Self::Text => "encoding.TextMarshaler",
        }
    }
}

/// A struct field in declaration order.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Field {
    name: String,
    ty: TypeId,
    tag: StructTag,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            tag: StructTag::default(),
        }
    }

    /// Attach a raw struct tag, e.g. `json:"nickname,omitempty"`.
    pub fn with_tag(mut self, tag: impl Into<StructTag>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> TypeId {
        self.ty
    }

    pub fn tag(&self) -> &StructTag {
        &self.tag
    }
}

/// Structural kind of a type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    Primitive(Primitive),
    Struct(Vec<Field>),
    /// Variable-length sequence.
    Slice(TypeId),
    /// Fixed-length sequence.
    Array { elem: TypeId, len: usize },
    Map { key: TypeId, value: TypeId },
    /// Nullable reference.
    Pointer(TypeId),
    /// Anything without a structural rule (interfaces, functions, channels).
    Opaque,
}

/// Full description of one host type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeDef {
    pub(crate) name: Option<TypeName>,
    pub(crate) kind: TypeKind,
    pub(crate) marshaler: Option<Marshaler>,
}

impl TypeDef {
    pub(crate) fn anonymous(kind: TypeKind) -> Self {
        Self {
            name: None,
            kind,
            marshaler: None,
        }
    }

    pub(crate) fn declared(name: TypeName) -> Self {
        Self {
            name: Some(name),
            kind: TypeKind::Opaque,
            marshaler: None,
        }
    }

    pub fn name(&self) -> Option<&TypeName> {
        self.name.as_ref()
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn marshaler(&self) -> Option<Marshaler> {
        self.marshaler
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}
