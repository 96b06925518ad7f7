//! Primitive token table.

use typeport_core::{Primitive, TypeDef, TypeKind};

/// Output token for a host primitive.
pub(crate) fn primitive_token(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Bool => "boolean",
        Primitive::String => "string",
        Primitive::Int
        | Primitive::Int8
        | Primitive::Int16
        | Primitive::Int32
        | Primitive::Int64
        | Primitive::Int128
        | Primitive::Uint
        | Primitive::Uint8
        | Primitive::Uint16
        | Primitive::Uint32
        | Primitive::Uint64
        | Primitive::Uint128
        | Primitive::Float32
        | Primitive::Float64 => "number",
    }
}

/// Token for a type that is exactly a host primitive.
///
/// Named types whose underlying kind is primitive do not match: they are
/// referenced by name and declared on their own.
pub(crate) fn exact_primitive(def: &TypeDef) -> Option<&'static str> {
    match def.kind() {
        TypeKind::Primitive(p) if !def.is_named() => Some(primitive_token(*p)),
        _ => None,
    }
}
