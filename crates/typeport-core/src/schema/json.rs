//! JSON deserialization for schema files.
//!
//! Two layers:
//! - **Raw layer**: 1:1 mapping to the JSON document
//! - **Graph layer**: named types declared first, then defined, so forward
//!   and self references resolve

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

use super::expr::{TypeExpr, parse_type_expr};
use super::{Schema, SchemaError};
use crate::{Field, Marshaler, Primitive, TypeGraph, TypeId, TypeKind, TypeName};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawSchema {
    #[serde(default)]
    root: Option<String>,
    #[serde(default)]
    types: Vec<RawNamedType>,
    #[serde(default)]
    overrides: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNamedType {
    #[serde(default)]
    package: Option<String>,
    name: String,
    #[serde(rename = "type")]
    ty: RawType,
    #[serde(default)]
    marshaler: Option<Marshaler>,
}

/// Type reference: an expression string or an inline definition.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawType {
    Expr(String),
    Inline(RawTypeDef),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RawTypeDef {
    Struct {
        #[serde(default)]
        fields: Vec<RawField>,
    },
    Slice {
        elem: Box<RawType>,
    },
    Array {
        elem: Box<RawType>,
        len: usize,
    },
    Map {
        key: Box<RawType>,
        value: Box<RawType>,
    },
    Pointer {
        elem: Box<RawType>,
    },
    Opaque,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: RawType,
    #[serde(default)]
    tag: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum DefState {
    Pending,
    InProgress,
    Done,
}

/// Lowers a raw schema into a type graph.
pub(super) struct Loader<'r> {
    graph: TypeGraph,
    raw_types: &'r [RawNamedType],
    /// Handle of each entry in `raw_types`
    ids: Vec<TypeId>,
    /// Named type -> index into `raw_types`
    indices: HashMap<TypeId, usize>,
    states: Vec<DefState>,
}

impl<'r> Loader<'r> {
    pub(super) fn load(raw: &'r RawSchema) -> Result<Schema, SchemaError> {
        let mut loader = Loader {
            graph: TypeGraph::new(),
            raw_types: &raw.types,
            ids: Vec::with_capacity(raw.types.len()),
            indices: HashMap::new(),
            states: vec![DefState::Pending; raw.types.len()],
        };

        for (i, named) in raw.types.iter().enumerate() {
            let name = match &named.package {
                Some(package) => TypeName::qualified(package, &named.name),
                None => TypeName::new(&named.name),
            };
            if loader.graph.lookup(&name).is_some() {
                return Err(SchemaError::DuplicateType(name.to_string()));
            }
            let id = loader.graph.declare(name);
            if let Some(marshaler) = named.marshaler {
                loader.graph.set_marshaler(id, marshaler);
            }
            loader.ids.push(id);
            loader.indices.insert(id, i);
        }

        for i in 0..raw.types.len() {
            loader.define(i)?;
        }

        let root = raw
            .root
            .as_deref()
            .map(|expr| loader.resolve_expr(expr))
            .transpose()?;

        let mut overrides = Vec::with_capacity(raw.overrides.len());
        for (expr, text) in &raw.overrides {
            overrides.push((loader.resolve_expr(expr)?, text.clone()));
        }

        Ok(Schema {
            graph: loader.graph,
            root,
            overrides,
        })
    }

    /// Define the named type at `index`, defining any named type its
    /// underlying type is spelled as first.
    fn define(&mut self, index: usize) -> Result<(), SchemaError> {
        let raw_types = self.raw_types;
        let raw = &raw_types[index];
        match self.states[index] {
            DefState::Done => return Ok(()),
            DefState::InProgress => {
                return Err(SchemaError::CyclicDefinition(raw.name.clone()));
            }
            DefState::Pending => {}
        }
        self.states[index] = DefState::InProgress;

        let kind = match &raw.ty {
            RawType::Inline(def) => self.lower(def)?,
            RawType::Expr(expr) => {
                let underlying = self.resolve_expr(expr)?;
                if let Some(&dep) = self.indices.get(&underlying) {
                    self.define(dep)?;
                }
                self.graph.def(underlying).kind().clone()
            }
        };

        self.graph.define(self.ids[index], kind);
        self.states[index] = DefState::Done;
        Ok(())
    }

    fn lower(&mut self, def: &RawTypeDef) -> Result<TypeKind, SchemaError> {
        let kind = match def {
            RawTypeDef::Struct { fields } => {
                let mut lowered = Vec::with_capacity(fields.len());
                for field in fields {
                    let ty = self.resolve(&field.ty)?;
                    lowered.push(Field::new(&field.name, ty).with_tag(field.tag.as_str()));
                }
                TypeKind::Struct(lowered)
            }
            RawTypeDef::Slice { elem } => TypeKind::Slice(self.resolve(elem)?),
            RawTypeDef::Array { elem, len } => TypeKind::Array {
                elem: self.resolve(elem)?,
                len: *len,
            },
            RawTypeDef::Map { key, value } => TypeKind::Map {
                key: self.resolve(key)?,
                value: self.resolve(value)?,
            },
            RawTypeDef::Pointer { elem } => TypeKind::Pointer(self.resolve(elem)?),
            RawTypeDef::Opaque => TypeKind::Opaque,
        };
        Ok(kind)
    }

    fn resolve(&mut self, ty: &RawType) -> Result<TypeId, SchemaError> {
        match ty {
            RawType::Expr(expr) => self.resolve_expr(expr),
            RawType::Inline(def) => {
                let kind = self.lower(def)?;
                Ok(self.graph.anonymous(kind))
            }
        }
    }

    fn resolve_expr(&mut self, expr: &str) -> Result<TypeId, SchemaError> {
        let parsed = parse_type_expr(expr).map_err(|source| SchemaError::InvalidExpr {
            expr: expr.to_string(),
            source,
        })?;
        resolve_parsed(&mut self.graph, &parsed)
    }
}

/// Map a parsed expression onto `graph`. Named types must already be declared.
pub(super) fn resolve_parsed(
    graph: &mut TypeGraph,
    expr: &TypeExpr<'_>,
) -> Result<TypeId, SchemaError> {
    let id = match expr {
        TypeExpr::Pointer(elem) => {
            let elem = resolve_parsed(graph, elem)?;
            graph.pointer(elem)
        }
        TypeExpr::Slice(elem) => {
            let elem = resolve_parsed(graph, elem)?;
            graph.slice(elem)
        }
        TypeExpr::Array(len, elem) => {
            let elem = resolve_parsed(graph, elem)?;
            graph.array(elem, *len)
        }
        TypeExpr::Map(key, value) => {
            let key = resolve_parsed(graph, key)?;
            let value = resolve_parsed(graph, value)?;
            graph.map(key, value)
        }
        TypeExpr::Name("any") => graph.opaque(),
        TypeExpr::Name(name) => match Primitive::from_name(name) {
            Some(primitive) => graph.primitive(primitive),
            None => graph
                .lookup(&TypeName::from_key(name))
                .ok_or_else(|| SchemaError::UnknownType(name.to_string()))?,
        },
    };
    Ok(id)
}
