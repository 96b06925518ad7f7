//! Schema files: type graphs described as JSON.
//!
//! See [`expr`] for the type expression syntax used in references.

pub mod expr;
mod json;

#[cfg(test)]
mod expr_tests;

use crate::{TypeGraph, TypeId};

pub use expr::{ExprError, TypeExpr, parse_type_expr};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("type `{0}` is declared more than once")]
    DuplicateType(String),

    #[error("type `{0}` is defined in terms of itself")]
    CyclicDefinition(String),

    #[error("invalid type expression `{expr}`: {source}")]
    InvalidExpr {
        expr: String,
        #[source]
        source: ExprError,
    },
}

/// A loaded schema: the type graph plus the root and overrides it names.
#[derive(Debug, Clone)]
pub struct Schema {
    graph: TypeGraph,
    root: Option<TypeId>,
    overrides: Vec<(TypeId, String)>,
}

impl Schema {
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        let raw: json::RawSchema = serde_json::from_str(source)?;
        json::Loader::load(&raw)
    }

    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    /// Root named by the document, if any.
    pub fn root(&self) -> Option<TypeId> {
        self.root
    }

    /// Overrides in document order.
    pub fn overrides(&self) -> &[(TypeId, String)] {
        &self.overrides
    }

    /// Resolve a type expression against the loaded graph.
    ///
    /// Composite expressions such as `[]models.User` are added to the graph
    /// if not already present.
    pub fn resolve(&mut self, expr: &str) -> Result<TypeId, SchemaError> {
        let parsed = parse_type_expr(expr).map_err(|source| SchemaError::InvalidExpr {
            expr: expr.to_string(),
            source,
        })?;
        json::resolve_parsed(&mut self.graph, &parsed)
    }
}
