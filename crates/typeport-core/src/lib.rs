#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for typeport host type descriptors.
//!
//! Two ways to build a graph:
//! - **Reflection** (`Describe`): Rust types describe themselves
//! - **Schema** (`Schema`): a JSON document describes the graph
//!
//! Both produce a [`TypeGraph`] whose [`TypeId`] handles are what the
//! declaration compiler walks.

mod describe;
mod graph;
mod interner;
mod invariants;
pub mod schema;
mod tag;
mod types;

#[cfg(test)]
mod interner_tests;
#[cfg(test)]
mod tag_tests;

pub use describe::Describe;
pub use graph::TypeGraph;
pub use interner::TypeInterner;
pub use schema::{Schema, SchemaError};
pub use tag::StructTag;
pub use types::{Field, Marshaler, Primitive, TypeDef, TypeId, TypeKind, TypeName};
