//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{TypeDef, TypeGraph, TypeId};

impl TypeGraph {
    /// Definition behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was not minted by this graph.
    pub fn def(&self, id: TypeId) -> &TypeDef {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "TypeGraph: type {id} not found \
                 (handles must come from the graph they are used with)"
            )
        })
    }
}
