//! TypeScript declarations from a host type graph.
//!
//! Named types reachable from the root each get one `export type`
//! declaration; anonymous types are inlined where they are used.

mod config;
mod emitter;
mod fields;
mod primitives;
mod resolver;

#[cfg(test)]
mod resolver_tests;

pub use config::{Config, Overrides};
pub use emitter::Emitter;
pub use resolver::Resolved;

use typeport_core::{TypeGraph, TypeId};

use crate::{Diagnostics, PassResult};
use resolver::Resolver;

/// Emit TypeScript declarations for `root` and every named type it reaches.
pub fn emit(graph: &TypeGraph, root: TypeId) -> PassResult<String> {
    Emitter::new(graph, Config::default()).emit(root)
}

/// Emit TypeScript declarations with custom config.
pub fn emit_with_config(graph: &TypeGraph, root: TypeId, config: Config) -> PassResult<String> {
    Emitter::new(graph, config).emit(root)
}

/// Inline text for `ty` as it would appear at a use site.
///
/// Named types come back as references and are listed in
/// [`Resolved::discovered`]; nothing is declared.
pub fn inline(graph: &TypeGraph, ty: TypeId, config: &Config) -> (Resolved, Diagnostics) {
    let mut resolver = Resolver::new(graph, config);
    let resolved = resolver.resolve(ty, false);
    (resolved, resolver.into_diagnostics())
}
