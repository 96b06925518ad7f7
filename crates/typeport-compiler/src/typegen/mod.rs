//! Type declaration generation from host type graphs.
//!
//! Walks a [`TypeGraph`](typeport_core::TypeGraph) from a root type and
//! generates declarations for a target language. Currently supports
//! TypeScript.
//!
//! # Example
//!
//! ```
//! use typeport_compiler::typegen::typescript;
//! use typeport_core::{Primitive, TypeGraph};
//!
//! let mut graph = TypeGraph::new();
//! let string = graph.primitive(Primitive::String);
//! let int = graph.primitive(Primitive::Int);
//! let counts = graph.map(string, int);
//!
//! let config = typescript::Config::new().root_name("Counts");
//! let (output, _) = typescript::emit_with_config(&graph, counts, config).unwrap();
//! assert_eq!(output, "export type Counts = Record<string, number>;\n");
//! ```

pub mod typescript;
