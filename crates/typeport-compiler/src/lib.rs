//! typeport compiler: host type graphs to TypeScript declarations.
//!
//! - `typegen` - type resolution and declaration assembly
//! - `diagnostics` - advisory warnings collected during generation

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod typegen;

/// Result type for passes that produce both output and diagnostics.
///
/// Each pass returns its output alongside any diagnostics it collected.
/// Fatal errors use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};

/// Errors that can occur during declaration generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The root has no declared name and none was configured.
    #[error("root type `{0}` has no name; set a root name to label its declaration")]
    AnonymousRoot(String),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
