//! Configuration types for TypeScript emission.

use indexmap::IndexMap;
use typeport_core::{TypeGraph, TypeId, TypeName};

/// Caller-supplied literal text for specific types.
///
/// Entries keep insertion order; setting the same type again replaces the
/// earlier text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides(IndexMap<TypeId, String>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ty: TypeId, text: impl Into<String>) {
        self.0.insert(ty, text.into());
    }

    pub fn get(&self, ty: TypeId) -> Option<&str> {
        self.0.get(&ty).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &str)> {
        self.0.iter().map(|(&ty, text)| (ty, text.as_str()))
    }
}

impl<S: Into<String>> Extend<(TypeId, S)> for Overrides {
    fn extend<I: IntoIterator<Item = (TypeId, S)>>(&mut self, iter: I) {
        for (ty, text) in iter {
            self.insert(ty, text);
        }
    }
}

impl<S: Into<String>> FromIterator<(TypeId, S)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (TypeId, S)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        overrides.extend(iter);
        overrides
    }
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to export types
    pub(crate) export: bool,
    /// Whether to seed overrides for well-known types
    pub(crate) builtin_overrides: bool,
    /// Struct tag key that drives field renaming and optionality
    pub(crate) tag_key: String,
    /// Label for the root declaration
    pub(crate) root_name: Option<String>,
    pub(crate) overrides: Overrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            builtin_overrides: true,
            tag_key: "json".to_string(),
            root_name: None,
            overrides: Overrides::new(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to export types.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set whether `time.Time` is rendered as `string` unless overridden.
    pub fn builtin_overrides(mut self, value: bool) -> Self {
        self.builtin_overrides = value;
        self
    }

    /// Set the struct tag key consulted for field projection.
    pub fn tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_key = key.into();
        self
    }

    /// Set the label of the root declaration.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    /// Render `ty` as `text` wherever it is not referenced by name.
    pub fn override_type(mut self, ty: TypeId, text: impl Into<String>) -> Self {
        self.overrides.insert(ty, text);
        self
    }

    /// Add overrides in order. Later entries replace earlier ones.
    pub fn overrides<S: Into<String>>(
        mut self,
        entries: impl IntoIterator<Item = (TypeId, S)>,
    ) -> Self {
        self.overrides.extend(entries);
        self
    }

    /// Overrides in effect for `graph`: builtins first, caller entries on top.
    pub(crate) fn effective_overrides(&self, graph: &TypeGraph) -> Overrides {
        let mut effective = Overrides::new();
        if self.builtin_overrides
            && let Some(time) = graph.lookup(&TypeName::timestamp())
        {
            effective.insert(time, "string");
        }
        effective.extend(self.overrides.iter());
        effective
    }
}
