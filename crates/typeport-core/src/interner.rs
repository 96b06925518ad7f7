//! Type interning for descriptor deduplication and comparison.
//!
//! Converts `TypeDef` values into cheap integer handles (`TypeId`).
//! Structurally equal anonymous definitions share one handle, so comparing
//! two descriptors is an O(1) integer comparison.

use std::collections::HashMap;

use crate::{TypeDef, TypeId};

/// Type interner. Deduplicates anonymous definitions and returns `TypeId` handles.
///
/// Named definitions are stored with [`TypeInterner::push`] and never take
/// part in structural dedup: their identity is their name, and their body
/// may be filled in after the handle is handed out.
#[derive(Debug, Clone, Default)]
pub struct TypeInterner {
    /// Map from anonymous definition to handle for deduplication.
    map: HashMap<TypeDef, TypeId>,
    /// Storage for all definitions, indexed by `TypeId`.
    defs: Vec<TypeDef>,
}

impl TypeInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a definition, returning its handle.
    /// If an equal definition was already interned, returns the existing handle.
    pub fn intern_owned(&mut self, def: TypeDef) -> TypeId {
        if let Some(&id) = self.map.get(&def) {
            return id;
        }

        let id = self.next_id();
        self.defs.push(def.clone());
        self.map.insert(def, id);
        id
    }

    /// Store a definition under a fresh handle without deduplication.
    pub fn push(&mut self, def: TypeDef) -> TypeId {
        let id = self.next_id();
        self.defs.push(def);
        id
    }

    /// Try to resolve a handle, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, id: TypeId) -> Option<&TypeDef> {
        self.defs.get(id.0 as usize)
    }

    /// Mutable access for definitions stored with [`TypeInterner::push`].
    pub(crate) fn resolve_pushed_mut(&mut self, id: TypeId) -> Option<&mut TypeDef> {
        let def = self.defs.get(id.0 as usize)?;
        if self.map.get(def) == Some(&id) {
            return None;
        }
        self.defs.get_mut(id.0 as usize)
    }

    /// Number of stored definitions.
    #[inline]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the interner is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate over all definitions with their handles.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, def)| (TypeId(i as u32), def))
    }

    fn next_id(&self) -> TypeId {
        TypeId(self.defs.len() as u32)
    }
}
