//! The type graph: owner of every descriptor reachable from a root.

use std::collections::HashMap;

use crate::{
    Describe, Field, Marshaler, Primitive, TypeDef, TypeId, TypeInterner, TypeKind, TypeName,
};

/// Arena of host type descriptors.
///
/// Anonymous types are structurally interned: building `[]int` twice yields
/// the same [`TypeId`]. Named types are keyed by [`TypeName`] and may be
/// declared before they are defined, which is how self-referential and
/// mutually recursive types are built.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    types: TypeInterner,
    named: HashMap<TypeName, TypeId>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitive(&mut self, primitive: Primitive) -> TypeId {
        self.anonymous(TypeKind::Primitive(primitive))
    }

    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.anonymous(TypeKind::Slice(elem))
    }

    pub fn array(&mut self, elem: TypeId, len: usize) -> TypeId {
        self.anonymous(TypeKind::Array { elem, len })
    }

    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.anonymous(TypeKind::Map { key, value })
    }

    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        self.anonymous(TypeKind::Pointer(elem))
    }

    /// An anonymous struct with the given fields.
    pub fn structure(&mut self, fields: Vec<Field>) -> TypeId {
        self.anonymous(TypeKind::Struct(fields))
    }

    pub fn opaque(&mut self) -> TypeId {
        self.anonymous(TypeKind::Opaque)
    }

    /// Intern an anonymous type of the given kind.
    pub fn anonymous(&mut self, kind: TypeKind) -> TypeId {
        self.types.intern_owned(TypeDef::anonymous(kind))
    }

    /// Reserve a handle for a named type.
    ///
    /// Returns the existing handle if the name is already declared. A fresh
    /// declaration is opaque until [`TypeGraph::define`] gives it a body.
    pub fn declare(&mut self, name: TypeName) -> TypeId {
        if let Some(&id) = self.named.get(&name) {
            return id;
        }
        let id = self.types.push(TypeDef::declared(name.clone()));
        self.named.insert(name, id);
        id
    }

    /// Give a declared type its body, replacing any previous one.
    ///
    /// # Panics
    /// Panics if `id` is not a named type of this graph.
    pub fn define(&mut self, id: TypeId, kind: TypeKind) {
        self.ensure_named_mut(id).kind = kind;
    }

    /// Mark a declared type as controlling its own serialization.
    ///
    /// # Panics
    /// Panics if `id` is not a named type of this graph.
    pub fn set_marshaler(&mut self, id: TypeId, marshaler: Marshaler) {
        self.ensure_named_mut(id).marshaler = Some(marshaler);
    }

    /// Declare and define a named type in one step.
    pub fn named(&mut self, name: TypeName, kind: TypeKind) -> TypeId {
        let id = self.declare(name);
        self.define(id, kind);
        id
    }

    /// Declare a named type and build its body with `build`.
    ///
    /// If the name is already declared, including while its own body is
    /// being built, the existing handle is returned and `build` is not
    /// called. This is what lets `Describe` impls recurse into themselves.
    pub fn named_with(
        &mut self,
        name: TypeName,
        build: impl FnOnce(&mut Self) -> TypeKind,
    ) -> TypeId {
        if let Some(&id) = self.named.get(&name) {
            return id;
        }
        let id = self.declare(name);
        let kind = build(self);
        self.define(id, kind);
        id
    }

    /// The well-known timestamp type `time.Time`.
    pub fn timestamp(&mut self) -> TypeId {
        let name = TypeName::timestamp();
        if let Some(&id) = self.named.get(&name) {
            return id;
        }
        let id = self.named(name, TypeKind::Opaque);
        self.set_marshaler(id, Marshaler::Json);
        id
    }

    /// Descriptor of a Rust type implementing [`Describe`].
    pub fn describe<T: Describe + ?Sized>(&mut self) -> TypeId {
        T::describe(self)
    }

    pub fn lookup(&self, name: &TypeName) -> Option<TypeId> {
        self.named.get(name).copied()
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.try_resolve(id)
    }

    /// Number of stored descriptors.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.types.iter()
    }

    /// Host-side rendering of a type, e.g. `map[string]*models.User`.
    pub fn display(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_display(id, &mut out);
        out
    }

    fn ensure_named_mut(&mut self, id: TypeId) -> &mut TypeDef {
        match self.types.resolve_pushed_mut(id) {
            Some(def) => def,
            None => panic!("TypeGraph: type {id} is not a declared named type"),
        }
    }

    fn write_display(&self, id: TypeId, out: &mut String) {
        let def = self.def(id);
        if let Some(name) = def.name() {
            out.push_str(&name.to_string());
            return;
        }

        match def.kind() {
            TypeKind::Primitive(p) => out.push_str(p.name()),
            TypeKind::Slice(elem) => {
                out.push_str("[]");
                self.write_display(*elem, out);
            }
            TypeKind::Array { elem, len } => {
                out.push_str(&format!("[{len}]"));
                self.write_display(*elem, out);
            }
            TypeKind::Map { key, value } => {
                out.push_str("map[");
                self.write_display(*key, out);
                out.push(']');
                self.write_display(*value, out);
            }
            TypeKind::Pointer(elem) => {
                out.push('*');
                self.write_display(*elem, out);
            }
            TypeKind::Struct(fields) if fields.is_empty() => out.push_str("struct {}"),
            TypeKind::Struct(fields) => {
                out.push_str("struct {");
                for (i, field) in fields.iter().enumerate() {
                    out.push_str(if i == 0 { " " } else { "; " });
                    out.push_str(field.name());
                    out.push(' ');
                    self.write_display(field.ty(), out);
                }
                out.push_str(" }");
            }
            TypeKind::Opaque => out.push_str("any"),
        }
    }
}
