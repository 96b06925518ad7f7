use crate::{Primitive, TypeDef, TypeInterner, TypeKind, TypeName};

fn int() -> TypeDef {
    TypeDef::anonymous(TypeKind::Primitive(Primitive::Int))
}

#[test]
fn intern_deduplicates() {
    let mut interner = TypeInterner::new();

    let a = interner.intern_owned(int());
    let b = interner.intern_owned(int());
    let c = interner.intern_owned(TypeDef::anonymous(TypeKind::Opaque));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_roundtrip() {
    let mut interner = TypeInterner::new();

    let id = interner.intern_owned(int());
    assert_eq!(interner.try_resolve(id), Some(&int()));
}

#[test]
fn push_never_deduplicates() {
    let mut interner = TypeInterner::new();

    let a = interner.push(TypeDef::declared(TypeName::new("User")));
    let b = interner.push(TypeDef::declared(TypeName::new("User")));

    assert_ne!(a, b);
    assert_eq!(interner.len(), 2);
}

#[test]
fn pushed_definitions_are_mutable() {
    let mut interner = TypeInterner::new();

    let named = interner.push(TypeDef::declared(TypeName::new("User")));
    let interned = interner.intern_owned(int());

    assert!(interner.resolve_pushed_mut(named).is_some());
    assert!(interner.resolve_pushed_mut(interned).is_none());
}

#[test]
fn handle_ordering_is_insertion_order() {
    let mut interner = TypeInterner::new();

    let first = interner.intern_owned(TypeDef::anonymous(TypeKind::Opaque));
    let second = interner.intern_owned(int());

    assert!(first < second);
}

#[test]
fn try_resolve_foreign_handle() {
    let mut other = TypeInterner::new();
    other.intern_owned(int());
    let foreign = other.intern_owned(TypeDef::anonymous(TypeKind::Opaque));

    let interner = TypeInterner::new();
    assert!(interner.try_resolve(foreign).is_none());
    assert!(interner.is_empty());
}
