//! Reflection over Rust types.
//!
//! [`Describe`] maps a Rust type to its descriptor in a [`TypeGraph`]. The
//! implementations here cover the standard library:
//! - primitives: `bool`, integers, floats, `String`, `str`, `char`
//! - `Option<T>`: nullable reference
//! - sequences: `Vec`, slices, `VecDeque`, sets, fixed arrays
//! - maps: `HashMap`, `BTreeMap`, `IndexMap`
//! - transparent wrappers: `Box`, `Rc`, `Arc`, `Cow`, references
//!
//! User types implement it with [`TypeGraph::named_with`]:
//!
//! ```
//! use typeport_core::{Describe, Field, TypeGraph, TypeId, TypeKind, TypeName};
//!
//! struct User {
//!     id: i64,
//!     friends: Vec<User>,
//! }
//!
//! impl Describe for User {
//!     fn describe(graph: &mut TypeGraph) -> TypeId {
//!         graph.named_with(TypeName::new("User"), |g| {
//!             TypeKind::Struct(vec![
//!                 Field::new("id", g.describe::<i64>()),
//!                 Field::new("friends", g.describe::<Vec<User>>()),
//!             ])
//!         })
//!     }
//! }
//!
//! let mut graph = TypeGraph::new();
//! let user = graph.describe::<User>();
//! assert_eq!(graph.display(user), "User");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::{Primitive, TypeGraph, TypeId};

/// Type introspection.
pub trait Describe {
    /// Descriptor of `Self`, created in `graph` if not already present.
    fn describe(graph: &mut TypeGraph) -> TypeId;
}

macro_rules! impl_describe {
    ($($ty:ty),* => $primitive:expr) => {
        $(
            impl Describe for $ty {
                fn describe(graph: &mut TypeGraph) -> TypeId {
                    graph.primitive($primitive)
                }
            }
        )*
    };
}

impl_describe!(bool => Primitive::Bool);
impl_describe!(String, str, char => Primitive::String);
impl_describe!(isize => Primitive::Int);
impl_describe!(i8 => Primitive::Int8);
impl_describe!(i16 => Primitive::Int16);
impl_describe!(i32 => Primitive::Int32);
impl_describe!(i64 => Primitive::Int64);
impl_describe!(i128 => Primitive::Int128);
impl_describe!(usize => Primitive::Uint);
impl_describe!(u8 => Primitive::Uint8);
impl_describe!(u16 => Primitive::Uint16);
impl_describe!(u32 => Primitive::Uint32);
impl_describe!(u64 => Primitive::Uint64);
impl_describe!(u128 => Primitive::Uint128);
impl_describe!(f32 => Primitive::Float32);
impl_describe!(f64 => Primitive::Float64);

impl<T: Describe> Describe for Option<T> {
    fn describe(graph: &mut TypeGraph) -> TypeId {
        let elem = T::describe(graph);
        graph.pointer(elem)
    }
}

macro_rules! impl_describe_seq {
    ($($ty:ident<T $(, $param:ident)*>),*) => {
        $(
            impl<T: Describe $(, $param)*> Describe for $ty<T $(, $param)*> {
                fn describe(graph: &mut TypeGraph) -> TypeId {
                    let elem = T::describe(graph);
                    graph.slice(elem)
                }
            }
        )*
    };
}

impl_describe_seq!(Vec<T>, VecDeque<T>, HashSet<T, S>, BTreeSet<T>);

impl<T: Describe> Describe for [T] {
    fn describe(graph: &mut TypeGraph) -> TypeId {
        let elem = T::describe(graph);
        graph.slice(elem)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(graph: &mut TypeGraph) -> TypeId {
        let elem = T::describe(graph);
        graph.array(elem, N)
    }
}

macro_rules! impl_describe_map {
    ($($ty:ident<K, V $(, $param:ident)*>),*) => {
        $(
            impl<K: Describe, V: Describe $(, $param)*> Describe for $ty<K, V $(, $param)*> {
                fn describe(graph: &mut TypeGraph) -> TypeId {
                    let key = K::describe(graph);
                    let value = V::describe(graph);
                    graph.map(key, value)
                }
            }
        )*
    };
}

impl_describe_map!(HashMap<K, V, S>, BTreeMap<K, V>, IndexMap<K, V, S>);

// Smart pointers and references serialize as their pointee.
macro_rules! impl_describe_transparent {
    ($($ty:ty),*) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ty {
                fn describe(graph: &mut TypeGraph) -> TypeId {
                    T::describe(graph)
                }
            }
        )*
    };
}

impl_describe_transparent!(Box<T>, Rc<T>, Arc<T>, &T, &mut T);

impl<T: Describe + ToOwned + ?Sized> Describe for Cow<'_, T> {
    fn describe(graph: &mut TypeGraph) -> TypeId {
        T::describe(graph)
    }
}

impl Describe for serde_json::Value {
    fn describe(graph: &mut TypeGraph) -> TypeId {
        graph.opaque()
    }
}

impl Describe for std::time::SystemTime {
    fn describe(graph: &mut TypeGraph) -> TypeId {
        graph.timestamp()
    }
}
