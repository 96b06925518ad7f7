use typeport_core::{Field, Marshaler, Primitive, TypeGraph, TypeKind, TypeName};

use super::{Config, inline};

#[test]
fn exact_primitive() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int64);

    let (resolved, diagnostics) = inline(&graph, int, &Config::default());
    assert_eq!(resolved.text, "number");
    assert!(resolved.discovered.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn named_type_is_referenced() {
    let mut graph = TypeGraph::new();
    let user = graph.named(
        TypeName::qualified("models", "User"),
        TypeKind::Struct(Vec::new()),
    );

    let (resolved, _) = inline(&graph, user, &Config::default());
    assert_eq!(resolved.text, "User");
    assert_eq!(resolved.discovered, vec![user]);
}

#[test]
fn composite_collects_discovered_in_order() {
    let mut graph = TypeGraph::new();
    let key = graph.named(TypeName::new("Key"), TypeKind::Primitive(Primitive::String));
    let user = graph.named(TypeName::new("User"), TypeKind::Struct(Vec::new()));
    let ptr = graph.pointer(user);
    let map = graph.map(key, ptr);

    let (resolved, _) = inline(&graph, map, &Config::default());
    assert_eq!(resolved.text, "Record<Key, User | null>");
    assert_eq!(resolved.discovered, vec![key, user]);
}

#[test]
fn anonymous_struct_discovers_nested_named_types() {
    let mut graph = TypeGraph::new();
    let user = graph.named(TypeName::new("User"), TypeKind::Struct(Vec::new()));
    let users = graph.slice(user);
    let page = graph.structure(vec![
        Field::new("Items", users).with_tag(r#"json:"items""#),
        Field::new("Owner", user).with_tag(r#"json:"owner,omitempty""#),
    ]);

    let (resolved, _) = inline(&graph, page, &Config::default());
    assert_eq!(
        resolved.text,
        "{\n    items: (User)[];\n    owner?: User;\n}"
    );
    assert_eq!(resolved.discovered, vec![user, user]);
}

#[test]
fn dash_tagged_field_is_kept() {
    let mut graph = TypeGraph::new();
    let secret = graph.named(TypeName::new("Secret"), TypeKind::Struct(Vec::new()));
    let holder = graph.structure(vec![Field::new("S", secret).with_tag(r#"json:"-""#)]);

    let (resolved, _) = inline(&graph, holder, &Config::default());
    assert_eq!(resolved.text, "{\n    \"-\": Secret;\n}");
    assert_eq!(resolved.discovered, vec![secret]);
}

#[test]
fn override_applies_to_anonymous_use_site() {
    let mut graph = TypeGraph::new();
    let byte = graph.primitive(Primitive::Uint8);
    let bytes = graph.slice(byte);

    let config = Config::new().override_type(bytes, "string");
    let (resolved, _) = inline(&graph, bytes, &config);
    assert_eq!(resolved.text, "string");
}

#[test]
fn named_reference_wins_over_override() {
    let mut graph = TypeGraph::new();
    let id = graph.named(TypeName::new("ID"), TypeKind::Primitive(Primitive::Int));

    let config = Config::new().override_type(id, "string");
    let (resolved, _) = inline(&graph, id, &config);
    assert_eq!(resolved.text, "ID");
    assert_eq!(resolved.discovered, vec![id]);
}

#[test]
fn reference_does_not_warn() {
    let mut graph = TypeGraph::new();
    let money = graph.named(TypeName::new("Money"), TypeKind::Struct(Vec::new()));
    graph.set_marshaler(money, Marshaler::Json);

    let (_, diagnostics) = inline(&graph, money, &Config::default());
    assert!(diagnostics.is_empty());
}

#[test]
fn builtin_override_only_when_present() {
    let graph = TypeGraph::new();
    assert!(Config::default().effective_overrides(&graph).is_empty());

    let mut graph = TypeGraph::new();
    let time = graph.timestamp();
    let overrides = Config::default().effective_overrides(&graph);
    assert_eq!(overrides.get(time), Some("string"));

    let disabled = Config::new().builtin_overrides(false);
    assert!(disabled.effective_overrides(&graph).is_empty());
}
