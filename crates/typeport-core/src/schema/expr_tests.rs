use super::expr::{TypeExpr, parse_type_expr};

fn name(s: &str) -> Box<TypeExpr<'_>> {
    Box::new(TypeExpr::Name(s))
}

#[test]
fn names() {
    assert_eq!(parse_type_expr("int64"), Ok(TypeExpr::Name("int64")));
    assert_eq!(parse_type_expr("models.User"), Ok(TypeExpr::Name("models.User")));
    assert_eq!(
        parse_type_expr("github.com_acme.User"),
        Ok(TypeExpr::Name("github.com_acme.User"))
    );
}

#[test]
fn composites() {
    assert_eq!(parse_type_expr("*string"), Ok(TypeExpr::Pointer(name("string"))));
    assert_eq!(parse_type_expr("[]Order"), Ok(TypeExpr::Slice(name("Order"))));
    assert_eq!(parse_type_expr("[16]byte"), Ok(TypeExpr::Array(16, name("byte"))));
    assert_eq!(
        parse_type_expr("map[string]int"),
        Ok(TypeExpr::Map(name("string"), name("int")))
    );
}

#[test]
fn nested() {
    let expected = TypeExpr::Map(
        name("string"),
        Box::new(TypeExpr::Slice(Box::new(TypeExpr::Pointer(name("models.User"))))),
    );
    assert_eq!(parse_type_expr("map[string][]*models.User"), Ok(expected));
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(
        parse_type_expr(" map[ string ] * int "),
        Ok(TypeExpr::Map(name("string"), Box::new(TypeExpr::Pointer(name("int")))))
    );
}

#[test]
fn map_prefix_is_a_name() {
    assert_eq!(parse_type_expr("mapping"), Ok(TypeExpr::Name("mapping")));
}

#[test]
fn trailing_input() {
    let err = parse_type_expr("int string").unwrap_err();
    assert_eq!(err.message, "unexpected trailing input");
    assert_eq!(err.span, 4..10);
}

#[test]
fn unexpected_character() {
    let err = parse_type_expr("[]in$t").unwrap_err();
    assert_eq!(err.span, 4..5);
}

#[test]
fn missing_element() {
    let err = parse_type_expr("[]").unwrap_err();
    assert_eq!(err.message, "expected type, got end of input");
    assert_eq!(err.span, 2..2);
}

#[test]
fn unclosed_map_key() {
    let err = parse_type_expr("map[string int").unwrap_err();
    assert!(err.message.starts_with("expected RBracket"), "{}", err.message);
}

#[test]
fn empty_input() {
    assert!(parse_type_expr("").is_err());
}
