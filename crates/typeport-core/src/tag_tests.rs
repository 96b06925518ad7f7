use crate::StructTag;

fn lookup(raw: &str, key: &str) -> Option<String> {
    StructTag::new(raw).lookup(key).map(|v| v.into_owned())
}

#[test]
fn single_key() {
    assert_eq!(lookup(r#"json:"id""#, "json").as_deref(), Some("id"));
}

#[test]
fn multiple_keys() {
    let raw = r#"json:"nickname,omitempty" db:"nick""#;

    assert_eq!(lookup(raw, "json").as_deref(), Some("nickname,omitempty"));
    assert_eq!(lookup(raw, "db").as_deref(), Some("nick"));
    assert_eq!(lookup(raw, "yaml"), None);
}

#[test]
fn present_but_empty() {
    assert_eq!(lookup(r#"json:"""#, "json").as_deref(), Some(""));
}

#[test]
fn empty_tag() {
    assert!(StructTag::default().is_empty());
    assert_eq!(lookup("", "json"), None);
}

#[test]
fn escaped_quote() {
    assert_eq!(lookup(r#"json:"a\"b""#, "json").as_deref(), Some(r#"a"b"#));
}

#[test]
fn unknown_escape_is_malformed() {
    assert_eq!(lookup(r#"json:"a\qb""#, "json"), None);
}

#[test]
fn malformed_stops_scan() {
    assert_eq!(lookup(r#"json:id db:"nick""#, "db"), None);
    assert_eq!(lookup(r#"json:"unterminated"#, "json"), None);
}

#[test]
fn key_prefix_does_not_match() {
    assert_eq!(lookup(r#"jsonx:"id""#, "json"), None);
}

#[test]
fn leading_spaces_are_skipped() {
    assert_eq!(lookup(r#"   json:"id""#, "json").as_deref(), Some("id"));
}
