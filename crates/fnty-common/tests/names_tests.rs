use super::*;

#[test]
fn test_split_qualified_name() {
    assert_eq!(split_qualified_name("core.Function2"), ("core", "Function2"));
    assert_eq!(
        split_qualified_name("core.coroutines.SuspendFunction0"),
        ("core.coroutines", "SuspendFunction0")
    );
    assert_eq!(split_qualified_name("Foo"), ("", "Foo"));
}

#[test]
fn test_qualify() {
    assert_eq!(qualify("core", "Function1"), "core.Function1");
    assert_eq!(qualify("", "Foo"), "Foo");
}

#[test]
fn test_parse_arity_suffix_canonical_only() {
    assert_eq!(parse_arity_suffix("0"), Some(0));
    assert_eq!(parse_arity_suffix("2"), Some(2));
    assert_eq!(parse_arity_suffix("22"), Some(22));
    assert_eq!(parse_arity_suffix(""), None);
    assert_eq!(parse_arity_suffix("01"), None);
    assert_eq!(parse_arity_suffix("-1"), None);
    assert_eq!(parse_arity_suffix("+1"), None);
    assert_eq!(parse_arity_suffix("1a"), None);
    assert_eq!(parse_arity_suffix("99999999999"), None);
}

#[test]
fn test_is_identifier() {
    assert!(is_identifier("x"));
    assert!(is_identifier("_tmp1"));
    assert!(is_identifier("count"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("1x"));
    assert!(!is_identifier("a.b"));
    assert!(!is_identifier("<this>"));
}
