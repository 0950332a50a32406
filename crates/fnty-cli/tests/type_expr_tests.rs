use super::*;

fn simple(name: &str) -> TypeExpr {
    TypeExpr {
        annotations: vec![],
        name: name.to_string(),
        arguments: vec![],
        nullable: false,
    }
}

fn invariant(ty: TypeExpr) -> ProjectionExpr {
    ProjectionExpr::Type {
        variance: Variance::Invariant,
        ty,
    }
}

#[test]
fn test_parse_simple_names() {
    assert_eq!(parse_type_expr("T").unwrap(), simple("T"));
    assert_eq!(parse_type_expr("  core.Int ").unwrap(), simple("core.Int"));
    assert_eq!(
        parse_type_expr("core.coroutines.SuspendFunction0<core.Unit>")
            .unwrap()
            .name,
        "core.coroutines.SuspendFunction0"
    );
}

#[test]
fn test_parse_arguments_and_nullability() {
    let expr = parse_type_expr("core.Function2<core.Int, core.String?, core.Unit>?").unwrap();
    assert!(expr.nullable);
    assert_eq!(
        expr.arguments,
        vec![
            invariant(simple("core.Int")),
            invariant(TypeExpr {
                nullable: true,
                ..simple("core.String")
            }),
            invariant(simple("core.Unit")),
        ]
    );
}

#[test]
fn test_parse_projections() {
    let expr = parse_type_expr("app.Box<in T, out core.Int, *, inner, out>").unwrap();
    assert_eq!(
        expr.arguments,
        vec![
            ProjectionExpr::Type {
                variance: Variance::In,
                ty: simple("T"),
            },
            ProjectionExpr::Type {
                variance: Variance::Out,
                ty: simple("core.Int"),
            },
            ProjectionExpr::Star,
            invariant(simple("inner")),
            invariant(simple("out")),
        ]
    );
}

#[test]
fn test_parse_annotations() {
    let expr = parse_type_expr(
        r#"@core.ExtensionFunctionType @core.ParameterName(name = "count") @app.Meta(level = -2, on = true) core.Int"#,
    )
    .unwrap();
    assert_eq!(
        expr.annotations,
        vec![
            AnnotationExpr {
                name: "core.ExtensionFunctionType".to_string(),
                arguments: vec![],
            },
            AnnotationExpr {
                name: "core.ParameterName".to_string(),
                arguments: vec![("name".to_string(), ValueExpr::String("count".to_string()))],
            },
            AnnotationExpr {
                name: "app.Meta".to_string(),
                arguments: vec![
                    ("level".to_string(), ValueExpr::Int(-2)),
                    ("on".to_string(), ValueExpr::Bool(true)),
                ],
            },
        ]
    );
    assert_eq!(expr.name, "core.Int");
}

#[test]
fn test_parse_string_escapes() {
    let expr = parse_type_expr(r#"@a.B(s = "q\"uo\\te") T"#).unwrap();
    assert_eq!(
        expr.annotations[0].arguments[0].1,
        ValueExpr::String(r#"q"uo\te"#.to_string())
    );
}

#[test]
fn test_parse_errors() {
    for source in [
        "",
        "core.",
        "core.Function1<core.Int",
        "core.Function1<>",
        "core.Int core.Int",
        "1abc",
        "@ core.Int",
        r#"@a.B(s = "open) T"#,
        "@a.B(s = maybe) T",
        "app.Box<core.Int,>",
    ] {
        assert!(parse_type_expr(source).is_err(), "{source:?} should not parse");
    }
}

#[test]
fn test_error_mentions_offset() {
    let err = parse_type_expr("core.Int>").unwrap_err();
    assert!(err.to_string().contains("offset 8"), "{err}");
}
