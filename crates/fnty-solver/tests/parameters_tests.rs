use super::*;
use crate::test_env::TestEnv;
use crate::types::Variance;

#[test]
fn test_positional_names_and_ordinals() {
    let env = TestEnv::new();
    let int = env.class("core.Int");
    let text = env.class("core.String");
    let owner = CallableId(7);

    let params = materialize_parameters(
        &env.interner,
        owner,
        &[
            TypeProjection::invariant(int),
            TypeProjection::with_variance(Variance::In, text),
            TypeProjection::invariant(int),
        ],
    );

    let names: Vec<_> = params
        .iter()
        .map(|p| env.interner.resolve_atom(p.name))
        .collect();
    assert_eq!(names, ["p1", "p2", "p3"]);
    assert_eq!(params.iter().map(|p| p.index).collect::<Vec<_>>(), [0, 1, 2]);
    assert_eq!(
        params.iter().map(|p| p.type_id).collect::<Vec<_>>(),
        [int, text, int]
    );
    assert!(params.iter().all(|p| p.owner == owner));
}

#[test]
fn test_flags_are_off() {
    let env = TestEnv::new();
    let int = env.class("core.Int");
    let params = materialize_parameters(&env.interner, CallableId(1), &[TypeProjection::invariant(int)]);

    let p = &params[0];
    assert!(!p.declares_default_value);
    assert!(!p.is_crossinline);
    assert!(!p.is_noinline);
    assert_eq!(p.vararg_element_type, None);
    assert_eq!(p.span, None);
}

#[test]
fn test_wildcard_contributes_bound() {
    let env = TestEnv::new();
    let any = env.class("core.Any");
    let params = materialize_parameters(&env.interner, CallableId(1), &[TypeProjection::star(any)]);
    assert_eq!(params[0].type_id, any);
}

#[test]
fn test_empty_projection_list() {
    let env = TestEnv::new();
    assert!(materialize_parameters(&env.interner, CallableId(1), &[]).is_empty());
}

#[test]
fn test_materialize_function_type_parameters() {
    let env = TestEnv::new();
    let fns = env.fns();
    let int = env.class("core.Int");
    let text = env.class("core.String");
    let unit = env.class("core.Unit");
    let f = fns
        .create_function_type(crate::AnnotationSetId::EMPTY, Some(text), &[int, int], unit)
        .expect("registered");

    let params = materialize_parameters(
        &env.interner,
        CallableId(3),
        &fns.parameter_projections_of(f),
    );
    assert_eq!(params.len(), 2);
    assert_eq!(env.interner.resolve_atom(params[1].name), "p2");
    assert_eq!(params[1].type_id, int);
}
