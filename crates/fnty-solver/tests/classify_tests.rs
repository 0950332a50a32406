use crate::test_env::TestEnv;
use crate::{AnnotationSetId, BuiltinRegistry, BuiltinsConfig, FunctionKind, TypeDatabase, TypeId};

#[test]
fn test_direct_function_type() {
    let env = TestEnv::new();
    let fns = env.fns();
    let int = env.class("core.Int");
    let boolean = env.class("core.Boolean");

    let f1 = env.raw_function(FunctionKind::Function, &[int, boolean]);
    assert!(fns.is_function_type(f1));
    assert!(fns.is_builtin_function_type(f1));
    assert!(!fns.is_suspend_function_type(f1));
    assert!(!fns.is_k_function_type(f1));
    assert_eq!(fns.function_kind_of(f1), Some((FunctionKind::Function, 1)));
}

#[test]
fn test_plain_classes_are_not_function_types() {
    let env = TestEnv::new();
    let fns = env.fns();
    let int = env.class("core.Int");

    assert!(!fns.is_function_type(int));
    assert!(!fns.is_function_type_or_subtype(int));
    assert!(!fns.is_extension_function_type(int));
    assert!(!fns.is_non_extension_function_type(int));
    assert_eq!(fns.function_kind_of(int), None);
}

#[test]
fn test_family_membership_is_by_qualified_name() {
    let env = TestEnv::new();
    let fns = env.fns();

    // Same short name, wrong package.
    let impostor = env.class("app.Function2");
    assert!(!fns.is_function_type(impostor));

    // The arity-less base interface is not a member.
    let base = env.interner.simple_class_type(env.builtins.function_base());
    assert!(!fns.is_function_type(base));

    // Non-canonical arity spelling.
    let padded = env.class("core.Function01");
    assert!(!fns.is_function_type(padded));

    // A user declaration reusing a canonical name is recognized by name alone.
    let shadow = env.class("core.Function40");
    assert_eq!(fns.function_kind_of(shadow), Some((FunctionKind::Function, 40)));
}

#[test]
fn test_subtype_of_function_type() {
    let env = TestEnv::new();
    let fns = env.fns();
    let int = env.class("core.Int");
    let boolean = env.class("core.Boolean");
    let f1 = env.raw_function(FunctionKind::Function, &[int, boolean]);

    let foo = env.declare_type("app.Foo", &[f1]);
    assert!(!fns.is_function_type(foo));
    assert!(fns.is_function_type_or_subtype(foo));

    let bar = env.declare_type("app.Bar", &[foo]);
    assert!(!fns.is_function_type(bar));
    assert!(fns.is_function_type_or_subtype(bar));
}

#[test]
fn test_direct_implies_or_subtype() {
    let env = TestEnv::new();
    let fns = env.fns();
    let unit = env.class("core.Unit");

    for arity in 0..=5 {
        let mut args = vec![unit; arity];
        args.push(unit);
        let f = env.raw_function(FunctionKind::Function, &args);
        assert!(fns.is_function_type(f));
        assert!(fns.is_function_type_or_subtype(f));
    }
}

#[test]
fn test_first_supertype_without_match_falls_through_to_sibling() {
    let env = TestEnv::new();
    let fns = env.fns();
    let unit = env.class("core.Unit");
    let f0 = env.raw_function(FunctionKind::Function, &[unit]);

    let marker = env.declare_type("app.Marker", &[]);
    let via_second = env.declare_type("app.Handler", &[marker, f0]);
    assert!(fns.is_function_type_or_subtype(via_second));
}

#[test]
fn test_diamond_hierarchy_visits_shared_ancestor_once() {
    let env = TestEnv::new();
    let fns = env.fns();
    let unit = env.class("core.Unit");
    let f0 = env.raw_function(FunctionKind::Function, &[unit]);

    let top = env.declare_type("app.Top", &[f0]);
    let left = env.declare_type("app.Left", &[top]);
    let right = env.declare_type("app.Right", &[top]);
    let bottom = env.declare_type("app.Bottom", &[left, right]);
    assert!(fns.is_function_type_or_subtype(bottom));

    let mut seen: Vec<TypeId> = Vec::new();
    let found = fns.is_type_or_subtype_of(bottom, |t| {
        seen.push(t);
        false
    });
    assert!(!found);
    assert_eq!(seen.iter().filter(|&&t| t == top).count(), 1);
    assert_eq!(seen.iter().filter(|&&t| t == f0).count(), 1);
    assert_eq!(seen[0], bottom);
    // Declaration order: the left branch is explored before the right one.
    assert_eq!(seen[1], left);
}

#[test]
fn test_walk_stops_at_first_match() {
    let env = TestEnv::new();
    let fns = env.fns();
    let a = env.declare_type("app.A", &[]);
    let b = env.declare_type("app.B", &[a]);
    let c = env.declare_type("app.C", &[b]);

    let mut seen = Vec::new();
    assert!(fns.is_type_or_subtype_of(c, |t| {
        seen.push(t);
        t == b
    }));
    assert_eq!(seen, vec![c, b]);
}

#[test]
fn test_cyclic_declarations_terminate() {
    let env = TestEnv::new();
    let fns = env.fns();

    let a_def = env.declare("app.A", &[]);
    let a = env.interner.simple_class_type(a_def);
    let b = env.declare_type("app.B", &[a]);
    env.store.set_supertypes(a_def, vec![b]);

    assert!(!fns.is_function_type_or_subtype(a));
    assert!(!fns.is_function_type_or_subtype(b));
}

#[test]
fn test_deep_hierarchy_does_not_overflow() {
    let env = TestEnv::new();
    let fns = env.fns();
    let unit = env.class("core.Unit");
    let mut current = env.raw_function(FunctionKind::Function, &[unit]);

    for depth in 0..10_000 {
        current = env.declare_type(&format!("app.Level{depth}"), &[current]);
    }

    assert!(!fns.is_function_type(current));
    assert!(fns.is_function_type_or_subtype(current));
}

#[test]
fn test_types_without_declaration_are_never_function_types() {
    let env = TestEnv::new();
    let fns = env.fns();
    let type_param = env.interner.type_parameter("T");

    for t in [type_param, TypeId::ERROR] {
        assert!(!fns.is_function_type(t));
        assert!(!fns.is_function_type_or_subtype(t));
        assert!(!fns.is_extension_function_type(t));
        assert!(!fns.is_non_extension_function_type(t));
        assert!(!fns.is_suspend_function_type(t));
        assert!(!fns.is_k_function_type(t));
        assert_eq!(fns.function_kind_of(t), None);
    }
}

#[test]
fn test_uninterned_type_id_is_not_a_function_type() {
    let env = TestEnv::new();
    let fns = env.fns();
    let bogus = TypeId(u32::MAX);
    assert!(!fns.is_function_type(bogus));
    assert!(!fns.is_function_type_or_subtype(bogus));
}

#[test]
fn test_suspend_function_kinds() {
    let env = TestEnv::new();
    let fns = env.fns();
    let int = env.class("core.Int");
    let unit = env.class("core.Unit");

    let sf = env.raw_function(FunctionKind::SuspendFunction, &[int, unit]);
    assert!(fns.is_suspend_function_type(sf));
    assert!(!fns.is_function_type(sf));
    assert!(fns.is_builtin_function_type(sf));
    assert!(fns.is_non_extension_function_type(sf));

    let job = env.declare_type("app.Job", &[sf]);
    assert!(fns.is_suspend_function_type_or_subtype(job));
    assert!(fns.is_builtin_function_type_or_subtype(job));
    // SuspendFunctionN extends only the arity-less base, not FunctionN.
    assert!(!fns.is_function_type_or_subtype(job));
}

#[test]
fn test_reflective_function_types_inherit_from_function_types() {
    let env = TestEnv::new();
    let fns = env.fns();
    let int = env.class("core.Int");
    let unit = env.class("core.Unit");

    let kf = env.raw_function(FunctionKind::KFunction, &[int, unit]);
    assert!(fns.is_k_function_type(kf));
    assert!(!fns.is_function_type(kf));
    assert!(!fns.is_builtin_function_type(kf));
    assert!(fns.is_function_type_or_subtype(kf));

    let ksf = env.raw_function(FunctionKind::KSuspendFunction, &[unit]);
    assert!(fns.is_k_function_type(ksf));
    assert!(fns.is_suspend_function_type_or_subtype(ksf));
}

#[test]
fn test_function_type_agrees_with_registry_membership() {
    let env = TestEnv::new();
    let fns = env.fns();
    let int = env.class("core.Int");
    let unit = env.class("core.Unit");

    for kind in FunctionKind::ALL {
        let t = env.raw_function(kind, &[int, unit]);
        let name = kind.class_name(1);
        assert_eq!(
            fns.is_function_type(t),
            env.builtins.is_function_family_member(&name),
            "{name}"
        );
        assert_eq!(fns.function_kind_of(t), Some((kind, 1)), "{name}");
        assert!(fns.is_function_family_type(t), "{name}");
    }
}

#[test]
fn test_extension_partition_on_every_family() {
    let env = TestEnv::new();
    let fns = env.fns();
    let int = env.class("core.Int");
    let unit = env.class("core.Unit");

    for kind in FunctionKind::ALL {
        let plain = env.raw_function(kind, &[int, unit]);
        assert!(fns.is_non_extension_function_type(plain), "{kind}");
        assert!(!fns.is_extension_function_type(plain), "{kind}");

        let marker =
            fns.with_extension_marker(AnnotationSetId::EMPTY, env.builtins.extension_marker());
        let marked = env.raw_function_annotated(kind, &[int, unit], marker);
        assert!(fns.is_extension_function_type(marked), "{kind}");
        assert!(!fns.is_non_extension_function_type(marked), "{kind}");
    }
}

#[test]
fn test_disabled_families_are_not_recognized() {
    let config = BuiltinsConfig {
        include_suspend_functions: false,
        include_reflection_functions: false,
        ..BuiltinsConfig::default()
    };
    let env = TestEnv::with_config(&config);
    let fns = env.fns();

    let user_declared = env.class("core.coroutines.SuspendFunction1");
    assert!(!fns.is_suspend_function_type(user_declared));
    assert_eq!(fns.function_kind_of(user_declared), None);
}

#[test]
fn test_extension_partition_on_direct_function_types() {
    let env = TestEnv::new();
    let fns = env.fns();
    let text = env.class("core.String");
    let int = env.class("core.Int");
    let unit = env.class("core.Unit");

    let plain = fns
        .create_function_type(AnnotationSetId::EMPTY, None, &[text, int], unit)
        .expect("arity 2 is registered");
    let extension = fns
        .create_function_type(AnnotationSetId::EMPTY, Some(text), &[int], unit)
        .expect("arity 2 is registered");

    for t in [plain, extension] {
        assert!(fns.is_extension_function_type(t) != fns.is_non_extension_function_type(t));
    }
    assert!(fns.is_non_extension_function_type(plain));
    assert!(fns.is_extension_function_type(extension));
}

#[test]
#[should_panic(expected = "only through its supertypes")]
fn test_extension_query_on_inherited_function_type_panics() {
    let env = TestEnv::new();
    let fns = env.fns();
    let unit = env.class("core.Unit");
    let f0 = env.raw_function(FunctionKind::Function, &[unit]);
    let callback = env.declare_type("app.Callback", &[f0]);

    fns.is_extension_function_type(callback);
}

#[test]
#[should_panic(expected = "only through its supertypes")]
fn test_non_extension_query_on_inherited_function_type_panics() {
    let env = TestEnv::new();
    let fns = env.fns();
    let unit = env.class("core.Unit");
    let f0 = env.raw_function(FunctionKind::Function, &[unit]);
    let callback = env.declare_type("app.Callback", &[f0]);

    fns.is_non_extension_function_type(callback);
}
