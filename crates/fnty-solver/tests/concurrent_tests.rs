use crate::test_env::TestEnv;
use crate::{AnnotationSetId, FunctionKind, TypeId};
use rayon::prelude::*;

#[test]
fn test_parallel_construction_is_consistent() {
    let env = TestEnv::new();
    let int = env.class("core.Int");
    let text = env.class("core.String");
    let unit = env.class("core.Unit");

    let results: Vec<TypeId> = (0..256)
        .into_par_iter()
        .map(|i| {
            let fns = env.fns();
            let receiver = (i % 2 == 0).then_some(text);
            let params = vec![int; i % 5];
            fns.create_function_type(AnnotationSetId::EMPTY, receiver, &params, unit)
                .expect("registered")
        })
        .collect();

    let fns = env.fns();
    for (i, f) in results.iter().enumerate() {
        let receiver = (i % 2 == 0).then_some(text);
        let expected = fns
            .create_function_type(AnnotationSetId::EMPTY, receiver, &vec![int; i % 5], unit)
            .expect("registered");
        assert_eq!(*f, expected);
        assert_eq!(fns.receiver_type_of(*f), receiver);
        assert_eq!(fns.parameter_types_of(*f).len(), i % 5);
    }
}

#[test]
fn test_parallel_classification_of_shared_hierarchy() {
    let env = TestEnv::new();
    let unit = env.class("core.Unit");
    let f0 = env.raw_function(FunctionKind::Function, &[unit]);

    let mut top = env.declare_type("app.Level0", &[f0]);
    for depth in 1..200 {
        top = env.declare_type(&format!("app.Level{depth}"), &[top]);
    }
    let unrelated = env.class("app.Unrelated");

    let answers: Vec<(bool, bool)> = (0..64)
        .into_par_iter()
        .map(|_| {
            let fns = env.fns();
            (
                fns.is_function_type_or_subtype(top),
                fns.is_function_type_or_subtype(unrelated),
            )
        })
        .collect();

    assert!(answers.iter().all(|&answer| answer == (true, false)));
}
