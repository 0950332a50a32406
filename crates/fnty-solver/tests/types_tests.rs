use super::*;
use fnty_common::interner::ShardedInterner;

fn annotation(interner: &ShardedInterner, def: u32, name: &str) -> Annotation {
    Annotation::marker(DefId(def), interner.intern(name))
}

#[test]
fn test_annotation_set_with_added_is_idempotent() {
    let interner = ShardedInterner::new();
    let marker = annotation(&interner, 1, "core.ExtensionFunctionType");

    let once = AnnotationSet::new().with_added(marker.clone());
    let twice = once.with_added(marker);
    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[test]
fn test_annotation_set_keyed_by_qualified_name() {
    let interner = ShardedInterner::new();
    let name = interner.intern("core.ParameterName");
    let first = Annotation::marker(DefId(1), name)
        .with_argument(interner.intern("name"), AnnotationArgument::String(interner.intern("a")));
    let second = Annotation::marker(DefId(1), name)
        .with_argument(interner.intern("name"), AnnotationArgument::String(interner.intern("b")));

    let set = AnnotationSet::new().with_added(first.clone()).with_added(second);
    assert_eq!(set.len(), 1);
    assert_eq!(set.find(name), Some(&first));
}

#[test]
fn test_annotation_set_preserves_insertion_order() {
    let interner = ShardedInterner::new();
    let a = annotation(&interner, 1, "app.A");
    let b = annotation(&interner, 2, "app.B");
    let c = annotation(&interner, 3, "app.C");

    let set = AnnotationSet::from_entries([c.clone(), a.clone(), b.clone(), a.clone()]);
    let order: Vec<_> = set.iter().cloned().collect();
    assert_eq!(order, vec![c, a, b]);
}

#[test]
fn test_annotation_set_with_added_leaves_receiver_unchanged() {
    let interner = ShardedInterner::new();
    let base = AnnotationSet::from_entries([annotation(&interner, 1, "app.A")]);
    let snapshot = base.clone();

    let grown = base.with_added(annotation(&interner, 2, "app.B"));
    assert_eq!(base, snapshot);
    assert_eq!(grown.len(), 2);
    assert!(!base.contains(interner.intern("app.B")));
}

#[test]
fn test_annotation_argument_lookup() {
    let interner = ShardedInterner::new();
    let key = interner.intern("name");
    let entry = annotation(&interner, 1, "core.ParameterName")
        .with_argument(key, AnnotationArgument::Bool(true));

    assert_eq!(entry.argument(key), Some(&AnnotationArgument::Bool(true)));
    assert_eq!(entry.argument(interner.intern("other")), None);
}

#[test]
fn test_projection_accessors() {
    let t = TypeId(7);
    let bound = TypeId(3);

    let invariant = TypeProjection::invariant(t);
    assert_eq!(invariant.type_id(), t);
    assert_eq!(invariant.variance(), Some(Variance::Invariant));
    assert!(!invariant.is_star());

    let out = TypeProjection::with_variance(Variance::Out, t);
    assert_eq!(out.variance(), Some(Variance::Out));
    assert_ne!(out, invariant);

    let star = TypeProjection::star(bound);
    assert!(star.is_star());
    assert_eq!(star.variance(), None);
    assert_eq!(star.type_id(), bound);
}

#[test]
fn test_type_data_accessors() {
    let class = TypeData::Class(ClassType {
        def: DefId(4),
        arguments: ProjectionListId(2),
        annotations: AnnotationSetId(5),
        nullable: true,
    });
    assert_eq!(class.def_id(), Some(DefId(4)));
    assert_eq!(class.arguments(), ProjectionListId(2));
    assert_eq!(class.annotations(), AnnotationSetId(5));
    assert!(class.is_nullable());

    let param = TypeData::TypeParameter(TypeParamInfo {
        name: Atom::NONE,
        annotations: AnnotationSetId::EMPTY,
        nullable: false,
    });
    assert_eq!(param.def_id(), None);
    assert_eq!(param.arguments(), ProjectionListId::EMPTY);

    assert_eq!(TypeData::Error.def_id(), None);
    assert!(!TypeData::Error.is_nullable());
    assert!(TypeId::ERROR.is_error());
}

#[test]
fn test_type_data_with_annotations() {
    let class = TypeData::Class(ClassType {
        def: DefId(4),
        arguments: ProjectionListId::EMPTY,
        annotations: AnnotationSetId::EMPTY,
        nullable: false,
    });
    let annotated = class.with_annotations(AnnotationSetId(9));
    assert_eq!(annotated.annotations(), AnnotationSetId(9));
    assert_eq!(annotated.def_id(), Some(DefId(4)));

    assert_eq!(
        TypeData::Error.with_annotations(AnnotationSetId(9)),
        TypeData::Error
    );
}
