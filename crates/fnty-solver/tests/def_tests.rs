use super::*;
use fnty_common::interner::ShardedInterner;

#[test]
fn test_register_and_get() {
    let names = ShardedInterner::new();
    let store = DeclarationStore::new();
    assert!(store.is_empty());

    let name = names.intern("app.Foo");
    let t = names.intern("T");
    let id = store.register(DeclarationInfo::class(name, vec![t]));

    assert_eq!(id, DefId(DefId::FIRST_VALID));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get_kind(id), Some(DefKind::Class));
    assert_eq!(store.get_name(id), Some(name));
    assert_eq!(store.get_type_params(id), Some(vec![t]));
    assert_eq!(store.get(id).map(|info| info.supertypes), Some(vec![]));
}

#[test]
fn test_ids_are_unique_and_ordered() {
    let names = ShardedInterner::new();
    let store = DeclarationStore::new();
    let a = store.register(DeclarationInfo::interface(names.intern("app.A"), vec![]));
    let b = store.register(DeclarationInfo::annotation_class(names.intern("app.B")));
    let c = store.register(DeclarationInfo::class(names.intern("app.C"), vec![]));

    assert!(a < b && b < c);
    assert_eq!(store.get_kind(b), Some(DefKind::AnnotationClass));
}

#[test]
fn test_supertypes_attached_after_registration() {
    let names = ShardedInterner::new();
    let store = DeclarationStore::new();
    let id = store.register(DeclarationInfo::class(names.intern("app.Foo"), vec![]));
    assert_eq!(store.get_supertypes(id), Some(vec![]));

    store.set_supertypes(id, vec![TypeId(4), TypeId(2)]);
    assert_eq!(store.declared_supertypes(id), vec![TypeId(4), TypeId(2)]);

    store.set_supertypes(id, vec![TypeId(9)]);
    assert_eq!(store.declared_supertypes(id), vec![TypeId(9)]);
}

#[test]
fn test_unknown_declarations() {
    let store = DeclarationStore::new();
    let missing = DefId(42);
    assert_eq!(store.get(missing).map(|info| info.name), None);
    assert_eq!(store.qualified_name(missing), None);
    assert!(store.declared_supertypes(missing).is_empty());

    // Writes to unknown ids are ignored.
    store.set_supertypes(missing, vec![TypeId(1)]);
    assert_eq!(store.get_supertypes(missing), None);
}

#[test]
fn test_find_by_name_sees_latest_registration() {
    let names = ShardedInterner::new();
    let store = DeclarationStore::new();
    let name = names.intern("app.Foo");

    assert_eq!(store.find_by_name(name), None);
    let first = store.register(DeclarationInfo::class(name, vec![]));
    assert_eq!(store.find_by_name(name), Some(first));
    let second = store.register(DeclarationInfo::interface(name, vec![]));
    assert_eq!(store.find_by_name(name), Some(second));
    assert_eq!(store.qualified_name(first), Some(name));
}
