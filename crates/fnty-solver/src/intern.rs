//! Type interning.
//!
//! Converts `TypeData` payloads, argument lists and annotation sets into
//! dense `u32` handles. Structurally equal values get equal handles, so type
//! identity is a plain integer comparison and can key a visited set.

use crate::types::{
    AnnotationSet, AnnotationSetId, ProjectionListId, TypeData, TypeId, TypeProjection,
};
use dashmap::DashMap;
use fnty_common::interner::{Atom, ShardedInterner};
use rustc_hash::FxBuildHasher;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

/// Append-only table handing out dense ids for deduplicated values.
///
/// Id 0 is the value the table was created with. Lookups of known values go
/// through the `DashMap`; new values are appended while holding the table
/// lock, which is also what makes the re-check after a miss sound.
struct InternTable<K> {
    ids: DashMap<K, u32, FxBuildHasher>,
    values: RwLock<Vec<K>>,
    name: &'static str,
}

impl<K> InternTable<K>
where
    K: Hash + Eq + Clone,
{
    fn with_zero(name: &'static str, zero: K) -> Self {
        let ids = DashMap::with_hasher(FxBuildHasher);
        ids.insert(zero.clone(), 0);
        InternTable {
            ids,
            values: RwLock::new(vec![zero]),
            name,
        }
    }

    /// Id of the value equal to `key`, calling `make` to build the stored
    /// value only when it is new.
    fn intern_with<Q>(&self, key: &Q, make: impl FnOnce() -> K) -> u32
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(id) = self.ids.get(key) {
            return *id;
        }

        let mut values = self.write();
        if let Some(id) = self.ids.get(key) {
            return *id;
        }

        let id = values.len() as u32;
        let value = make();
        values.push(value.clone());
        self.ids.insert(value, id);
        id
    }

    fn get(&self, id: u32) -> Option<K> {
        self.read().get(id as usize).cloned()
    }

    fn zero(&self) -> K {
        self.read()[0].clone()
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<K>> {
        self.values
            .read()
            .unwrap_or_else(|_| panic!("{} table lock poisoned", self.name))
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<K>> {
        self.values
            .write()
            .unwrap_or_else(|_| panic!("{} table lock poisoned", self.name))
    }
}

/// Type interning table, safe to share between threads.
///
/// `TypeId(0)` is the error type; user types start at
/// [`TypeId::FIRST_USER`]. Argument lists and annotation sets are interned
/// in side tables whose id 0 is the empty list/set.
pub struct TypeInterner {
    /// Qualified names and identifiers
    pub string_interner: ShardedInterner,
    types: InternTable<TypeData>,
    projection_lists: InternTable<Arc<[TypeProjection]>>,
    annotation_sets: InternTable<Arc<AnnotationSet>>,
}

impl TypeInterner {
    pub fn new() -> Self {
        let string_interner = ShardedInterner::new();
        string_interner.intern_common();
        TypeInterner {
            string_interner,
            types: InternTable::with_zero("type", TypeData::Error),
            projection_lists: InternTable::with_zero("projection list", Arc::from(Vec::new())),
            annotation_sets: InternTable::with_zero(
                "annotation set",
                Arc::new(AnnotationSet::new()),
            ),
        }
    }

    pub fn intern_string(&self, s: &str) -> Atom {
        self.string_interner.intern(s)
    }

    /// Resolve an Atom into an owned `String`.
    pub fn resolve_atom(&self, atom: Atom) -> String {
        self.string_interner.resolve(atom).to_string()
    }

    pub fn resolve_atom_ref(&self, atom: Atom) -> Arc<str> {
        self.string_interner.resolve(atom)
    }

    /// The list behind `id`; unknown ids read as the empty list.
    pub fn projection_list(&self, id: ProjectionListId) -> Arc<[TypeProjection]> {
        self.projection_lists
            .get(id.0)
            .unwrap_or_else(|| self.projection_lists.zero())
    }

    pub fn intern_projection_list(&self, projections: Vec<TypeProjection>) -> ProjectionListId {
        ProjectionListId(
            self.projection_lists
                .intern_with(projections.as_slice(), || Arc::from(projections.as_slice())),
        )
    }

    /// The set behind `id`; unknown ids read as the empty set.
    pub fn annotation_set(&self, id: AnnotationSetId) -> Arc<AnnotationSet> {
        self.annotation_sets
            .get(id.0)
            .unwrap_or_else(|| self.annotation_sets.zero())
    }

    pub fn intern_annotation_set(&self, set: AnnotationSet) -> AnnotationSetId {
        AnnotationSetId(self.annotation_sets.intern_with(&set, || Arc::new(set.clone())))
    }

    /// Intern a type payload. Equal payloads always yield the same `TypeId`.
    pub fn intern(&self, data: TypeData) -> TypeId {
        TypeId(self.types.intern_with(&data, || data))
    }

    /// The payload of `id`, `None` for ids this interner never handed out.
    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        self.types.get(id.0)
    }

    /// Number of interned types, the error type included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether only the error type has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= TypeId::FIRST_USER as usize
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
