//! Declaration identifiers and storage.
//!
//! A `DefId` names a nominal declaration (class, interface or annotation
//! class). Types refer to their head declaration by `DefId`; the store maps
//! it back to the declaration's qualified name and its declared supertypes.
//!
//! Supertypes are recorded as `TypeId`s, which usually have to be interned
//! after the declaration itself exists (a class may mention its own type
//! parameters or even itself in a supertype's arguments). The store therefore
//! allows supertypes to be attached after registration.

use crate::types::TypeId;
use dashmap::DashMap;
use fnty_common::interner::Atom;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

// =============================================================================
// DefId
// =============================================================================

/// Declaration identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefId(pub u32);

impl DefId {
    /// First allocated `DefId`; `0` is never handed out.
    pub const FIRST_VALID: u32 = 1;
}

// =============================================================================
// DefKind
// =============================================================================

/// Kind of nominal declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefKind {
    Class,
    Interface,
    /// Annotation class; used as the class of annotation entries.
    AnnotationClass,
}

// =============================================================================
// DeclarationInfo
// =============================================================================

/// Everything the store knows about one declaration.
#[derive(Clone, Debug)]
pub struct DeclarationInfo {
    pub kind: DefKind,

    /// Fully qualified name, e.g. `core.Function2`
    pub name: Atom,

    /// Names of the declared type parameters, in order
    pub type_params: Vec<Atom>,

    /// Declared supertypes, in declaration order
    pub supertypes: Vec<TypeId>,
}

impl DeclarationInfo {
    const fn new(kind: DefKind, name: Atom, type_params: Vec<Atom>) -> Self {
        Self {
            kind,
            name,
            type_params,
            supertypes: Vec::new(),
        }
    }

    pub const fn class(name: Atom, type_params: Vec<Atom>) -> Self {
        Self::new(DefKind::Class, name, type_params)
    }

    pub const fn interface(name: Atom, type_params: Vec<Atom>) -> Self {
        Self::new(DefKind::Interface, name, type_params)
    }

    pub const fn annotation_class(name: Atom) -> Self {
        Self::new(DefKind::AnnotationClass, name, Vec::new())
    }

    pub fn with_supertypes(mut self, supertypes: Vec<TypeId>) -> Self {
        self.supertypes = supertypes;
        self
    }
}

// =============================================================================
// DeclarationResolver
// =============================================================================

/// Read access to declarations, as needed by type queries.
pub trait DeclarationResolver: Send + Sync {
    /// Qualified name of `def`, `None` if the declaration is unknown.
    fn qualified_name(&self, def: DefId) -> Option<Atom>;

    /// Declared supertypes of `def` in declaration order.
    fn declared_supertypes(&self, def: DefId) -> Vec<TypeId>;
}

// =============================================================================
// DeclarationStore
// =============================================================================

/// Thread-safe storage for declarations.
///
/// Uses `DashMap` for concurrent access from multiple checking threads.
///
/// ## Usage
///
/// ```ignore
/// let store = DeclarationStore::new();
/// let foo = store.register(DeclarationInfo::class(interner.intern_string("app.Foo"), vec![]));
/// store.set_supertypes(foo, vec![function1_of_int_bool]);
/// ```
pub struct DeclarationStore {
    /// `DefId` -> `DeclarationInfo` mapping
    declarations: DashMap<DefId, DeclarationInfo>,

    /// Qualified name -> `DefId`
    by_name: DashMap<Atom, DefId>,

    /// Next available `DefId`
    next_id: AtomicU32,
}

impl Default for DeclarationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationStore {
    pub fn new() -> Self {
        Self {
            declarations: DashMap::new(),
            by_name: DashMap::new(),
            next_id: AtomicU32::new(DefId::FIRST_VALID),
        }
    }

    fn allocate(&self) -> DefId {
        DefId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a new declaration and return its `DefId`.
    ///
    /// A later declaration with the same qualified name shadows the earlier
    /// one in [`find_by_name`](Self::find_by_name); both stay addressable by id.
    pub fn register(&self, info: DeclarationInfo) -> DefId {
        let id = self.allocate();
        trace!(
            def_id = %id.0,
            kind = ?info.kind,
            "DeclarationStore::register"
        );
        self.by_name.insert(info.name, id);
        self.declarations.insert(id, info);
        id
    }

    pub fn get(&self, id: DefId) -> Option<DeclarationInfo> {
        self.declarations.get(&id).map(|r| r.clone())
    }

    pub fn get_kind(&self, id: DefId) -> Option<DefKind> {
        self.declarations.get(&id).map(|r| r.kind)
    }

    pub fn get_name(&self, id: DefId) -> Option<Atom> {
        self.declarations.get(&id).map(|r| r.name)
    }

    pub fn get_type_params(&self, id: DefId) -> Option<Vec<Atom>> {
        self.declarations.get(&id).map(|r| r.type_params.clone())
    }

    pub fn get_supertypes(&self, id: DefId) -> Option<Vec<TypeId>> {
        self.declarations.get(&id).map(|r| r.supertypes.clone())
    }

    /// Replace the declared supertypes of `id`.
    pub fn set_supertypes(&self, id: DefId, supertypes: Vec<TypeId>) {
        if let Some(mut entry) = self.declarations.get_mut(&id) {
            entry.supertypes = supertypes;
        }
    }

    /// Look up a declaration by qualified name.
    pub fn find_by_name(&self, name: Atom) -> Option<DefId> {
        self.by_name.get(&name).map(|r| *r)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl DeclarationResolver for DeclarationStore {
    fn qualified_name(&self, def: DefId) -> Option<Atom> {
        self.get_name(def)
    }

    fn declared_supertypes(&self, def: DefId) -> Vec<TypeId> {
        self.get_supertypes(def).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../tests/def_tests.rs"]
mod tests;
