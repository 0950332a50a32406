//! String interner for qualified names and identifiers.
//!
//! Qualified names (`core.Function2`, `core.ExtensionFunctionType`) and
//! synthesized identifiers (`p1`, `p2`, ...) are compared constantly while
//! classifying types. Interning them into u32 handles (Atoms) turns those
//! comparisons into integer comparisons and removes duplicate allocations.

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use std::sync::{Arc, RwLock};

use crate::names;

/// An interned string identifier.
///
/// Atoms are cheap to copy and compare. To get the string back, use
/// [`ShardedInterner::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// The empty string.
    pub const NONE: Atom = Atom(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Package and marker names every environment interns.
const COMMON_STRINGS: &[&str] = &[
    names::BUILTINS_PACKAGE,
    names::COROUTINES_PACKAGE,
    names::REFLECT_PACKAGE,
    names::EXTENSION_FUNCTION_TYPE,
    names::PARAMETER_NAME,
    names::PARAMETER_NAME_ARGUMENT,
];

/// Concurrent string interner.
///
/// Atoms are dense indices into an append-only string table. The reverse
/// map is a `DashMap`, so looking up a string that is already interned only
/// touches one of its shards; the table lock is taken for the first
/// interning of a string and for resolution.
///
/// # Example
/// ```
/// use fnty_common::interner::ShardedInterner;
/// let interner = ShardedInterner::new();
/// let a1 = interner.intern("core.Function1");
/// let a2 = interner.intern("core.Function1");
/// assert_eq!(a1, a2);
/// assert_eq!(&*interner.resolve(a1), "core.Function1");
/// ```
pub struct ShardedInterner {
    atoms: DashMap<Arc<str>, Atom, FxBuildHasher>,
    strings: RwLock<Vec<Arc<str>>>,
}

impl ShardedInterner {
    /// An interner holding only the empty string, as [`Atom::NONE`].
    pub fn new() -> Self {
        let empty: Arc<str> = Arc::from("");
        let atoms = DashMap::with_hasher(FxBuildHasher);
        atoms.insert(Arc::clone(&empty), Atom::NONE);
        ShardedInterner {
            atoms,
            strings: RwLock::new(vec![empty]),
        }
    }

    /// Intern `s`, returning the existing atom if it was seen before.
    pub fn intern(&self, s: &str) -> Atom {
        if let Some(atom) = self.atoms.get(s) {
            return *atom;
        }

        let mut strings = self
            .strings
            .write()
            .expect("interner string table lock poisoned");
        // Re-check under the table lock: every insertion happens while it is held.
        if let Some(atom) = self.atoms.get(s) {
            return *atom;
        }

        let atom = Atom(strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        strings.push(Arc::clone(&owned));
        self.atoms.insert(owned, atom);
        atom
    }

    /// The string behind `atom`; the empty string for atoms this interner
    /// never handed out.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        self.try_resolve(atom).unwrap_or_else(|| Arc::from(""))
    }

    pub fn try_resolve(&self, atom: Atom) -> Option<Arc<str>> {
        self.strings
            .read()
            .expect("interner string table lock poisoned")
            .get(atom.0 as usize)
            .cloned()
    }

    /// Number of interned strings, the empty string included.
    pub fn len(&self) -> usize {
        self.strings
            .read()
            .expect("interner string table lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Pre-intern the built-in package and marker names.
    pub fn intern_common(&self) {
        for s in COMMON_STRINGS {
            self.intern(s);
        }
    }
}

impl Default for ShardedInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;
