//! Type representation for the solver.
//!
//! Types are interned: a `TypeId` is a lightweight handle and two types are
//! the same type exactly when their ids are equal. `TypeData` is the interned
//! payload. Argument lists and annotation sets are interned separately so
//! that `TypeData` stays `Copy`.

use crate::def::DefId;
use fnty_common::interner::Atom;
use serde::Serialize;

/// Interned type handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    /// The error type. Has no declaration, no arguments and no annotations.
    pub const ERROR: TypeId = TypeId(0);

    /// First id handed out for interned user types.
    pub const FIRST_USER: u32 = 1;

    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }
}

/// Interned list of type-argument projections. Id 0 is the empty list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectionListId(pub u32);

impl ProjectionListId {
    pub const EMPTY: Self = Self(0);
}

/// Interned annotation set. Id 0 is the empty set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnnotationSetId(pub u32);

impl AnnotationSetId {
    pub const EMPTY: Self = Self(0);
}

// =============================================================================
// Projections
// =============================================================================

/// Use-site variance of a type argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    Invariant,
    /// `out T`
    Out,
    /// `in T`
    In,
}

/// One entry of a type's ordered argument list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeProjection {
    /// A variance-tagged type argument.
    Type { variance: Variance, type_id: TypeId },
    /// A wildcard (`*`). `bound` is the implied upper bound and stands in
    /// for the projection's type wherever one is required.
    Star { bound: TypeId },
}

impl TypeProjection {
    /// Invariant projection of `type_id`. Every argument of a constructed
    /// function type uses this form.
    pub const fn invariant(type_id: TypeId) -> Self {
        Self::Type {
            variance: Variance::Invariant,
            type_id,
        }
    }

    pub const fn with_variance(variance: Variance, type_id: TypeId) -> Self {
        Self::Type { variance, type_id }
    }

    pub const fn star(bound: TypeId) -> Self {
        Self::Star { bound }
    }

    /// The projected type, or the bound of a wildcard.
    pub const fn type_id(&self) -> TypeId {
        match *self {
            Self::Type { type_id, .. } => type_id,
            Self::Star { bound } => bound,
        }
    }

    /// The variance tag, `None` for a wildcard.
    pub const fn variance(&self) -> Option<Variance> {
        match *self {
            Self::Type { variance, .. } => Some(variance),
            Self::Star { .. } => None,
        }
    }

    pub const fn is_star(&self) -> bool {
        matches!(self, Self::Star { .. })
    }
}

// =============================================================================
// Annotations
// =============================================================================

/// Constant payload value of an annotation argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationArgument {
    String(Atom),
    Int(i64),
    Bool(bool),
}

/// A single annotation entry, identified by its qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    /// Declaration of the annotation class, when it is known to the store.
    pub class: Option<DefId>,
    pub qualified_name: Atom,
    pub arguments: Vec<(Atom, AnnotationArgument)>,
}

impl Annotation {
    /// An annotation with an empty payload.
    pub fn marker(class: DefId, qualified_name: Atom) -> Self {
        Self {
            class: Some(class),
            qualified_name,
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, name: Atom, value: AnnotationArgument) -> Self {
        self.arguments.push((name, value));
        self
    }

    pub fn argument(&self, name: Atom) -> Option<&AnnotationArgument> {
        self.arguments
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }
}

/// Ordered annotation set keyed by qualified name.
///
/// A qualified name occurs at most once; adding a name that is already
/// present returns an equal set. Sets are values: every "mutation" returns a
/// new set and leaves the receiver untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnnotationSet {
    entries: Vec<Annotation>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from entries, keeping the first entry for each qualified name.
    pub fn from_entries(entries: impl IntoIterator<Item = Annotation>) -> Self {
        entries
            .into_iter()
            .fold(Self::new(), |set, entry| set.with_added(entry))
    }

    pub fn find(&self, qualified_name: Atom) -> Option<&Annotation> {
        self.entries
            .iter()
            .find(|entry| entry.qualified_name == qualified_name)
    }

    pub fn contains(&self, qualified_name: Atom) -> bool {
        self.find(qualified_name).is_some()
    }

    /// A copy of this set with `entry` appended, unless its qualified name is
    /// already present.
    pub fn with_added(&self, entry: Annotation) -> Self {
        if self.contains(entry.qualified_name) {
            return self.clone();
        }
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(entry);
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// TypeData
// =============================================================================

/// A nominal type: a declaration applied to type arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassType {
    pub def: DefId,
    pub arguments: ProjectionListId,
    pub annotations: AnnotationSetId,
    pub nullable: bool,
}

/// A reference to a type parameter. Carries no declaration symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeParamInfo {
    pub name: Atom,
    pub annotations: AnnotationSetId,
    pub nullable: bool,
}

/// Interned type payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Class(ClassType),
    TypeParameter(TypeParamInfo),
    Error,
}

impl TypeData {
    /// The declaration symbol heading this type, if any.
    pub const fn def_id(&self) -> Option<DefId> {
        match self {
            Self::Class(class) => Some(class.def),
            Self::TypeParameter(_) | Self::Error => None,
        }
    }

    pub const fn arguments(&self) -> ProjectionListId {
        match self {
            Self::Class(class) => class.arguments,
            Self::TypeParameter(_) | Self::Error => ProjectionListId::EMPTY,
        }
    }

    pub const fn annotations(&self) -> AnnotationSetId {
        match self {
            Self::Class(class) => class.annotations,
            Self::TypeParameter(param) => param.annotations,
            Self::Error => AnnotationSetId::EMPTY,
        }
    }

    pub const fn is_nullable(&self) -> bool {
        match self {
            Self::Class(class) => class.nullable,
            Self::TypeParameter(param) => param.nullable,
            Self::Error => false,
        }
    }

    /// The same type with its annotation set replaced.
    pub const fn with_annotations(self, annotations: AnnotationSetId) -> Self {
        match self {
            Self::Class(class) => Self::Class(ClassType {
                annotations,
                ..class
            }),
            Self::TypeParameter(param) => Self::TypeParameter(TypeParamInfo {
                annotations,
                ..param
            }),
            Self::Error => Self::Error,
        }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
