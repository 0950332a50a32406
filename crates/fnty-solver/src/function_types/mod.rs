//! Function-type recognition and synthesis.
//!
//! A function type is a nominal type headed by a member of the built-in
//! function family (see [`crate::builtins`]). Its type arguments are laid out
//! positionally:
//!
//! ```text
//! plain:      [P1, .., Pk, R]
//! extension:  [Receiver, P1, .., Pk, R]   + @core.ExtensionFunctionType
//! ```
//!
//! The extension variant shares the family with the plain one; only the
//! marker annotation and the extra leading argument tell them apart. At the
//! API boundary that encoding is surfaced as [`FunctionTypeShape`].
//!
//! All queries go through [`FunctionTypes`], which bundles the three
//! collaborators they read: the type database, the declaration resolver and
//! the built-in registry.

mod classify;
mod codec;
mod construct;
mod decompose;
mod layout;

pub use layout::{FunctionTypeLayout, function_type_argument_projections};

use crate::builtins::{BuiltinRegistry, FunctionKind, RegistryError};
use crate::db::TypeDatabase;
use crate::def::DeclarationResolver;
use crate::types::{AnnotationSetId, TypeId, TypeProjection};
use fnty_common::interner::Atom;
use thiserror::Error;

/// Plain vs. receiver-extended function type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionTypeShape {
    Plain,
    Extension(TypeId),
}

impl FunctionTypeShape {
    pub const fn from_receiver(receiver: Option<TypeId>) -> Self {
        match receiver {
            Some(receiver) => Self::Extension(receiver),
            None => Self::Plain,
        }
    }

    pub const fn receiver(self) -> Option<TypeId> {
        match self {
            Self::Plain => None,
            Self::Extension(receiver) => Some(receiver),
        }
    }

    pub const fn is_extension(self) -> bool {
        matches!(self, Self::Extension(_))
    }
}

/// Input of [`FunctionTypes::construct`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionTypeParts {
    /// `Function` or `SuspendFunction`
    pub kind: FunctionKind,
    pub shape: FunctionTypeShape,
    pub parameters: Vec<TypeId>,
    /// Optional source-level names, one slot per parameter
    pub parameter_names: Option<Vec<Option<Atom>>>,
    pub return_type: TypeId,
    /// Annotations of the resulting type; the extension marker is added when needed
    pub annotations: AnnotationSetId,
}

impl FunctionTypeParts {
    pub fn new(parameters: Vec<TypeId>, return_type: TypeId) -> Self {
        Self {
            kind: FunctionKind::Function,
            shape: FunctionTypeShape::Plain,
            parameters,
            parameter_names: None,
            return_type,
            annotations: AnnotationSetId::EMPTY,
        }
    }

    pub fn with_receiver(mut self, receiver: TypeId) -> Self {
        self.shape = FunctionTypeShape::Extension(receiver);
        self
    }

    pub fn with_kind(mut self, kind: FunctionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn suspend(self) -> Self {
        self.with_kind(FunctionKind::SuspendFunction)
    }

    pub fn with_parameter_names(mut self, names: Vec<Option<Atom>>) -> Self {
        self.parameter_names = Some(names);
        self
    }

    pub fn with_annotations(mut self, annotations: AnnotationSetId) -> Self {
        self.annotations = annotations;
        self
    }

    /// Arity of the family member this will be built on (receiver included).
    ///
    /// # Errors
    ///
    /// [`FunctionTypeError::ArityOverflow`] when the count does not fit in `u32`.
    pub fn arity(&self) -> Result<u32, FunctionTypeError> {
        let parameters = self.parameters.len();
        parameters
            .checked_add(usize::from(self.shape.is_extension()))
            .and_then(|arity| u32::try_from(arity).ok())
            .ok_or(FunctionTypeError::ArityOverflow { parameters })
    }
}

/// Decomposed view of a built-in function type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionTypeView {
    pub kind: FunctionKind,
    pub arity: u32,
    pub shape: FunctionTypeShape,
    pub parameters: Vec<TypeProjection>,
    pub return_type: TypeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionTypeError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("cannot construct a {0} type; only Function and SuspendFunction types are constructible")]
    UnsupportedKind(FunctionKind),

    #[error("{names} parameter names given for {parameters} parameters")]
    ParameterNameCountMismatch { parameters: usize, names: usize },

    #[error("{parameters} parameters exceed the largest representable arity")]
    ArityOverflow { parameters: usize },
}

/// Function-type queries over one type graph.
///
/// Cheap to build and `Copy`; holds only borrowed collaborators and no
/// per-query state, so one instance may be shared by any number of threads.
#[derive(Clone, Copy)]
pub struct FunctionTypes<'a> {
    db: &'a dyn TypeDatabase,
    decls: &'a dyn DeclarationResolver,
    builtins: &'a dyn BuiltinRegistry,
}

impl<'a> FunctionTypes<'a> {
    pub fn new(
        db: &'a dyn TypeDatabase,
        decls: &'a dyn DeclarationResolver,
        builtins: &'a dyn BuiltinRegistry,
    ) -> Self {
        Self {
            db,
            decls,
            builtins,
        }
    }
}
