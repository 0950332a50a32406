//! Function-Type Recognition and Synthesis
//!
//! This crate decides whether a type denotes a callable of some arity,
//! encodes and decodes the receiver-extended variant of function types, and
//! builds and takes apart canonical function-type instances.
//!
//! It uses:
//!
//! - **Interning**: types are `TypeId` handles; identity is equality
//! - **Explicit collaborators**: the type database, the declaration resolver
//!   and the built-in registry are passed in, never global
//! - **Worklist traversal**: supertype closures are walked without recursion
//!
//! Entry point: [`FunctionTypes`].
mod builtins;
mod db;
pub mod def;
mod format;
mod function_types;
mod intern;
pub mod parameters;
pub mod types;

pub use builtins::{BuiltinRegistry, BuiltinsConfig, FunctionKind, RegistryError, StandardBuiltins};
pub use db::TypeDatabase;
pub use def::{DeclarationInfo, DeclarationResolver, DeclarationStore, DefId, DefKind};
pub use format::TypeFormatter;
pub use function_types::{
    FunctionTypeError, FunctionTypeLayout, FunctionTypeParts, FunctionTypeShape, FunctionTypeView,
    FunctionTypes, function_type_argument_projections,
};
pub use intern::TypeInterner;
pub use parameters::{CallableId, ValueParameter, materialize_parameters};
pub use types::{
    Annotation, AnnotationArgument, AnnotationSet, AnnotationSetId, ClassType, ProjectionListId,
    TypeData, TypeId, TypeParamInfo, TypeProjection, Variance,
};

#[cfg(test)]
#[path = "../tests/test_env.rs"]
mod test_env;
#[cfg(test)]
#[path = "../tests/classify_tests.rs"]
mod classify_tests;
#[cfg(test)]
#[path = "../tests/codec_tests.rs"]
mod codec_tests;
#[cfg(test)]
#[path = "../tests/construct_decompose_tests.rs"]
mod construct_decompose_tests;
#[cfg(test)]
#[path = "../tests/concurrent_tests.rs"]
mod concurrent_tests;
