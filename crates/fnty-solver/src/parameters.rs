//! Value parameters synthesized for function-type callables.
//!
//! When a function type is turned into a concrete callable (the `invoke`
//! member of a `FunctionN` interface, a lambda's signature), its parameters
//! have no source declaration to take names or flags from. They get
//! positional names `p1, p2, ...` and every flag off.

use crate::db::TypeDatabase;
use crate::types::{TypeId, TypeProjection};
use fnty_common::interner::Atom;

/// Handle of the callable declaration that owns a parameter list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallableId(pub u32);

/// A formal value parameter of a callable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueParameter {
    pub owner: CallableId,
    pub name: Atom,
    /// Ordinal position; determines call-site argument binding.
    pub index: u32,
    pub type_id: TypeId,
    pub declares_default_value: bool,
    pub is_crossinline: bool,
    pub is_noinline: bool,
    pub vararg_element_type: Option<TypeId>,
    pub span: Option<(u32, u32)>,
}

/// Synthesize one parameter per projection, in order.
///
/// Parameter `i` (0-based) is named `p{i + 1}`, has ordinal `i` and the
/// projection's type; a wildcard contributes its bound.
///
/// # Panics
///
/// If there are more projections than a `u32` ordinal can address. The
/// projections of a registry-built function type are bounded by its arity.
pub fn materialize_parameters(
    db: &dyn TypeDatabase,
    owner: CallableId,
    projections: &[TypeProjection],
) -> Vec<ValueParameter> {
    assert!(
        u32::try_from(projections.len()).is_ok(),
        "{} parameters exceed the ordinal range",
        projections.len()
    );
    (0u32..)
        .zip(projections)
        .map(|(index, projection)| ValueParameter {
            owner,
            name: db.intern_string(&format!("p{}", index + 1)),
            index,
            type_id: projection.type_id(),
            declares_default_value: false,
            is_crossinline: false,
            is_noinline: false,
            vararg_element_type: None,
            span: None,
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/parameters_tests.rs"]
mod tests;
