//! Positional layout of function type arguments.
//!
//! Constructor and decomposer both go through [`FunctionTypeLayout`] so the
//! two sides cannot disagree about where the receiver, parameters and
//! return type live.

use crate::types::{TypeId, TypeProjection};
use std::ops::Range;

/// Slot assignment for an argument list `[receiver?, P1, .., Pk, R]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FunctionTypeLayout {
    has_receiver: bool,
    argument_count: usize,
}

impl FunctionTypeLayout {
    /// Layout for `parameter_count` parameters, plus the receiver slot if any.
    pub const fn new(has_receiver: bool, parameter_count: usize) -> Self {
        Self {
            has_receiver,
            argument_count: parameter_count + has_receiver as usize + 1,
        }
    }

    /// Layout of an existing argument list, `None` when the list has no
    /// room for the receiver (if any) and the return slot.
    pub const fn from_argument_count(argument_count: usize, has_receiver: bool) -> Option<Self> {
        if argument_count < has_receiver as usize + 1 {
            return None;
        }
        Some(Self {
            has_receiver,
            argument_count,
        })
    }

    pub const fn has_receiver(self) -> bool {
        self.has_receiver
    }

    pub const fn argument_count(self) -> usize {
        self.argument_count
    }

    pub const fn parameter_count(self) -> usize {
        self.return_index() - self.first_parameter_index()
    }

    /// Arity of the family member: parameters plus receiver.
    pub const fn arity(self) -> usize {
        self.argument_count - 1
    }

    pub const fn receiver_index(self) -> Option<usize> {
        if self.has_receiver { Some(0) } else { None }
    }

    pub const fn first_parameter_index(self) -> usize {
        self.has_receiver as usize
    }

    pub const fn return_index(self) -> usize {
        self.argument_count - 1
    }

    pub const fn parameter_range(self) -> Range<usize> {
        self.first_parameter_index()..self.return_index()
    }
}

/// The argument projections of a function type, all invariant.
pub fn function_type_argument_projections(
    receiver: Option<TypeId>,
    parameters: &[TypeId],
    return_type: TypeId,
) -> Vec<TypeProjection> {
    let layout = FunctionTypeLayout::new(receiver.is_some(), parameters.len());
    let mut arguments = Vec::with_capacity(layout.argument_count());
    arguments.extend(receiver.map(TypeProjection::invariant));
    arguments.extend(parameters.iter().copied().map(TypeProjection::invariant));
    arguments.push(TypeProjection::invariant(return_type));
    arguments
}

#[cfg(test)]
#[path = "../../tests/layout_tests.rs"]
mod tests;
