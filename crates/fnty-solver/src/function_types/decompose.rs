//! Function-type decomposition.
//!
//! Every operation here requires a direct built-in function type (plain or
//! suspend). Anything else is a caller bug and panics.

use super::layout::FunctionTypeLayout;
use super::{FunctionTypeShape, FunctionTypeView, FunctionTypes};
use crate::format::TypeFormatter;
use crate::types::{TypeId, TypeProjection};
use std::sync::Arc;

impl<'a> FunctionTypes<'a> {
    fn checked_layout(
        &self,
        type_id: TypeId,
        operation: &str,
    ) -> (Arc<[TypeProjection]>, FunctionTypeLayout) {
        assert!(
            self.is_builtin_function_type(type_id),
            "{operation} requires a function type, got `{}`",
            self.describe(type_id)
        );

        let arguments = self.db.type_arguments(type_id);
        let has_receiver = self.has_extension_marker(type_id);
        let Some(layout) = FunctionTypeLayout::from_argument_count(arguments.len(), has_receiver)
        else {
            panic!(
                "{operation}: malformed function type `{}` has {} type arguments",
                self.describe(type_id),
                arguments.len()
            );
        };
        (arguments, layout)
    }

    fn describe(&self, type_id: TypeId) -> String {
        TypeFormatter::new(self.db, self.decls).format(type_id)
    }

    /// The receiver of an extension function type, `None` for a plain one.
    ///
    /// # Panics
    ///
    /// If `type_id` is not a direct built-in function type.
    pub fn receiver_type_of(&self, type_id: TypeId) -> Option<TypeId> {
        let (arguments, layout) = self.checked_layout(type_id, "receiver_type_of");
        layout
            .receiver_index()
            .map(|index| arguments[index].type_id())
    }

    /// The return type (last type argument).
    ///
    /// # Panics
    ///
    /// If `type_id` is not a direct built-in function type.
    pub fn return_type_of(&self, type_id: TypeId) -> TypeId {
        let (arguments, layout) = self.checked_layout(type_id, "return_type_of");
        arguments[layout.return_index()].type_id()
    }

    /// The parameter projections, between the receiver slot (if any) and
    /// the return slot.
    ///
    /// # Panics
    ///
    /// If `type_id` is not a direct built-in function type.
    pub fn parameter_projections_of(&self, type_id: TypeId) -> Vec<TypeProjection> {
        let (arguments, layout) = self.checked_layout(type_id, "parameter_projections_of");
        arguments[layout.parameter_range()].to_vec()
    }

    /// The parameter types, in order.
    ///
    /// # Panics
    ///
    /// If `type_id` is not a direct built-in function type.
    pub fn parameter_types_of(&self, type_id: TypeId) -> Vec<TypeId> {
        self.parameter_projections_of(type_id)
            .iter()
            .map(TypeProjection::type_id)
            .collect()
    }

    /// All parts of a function type at once.
    ///
    /// # Panics
    ///
    /// If `type_id` is not a direct built-in function type.
    pub fn decompose(&self, type_id: TypeId) -> FunctionTypeView {
        let (arguments, layout) = self.checked_layout(type_id, "decompose");
        let (kind, arity) = self
            .function_kind_of(type_id)
            .expect("checked_layout verified a function family member");

        FunctionTypeView {
            kind,
            arity,
            shape: FunctionTypeShape::from_receiver(
                layout
                    .receiver_index()
                    .map(|index| arguments[index].type_id()),
            ),
            parameters: arguments[layout.parameter_range()].to_vec(),
            return_type: arguments[layout.return_index()].type_id(),
        }
    }
}
