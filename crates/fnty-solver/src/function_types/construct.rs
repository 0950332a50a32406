//! Function-type construction.

use super::{FunctionTypeError, FunctionTypeParts, FunctionTypeShape, FunctionTypes};
use super::layout::function_type_argument_projections;
use crate::types::{AnnotationSetId, TypeId};
use fnty_common::interner::Atom;
use fnty_common::names;
use tracing::debug;

impl<'a> FunctionTypes<'a> {
    /// Build `FunctionN<[receiver,] P1, .., Pk, R>` with `N = k (+1 with a receiver)`.
    ///
    /// With a receiver the result carries the extension marker on top of
    /// `annotations`; without one `annotations` are used as given.
    pub fn create_function_type(
        &self,
        annotations: AnnotationSetId,
        receiver: Option<TypeId>,
        parameters: &[TypeId],
        return_type: TypeId,
    ) -> Result<TypeId, FunctionTypeError> {
        self.construct(&FunctionTypeParts {
            shape: FunctionTypeShape::from_receiver(receiver),
            annotations,
            ..FunctionTypeParts::new(parameters.to_vec(), return_type)
        })
    }

    /// Build the canonical function type described by `parts`.
    ///
    /// The result is non-nullable and every argument is an invariant
    /// projection. Parameter names, when given, are recorded as
    /// `@ParameterName` on the corresponding parameter types; names that are
    /// not identifiers are dropped.
    ///
    /// # Errors
    ///
    /// - [`FunctionTypeError::UnsupportedKind`] for reflective kinds
    /// - [`FunctionTypeError::ParameterNameCountMismatch`] when the name list
    ///   does not have one slot per parameter
    /// - [`FunctionTypeError::ArityOverflow`] when the arity does not fit in `u32`
    /// - [`FunctionTypeError::Registry`] when the registry has no family
    ///   member of the required arity
    pub fn construct(&self, parts: &FunctionTypeParts) -> Result<TypeId, FunctionTypeError> {
        if parts.kind.is_reflective() {
            return Err(FunctionTypeError::UnsupportedKind(parts.kind));
        }

        let arity = parts.arity()?;
        let parameters = self.named_parameter_types(parts)?;
        let receiver = parts.shape.receiver();
        let arguments = function_type_argument_projections(receiver, &parameters, parts.return_type);

        let class = self.builtins.function_class(parts.kind, arity)?;

        let annotations = match receiver {
            Some(_) => self.with_extension_marker(parts.annotations, self.builtins.extension_marker()),
            None => parts.annotations,
        };

        let function_type = self.db.class_type(class, arguments, annotations, false);
        debug!(
            kind = %parts.kind,
            arity,
            extension = receiver.is_some(),
            type_id = function_type.0,
            "constructed function type"
        );
        Ok(function_type)
    }

    fn named_parameter_types(
        &self,
        parts: &FunctionTypeParts,
    ) -> Result<Vec<TypeId>, FunctionTypeError> {
        let Some(parameter_names) = &parts.parameter_names else {
            return Ok(parts.parameters.clone());
        };
        if parameter_names.len() != parts.parameters.len() {
            return Err(FunctionTypeError::ParameterNameCountMismatch {
                parameters: parts.parameters.len(),
                names: parameter_names.len(),
            });
        }

        Ok(parts
            .parameters
            .iter()
            .zip(parameter_names)
            .map(|(&parameter, name)| match name {
                Some(name) if self.is_usable_parameter_name(*name) => {
                    self.with_recorded_parameter_name(parameter, *name)
                }
                _ => parameter,
            })
            .collect())
    }

    fn is_usable_parameter_name(&self, name: Atom) -> bool {
        !name.is_none() && names::is_identifier(&self.db.resolve_atom_ref(name))
    }

    fn with_recorded_parameter_name(&self, parameter: TypeId, name: Atom) -> TypeId {
        let Some(data) = self.db.lookup(parameter) else {
            return parameter;
        };
        let annotations = self.with_parameter_name(data.annotations(), name);
        self.db.with_annotations(parameter, annotations)
    }
}
