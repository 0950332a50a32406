//! Marker annotations on function types.
//!
//! - `@core.ExtensionFunctionType` on a function type says its first type
//!   argument is a receiver.
//! - `@core.ParameterName(name = "x")` on a parameter type records the
//!   source-level name of that parameter.
//!
//! Both are added with a presence check, so applying either twice yields
//! the same annotation set as applying it once.

use super::FunctionTypes;
use crate::def::DefId;
use crate::types::{Annotation, AnnotationArgument, AnnotationSetId, TypeId};
use fnty_common::interner::Atom;
use fnty_common::names;

impl<'a> FunctionTypes<'a> {
    fn extension_marker_name(&self) -> Atom {
        self.db.intern_string(names::EXTENSION_FUNCTION_TYPE)
    }

    fn parameter_name_marker_name(&self) -> Atom {
        self.db.intern_string(names::PARAMETER_NAME)
    }

    /// Whether `type_id` carries the extension marker.
    pub fn has_extension_marker(&self, type_id: TypeId) -> bool {
        self.db
            .type_annotations(type_id)
            .contains(self.extension_marker_name())
    }

    pub fn annotations_have_extension_marker(&self, annotations: AnnotationSetId) -> bool {
        self.db
            .annotation_set(annotations)
            .contains(self.extension_marker_name())
    }

    /// `annotations` plus an extension marker of class `marker` with an
    /// empty payload; `annotations` itself when the marker is already present.
    pub fn with_extension_marker(
        &self,
        annotations: AnnotationSetId,
        marker: DefId,
    ) -> AnnotationSetId {
        let name = self.extension_marker_name();
        let set = self.db.annotation_set(annotations);
        if set.contains(name) {
            return annotations;
        }
        self.db
            .intern_annotation_set(set.with_added(Annotation::marker(marker, name)))
    }

    /// `annotations` plus `@ParameterName(name = parameter_name)`, unless a
    /// parameter name is already recorded.
    pub fn with_parameter_name(
        &self,
        annotations: AnnotationSetId,
        parameter_name: Atom,
    ) -> AnnotationSetId {
        let name = self.parameter_name_marker_name();
        let set = self.db.annotation_set(annotations);
        if set.contains(name) {
            return annotations;
        }
        let entry = Annotation::marker(self.builtins.parameter_name_marker(), name).with_argument(
            self.db.intern_string(names::PARAMETER_NAME_ARGUMENT),
            AnnotationArgument::String(parameter_name),
        );
        self.db.intern_annotation_set(set.with_added(entry))
    }

    /// The parameter name recorded on `type_id`.
    ///
    /// `None` when no name is recorded, when the payload is not a string, or
    /// when the string is not a valid identifier.
    pub fn parameter_name_of(&self, type_id: TypeId) -> Option<Atom> {
        let set = self.db.type_annotations(type_id);
        let annotation = set.find(self.parameter_name_marker_name())?;
        let argument = annotation.argument(self.db.intern_string(names::PARAMETER_NAME_ARGUMENT))?;
        match *argument {
            AnnotationArgument::String(value) => {
                names::is_identifier(&self.db.resolve_atom_ref(value)).then_some(value)
            }
            _ => None,
        }
    }
}
