//! Type database abstraction.
//!
//! Every query in this crate reads and builds types through
//! `&dyn TypeDatabase`, never through a concrete table, so tests and
//! embedders can supply their own storage.

use crate::def::DefId;
use crate::intern::TypeInterner;
use crate::types::{
    AnnotationSet, AnnotationSetId, ClassType, ProjectionListId, TypeData, TypeId, TypeParamInfo,
    TypeProjection,
};
use fnty_common::interner::Atom;
use std::sync::Arc;

/// Query interface over interned types.
pub trait TypeDatabase: Send + Sync {
    fn intern(&self, data: TypeData) -> TypeId;
    fn lookup(&self, id: TypeId) -> Option<TypeData>;
    fn projection_list(&self, id: ProjectionListId) -> Arc<[TypeProjection]>;
    fn intern_projection_list(&self, projections: Vec<TypeProjection>) -> ProjectionListId;
    fn annotation_set(&self, id: AnnotationSetId) -> Arc<AnnotationSet>;
    fn intern_annotation_set(&self, set: AnnotationSet) -> AnnotationSetId;
    fn intern_string(&self, s: &str) -> Atom;
    fn resolve_atom_ref(&self, atom: Atom) -> Arc<str>;

    /// Intern `def<arguments>` with the given annotations and nullability.
    fn class_type(
        &self,
        def: DefId,
        arguments: Vec<TypeProjection>,
        annotations: AnnotationSetId,
        nullable: bool,
    ) -> TypeId {
        let arguments = self.intern_projection_list(arguments);
        self.intern(TypeData::Class(ClassType {
            def,
            arguments,
            annotations,
            nullable,
        }))
    }

    /// Intern a non-nullable, unannotated type with no arguments.
    fn simple_class_type(&self, def: DefId) -> TypeId {
        self.class_type(def, Vec::new(), AnnotationSetId::EMPTY, false)
    }

    /// Intern a reference to the type parameter `name`.
    fn type_parameter(&self, name: &str) -> TypeId {
        let name = self.intern_string(name);
        self.intern(TypeData::TypeParameter(TypeParamInfo {
            name,
            annotations: AnnotationSetId::EMPTY,
            nullable: false,
        }))
    }

    /// The argument projections of `id`; empty for types without arguments.
    fn type_arguments(&self, id: TypeId) -> Arc<[TypeProjection]> {
        let arguments = self
            .lookup(id)
            .map(|data| data.arguments())
            .unwrap_or(ProjectionListId::EMPTY);
        self.projection_list(arguments)
    }

    /// The annotation set carried by `id`.
    fn type_annotations(&self, id: TypeId) -> Arc<AnnotationSet> {
        let annotations = self
            .lookup(id)
            .map(|data| data.annotations())
            .unwrap_or(AnnotationSetId::EMPTY);
        self.annotation_set(annotations)
    }

    /// `id` with its annotations replaced by `annotations`.
    fn with_annotations(&self, id: TypeId, annotations: AnnotationSetId) -> TypeId {
        match self.lookup(id) {
            Some(data) if data.annotations() != annotations => {
                self.intern(data.with_annotations(annotations))
            }
            _ => id,
        }
    }
}

impl TypeDatabase for TypeInterner {
    fn intern(&self, data: TypeData) -> TypeId {
        TypeInterner::intern(self, data)
    }

    fn lookup(&self, id: TypeId) -> Option<TypeData> {
        TypeInterner::lookup(self, id)
    }

    fn projection_list(&self, id: ProjectionListId) -> Arc<[TypeProjection]> {
        TypeInterner::projection_list(self, id)
    }

    fn intern_projection_list(&self, projections: Vec<TypeProjection>) -> ProjectionListId {
        TypeInterner::intern_projection_list(self, projections)
    }

    fn annotation_set(&self, id: AnnotationSetId) -> Arc<AnnotationSet> {
        TypeInterner::annotation_set(self, id)
    }

    fn intern_annotation_set(&self, set: AnnotationSet) -> AnnotationSetId {
        TypeInterner::intern_annotation_set(self, set)
    }

    fn intern_string(&self, s: &str) -> Atom {
        TypeInterner::intern_string(self, s)
    }

    fn resolve_atom_ref(&self, atom: Atom) -> Arc<str> {
        TypeInterner::resolve_atom_ref(self, atom)
    }
}
