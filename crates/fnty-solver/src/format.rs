//! Type formatting for diagnostics and tooling output.
//!
//! Produces fully qualified, annotation-prefixed spellings such as
//! `@core.ExtensionFunctionType core.Function2<app.Text, core.Int, core.Unit>`.

use crate::db::TypeDatabase;
use crate::def::DeclarationResolver;
use crate::types::{Annotation, AnnotationArgument, TypeData, TypeId, TypeProjection, Variance};
use std::fmt::Write;

pub struct TypeFormatter<'a> {
    db: &'a dyn TypeDatabase,
    decls: &'a dyn DeclarationResolver,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(db: &'a dyn TypeDatabase, decls: &'a dyn DeclarationResolver) -> Self {
        Self { db, decls }
    }

    pub fn format(&self, type_id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(&mut out, type_id);
        out
    }

    pub fn format_projection(&self, projection: &TypeProjection) -> String {
        let mut out = String::new();
        self.write_projection(&mut out, projection);
        out
    }

    fn write_type(&self, out: &mut String, type_id: TypeId) {
        let Some(data) = self.db.lookup(type_id) else {
            let _ = write!(out, "<unknown type #{}>", type_id.0);
            return;
        };

        for annotation in self.db.annotation_set(data.annotations()).iter() {
            self.write_annotation(out, annotation);
            out.push(' ');
        }

        match data {
            TypeData::Error => out.push_str("<error>"),
            TypeData::TypeParameter(param) => {
                out.push_str(&self.db.resolve_atom_ref(param.name));
            }
            TypeData::Class(class) => {
                match self.decls.qualified_name(class.def) {
                    Some(name) => out.push_str(&self.db.resolve_atom_ref(name)),
                    None => {
                        let _ = write!(out, "<unknown declaration #{}>", class.def.0);
                    }
                }
                let arguments = self.db.projection_list(class.arguments);
                if !arguments.is_empty() {
                    out.push('<');
                    for (i, argument) in arguments.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.write_projection(out, argument);
                    }
                    out.push('>');
                }
            }
        }

        if data.is_nullable() {
            out.push('?');
        }
    }

    fn write_projection(&self, out: &mut String, projection: &TypeProjection) {
        match *projection {
            TypeProjection::Star { .. } => out.push('*'),
            TypeProjection::Type { variance, type_id } => {
                match variance {
                    Variance::Invariant => {}
                    Variance::Out => out.push_str("out "),
                    Variance::In => out.push_str("in "),
                }
                self.write_type(out, type_id);
            }
        }
    }

    fn write_annotation(&self, out: &mut String, annotation: &Annotation) {
        out.push('@');
        out.push_str(&self.db.resolve_atom_ref(annotation.qualified_name));
        if annotation.arguments.is_empty() {
            return;
        }
        out.push('(');
        for (i, (name, value)) in annotation.arguments.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.db.resolve_atom_ref(*name));
            out.push_str(" = ");
            match value {
                AnnotationArgument::String(s) => {
                    let _ = write!(out, "{:?}", &*self.db.resolve_atom_ref(*s));
                }
                AnnotationArgument::Int(n) => {
                    let _ = write!(out, "{n}");
                }
                AnnotationArgument::Bool(b) => {
                    let _ = write!(out, "{b}");
                }
            }
        }
        out.push(')');
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
