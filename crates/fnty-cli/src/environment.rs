//! Environment files: declarations and named types to inspect.
//!
//! ```json
//! {
//!   "builtins": { "maxFunctionArity": 8 },
//!   "declarations": [
//!     { "name": "core.Int" },
//!     { "name": "app.Handler", "kind": "interface", "typeParameters": ["T"],
//!       "supertypes": ["core.Function1<T, core.Unit>"] }
//!   ],
//!   "types": {
//!     "handler": "app.Handler<core.Int>",
//!     "onClick": { "receiver": "app.View", "parameters": ["core.Int"], "returns": "core.Unit" }
//!   }
//! }
//! ```
//!
//! Type names resolve in this order: a declared qualified name, then (for
//! names without a package) a type parameter. Anything else is an error.

use crate::type_expr::{AnnotationExpr, ProjectionExpr, TypeExpr, ValueExpr, parse_type_expr};
use anyhow::{Context, Result, bail};
use fnty_common::{limits, names};
use fnty_solver::{
    Annotation, AnnotationArgument, AnnotationSet, AnnotationSetId, BuiltinsConfig,
    DeclarationInfo, DeclarationStore, DefId, DefKind, FunctionTypeParts, FunctionTypes,
    StandardBuiltins, TypeData, TypeDatabase, TypeFormatter, TypeId, TypeInterner, TypeParamInfo,
    TypeProjection,
};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

// =============================================================================
// File model
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentFile {
    pub builtins: BuiltinsConfig,
    pub declarations: Vec<DeclarationSpec>,
    pub types: IndexMap<String, TypeSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeclarationSpec {
    pub name: String,
    #[serde(default)]
    pub kind: DeclarationKind,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Type expressions, in declaration order.
    #[serde(default)]
    pub supertypes: Vec<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    #[default]
    Class,
    Interface,
    Annotation,
}

impl From<DeclarationKind> for DefKind {
    fn from(kind: DeclarationKind) -> Self {
        match kind {
            DeclarationKind::Class => DefKind::Class,
            DeclarationKind::Interface => DefKind::Interface,
            DeclarationKind::Annotation => DefKind::AnnotationClass,
        }
    }
}

/// A named type: either a type expression or a function type to construct.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Expr(String),
    Function(FunctionSpec),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FunctionSpec {
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub parameter_names: Option<Vec<Option<String>>>,
    pub returns: String,
    #[serde(default)]
    pub suspend: bool,
}

/// Reject registry configurations wider than [`limits::MAX_FUNCTION_ARITY`].
pub fn check_builtins_config(config: &BuiltinsConfig) -> Result<()> {
    if config.max_function_arity > limits::MAX_FUNCTION_ARITY {
        bail!(
            "maxFunctionArity {} exceeds the supported maximum of {}",
            config.max_function_arity,
            limits::MAX_FUNCTION_ARITY
        );
    }
    Ok(())
}

// =============================================================================
// Loaded environment
// =============================================================================

/// A type table, declaration store and built-in registry populated from an
/// [`EnvironmentFile`], plus the resolved named types.
pub struct Environment {
    pub interner: TypeInterner,
    pub store: DeclarationStore,
    pub builtins: StandardBuiltins,
    pub types: IndexMap<String, TypeId>,
}

impl Environment {
    /// Read and load an environment file. `max_arity` overrides
    /// `builtins.maxFunctionArity`.
    pub fn load(path: &Path, max_arity: Option<u32>) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut file: EnvironmentFile = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if let Some(max_arity) = max_arity {
            file.builtins.max_function_arity = max_arity;
        }
        Self::from_file(&file).with_context(|| format!("invalid environment {}", path.display()))
    }

    pub fn from_file(file: &EnvironmentFile) -> Result<Self> {
        check_builtins_config(&file.builtins)?;
        let interner = TypeInterner::new();
        let store = DeclarationStore::new();
        let builtins = StandardBuiltins::new(&interner, &store, &file.builtins);
        let mut env = Self {
            interner,
            store,
            builtins,
            types: IndexMap::new(),
        };

        // Register everything first so supertypes may refer forward.
        let defs: Vec<_> = file
            .declarations
            .iter()
            .map(|decl| env.register(decl))
            .collect();

        for (decl, def) in file.declarations.iter().zip(defs) {
            let supertypes = decl
                .supertypes
                .iter()
                .map(|source| env.resolve_source(source))
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("in supertypes of `{}`", decl.name))?;
            env.store.set_supertypes(def, supertypes);
        }

        for (name, spec) in &file.types {
            let type_id = env
                .resolve_spec(spec)
                .with_context(|| format!("in type `{name}`"))?;
            env.types.insert(name.clone(), type_id);
        }

        debug!(
            declarations = file.declarations.len(),
            types = env.types.len(),
            "environment loaded"
        );
        Ok(env)
    }

    pub fn function_types(&self) -> FunctionTypes<'_> {
        FunctionTypes::new(&self.interner, &self.store, &self.builtins)
    }

    pub fn formatter(&self) -> TypeFormatter<'_> {
        TypeFormatter::new(&self.interner, &self.store)
    }

    fn register(&self, decl: &DeclarationSpec) -> DefId {
        let name = self.interner.intern_string(&decl.name);
        let type_params = decl
            .type_parameters
            .iter()
            .map(|param| self.interner.intern_string(param))
            .collect();
        let info = match DefKind::from(decl.kind) {
            DefKind::Class => DeclarationInfo::class(name, type_params),
            DefKind::Interface => DeclarationInfo::interface(name, type_params),
            DefKind::AnnotationClass => DeclarationInfo::annotation_class(name),
        };
        self.store.register(info)
    }

    fn resolve_spec(&self, spec: &TypeSpec) -> Result<TypeId> {
        match spec {
            TypeSpec::Expr(source) => self.resolve_source(source),
            TypeSpec::Function(function) => self.construct_function(function),
        }
    }

    fn construct_function(&self, spec: &FunctionSpec) -> Result<TypeId> {
        let parameters = spec
            .parameters
            .iter()
            .map(|source| self.resolve_source(source))
            .collect::<Result<Vec<_>>>()?;
        let mut parts = FunctionTypeParts::new(parameters, self.resolve_source(&spec.returns)?);
        if let Some(receiver) = &spec.receiver {
            parts = parts.with_receiver(self.resolve_source(receiver)?);
        }
        if spec.suspend {
            parts = parts.suspend();
        }
        if let Some(names) = &spec.parameter_names {
            parts = parts.with_parameter_names(
                names
                    .iter()
                    .map(|name| name.as_deref().map(|name| self.interner.intern_string(name)))
                    .collect(),
            );
        }
        Ok(self.function_types().construct(&parts)?)
    }

    /// Parse and resolve one type expression.
    pub fn resolve_source(&self, source: &str) -> Result<TypeId> {
        let expr = parse_type_expr(source)?;
        self.resolve(&expr)
            .with_context(|| format!("while resolving `{source}`"))
    }

    fn resolve(&self, expr: &TypeExpr) -> Result<TypeId> {
        let annotations = self.resolve_annotations(&expr.annotations)?;
        let name = self.interner.intern_string(&expr.name);

        let Some(def) = self.store.find_by_name(name) else {
            if expr.name.contains('.') {
                bail!("unknown declaration `{}`", expr.name);
            }
            if !expr.arguments.is_empty() {
                bail!("type parameter `{}` cannot take type arguments", expr.name);
            }
            return Ok(self.interner.intern(TypeData::TypeParameter(TypeParamInfo {
                name,
                annotations,
                nullable: expr.nullable,
            })));
        };

        let expected = self.store.get_type_params(def).map_or(0, |params| params.len());
        if expr.arguments.len() != expected {
            bail!(
                "`{}` expects {expected} type argument(s), got {}",
                expr.name,
                expr.arguments.len()
            );
        }

        let arguments = expr
            .arguments
            .iter()
            .map(|argument| self.resolve_projection(argument))
            .collect::<Result<Vec<_>>>()?;
        Ok(self
            .interner
            .class_type(def, arguments, annotations, expr.nullable))
    }

    fn resolve_projection(&self, projection: &ProjectionExpr) -> Result<TypeProjection> {
        match projection {
            ProjectionExpr::Star => Ok(TypeProjection::star(self.star_bound())),
            ProjectionExpr::Type { variance, ty } => {
                Ok(TypeProjection::with_variance(*variance, self.resolve(ty)?))
            }
        }
    }

    /// Wildcards are bounded by `core.Any?` when it is declared, and by the
    /// error type otherwise.
    fn star_bound(&self) -> TypeId {
        let any = self
            .interner
            .intern_string(&names::qualify(names::BUILTINS_PACKAGE, "Any"));
        match self.store.find_by_name(any) {
            Some(def) => self
                .interner
                .class_type(def, Vec::new(), AnnotationSetId::EMPTY, true),
            None => TypeId::ERROR,
        }
    }

    fn resolve_annotations(&self, annotations: &[AnnotationExpr]) -> Result<AnnotationSetId> {
        let mut set = AnnotationSet::new();
        for annotation in annotations {
            let qualified_name = self.interner.intern_string(&annotation.name);
            let class = self.store.find_by_name(qualified_name);
            if class.is_none() {
                bail!("unknown annotation class `{}`", annotation.name);
            }
            let arguments = annotation
                .arguments
                .iter()
                .map(|(key, value)| (self.interner.intern_string(key), self.resolve_value(value)))
                .collect();
            set = set.with_added(Annotation {
                class,
                qualified_name,
                arguments,
            });
        }
        Ok(self.interner.intern_annotation_set(set))
    }

    fn resolve_value(&self, value: &ValueExpr) -> AnnotationArgument {
        match value {
            ValueExpr::String(s) => AnnotationArgument::String(self.interner.intern_string(s)),
            ValueExpr::Int(n) => AnnotationArgument::Int(*n),
            ValueExpr::Bool(b) => AnnotationArgument::Bool(*b),
        }
    }
}

#[cfg(test)]
#[path = "../tests/environment_tests.rs"]
mod tests;
