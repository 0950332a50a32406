//! Built-in function-family registry.
//!
//! Function types are ordinary nominal types whose head is one member of an
//! arity-indexed family of generic interfaces: `core.Function0`,
//! `core.Function1<P1, R>`, `core.Function2<P1, P2, R>`, ... The same scheme
//! is repeated for suspending and reflective callables, each family in its
//! own package:
//!
//! | Kind | Package | Member |
//! |------|---------|--------|
//! | `Function` | `core` | `core.Function2` |
//! | `SuspendFunction` | `core.coroutines` | `core.coroutines.SuspendFunction2` |
//! | `KFunction` | `core.reflect` | `core.reflect.KFunction2` |
//! | `KSuspendFunction` | `core.reflect` | `core.reflect.KSuspendFunction2` |
//!
//! Membership is decided by qualified name alone. The registry is an explicit
//! handle passed to every query; there is no process-wide instance.

use crate::db::TypeDatabase;
use crate::def::{DeclarationInfo, DeclarationStore, DefId};
use crate::types::{AnnotationSetId, TypeId, TypeProjection};
use fnty_common::limits::DEFAULT_MAX_FUNCTION_ARITY;
use fnty_common::names;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

// =============================================================================
// FunctionKind
// =============================================================================

/// Which of the parallel function families a member belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FunctionKind {
    Function,
    SuspendFunction,
    KFunction,
    KSuspendFunction,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 4] = [
        FunctionKind::Function,
        FunctionKind::SuspendFunction,
        FunctionKind::KFunction,
        FunctionKind::KSuspendFunction,
    ];

    pub const fn package(self) -> &'static str {
        match self {
            Self::Function => names::BUILTINS_PACKAGE,
            Self::SuspendFunction => names::COROUTINES_PACKAGE,
            Self::KFunction | Self::KSuspendFunction => names::REFLECT_PACKAGE,
        }
    }

    pub const fn class_name_prefix(self) -> &'static str {
        match self {
            Self::Function => names::FUNCTION_PREFIX,
            Self::SuspendFunction => names::SUSPEND_FUNCTION_PREFIX,
            Self::KFunction => names::K_FUNCTION_PREFIX,
            Self::KSuspendFunction => names::K_SUSPEND_FUNCTION_PREFIX,
        }
    }

    pub const fn is_suspend(self) -> bool {
        matches!(self, Self::SuspendFunction | Self::KSuspendFunction)
    }

    pub const fn is_reflective(self) -> bool {
        matches!(self, Self::KFunction | Self::KSuspendFunction)
    }

    /// The non-reflective kind with the same suspension.
    pub const fn non_reflective(self) -> Self {
        match self {
            Self::Function | Self::KFunction => Self::Function,
            Self::SuspendFunction | Self::KSuspendFunction => Self::SuspendFunction,
        }
    }

    /// Qualified name of the member of this family with the given arity.
    pub fn class_name(self, arity: u32) -> String {
        names::qualify(
            self.package(),
            &format!("{}{arity}", self.class_name_prefix()),
        )
    }

    /// Recognize a qualified name as a family member and recover its arity.
    ///
    /// ```
    /// use fnty_solver::FunctionKind;
    /// assert_eq!(
    ///     FunctionKind::parse_class_name("core.Function2"),
    ///     Some((FunctionKind::Function, 2))
    /// );
    /// assert_eq!(FunctionKind::parse_class_name("core.Function"), None);
    /// assert_eq!(FunctionKind::parse_class_name("app.Function2"), None);
    /// ```
    pub fn parse_class_name(qualified_name: &str) -> Option<(Self, u32)> {
        let (package, short_name) = names::split_qualified_name(qualified_name);
        Self::ALL.into_iter().find_map(|kind| {
            if kind.package() != package {
                return None;
            }
            let suffix = short_name.strip_prefix(kind.class_name_prefix())?;
            names::parse_arity_suffix(suffix).map(|arity| (kind, arity))
        })
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name_prefix())
    }
}

// =============================================================================
// Errors
// =============================================================================

/// The registry could not supply a declaration it is expected to have.
///
/// This indicates a malformed built-in environment, never a user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("built-in registry has no {kind} class of arity {arity}")]
    MissingFunctionClass { kind: FunctionKind, arity: u32 },
}

// =============================================================================
// BuiltinRegistry
// =============================================================================

/// Built-in declarations consumed by the function-type queries.
pub trait BuiltinRegistry: Send + Sync {
    /// The family member of `kind` with the given arity.
    fn function_class(&self, kind: FunctionKind, arity: u32) -> Result<DefId, RegistryError>;

    /// Kind and arity of a member of any of the four families, `None` if
    /// `qualified_name` is not one.
    fn classify_function_class_name(&self, qualified_name: &str) -> Option<(FunctionKind, u32)> {
        FunctionKind::parse_class_name(qualified_name)
    }

    /// Whether `qualified_name` is a `core.FunctionN` member.
    fn is_function_family_member(&self, qualified_name: &str) -> bool {
        self.function_arity(qualified_name).is_some()
    }

    /// Arity of a `core.FunctionN` member; `None` for every other name,
    /// including members of the suspend and reflective families.
    fn function_arity(&self, qualified_name: &str) -> Option<u32> {
        match self.classify_function_class_name(qualified_name)? {
            (FunctionKind::Function, arity) => Some(arity),
            _ => None,
        }
    }

    /// Annotation class marking extension function types.
    fn extension_marker(&self) -> DefId;

    /// Annotation class carrying function type parameter names.
    fn parameter_name_marker(&self) -> DefId;
}

// =============================================================================
// Configuration
// =============================================================================

/// Which families the standard registry pre-populates, and how far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuiltinsConfig {
    /// Highest arity registered for every enabled family.
    pub max_function_arity: u32,
    pub include_suspend_functions: bool,
    pub include_reflection_functions: bool,
}

impl Default for BuiltinsConfig {
    fn default() -> Self {
        Self {
            max_function_arity: DEFAULT_MAX_FUNCTION_ARITY,
            include_suspend_functions: true,
            include_reflection_functions: true,
        }
    }
}

impl BuiltinsConfig {
    pub const fn enables(&self, kind: FunctionKind) -> bool {
        match kind {
            FunctionKind::Function => true,
            FunctionKind::SuspendFunction => self.include_suspend_functions,
            FunctionKind::KFunction => self.include_reflection_functions,
            FunctionKind::KSuspendFunction => {
                self.include_suspend_functions && self.include_reflection_functions
            }
        }
    }
}

// =============================================================================
// StandardBuiltins
// =============================================================================

/// Registry populated eagerly into a `DeclarationStore`.
///
/// For every enabled kind and every arity `0..=max_function_arity` it
/// registers an interface `<Prefix><N><P1, .., PN, R>`. Supertypes:
///
/// - `FunctionN` and `SuspendFunctionN` extend `core.Function<R>`
/// - `KFunctionN` extends `FunctionN<P1, .., PN, R>`
/// - `KSuspendFunctionN` extends `SuspendFunctionN<P1, .., PN, R>`
///
/// so a reflective callable is a function type by inheritance.
pub struct StandardBuiltins {
    classes: FxHashMap<(FunctionKind, u32), DefId>,
    config: BuiltinsConfig,
    function_base: DefId,
    extension_marker: DefId,
    parameter_name_marker: DefId,
}

impl StandardBuiltins {
    pub fn new(db: &dyn TypeDatabase, store: &DeclarationStore, config: &BuiltinsConfig) -> Self {
        let r_name = db.intern_string("R");
        let function_base = store.register(DeclarationInfo::interface(
            db.intern_string(&names::qualify(names::BUILTINS_PACKAGE, "Function")),
            vec![r_name],
        ));
        let extension_marker = store.register(DeclarationInfo::annotation_class(
            db.intern_string(names::EXTENSION_FUNCTION_TYPE),
        ));
        let parameter_name_marker = store.register(DeclarationInfo::annotation_class(
            db.intern_string(names::PARAMETER_NAME),
        ));

        let mut builtins = Self {
            classes: FxHashMap::default(),
            config: config.clone(),
            function_base,
            extension_marker,
            parameter_name_marker,
        };

        // Plain and suspend families first: the reflective ones extend them.
        for kind in FunctionKind::ALL {
            if !config.enables(kind) {
                continue;
            }
            for arity in 0..=config.max_function_arity {
                let def = builtins.register_member(db, store, kind, arity);
                builtins.classes.insert((kind, arity), def);
            }
        }

        debug!(
            members = builtins.classes.len(),
            max_arity = config.max_function_arity,
            "StandardBuiltins populated"
        );
        builtins
    }

    fn register_member(
        &self,
        db: &dyn TypeDatabase,
        store: &DeclarationStore,
        kind: FunctionKind,
        arity: u32,
    ) -> DefId {
        let mut param_names: Vec<String> = (1..=arity).map(|i| format!("P{i}")).collect();
        param_names.push("R".to_string());

        let type_params = param_names.iter().map(|n| db.intern_string(n)).collect();
        let def = store.register(DeclarationInfo::interface(
            db.intern_string(&kind.class_name(arity)),
            type_params,
        ));

        let params: Vec<TypeProjection> = param_names
            .iter()
            .map(|n| TypeProjection::invariant(db.type_parameter(n)))
            .collect();
        let return_param = params[params.len() - 1];

        let supertype: TypeId = match kind {
            FunctionKind::Function | FunctionKind::SuspendFunction => db.class_type(
                self.function_base,
                vec![return_param],
                AnnotationSetId::EMPTY,
                false,
            ),
            FunctionKind::KFunction | FunctionKind::KSuspendFunction => {
                let base = self.classes[&(kind.non_reflective(), arity)];
                db.class_type(base, params, AnnotationSetId::EMPTY, false)
            }
        };
        store.set_supertypes(def, vec![supertype]);

        trace!(def_id = def.0, %kind, arity, "registered function class");
        def
    }

    pub fn config(&self) -> &BuiltinsConfig {
        &self.config
    }

    /// The arity-less `core.Function<R>` base interface.
    pub fn function_base(&self) -> DefId {
        self.function_base
    }

    /// All registered family members, ordered by kind then arity.
    pub fn members(&self) -> Vec<(FunctionKind, u32, DefId)> {
        let mut members: Vec<_> = self
            .classes
            .iter()
            .map(|(&(kind, arity), &def)| (kind, arity, def))
            .collect();
        members.sort_unstable();
        members
    }
}

impl BuiltinRegistry for StandardBuiltins {
    fn function_class(&self, kind: FunctionKind, arity: u32) -> Result<DefId, RegistryError> {
        self.classes
            .get(&(kind, arity))
            .copied()
            .ok_or(RegistryError::MissingFunctionClass { kind, arity })
    }

    fn classify_function_class_name(&self, qualified_name: &str) -> Option<(FunctionKind, u32)> {
        FunctionKind::parse_class_name(qualified_name).filter(|(kind, _)| self.config.enables(*kind))
    }

    fn extension_marker(&self) -> DefId {
        self.extension_marker
    }

    fn parameter_name_marker(&self) -> DefId {
        self.parameter_name_marker
    }
}

#[cfg(test)]
#[path = "../tests/builtins_tests.rs"]
mod tests;
