//! Direct and transitive function-type classification.

use super::FunctionTypes;
use crate::builtins::FunctionKind;
use crate::format::TypeFormatter;
use crate::types::TypeId;
use fnty_common::limits::SUPERTYPE_WORKLIST_INLINE;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::trace;

type Worklist = SmallVec<[TypeId; SUPERTYPE_WORKLIST_INLINE]>;

impl<'a> FunctionTypes<'a> {
    /// Kind and arity of `type_id` when its head declaration is a member of
    /// one of the built-in function families.
    ///
    /// Types without a declaration (type parameters, the error type) and
    /// declarations unknown to the resolver yield `None`.
    pub fn function_kind_of(&self, type_id: TypeId) -> Option<(FunctionKind, u32)> {
        let name = self.head_qualified_name(type_id)?;
        self.builtins.classify_function_class_name(&name)
    }

    fn head_qualified_name(&self, type_id: TypeId) -> Option<Arc<str>> {
        let def = self.db.lookup(type_id)?.def_id()?;
        let name = self.decls.qualified_name(def)?;
        Some(self.db.resolve_atom_ref(name))
    }

    /// Whether `type_id` is headed by a declaration the registry recognizes
    /// as a `core.FunctionN` member.
    pub fn is_function_type(&self, type_id: TypeId) -> bool {
        self.head_qualified_name(type_id)
            .is_some_and(|name| self.builtins.is_function_family_member(&name))
    }

    /// Whether `type_id` is headed by a member of any of the four families.
    pub fn is_function_family_type(&self, type_id: TypeId) -> bool {
        self.function_kind_of(type_id).is_some()
    }

    /// Whether `type_id` is headed by a `SuspendFunctionN` member.
    pub fn is_suspend_function_type(&self, type_id: TypeId) -> bool {
        matches!(
            self.function_kind_of(type_id),
            Some((FunctionKind::SuspendFunction, _))
        )
    }

    /// Whether `type_id` is headed by a `KFunctionN` or `KSuspendFunctionN` member.
    pub fn is_k_function_type(&self, type_id: TypeId) -> bool {
        self.function_kind_of(type_id)
            .is_some_and(|(kind, _)| kind.is_reflective())
    }

    /// Whether `type_id` is a plain or suspend function type: the kinds for
    /// which the receiver encoding is defined.
    pub fn is_builtin_function_type(&self, type_id: TypeId) -> bool {
        self.function_kind_of(type_id)
            .is_some_and(|(kind, _)| !kind.is_reflective())
    }

    pub fn is_function_type_or_subtype(&self, type_id: TypeId) -> bool {
        self.is_type_or_subtype_of(type_id, |t| self.is_function_type(t))
    }

    pub fn is_suspend_function_type_or_subtype(&self, type_id: TypeId) -> bool {
        self.is_type_or_subtype_of(type_id, |t| self.is_suspend_function_type(t))
    }

    pub fn is_builtin_function_type_or_subtype(&self, type_id: TypeId) -> bool {
        self.is_type_or_subtype_of(type_id, |t| self.is_builtin_function_type(t))
    }

    /// Whether `type_id` or any type in its supertype closure satisfies `predicate`.
    ///
    /// `type_id` itself is tested first. The closure is then walked
    /// depth-first with an explicit worklist, exploring supertypes in
    /// declaration order, and stops at the first match. Each `TypeId` is
    /// expanded at most once, so shared ancestors (diamonds) are visited once
    /// and the walk terminates even on cyclic declarations. Stack usage does
    /// not grow with hierarchy depth.
    pub fn is_type_or_subtype_of(
        &self,
        type_id: TypeId,
        mut predicate: impl FnMut(TypeId) -> bool,
    ) -> bool {
        if predicate(type_id) {
            return true;
        }

        let mut visited: FxHashSet<TypeId> = FxHashSet::default();
        visited.insert(type_id);
        let mut worklist = Worklist::new();
        self.push_immediate_supertypes(type_id, &mut worklist);

        while let Some(current) = worklist.pop() {
            if !visited.insert(current) {
                continue;
            }
            if predicate(current) {
                trace!(
                    start = type_id.0,
                    matched = current.0,
                    visited = visited.len(),
                    "supertype walk matched"
                );
                return true;
            }
            self.push_immediate_supertypes(current, &mut worklist);
        }

        trace!(start = type_id.0, visited = visited.len(), "supertype walk exhausted");
        false
    }

    /// Push the declared supertypes of `type_id` so that the first declared
    /// one is popped first.
    fn push_immediate_supertypes(&self, type_id: TypeId, worklist: &mut Worklist) {
        let Some(def) = self.db.lookup(type_id).and_then(|data| data.def_id()) else {
            return;
        };
        worklist.extend(self.decls.declared_supertypes(def).into_iter().rev());
    }

    /// Whether `type_id` is a direct member of a function family carrying a
    /// receiver.
    ///
    /// Returns `false` for types that are not function types at all,
    /// including types without a declaration.
    ///
    /// # Panics
    ///
    /// If `type_id` is not itself a family member but reaches one through
    /// its supertypes. The receiver encoding exists only on the canonical
    /// family member, so the question has no answer there; callers must
    /// decompose the supertype they care about instead.
    pub fn is_extension_function_type(&self, type_id: TypeId) -> bool {
        self.is_direct_for_shape_query(type_id) && self.has_extension_marker(type_id)
    }

    /// Whether `type_id` is a direct member of a function family without a
    /// receiver.
    ///
    /// # Panics
    ///
    /// Under the same condition as [`is_extension_function_type`](Self::is_extension_function_type).
    pub fn is_non_extension_function_type(&self, type_id: TypeId) -> bool {
        self.is_direct_for_shape_query(type_id) && !self.has_extension_marker(type_id)
    }

    fn is_direct_for_shape_query(&self, type_id: TypeId) -> bool {
        if self.is_function_family_type(type_id) {
            return true;
        }
        assert!(
            !self.is_type_or_subtype_of(type_id, |t| self.is_function_family_type(t)),
            "extension classification requested for `{}`, which is a function type only \
             through its supertypes",
            TypeFormatter::new(self.db, self.decls).format(type_id)
        );
        false
    }
}
