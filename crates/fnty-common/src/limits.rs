//! Centralized limits and thresholds.
//!
//! # Categories
//!
//! - **Registry population**: how many arities the built-in function family
//!   is pre-populated with
//! - **Capacity hints**: inline sizes for small collections on hot paths

/// Highest arity the standard built-in registry registers by default.
///
/// Construction of a function type with more parameters (receiver included)
/// fails with a registry error unless the registry is configured wider.
pub const DEFAULT_MAX_FUNCTION_ARITY: u32 = 22;

/// Widest registry a configuration may request.
///
/// Every arity up to the configured maximum is declared eagerly, once per
/// enabled family, so the bound also caps registry population.
pub const MAX_FUNCTION_ARITY: u32 = 255;

/// Inline capacity of the supertype worklist before it spills to the heap.
///
/// Most declarations have one or two direct supertypes, so the frontier of a
/// depth-first walk rarely exceeds this.
pub const SUPERTYPE_WORKLIST_INLINE: usize = 8;
