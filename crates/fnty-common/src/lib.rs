//! Common types and utilities for the fnty type system core.
//!
//! This crate provides foundational types used across all fnty crates:
//! - String interning (`Atom`, `ShardedInterner`)
//! - Built-in package and class-name constants
//! - Centralized limits

// String interning for qualified names and identifiers
pub mod interner;
pub use interner::{Atom, ShardedInterner};

// Well-known built-in names shared by the registry and the codecs
pub mod names;

// Centralized limits and thresholds
pub mod limits;
