//! Pure forest algorithms.
//!
//! # Responsibility
//! - Implement the four hierarchy operations as pure functions over an
//!   immutable forest value.
//! - Provide the read-only traversal vocabulary consumers render with.
//!
//! # Invariants
//! - No operation mutates its input in place; each returns a new forest
//!   built by moving untouched subtrees into the result.
//! - A missing target id is a no-op, never an error: the input forest comes
//!   back value-equal.

pub mod ops;
pub mod query;
