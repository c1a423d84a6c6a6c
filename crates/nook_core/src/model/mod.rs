//! Domain model for the folder/item hierarchy.
//!
//! # Responsibility
//! - Define the canonical forest value shape shared by all core layers.
//! - Own id allocation policy for folders and items.
//!
//! # Invariants
//! - Every `NodeId` in a forest is unique; the shared allocator never
//!   reissues an id.
//! - A forest value is never mutated in place by core operations.

pub mod node;
