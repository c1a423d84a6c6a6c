//! Core use-case services.
//!
//! # Responsibility
//! - Own the current forest value on behalf of UI callers.
//! - Keep callers decoupled from the pure operation signatures.

pub mod workspace_service;
