//! Core hierarchy logic for Nook.
//! This crate is the single source of truth for forest invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod tree;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::node::{Folder, Forest, IdAllocator, Item, ItemKind, NodeId};
pub use service::workspace_service::Workspace;
pub use tree::ops::{create_folder, create_item, delete_folder, delete_item};
pub use tree::query::{collect_ids, find_folder, find_item, folder_count, item_count};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
