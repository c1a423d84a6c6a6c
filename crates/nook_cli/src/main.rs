//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use nook_core::{folder_count, item_count, ItemKind, Workspace};

fn main() {
    let mut workspace = Workspace::new();
    // Root-level creation has no parent to miss.
    let Some(root) = workspace.create_folder(None) else {
        return;
    };
    workspace.create_item(root, ItemKind::Task);
    workspace.create_folder(Some(root));

    println!("nook_core version={}", nook_core::core_version());
    println!(
        "forest folders={} items={}",
        folder_count(workspace.forest()),
        item_count(workspace.forest())
    );

    workspace.delete_folder(root);
    println!("after delete folders={}", folder_count(workspace.forest()));
}
