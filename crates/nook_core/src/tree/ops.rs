//! Forest mutation operations.
//!
//! # Responsibility
//! - Create and delete folders and items anywhere in the forest.
//! - Preserve sibling order and id uniqueness across every rebuild.
//!
//! # Invariants
//! - Each operation is one depth-first traversal in sibling insertion
//!   order; the first id match wins and stops the search.
//! - Only nodes on the path from a root to the match are rebuilt; every
//!   other subtree is moved through unchanged.
//! - Deleting a folder drops its entire subtree; no orphan survives.
//! - Not-found targets return the input forest value-equal; callers that
//!   need to detect the no-op compare values.

use crate::model::node::{Folder, Forest, IdAllocator, Item, ItemKind, NodeId};

/// Creates an empty folder with a fresh id and appends it under `parent_id`,
/// or at the root level when `parent_id` is `None`.
///
/// The allocated id is burned even when `parent_id` matches nothing.
pub fn create_folder(forest: Forest, ids: &mut IdAllocator, parent_id: Option<NodeId>) -> Forest {
    let folder = Folder::new(ids.allocate());
    match parent_id {
        None => {
            let mut forest = forest;
            forest.push(folder);
            forest
        }
        Some(parent_id) => attach_folder(forest, parent_id, folder).0,
    }
}

/// Creates an item of `kind` with a fresh id and generated content, appended
/// to the items of the folder with id `folder_id`.
pub fn create_item(
    forest: Forest,
    ids: &mut IdAllocator,
    folder_id: NodeId,
    kind: ItemKind,
) -> Forest {
    let item = Item::new(ids.allocate(), kind);
    attach_item(forest, folder_id, item).0
}

/// Removes the folder with id `folder_id` from wherever it sits, discarding
/// its whole subtree.
pub fn delete_folder(forest: Forest, folder_id: NodeId) -> Forest {
    remove_folder(forest, folder_id).0
}

/// Removes the item with id `item_id` from the folder with id `folder_id`.
///
/// Items of other folders are untouched, including items elsewhere that
/// would share `item_id` if the uniqueness invariant were ever violated.
pub fn delete_item(forest: Forest, folder_id: NodeId, item_id: NodeId) -> Forest {
    remove_item(forest, folder_id, item_id).0
}

/// Threads `child` through the forest looking for its parent. Returns the
/// rebuilt forest plus the child back when no folder matched.
fn attach_folder(forest: Forest, parent_id: NodeId, child: Folder) -> (Forest, Option<Folder>) {
    let mut pending = Some(child);
    let mut rebuilt = Vec::with_capacity(forest.len());
    for mut folder in forest {
        if let Some(child) = pending.take() {
            if folder.id == parent_id {
                folder.children.push(child);
            } else {
                let (children, leftover) = attach_folder(folder.children, parent_id, child);
                folder.children = children;
                pending = leftover;
            }
        }
        rebuilt.push(folder);
    }
    (rebuilt, pending)
}

fn attach_item(forest: Forest, folder_id: NodeId, item: Item) -> (Forest, Option<Item>) {
    let mut pending = Some(item);
    let mut rebuilt = Vec::with_capacity(forest.len());
    for mut folder in forest {
        if let Some(item) = pending.take() {
            if folder.id == folder_id {
                folder.items.push(item);
            } else {
                let (children, leftover) = attach_item(folder.children, folder_id, item);
                folder.children = children;
                pending = leftover;
            }
        }
        rebuilt.push(folder);
    }
    (rebuilt, pending)
}

fn remove_folder(forest: Forest, folder_id: NodeId) -> (Forest, bool) {
    let mut removed = false;
    let mut rebuilt = Vec::with_capacity(forest.len());
    for mut folder in forest {
        if removed {
            rebuilt.push(folder);
            continue;
        }
        if folder.id == folder_id {
            // Dropping the node here drops every descendant with it.
            removed = true;
            continue;
        }
        let (children, hit) = remove_folder(folder.children, folder_id);
        folder.children = children;
        removed = hit;
        rebuilt.push(folder);
    }
    (rebuilt, removed)
}

fn remove_item(forest: Forest, folder_id: NodeId, item_id: NodeId) -> (Forest, bool) {
    let mut matched = false;
    let mut rebuilt = Vec::with_capacity(forest.len());
    for mut folder in forest {
        if matched {
            rebuilt.push(folder);
            continue;
        }
        if folder.id == folder_id {
            folder.items.retain(|item| item.id != item_id);
            matched = true;
        } else {
            let (children, hit) = remove_item(folder.children, folder_id, item_id);
            folder.children = children;
            matched = hit;
        }
        rebuilt.push(folder);
    }
    (rebuilt, matched)
}
