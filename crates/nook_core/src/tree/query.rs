//! Read-only forest traversal helpers.
//!
//! # Responsibility
//! - Give consumers (rendering, navigation mapping, tests) a borrow-only
//!   view into the forest.
//!
//! # Invariants
//! - Traversal is depth-first in sibling insertion order, matching the
//!   order the mutation operations search in.
//! - Nothing here mutates or clones subtrees.

use crate::model::node::{Folder, Item, NodeId};

/// Finds the folder with id `folder_id`, searching the whole forest.
pub fn find_folder(forest: &[Folder], folder_id: NodeId) -> Option<&Folder> {
    for folder in forest {
        if folder.id == folder_id {
            return Some(folder);
        }
        if let Some(found) = find_folder(&folder.children, folder_id) {
            return Some(found);
        }
    }
    None
}

/// Finds the item with id `item_id` along with its owning folder.
///
/// The `(item id, item kind)` pair drives navigation in consumers; the
/// owning folder comes along so delete calls can be formed from the result.
pub fn find_item(forest: &[Folder], item_id: NodeId) -> Option<(&Folder, &Item)> {
    for folder in forest {
        if let Some(item) = folder.items.iter().find(|item| item.id == item_id) {
            return Some((folder, item));
        }
        if let Some(found) = find_item(&folder.children, item_id) {
            return Some(found);
        }
    }
    None
}

/// Collects every folder and item id in depth-first order.
pub fn collect_ids(forest: &[Folder]) -> Vec<NodeId> {
    let mut ids = Vec::new();
    push_ids(forest, &mut ids);
    ids
}

fn push_ids(forest: &[Folder], ids: &mut Vec<NodeId>) {
    for folder in forest {
        ids.push(folder.id);
        for item in &folder.items {
            ids.push(item.id);
        }
        push_ids(&folder.children, ids);
    }
}

/// Counts folders in the forest, all depths included.
pub fn folder_count(forest: &[Folder]) -> usize {
    forest
        .iter()
        .map(|folder| 1 + folder_count(&folder.children))
        .sum()
}

/// Counts items in the forest, all depths included.
pub fn item_count(forest: &[Folder]) -> usize {
    forest
        .iter()
        .map(|folder| folder.items.len() + item_count(&folder.children))
        .sum()
}
