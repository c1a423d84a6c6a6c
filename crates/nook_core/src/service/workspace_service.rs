//! Workspace state container.
//!
//! # Responsibility
//! - Hold the current forest and id allocator between operations.
//! - Apply every mutation to the most recent forest value, sequentially.
//!
//! # Invariants
//! - Last-writer-wins by construction: there is exactly one held forest and
//!   each mutation replaces it before the next one runs.
//! - Creates report the allocated id; deletes report whether the forest
//!   changed, so callers can detect the no-op-on-miss case without
//!   comparing forests themselves.
//! - Log events carry ids and counts only, never item content.

use crate::model::node::{Forest, IdAllocator, ItemKind, NodeId};
use crate::tree::{ops, query};
use log::{debug, info};

/// Owns the live hierarchy state for one UI caller.
///
/// The tree layer stays pure; this is the single place a forest value is
/// held across operations.
#[derive(Debug, Default)]
pub struct Workspace {
    forest: Forest,
    ids: IdAllocator,
}

impl Workspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access for rendering. Callers traverse, never mutate.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Creates a folder at the root (`None`) or under `parent_id`.
    ///
    /// Returns the new folder's id, or `None` when `parent_id` matched no
    /// folder and the forest is unchanged.
    pub fn create_folder(&mut self, parent_id: Option<NodeId>) -> Option<NodeId> {
        let id = self.ids.peek();
        let forest = std::mem::take(&mut self.forest);
        self.forest = ops::create_folder(forest, &mut self.ids, parent_id);

        if query::find_folder(&self.forest, id).is_none() {
            debug!("event=folder_create_missed module=workspace status=noop parent_id={parent_id:?}");
            return None;
        }
        info!("event=folder_created module=workspace status=ok folder_id={id} parent_id={parent_id:?}");
        Some(id)
    }

    /// Creates an item of `kind` inside the folder with id `folder_id`.
    ///
    /// Returns the new item's id, or `None` on a missed target.
    pub fn create_item(&mut self, folder_id: NodeId, kind: ItemKind) -> Option<NodeId> {
        let id = self.ids.peek();
        let forest = std::mem::take(&mut self.forest);
        self.forest = ops::create_item(forest, &mut self.ids, folder_id, kind);

        if query::find_item(&self.forest, id).is_none() {
            debug!("event=item_create_missed module=workspace status=noop folder_id={folder_id}");
            return None;
        }
        info!("event=item_created module=workspace status=ok item_id={id} kind={kind} folder_id={folder_id}");
        Some(id)
    }

    /// Deletes the folder with id `folder_id` and its entire subtree.
    ///
    /// Returns `true` when the folder existed and was removed.
    pub fn delete_folder(&mut self, folder_id: NodeId) -> bool {
        let existed = query::find_folder(&self.forest, folder_id).is_some();
        let forest = std::mem::take(&mut self.forest);
        self.forest = ops::delete_folder(forest, folder_id);

        if existed {
            info!("event=folder_deleted module=workspace status=ok folder_id={folder_id}");
        } else {
            debug!("event=folder_delete_missed module=workspace status=noop folder_id={folder_id}");
        }
        existed
    }

    /// Deletes the item with id `item_id` from the folder with id `folder_id`.
    ///
    /// Returns `true` when both ids matched and the item was removed.
    pub fn delete_item(&mut self, folder_id: NodeId, item_id: NodeId) -> bool {
        let existed = query::find_item(&self.forest, item_id)
            .is_some_and(|(owner, _)| owner.id == folder_id);
        let forest = std::mem::take(&mut self.forest);
        self.forest = ops::delete_item(forest, folder_id, item_id);

        if existed {
            info!("event=item_deleted module=workspace status=ok item_id={item_id} folder_id={folder_id}");
        } else {
            debug!("event=item_delete_missed module=workspace status=noop item_id={item_id} folder_id={folder_id}");
        }
        existed
    }

    /// Looks up the kind of an item, for mapping activation events to a
    /// content view keyed by `(item id, item kind)`.
    pub fn item_kind(&self, item_id: NodeId) -> Option<ItemKind> {
        query::find_item(&self.forest, item_id).map(|(_, item)| item.kind)
    }
}
