//! Forest node model.
//!
//! # Responsibility
//! - Define `Folder`, `Item` and the `Forest` value the caller holds.
//! - Provide the id allocator every create operation draws from.
//!
//! # Invariants
//! - `id` is assigned at creation, never reused, never mutated.
//! - Folder and item ids are drawn from one strictly-increasing counter, so
//!   uniqueness holds across the whole forest, not per node kind.
//! - A folder owns its `children` and `items` exclusively; sibling order is
//!   insertion order.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for folders and items.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NodeId = u64;

/// The whole hierarchy state: the ordered sequence of root folders.
///
/// Callers hold a `Forest`, pass it into an operation by value and replace
/// their copy with the returned value.
pub type Forest = Vec<Folder>;

/// Monotonic id source for folders and items.
///
/// A counter instead of a wall-clock timestamp: two allocations in the same
/// instant can never collide, regardless of call rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: NodeId,
}

impl IdAllocator {
    /// Creates an allocator starting at id 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Consumes and returns the next id.
    ///
    /// An id handed out here is burned even if the operation that requested
    /// it misses its target; it is never reissued.
    pub fn allocate(&mut self) -> NodeId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Returns the id the next `allocate` call will hand out.
    pub fn peek(&self) -> NodeId {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Category of a leaf item, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Free-form note.
    Note,
    /// Actionable task.
    Task,
    /// Saved link.
    Bookmark,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Note => write!(f, "Note"),
            Self::Task => write!(f, "Task"),
            Self::Bookmark => write!(f, "Bookmark"),
        }
    }
}

/// Typed leaf payload owned by exactly one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable item id.
    pub id: NodeId,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Opaque display string.
    pub content: String,
}

impl Item {
    /// Creates an item with generated display content.
    pub fn new(id: NodeId, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            content: format!("{kind} {id}"),
        }
    }
}

/// A tree node: display name, ordered child folders, ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Stable folder id.
    pub id: NodeId,
    /// Display name; not required to be unique among siblings.
    pub name: String,
    /// Owned child folders, insertion order = display order.
    pub children: Vec<Folder>,
    /// Owned items, insertion order = display order.
    pub items: Vec<Item>,
}

impl Folder {
    /// Creates an empty folder with the default display name.
    pub fn new(id: NodeId) -> Self {
        Self::named(id, "Folder")
    }

    /// Creates an empty folder with a caller-provided display name.
    pub fn named(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
            items: Vec::new(),
        }
    }
}
