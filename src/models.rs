//! Frontend Models
//!
//! Data structures for containers, items and drag gestures.

use serde::{Deserialize, Serialize};

/// Item data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// A named, ordered bucket of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: u32,
    pub name: String,
    /// Display and drag order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Container {
    pub fn new(id: u32, name: impl Into<String>, items: Vec<Item>) -> Self {
        Self { id, name: name.into(), items }
    }

    /// Index of an item within this container
    pub fn position_of(&self, item_id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }
}

/// What is being dragged: an item and the container it was picked up from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub container_id: u32,
    pub item_id: u32,
}

/// Where a drag lands: a container, and the row index when dropped on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropSlot {
    pub container_id: u32,
    /// None = container body (append at the end)
    pub index: Option<usize>,
}

impl DropSlot {
    pub fn body(container_id: u32) -> Self {
        Self { container_id, index: None }
    }

    pub fn row(container_id: u32, index: usize) -> Self {
        Self { container_id, index: Some(index) }
    }
}

/// Canonical seed: "Container 1" holding four items, "Container 2" empty
pub fn canonical_seed() -> Vec<Container> {
    vec![
        Container::new(
            1,
            "Container 1",
            (1..=4).map(|id| Item::new(id, format!("Item {}", id))).collect(),
        ),
        Container::new(2, "Container 2", Vec::new()),
    ]
}
