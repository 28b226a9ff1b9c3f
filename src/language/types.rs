//! Types representing a parsed swim practice

use serde::{Deserialize, Serialize};

use super::vocabulary::{infer_set_kind, Equipment, Intensity, SetKind, Stroke};

/// A named group of items, in the order the coach wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Set {
    pub name: String,
    pub kind: SetKind,
    pub order: usize,
    pub items: Vec<Item>,
}

impl Set {
    /// Begin a set with no items yet; the kind is worked out from the name.
    pub fn new(name: &str, order: usize) -> Set {
        Set {
            name: name.to_string(),
            kind: infer_set_kind(name),
            order,
            items: Vec::new(),
        }
    }

    /// Append an item, numbering it after those already present.
    pub fn push(&mut self, mut item: Item) {
        item.order = self
            .items
            .len();
        self.items
            .push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items
            .is_empty()
    }

    pub fn total_distance(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.total_distance()))
    }
}

/// One line of prescribed work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub order: usize,
    pub reps: u32,
    pub distance: u32,
    pub stroke: Stroke,
    pub interval: Option<String>,
    pub description: Option<String>,
    pub intensity: Option<Intensity>,
    pub equipment: Vec<Equipment>,
}

impl Item {
    pub fn new(reps: u32, distance: u32, stroke: Stroke) -> Item {
        Item {
            order: 0,
            reps,
            distance,
            stroke,
            interval: None,
            description: None,
            intensity: None,
            equipment: Vec::new(),
        }
    }

    pub fn total_distance(&self) -> u64 {
        u64::from(self.reps) * u64::from(self.distance)
    }
}

/// Sum of every item in every set.
pub fn total_distance(sets: &[Set]) -> u64 {
    sets.iter()
        .fold(0u64, |total, set| total.saturating_add(set.total_distance()))
}
