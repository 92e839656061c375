//! Loot - Items and weighted enemy drop tables

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An item that can drop from an enemy. Opaque to the combat engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One possible drop and its relative weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    pub weight: f64,
    #[serde(flatten)]
    pub item: Item,
}

/// Weighted drop table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LootTable {
    entries: Vec<LootEntry>,
}

impl LootTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, weight: f64, item: Item) -> Self {
        self.entries.push(LootEntry { weight, item });
        self
    }

    pub fn entries(&self) -> &[LootEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick one item with probability proportional to its weight
    ///
    /// Returns `None` for an empty table, or when the weights are all zero
    /// or include a negative or non-finite value.
    pub fn roll(&self, rng: &mut impl Rng) -> Option<&Item> {
        if self.entries.iter().any(|entry| !entry.weight.is_finite()) {
            return None;
        }
        let weights = WeightedIndex::new(self.entries.iter().map(|entry| entry.weight)).ok()?;
        self.entries.get(weights.sample(rng)).map(|entry| &entry.item)
    }
}

impl FromIterator<LootEntry> for LootTable {
    fn from_iter<I: IntoIterator<Item = LootEntry>>(iter: I) -> Self {
        LootTable {
            entries: iter.into_iter().collect(),
        }
    }
}
