//! StatLine - Plain stat values keyed by stat, used for construction and growth

use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A set of raw stat values, e.g. starting stats or per-level gains
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatLine(BTreeMap<StatKind, i64>);

impl StatLine {
    pub fn new() -> Self {
        StatLine(BTreeMap::new())
    }

    /// Every canonical stat set to the same value
    pub fn uniform(value: i64) -> Self {
        StatLine(StatKind::all().iter().map(|kind| (*kind, value)).collect())
    }

    pub fn with(mut self, kind: StatKind, value: i64) -> Self {
        self.0.insert(kind, value);
        self
    }

    pub fn set(&mut self, kind: StatKind, value: i64) {
        self.0.insert(kind, value);
    }

    pub fn get(&self, kind: StatKind) -> Option<i64> {
        self.0.get(&kind).copied()
    }

    /// First canonical stat this line has no value for
    pub fn first_missing(&self) -> Option<StatKind> {
        StatKind::all().iter().copied().find(|kind| !self.0.contains_key(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i64)> + '_ {
        self.0.iter().map(|(kind, value)| (*kind, *value))
    }
}

impl FromIterator<(StatKind, i64)> for StatLine {
    fn from_iter<I: IntoIterator<Item = (StatKind, i64)>>(iter: I) -> Self {
        StatLine(iter.into_iter().collect())
    }
}
