//! Record grouping - partitions records by their group key.
//!
//! Grouping is stable: records keep their relative input order inside a
//! group. Group order is explicit (see [`GroupOrder`]) rather than an
//! artifact of hashing, so layouts are reproducible.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::Record;

/// Order in which groups are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Groups appear in the order their key was first seen.
    #[default]
    FirstSeen,
    /// Groups are sorted by key (byte order).
    Sorted,
}

/// Records partitioned by group key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedTable {
    groups: IndexMap<String, Vec<Record>>,
}

impl GroupedTable {
    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Members of the group with `key`, in input order.
    pub fn get(&self, key: &str) -> Option<&[Record]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Iterates `(key, members)` in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups
            .iter()
            .map(|(key, members)| (key.as_str(), members.as_slice()))
    }

    /// Sizes of the groups in layout order.
    pub fn spans(&self) -> Vec<usize> {
        self.groups.values().map(Vec::len).collect()
    }
}

/// Groups records by key in first-seen order.
pub fn group_by_key<I>(records: I) -> GroupedTable
where
    I: IntoIterator<Item = Record>,
{
    let mut groups: IndexMap<String, Vec<Record>> = IndexMap::new();
    for record in records {
        groups
            .entry(record.group_key.clone())
            .or_default()
            .push(record);
    }
    GroupedTable { groups }
}

/// Groups records by key with the requested group order.
pub fn group_records<I>(records: I, order: GroupOrder) -> GroupedTable
where
    I: IntoIterator<Item = Record>,
{
    let mut table = group_by_key(records);
    if order == GroupOrder::Sorted {
        // Stable sort: member order inside each group is untouched.
        table.groups.sort_keys();
    }
    tracing::debug!(
        groups = table.len(),
        records = table.record_count(),
        ?order,
        "grouped records"
    );
    table
}
