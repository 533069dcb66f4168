//! Table records and the built-in dataset.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One row of source data. All fields are display text; nothing is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub age: String,
    #[serde(rename = "location", alias = "group_key")]
    pub group_key: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: impl Into<String>,
        group_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: age.into(),
            group_key: group_key.into(),
        }
    }
}

const SAMPLE: &[(&str, &str, &str, &str)] = &[
    ("001", "John Doe", "28", "New York"),
    ("002", "Jane Smith", "35", "Los Angeles"),
    ("004", "Emily Chen", "30", "Sydney"),
    ("003", "Alex Lee", "22", "London"),
    ("006", "Sarah Turner", "27", "London"),
    ("007", "James Brown", "31", "London"),
    ("005", "David Kim", "25", "Seoul"),
    ("008", "Maria Garcia", "33", "Madrid"),
    ("012", "Sofia Rodriguez", "28", "Madrid"),
    ("009", "Roberto Silva", "29", "Rio de Janeiro"),
    ("013", "Gabriela Oliveira", "31", "Rio de Janeiro"),
    ("010", "Mei Chen", "26", "Beijing"),
    ("014", "Li Wei", "29", "Beijing"),
    ("011", "Yusuke Tanaka", "32", "Tokyo"),
    ("015", "Aiko Yamamoto", "34", "Tokyo"),
];

/// The built-in user list, in source order.
pub fn sample_records() -> Vec<Record> {
    SAMPLE
        .iter()
        .map(|&(id, name, age, location)| Record::new(id, name, age, location))
        .collect()
}

/// Reads records from a JSON array of `{id, name, age, location}` objects.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_reader(reader)?;
    tracing::debug!(count = records.len(), "loaded records");
    Ok(records)
}
