//! Shared helpers for integration tests.

#![allow(dead_code)]

use gridpage_core::model::Record;

#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

pub fn record(id: &str, name: &str, age: &str, location: &str) -> Record {
    Record::new(id, name, age, location)
}

/// `count` records spread over at most `keys` locations, ids in input order.
pub fn random_records(seed: u64, count: usize, keys: u64) -> Vec<Record> {
    let mut rng = XorShift64::new(seed);
    (0..count)
        .map(|i| {
            let key = rng.below(keys);
            Record::new(
                format!("{i:03}"),
                format!("user {i}"),
                format!("{}", 18 + rng.below(60)),
                format!("city-{key}"),
            )
        })
        .collect()
}
