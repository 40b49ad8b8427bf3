//! Group-by-and-sum accumulator shared by the bar and line aggregators

use std::collections::HashMap;
use std::hash::Hash;

use super::record::Numeric;

/// Sums values per key, remembering the order in which keys first appeared.
///
/// Key equality is plain `Eq`; no normalisation happens here.
#[derive(Debug, Clone)]
pub struct GroupSum<K> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Numeric)>,
}

impl<K> Default for GroupSum<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> GroupSum<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the running sum of `key`, opening the group if needed.
    pub fn add(&mut self, key: K, value: Numeric) {
        match self.index.get(&key) {
            Some(&slot) => {
                let sum = &mut self.groups[slot].1;
                *sum = *sum + value;
            }
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, value));
            }
        }
    }

    /// Iterate over groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &(K, Numeric)> {
        self.groups.iter()
    }

    /// Consume the accumulator, yielding groups in first-seen order.
    pub fn into_entries(self) -> Vec<(K, Numeric)> {
        self.groups
    }
}
