use std::collections::BTreeMap;

use crate::option::OptionId;

/// Occurrence counts collected by one parse, keyed by option identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionState {
    counts: BTreeMap<OptionId, usize>,
}

impl OptionState {
    pub fn new() -> Self {
        OptionState::default()
    }

    pub fn record(&mut self, id: OptionId) {
        *self.counts.entry(id).or_insert(0) += 1;
    }

    /// How many times the option was resolved; 0 if it never was.
    pub fn count(&self, id: OptionId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    pub fn is_present(&self, id: OptionId) -> bool {
        self.count(id) > 0
    }

    /// Seen options with their counts, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionId, usize)> + '_ {
        self.counts.iter().map(|(id, count)| (*id, *count))
    }

    /// Number of distinct options seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
