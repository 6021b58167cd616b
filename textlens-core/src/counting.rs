//! Insertion-ordered frequency table
//!
//! Counts keep the position of the first occurrence of every item so that
//! rankings break ties by first-seen order.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of items while remembering first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    entries: Vec<(T, usize)>,
    index: HashMap<T, usize>,
    total: usize,
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            total: 0,
        }
    }

    /// Record one occurrence of `item`
    pub fn add(&mut self, item: T) {
        self.total += 1;
        match self.index.get(&item) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(item.clone(), self.entries.len());
                self.entries.push((item, 1));
            }
        }
    }

    /// Occurrences of `item` (0 when never seen)
    pub fn get<Q>(&self, item: &Q) -> usize
    where
        T: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(item)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct items
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    /// Number of recorded occurrences
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items with their counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.entries.iter().map(|(item, count)| (item, *count))
    }

    /// The `limit` most frequent items, count descending, first-seen order on ties
    pub fn most_common(&self, limit: usize) -> Vec<(T, usize)> {
        let mut ranked = self.entries.clone();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

impl<T: Eq + Hash + Clone> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for item in iter {
            table.add(item);
        }
        table
    }
}
