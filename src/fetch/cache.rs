//! TTL + capacity bounded response cache
//!
//! Entries expire after a fixed duration and, under capacity pressure, the
//! oldest-inserted entry is evicted first. Expired entries are treated as
//! absent regardless of remaining capacity.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

/// String-keyed cache with TTL expiry and oldest-first eviction
///
/// Not internally synchronized; callers wrap it in a lock when shared
/// across tasks.
pub struct TtlCache<V> {
    ttl: Duration,
    max_entries: usize,
    entries: HashMap<String, Entry<V>>,
    insertion_order: VecDeque<String>,
}

impl<V: Clone> TtlCache<V> {
    /// Creates a cache holding at most `max_entries` values for `ttl` each
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries,
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
        }
    }

    /// Looks up a key, treating expired entries as absent
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.inserted_at.elapsed() > self.ttl,
            None => return None,
        };
        if expired {
            self.entries.remove(key);
            self.insertion_order.retain(|k| k != key);
            return None;
        }
        self.entries.get(key).map(|e| e.value.clone())
    }

    /// Inserts a value, evicting oldest-inserted entries over capacity
    ///
    /// Re-inserting an existing key refreshes its value and timestamp but
    /// keeps its original position in the eviction order.
    pub fn insert(&mut self, key: String, value: V) {
        let entry = Entry {
            value,
            inserted_at: Instant::now(),
        };
        if self.entries.insert(key.clone(), entry).is_some() {
            return;
        }
        // Every queued key maps to a live entry; removals keep both in sync,
        // so the front of the queue is always the oldest-inserted live key.
        while self.entries.len() > self.max_entries {
            match self.insertion_order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.insertion_order.push_back(key);
    }

    /// Number of entries currently stored, expired or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
