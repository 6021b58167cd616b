//! Bounded result cache with FIFO eviction
//!
//! Eviction follows insertion order, not access order: a key that is read
//! constantly is still the first to go once it is the oldest entry.

use log::trace;
use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

struct CacheState<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
}

/// Thread-safe bounded cache evicting the oldest-inserted entry
pub struct FifoCache<K, V> {
    state: Mutex<CacheState<K, V>>,
    capacity: usize,
}

impl<K, V> FifoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries; 0 stores nothing
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<K, V>> {
        // no user code runs under this lock, poisoning is ignored
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cached value for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().entries.get(key).cloned()
    }

    /// Whether `key` is cached
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().entries.contains_key(key)
    }

    /// Store `value` under `key`
    ///
    /// A new key evicts the oldest entry when the cache is full. A key that
    /// is already present keeps its position and takes the new value.
    pub fn insert(&self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        let mut state = self.lock();
        if let Some(existing) = state.entries.get_mut(&key) {
            *existing = value;
            return;
        }

        if state.entries.len() >= self.capacity {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
                trace!("cache full ({}), evicted oldest entry", self.capacity);
            }
        }

        state.order.push_back(key.clone());
        state.entries.insert(key, value);
    }

    /// Cached value for `key`, computing and storing it on a miss
    ///
    /// The lock is not held while `compute` runs, so concurrent misses on
    /// the same key may both compute; the last one to finish wins.
    pub fn get_or_try_insert_with<E, F>(&self, key: &K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(hit) = self.get(key) {
            trace!("cache hit");
            return Ok(hit);
        }

        let value = compute()?;
        self.insert(key.clone(), value.clone());
        Ok(value)
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Alias of [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }

    /// Keys from oldest to newest
    pub fn keys(&self) -> Vec<K> {
        self.lock().order.iter().cloned().collect()
    }
}

impl<K, V> fmt::Debug for FifoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifoCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

/// A single-argument function wrapped with a [`FifoCache`]
pub struct Memoized<K, V, F> {
    func: F,
    cache: FifoCache<K, V>,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    /// Call the wrapped function, or return the cached result for `arg`
    pub fn call(&self, arg: K) -> V {
        match self.cache.get_or_try_insert_with(&arg, || {
            Ok::<V, std::convert::Infallible>((self.func)(&arg))
        }) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Number of cached results
    pub fn size(&self) -> usize {
        self.cache.len()
    }

    /// Forget every cached result
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// The underlying cache
    pub fn cache(&self) -> &FifoCache<K, V> {
        &self.cache
    }
}

/// Wrap `func` so repeated calls with the same argument are served from a
/// cache of `capacity` entries
pub fn memoize<K, V, F>(capacity: usize, func: F) -> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    Memoized {
        func,
        cache: FifoCache::new(capacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_insert_and_get() {
        let cache = FifoCache::new(2);
        cache.insert("a".to_string(), 1);
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_fifo_eviction_ignores_access() {
        let cache = FifoCache::new(2);
        cache.insert("first", 1);
        cache.insert("second", 2);

        // reading "first" must not protect it
        assert_eq!(cache.get("first"), Some(1));

        cache.insert("third", 3);
        assert!(!cache.contains_key("first"));
        assert_eq!(cache.keys(), vec!["second", "third"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 10);
        assert_eq!(cache.get("a"), Some(10));
        assert_eq!(cache.keys(), vec!["a", "b"]);

        cache.insert("c", 3);
        assert!(!cache.contains_key("a"));
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = FifoCache::new(0);
        cache.insert(1, 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = FifoCache::new(3);
        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.keys().is_empty());
    }

    #[test]
    fn test_get_or_try_insert_with_skips_errors() {
        let cache: FifoCache<u32, u32> = FifoCache::new(4);
        let failed: Result<u32, &str> = cache.get_or_try_insert_with(&1, || Err("boom"));
        assert!(failed.is_err());
        assert!(cache.is_empty());

        let value: Result<u32, &str> = cache.get_or_try_insert_with(&1, || Ok(7));
        assert_eq!(value, Ok(7));
        let cached: Result<u32, &str> = cache.get_or_try_insert_with(&1, || Ok(99));
        assert_eq!(cached, Ok(7));
    }

    #[test]
    fn test_memoize_runs_once_per_key() {
        let calls = AtomicUsize::new(0);
        let square = memoize(10, |x: &u64| {
            calls.fetch_add(1, Ordering::SeqCst);
            x * x
        });

        assert_eq!(square.call(4), 16);
        assert_eq!(square.call(4), 16);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(square.size(), 1);

        square.clear();
        assert_eq!(square.call(4), 16);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_memoize_evicts_oldest() {
        let calls = AtomicUsize::new(0);
        let double = memoize(2, |x: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            x * 2
        });

        double.call(1);
        double.call(2);
        double.call(3); // evicts 1
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        double.call(1); // fresh miss
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        double.call(3); // still cached
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_concurrent_inserts_stay_bounded() {
        let cache = Arc::new(FifoCache::new(8));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        cache.insert(i % 20, t);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 8);
        let keys = cache.keys();
        assert_eq!(keys.len(), 8);
        for key in keys {
            assert!(cache.contains_key(&key));
        }
    }
}
