use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 10;
const DEFAULT_RETAIN: usize = 5;

/// Bounded memory of alarm fires that have already been handled.
///
/// Once more than `capacity` keys are held, only the `retain` most recent
/// ones are kept.
#[derive(Debug, Clone)]
pub struct RecentFireKeys {
    keys: VecDeque<String>,
    capacity: usize,
    retain: usize,
}

impl RecentFireKeys {
    pub fn new(capacity: usize, retain: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            keys: VecDeque::with_capacity(capacity + 1),
            capacity,
            retain: retain.clamp(1, capacity),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Records `key` and returns `true` if it had not been seen before
    pub fn insert(&mut self, key: String) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.keys.push_back(key);
        if self.keys.len() > self.capacity {
            let evicted = self.keys.len() - self.retain;
            self.keys.drain(..evicted);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for RecentFireKeys {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_RETAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_rejects_duplicate_keys() {
        let mut keys = RecentFireKeys::default();
        assert!(keys.insert("a_1".into()));
        assert!(!keys.insert("a_1".into()));
        assert!(keys.insert("a_2".into()));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn it_evicts_oldest_keys_past_capacity() {
        let mut keys = RecentFireKeys::default();
        for i in 0..10 {
            assert!(keys.insert(format!("k_{}", i)));
        }
        assert_eq!(keys.len(), 10);

        // The 11th key overflows and only the five most recent survive
        assert!(keys.insert("k_10".into()));
        assert_eq!(keys.len(), 5);
        for i in 0..6 {
            assert!(!keys.contains(&format!("k_{}", i)));
        }
        for i in 6..11 {
            assert!(keys.contains(&format!("k_{}", i)));
        }

        // An evicted key is processed again
        assert!(keys.insert("k_0".into()));
    }
}
