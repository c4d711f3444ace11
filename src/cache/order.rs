//! Insertion Order Tracker Module
//!
//! Tracks the order in which keys were first inserted, driving eviction.

use std::collections::VecDeque;

// == Insertion Order Tracker ==
/// Tracks key insertion order for oldest-first eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest inserted
/// - Back = Newest inserted
///
/// Unlike an LRU tracker there is no "touch": neither reads nor overwrites
/// move a key. A key's position is fixed by its original insertion and only
/// changes when the key is removed and later re-inserted.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Keys ordered by first insertion
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push ==
    /// Records a newly inserted key at the back (newest position).
    ///
    /// Callers only invoke this for brand-new keys; overwrites keep the
    /// original position.
    pub fn push(&mut self, key: String) {
        self.order.push_back(key);
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest-inserted key.
    ///
    /// Returns None if the tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest-inserted key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Iterate ==
    /// Iterates keys from oldest to newest insertion.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    // == Clear ==
    /// Removes all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = InsertionOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_order_push_keeps_insertion_order() {
        let mut order = InsertionOrder::new();

        order.push("key1".to_string());
        order.push("key2".to_string());
        order.push("key3".to_string());

        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_oldest(), Some(&"key1".to_string()));
    }

    #[test]
    fn test_order_pop_oldest() {
        let mut order = InsertionOrder::new();

        order.push("a".to_string());
        order.push("b".to_string());
        order.push("c".to_string());

        assert_eq!(order.pop_oldest(), Some("a".to_string()));
        assert_eq!(order.pop_oldest(), Some("b".to_string()));
        assert_eq!(order.pop_oldest(), Some("c".to_string()));
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_order_pop_empty() {
        let mut order = InsertionOrder::new();
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_order_remove() {
        let mut order = InsertionOrder::new();

        order.push("key1".to_string());
        order.push("key2".to_string());
        order.push("key3".to_string());

        order.remove("key2");

        assert_eq!(order.len(), 2);
        assert!(!order.contains("key2"));
        assert!(order.contains("key1"));
        assert!(order.contains("key3"));
    }

    #[test]
    fn test_order_remove_nonexistent_key() {
        let mut order = InsertionOrder::new();

        order.push("key1".to_string());
        order.remove("nonexistent");

        assert_eq!(order.len(), 1);
        assert!(order.contains("key1"));
    }

    #[test]
    fn test_order_reinsert_moves_to_back() {
        let mut order = InsertionOrder::new();

        order.push("a".to_string());
        order.push("b".to_string());

        // Remove and re-insert 'a': it becomes the newest
        order.remove("a");
        order.push("a".to_string());

        assert_eq!(order.pop_oldest(), Some("b".to_string()));
        assert_eq!(order.pop_oldest(), Some("a".to_string()));
    }

    #[test]
    fn test_order_iter_oldest_first() {
        let mut order = InsertionOrder::new();

        order.push("x".to_string());
        order.push("y".to_string());
        order.push("z".to_string());

        let keys: Vec<&String> = order.iter().collect();
        assert_eq!(keys, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_order_clear() {
        let mut order = InsertionOrder::new();

        order.push("a".to_string());
        order.push("b".to_string());
        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.pop_oldest(), None);
    }
}
