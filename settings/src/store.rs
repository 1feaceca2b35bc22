use std::collections::HashMap;

/// A key-value store holding byte arrays and strings.
///
/// Implementations own persistence. Reads of a key that holds the other kind
/// of value return `None`.
pub trait ByteStore {
    fn get_bytes(&self, key: &str) -> Option<Vec<u8>>;

    fn put_bytes(&mut self, key: &str, value: &[u8]);

    fn get_string(&self, key: &str) -> Option<String>;

    fn put_string(&mut self, key: &str, value: &str);

    /// Removes `key` if present.
    fn remove(&mut self, key: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Entry {
    Bytes(Vec<u8>),
    String(String),
}

/// A [ByteStore] that keeps entries in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Entry>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl ByteStore for MemoryStore {
    fn get_bytes(&self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key)? {
            Entry::Bytes(value) => Some(value.clone()),
            Entry::String(_) => None,
        }
    }

    fn put_bytes(&mut self, key: &str, value: &[u8]) {
        self.entries
            .insert(key.to_string(), Entry::Bytes(value.to_vec()));
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.entries.get(key)? {
            Entry::String(value) => Some(value.clone()),
            Entry::Bytes(_) => None,
        }
    }

    fn put_string(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), Entry::String(value.to_string()));
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let mut store = MemoryStore::default();
        assert!(store.is_empty());
        assert!(store.get_bytes("a").is_none());

        store.put_bytes("a", &[1, 2, 3]);
        store.put_string("b", "hello");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_bytes("a"), Some(vec![1, 2, 3]));
        assert_eq!(store.get_string("b"), Some("hello".to_string()));

        store.remove("a");
        assert!(!store.contains("a"));
        assert_eq!(store.len(), 1);

        // Removing a missing key is a no-op
        store.remove("a");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_kind_mismatch() {
        let mut store = MemoryStore::default();
        store.put_bytes("a", &[1]);
        store.put_string("b", "x");
        assert!(store.get_string("a").is_none());
        assert!(store.get_bytes("b").is_none());
    }

    #[test]
    fn test_overwrite() {
        let mut store = MemoryStore::default();
        store.put_bytes("a", &[1]);
        store.put_string("a", "x");
        assert_eq!(store.get_string("a"), Some("x".to_string()));
        assert!(store.get_bytes("a").is_none());
    }
}
