use super::traits::{HashFunction, Map};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Resize once `size / buckets` goes past this ratio
const LOAD_FACTOR: f64 = 0.75;

/// Hashes any `Hash` key through the standard SipHasher
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicHashFunction;

impl<K: Hash> HashFunction<K> for BasicHashFunction {
    fn hash_code(&self, key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}

/// Hash table with separate chaining
///
/// Each bucket is a small vector of entries. The bucket array doubles and
/// every entry is rehashed when the load factor is exceeded.
#[derive(Debug, Clone)]
pub struct HashTableSC<K, V, H = BasicHashFunction> {
    buckets: Vec<Vec<(K, V)>>,
    size: usize,
    hash_function: H,
}

impl<K, V> HashTableSC<K, V, BasicHashFunction>
where
    K: Hash + Eq,
{
    /// Create a table with `initial_capacity` buckets and the basic hash function
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_hash_function(initial_capacity, BasicHashFunction)
    }
}

impl<K, V, H> HashTableSC<K, V, H>
where
    K: Eq,
    H: HashFunction<K>,
{
    /// Create a table with a custom hash function
    ///
    /// A capacity of zero is bumped to one bucket.
    pub fn with_hash_function(initial_capacity: usize, hash_function: H) -> Self {
        let capacity = initial_capacity.max(1);
        Self {
            buckets: (0..capacity).map(|_| Vec::new()).collect(),
            size: 0,
            hash_function,
        }
    }

    /// Number of buckets currently allocated
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate entries in bucket order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    fn bucket_index(&self, key: &K) -> usize {
        (self.hash_function.hash_code(key) % self.buckets.len() as u64) as usize
    }

    fn rehash(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| Vec::new()).collect(),
        );
        for (key, value) in old.into_iter().flatten() {
            let index = self.bucket_index(&key);
            self.buckets[index].push((key, value));
        }
    }
}

impl<K, V, H> Map<K, V> for HashTableSC<K, V, H>
where
    K: Eq + Clone,
    H: HashFunction<K>,
{
    fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        if let Some(slot) = self.buckets[index].iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }

        self.buckets[index].push((key, value));
        self.size += 1;

        if self.size as f64 / self.buckets.len() as f64 > LOAD_FACTOR {
            self.rehash();
        }
        None
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(k, _)| k == key)?;
        self.size -= 1;
        Some(bucket.swap_remove(position).1)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sends every key to the same bucket to exercise chaining
    struct ConstantHash;

    impl HashFunction<u32> for ConstantHash {
        fn hash_code(&self, _key: &u32) -> u64 {
            7
        }
    }

    #[test]
    fn test_put_get_replace() {
        let mut table = HashTableSC::new(2);
        assert_eq!(table.put(1u32, "one"), None);
        assert_eq!(table.put(2u32, "two"), None);
        assert_eq!(table.put(1u32, "uno"), Some("one"));

        assert_eq!(table.size(), 2);
        assert_eq!(table.get(&1), Some(&"uno"));
        assert_eq!(table.get(&2), Some(&"two"));
        assert_eq!(table.get(&3), None);
    }

    #[test]
    fn test_grows_past_load_factor() {
        let mut table = HashTableSC::new(2);
        for i in 0..50u32 {
            table.put(i, i * 10);
        }
        assert_eq!(table.size(), 50);
        assert!(table.bucket_count() >= 64);
        for i in 0..50u32 {
            assert_eq!(table.get(&i), Some(&(i * 10)));
        }
    }

    #[test]
    fn test_remove() {
        let mut table = HashTableSC::new(4);
        table.put("a".to_string(), 1);
        table.put("b".to_string(), 2);

        assert_eq!(table.remove(&"a".to_string()), Some(1));
        assert_eq!(table.remove(&"a".to_string()), None);
        assert_eq!(table.size(), 1);
        assert!(!table.contains_key(&"a".to_string()));
        assert!(table.contains_key(&"b".to_string()));
    }

    #[test]
    fn test_chaining_with_collisions() {
        let mut table = HashTableSC::with_hash_function(0, ConstantHash);
        for i in 0..10u32 {
            table.put(i, i);
        }
        if let Some(value) = table.get_mut(&4) {
            *value = 40;
        }
        assert_eq!(table.get(&4), Some(&40));
        assert_eq!(table.remove(&9), Some(9));

        let mut keys = table.keys();
        keys.sort();
        assert_eq!(keys, (0..9).collect::<Vec<u32>>());
        assert_eq!(table.values().len(), 9);
    }
}
