/// Last-in, first-out container
pub trait Stack<T> {
    /// Push an item on top of the stack
    fn push(&mut self, item: T);

    /// Remove and return the top item, `None` when empty
    fn pop(&mut self) -> Option<T>;

    /// Peek at the top item without removing it
    fn top(&self) -> Option<&T>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Drop every item
    fn clear(&mut self);
}

/// First-in, first-out container
pub trait Queue<T> {
    /// Append an item at the back of the queue
    fn enqueue(&mut self, item: T);

    /// Remove and return the front item, `None` when empty
    fn dequeue(&mut self) -> Option<T>;

    /// Peek at the front item without removing it
    fn front(&self) -> Option<&T>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Drop every item
    fn clear(&mut self);
}

/// Key-value container with unique keys
pub trait Map<K, V> {
    fn get(&self, key: &K) -> Option<&V>;

    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Insert or replace the value for `key`, returning the replaced value
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Remove the entry for `key`, returning its value
    fn remove(&mut self, key: &K) -> Option<V>;

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Snapshot of all keys, in bucket order
    fn keys(&self) -> Vec<K>;

    /// Borrowed view of all values, in bucket order
    fn values(&self) -> Vec<&V>;
}

/// Maps a key to a bucket hash for [`HashTableSC`](super::HashTableSC)
pub trait HashFunction<K> {
    fn hash_code(&self, key: &K) -> u64;
}
