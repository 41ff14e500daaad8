use std::fmt::{Debug, Display};

/// Number of buckets a table gets when none is requested.
pub const DEFAULT_CAPACITY: usize = 2;

type Link<V> = Option<Box<Entry<V>>>;

struct Entry<V> {
    key: String,
    value: V,
    next: Link<V>,
}

impl<V> Entry<V> {
    fn new(key: &str, value: V) -> Self {
        Entry {
            key: String::from(key),
            value,
            next: None,
        }
    }
}

/// A string-keyed table with a fixed number of buckets and separate chaining.
///
/// Every bucket owns a singly linked chain. New keys are appended at the tail of
/// their chain, so a chain always lists its keys in insertion order.
///
/// The bucket count is chosen at construction and never changes. There is no
/// rehashing: as more keys land in the table the chains simply grow, and
/// lookups degrade towards linear time in the number of keys.
pub struct HashTable<V> {
    buckets: Vec<Link<V>>,
    len: usize,
}

impl<V> HashTable<V> {
    pub fn new() -> Self {
        HashTable::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table with `capacity` buckets. A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buckets = Vec::with_capacity(capacity.max(1));
        buckets.resize_with(capacity.max(1), || None);

        HashTable { buckets, len: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket a key is stored in.
    pub fn bucket_index(&self, key: &str) -> usize {
        (hash_key(key) % self.buckets.len() as u64) as usize
    }

    /// Inserts `value` under `key`, overwriting the value in place if the key is
    /// already chained in its bucket.
    pub fn put(&mut self, key: &str, value: V) {
        let index = self.bucket_index(key);
        let mut cursor = &mut self.buckets[index];

        while let Some(entry) = cursor {
            if entry.key == key {
                entry.value = value;
                return;
            }
            cursor = &mut entry.next;
        }

        *cursor = Some(Box::new(Entry::new(key, value)));
        self.len += 1;
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let mut cursor = self.buckets[self.bucket_index(key)].as_deref();

        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }

        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Unlinks the entry for `key` and hands back its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let mut cursor = &mut self.buckets[index];

        while cursor.as_ref().is_some_and(|entry| entry.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let Entry { value, next, .. } = *cursor.take()?;
        *cursor = next;
        self.len -= 1;

        Some(value)
    }

    /// Chains in bucket order, each yielding its `(key, value)` pairs in chain order.
    pub fn buckets(&self) -> impl Iterator<Item = Chain<'_, V>> {
        self.buckets.iter().map(|head| Chain {
            cursor: head.as_deref(),
        })
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        HashTable::new()
    }
}

// Chains can get long since the table never grows. Clone, Debug and Drop all
// walk them one node at a time instead of recursing through the boxes.
impl<V: Clone> Clone for HashTable<V> {
    fn clone(&self) -> Self {
        let buckets = self
            .buckets()
            .map(|chain| {
                let entries = chain.collect::<Vec<(&str, &V)>>();
                entries.into_iter().rev().fold(None, |next, (key, value)| {
                    Some(Box::new(Entry {
                        key: String::from(key),
                        value: value.clone(),
                        next,
                    }))
                })
            })
            .collect();

        HashTable {
            buckets,
            len: self.len,
        }
    }
}

impl<V: Debug> Debug for HashTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.buckets().map(|chain| chain.collect::<Vec<(&str, &V)>>()))
            .finish()
    }
}

impl<V> Drop for HashTable<V> {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut cursor = bucket.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
            }
        }
    }
}

impl<V: Display> Display for HashTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, chain) in self.buckets().enumerate() {
            write!(f, "{}: ", index)?;
            for (key, value) in chain {
                write!(f, "({}, {}) -> ", key, value)?;
            }
            writeln!(f, "None")?;
        }

        Ok(())
    }
}

/// Walks a single bucket's chain.
pub struct Chain<'a, V> {
    cursor: Option<&'a Entry<V>>,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cursor?;
        self.cursor = entry.next.as_deref();
        Some((entry.key.as_str(), &entry.value))
    }
}

/// Polynomial string hash (base 31) over the key's bytes.
pub fn hash_key(key: &str) -> u64 {
    key.bytes()
        .fold(0u64, |hash, byte| hash.wrapping_mul(31).wrapping_add(byte as u64))
}
