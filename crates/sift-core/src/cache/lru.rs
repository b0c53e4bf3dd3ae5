use std::collections::HashMap;

use parking_lot::Mutex;

use super::error::CacheError;

/// Sentinel index for list ends and detached nodes.
const NIL: usize = usize::MAX;

struct Node {
    key: [u8; 32],
    score: f32,
    prev: usize,
    next: usize,
}

/// Map + recency list, guarded as one unit: a `get` reorders the list, so
/// reads are mutations too.
struct Inner {
    map: HashMap<[u8; 32], usize>,
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
}

impl Inner {
    fn detach(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;

        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }
}

/// Bounded-capacity cache of toxicity scores with least-recently-used
/// eviction.
///
/// Keys are 32-byte hashes of normalized text (see [`crate::hashing`]) and are
/// treated as opaque. Recency is a strict total order maintained by list
/// position, so ties cannot arise: every access moves the entry to the front,
/// and among untouched entries the earlier insertion sits closer to the tail
/// and is evicted first.
///
/// The whole structure sits behind a single [`Mutex`], which makes the cache
/// `Send + Sync`; share it via `Arc` across request handlers.
pub struct ScoreCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl ScoreCache {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] for a zero capacity; the
    /// capacity is fixed for the cache's lifetime.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity { value: capacity });
        }

        Ok(Self {
            capacity,
            inner: Mutex::new(Inner {
                map: HashMap::with_capacity(capacity.min(1024)),
                nodes: Vec::new(),
                free: Vec::new(),
                head: NIL,
                tail: NIL,
            }),
        })
    }

    /// Returns the cached score for `key` and marks the entry
    /// most-recently-used. A miss has no side effect.
    pub fn get(&self, key: &[u8; 32]) -> Option<f32> {
        let mut inner = self.inner.lock();
        let idx = *inner.map.get(key)?;
        inner.detach(idx);
        inner.push_front(idx);
        Some(inner.nodes[idx].score)
    }

    /// Inserts or overwrites the entry for `key` and marks it
    /// most-recently-used, evicting the least-recently-used entry if the
    /// insertion overflows the capacity.
    pub fn set(&self, key: [u8; 32], score: f32) {
        let mut inner = self.inner.lock();

        if let Some(&idx) = inner.map.get(&key) {
            inner.nodes[idx].score = score;
            inner.detach(idx);
            inner.push_front(idx);
            return;
        }

        let idx = match inner.free.pop() {
            Some(idx) => {
                inner.nodes[idx].key = key;
                inner.nodes[idx].score = score;
                idx
            }
            None => {
                inner.nodes.push(Node {
                    key,
                    score,
                    prev: NIL,
                    next: NIL,
                });
                inner.nodes.len() - 1
            }
        };
        inner.map.insert(key, idx);
        inner.push_front(idx);

        // A set grows the map by at most one, so evicting a single entry
        // restores the invariant. The victim is never the entry just inserted:
        // overflow implies at least two entries, and the new one is at the
        // head while the victim is taken from the tail.
        if inner.map.len() > self.capacity {
            let victim = inner.tail;
            inner.detach(victim);
            let victim_key = inner.nodes[victim].key;
            inner.map.remove(&victim_key);
            inner.free.push(victim);
        }
    }

    /// Returns `true` if `key` is cached, without touching recency.
    pub fn contains(&self, key: &[u8; 32]) -> bool {
        self.inner.lock().map.contains_key(key)
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().map.len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the configured capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl std::fmt::Debug for ScoreCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.len())
            .finish()
    }
}
