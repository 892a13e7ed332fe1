use std::collections::BTreeMap;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use crate::core::types::DocId;

/// Keys that can be routed to an accumulator partition
pub trait PartitionKey: Copy + Ord {
    fn partition(&self, partition_count: usize) -> usize;
}

impl PartitionKey for DocId {
    fn partition(&self, partition_count: usize) -> usize {
        self.0.partition(partition_count)
    }
}

macro_rules! impl_partition_key {
    ($($t:ty),*) => {
        $(
            impl PartitionKey for $t {
                fn partition(&self, partition_count: usize) -> usize {
                    // Two's complement reinterpretation keeps negative keys in range
                    (*self as u64 % partition_count as u64) as usize
                }
            }
        )*
    };
}

impl_partition_key!(i32, i64, u32, u64, usize);

/// Live access to one accumulator value. Holds the owning partition's lock
/// until dropped.
pub type Access<'a, V> = MappedMutexGuard<'a, V>;

/// Key-sharded map for concurrent read-modify-write.
///
/// Key `k` lives in partition `k mod P`. Every operation locks exactly one
/// partition, so writers on different partitions never block each other and
/// writers on the same key are serialized.
pub struct ConcurrentAccumulator<K, V> {
    partitions: Vec<Mutex<BTreeMap<K, V>>>,
}

impl<K, V> ConcurrentAccumulator<K, V>
where
    K: PartitionKey,
    V: Default,
{
    pub fn new(partition_count: usize) -> Self {
        let partition_count = partition_count.max(1);
        ConcurrentAccumulator {
            partitions: (0..partition_count)
                .map(|_| Mutex::new(BTreeMap::new()))
                .collect(),
        }
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    fn partition_for(&self, key: &K) -> &Mutex<BTreeMap<K, V>> {
        &self.partitions[key.partition(self.partitions.len())]
    }

    /// Lock the key's partition and return its value, inserting `V::default()`
    /// when absent.
    pub fn access(&self, key: K) -> Access<'_, V> {
        let guard = self.partition_for(&key).lock();
        MutexGuard::map(guard, |map| map.entry(key).or_default())
    }

    pub fn erase(&self, key: &K) -> Option<V> {
        self.partition_for(key).lock().remove(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.partition_for(key).lock().contains_key(key)
    }

    /// Ordered snapshot of the keys currently present
    pub fn keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = self.partitions.iter()
            .flat_map(|partition| partition.lock().keys().copied().collect::<Vec<_>>())
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.partitions.iter().map(|partition| partition.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(|partition| partition.lock().is_empty())
    }

    /// Move every partition, one lock at a time, into a single ordered map.
    /// Call only once concurrent writers are done.
    pub fn drain(&self) -> BTreeMap<K, V> {
        let mut result = BTreeMap::new();
        for partition in &self.partitions {
            let mut map = partition.lock();
            result.append(&mut *map);
        }
        result
    }
}
