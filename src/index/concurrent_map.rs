use std::collections::{BTreeMap, HashMap};
use std::ops::{Deref, DerefMut};

use parking_lot::{Mutex, MutexGuard};

/// Thread-safe accumulator sharded by key, used by the parallel ranker to
/// avoid serializing every document update behind one global lock. Each
/// shard owns an independent `Mutex<HashMap<..>>`; two keys that hash to
/// different shards never contend with each other.
pub struct ConcurrentMap<V> {
    shards: Vec<Mutex<HashMap<u64, V>>>,
}

impl<V: Default> ConcurrentMap<V> {
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        let mut shards = Vec::with_capacity(shard_count);
        for _ in 0..shard_count {
            shards.push(Mutex::new(HashMap::new()));
        }
        ConcurrentMap { shards }
    }

    fn shard_for(&self, key: u64) -> &Mutex<HashMap<u64, V>> {
        &self.shards[(key % self.shards.len() as u64) as usize]
    }

    /// Acquire the shard holding `key`, creating a zero-initialized entry if
    /// absent, and return a guard giving mutable access to it. The shard's
    /// lock is held for the guard's lifetime.
    pub fn at(&self, key: u64) -> Access<'_, V> {
        let mut guard = self.shard_for(key).lock();
        guard.entry(key).or_default();
        Access { guard, key }
    }

    pub fn erase(&self, key: u64) {
        self.shard_for(key).lock().remove(&key);
    }

    /// Acquire every shard in turn and merge them into a single ordered map.
    /// Callers must ensure there are no concurrent writers while this runs.
    pub fn snapshot(&self) -> BTreeMap<u64, V>
    where
        V: Clone,
    {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            let guard = shard.lock();
            for (k, v) in guard.iter() {
                merged.insert(*k, v.clone());
            }
        }
        merged
    }
}

pub struct Access<'a, V> {
    guard: MutexGuard<'a, HashMap<u64, V>>,
    key: u64,
}

impl<'a, V> Deref for Access<'a, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.guard.get(&self.key).expect("entry created by at()")
    }
}

impl<'a, V> DerefMut for Access<'a, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.guard.get_mut(&self.key).expect("entry created by at()")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_across_shards() {
        let map: ConcurrentMap<f64> = ConcurrentMap::new(4);
        *map.at(1) += 1.5;
        *map.at(1) += 2.5;
        *map.at(5) += 10.0;

        let snapshot = map.snapshot();
        assert_eq!(snapshot.get(&1), Some(&4.0));
        assert_eq!(snapshot.get(&5), Some(&10.0));
    }

    #[test]
    fn erase_removes_entry() {
        let map: ConcurrentMap<f64> = ConcurrentMap::new(4);
        *map.at(7) += 1.0;
        map.erase(7);
        assert!(map.snapshot().get(&7).is_none());
    }

    #[test]
    fn single_shard_still_works() {
        let map: ConcurrentMap<f64> = ConcurrentMap::new(1);
        *map.at(1) += 1.0;
        *map.at(2) += 2.0;
        let snapshot = map.snapshot();
        assert_eq!(snapshot.get(&1), Some(&1.0));
        assert_eq!(snapshot.get(&2), Some(&2.0));
    }
}
