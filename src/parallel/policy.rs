use rayon::prelude::*;
use rayon::ThreadPool;

/// How an index operation schedules its inner loops.
///
/// Both variants run the same algorithm body; `Parallel` fans the loop out on
/// a rayon pool and returns only after every worker has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    #[default]
    Sequential,
    Parallel,
}

impl ExecutionPolicy {
    pub fn is_parallel(self) -> bool {
        matches!(self, ExecutionPolicy::Parallel)
    }

    /// Run `op` on `pool` for parallel work, inline otherwise. Parallel
    /// iterators started inside `op` use `pool`.
    pub fn install<R, F>(self, pool: &ThreadPool, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match self {
            ExecutionPolicy::Sequential => op(),
            ExecutionPolicy::Parallel => pool.install(op),
        }
    }

    pub fn for_each<T, F>(self, items: &[T], f: F)
    where
        T: Sync,
        F: Fn(&T) + Sync + Send,
    {
        match self {
            ExecutionPolicy::Sequential => items.iter().for_each(f),
            ExecutionPolicy::Parallel => items.par_iter().for_each(f),
        }
    }

    pub fn for_each_mut<T, F>(self, items: &mut [T], f: F)
    where
        T: Send,
        F: Fn(&mut T) + Sync + Send,
    {
        match self {
            ExecutionPolicy::Sequential => items.iter_mut().for_each(f),
            ExecutionPolicy::Parallel => items.par_iter_mut().for_each(f),
        }
    }

    /// Order preserving map
    pub fn map<T, R, F>(self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        match self {
            ExecutionPolicy::Sequential => items.iter().map(f).collect(),
            ExecutionPolicy::Parallel => items.par_iter().map(f).collect(),
        }
    }

    pub fn any<T, F>(self, items: &[T], predicate: F) -> bool
    where
        T: Sync,
        F: Fn(&T) -> bool + Sync + Send,
    {
        match self {
            ExecutionPolicy::Sequential => items.iter().any(predicate),
            ExecutionPolicy::Parallel => items.par_iter().any(predicate),
        }
    }

    pub fn sort_by<T, F>(self, items: &mut [T], compare: F)
    where
        T: Send,
        F: Fn(&T, &T) -> std::cmp::Ordering + Sync,
    {
        match self {
            ExecutionPolicy::Sequential => items.sort_by(compare),
            ExecutionPolicy::Parallel => items.par_sort_by(compare),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn pool() -> ThreadPool {
        rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap()
    }

    #[test]
    fn both_policies_visit_every_item() {
        let items: Vec<usize> = (1..=100).collect();
        for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
            let sum = AtomicUsize::new(0);
            policy.install(&pool(), || {
                policy.for_each(&items, |i| {
                    sum.fetch_add(*i, Ordering::Relaxed);
                });
            });
            assert_eq!(sum.into_inner(), 5050);
        }
    }

    #[test]
    fn map_preserves_order() {
        let items: Vec<i32> = (0..1000).collect();
        let seq = ExecutionPolicy::Sequential.map(&items, |i| i * 2);
        let par = ExecutionPolicy::Parallel.install(&pool(), || {
            ExecutionPolicy::Parallel.map(&items, |i| i * 2)
        });
        assert_eq!(seq, par);
    }

    #[test]
    fn for_each_mut_and_sort() {
        let mut items: Vec<i32> = (0..50).rev().collect();
        ExecutionPolicy::Parallel.for_each_mut(&mut items, |i| *i += 1);
        ExecutionPolicy::Parallel.sort_by(&mut items, |a, b| a.cmp(b));
        assert_eq!(items, (1..=50).collect::<Vec<_>>());
        assert!(ExecutionPolicy::Parallel.any(&items, |&i| i == 50));
        assert!(!ExecutionPolicy::Sequential.any(&items, |&i| i == 0));
    }
}
