// SPDX-License-Identifier: MPL-2.0
//! Single-entry memoization of a pure function of one input.

/// Caches `compute(key)` for the last key seen.
///
/// The value is recomputed only when [`Memo::refresh`] is given a key that
/// differs from the cached one.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    key: K,
    value: V,
    compute: fn(K) -> V,
    computations: u64,
}

impl<K: Copy + PartialEq, V> Memo<K, V> {
    /// Computes the value for `key` once, up front.
    pub fn new(key: K, compute: fn(K) -> V) -> Self {
        Self {
            key,
            value: compute(key),
            compute,
            computations: 1,
        }
    }

    /// Brings the cached value up to date with `key`.
    /// Returns `true` if it had to be recomputed.
    pub fn refresh(&mut self, key: K) -> bool {
        if key == self.key {
            return false;
        }
        self.key = key;
        self.value = (self.compute)(key);
        self.computations += 1;
        true
    }

    #[must_use]
    pub fn key(&self) -> K {
        self.key
    }

    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// How many times the function has run, including the initial one.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(n: u32) -> u32 {
        n * n
    }

    #[test]
    fn computes_on_creation() {
        let memo = Memo::new(3, square);
        assert_eq!(*memo.value(), 9);
        assert_eq!(memo.computations(), 1);
    }

    #[test]
    fn same_key_hits_cache() {
        let mut memo = Memo::new(3, square);
        assert!(!memo.refresh(3));
        assert!(!memo.refresh(3));
        assert_eq!(memo.computations(), 1);
    }

    #[test]
    fn new_key_recomputes_once() {
        let mut memo = Memo::new(3, square);
        assert!(memo.refresh(4));
        assert_eq!(*memo.value(), 16);
        assert_eq!(memo.key(), 4);
        assert!(!memo.refresh(4));
        assert_eq!(memo.computations(), 2);
    }
}
