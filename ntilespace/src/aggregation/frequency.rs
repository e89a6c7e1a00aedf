use std::collections::{btree_map, BTreeMap};

/// Exact count of every distinct value seen.
///
/// Memory grows with the number of distinct values, not with the number of observations.
/// Iteration is always in ascending value order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap<T> {
    frequencies: BTreeMap<T, u64>,
    total: u64,
}

impl<T: Ord> Default for FrequencyMap<T> {
    fn default() -> Self {
        Self {
            frequencies: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<T: Ord> FrequencyMap<T> {
    /// An empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add 1 to the value's count
    pub fn accumulate(&mut self, value: T) {
        self.accumulate_count(value, 1)
    }

    /// Add `count` occurrences of the value at once
    pub fn accumulate_count(&mut self, value: T, count: u64) {
        if count == 0 {
            return;
        }
        self.frequencies
            .entry(value)
            .and_modify(|c| *c += count)
            .or_insert(count);
        self.total += count;
    }

    /// Key-wise sum of another map into this one.
    pub fn absorb(&mut self, mut other: FrequencyMap<T>) {
        // Walk whichever side is smaller.
        if self.frequencies.len() < other.frequencies.len() {
            std::mem::swap(self, &mut other);
        }
        for (value, count) in other.frequencies {
            self.accumulate_count(value, count);
        }
    }

    /// Pure form of [`FrequencyMap::absorb`]
    pub fn merged(mut self, other: FrequencyMap<T>) -> Self {
        self.absorb(other);
        self
    }

    /// Reset the aggregation to an empty initial state
    pub fn zero(&mut self) {
        self.frequencies.clear();
        self.total = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of observations accumulated
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct values accumulated
    pub fn distinct(&self) -> usize {
        self.frequencies.len()
    }

    /// How many times this value was seen
    pub fn count(&self, value: &T) -> u64 {
        self.frequencies.get(value).copied().unwrap_or_default()
    }

    pub fn min(&self) -> Option<&T> {
        self.frequencies.keys().next()
    }

    pub fn max(&self) -> Option<&T> {
        self.frequencies.keys().next_back()
    }

    /// The most frequent value. Ties go to the smallest value.
    pub fn mode(&self) -> Option<(&T, u64)> {
        let mut best: Option<(&T, u64)> = None;
        for (value, count) in self.iter() {
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((value, count)),
            }
        }
        best
    }

    /// Ascending (value, count) view
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.frequencies.iter(),
        }
    }
}

/// Ascending iterator over a [`FrequencyMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: btree_map::Iter<'a, T, u64>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(value, count)| (value, *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(value, count)| (value, *count))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Ord> IntoIterator for &'a FrequencyMap<T> {
    type Item = (&'a T, u64);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for FrequencyMap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.accumulate(value));
    }
}

impl<T: Ord> FromIterator<T> for FrequencyMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<T: Ord> FromIterator<(T, u64)> for FrequencyMap<T> {
    fn from_iter<I: IntoIterator<Item = (T, u64)>>(iter: I) -> Self {
        let mut map = Self::new();
        iter.into_iter()
            .for_each(|(value, count)| map.accumulate_count(value, count));
        map
    }
}

#[cfg(test)]
mod test {
    use super::FrequencyMap;

    #[test_log::test]
    fn accumulate_counts_duplicates() {
        let map: FrequencyMap<i64> = [4, 1, 4, 2, 4].into_iter().collect();
        assert_eq!(5, map.total());
        assert_eq!(3, map.distinct());
        assert_eq!(3, map.count(&4));
        assert_eq!(0, map.count(&3));
        assert_eq!(Some(&1), map.min());
        assert_eq!(Some(&4), map.max());
    }

    #[test_log::test]
    fn iterates_in_ascending_order() {
        let map: FrequencyMap<i64> = [9, -3, 5, 0, 5].into_iter().collect();
        assert_eq!(
            vec![(&-3, 1), (&0, 1), (&5, 2), (&9, 1)],
            map.iter().collect::<Vec<_>>()
        );
    }

    #[test_log::test]
    fn zero_count_is_a_no_op() {
        let mut map = FrequencyMap::new();
        map.accumulate_count(7_i64, 0);
        assert!(map.is_empty());
        assert_eq!(0, map.distinct());
    }

    #[test_log::test]
    fn absorb_sums_shared_keys_and_adds_new_ones() {
        let mut left: FrequencyMap<i64> = [(1, 2), (2, 1)].into_iter().collect();
        let right: FrequencyMap<i64> = [(2, 3), (3, 1), (4, 1)].into_iter().collect();
        left.absorb(right);
        let expected: FrequencyMap<i64> = [(1, 2), (2, 4), (3, 1), (4, 1)].into_iter().collect();
        assert_eq!(expected, left);
        assert_eq!(8, left.total());
    }

    #[test_log::test]
    fn merge_is_commutative_and_associative() {
        let a: FrequencyMap<i64> = [1, 1, 2].into_iter().collect();
        let b: FrequencyMap<i64> = [2, 3].into_iter().collect();
        let c: FrequencyMap<i64> = [3, 3, 9].into_iter().collect();
        assert_eq!(
            a.clone().merged(b.clone()),
            b.clone().merged(a.clone())
        );
        assert_eq!(
            a.clone().merged(b.clone()).merged(c.clone()),
            a.merged(b.merged(c))
        );
    }

    #[test_log::test]
    fn mode_prefers_smallest_on_tie() {
        let map: FrequencyMap<i64> = [(5, 3), (2, 3), (9, 1)].into_iter().collect();
        assert_eq!(Some((&2, 3)), map.mode());
        let empty: FrequencyMap<i64> = FrequencyMap::new();
        assert_eq!(None, empty.mode());
    }

    #[test_log::test]
    fn zero_resets() {
        let mut map: FrequencyMap<i64> = [1, 2, 3].into_iter().collect();
        map.zero();
        assert!(map.is_empty());
        assert_eq!(None, map.min());
    }
}
