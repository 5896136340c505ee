// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Binary heap implementation

use crate::collections::ItemPriQueue;
use crate::traits::Indexable;

/// Binary min-heap over indexable keys with decrease-key.
///
/// The heap position of each key is stored in a vector indexed by
/// [`Indexable::index`] of the key. Every move of an element inside the
/// heap updates this position, which allows `decrease_key` in O(log n).
///
/// # Example
///
/// ```
/// use depot_graph::collections::{BinHeap, ItemPriQueue};
///
/// let mut heap = BinHeap::new();
/// heap.push(0usize, 5.0);
/// heap.push(1, 3.0);
/// heap.push(2, 4.0);
/// assert!(heap.decrease_key(0, 1.0));
/// assert!(!heap.decrease_key(2, 7.0));
///
/// assert_eq!(heap.pop_min(), Some((0, 1.0)));
/// assert_eq!(heap.pop_min(), Some((1, 3.0)));
/// assert_eq!(heap.pop_min(), Some((2, 4.0)));
/// assert_eq!(heap.pop_min(), None);
/// ```
pub struct BinHeap<K, V> {
    /// The heap elements.
    heap: Vec<(K, V)>,
    /// Position of each key on the heap, `None` if it is not on the heap.
    pos: Vec<Option<usize>>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty heap for keys with index less than `n`.
    ///
    /// Larger keys are still accepted, the position table grows on demand.
    pub fn with_capacity(n: usize) -> Self {
        BinHeap {
            heap: Vec::with_capacity(n),
            pos: vec![None; n],
        }
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap {
            heap: vec![],
            pos: vec![],
        }
    }
}

impl<K, V> ItemPriQueue<K, V> for BinHeap<K, V>
where
    K: Indexable + Copy,
    V: PartialOrd + Copy,
{
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        for (key, _) in self.heap.drain(..) {
            self.pos[key.index()] = None;
        }
    }

    fn contains(&self, key: K) -> bool {
        self.pos.get(key.index()).map_or(false, |p| p.is_some())
    }

    fn value(&self, key: K) -> Option<&V> {
        let p = (*self.pos.get(key.index())?)?;
        Some(&self.heap[p].1)
    }

    fn push(&mut self, key: K, value: V) {
        debug_assert!(!self.contains(key), "Key is already on the heap");
        let idx = key.index();
        if idx >= self.pos.len() {
            self.pos.resize(idx + 1, None);
        }
        let cur_pos = self.heap.len();
        self.heap.push((key, value));
        self.pos[idx] = Some(cur_pos);
        self.upheap(cur_pos);
    }

    fn decrease_key(&mut self, key: K, value: V) -> bool {
        match self.pos.get(key.index()).cloned().flatten() {
            Some(cur_pos) if self.heap[cur_pos].1 > value => {
                self.heap[cur_pos].1 = value;
                self.upheap(cur_pos);
                true
            }
            _ => false,
        }
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        // remove the smallest element from the heap, the last element
        // takes its place at the root
        let min = self.heap.swap_remove(0);
        self.pos[min.0.index()] = None;

        if !self.heap.is_empty() {
            self.pos[self.heap[0].0.index()] = Some(0);
            self.downheap(0);
        }

        Some(min)
    }
}

impl<K, V> BinHeap<K, V>
where
    K: Indexable + Copy,
    V: PartialOrd + Copy,
{
    /// Move the element at `cur_pos` up in the heap until its parent does
    /// not have a larger value or the root is reached.
    fn upheap(&mut self, mut cur_pos: usize) {
        let item = self.heap[cur_pos];
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            // We could have used >=, too, but using > moves the item up the
            // heap as far as possible. Among equal values the most recently
            // touched element tends to be extracted first.
            if item.1 > self.heap[parent_pos].1 {
                break;
            }
            self.heap[cur_pos] = self.heap[parent_pos];
            self.pos[self.heap[cur_pos].0.index()] = Some(cur_pos);
            cur_pos = parent_pos;
        }
        self.heap[cur_pos] = item;
        self.pos[item.0.index()] = Some(cur_pos);
    }

    /// Move the element at `cur_pos` down in the heap until none of its
    /// children has a smaller value.
    fn downheap(&mut self, mut cur_pos: usize) {
        let n = self.heap.len();
        let item = self.heap[cur_pos];
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            let next_pos = if left_pos >= n {
                break;
            } else if right_pos >= n || self.heap[left_pos].1 < self.heap[right_pos].1 {
                left_pos
            } else {
                right_pos
            };

            if item.1 <= self.heap[next_pos].1 {
                break;
            }

            self.heap[cur_pos] = self.heap[next_pos];
            self.pos[self.heap[cur_pos].0.index()] = Some(cur_pos);
            cur_pos = next_pos;
        }
        self.heap[cur_pos] = item;
        self.pos[item.0.index()] = Some(cur_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::BinHeap;
    use crate::collections::ItemPriQueue;

    use ordered_float::OrderedFloat;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Check that the stored positions match the heap layout.
    fn check_positions(heap: &BinHeap<usize, f64>) {
        for (p, &(key, _)) in heap.heap.iter().enumerate() {
            assert_eq!(heap.pos[key], Some(p));
        }
        assert_eq!(heap.pos.iter().filter(|p| p.is_some()).count(), heap.heap.len());
        for p in 1..heap.heap.len() {
            assert!(heap.heap[(p - 1) / 2].1 <= heap.heap[p].1);
        }
    }

    #[test]
    fn test_empty() {
        let mut heap = BinHeap::<usize, f64>::new();
        assert!(heap.is_empty());
        assert_eq!(heap.pop_min(), None);
        assert!(!heap.decrease_key(3, 1.0));
        assert!(!heap.contains(3));
        assert_eq!(heap.value(3), None);
    }

    #[test]
    fn test_clear() {
        let mut heap = BinHeap::with_capacity(4);
        heap.push(1usize, 2.0);
        heap.push(3, 1.0);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.value(3), Some(&1.0));
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(1));
        heap.push(1, 4.0);
        assert_eq!(heap.pop_min(), Some((1, 4.0)));
    }

    #[test]
    fn test_random_operations() {
        const N: usize = 64;
        let mut rng = StdRng::seed_from_u64(42);
        let mut heap = BinHeap::with_capacity(N);
        // reference values of the keys currently in the heap
        let mut values: Vec<Option<f64>> = vec![None; N];

        for _ in 0..5000 {
            match rng.random_range(0..3) {
                0 => {
                    let key = rng.random_range(0..N);
                    if values[key].is_none() {
                        let value = rng.random_range(0.0..100.0);
                        heap.push(key, value);
                        values[key] = Some(value);
                    }
                }
                1 => {
                    let key = rng.random_range(0..N);
                    if let Some(old) = values[key] {
                        let value = old - rng.random_range(0.0..10.0);
                        assert!(heap.decrease_key(key, value) || value >= old);
                        values[key] = Some(value.min(old));
                    } else {
                        assert!(!heap.decrease_key(key, 0.0));
                    }
                }
                _ => {
                    let expected = values
                        .iter()
                        .filter_map(|v| v.map(OrderedFloat))
                        .min()
                        .map(|v| v.into_inner());
                    match heap.pop_min() {
                        Some((key, value)) => {
                            assert_eq!(Some(value), expected);
                            assert_eq!(values[key], Some(value));
                            values[key] = None;
                        }
                        None => assert_eq!(expected, None),
                    }
                }
            }
            check_positions(&heap);
        }
    }
}
