/*
 * Copyright (c) 2018 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

mod binheap;
pub use self::binheap::BinHeap;

/// A priority queue over indexable items with a decrease-key operation.
///
/// Each key may be contained in the queue at most once. The queue knows
/// the position of every contained key, so the value of a key can be
/// lowered without searching for it.
pub trait ItemPriQueue<K, V> {
    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Return `true` iff `key` is currently in the queue.
    fn contains(&self, key: K) -> bool;

    /// Push `key` with the given `value` onto the queue.
    ///
    /// The key must not be contained in the queue.
    fn push(&mut self, key: K, value: V);

    /// Decrease the value of some key in the queue.
    ///
    /// Returns `true` if the key is contained in the queue and the new
    /// value is smaller than the old one. Otherwise nothing is changed.
    fn decrease_key(&mut self, key: K, value: V) -> bool;

    /// Remove and return the element with the smallest value from the queue or `None` if
    /// the queue is empty.
    fn pop_min(&mut self) -> Option<(K, V)>;

    /// Return the current value associated with some key in the queue.
    fn value(&self, key: K) -> Option<&V>;
}
