/*
 * Copyright (c) 2019 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Graph search algorithms.
//!
//! Search algorithms are implemented as iterators producing the vertices
//! in the order in which they are visited.

pub mod dfs;

use std::iter::Iterator;
use std::marker::PhantomData;

/// Walk a chain of predecessors backwards.
///
/// # Parameters
/// - `dst`: the destination
/// - `incomings(v)`: return the incoming item and the preceding element
///   of `v` (or `None` if `v` has no predecessor)
///
/// # Return
/// An iterator over the incoming items starting from the last one.
///
/// Note that the iterator does not terminate if the predecessors form a
/// cycle.
///
/// # Example
///
/// ```
/// use depot_graph::search::path_from_incomings;
///
/// // predecessor of i is i - 1, 0 has none
/// let pred = |u: usize| if u > 0 { Some((u - 1, u - 1)) } else { None };
/// let path: Vec<_> = path_from_incomings(3, pred).collect();
/// assert_eq!(path, vec![2, 1, 0]);
/// ```
pub fn path_from_incomings<N, E, I>(dst: N, incomings: I) -> impl Iterator<Item = E>
where
    N: Copy,
    E: Clone,
    I: Fn(N) -> Option<(E, N)>,
{
    PathIter {
        incomings,
        u: dst,
        phantom: PhantomData,
    }
}

#[doc(hidden)]
struct PathIter<N, E, I>
where
    I: Fn(N) -> Option<(E, N)>,
{
    incomings: I,
    u: N,
    phantom: PhantomData<E>,
}

impl<N, E, I> Iterator for PathIter<N, E, I>
where
    N: Clone,
    I: Fn(N) -> Option<(E, N)>,
{
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let (e, v) = (self.incomings)(self.u.clone())?;
        self.u = v;
        Some(e)
    }
}
