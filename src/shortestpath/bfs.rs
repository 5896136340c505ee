/*
 * Copyright (c) 2017, 2018, 2020, 2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Unweighted shortest paths by breadth-first-search.
//!
//! The weights of the edges are ignored, every edge has length one. The
//! resulting distances count the edges on a shortest path.
//!
//! # Example
//!
//! ```
//! use depot_graph::classes;
//! use depot_graph::shortestpath::bfs;
//!
//! let g = classes::grid(4, 3, |_, _| 10.0);
//! let tree = bfs::unweighted(&g, g.id2vertex(0));
//! assert_eq!(tree.dist(g.id2vertex(11)), 5.0);
//! assert_eq!(tree.path_to(g.id2vertex(11)).len(), 6);
//! ```

use super::ShortestPathTree;
use crate::graph::{Graph, VertexId};
use crate::num::traits::Float;

use log::debug;
use std::collections::VecDeque;

/// Compute shortest paths w.r.t. the number of edges from `src`.
///
/// # Panics
/// If `src` is not a vertex of `g`.
pub fn unweighted<T, W>(g: &Graph<T, W>, src: VertexId) -> ShortestPathTree<W>
where
    W: Float,
{
    debug!("bfs from {} on {} vertices", src, g.num_vertices());
    let mut tree = ShortestPathTree::new(g.num_vertices(), src);
    let mut queue = VecDeque::new();
    queue.push_back(src);

    while let Some(u) = queue.pop_front() {
        let newdist = tree.dist(u) + W::one();
        for e in g.outedges(u) {
            let v = e.dest();
            if newdist < tree.dist(v) {
                tree.update(v, newdist, u);
                queue.push_back(v);
            }
        }
    }

    tree
}
