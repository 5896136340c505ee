/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start vertex
//! $s \in V$ to all other vertices of a directed graph. Each edge is
//! assigned a non-negative weight (or length) $w \colon E \to \mathbb{R}_+$.
//!
//! The vertices are processed in the order of their distance labels
//! using a binary heap with decrease-key ([`BinHeap`]).
//!
//! # Example
//!
//! ```
//! use depot_graph::Graph;
//! use depot_graph::shortestpath::dijkstra;
//!
//! let mut g = Graph::new();
//! for &c in &['a', 'b', 'c', 'd'] {
//!     g.add_vertex(c);
//! }
//! for &(u, v, w) in &[('a', 'b', 1.0), ('a', 'c', 4.0), ('b', 'c', 1.0), ('b', 'd', 5.0), ('c', 'd', 1.0)] {
//!     g.add_edge(&u, &v, w);
//! }
//!
//! let a = g.find_vertex(&'a').unwrap();
//! let tree = dijkstra::shortest_paths(&g, a);
//! let dists: Vec<_> = g.vertices().map(|u| tree.dist(u)).collect();
//! assert_eq!(dists, vec![0.0, 1.0, 2.0, 3.0]);
//!
//! let d = g.find_vertex(&'d').unwrap();
//! let path: Vec<_> = tree.path_to(d).into_iter().map(|u| *g.content(u)).collect();
//! assert_eq!(path, vec!['a', 'b', 'c', 'd']);
//! ```

use super::ShortestPathTree;
use crate::collections::{BinHeap, ItemPriQueue};
use crate::graph::{Graph, VertexId};
use crate::num::traits::Float;

use log::debug;

/// Compute shortest paths from `src` with Dijkstra's algorithm.
///
/// All edge weights must be non-negative. This is checked in debug
/// builds only, with negative weights the result is undefined.
///
/// # Panics
/// If `src` is not a vertex of `g`.
pub fn shortest_paths<T, W>(g: &Graph<T, W>, src: VertexId) -> ShortestPathTree<W>
where
    W: Float,
{
    let n = g.num_vertices();
    debug!("dijkstra from {} on {} vertices, {} edges", src, n, g.num_edges());

    let mut tree = ShortestPathTree::new(n, src);
    let mut heap = BinHeap::with_capacity(n);
    heap.push(src, W::zero());

    while let Some((u, dist_u)) = heap.pop_min() {
        for e in g.outedges(u) {
            debug_assert!(e.weight() >= W::zero(), "Dijkstra requires non-negative weights");
            let v = e.dest();
            let newdist = dist_u + e.weight();
            if newdist < tree.dist(v) {
                tree.update(v, newdist, u);
                // unreached vertices are inserted, labelled ones are still on the heap
                if !heap.decrease_key(v, newdist) {
                    heap.push(v, newdist);
                }
            }
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::shortest_paths;
    use crate::classes;
    use crate::Graph;

    #[test]
    fn test_grid() {
        // horizontal edges are cheap, vertical ones expensive
        let g = classes::grid(5, 4, |u, v| if v == u + 1 { 1.0 } else { 3.0 });
        let tree = shortest_paths(&g, g.id2vertex(0));
        for u in g.vertices() {
            let (i, j) = (g.content(u) % 5, g.content(u) / 5);
            assert_eq!(tree.dist(u), (i + 3 * j) as f64);
        }
    }

    #[test]
    fn test_decrease_key() {
        // d is first reached over the direct edge and improved twice
        let mut g: Graph<char> = Graph::new();
        for &c in &['s', 'a', 'b', 'd'] {
            g.add_vertex(c);
        }
        for &(u, v, w) in &[
            ('s', 'd', 10.0),
            ('s', 'a', 1.0),
            ('s', 'b', 2.0),
            ('a', 'd', 7.0),
            ('b', 'd', 3.0),
        ] {
            g.add_edge(&u, &v, w);
        }
        let s = g.find_vertex(&'s').unwrap();
        let b = g.find_vertex(&'b').unwrap();
        let d = g.find_vertex(&'d').unwrap();
        let tree = shortest_paths(&g, s);
        assert_eq!(tree.dist(d), 5.0);
        assert_eq!(tree.pred(d), Some(b));
        assert_eq!(tree.path_to(d), vec![s, b, d]);
    }

    #[test]
    fn test_idempotent() {
        let g = classes::grid(6, 6, |u, v| ((u * 7 + v * 3) % 5 + 1) as f64);
        let src = g.id2vertex(14);
        let t1 = shortest_paths(&g, src);
        let t2 = shortest_paths(&g, src);
        assert_eq!(t1.distances(), t2.distances());
        for u in g.vertices() {
            assert_eq!(t1.pred(u), t2.pred(u));
        }
    }

    #[test]
    fn test_zero_weights() {
        let mut g: Graph<u32> = Graph::new();
        for i in 0..3 {
            g.add_vertex(i);
        }
        g.add_edge(&0, &1, 0.0);
        g.add_edge(&1, &2, 0.0);
        g.add_edge(&2, &0, 0.0);
        let tree = shortest_paths(&g, g.id2vertex(0));
        assert_eq!(tree.dist(g.id2vertex(2)), 0.0);
        assert_eq!(tree.pred(g.id2vertex(0)), None);
        assert_eq!(tree.path_to(g.id2vertex(2)).len(), 3);
    }
}
