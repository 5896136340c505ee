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

//! Depth-first-search.
//!
//! The search visits the vertices in the same order as the recursive
//! formulation (mark the vertex, then descend into every unvisited
//! successor in adjacency order) but keeps an explicit stack, so the
//! depth of the search is not limited by the call stack.
//!
//! # Example
//!
//! ```
//! use depot_graph::classes;
//! use depot_graph::search::dfs;
//!
//! let g = classes::cycle::<f64>(7);
//! let order: Vec<_> = dfs::start(&g, g.id2vertex(3)).map(|u| *g.content(u)).collect();
//! assert_eq!(order, vec![3, 4, 5, 6, 0, 1, 2]);
//! ```

use crate::graph::{Graph, VertexId};
use crate::traits::Indexable;

/// Start and return a DFS iterator.
///
/// Unlike the edges of a search tree, the iterator returns the start
/// vertex itself as its first element.
///
/// # Parameter
/// - `g`: the graph
/// - `src`: the vertex at which the search should start.
pub fn start<T, W>(g: &Graph<T, W>, src: VertexId) -> DFS<T, W> {
    let mut seen = vec![false; g.num_vertices()];
    seen[src.index()] = true;

    DFS {
        g,
        first: Some(src),
        seen,
        stack: vec![(src, 0)],
    }
}

/// Return all vertices reachable from `src` in depth-first order.
///
/// The first element is `src` itself.
pub fn reachable<T, W>(g: &Graph<T, W>, src: VertexId) -> Vec<VertexId> {
    start(g, src).collect()
}

/// The DFS iterator.
pub struct DFS<'a, T, W> {
    g: &'a Graph<T, W>,
    /// The start vertex until it has been returned.
    first: Option<VertexId>,
    /// The visited flags, fresh for every search.
    seen: Vec<bool>,
    /// The active vertices with the position of the next edge to scan.
    stack: Vec<(VertexId, usize)>,
}

impl<'a, T, W> Iterator for DFS<'a, T, W> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if let Some(src) = self.first.take() {
            return Some(src);
        }

        while let Some(top) = self.stack.last_mut() {
            if let Some(e) = self.g.vertex(top.0).adj().get(top.1) {
                top.1 += 1;
                let v = e.dest();
                if !self.seen[v.index()] {
                    self.seen[v.index()] = true;
                    self.stack.push((v, 0));
                    return Some(v);
                }
            } else {
                self.stack.pop();
            }
        }
        None
    }
}

impl<'a, T, W> DFS<'a, T, W> {
    /// Run the dfs completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return `true` if `u` has been visited.
    pub fn is_visited(&self, u: VertexId) -> bool {
        self.seen[u.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{reachable, start};
    use crate::classes;
    use crate::Graph;

    #[test]
    fn test_isolated() {
        let mut g: Graph<u32> = Graph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(&2, &1, 1.0);
        let u = g.find_vertex(&1).unwrap();
        assert_eq!(reachable(&g, u), vec![u]);
    }

    #[test]
    fn test_preorder() {
        // 0 -> 1 -> 3, 0 -> 2 -> 3, 3 -> 0
        let mut g: Graph<u32> = Graph::new();
        for i in 0..5 {
            g.add_vertex(i);
        }
        for &(u, v) in &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 0), (4, 0)] {
            g.add_edge(&u, &v, 1.0);
        }
        let order: Vec<_> = reachable(&g, g.id2vertex(0)).into_iter().map(|u| *g.content(u)).collect();
        assert_eq!(order, vec![0, 1, 3, 2]);

        let mut dfs = start(&g, g.id2vertex(2));
        dfs.run();
        assert!(dfs.is_visited(g.id2vertex(1)));
        assert!(!dfs.is_visited(g.id2vertex(4)));
    }

    #[test]
    fn test_labelled_edges() {
        // the search never looks at the weights
        let mut g: Graph<char, String> = Graph::new();
        for &c in &['a', 'b', 'c'] {
            g.add_vertex(c);
        }
        g.add_edge(&'a', &'c', "main street".to_string());
        g.add_edge(&'c', &'b', "side road".to_string());
        let order: Vec<_> = reachable(&g, g.id2vertex(0)).into_iter().map(|u| *g.content(u)).collect();
        assert_eq!(order, vec!['a', 'c', 'b']);
        assert_eq!(g.retain_reachable(g.id2vertex(1)), Some(2));
        assert_eq!(g.outedges(g.id2vertex(0)).map(|e| e.dest()).collect::<Vec<_>>(), vec![]);
    }

    #[test]
    fn test_long_path() {
        // deep enough to overflow a recursive implementation
        let g = classes::path::<f64>(200_000);
        assert_eq!(reachable(&g, g.id2vertex(0)).len(), 200_001);
        assert_eq!(reachable(&g, g.id2vertex(200_000)).len(), 1);
    }
}
