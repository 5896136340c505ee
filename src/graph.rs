/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! The graph container.
//!
//! A [`Graph`] owns all of its vertices, each vertex owns its outgoing
//! edges, and an edge refers to its destination by a [`VertexId`]. Vertex
//! ids are dense indices in insertion order, so per-vertex data of the
//! algorithms can be kept in plain vectors.
//!
//! Vertices are identified by their content: inserting a vertex whose
//! content compares equal to an existing one fails.
//!
//! The graph also keeps the result of the last single-source run and the
//! last all-pairs run. Both are dropped whenever the structure of the
//! graph changes.

use crate::num::traits::Float;
use crate::search::dfs;
use crate::shortestpath::{bfs, dijkstra, floydwarshall, moorebellmanford};
use crate::shortestpath::{AllPairs, ShortestPathTree};
use crate::traits::Indexable;

use log::{debug, info};

use std::fmt;
use std::slice::Iter as SliceIter;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Handle of a vertex.
///
/// This is basically a newtype of the vertex index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct VertexId(u32);

impl VertexId {
    pub(crate) fn new(idx: usize) -> Self {
        debug_assert!(idx < u32::max_value() as usize, "Invalid vertex index");
        VertexId(idx as u32)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl Indexable for VertexId {
    fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A directed edge, owned by its source vertex.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<W = f64> {
    dest: VertexId,
    weight: W,
    /// Whether the edge should be drawn. The loader inserts both
    /// directions of a street but only one of them is displayed.
    visible: bool,
}

impl<W> Edge<W> {
    /// The destination vertex.
    pub fn dest(&self) -> VertexId {
        self.dest
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl<W: Copy> Edge<W> {
    /// The weight (length) of the edge.
    pub fn weight(&self) -> W {
        self.weight
    }
}

/// A vertex with its content and its outgoing edges.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vertex<T, W = f64> {
    info: T,
    adj: Vec<Edge<W>>,
}

impl<T, W> Vertex<T, W> {
    /// The content of this vertex.
    pub fn info(&self) -> &T {
        &self.info
    }

    /// The outgoing edges in insertion order.
    pub fn adj(&self) -> &[Edge<W>] {
        &self.adj
    }
}

/// A weighted directed graph with content-identified vertices.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Graph<T, W = f64> {
    vertices: Vec<Vertex<T, W>>,
    /// Result of the last single-source run.
    #[cfg_attr(feature = "serialize", serde(skip))]
    tree: Option<ShortestPathTree<W>>,
    /// Result of the last all-pairs run.
    #[cfg_attr(feature = "serialize", serde(skip))]
    all_pairs: Option<AllPairs<W>>,
}

impl<T, W> Default for Graph<T, W> {
    fn default() -> Self {
        Graph {
            vertices: vec![],
            tree: None,
            all_pairs: None,
        }
    }
}

impl<T, W> Graph<T, W> {
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a new, empty graph with room for `nvertices` vertices.
    pub fn with_capacity(nvertices: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(nvertices),
            tree: None,
            all_pairs: None,
        }
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Return the number of edges (parallel edges counted separately).
    pub fn num_edges(&self) -> usize {
        self.vertices.iter().map(|v| v.adj.len()).sum()
    }

    /// Return the vertex with the given id.
    ///
    /// # Panics
    /// If `id` is not smaller than the number of vertices.
    pub fn id2vertex(&self, id: usize) -> VertexId {
        assert!(id < self.vertices.len(), "Invalid vertex id");
        VertexId::new(id)
    }

    /// Return the vertex data of `u`.
    pub fn vertex(&self, u: VertexId) -> &Vertex<T, W> {
        &self.vertices[u.index()]
    }

    /// Return the content of `u`.
    pub fn content(&self, u: VertexId) -> &T {
        &self.vertices[u.index()].info
    }

    /// Return an iterator over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Return a snapshot of all vertices in insertion order.
    pub fn vertex_set(&self) -> Vec<VertexId> {
        self.vertices().collect()
    }

    /// Return the outgoing edges of `u`.
    pub fn outedges(&self, u: VertexId) -> SliceIter<Edge<W>> {
        self.vertices[u.index()].adj.iter()
    }

    /// Return an iterator over all edges together with their source.
    ///
    /// The edges are ordered by source vertex and, for each source, in
    /// the order they have been added.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, &Edge<W>)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .flat_map(|(i, v)| v.adj.iter().map(move |e| (VertexId::new(i), e)))
    }

    /// Append a vertex without checking for duplicate content.
    ///
    /// Used by generators and loaders that guarantee distinct contents
    /// themselves.
    pub(crate) fn push_vertex(&mut self, info: T) -> VertexId {
        assert!(self.vertices.len() + 1 < u32::max_value() as usize, "Vertex capacity exceeded");
        self.invalidate();
        self.vertices.push(Vertex { info, adj: vec![] });
        VertexId::new(self.vertices.len() - 1)
    }

    /// Add an edge between two vertex handles.
    ///
    /// Returns `false` if one of the vertices does not exist.
    pub fn add_edge_between(&mut self, u: VertexId, v: VertexId, weight: W, visible: bool) -> bool {
        if u.index() >= self.vertices.len() || v.index() >= self.vertices.len() {
            return false;
        }
        self.invalidate();
        self.vertices[u.index()].adj.push(Edge {
            dest: v,
            weight,
            visible,
        });
        true
    }

    /// Remove the `pos`-th outgoing edge of `u`.
    ///
    /// Returns the removed edge or `None` if there is no such edge.
    pub fn remove_edge(&mut self, u: VertexId, pos: usize) -> Option<Edge<W>> {
        let adj = &mut self.vertices.get_mut(u.index())?.adj;
        if pos >= adj.len() {
            return None;
        }
        let e = adj.remove(pos);
        self.invalidate();
        Some(e)
    }

    /// Return the result of the last single-source run, if still valid.
    pub fn shortest_path_tree(&self) -> Option<&ShortestPathTree<W>> {
        self.tree.as_ref()
    }

    /// Return the result of the last all-pairs run, if still valid.
    pub fn all_pairs(&self) -> Option<&AllPairs<W>> {
        self.all_pairs.as_ref()
    }

    /// Keep only the vertices reachable from `start`.
    ///
    /// The remaining vertices keep their relative order but are
    /// renumbered densely, so all previously obtained [`VertexId`]s
    /// become invalid. Returns the number of removed vertices or `None`
    /// if `start` is not a vertex of the graph.
    pub fn retain_reachable(&mut self, start: VertexId) -> Option<usize> {
        let n = self.vertices.len();
        if start.index() >= n {
            return None;
        }

        let mut keep = vec![false; n];
        for u in dfs::reachable(self, start) {
            keep[u.index()] = true;
        }
        let mut newids = vec![None; n];
        let mut cnt = 0;
        for (i, &k) in keep.iter().enumerate() {
            if k {
                newids[i] = Some(VertexId::new(cnt));
                cnt += 1;
            }
        }

        let old = std::mem::take(&mut self.vertices);
        self.vertices = old
            .into_iter()
            .zip(newids.iter())
            .filter(|(_, newid)| newid.is_some())
            .map(|(mut v, _)| {
                v.adj = v
                    .adj
                    .into_iter()
                    .filter_map(|mut e| {
                        e.dest = newids[e.dest.index()]?;
                        Some(e)
                    })
                    .collect();
                v
            })
            .collect();
        self.invalidate();

        let removed = n - self.vertices.len();
        info!("pruned {} of {} vertices unreachable from {}", removed, n, start);
        Some(removed)
    }

    fn invalidate(&mut self) {
        self.tree = None;
        self.all_pairs = None;
    }
}

impl<T, W> Graph<T, W>
where
    T: PartialEq,
{
    /// Return the vertex with content `info`.
    ///
    /// This is a linear search.
    pub fn find_vertex(&self, info: &T) -> Option<VertexId> {
        self.vertices.iter().position(|v| v.info == *info).map(VertexId::new)
    }

    /// Add a vertex with content `info`.
    ///
    /// Returns `false` (and leaves the graph unchanged) if a vertex with
    /// equal content already exists.
    pub fn add_vertex(&mut self, info: T) -> bool {
        if self.find_vertex(&info).is_some() {
            return false;
        }
        self.push_vertex(info);
        true
    }

    /// Add a visible edge from `src` to `dst`.
    ///
    /// Returns `false` if one of the endpoints does not exist. Adding the
    /// same pair twice creates a parallel edge.
    pub fn add_edge(&mut self, src: &T, dst: &T, weight: W) -> bool {
        self.add_edge_with_visibility(src, dst, weight, true)
    }

    /// Add an edge from `src` to `dst` with explicit visibility.
    pub fn add_edge_with_visibility(&mut self, src: &T, dst: &T, weight: W, visible: bool) -> bool {
        match (self.find_vertex(src), self.find_vertex(dst)) {
            (Some(u), Some(v)) => self.add_edge_between(u, v, weight, visible),
            _ => false,
        }
    }

    /// Return the vertices reachable from `start` in depth-first order.
    ///
    /// The result is empty if `start` is unknown.
    pub fn depth_first_search(&self, start: &T) -> Vec<VertexId> {
        match self.find_vertex(start) {
            Some(s) => dfs::reachable(self, s),
            None => vec![],
        }
    }
}

impl<T, W> Graph<T, W>
where
    W: Float,
{
    /// Remove all edges with a weight `<= 0`.
    ///
    /// Returns the number of removed edges.
    pub fn remove_nonpositive_edges(&mut self) -> usize {
        let mut removed = 0;
        for v in &mut self.vertices {
            let before = v.adj.len();
            v.adj.retain(|e| e.weight > W::zero());
            removed += before - v.adj.len();
        }
        if removed > 0 {
            self.invalidate();
        }
        debug!("removed {} edges with non-positive weight", removed);
        removed
    }
}

impl<T, W> Graph<T, W>
where
    T: PartialEq + Clone,
    W: Float,
{
    /// Compute shortest paths w.r.t. the number of edges from `orig`.
    ///
    /// Returns `false` if `orig` is not a vertex.
    pub fn unweighted_shortest_path(&mut self, orig: &T) -> bool {
        self.single_source(orig, bfs::unweighted)
    }

    /// Compute shortest paths from `orig` with Dijkstra's algorithm.
    ///
    /// All edge weights must be non-negative. Returns `false` if `orig` is
    /// not a vertex.
    pub fn dijkstra_shortest_path(&mut self, orig: &T) -> bool {
        self.single_source(orig, dijkstra::shortest_paths)
    }

    /// Compute shortest paths from `orig` with the algorithm of
    /// Moore-Bellman-Ford.
    ///
    /// Negative weights are allowed. See
    /// [`moorebellmanford::shortest_paths`] for the behaviour on negative
    /// cycles. Returns `false` if `orig` is not a vertex.
    pub fn bellman_ford_shortest_path(&mut self, orig: &T) -> bool {
        self.single_source(orig, moorebellmanford::shortest_paths)
    }

    fn single_source<F>(&mut self, orig: &T, algorithm: F) -> bool
    where
        F: Fn(&Self, VertexId) -> ShortestPathTree<W>,
    {
        self.tree = None;
        match self.find_vertex(orig) {
            Some(s) => {
                self.tree = Some(algorithm(self, s));
                true
            }
            None => false,
        }
    }

    /// Return the path from the source of the last single-source run to
    /// `dst`.
    ///
    /// The path is empty if `dst` is unknown or has not been reached (or
    /// if no single-source algorithm has been run since the last change).
    pub fn path_to(&self, dst: &T) -> Vec<T> {
        match (self.tree.as_ref(), self.find_vertex(dst)) {
            (Some(tree), Some(v)) => self.contents(tree.path_to(v)),
            _ => vec![],
        }
    }

    /// Return the distance from the source of the last single-source run
    /// to `dst`, or `None` if `dst` has not been reached.
    pub fn distance_to(&self, dst: &T) -> Option<W> {
        let tree = self.tree.as_ref()?;
        let v = self.find_vertex(dst)?;
        if tree.is_reached(v) {
            Some(tree.dist(v))
        } else {
            None
        }
    }

    /// Solve the all-pairs shortest path problem with the algorithm of
    /// Floyd and Warshall.
    ///
    /// The matrices of a previous run are replaced.
    pub fn floyd_warshall_shortest_path(&mut self) {
        self.all_pairs = None;
        self.all_pairs = Some(floydwarshall::all_pairs(self));
    }

    /// Return the shortest path from `orig` to `dst` computed by the last
    /// all-pairs run.
    ///
    /// The path is empty if one of the vertices is unknown, `dst` is not
    /// reachable from `orig` or no valid all-pairs result exists.
    pub fn floyd_warshall_path(&self, orig: &T, dst: &T) -> Vec<T> {
        match (self.all_pairs.as_ref(), self.find_vertex(orig), self.find_vertex(dst)) {
            (Some(ap), Some(u), Some(v)) => self.contents(ap.path(u, v)),
            _ => vec![],
        }
    }

    /// Return the length of a shortest path from `orig` to `dst` computed
    /// by the last all-pairs run.
    pub fn floyd_warshall_distance(&self, orig: &T, dst: &T) -> Option<W> {
        let ap = self.all_pairs.as_ref()?;
        let d = ap.dist(self.find_vertex(orig)?, self.find_vertex(dst)?);
        if d < W::infinity() {
            Some(d)
        } else {
            None
        }
    }

    fn contents(&self, path: Vec<VertexId>) -> Vec<T> {
        path.into_iter().map(|u| self.content(u).clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Graph, VertexId};
    use crate::traits::Indexable;

    fn diamond() -> Graph<char> {
        let mut g = Graph::new();
        for &c in &['a', 'b', 'c', 'd'] {
            assert!(g.add_vertex(c));
        }
        for &(u, v, w) in &[
            ('a', 'b', 1.0),
            ('a', 'c', 4.0),
            ('b', 'c', 1.0),
            ('b', 'd', 5.0),
            ('c', 'd', 1.0),
        ] {
            assert!(g.add_edge(&u, &v, w));
        }
        g
    }

    #[test]
    fn test_add_vertex() {
        let mut g: Graph<u32> = Graph::new();
        assert!(g.add_vertex(1));
        assert!(g.add_vertex(2));
        assert!(!g.add_vertex(1));
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.find_vertex(&2), Some(g.id2vertex(1)));
        assert_eq!(g.find_vertex(&3), None);
        assert_eq!(g.vertex_set().iter().map(|&u| *g.content(u)).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_add_edge() {
        let mut g = diamond();
        assert_eq!(g.num_edges(), 5);
        assert!(!g.add_edge(&'a', &'x', 1.0));
        assert!(!g.add_edge(&'x', &'a', 1.0));
        assert_eq!(g.num_edges(), 5);

        // parallel edges are kept
        assert!(g.add_edge_with_visibility(&'a', &'b', 1.0, false));
        let a = g.find_vertex(&'a').unwrap();
        let b = g.find_vertex(&'b').unwrap();
        let ab: Vec<_> = g.outedges(a).filter(|e| e.dest() == b).collect();
        assert_eq!(ab.len(), 2);
        assert!(ab[0].is_visible());
        assert!(!ab[1].is_visible());
    }

    #[test]
    fn test_edges_order() {
        let g = diamond();
        let edges: Vec<_> = g
            .edges()
            .map(|(u, e)| (*g.content(u), *g.content(e.dest()), e.weight()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ('a', 'b', 1.0),
                ('a', 'c', 4.0),
                ('b', 'c', 1.0),
                ('b', 'd', 5.0),
                ('c', 'd', 1.0)
            ]
        );
    }

    #[test]
    fn test_remove_edges() {
        let mut g = diamond();
        let a = g.find_vertex(&'a').unwrap();
        assert!(g.remove_edge(a, 5).is_none());
        let e = g.remove_edge(a, 0).unwrap();
        assert_eq!(*g.content(e.dest()), 'b');
        assert_eq!(g.num_edges(), 4);

        assert!(g.add_edge(&'c', &'a', 0.0));
        assert!(g.add_edge(&'d', &'a', -2.0));
        assert_eq!(g.remove_nonpositive_edges(), 2);
        assert_eq!(g.num_edges(), 4);
    }

    #[test]
    fn test_retain_reachable() {
        let mut g = diamond();
        g.add_vertex('x');
        g.add_vertex('y');
        g.add_edge(&'x', &'a', 2.0);
        g.add_edge(&'y', &'y', 2.0);

        assert_eq!(g.retain_reachable(VertexId::new(10)), None);
        let b = g.find_vertex(&'b').unwrap();
        assert_eq!(g.retain_reachable(b), Some(3));
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(
            g.vertices().map(|u| *g.content(u)).collect::<Vec<_>>(),
            vec!['b', 'c', 'd']
        );
        let edges: Vec<_> = g.edges().map(|(u, e)| (u.index(), e.dest().index())).collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_cached_results() {
        let mut g = diamond();
        assert!(g.path_to(&'d').is_empty());

        assert!(g.dijkstra_shortest_path(&'a'));
        assert_eq!(g.path_to(&'d'), vec!['a', 'b', 'c', 'd']);
        assert_eq!(g.distance_to(&'d'), Some(3.0));

        g.floyd_warshall_shortest_path();
        assert_eq!(g.floyd_warshall_path(&'a', &'d'), vec!['a', 'b', 'c', 'd']);
        assert_eq!(g.floyd_warshall_distance(&'a', &'d'), Some(3.0));
        assert_eq!(g.floyd_warshall_distance(&'d', &'a'), None);

        // any structural change invalidates both results
        g.add_vertex('e');
        assert!(g.shortest_path_tree().is_none());
        assert!(g.all_pairs().is_none());
        assert!(g.path_to(&'d').is_empty());
        assert!(g.floyd_warshall_path(&'a', &'d').is_empty());

        // unknown origin drops the previous tree
        assert!(g.dijkstra_shortest_path(&'a'));
        assert!(!g.dijkstra_shortest_path(&'z'));
        assert!(g.shortest_path_tree().is_none());
    }

    #[test]
    fn test_depth_first_search() {
        let g = diamond();
        let order: Vec<_> = g.depth_first_search(&'a').into_iter().map(|u| *g.content(u)).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
        assert_eq!(g.depth_first_search(&'d').len(), 1);
        assert!(g.depth_first_search(&'z').is_empty());
    }

    #[test]
    #[should_panic(expected = "Invalid vertex id")]
    fn test_id2vertex_out_of_range() {
        let g = diamond();
        g.id2vertex(4);
    }
}
