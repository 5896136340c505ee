// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Shortest path algorithms.
//!
//! The single-source algorithms ([`bfs`], [`dijkstra`],
//! [`moorebellmanford`]) return a [`ShortestPathTree`], the all-pairs
//! algorithm [`floydwarshall`] returns an [`AllPairs`] matrix. Every call
//! creates a fresh result, nothing of a previous run is reused.

pub mod bfs;
pub mod dijkstra;
pub mod floydwarshall;
pub mod moorebellmanford;

pub use self::floydwarshall::AllPairs;

use crate::graph::VertexId;
use crate::num::traits::Float;
use crate::search::path_from_incomings;
use crate::traits::Indexable;

/// The result of a single-source shortest path run.
///
/// For each vertex the tree stores its distance label and its predecessor
/// on a shortest path from the source. Vertices that have not been
/// reached have an infinite distance and no predecessor.
#[derive(Clone, Debug)]
pub struct ShortestPathTree<W = f64> {
    source: VertexId,
    dist: Vec<W>,
    pred: Vec<Option<VertexId>>,
    negative_cycle: Option<VertexId>,
}

impl<W> ShortestPathTree<W>
where
    W: Float,
{
    /// Create the initial labels for a run on `n` vertices.
    pub(crate) fn new(n: usize, source: VertexId) -> Self {
        let mut dist = vec![W::infinity(); n];
        dist[source.index()] = W::zero();
        ShortestPathTree {
            source,
            dist,
            pred: vec![None; n],
            negative_cycle: None,
        }
    }

    /// Set the label of `v`.
    pub(crate) fn update(&mut self, v: VertexId, dist: W, pred: VertexId) {
        self.dist[v.index()] = dist;
        self.pred[v.index()] = Some(pred);
    }

    pub(crate) fn set_negative_cycle(&mut self, v: VertexId) {
        self.negative_cycle.get_or_insert(v);
    }

    /// The source vertex of this run.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The distance labels of all vertices.
    pub fn distances(&self) -> &[W] {
        &self.dist
    }

    /// The distance label of `v`.
    ///
    /// This is infinite if `v` has not been reached.
    pub fn dist(&self, v: VertexId) -> W {
        self.dist.get(v.index()).cloned().unwrap_or_else(W::infinity)
    }

    /// The predecessor of `v` on its shortest path.
    pub fn pred(&self, v: VertexId) -> Option<VertexId> {
        self.pred.get(v.index()).cloned().flatten()
    }

    /// Return `true` if `v` has been reached from the source.
    pub fn is_reached(&self, v: VertexId) -> bool {
        self.dist(v) < W::infinity()
    }

    /// A vertex whose label changed in the final checking pass of
    /// Moore-Bellman-Ford, i.e. a witness for a negative cycle reachable
    /// from the source.
    pub fn negative_cycle(&self) -> Option<VertexId> {
        self.negative_cycle
    }

    /// Return the vertices of the path from the source to `dst`.
    ///
    /// The path starts with the source and ends with `dst`. It is empty
    /// if `dst` has not been reached or if the predecessor links do not
    /// lead back to the source (which can only happen on a negative
    /// cycle).
    pub fn path_to(&self, dst: VertexId) -> Vec<VertexId> {
        if !self.is_reached(dst) {
            return vec![];
        }
        let n = self.pred.len();
        let mut path = vec![dst];
        path.extend(path_from_incomings(dst, |u| self.pred(u).map(|p| (p, p))).take(n));
        if path.len() > n || path.last() != Some(&self.source) {
            return vec![];
        }
        path.reverse();
        path
    }
}
