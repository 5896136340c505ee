// Copyright (c) 2016, 2017, 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.

use crate::graph::{Graph, VertexId};
use crate::num::traits::Float;
use crate::traits::Indexable;

use log::debug;

/// Distance and predecessor matrices of an all-pairs run.
///
/// Both matrices are stored row-wise in flat vectors of size $n^2$ and
/// indexed by the vertex ids at the time of the run.
#[derive(Clone, Debug)]
pub struct AllPairs<W = f64> {
    n: usize,
    dist: Vec<W>,
    /// Index of the predecessor of `j` on a shortest path from `i`.
    pred: Vec<Option<usize>>,
}

impl<W> AllPairs<W>
where
    W: Float,
{
    /// The number of vertices of the graph when the matrices were computed.
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// The length of a shortest path from `u` to `v`.
    ///
    /// The result is infinite if there is no path or one of the vertices
    /// is out of range.
    pub fn dist(&self, u: VertexId, v: VertexId) -> W {
        let (i, j) = (u.index(), v.index());
        if i < self.n && j < self.n {
            self.dist[i * self.n + j]
        } else {
            W::infinity()
        }
    }

    /// The predecessor of `v` on a shortest path from `u`.
    pub fn pred(&self, u: VertexId, v: VertexId) -> Option<VertexId> {
        let (i, j) = (u.index(), v.index());
        if i < self.n && j < self.n {
            self.pred[i * self.n + j].map(VertexId::new)
        } else {
            None
        }
    }

    /// Return the vertices of a shortest path from `u` to `v`.
    ///
    /// The path is empty if `v` is not reachable from `u`, one of the
    /// vertices is out of range, or the predecessors do not lead back to
    /// `u` (only possible with negative cycles).
    pub fn path(&self, u: VertexId, v: VertexId) -> Vec<VertexId> {
        if self.dist(u, v) == W::infinity() {
            return vec![];
        }
        let n = self.n;
        let row = &self.pred[u.index() * n..(u.index() + 1) * n];
        let mut path = vec![v];
        let mut j = v.index();
        while let Some(p) = row[j] {
            if path.len() > n {
                return vec![];
            }
            path.push(VertexId::new(p));
            j = p;
        }
        if j != u.index() {
            return vec![];
        }
        path.reverse();
        path
    }
}

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall on a directed graph.
///
/// The diagonal is initialised with zero and loops are ignored. Of
/// several parallel edges only the shortest one is used. Sums with an infinite term are never
/// formed.
///
/// # Example
/// ```
/// use depot_graph::Graph;
/// use depot_graph::shortestpath::floydwarshall;
///
/// let mut g = Graph::new();
/// for i in 0..5 {
///     g.add_vertex(i);
/// }
/// for &(u,v,w) in [(0,1,6.0), (0,2,5.0),
///                  (1,2,7.0), (1,3,3.0), (1,4,-2.0),
///                  (2,3,-4.0), (3,4,8.0),
///                  (3,1,-1.0),
///                  (4,0,2.0), (4,3,7.0), ].iter()
/// {
///     g.add_edge(&u, &v, w);
/// }
///
/// let result = floydwarshall::all_pairs(&g);
/// let mut s = [[0.0; 5]; 5];
/// for u in g.vertices() {
///     for v in g.vertices() {
///         s[*g.content(u) as usize][*g.content(v) as usize] = result.dist(u, v);
///     }
/// }
/// assert_eq!(s, [[ 0.0, 0.0, 5.0, 1.0,-2.0],
///                [ 0.0, 0.0, 5.0, 1.0,-2.0],
///                [-5.0,-5.0, 0.0,-4.0,-7.0],
///                [-1.0,-1.0, 4.0, 0.0,-3.0],
///                [ 2.0, 2.0, 7.0, 3.0, 0.0],]);
/// ```
pub fn all_pairs<T, W>(g: &Graph<T, W>) -> AllPairs<W>
where
    W: Float,
{
    let n = g.num_vertices();
    debug!("floyd-warshall on {} vertices, {} edges", n, g.num_edges());

    let mut dist = vec![W::infinity(); n * n];
    let mut pred = vec![None; n * n];

    for i in 0..n {
        dist[i * n + i] = W::zero();
    }

    for (u, e) in g.edges() {
        let (i, j) = (u.index(), e.dest().index());
        if i != j && e.weight() < dist[i * n + j] {
            dist[i * n + j] = e.weight();
            pred[i * n + j] = Some(i);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dist_ik = dist[i * n + k];
            if dist_ik == W::infinity() {
                continue;
            }
            for j in 0..n {
                let dist_kj = dist[k * n + j];
                if dist_kj == W::infinity() {
                    continue;
                }
                let newdist = dist_ik + dist_kj;
                if newdist < dist[i * n + j] {
                    dist[i * n + j] = newdist;
                    pred[i * n + j] = pred[k * n + j];
                }
            }
        }
    }

    AllPairs { n, dist, pred }
}
