/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common graph classes.
//!
//! The content of each vertex is its index, all edges are directed.

use crate::graph::Graph;
use crate::num::traits::Float;

/// Returns a directed path with `m` unit-weight edges.
pub fn path<W>(m: usize) -> Graph<usize, W>
where
    W: Float,
{
    let mut g = Graph::with_capacity(m + 1);
    let vertices: Vec<_> = (0..=m).map(|i| g.push_vertex(i)).collect();
    for (&u, &v) in vertices.iter().zip(vertices.iter().skip(1)) {
        g.add_edge_between(u, v, W::one(), true);
    }
    g
}

/// Returns a directed cycle of length `n` with unit weights.
pub fn cycle<W>(n: usize) -> Graph<usize, W>
where
    W: Float,
{
    let mut g = Graph::with_capacity(n);
    let vertices: Vec<_> = (0..n).map(|i| g.push_vertex(i)).collect();
    for (&u, &v) in vertices.iter().zip(vertices.iter().cycle().skip(1)) {
        g.add_edge_between(u, v, W::one(), true);
    }
    g
}

/// Return a grid graph with `n` columns and `m` rows.
///
/// The vertices are created from left to right and from bottom to top.
/// Neighbouring vertices are connected in both directions, the forward
/// direction (to the right or upwards) is visible, the backward one is not.
/// Both edges of a pair get the weight `weights(u, v)` of the forward
/// edge. The following is a grid graph with 5 columns and 4 rows.
///
///   15 - 16 - 17 - 18 - 19
///    |    |    |    |    |
///   10 - 11 - 12 - 13 - 14
///    |    |    |    |    |
///    5 -- 6 -- 7 -- 8 -- 9
///    |    |    |    |    |
///    0 -- 1 -- 2 -- 3 -- 4
///
/// ```
/// use depot_graph::classes;
///
/// let g = classes::grid(5, 4, |_, _| 1.0);
/// assert_eq!(g.num_vertices(), 20);
/// assert_eq!(g.num_edges(), 2 * (5*3 + 4*4));
/// assert_eq!(g.vertices().filter(|&u| g.outedges(u).count() == 2).count(), 4);
/// ```
pub fn grid<W, F>(n: usize, m: usize, mut weights: F) -> Graph<usize, W>
where
    W: Float,
    F: FnMut(usize, usize) -> W,
{
    let mut g = Graph::with_capacity(n * m);
    let vertices: Vec<_> = (0..n * m).map(|i| g.push_vertex(i)).collect();
    for j in 0..m {
        for i in 0..n {
            let u = j * n + i;
            if i + 1 < n {
                let w = weights(u, u + 1);
                g.add_edge_between(vertices[u], vertices[u + 1], w, true);
                g.add_edge_between(vertices[u + 1], vertices[u], w, false);
            }
            if j + 1 < m {
                let w = weights(u, u + n);
                g.add_edge_between(vertices[u], vertices[u + n], w, true);
                g.add_edge_between(vertices[u + n], vertices[u], w, false);
            }
        }
    }
    g
}
