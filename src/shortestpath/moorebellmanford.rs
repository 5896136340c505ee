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

//! The shortest-path algorithm by Moore-Bellman-Ford.

use super::ShortestPathTree;
use crate::graph::{Graph, VertexId};
use crate::num::traits::Float;

use log::{debug, warn};

/// The shortest-path algorithm by Moore-Bellman-Ford on a directed graph.
///
/// Edge weights may be negative. The algorithm runs $|V|-1$ passes over
/// all edges (stopping early if a pass changes nothing) followed by one
/// additional pass.
///
/// If a label changes in the additional pass, there is a negative cycle
/// reachable from `src`. The run does not fail in this case: the
/// relaxations of the additional pass are applied like any other, so the
/// labels of vertices on or behind the cycle are just one pass more
/// negative and are no shortest path distances. The first vertex whose
/// label changed is reported by
/// [`ShortestPathTree::negative_cycle`].
///
/// # Panics
/// If `src` is not a vertex of `g`.
///
/// # Example
///
/// ```
/// use depot_graph::Graph;
/// use depot_graph::shortestpath::moorebellmanford;
///
/// let mut g = Graph::new();
/// for i in 0..7 {
///     g.add_vertex(i);
/// }
/// for &(u, v, w) in [(0, 1, -8.0), (1, 4, -3.0), (2, 0, 2.0), (2, 1, 1.0), (2, 5, -3.0), (3, 1, 0.0), (3, 2, 5.0),
///                    (4, 3, 8.0), (5, 3, -1.0), (6, 3, 4.0), (6, 4, 6.0), (6, 5, 3.0)].iter()
/// {
///     g.add_edge(&u, &v, w);
/// }
///
/// let tree = moorebellmanford::shortest_paths(&g, g.id2vertex(6));
/// assert_eq!(tree.negative_cycle(), None);
/// assert_eq!(tree.pred(g.id2vertex(6)), None);
/// for &(u, p) in [(0, 2), (1, 0), (2, 3), (4, 1), (5, 6)].iter() {
///     assert_eq!(tree.pred(g.id2vertex(u)), Some(g.id2vertex(p)));
/// }
/// assert_eq!(tree.dist(g.id2vertex(4)), -2.0);
/// ```
pub fn shortest_paths<T, W>(g: &Graph<T, W>, src: VertexId) -> ShortestPathTree<W>
where
    W: Float,
{
    let n = g.num_vertices();
    debug!("moore-bellman-ford from {} on {} vertices, {} edges", src, n, g.num_edges());

    let mut tree = ShortestPathTree::new(n, src);

    for i in 0..n {
        let last = i + 1 == n;
        let mut changed = false;
        for (u, e) in g.edges() {
            let dist_u = tree.dist(u);
            // skip source vertices that have not been seen, yet
            if dist_u == W::infinity() {
                continue;
            }

            let v = e.dest();
            let newdist = dist_u + e.weight();
            if newdist < tree.dist(v) {
                tree.update(v, newdist, u);
                changed = true;
                if last {
                    tree.set_negative_cycle(v);
                }
            }
        }
        if !changed {
            break;
        }
    }

    if let Some(v) = tree.negative_cycle() {
        warn!("negative cycle reachable from {} (label of {} still decreasing)", src, v);
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::shortest_paths;
    use crate::shortestpath::dijkstra;
    use crate::{classes, Graph};

    #[test]
    fn test_negative_edge() {
        let mut g: Graph<char> = Graph::new();
        for &c in &['s', 'a', 'b', 't'] {
            g.add_vertex(c);
        }
        for &(u, v, w) in &[('s', 'a', 4.0), ('s', 'b', 2.0), ('a', 'b', -3.0), ('b', 't', 1.0)] {
            g.add_edge(&u, &v, w);
        }
        let s = g.find_vertex(&'s').unwrap();
        let a = g.find_vertex(&'a').unwrap();
        let b = g.find_vertex(&'b').unwrap();
        let t = g.find_vertex(&'t').unwrap();
        let tree = shortest_paths(&g, s);
        assert_eq!(tree.dist(b), 1.0);
        assert_eq!(tree.dist(t), 2.0);
        assert_eq!(tree.path_to(t), vec![s, a, b, t]);
        assert_eq!(tree.negative_cycle(), None);
    }

    #[test]
    fn test_agrees_with_dijkstra() {
        let g = classes::grid(5, 5, |u, v| ((u * 13 + v * 5) % 7 + 1) as f64);
        for src in g.vertices() {
            let bf = shortest_paths(&g, src);
            let dj = dijkstra::shortest_paths(&g, src);
            assert_eq!(bf.distances(), dj.distances());
        }
    }

    #[test]
    fn test_negative_cycle() {
        // s -> a -> b -> a is a cycle of length -1
        let mut g: Graph<char> = Graph::new();
        for &c in &['s', 'a', 'b', 'x'] {
            g.add_vertex(c);
        }
        for &(u, v, w) in &[('s', 'a', 1.0), ('a', 'b', 1.0), ('b', 'a', -2.0), ('x', 's', 1.0)] {
            g.add_edge(&u, &v, w);
        }
        let s = g.find_vertex(&'s').unwrap();
        let a = g.find_vertex(&'a').unwrap();
        let b = g.find_vertex(&'b').unwrap();
        let x = g.find_vertex(&'x').unwrap();
        let tree = shortest_paths(&g, s);

        // the cycle is detected but the run completes
        assert_eq!(tree.negative_cycle(), Some(b));

        // Edges are scanned in insertion order, each pass lowers both
        // labels by one. After the three regular passes a = -2, b = 0, the
        // extra pass lowers both once more.
        assert_eq!(tree.dist(s), 0.0);
        assert_eq!(tree.dist(a), -3.0);
        assert_eq!(tree.dist(b), -1.0);
        assert!(!tree.is_reached(x));

        // the predecessors of a and b form a cycle, so no path exists
        assert_eq!(tree.pred(a), Some(b));
        assert_eq!(tree.pred(b), Some(a));
        assert!(tree.path_to(b).is_empty());
        assert_eq!(tree.path_to(s), vec![s]);
    }

    #[test]
    fn test_negative_cycle_unreachable() {
        let mut g: Graph<u32> = Graph::new();
        for i in 0..3 {
            g.add_vertex(i);
        }
        g.add_edge(&1, &2, -1.0);
        g.add_edge(&2, &1, -1.0);
        let tree = shortest_paths(&g, g.id2vertex(0));
        assert_eq!(tree.negative_cycle(), None);
        assert!(!tree.is_reached(g.id2vertex(1)));
    }
}
