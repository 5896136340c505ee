// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Road networks built from map data.
//!
//! A map consists of points with an id and planar coordinates and of
//! streets between them. The streets are handed over as insertion
//! requests in arbitrary order. Requests referring to unknown points do
//! not abort the construction, they are collected in a [`LoadReport`].
//!
//! # Example
//!
//! ```
//! use depot_graph::network::{build_network, prune_from_depot, EdgeRequest, VertexRequest};
//!
//! let vertices = vec![
//!     VertexRequest { id: 1, x: 0.0, y: 0.0 },
//!     VertexRequest { id: 2, x: 3.0, y: 4.0 },
//!     VertexRequest { id: 3, x: 3.0, y: 0.0 },
//! ];
//! let edges = vec![
//!     EdgeRequest { src: 1, dst: 2, weight: None, directed: false },
//!     EdgeRequest { src: 2, dst: 3, weight: Some(4.0), directed: true },
//!     EdgeRequest { src: 3, dst: 9, weight: None, directed: true },
//! ];
//!
//! let (mut g, report) = build_network(vertices, edges);
//! assert_eq!(report.vertices, 3);
//! assert_eq!(report.edges, 3);
//! assert_eq!(report.failed_edges, vec![(3, 9)]);
//!
//! let u = g.id2vertex(0);
//! assert_eq!(g.outedges(u).next().map(|e| e.weight()), Some(5.0));
//!
//! let reachable = prune_from_depot(&mut g, 3).unwrap();
//! assert_eq!(reachable, vec![g.id2vertex(2)]);
//! ```

use crate::graph::{Graph, VertexId};
use crate::search::dfs;

use log::{debug, info, warn};

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A point of a map.
///
/// Two map nodes are equal if their ids are equal, the coordinates are
/// not compared.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MapNode {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

impl MapNode {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        MapNode { id, x, y }
    }

    /// A node used as lookup key.
    pub fn with_id(id: u64) -> Self {
        MapNode { id, x: 0.0, y: 0.0 }
    }

    /// Euclidean distance between two nodes.
    pub fn distance(&self, other: &MapNode) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl PartialEq for MapNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MapNode {}

impl Hash for MapNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

/// Request to insert a map point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct VertexRequest {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

/// Request to insert a street between two map points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeRequest {
    pub src: u64,
    pub dst: u64,
    /// The length of the street. If `None` the Euclidean distance between
    /// the endpoints is used.
    pub weight: Option<f64>,
    /// A one-way street. Otherwise a hidden reverse edge is added, too.
    pub directed: bool,
}

/// Summary of [`build_network`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    /// Number of inserted vertices.
    pub vertices: usize,
    /// Number of inserted edges, reverse edges included.
    pub edges: usize,
    /// Ids of vertex requests that were ignored because the id existed.
    pub duplicate_vertices: Vec<u64>,
    /// Endpoints of edge requests that were ignored because one of the
    /// endpoints does not exist.
    pub failed_edges: Vec<(u64, u64)>,
}

impl LoadReport {
    /// Return `true` if every request has been inserted.
    pub fn is_complete(&self) -> bool {
        self.duplicate_vertices.is_empty() && self.failed_edges.is_empty()
    }
}

/// Build a road network from insertion requests.
///
/// All vertex requests are processed before the edge requests. A vertex
/// request whose id has already been inserted is skipped, an edge request
/// with an unknown endpoint is skipped. Both are recorded in the returned
/// report.
pub fn build_network<V, E>(vertices: V, edges: E) -> (Graph<MapNode>, LoadReport)
where
    V: IntoIterator<Item = VertexRequest>,
    E: IntoIterator<Item = EdgeRequest>,
{
    let vertices = vertices.into_iter();
    let mut g = Graph::with_capacity(vertices.size_hint().0);
    let mut report = LoadReport::default();
    let mut index = HashMap::<u64, VertexId>::new();

    for req in vertices {
        if index.contains_key(&req.id) {
            warn!("duplicate vertex {}", req.id);
            report.duplicate_vertices.push(req.id);
            continue;
        }
        let u = g.push_vertex(MapNode::new(req.id, req.x, req.y));
        index.insert(req.id, u);
        report.vertices += 1;
    }

    for req in edges {
        let (u, v) = match (index.get(&req.src), index.get(&req.dst)) {
            (Some(&u), Some(&v)) => (u, v),
            _ => {
                warn!("failed to add an edge from {} to {}", req.src, req.dst);
                report.failed_edges.push((req.src, req.dst));
                continue;
            }
        };
        let weight = req.weight.unwrap_or_else(|| g.content(u).distance(g.content(v)));
        g.add_edge_between(u, v, weight, true);
        report.edges += 1;
        if !req.directed {
            g.add_edge_between(v, u, weight, false);
            report.edges += 1;
        }
    }

    debug!(
        "network with {} vertices and {} edges, {} requests failed",
        report.vertices,
        report.edges,
        report.duplicate_vertices.len() + report.failed_edges.len()
    );

    (g, report)
}

/// Prepare a network for routing from the depot with id `depot`.
///
/// Removes all edges with non-positive length and returns the vertices
/// reachable from the depot in depth-first order (the depot first).
/// Returns `None` if there is no vertex with id `depot`.
pub fn prune_from_depot(g: &mut Graph<MapNode>, depot: u64) -> Option<Vec<VertexId>> {
    let d = g.find_vertex(&MapNode::with_id(depot))?;
    let removed = g.remove_nonpositive_edges();
    let reachable = dfs::reachable(&*g, d);
    info!(
        "depot {}: removed {} edges, {} of {} vertices reachable",
        depot,
        removed,
        reachable.len(),
        g.num_vertices()
    );
    Some(reachable)
}

#[cfg(test)]
mod tests {
    use super::{build_network, prune_from_depot, EdgeRequest, LoadReport, MapNode, VertexRequest};

    fn vreq(id: u64, x: f64, y: f64) -> VertexRequest {
        VertexRequest { id, x, y }
    }

    fn ereq(src: u64, dst: u64, weight: Option<f64>, directed: bool) -> EdgeRequest {
        EdgeRequest {
            src,
            dst,
            weight,
            directed,
        }
    }

    #[test]
    fn test_map_node_identity() {
        assert_eq!(MapNode::new(7, 1.0, 2.0), MapNode::with_id(7));
        assert_ne!(MapNode::new(7, 1.0, 2.0), MapNode::new(8, 1.0, 2.0));
        assert_eq!(MapNode::new(1, 1.0, 1.0).distance(&MapNode::new(2, 4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_build_network() {
        let (g, report) = build_network(
            vec![vreq(10, 0.0, 0.0), vreq(20, 0.0, 2.0), vreq(10, 5.0, 5.0), vreq(30, 1.0, 2.0)],
            vec![
                ereq(10, 20, None, false),
                ereq(20, 30, Some(7.5), true),
                ereq(40, 10, None, false),
                ereq(30, 50, Some(1.0), true),
            ],
        );
        assert_eq!(
            report,
            LoadReport {
                vertices: 3,
                edges: 3,
                duplicate_vertices: vec![10],
                failed_edges: vec![(40, 10), (30, 50)],
            }
        );
        assert!(!report.is_complete());

        // the duplicate request did not overwrite the coordinates
        assert_eq!(g.content(g.id2vertex(0)).x, 0.0);

        let edges: Vec<_> = g
            .edges()
            .map(|(u, e)| (g.content(u).id, g.content(e.dest()).id, e.weight(), e.is_visible()))
            .collect();
        assert_eq!(
            edges,
            vec![(10, 20, 2.0, true), (20, 10, 2.0, false), (20, 30, 7.5, true)]
        );
    }

    #[test]
    fn test_prune_from_depot() {
        let (mut g, report) = build_network(
            (1..=5).map(|i| vreq(i, i as f64, 0.0)),
            vec![
                ereq(1, 2, None, true),
                ereq(2, 3, Some(0.0), true),
                ereq(2, 4, Some(-1.0), true),
                ereq(4, 5, None, false),
                ereq(1, 5, Some(3.0), true),
            ],
        );
        assert!(report.is_complete());
        assert_eq!(report.edges, 6);

        let reachable = prune_from_depot(&mut g, 1).unwrap();
        let ids: Vec<_> = reachable.iter().map(|&u| g.content(u).id).collect();
        assert_eq!(ids, vec![1, 2, 5, 4]);
        assert_eq!(g.num_edges(), 4);

        assert_eq!(prune_from_depot(&mut g, 42), None);
    }

    #[test]
    fn test_empty() {
        let (mut g, report) = build_network(Vec::<VertexRequest>::new(), vec![ereq(1, 2, None, false)]);
        assert_eq!(g.num_vertices(), 0);
        assert_eq!(report.failed_edges, vec![(1, 2)]);
        assert_eq!(prune_from_depot(&mut g, 1), None);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serde() {
        let node = MapNode::new(3, 1.5, -2.0);
        let json = serde_json::to_string(&node).unwrap();
        let back: MapNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
        assert_eq!((back.x, back.y), (1.5, -2.0));

        let req: EdgeRequest = serde_json::from_str(r#"{"src":1,"dst":2,"weight":null,"directed":true}"#).unwrap();
        assert_eq!(req, ereq(1, 2, None, true));
    }
}
