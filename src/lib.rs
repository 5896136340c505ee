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

#![forbid(unsafe_code)]

//! A weighted graph engine with single-source and all-pairs shortest paths.
//!
//! The graph stores vertices identified by their content (e.g. a map
//! node with an id and coordinates) and directed weighted edges between
//! them. On top of it the crate provides
//!
//! - depth-first reachability ([`search::dfs`]),
//! - unweighted shortest paths ([`shortestpath::bfs`]),
//! - Dijkstra's algorithm with a decrease-key heap ([`shortestpath::dijkstra`]),
//! - the algorithm of Moore-Bellman-Ford ([`shortestpath::moorebellmanford`]),
//! - the all-pairs algorithm of Floyd and Warshall ([`shortestpath::floydwarshall`]),
//!
//! and a pairwise distance table for a subset of vertices ([`table`]) as
//! used by the depot routing layer ([`network`]).
//!
//! # Example
//!
//! ```
//! use depot_graph::Graph;
//!
//! let mut g = Graph::new();
//! for &c in &['a', 'b', 'c', 'd'] {
//!     g.add_vertex(c);
//! }
//! for &(u, v, w) in &[('a', 'b', 1.0), ('a', 'c', 4.0), ('b', 'c', 1.0), ('b', 'd', 5.0), ('c', 'd', 1.0)] {
//!     g.add_edge(&u, &v, w);
//! }
//!
//! assert!(g.dijkstra_shortest_path(&'a'));
//! assert_eq!(g.path_to(&'d'), vec!['a', 'b', 'c', 'd']);
//!
//! g.floyd_warshall_shortest_path();
//! assert_eq!(g.floyd_warshall_distance(&'a', &'d'), Some(3.0));
//! ```

mod num {
    pub use num_traits as traits;
}

pub mod traits;
pub use self::traits::Indexable;

pub mod graph;
pub use self::graph::{Edge, Graph, Vertex, VertexId};

/// Graph classes
pub mod classes;

pub mod collections;

// # Algorithms

pub mod search;
pub mod shortestpath;
pub use self::shortestpath::{AllPairs, ShortestPathTree};

// # Routing

pub mod network;
pub mod table;
pub use self::table::{build_pairwise_table, Algorithm, PairwiseTable};
