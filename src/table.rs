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

//! Pairwise distance tables for a subset of vertices.
//!
//! The routing layer needs the shortest distances between all pairs of
//! a few relevant vertices (the depot, the collection points and the
//! destination). The table can be computed either by one Dijkstra run per
//! member of the subset or by one Floyd-Warshall run whose matrix is
//! projected onto the subset.
//!
//! # Example
//!
//! ```
//! use depot_graph::{build_pairwise_table, classes, Algorithm};
//!
//! let g = classes::grid(4, 4, |_, _| 2.0);
//! let subset = [g.id2vertex(0), g.id2vertex(5), g.id2vertex(15)];
//!
//! let algorithm: Algorithm = "floyd-warshall".parse().unwrap();
//! let table = build_pairwise_table(&g, &subset, algorithm).unwrap();
//! assert_eq!(table.get(subset[0], subset[2]), Some(12.0));
//! assert_eq!(table.get(subset[1], subset[0]), Some(4.0));
//! assert_eq!(table.len(), 9);
//!
//! assert!("astar".parse::<Algorithm>().is_err());
//! ```

use crate::graph::{Graph, VertexId};
use crate::num::traits::Float;
use crate::shortestpath::{dijkstra, floydwarshall};
use crate::traits::Indexable;

use log::debug;

use std::collections::HashMap;
use std::error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Error when building a pairwise table.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The name of the algorithm is not recognized.
    UnknownAlgorithm(String),
    /// A member of the subset is not a vertex of the graph.
    UnknownVertex(VertexId),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            UnknownAlgorithm(name) => write!(
                fmt,
                "Unknown algorithm '{}', expected 'dijkstra' or 'floyd-warshall'",
                name
            ),
            UnknownVertex(u) => write!(fmt, "Unknown vertex {}", u),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// The algorithm used to compute a pairwise table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// One Dijkstra run per member of the subset (non-negative weights).
    Dijkstra,
    /// One Floyd-Warshall run on the whole graph.
    FloydWarshall,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            Algorithm::Dijkstra => write!(fmt, "dijkstra"),
            Algorithm::FloydWarshall => write!(fmt, "floyd-warshall"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "floyd-warshall" | "floydwarshall" | "fw" => Ok(Algorithm::FloydWarshall),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Shortest distances between the pairs of a vertex subset.
///
/// Pairs without a connecting path are not contained in the table.
#[derive(Clone, Debug, Default)]
pub struct PairwiseTable<W = f64> {
    dist: HashMap<(VertexId, VertexId), W>,
}

impl<W> PairwiseTable<W>
where
    W: Float,
{
    /// The length of a shortest path from `u` to `v`, `None` if `v` is not
    /// reachable from `u` or the pair is not in the table.
    pub fn get(&self, u: VertexId, v: VertexId) -> Option<W> {
        self.dist.get(&(u, v)).cloned()
    }

    /// The number of connected pairs.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Iterate over all connected pairs and their distances.
    pub fn iter(&self) -> impl Iterator<Item = ((VertexId, VertexId), W)> + '_ {
        self.dist.iter().map(|(&uv, &d)| (uv, d))
    }

    fn insert(&mut self, u: VertexId, v: VertexId, d: W) {
        if d < W::infinity() {
            self.dist.insert((u, v), d);
        }
    }
}

/// Compute the shortest distances between all pairs of `subset`.
///
/// Returns an error if some member of `subset` is not a vertex of `g`.
/// With [`Algorithm::Dijkstra`] all edge weights must be non-negative.
pub fn build_pairwise_table<T, W>(g: &Graph<T, W>, subset: &[VertexId], algorithm: Algorithm) -> Result<PairwiseTable<W>>
where
    W: Float,
{
    if let Some(&u) = subset.iter().find(|u| u.index() >= g.num_vertices()) {
        return Err(Error::UnknownVertex(u));
    }

    debug!("pairwise table for {} vertices using {}", subset.len(), algorithm);

    let mut table = PairwiseTable {
        dist: HashMap::with_capacity(subset.len() * subset.len()),
    };
    match algorithm {
        Algorithm::Dijkstra => {
            for &u in subset {
                let tree = dijkstra::shortest_paths(g, u);
                for &v in subset {
                    table.insert(u, v, tree.dist(v));
                }
            }
        }
        Algorithm::FloydWarshall => {
            let ap = floydwarshall::all_pairs(g);
            for &u in subset {
                for &v in subset {
                    table.insert(u, v, ap.dist(u, v));
                }
            }
        }
    }

    Ok(table)
}
