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

use depot_graph::network::{build_network, prune_from_depot, EdgeRequest, VertexRequest};
use depot_graph::{build_pairwise_table, Algorithm};
use std::error::Error;
use std::result::Result;

use flexi_logger::Logger;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustop::opts;
use time::OffsetDateTime;

/// Insertion requests for a randomly perturbed street grid.
fn random_map(rng: &mut StdRng, size: u64) -> (Vec<VertexRequest>, Vec<EdgeRequest>) {
    let mut vertices = Vec::with_capacity((size * size) as usize);
    let mut edges = vec![];
    for j in 0..size {
        for i in 0..size {
            let id = j * size + i;
            vertices.push(VertexRequest {
                id,
                x: i as f64 * 100.0 + rng.random_range(-30.0..30.0),
                y: j as f64 * 100.0 + rng.random_range(-30.0..30.0),
            });
            if i + 1 < size {
                edges.push(EdgeRequest {
                    src: id,
                    dst: id + 1,
                    weight: None,
                    directed: rng.random_range(0..4) == 0,
                });
            }
            if j + 1 < size {
                edges.push(EdgeRequest {
                    src: id,
                    dst: id + size,
                    weight: None,
                    directed: rng.random_range(0..4) == 0,
                });
            }
        }
    }
    (vertices, edges)
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Compute a distance table between random collection points of a street grid.";
        opt algorithm:Option<String>, desc:"Algorithm (dijkstra or floyd-warshall, default dijkstra)";
        opt size:u64=20, desc:"Number of rows and columns of the grid";
        opt points:usize=10, desc:"Number of collection points";
        opt seed:u64=42, desc:"Seed of the random generator";
        opt depot:u64=0, desc:"Id of the depot";
        opt verbose:bool, desc:"Print debug messages";
    }
    .parse_or_exit();

    let _logger = Logger::try_with_str(if args.verbose { "debug" } else { "info" })?.start()?;

    let algorithm: Algorithm = args.algorithm.as_deref().unwrap_or("dijkstra").parse()?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    let tstart = OffsetDateTime::now_utc();
    let (vertices, edges) = random_map(&mut rng, args.size);
    let (mut g, report) = build_network(vertices, edges);
    let reachable = prune_from_depot(&mut g, args.depot).ok_or_else(|| format!("Unknown depot {}", args.depot))?;
    let tend = OffsetDateTime::now_utc();

    println!("Grid size           : {} x {}", args.size, args.size);
    println!("Load Time (seconds) : {}", (tend - tstart).as_seconds_f64());
    println!("Number of vertices  : {}", g.num_vertices());
    println!("Number of edges     : {}", g.num_edges());
    println!("Failed requests     : {}", report.failed_edges.len() + report.duplicate_vertices.len());
    println!("Reachable vertices  : {}", reachable.len());

    let mut subset = vec![reachable[0]];
    subset.extend(reachable[1..].choose_multiple(&mut rng, args.points).cloned());

    let tstart = OffsetDateTime::now_utc();
    let table = build_pairwise_table(&g, &subset, algorithm)?;
    let tend = OffsetDateTime::now_utc();

    println!();
    println!("Algorithm           : {}", algorithm);
    println!("Time (seconds)      : {:.4}", (tend - tstart).as_seconds_f64());
    println!("Table entries       : {}", table.len());
    println!();

    for &v in &subset[1..] {
        let there = table.get(subset[0], v);
        let back = table.get(v, subset[0]);
        match (there, back) {
            (Some(there), Some(back)) => println!(
                "{:>6}  out {:>10.2}  back {:>10.2}",
                g.content(v).id,
                there,
                back
            ),
            (Some(there), None) => println!("{:>6}  out {:>10.2}  back          -", g.content(v).id, there),
            _ => println!("{:>6}  unreachable", g.content(v).id),
        }
    }

    Ok(())
}
