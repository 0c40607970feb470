//Triangulum
//Copyright (C) 2022-2023 A. Dubray
//
//This program is free software: you can redistribute it and/or modify
//it under the terms of the GNU Affero General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//This program is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU Affero General Public License for more details.
//
//You should have received a copy of the GNU Affero General Public License
//along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Enumeration of the maximal cliques around a node.
//!
//! The enumeration is local: it only considers the subgraph induced by a node (the center) and its
//! neighbors, and only the cliques reachable from the 2-cliques {center, neighbor}. Hence every
//! clique returned contains the center.
//! The vertices of the local subgraph are renumbered from 0 (the center) to k (its k neighbors) so
//! that cliques and adjacency rows can be stored as bit sets.

use rustc_hash::FxHashSet;

use crate::core::bitvec::Bitvec;
use crate::core::graph::{Graph, NodeIndex};

/// Returns the maximal cliques of the subgraph induced by `center` and its neighbors. Each clique
/// is returned once, with its nodes in local order (the center first). A node without neighbors
/// is its own maximal clique.
pub fn maximal_cliques(graph: &Graph, center: NodeIndex) -> Vec<Vec<NodeIndex>> {
    if !graph.contains(center) {
        return vec![];
    }
    let mut local = vec![center];
    local.extend(graph.neighbors(center));
    let size = local.len();
    if size == 1 {
        return vec![local];
    }

    let adjacency = (0..size).map(|a| {
        let mut row = Bitvec::new(size);
        for b in (0..size).filter(|b| *b != a) {
            if graph.are_adjacent(local[a], local[b]) {
                row.set(b);
            }
        }
        row
    }).collect::<Vec<Bitvec>>();

    // Each clique is pushed at most once, and every one of its extensions is pushed when it is popped
    let mut stack = (1..size).map(|n| Bitvec::new(size).with(0).with(n)).collect::<Vec<Bitvec>>();
    let mut visited: FxHashSet<Bitvec> = stack.iter().cloned().collect();
    let mut maximals: Vec<Bitvec> = vec![];
    while let Some(clique) = stack.pop() {
        let mut extensions = Bitvec::new(size);
        for v in 1..size {
            extensions.set(v);
        }
        for member in clique.iter() {
            extensions.intersect(&adjacency[member]);
        }
        if extensions.is_empty() {
            maximals.push(clique);
            continue;
        }
        for v in extensions.iter() {
            let extended = clique.with(v);
            if visited.insert(extended.clone()) {
                stack.push(extended);
            }
        }
    }
    maximals.iter().map(|c| c.iter().map(|i| local[i]).collect()).collect()
}
