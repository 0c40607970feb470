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

//! Triangulation of a graph along an elimination order.
//!
//! The nodes are eliminated in order, without being removed: when a node is eliminated, its
//! neighbors that are not eliminated yet are linked pairwise. The resulting graph is chordal and
//! the order is a perfect elimination order of it.

use rustc_hash::FxHashSet;

use crate::core::graph::{Graph, NodeIndex};
use crate::error::Error;

/// Returns the neighbors of the node that are not eliminated yet
fn remaining_neighbors(graph: &Graph, node: NodeIndex, eliminated: &FxHashSet<NodeIndex>) -> Vec<NodeIndex> {
    graph.neighbors(node).into_iter().filter(|n| !eliminated.contains(n)).collect()
}

/// Returns an undirected copy of the graph triangulated along the deletion sequence. Nodes absent
/// from the sequence are never eliminated.
pub fn triangulate(graph: &Graph, deletion_sequence: &[NodeIndex]) -> Result<Graph, Error> {
    let mut triangulated = graph.to_undirected();
    let mut eliminated: FxHashSet<NodeIndex> = FxHashSet::default();
    for node in deletion_sequence.iter().copied() {
        let neighbors = remaining_neighbors(&triangulated, node, &eliminated);
        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                if !triangulated.are_adjacent(neighbors[i], neighbors[j]) {
                    triangulated.add_link(neighbors[i], neighbors[j], false)?;
                }
            }
        }
        eliminated.insert(node);
    }
    Ok(triangulated)
}

/// Returns the induced width of the deletion sequence: the largest number of remaining neighbors
/// of a node at the time of its elimination.
pub fn induced_width(graph: &Graph, deletion_sequence: &[NodeIndex]) -> Result<usize, Error> {
    let triangulated = triangulate(graph, deletion_sequence)?;
    let mut eliminated: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut width = 0;
    for node in deletion_sequence.iter().copied() {
        width = width.max(remaining_neighbors(&triangulated, node, &eliminated).len());
        eliminated.insert(node);
    }
    Ok(width)
}
