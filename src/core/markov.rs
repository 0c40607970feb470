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

//! Moralization of a probabilistic network. The moral (Markov) network of a Bayesian network or an
//! influence diagram has an undirected link between two variables iff they appear together in a
//! potential:
//!     - a chance or decision variable is linked to each of its parents
//!     - the parents of a variable are linked pairwise ("married")
//!     - a utility variable is not a variable of the potentials, so its parents are married and the
//!       utility node is dropped
//!
//! Undirected links of the source network are kept. The moral network keeps the node indexes of
//! the source network.

use super::graph::{Graph, NodeIndex};
use super::network::ProbNet;
use tracing::{error, trace};

/// Adds an undirected link between each pair of nodes that are not adjacent yet
fn marry(graph: &mut Graph, nodes: &[NodeIndex]) {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if !graph.are_adjacent(nodes[i], nodes[j]) {
                if let Err(e) = graph.add_link(nodes[i], nodes[j], false) {
                    error!(error = %e, "could not marry two nodes of a family");
                }
            }
        }
    }
}

/// Returns the moral network of the given network
pub fn markov_network(network: &ProbNet) -> ProbNet {
    let mut markov = network.clone();
    let source = network.graph();
    {
        let graph = markov.graph_mut();
        for link in source.links().into_iter().filter(|l| l.directed) {
            if let Err(e) = graph.remove_link(link.from, link.to, true) {
                error!(error = %e, "could not remove a directed link from the moral network");
            }
        }
        for node in source.nodes_iter() {
            let mut family = source.parents(node).to_vec();
            let is_utility = network.variable_of(node).map(|v| network[v].is_utility()).unwrap_or(false);
            if !is_utility {
                family.push(node);
            }
            marry(graph, &family);
        }
    }
    let utilities = network.present_variables_iter().filter(|v| network[*v].is_utility()).collect::<Vec<_>>();
    for utility in utilities {
        trace!(variable = %network[utility], "dropping utility node from the moral network");
        if let Err(e) = markov.remove_node(utility) {
            error!(error = %e, "could not drop a utility node from the moral network");
        }
    }
    markov
}
