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

//! Computes the partition of the variables of a network in elimination phases.
//!
//! In a Bayesian network every chance variable can be eliminated in any order, there is a single
//! phase. In an influence diagram the decisions D1, ..., Dn are totally ordered and the chance
//! variables are partitioned by the moment at which they are observed:
//!     - I0 are observed before D1, I1 between D1 and D2, ..., In are never observed
//! The phases are [I0, {D1}, I1, {D2}, ..., In]. Since the phases are eliminated from the last to
//! the first, the never observed variables are eliminated first and a decision is only
//! eliminated once everything observed after it is gone.

use rustc_hash::FxHashSet;

use super::graph::NodeIndex;
use super::network::ProbNet;
use super::variable::VariableIndex;
use crate::error::Error;

/// Returns the nodes of the network in a topological order (parents first). Ties are broken by
/// node index.
fn topological_order(network: &ProbNet) -> Vec<NodeIndex> {
    let graph = network.graph();
    let mut remaining_parents = vec![0; graph.nodes_iter().map(|n| n.0 + 1).max().unwrap_or(0)];
    for node in graph.nodes_iter() {
        remaining_parents[node.0] = graph.parents(node).len();
    }
    let mut ready = graph.nodes_iter().filter(|n| remaining_parents[n.0] == 0).collect::<Vec<NodeIndex>>();
    ready.reverse();
    let mut order = vec![];
    while let Some(node) = ready.pop() {
        order.push(node);
        for child in graph.children(node).iter().copied() {
            remaining_parents[child.0] -= 1;
            if remaining_parents[child.0] == 0 {
                ready.push(child);
            }
        }
    }
    order
}

/// Returns the elimination phases of the network. Utility variables are never part of a phase and
/// empty phases are dropped.
pub fn elimination_phases(network: &ProbNet) -> Result<Vec<Vec<VariableIndex>>, Error> {
    let order = topological_order(network);
    let decisions = order.iter().copied().filter(|n| network.variable_of(*n).map(|v| network[v].is_decision()).unwrap_or(false)).collect::<Vec<NodeIndex>>();
    for window in decisions.windows(2) {
        if !network.graph().has_directed_path(window[0], window[1]) {
            return Err(Error::UnorderedDecisions(describe(network, window[0]), describe(network, window[1])));
        }
    }

    let mut placed: FxHashSet<VariableIndex> = FxHashSet::default();
    let mut phases: Vec<Vec<VariableIndex>> = vec![];
    for decision in decisions.iter().copied() {
        let mut observed = network.graph().parents(decision).iter()
            .filter_map(|p| network.variable_of(*p))
            .filter(|v| network[*v].is_chance() && !placed.contains(v))
            .collect::<Vec<VariableIndex>>();
        observed.sort();
        placed.extend(observed.iter().copied());
        phases.push(observed);
        if let Some(variable) = network.variable_of(decision) {
            phases.push(vec![variable]);
        }
    }
    let never_observed = network.present_variables_iter().filter(|v| network[*v].is_chance() && !placed.contains(v)).collect::<Vec<VariableIndex>>();
    phases.push(never_observed);
    phases.retain(|phase| !phase.is_empty());
    Ok(phases)
}

fn describe(network: &ProbNet, node: NodeIndex) -> String {
    match network.variable_of(node) {
        Some(v) => network.describe(v),
        None => format!("{:?}", node),
    }
}
