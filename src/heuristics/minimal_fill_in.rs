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

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::edit::Edit;
use crate::core::graph::{Graph, NodeIndex};
use crate::core::network::ProbNet;
use crate::core::variable::VariableIndex;
use crate::error::Error;
use crate::heuristics::{EliminationHeuristic, EliminationPhases};

/// This heuristic selects, in the last phase, the node whose elimination adds the fewest links
/// between its neighbors. In case of tie, the first node of the phase is selected.
/// The heuristic works on its own undirected copy of the graph, which it updates when it is
/// notified of an elimination.
#[derive(Debug, Clone)]
pub struct MinimalFillIn {
    phases: EliminationPhases,
    /// Undirected copy of the network graph, with the eliminations applied
    graph: Graph,
    /// Node of each variable still in `graph`
    variables_nodes: FxHashMap<VariableIndex, NodeIndex>,
}

impl MinimalFillIn {

    pub fn new(network: &ProbNet, phases: Vec<Vec<VariableIndex>>) -> Result<Self, Error> {
        let phases = EliminationPhases::new(network, phases)?;
        let graph = network.graph().to_undirected();
        let mut variables_nodes = FxHashMap::default();
        for node in graph.nodes_iter() {
            if let Some(variable) = graph.variable(node) {
                variables_nodes.insert(variable, node);
            }
        }
        Ok(Self {
            phases,
            graph,
            variables_nodes,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns true iff the variable has not been eliminated from the private graph
    pub fn contains_variable(&self, variable: VariableIndex) -> bool {
        self.variables_nodes.contains_key(&variable)
    }
}

impl EliminationHeuristic for MinimalFillIn {

    fn variable_to_delete(&self, _network: &ProbNet) -> Option<VariableIndex> {
        let mut best_variable: Option<VariableIndex> = None;
        let mut best_score = usize::MAX;
        for (variable, node) in self.phases.last_phase_iter() {
            if self.graph.contains(node) {
                let score = self.graph.fill_in(node);
                if score < best_score {
                    best_score = score;
                    best_variable = Some(variable);
                    if score == 0 {
                        break;
                    }
                }
            }
        }
        self.phases.propose(best_variable)
    }

    fn variable_eliminated(&mut self, edit: &Edit) {
        if let Some(variable) = edit.uses_variable() {
            match self.variables_nodes.remove(&variable) {
                Some(node) => {
                    if let Ok(added) = self.graph.eliminate(node) {
                        trace!(?variable, added, "variable eliminated from the fill-in graph");
                    }
                },
                None => trace!(?variable, "variable not in the fill-in graph, ignored"),
            }
        }
        self.phases.variable_eliminated(edit);
    }

    fn phases(&self) -> &EliminationPhases {
        &self.phases
    }

    fn phases_mut(&mut self) -> &mut EliminationPhases {
        &mut self.phases
    }
}
