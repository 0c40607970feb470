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

//! Bookkeeping shared by all the elimination heuristics.
//!
//! The variables to eliminate are given as a list of phases. Phases are eliminated from the last
//! to the first: a variable of phase i can only be proposed once all the variables of the phases
//! j > i have been eliminated. For each variable the node of the network is resolved once, at
//! construction, and stored in a parallel list.
//!
//! Empty phases are dropped as soon as they become empty, so the last phase of the list is always
//! the one from which the next variable must be chosen.

use std::cell::Cell;

use tracing::trace;

use crate::core::edit::Edit;
use crate::core::graph::NodeIndex;
use crate::core::network::ProbNet;
use crate::core::variable::VariableIndex;
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct EliminationPhases {
    /// Variables to eliminate, per phase
    variables: Vec<Vec<VariableIndex>>,
    /// Nodes of the variables to eliminate, per phase (parallel to `variables`)
    nodes: Vec<Vec<NodeIndex>>,
    /// Last variable proposed by the heuristic. It may be stale if the proposition was not followed
    /// by an elimination.
    proposed: Cell<Option<VariableIndex>>,
}

impl EliminationPhases {

    /// Creates the phases, resolving each variable to its node in the network. Fails if a variable
    /// has no node in the network.
    pub fn new(network: &ProbNet, phases: Vec<Vec<VariableIndex>>) -> Result<Self, Error> {
        let mut variables = Vec::with_capacity(phases.len());
        let mut nodes = Vec::with_capacity(phases.len());
        for phase in phases.into_iter().filter(|p| !p.is_empty()) {
            let phase_nodes = phase.iter().map(|v| network.node(*v)).collect::<Result<Vec<NodeIndex>, Error>>()?;
            variables.push(phase);
            nodes.push(phase_nodes);
        }
        Ok(Self {
            variables,
            nodes,
            proposed: Cell::new(None),
        })
    }

    /// Removes the variable from the last phase. If the variable is not in the last phase, nothing
    /// is done. Returns true iff the variable has been removed.
    pub fn remove(&mut self, variable: VariableIndex) -> bool {
        let (variables, nodes) = match (self.variables.last_mut(), self.nodes.last_mut()) {
            (Some(v), Some(n)) => (v, n),
            _ => return false,
        };
        let position = match variables.iter().position(|v| *v == variable) {
            Some(p) => p,
            None => {
                trace!(?variable, "variable not in the last phase, ignored");
                return false;
            },
        };
        variables.remove(position);
        nodes.remove(position);
        if variables.is_empty() {
            self.variables.pop();
            self.nodes.pop();
        }
        true
    }

    /// Updates the phases after the notification of an edit. Only the edits using a variable are
    /// considered. Returns the variable removed from the phases, if any.
    pub fn variable_eliminated(&mut self, edit: &Edit) -> Option<VariableIndex> {
        let variable = edit.uses_variable()?;
        if self.remove(variable) {
            Some(variable)
        } else {
            None
        }
    }

    /// Returns the variables of the last phase
    pub fn last_variables(&self) -> Option<&[VariableIndex]> {
        self.variables.last().map(|p| p.as_slice())
    }

    /// Returns the nodes of the last phase
    pub fn last_phase(&self) -> Option<&[NodeIndex]> {
        self.nodes.last().map(|p| p.as_slice())
    }

    /// Iterates over the (variable, node) pairs of the last phase
    pub fn last_phase_iter(&self) -> impl Iterator<Item = (VariableIndex, NodeIndex)> + '_ {
        let variables = self.last_variables().unwrap_or(&[]);
        let nodes = self.last_phase().unwrap_or(&[]);
        variables.iter().copied().zip(nodes.iter().copied())
    }

    /// Iterates over the nodes still to eliminate, all phases included
    pub fn nodes_iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().flatten().copied()
    }

    /// Returns the variables still to eliminate, per phase
    pub fn variables(&self) -> &[Vec<VariableIndex>] {
        &self.variables
    }

    pub fn number_phases(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Records the proposition of a heuristic and returns it
    pub fn propose(&self, variable: Option<VariableIndex>) -> Option<VariableIndex> {
        self.proposed.set(variable);
        variable
    }

    pub fn last_proposed(&self) -> Option<VariableIndex> {
        self.proposed.get()
    }
}

#[cfg(test)]
mod test_phases {

    use crate::core::edit::Edit;
    use crate::core::network::ProbNet;
    use crate::core::variable::{Variable, VariableIndex};
    use crate::error::Error;
    use super::EliminationPhases;

    fn network(n: usize) -> (ProbNet, Vec<VariableIndex>) {
        let mut net = ProbNet::new();
        let v = (0..n).map(|i| net.add_variable(Variable::chance(&format!("V{}", i), 2))).collect::<Vec<VariableIndex>>();
        (net, v)
    }

    fn eliminate(v: VariableIndex) -> Edit {
        Edit::RemoveNode { variable: v }
    }

    #[test]
    pub fn empty_phases_are_dropped() {
        let (net, v) = network(3);
        let phases = EliminationPhases::new(&net, vec![vec![v[0]], vec![], vec![v[1], v[2]], vec![]]).unwrap();
        assert_eq!(2, phases.number_phases());
        assert_eq!(Some(&[v[1], v[2]][..]), phases.last_variables());
    }

    #[test]
    pub fn unresolved_variable_aborts_construction() {
        let (mut net, v) = network(2);
        net.remove_node(v[1]).unwrap();
        let res = EliminationPhases::new(&net, vec![vec![v[0], v[1]]]);
        assert_eq!(Some(Error::NodeNotFound("V1".to_string())), res.err());
    }

    #[test]
    pub fn elimination_proceeds_from_the_last_phase() {
        let (net, v) = network(3);
        let mut phases = EliminationPhases::new(&net, vec![vec![v[0]], vec![v[1], v[2]]]).unwrap();
        // v0 is not in the last phase, the notification is ignored
        assert_eq!(None, phases.variable_eliminated(&eliminate(v[0])));
        assert_eq!(2, phases.number_phases());
        assert_eq!(Some(v[2]), phases.variable_eliminated(&eliminate(v[2])));
        assert_eq!(vec![(v[1], net.node(v[1]).unwrap())], phases.last_phase_iter().collect::<Vec<_>>());
        phases.variable_eliminated(&eliminate(v[1]));
        assert_eq!(1, phases.number_phases());
        phases.variable_eliminated(&eliminate(v[0]));
        assert!(phases.is_empty());
        assert_eq!(None, phases.last_phase());
        assert!(!phases.remove(v[0]));
    }

    #[test]
    pub fn edits_without_variable_are_ignored() {
        let (net, v) = network(2);
        let mut phases = EliminationPhases::new(&net, vec![vec![v[0], v[1]]]).unwrap();
        let edit = Edit::AddLink { from: v[0], to: v[1], directed: false };
        assert_eq!(None, phases.variable_eliminated(&edit));
        assert_eq!(2, phases.nodes_iter().count());
    }

    #[test]
    pub fn last_proposition_is_recorded() {
        let (net, v) = network(1);
        let phases = EliminationPhases::new(&net, vec![vec![v[0]]]).unwrap();
        assert_eq!(None, phases.last_proposed());
        assert_eq!(Some(v[0]), phases.propose(Some(v[0])));
        assert_eq!(Some(v[0]), phases.last_proposed());
    }
}
