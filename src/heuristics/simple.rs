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

use crate::core::network::ProbNet;
use crate::core::variable::VariableIndex;
use crate::error::Error;
use crate::heuristics::{EliminationHeuristic, EliminationPhases};

/// This heuristic selects, in the last phase, the node with the minimum number of siblings in the
/// network being eliminated. In case of tie, the first node of the phase is selected.
/// It keeps no copy of the network: the state of the graph is read from the network given at each
/// proposition.
#[derive(Debug, Clone)]
pub struct SimpleElimination {
    phases: EliminationPhases,
}

impl SimpleElimination {

    pub fn new(network: &ProbNet, phases: Vec<Vec<VariableIndex>>) -> Result<Self, Error> {
        Ok(Self {
            phases: EliminationPhases::new(network, phases)?,
        })
    }
}

impl EliminationHeuristic for SimpleElimination {

    fn variable_to_delete(&self, network: &ProbNet) -> Option<VariableIndex> {
        let mut best_variable: Option<VariableIndex> = None;
        let mut best_score = usize::MAX;
        for (variable, node) in self.phases.last_phase_iter() {
            if network.graph().contains(node) {
                let score = network.graph().number_siblings(node);
                if score < best_score {
                    best_score = score;
                    best_variable = Some(variable);
                }
            }
        }
        self.phases.propose(best_variable)
    }

    fn phases(&self) -> &EliminationPhases {
        &self.phases
    }

    fn phases_mut(&mut self) -> &mut EliminationPhases {
        &mut self.phases
    }
}
