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

//! This module provides several elimination heuristics. A heuristic does not eliminate variables
//! itself: it is an advisor that proposes, at each step, the next variable to eliminate. The caller
//! performs the elimination on its network (through edits) and notifies the heuristic of each
//! committed edit, so that the heuristic can update its internal state.
//!
//! The variables to eliminate are partitioned in phases (see `EliminationPhases`). The heuristics
//! only propose variables from the last phase that still has variables to eliminate.

use crate::core::edit::Edit;
use crate::core::network::ProbNet;
use crate::core::variable::VariableIndex;

/// Trait that defines the methods that an elimination heuristic must implement.
pub trait EliminationHeuristic {
    /// Proposes the next variable to eliminate, or None if no variable remains. This is a pure
    /// query: calling it again without an intervening notification returns the same variable.
    /// `network` is the network on which the caller eliminates the variables.
    fn variable_to_delete(&self, network: &ProbNet) -> Option<VariableIndex>;

    /// Returns the phases of variables still to eliminate
    fn phases(&self) -> &EliminationPhases;

    fn phases_mut(&mut self) -> &mut EliminationPhases;

    /// Notifies the heuristic that an edit has been committed on the network. Edits that do not use
    /// a variable, or that use a variable absent from the last phase, are ignored.
    fn variable_eliminated(&mut self, edit: &Edit) {
        self.phases_mut().variable_eliminated(edit);
    }

    /// Returns the number of phases that still have variables to eliminate
    fn number_phases(&self) -> usize {
        self.phases().number_phases()
    }
}

mod cliques;
mod phases;
mod simple;
mod minimal_fill_in;
mod cano_moral;
pub mod registry;

pub use cliques::maximal_cliques;
pub use phases::EliminationPhases;
pub use simple::SimpleElimination;
pub use minimal_fill_in::MinimalFillIn;
pub use cano_moral::CanoMoralElimination;
pub use registry::{HeuristicFactory, HeuristicRegistry};
