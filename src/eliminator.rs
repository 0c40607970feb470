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

//! Driver of the elimination. The eliminator owns the network on which the variables are
//! eliminated and asks a heuristic, at each step, which variable to eliminate next. Each elimination
//! is performed through the edit log:
//!     1. An undirected link is added between each pair of non-adjacent neighbors of the variable
//!     2. The node of the variable is removed
//! Every committed edit is forwarded to the heuristic, in the order in which it is committed.

use tracing::debug;

use crate::core::edit::{Edit, EditLog};
use crate::core::network::ProbNet;
use crate::core::variable::VariableIndex;
use crate::error::Error;
use crate::heuristics::EliminationHeuristic;
use crate::statistics::Statistics;

pub struct Eliminator<const S: bool> {
    /// Network on which the variables are eliminated
    network: ProbNet,
    /// Edits applied on the network
    log: EditLog,
    /// Heuristic proposing the variables to eliminate
    heuristic: Box<dyn EliminationHeuristic>,
    /// Variables eliminated so far, in order
    order: Vec<VariableIndex>,
    statistics: Statistics<S>,
}

impl<const S: bool> Eliminator<S> {

    pub fn new(network: ProbNet, heuristic: Box<dyn EliminationHeuristic>) -> Self {
        Self {
            network,
            log: EditLog::new(),
            heuristic,
            order: vec![],
            statistics: Statistics::default(),
        }
    }

    /// Commits the edit on the network and notifies the heuristic
    fn commit(&mut self, edit: Edit) -> Result<(), Error> {
        let committed = self.log.do_edit(&mut self.network, edit)?;
        self.heuristic.variable_eliminated(&committed);
        Ok(())
    }

    /// Eliminates the variable proposed by the heuristic. Returns the eliminated variable, or None
    /// if the heuristic has nothing left to propose.
    pub fn step(&mut self) -> Result<Option<VariableIndex>, Error> {
        self.statistics.proposition();
        let variable = match self.heuristic.variable_to_delete(&self.network) {
            Some(v) => v,
            None => return Ok(None),
        };
        let node = self.network.node(variable)?;
        let neighbors = self.network.graph().neighbors(node).iter().filter_map(|n| self.network.variable_of(*n)).collect::<Vec<VariableIndex>>();
        self.statistics.elimination(neighbors.len() + 1);
        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                let (a, b) = (self.network.node(neighbors[i])?, self.network.node(neighbors[j])?);
                if !self.network.graph().are_adjacent(a, b) {
                    self.commit(Edit::AddLink { from: neighbors[i], to: neighbors[j], directed: false })?;
                    self.statistics.fill_in();
                }
            }
        }
        self.commit(Edit::RemoveNode { variable })?;
        debug!(variable = %self.network[variable], remaining = self.heuristic.number_phases(), "variable eliminated");
        self.order.push(variable);
        Ok(Some(variable))
    }

    /// Eliminates variables until the heuristic has nothing left to propose and returns the
    /// elimination order
    pub fn run(&mut self) -> Result<Vec<VariableIndex>, Error> {
        while self.step()?.is_some() {}
        self.statistics.print();
        Ok(self.order.clone())
    }

    pub fn network(&self) -> &ProbNet {
        &self.network
    }

    pub fn log(&self) -> &EditLog {
        &self.log
    }

    pub fn heuristic(&self) -> &dyn EliminationHeuristic {
        self.heuristic.as_ref()
    }

    pub fn order(&self) -> &[VariableIndex] {
        &self.order
    }

    pub fn statistics(&self) -> &Statistics<S> {
        &self.statistics
    }

    /// Consumes the eliminator and returns the network with the log of the edits applied on it.
    /// Undoing these edits is not reported to the heuristic.
    pub fn into_parts(self) -> (ProbNet, EditLog) {
        (self.network, self.log)
    }
}

/// Eliminator with or without the collection of statistics, chosen at runtime
pub enum GenericEliminator {
    Stats(Eliminator<true>),
    NoStats(Eliminator<false>),
}

pub fn generic_eliminator(network: ProbNet, heuristic: Box<dyn EliminationHeuristic>, stat: bool) -> GenericEliminator {
    if stat {
        GenericEliminator::Stats(Eliminator::<true>::new(network, heuristic))
    } else {
        GenericEliminator::NoStats(Eliminator::<false>::new(network, heuristic))
    }
}

impl GenericEliminator {

    pub fn run(&mut self) -> Result<Vec<VariableIndex>, Error> {
        match self {
            GenericEliminator::Stats(eliminator) => eliminator.run(),
            GenericEliminator::NoStats(eliminator) => eliminator.run(),
        }
    }
}
