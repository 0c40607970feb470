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

// Re-export the modules
mod statistics;
pub mod common;
pub mod core;
pub mod error;
pub mod heuristics;
pub mod triangulation;
pub mod eliminator;
pub mod args;

pub use common::*;
pub use error::Error;
pub use crate::core::graph::{Graph, NodeIndex};
pub use crate::core::network::ProbNet;
pub use crate::core::variable::{Variable, VariableIndex, VariableKind};
pub use statistics::Statistics;

use args::Args;
use crate::core::markov::markov_network;
use crate::core::partial_order::elimination_phases;
use eliminator::generic_eliminator;
use heuristics::HeuristicRegistry;

/// Returns the order in which the variables of the network are eliminated by the heuristic
/// selected in the arguments, together with the moral network on which the order is defined.
fn moral_elimination_order(args: &Args, network: &ProbNet) -> Result<(ProbNet, Vec<VariableIndex>), Error> {
    let markov = markov_network(network);
    let phases = elimination_phases(network)?;
    let heuristic = HeuristicRegistry::default().create(args.heuristic().name(), &markov, phases)?;
    let mut eliminator = generic_eliminator(markov.clone(), heuristic, args.statistics());
    let order = eliminator.run()?;
    Ok((markov, order))
}

/// Returns the elimination order of the chance and decision variables of the network. For
/// influence diagrams, the order respects the partial order imposed by the decisions.
pub fn elimination_order(args: &Args, network: &ProbNet) -> Result<Vec<VariableIndex>, Error> {
    moral_elimination_order(args, network).map(|(_, order)| order)
}

/// Returns the moral graph of the network, triangulated along the elimination order
pub fn triangulated_graph(args: &Args, network: &ProbNet) -> Result<Graph, Error> {
    let (markov, order) = moral_elimination_order(args, network)?;
    let nodes = order.iter().map(|v| markov.node(*v)).collect::<Result<Vec<NodeIndex>, Error>>()?;
    triangulation::triangulate(markov.graph(), &nodes)
}
