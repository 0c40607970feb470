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

use crate::core::graph::NodeIndex;

/// This enumeration groups the errors that can be raised while building a network, editing it
/// or setting up an elimination heuristic.
/// Only the construction of the heuristics (and misuse of the graph API) can fail: once a
/// heuristic is running, notification problems are absorbed and logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A variable could not be resolved to a node of the network
    #[error("node not found for variable {0}")]
    NodeNotFound(String),
    /// The node handle does not reference a node of the graph (never created or removed)
    #[error("node {0:?} is not in the graph")]
    MissingNode(NodeIndex),
    /// A link (of any kind) already connects the two nodes
    #[error("a link already exists between {0:?} and {1:?}")]
    LinkExists(NodeIndex, NodeIndex),
    /// The requested link does not exist
    #[error("no such link between {0:?} and {1:?}")]
    MissingLink(NodeIndex, NodeIndex),
    /// Links from a node to itself are not allowed
    #[error("self loop on node {0:?}")]
    SelfLoop(NodeIndex),
    /// A node can only be restored in a free slot of the arena
    #[error("slot {0:?} already holds a node")]
    OccupiedSlot(NodeIndex),
    /// Inverting the link would create a directed cycle
    #[error("inverting the link {0:?} -> {1:?} creates a cycle")]
    Cycle(NodeIndex, NodeIndex),
    /// Two decisions of an influence diagram are not connected by a directed path
    #[error("decisions {0} and {1} are not ordered by a directed path")]
    UnorderedDecisions(String, String),
    /// No factory registered under that name
    #[error("no elimination heuristic registered under the name {0}")]
    UnknownHeuristic(String),
}
