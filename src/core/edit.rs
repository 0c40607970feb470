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

//! Structural edits of a probabilistic network and the undo/redo log through which they are
//! applied.
//!
//! The log does not know who is interested in the edits. `EditLog::do_edit` returns the committed
//! edit and its owner is responsible for forwarding it (synchronously) to the elimination heuristic
//! that must react to it.

use tracing::{debug, warn};

use super::graph::Link;
use super::network::ProbNet;
use super::variable::VariableIndex;
use crate::error::Error;

/// An edit of the structure of a network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    AddLink { from: VariableIndex, to: VariableIndex, directed: bool },
    RemoveLink { from: VariableIndex, to: VariableIndex, directed: bool },
    /// Replaces the directed link `from -> to` by `to -> from`
    InvertLink { from: VariableIndex, to: VariableIndex },
    /// Removes the node of the variable with all its links. This is the edit committed when a
    /// variable is eliminated.
    RemoveNode { variable: VariableIndex },
}

impl Edit {

    /// Returns the variable used by the edit, if the edit has that capability. Only the removal of
    /// a node uses a variable; the heuristics interpret it as the elimination of that variable.
    pub fn uses_variable(&self) -> Option<VariableIndex> {
        match self {
            Edit::RemoveNode { variable } => Some(*variable),
            _ => None,
        }
    }
}

/// An edit that has been applied, with what is needed to revert it
#[derive(Debug, Clone)]
struct CommittedEdit {
    edit: Edit,
    /// Links removed with a node, empty for the other edits
    removed_links: Vec<Link>,
}

/// Undo/redo log of the edits applied to a network
#[derive(Debug, Default)]
pub struct EditLog {
    done: Vec<CommittedEdit>,
    undone: Vec<Edit>,
}

impl EditLog {

    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the edit on the network and records it. The redo stack is cleared. On failure the
    /// network is left unchanged and nothing is recorded.
    pub fn do_edit(&mut self, network: &mut ProbNet, edit: Edit) -> Result<Edit, Error> {
        let removed_links = match apply(network, edit) {
            Ok(links) => links,
            Err(e) => {
                warn!(?edit, error = %e, "edit rejected");
                return Err(e);
            },
        };
        debug!(?edit, "edit committed");
        self.done.push(CommittedEdit { edit, removed_links });
        self.undone.clear();
        Ok(edit)
    }

    /// Reverts the last edit. Returns the reverted edit, or None if there is nothing to undo.
    pub fn undo(&mut self, network: &mut ProbNet) -> Result<Option<Edit>, Error> {
        let committed = match self.done.pop() {
            Some(c) => c,
            None => return Ok(None),
        };
        if let Err(e) = revert(network, &committed) {
            self.done.push(committed);
            return Err(e);
        }
        debug!(edit = ?committed.edit, "edit undone");
        self.undone.push(committed.edit);
        Ok(Some(committed.edit))
    }

    /// Re-applies the last undone edit. Returns it, or None if there is nothing to redo.
    pub fn redo(&mut self, network: &mut ProbNet) -> Result<Option<Edit>, Error> {
        let edit = match self.undone.pop() {
            Some(e) => e,
            None => return Ok(None),
        };
        match apply(network, edit) {
            Ok(removed_links) => {
                debug!(?edit, "edit redone");
                self.done.push(CommittedEdit { edit, removed_links });
                Ok(Some(edit))
            },
            Err(e) => {
                self.undone.push(edit);
                Err(e)
            },
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Returns the number of edits that can be undone
    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    /// Iterates over the committed edits, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Edit> {
        self.done.iter().map(|c| &c.edit)
    }
}

fn apply(network: &mut ProbNet, edit: Edit) -> Result<Vec<Link>, Error> {
    match edit {
        Edit::AddLink { from, to, directed } => network.add_link(from, to, directed).map(|_| vec![]),
        Edit::RemoveLink { from, to, directed } => network.remove_link(from, to, directed).map(|_| vec![]),
        Edit::InvertLink { from, to } => {
            let source = network.node(from)?;
            let target = network.node(to)?;
            network.remove_link(from, to, true)?;
            // Once the link is removed, any remaining path from -> ... -> to closes a cycle with
            // the inverted link
            if network.graph().has_directed_path(source, target) {
                network.add_link(from, to, true)?;
                return Err(Error::Cycle(source, target));
            }
            network.add_link(to, from, true).map(|_| vec![])
        },
        Edit::RemoveNode { variable } => network.remove_node(variable),
    }
}

fn revert(network: &mut ProbNet, committed: &CommittedEdit) -> Result<(), Error> {
    match committed.edit {
        Edit::AddLink { from, to, directed } => network.remove_link(from, to, directed),
        Edit::RemoveLink { from, to, directed } => network.add_link(from, to, directed),
        Edit::InvertLink { from, to } => {
            network.remove_link(to, from, true)?;
            network.add_link(from, to, true)
        },
        Edit::RemoveNode { variable } => network.restore_node(variable, &committed.removed_links),
    }
}
