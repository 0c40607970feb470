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

//! A probabilistic network: a set of variables, each bound to a node of a graph. Directed links
//! come from Bayesian networks and influence diagrams, undirected links from Markov networks (and
//! from the moralization of the former).
//!
//! The node of variable `i` is created with index `i`. Since the graph never re-uses the slot of a
//! removed node (unless it is explicitly restored), a `VariableIndex` and its `NodeIndex` stay in
//! one-to-one correspondence for the lifetime of the network and of all its copies.

use rustc_hash::FxHashMap;

use super::graph::{Graph, Link, NodeIndex};
use super::variable::*;
use crate::error::Error;

/// Data structure representing a probabilistic network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbNet {
    /// Vector containing the variables of the network
    variables: Vec<Variable>,
    /// The graph of the network, one node per variable still present
    graph: Graph,
    /// Maps each variable to its node
    variable_nodes: FxHashMap<VariableIndex, NodeIndex>,
}

impl ProbNet {

    pub fn new() -> Self {
        Self::default()
    }

    // --- NETWORK CREATION --- //

    /// Adds a variable to the network, with its node, and returns its index
    pub fn add_variable(&mut self, variable: Variable) -> VariableIndex {
        let index = VariableIndex(self.variables.len());
        self.variables.push(variable);
        let node = self.graph.add_node(index);
        self.variable_nodes.insert(index, node);
        index
    }

    /// Adds a link between the nodes of the two variables
    pub fn add_link(&mut self, from: VariableIndex, to: VariableIndex, directed: bool) -> Result<(), Error> {
        let from = self.node(from)?;
        let to = self.node(to)?;
        self.graph.add_link(from, to, directed)
    }

    /// Removes the link between the nodes of the two variables
    pub fn remove_link(&mut self, from: VariableIndex, to: VariableIndex, directed: bool) -> Result<(), Error> {
        let from = self.node(from)?;
        let to = self.node(to)?;
        self.graph.remove_link(from, to, directed)
    }

    /// Removes the node of the variable (the variable itself stays known by the network). Returns
    /// the links that were removed with the node.
    pub fn remove_node(&mut self, variable: VariableIndex) -> Result<Vec<Link>, Error> {
        let node = self.node(variable)?;
        let links = self.graph.remove_node(node)?;
        self.variable_nodes.remove(&variable);
        Ok(links)
    }

    /// Restores the node of a variable with its links, reverting `remove_node`
    pub fn restore_node(&mut self, variable: VariableIndex, links: &[Link]) -> Result<(), Error> {
        if variable.0 >= self.variables.len() {
            return Err(Error::NodeNotFound(format!("#{}", variable.0)));
        }
        let node = NodeIndex(variable.0);
        self.graph.insert_node_at(node, variable)?;
        self.variable_nodes.insert(variable, node);
        for link in links.iter() {
            self.graph.add_link(link.from, link.to, link.directed)?;
        }
        Ok(())
    }

    pub(crate) fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    // --- QUERIES --- //

    /// Returns the node of the variable, or an error if the variable has no node in the network
    pub fn node(&self, variable: VariableIndex) -> Result<NodeIndex, Error> {
        match self.variable_nodes.get(&variable) {
            Some(node) => Ok(*node),
            None => Err(Error::NodeNotFound(self.describe(variable))),
        }
    }

    /// Returns the variable represented by the node, if the node is in the network
    pub fn variable_of(&self, node: NodeIndex) -> Option<VariableIndex> {
        self.graph.variable(node)
    }

    /// Returns the index of the variable with the given name
    pub fn find_variable(&self, name: &str) -> Option<VariableIndex> {
        self.variables.iter().position(|v| v.name() == name).map(VariableIndex)
    }

    /// Returns the number of states of the variable represented by the node. Nodes that are not in
    /// the network count as a single state.
    pub fn number_states(&self, node: NodeIndex) -> usize {
        match self.variable_of(node) {
            Some(variable) => self[variable].number_states(),
            None => 1,
        }
    }

    /// Returns the name of the variable, or its index if it is not part of the network
    pub fn describe(&self, variable: VariableIndex) -> String {
        match self.variables.get(variable.0) {
            Some(v) => v.name().to_string(),
            None => format!("#{}", variable.0),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the number of variables known by the network (including the ones whose node has
    /// been removed)
    pub fn number_variables(&self) -> usize {
        self.variables.len()
    }

    /// Returns true iff the variable still has a node in the network
    pub fn contains(&self, variable: VariableIndex) -> bool {
        self.variable_nodes.contains_key(&variable)
    }

    // --- ITERATOR --- //

    /// Returns an iterator on all the variables known by the network
    pub fn variables_iter(&self) -> impl Iterator<Item = VariableIndex> {
        (0..self.variables.len()).map(VariableIndex)
    }

    /// Returns an iterator on the variables whose node is still in the network, in index order
    pub fn present_variables_iter(&self) -> impl Iterator<Item = VariableIndex> + '_ {
        self.graph.nodes_iter().filter_map(|n| self.graph.variable(n))
    }

    /// Returns an iterator on the nodes of the network
    pub fn nodes_iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.nodes_iter()
    }
}

impl std::ops::Index<VariableIndex> for ProbNet {
    type Output = Variable;

    fn index(&self, index: VariableIndex) -> &Self::Output {
        &self.variables[index.0]
    }
}
