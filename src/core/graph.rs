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

//! This module implements a graph using vector indexes. This implementation is inspired by [this
//! blog post](https://smallcultfollowing.com/babysteps/blog/2015/04/06/modeling-graphs-in-rust-using-vector-indices/)
//! and [this
//! code](https://github.com/xgillard/ddo/blob/master/src/implementation/mdd/deep/mddgraph.rs).
//!
//! A node is identified uniquely by its index in the `nodes` vector, wrapped in a `NodeIndex`.
//! Each node stores the variable it represents and three adjacency lists: its parents and children
//! (directed links) and its siblings (undirected links). A link is stored in the lists of both its
//! endpoints.
//!
//! Contrary to the graphs of a solver, nodes are removed from this graph when variables are
//! eliminated. A removed node leaves an empty slot in the vector, so that the indexes of the other
//! nodes stay valid. Copying the graph (with `clone`) preserves the indexes; this is how the
//! heuristics keep private copies of a network that can be addressed with the same handles.
//!
//! # Note:
//! There is at most one link between two nodes, whatever its kind, and no self loop.

use rustc_hash::FxHashSet;

use crate::core::variable::VariableIndex;
use crate::error::Error;

/// Abstraction used as a typesafe way of retrieving a `NodeData` in the `Graph` structure
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeIndex(pub usize);

/// A link between two nodes. For undirected links the order of the endpoints is irrelevant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Link {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub directed: bool,
}

impl Link {

    pub fn directed(from: NodeIndex, to: NodeIndex) -> Self {
        Self { from, to, directed: true }
    }

    pub fn undirected(from: NodeIndex, to: NodeIndex) -> Self {
        Self { from, to, directed: false }
    }
}

/// Data structure that actually holds the data of a node in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// The variable represented by the node
    variable: VariableIndex,
    /// Sources of the directed links pointing to the node
    parents: Vec<NodeIndex>,
    /// Targets of the directed links leaving the node
    children: Vec<NodeIndex>,
    /// Nodes connected by an undirected link
    siblings: Vec<NodeIndex>,
}

impl NodeData {

    fn new(variable: VariableIndex) -> Self {
        Self {
            variable,
            parents: vec![],
            children: vec![],
            siblings: vec![],
        }
    }
}

/// Data structure representing the Graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Vector containing the nodes of the graph. Removed nodes leave a `None`
    nodes: Vec<Option<NodeData>>,
    /// Number of nodes currently in the graph
    number_nodes: usize,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    // --- GRAPH CREATION --- //

    /// Adds a node representing the given variable and returns its index
    pub fn add_node(&mut self, variable: VariableIndex) -> NodeIndex {
        let node = NodeIndex(self.nodes.len());
        self.nodes.push(Some(NodeData::new(variable)));
        self.number_nodes += 1;
        node
    }

    /// Inserts a node at the given index. The slot must be free (never used or emptied by a
    /// removal). Used to restore a removed node with the same handle.
    pub fn insert_node_at(&mut self, node: NodeIndex, variable: VariableIndex) -> Result<(), Error> {
        if node.0 >= self.nodes.len() {
            self.nodes.resize(node.0 + 1, None);
        }
        if self.nodes[node.0].is_some() {
            return Err(Error::OccupiedSlot(node));
        }
        self.nodes[node.0] = Some(NodeData::new(variable));
        self.number_nodes += 1;
        Ok(())
    }

    /// Removes the node and all its links from the graph. The removed links are returned, so that
    /// the removal can be reverted.
    pub fn remove_node(&mut self, node: NodeIndex) -> Result<Vec<Link>, Error> {
        let links = self.incident_links(node)?;
        for link in links.iter().copied() {
            self.detach(link);
        }
        self.nodes[node.0] = None;
        self.number_nodes -= 1;
        Ok(links)
    }

    /// Adds a link between the two nodes. Fails if one of the node is not in the graph, if
    /// `from == to` or if the nodes are already adjacent.
    pub fn add_link(&mut self, from: NodeIndex, to: NodeIndex, directed: bool) -> Result<(), Error> {
        if from == to {
            return Err(Error::SelfLoop(from));
        }
        self.data(from)?;
        self.data(to)?;
        if self.are_adjacent(from, to) {
            return Err(Error::LinkExists(from, to));
        }
        self.attach(Link { from, to, directed });
        Ok(())
    }

    /// Removes the link between the two nodes
    pub fn remove_link(&mut self, from: NodeIndex, to: NodeIndex, directed: bool) -> Result<(), Error> {
        if !self.has_link(from, to, directed) {
            return Err(Error::MissingLink(from, to));
        }
        self.detach(Link { from, to, directed });
        Ok(())
    }

    fn attach(&mut self, link: Link) {
        if link.directed {
            if let Some(data) = self.nodes[link.from.0].as_mut() {
                data.children.push(link.to);
            }
            if let Some(data) = self.nodes[link.to.0].as_mut() {
                data.parents.push(link.from);
            }
        } else {
            if let Some(data) = self.nodes[link.from.0].as_mut() {
                data.siblings.push(link.to);
            }
            if let Some(data) = self.nodes[link.to.0].as_mut() {
                data.siblings.push(link.from);
            }
        }
    }

    fn detach(&mut self, link: Link) {
        if link.directed {
            if let Some(data) = self.nodes[link.from.0].as_mut() {
                data.children.retain(|n| *n != link.to);
            }
            if let Some(data) = self.nodes[link.to.0].as_mut() {
                data.parents.retain(|n| *n != link.from);
            }
        } else {
            if let Some(data) = self.nodes[link.from.0].as_mut() {
                data.siblings.retain(|n| *n != link.to);
            }
            if let Some(data) = self.nodes[link.to.0].as_mut() {
                data.siblings.retain(|n| *n != link.from);
            }
        }
    }

    /// Returns an undirected copy of the graph: every link becomes a sibling link. Node indexes are
    /// preserved.
    pub fn to_undirected(&self) -> Graph {
        let mut graph = self.clone();
        for data in graph.nodes.iter_mut().flatten() {
            let mut parents = std::mem::take(&mut data.parents);
            let mut children = std::mem::take(&mut data.children);
            data.siblings.append(&mut parents);
            data.siblings.append(&mut children);
        }
        graph
    }

    // --- ELIMINATION --- //

    /// Returns the number of undirected links that must be added between the neighbors of `node`
    /// to turn them into a clique.
    pub fn fill_in(&self, node: NodeIndex) -> usize {
        let neighbors = self.neighbors(node);
        let mut fill_in = 0;
        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                if !self.are_adjacent(neighbors[i], neighbors[j]) {
                    fill_in += 1;
                }
            }
        }
        fill_in
    }

    /// Eliminates the node: its neighbors are made pairwise adjacent (with undirected links) and
    /// then the node is removed. Returns the number of links added.
    pub fn eliminate(&mut self, node: NodeIndex) -> Result<usize, Error> {
        self.data(node)?;
        let neighbors = self.neighbors(node);
        let mut added = 0;
        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                if !self.are_adjacent(neighbors[i], neighbors[j]) {
                    self.attach(Link::undirected(neighbors[i], neighbors[j]));
                    added += 1;
                }
            }
        }
        self.remove_node(node)?;
        Ok(added)
    }

    // --- QUERIES --- //

    fn data(&self, node: NodeIndex) -> Result<&NodeData, Error> {
        self.nodes.get(node.0).and_then(|n| n.as_ref()).ok_or(Error::MissingNode(node))
    }

    /// Returns true iff the node is in the graph
    pub fn contains(&self, node: NodeIndex) -> bool {
        matches!(self.nodes.get(node.0), Some(Some(_)))
    }

    /// Returns the variable represented by the node, if the node is in the graph
    pub fn variable(&self, node: NodeIndex) -> Option<VariableIndex> {
        self.data(node).ok().map(|d| d.variable)
    }

    /// Returns true iff there is a link `from -> to` (or `from - to` if not directed)
    pub fn has_link(&self, from: NodeIndex, to: NodeIndex, directed: bool) -> bool {
        match self.data(from) {
            Ok(data) => if directed { data.children.contains(&to) } else { data.siblings.contains(&to) },
            Err(_) => false,
        }
    }

    /// Returns true iff the two nodes are connected by a link of any kind
    pub fn are_adjacent(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.has_link(a, b, true) || self.has_link(b, a, true) || self.has_link(a, b, false)
    }

    /// Returns true iff the nodes are pairwise adjacent
    pub fn is_clique(&self, nodes: &[NodeIndex]) -> bool {
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if !self.are_adjacent(nodes[i], nodes[j]) {
                    return false;
                }
            }
        }
        true
    }

    pub fn parents(&self, node: NodeIndex) -> &[NodeIndex] {
        self.data(node).map(|d| d.parents.as_slice()).unwrap_or(&[])
    }

    pub fn children(&self, node: NodeIndex) -> &[NodeIndex] {
        self.data(node).map(|d| d.children.as_slice()).unwrap_or(&[])
    }

    pub fn siblings(&self, node: NodeIndex) -> &[NodeIndex] {
        self.data(node).map(|d| d.siblings.as_slice()).unwrap_or(&[])
    }

    /// Returns all the nodes adjacent to `node`: parents, then children, then siblings
    pub fn neighbors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        match self.data(node) {
            Ok(data) => data.parents.iter().chain(data.children.iter()).chain(data.siblings.iter()).copied().collect(),
            Err(_) => vec![],
        }
    }

    pub fn number_siblings(&self, node: NodeIndex) -> usize {
        self.siblings(node).len()
    }

    pub fn number_neighbors(&self, node: NodeIndex) -> usize {
        self.parents(node).len() + self.children(node).len() + self.siblings(node).len()
    }

    /// Returns the number of nodes in the graph
    pub fn number_nodes(&self) -> usize {
        self.number_nodes
    }

    /// Returns the number of links in the graph
    pub fn number_links(&self) -> usize {
        self.nodes.iter().flatten().map(|d| d.children.len() * 2 + d.siblings.len()).sum::<usize>() / 2
    }

    /// Returns every link of the graph exactly once
    pub fn links(&self) -> Vec<Link> {
        let mut links = vec![];
        for node in self.nodes_iter() {
            for child in self.children(node).iter().copied() {
                links.push(Link::directed(node, child));
            }
            for sibling in self.siblings(node).iter().copied().filter(|s| *s > node) {
                links.push(Link::undirected(node, sibling));
            }
        }
        links
    }

    fn incident_links(&self, node: NodeIndex) -> Result<Vec<Link>, Error> {
        let data = self.data(node)?;
        let mut links = Vec::with_capacity(data.parents.len() + data.children.len() + data.siblings.len());
        links.extend(data.parents.iter().map(|p| Link::directed(*p, node)));
        links.extend(data.children.iter().map(|c| Link::directed(node, *c)));
        links.extend(data.siblings.iter().map(|s| Link::undirected(node, *s)));
        Ok(links)
    }

    /// Returns true iff there is a path of directed links from `from` to `to`
    pub fn has_directed_path(&self, from: NodeIndex, to: NodeIndex) -> bool {
        let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut stack = vec![from];
        while let Some(node) = stack.pop() {
            if node == to {
                return true;
            }
            if visited.insert(node) {
                stack.extend(self.children(node).iter().copied().filter(|c| !visited.contains(c)));
            }
        }
        false
    }

    // --- ITERATOR --- //

    /// Returns an iterator on the nodes currently in the graph, in increasing index order
    pub fn nodes_iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().enumerate().filter(|(_, n)| n.is_some()).map(|(i, _)| NodeIndex(i))
    }
}
