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

//! Heuristic H6 of Cano and Moral ("Heuristic algorithms for the triangulation of graphs", 1995).
//!
//! For a node i, let S(i) be the size of the clique created by eliminating i, that is the product of
//! the number of states of i and of its neighbors, and C(i) the sum of the sizes of the maximal
//! cliques of the subgraph induced by i and its neighbors. The heuristic eliminates the node that
//! minimizes H6(i) = S(i) / C(i). When the neighborhood of i is already complete, its elimination
//! adds no link and H6(i) = 1.
//!
//! The heuristic works on its own moralized copy of the network.

use tracing::{error, trace};

use crate::core::edit::Edit;
use crate::core::graph::{Graph, NodeIndex};
use crate::core::markov::markov_network;
use crate::core::network::ProbNet;
use crate::core::variable::VariableIndex;
use crate::error::Error;
use crate::heuristics::{maximal_cliques, EliminationHeuristic, EliminationPhases};
use crate::triangulation::triangulate;

#[derive(Debug, Clone)]
pub struct CanoMoralElimination {
    phases: EliminationPhases,
    /// Moralized copy of the network, with the eliminations applied
    markov_net: ProbNet,
    /// Nodes still to eliminate, all phases included
    nodes_to_eliminate: Vec<NodeIndex>,
}

impl CanoMoralElimination {

    pub fn new(network: &ProbNet, phases: Vec<Vec<VariableIndex>>) -> Result<Self, Error> {
        let phases = EliminationPhases::new(network, phases)?;
        let markov_net = markov_network(network);
        let nodes_to_eliminate = phases.nodes_iter().collect::<Vec<NodeIndex>>();
        Ok(Self {
            phases,
            markov_net,
            nodes_to_eliminate,
        })
    }

    /// Returns S(i), the size of the clique created by the elimination of the node
    pub fn created_clique_size(&self, node: NodeIndex) -> f64 {
        let graph = self.markov_net.graph();
        graph.neighbors(node).iter().fold(self.markov_net.number_states(node) as f64, |size, n| size * self.markov_net.number_states(*n) as f64)
    }

    /// Returns C(i), the sum of the sizes of the maximal cliques around the node
    pub fn sum_cliques_sizes(&self, node: NodeIndex) -> f64 {
        maximal_cliques(self.markov_net.graph(), node).iter()
            .map(|clique| clique.iter().map(|n| self.markov_net.number_states(*n) as f64).product::<f64>())
            .sum()
    }

    pub fn h6(&self, node: NodeIndex) -> f64 {
        self.created_clique_size(node) / self.sum_cliques_sizes(node)
    }

    pub fn markov_net(&self) -> &ProbNet {
        &self.markov_net
    }

    pub fn nodes_to_eliminate(&self) -> &[NodeIndex] {
        &self.nodes_to_eliminate
    }

    /// Returns the whole elimination order proposed by the heuristic. The order is computed on a
    /// copy of the heuristic, which is left untouched.
    pub fn deletion_sequence(&self) -> Vec<VariableIndex> {
        let mut simulation = self.clone();
        let mut sequence = vec![];
        while let Some(variable) = simulation.variable_to_delete(&self.markov_net) {
            simulation.variable_eliminated(&Edit::RemoveNode { variable });
            sequence.push(variable);
        }
        sequence
    }

    /// Returns the moral graph triangulated with the deletion sequence of the heuristic
    pub fn triangulated_graph(&self) -> Result<Graph, Error> {
        let order = self.deletion_sequence().iter().map(|v| self.markov_net.node(*v)).collect::<Result<Vec<NodeIndex>, Error>>()?;
        triangulate(self.markov_net.graph(), &order)
    }

    /// Makes the neighbors of the node pairwise adjacent in the moral network
    fn marry_neighbors(&mut self, node: NodeIndex) {
        let neighbors = self.markov_net.graph().neighbors(node);
        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                if self.markov_net.graph().are_adjacent(neighbors[i], neighbors[j]) {
                    continue;
                }
                if let Err(e) = self.markov_net.graph_mut().add_link(neighbors[i], neighbors[j], false) {
                    error!(error = %e, "could not link the neighbors of an eliminated node");
                }
            }
        }
    }
}

impl EliminationHeuristic for CanoMoralElimination {

    fn variable_to_delete(&self, _network: &ProbNet) -> Option<VariableIndex> {
        let mut best_variable: Option<VariableIndex> = None;
        let mut best_score = f64::INFINITY;
        for (variable, node) in self.phases.last_phase_iter() {
            if self.markov_net.graph().contains(node) {
                let mut score = self.h6(node);
                if score.is_nan() {
                    // Domains without states give 0 / 0, such nodes are proposed last
                    trace!(?variable, "undefined ratio, ranked last");
                    score = f64::MAX;
                }
                if score < best_score {
                    best_score = score;
                    best_variable = Some(variable);
                }
            }
        }
        self.phases.propose(best_variable)
    }

    fn variable_eliminated(&mut self, edit: &Edit) {
        if let Some(variable) = edit.uses_variable() {
            match self.markov_net.node(variable) {
                Ok(node) => {
                    self.marry_neighbors(node);
                    if let Err(e) = self.markov_net.remove_node(variable) {
                        error!(error = %e, "could not remove an eliminated node from the moral network");
                    }
                    self.nodes_to_eliminate.retain(|n| *n != node);
                },
                Err(_) => trace!(?variable, "variable not in the moral network, ignored"),
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

#[cfg(test)]
mod test_cano_moral {

    use assert_float_eq::*;
    use crate::core::edit::Edit;
    use crate::core::graph::NodeIndex;
    use crate::core::network::ProbNet;
    use crate::core::variable::{Variable, VariableIndex};
    use crate::heuristics::{CanoMoralElimination, EliminationHeuristic};

    fn network(states: &[usize], links: &[(usize, usize, bool)]) -> (ProbNet, Vec<VariableIndex>) {
        let mut net = ProbNet::new();
        let v = states.iter().enumerate().map(|(i, s)| net.add_variable(Variable::chance(&format!("V{}", i), *s))).collect::<Vec<VariableIndex>>();
        for (from, to, directed) in links.iter().copied() {
            net.add_link(v[from], v[to], directed).unwrap();
        }
        (net, v)
    }

    #[test]
    pub fn triangle_has_ratio_one() {
        let (net, v) = network(&[2, 3, 4], &[(0, 1, false), (1, 2, false), (0, 2, false)]);
        let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
        for i in 0..3 {
            assert_float_relative_eq!(24.0, heuristic.created_clique_size(NodeIndex(i)), 0.0001);
            assert_float_relative_eq!(24.0, heuristic.sum_cliques_sizes(NodeIndex(i)), 0.0001);
            assert_float_relative_eq!(1.0, heuristic.h6(NodeIndex(i)), 0.0001);
        }
        assert_eq!(Some(v[0]), heuristic.variable_to_delete(&net));
    }

    #[test]
    pub fn star_center_and_leaves() {
        let (net, v) = network(&[2, 2, 2, 2], &[(0, 1, false), (0, 2, false), (0, 3, false)]);
        let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
        assert_float_relative_eq!(16.0, heuristic.created_clique_size(NodeIndex(0)), 0.0001);
        assert_float_relative_eq!(12.0, heuristic.sum_cliques_sizes(NodeIndex(0)), 0.0001);
        assert_float_relative_eq!(1.0, heuristic.h6(NodeIndex(1)), 0.0001);
        assert_eq!(Some(v[1]), heuristic.variable_to_delete(&net));
    }

    #[test]
    pub fn cliques_sharing_a_pair_with_two_others() {
        // Around 0: {0, 1, 2}, {0, 1, 4} and {0, 2, 3}
        let (net, v) = network(&[2, 2, 2, 2, 2], &[(0, 1, false), (0, 2, false), (0, 3, false), (0, 4, false), (1, 2, false), (1, 4, false), (2, 3, false)]);
        let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
        assert_float_relative_eq!(32.0, heuristic.created_clique_size(NodeIndex(0)), 0.0001);
        assert_float_relative_eq!(24.0, heuristic.sum_cliques_sizes(NodeIndex(0)), 0.0001);
        assert_float_relative_eq!(4.0 / 3.0, heuristic.h6(NodeIndex(0)), 0.0001);
    }

    #[test]
    pub fn empty_domains_are_still_eliminated() {
        let (net, v) = network(&[0, 2, 3], &[(0, 1, false), (1, 2, false)]);
        let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
        assert!(heuristic.h6(NodeIndex(0)).is_nan());
        assert_float_relative_eq!(0.0, heuristic.h6(NodeIndex(1)), 0.0001);
        assert_eq!(Some(v[1]), heuristic.variable_to_delete(&net));
        // After the first elimination, 0 and 2 both have an undefined ratio
        let sequence = heuristic.deletion_sequence();
        assert_eq!(vec![v[1], v[0], v[2]], sequence);
    }

    #[test]
    pub fn isolated_node() {
        let (net, v) = network(&[5], &[]);
        let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
        assert_float_relative_eq!(5.0, heuristic.created_clique_size(NodeIndex(0)), 0.0001);
        assert_float_relative_eq!(1.0, heuristic.h6(NodeIndex(0)), 0.0001);
    }

    #[test]
    pub fn works_on_the_moral_graph() {
        // V-structure 0 -> 2 <- 1: the parents are married
        let (net, v) = network(&[2, 2, 2], &[(0, 2, true), (1, 2, true)]);
        let heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
        assert!(heuristic.markov_net().graph().has_link(NodeIndex(0), NodeIndex(1), false));
        assert_float_relative_eq!(1.0, heuristic.h6(NodeIndex(2)), 0.0001);
        assert!(!net.graph().are_adjacent(NodeIndex(0), NodeIndex(1)));
    }

    #[test]
    pub fn elimination_updates_the_moral_network() {
        // Cycle 0 - 1 - 2 - 3 - 0
        let (net, v) = network(&[2, 2, 2, 2], &[(0, 1, false), (1, 2, false), (2, 3, false), (3, 0, false)]);
        let mut heuristic = CanoMoralElimination::new(&net, vec![v.clone()]).unwrap();
        assert_eq!(4, heuristic.nodes_to_eliminate().len());
        heuristic.variable_eliminated(&Edit::RemoveNode { variable: v[0] });
        assert!(!heuristic.markov_net().contains(v[0]));
        assert!(heuristic.markov_net().graph().has_link(NodeIndex(1), NodeIndex(3), false));
        assert_eq!(vec![NodeIndex(1), NodeIndex(2), NodeIndex(3)], heuristic.nodes_to_eliminate().to_vec());
        // Notifying twice is harmless
        heuristic.variable_eliminated(&Edit::RemoveNode { variable: v[0] });
        assert_eq!(3, heuristic.markov_net().graph().number_nodes());
    }

    #[test]
    pub fn deletion_sequence_leaves_the_heuristic_untouched() {
        let (net, v) = network(&[2, 3, 2, 4], &[(0, 1, false), (1, 2, false), (2, 3, false), (3, 0, false)]);
        let heuristic = CanoMoralElimination::new(&net, vec![vec![v[0]], vec![v[1], v[2], v[3]]]).unwrap();
        let sequence = heuristic.deletion_sequence();
        assert_eq!(4, sequence.len());
        assert_eq!(v[0], sequence[3]);
        assert_eq!(sequence, heuristic.deletion_sequence());
        assert_eq!(4, heuristic.markov_net().graph().number_nodes());
        assert_eq!(2, heuristic.number_phases());
        let triangulated = heuristic.triangulated_graph().unwrap();
        assert_eq!(5, triangulated.number_links());
    }
}
