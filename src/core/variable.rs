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

//! An implementation of a variable of a probabilistic network. The heuristics only need the
//! identity of a variable (its `VariableIndex`) and its number of states, which is used to compute
//! the size of the cliques.

/// Abstraction used as a typesafe way of retrieving a `Variable` in the `ProbNet` structure
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VariableIndex(pub usize);

/// The role of a variable in the network. Bayesian networks only contain chance variables while
/// influence diagrams also have decisions and utilities.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VariableKind {
    Chance,
    Decision,
    Utility,
}

/// Data structure that actually holds the data of a variable of the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The name of the variable, unique in its network
    name: String,
    /// Number of states in the domain of the variable
    number_states: usize,
    /// Chance, decision or utility
    kind: VariableKind,
}

impl Variable {

    pub fn new(name: &str, number_states: usize, kind: VariableKind) -> Self {
        Self {
            name: name.to_string(),
            number_states,
            kind,
        }
    }

    /// Creates a new chance variable with the given number of states
    pub fn chance(name: &str, number_states: usize) -> Self {
        Self::new(name, number_states, VariableKind::Chance)
    }

    /// Creates a new decision variable with the given number of options
    pub fn decision(name: &str, number_states: usize) -> Self {
        Self::new(name, number_states, VariableKind::Decision)
    }

    /// Creates a new utility variable. Utilities do not have a discrete domain, hence they count as
    /// a single state in the clique sizes.
    pub fn utility(name: &str) -> Self {
        Self::new(name, 1, VariableKind::Utility)
    }

    /// Returns the name of the variable
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cardinality of the domain of the variable
    pub fn number_states(&self) -> usize {
        self.number_states
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn is_chance(&self) -> bool {
        self.kind == VariableKind::Chance
    }

    pub fn is_decision(&self) -> bool {
        self.kind == VariableKind::Decision
    }

    pub fn is_utility(&self) -> bool {
        self.kind == VariableKind::Utility
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
