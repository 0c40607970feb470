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

use clap::ValueEnum;

/// The elimination heuristics shipped with the library
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Heuristic {
    /// Minimum number of siblings in the network being eliminated
    Simple,
    /// Minimum number of links added by the elimination
    MinimalFillIn,
    /// Minimum ratio between the size of the created clique and the sizes of the maximal cliques
    /// around the node (H6 of Cano and Moral)
    CanoMoral,
}

impl Heuristic {

    /// Returns the name under which the heuristic is registered
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Simple => "simple",
            Heuristic::MinimalFillIn => "minimal-fill-in",
            Heuristic::CanoMoral => "cano-moral",
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
