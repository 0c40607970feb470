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

//! Registry of the elimination heuristics, by name. Each entry is a factory building the heuristic
//! from a network and its elimination phases. The built-in heuristics are registered by `Default`;
//! other heuristics can be added with `register`.

use rustc_hash::FxHashMap;

use crate::common::Heuristic;
use crate::core::network::ProbNet;
use crate::core::variable::VariableIndex;
use crate::error::Error;
use crate::heuristics::*;

pub type HeuristicFactory = fn(&ProbNet, Vec<Vec<VariableIndex>>) -> Result<Box<dyn EliminationHeuristic>, Error>;

pub struct HeuristicRegistry {
    factories: FxHashMap<String, HeuristicFactory>,
}

fn simple(network: &ProbNet, phases: Vec<Vec<VariableIndex>>) -> Result<Box<dyn EliminationHeuristic>, Error> {
    Ok(Box::new(SimpleElimination::new(network, phases)?))
}

fn minimal_fill_in(network: &ProbNet, phases: Vec<Vec<VariableIndex>>) -> Result<Box<dyn EliminationHeuristic>, Error> {
    Ok(Box::new(MinimalFillIn::new(network, phases)?))
}

fn cano_moral(network: &ProbNet, phases: Vec<Vec<VariableIndex>>) -> Result<Box<dyn EliminationHeuristic>, Error> {
    Ok(Box::new(CanoMoralElimination::new(network, phases)?))
}

impl Default for HeuristicRegistry {
    fn default() -> Self {
        let mut registry = Self { factories: FxHashMap::default() };
        registry.register(Heuristic::Simple.name(), simple);
        registry.register(Heuristic::MinimalFillIn.name(), minimal_fill_in);
        registry.register(Heuristic::CanoMoral.name(), cano_moral);
        registry
    }
}

impl HeuristicRegistry {

    /// Registers a factory under the given name. A factory already registered under that name is
    /// replaced.
    pub fn register(&mut self, name: &str, factory: HeuristicFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    /// Creates the heuristic registered under the given name
    pub fn create(&self, name: &str, network: &ProbNet, phases: Vec<Vec<VariableIndex>>) -> Result<Box<dyn EliminationHeuristic>, Error> {
        match self.factories.get(name) {
            Some(factory) => factory(network, phases),
            None => Err(Error::UnknownHeuristic(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns the registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.factories.keys().map(|n| n.as_str()).collect::<Vec<&str>>();
        names.sort();
        names
    }
}
