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

use clap::Parser;

use crate::common::Heuristic;

#[derive(Parser, Debug, Clone)]
#[clap(name="Triangulum", version, author, about)]
pub struct Args {
    /// Elimination heuristic
    #[clap(long, value_enum, default_value_t=Heuristic::CanoMoral)]
    heuristic: Heuristic,
    /// Collect stats during the elimination
    #[clap(long, action)]
    statistics: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::CanoMoral,
            statistics: false,
        }
    }
}

impl Args {

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn statistics(&self) -> bool {
        self.statistics
    }

    pub fn set_heuristic(&mut self, value: Heuristic) {
        self.heuristic = value;
    }

    pub fn set_statistics(&mut self, value: bool) {
        self.statistics = value;
    }
}
