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

use std::fmt;

/// Implements a bunch of statistics that are collected during the elimination
#[derive(Default, Debug, Clone)]
pub struct Statistics<const B: bool> {
    number_propositions: usize,
    number_eliminations: usize,
    number_fill_in: usize,
    largest_clique: usize,
    total_clique_size: usize,
}

impl<const B: bool> Statistics<B> {
    pub fn proposition(&mut self) {
        if B {
            self.number_propositions += 1;
        }
    }

    /// Records the elimination of a variable whose neighborhood, the variable included, has
    /// `clique_size` nodes
    pub fn elimination(&mut self, clique_size: usize) {
        if B {
            self.number_eliminations += 1;
            self.total_clique_size += clique_size;
            self.largest_clique = self.largest_clique.max(clique_size);
        }
    }

    pub fn fill_in(&mut self) {
        if B {
            self.number_fill_in += 1;
        }
    }

    pub fn number_propositions(&self) -> usize {
        self.number_propositions
    }

    pub fn number_eliminations(&self) -> usize {
        self.number_eliminations
    }

    pub fn number_fill_in(&self) -> usize {
        self.number_fill_in
    }

    pub fn largest_clique(&self) -> usize {
        self.largest_clique
    }

    pub fn print(&self) {
        if B {
            println!("{}", self);
        }
    }
}

impl<const B: bool> fmt::Display for Statistics<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if B {
            let avg_clique = if self.number_eliminations > 0 {
                self.total_clique_size as f64 / self.number_eliminations as f64
            } else {
                0.0
            };
            writeln!(f,
                "propositions {} | eliminations {} | fill-in links {} | largest clique {} | avg clique {:.3}",
                self.number_propositions,
                self.number_eliminations,
                self.number_fill_in,
                self.largest_clique,
                avg_clique)
        } else {
            write!(f, "")
        }
    }
}

#[cfg(test)]
mod test_statistics {

    use crate::statistics::Statistics;

    #[test]
    pub fn disabled_statistics_stay_empty() {
        let mut stats = Statistics::<false>::default();
        stats.proposition();
        stats.elimination(3);
        stats.fill_in();
        assert_eq!(0, stats.number_eliminations());
        assert_eq!(0, stats.largest_clique());
        assert_eq!("", format!("{}", stats));
    }

    #[test]
    pub fn enabled_statistics() {
        let mut stats = Statistics::<true>::default();
        stats.proposition();
        stats.elimination(3);
        stats.elimination(1);
        stats.fill_in();
        assert_eq!(1, stats.number_propositions());
        assert_eq!(2, stats.number_eliminations());
        assert_eq!(1, stats.number_fill_in());
        assert_eq!(3, stats.largest_clique());
        assert!(format!("{}", stats).contains("avg clique 2.000"));
    }
}
