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

//! Fixed-size bit sets, used to represent sets of vertices of small local subgraphs (e.g., a node
//! and its neighbors) and the rows of their adjacency matrix.

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitvec {
    vec: Vec<u64>,
}

pub const WORD_SIZE: usize = 64;

impl Bitvec {

    pub fn new(number_element: usize) -> Self {
        let number_word = number_element.div_ceil(WORD_SIZE);
        Self {
            vec: vec![0_u64; number_word],
        }
    }

    #[inline(always)]
    pub fn set(&mut self, element: usize) {
        self.vec[element / WORD_SIZE] |= 1_u64 << (element % WORD_SIZE);
    }

    #[inline(always)]
    pub fn contains(&self, element: usize) -> bool {
        self.vec[element / WORD_SIZE] & (1_u64 << (element % WORD_SIZE)) != 0
    }

    /// Returns a copy of the set with `element` added
    pub fn with(&self, element: usize) -> Self {
        let mut copy = self.clone();
        copy.set(element);
        copy
    }

    /// Intersects the set with `other`, in place
    pub fn intersect(&mut self, other: &Bitvec) {
        for (w, o) in self.vec.iter_mut().zip(other.vec.iter()) {
            *w &= *o;
        }
    }

    /// Returns true iff every element of the set is in `other`
    pub fn is_subset(&self, other: &Bitvec) -> bool {
        self.vec.iter().zip(other.vec.iter()).all(|(w, o)| w & !o == 0)
    }

    pub fn is_empty(&self) -> bool {
        self.vec.iter().all(|w| *w == 0)
    }

    pub fn count(&self) -> usize {
        self.vec.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates over the elements of the set, in increasing order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.vec.iter().enumerate().flat_map(|(i, word)| {
            (0..WORD_SIZE).filter(move |b| word & (1_u64 << *b) != 0).map(move |b| i * WORD_SIZE + b)
        })
    }
}

#[cfg(test)]
mod test_bitvec {

    use crate::core::bitvec::*;

    #[test]
    pub fn set_and_iterate() {
        let mut b = Bitvec::new(130);
        assert!(b.is_empty());
        b.set(3);
        b.set(64);
        b.set(129);
        assert!(b.contains(64));
        assert!(!b.contains(65));
        assert_eq!(3, b.count());
        assert_eq!(vec![3, 64, 129], b.iter().collect::<Vec<usize>>());
    }

    #[test]
    pub fn subsets_and_intersection() {
        let small = Bitvec::new(70).with(1).with(68);
        let big = small.with(5);
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        let mut inter = big.clone();
        inter.intersect(&Bitvec::new(70).with(5).with(68));
        assert_eq!(vec![5, 68], inter.iter().collect::<Vec<usize>>());
        assert_ne!(small, big);
    }
}
