/*
solution.rs

Copyright 2025 Hervé Quatremain

This file is part of Pegsolver.

Pegsolver is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pegsolver is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pegsolver. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Solutions found by the solver.
//!
//! The main object, [`SolutionStore`], keeps the solutions in two lists.
//! A solution is perfect when the last peg ends in one of the slots that were empty at the start
//! of the game. All the other solutions are ordinary.
//! See the [`crate::saver::report`] module that saves and restores the [`SolutionStore`] object.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::peg_move::PegMove;

/// Solution category.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Default,
)]
pub enum SolutionKind {
    #[default]
    Ordinary,
    Perfect,
}

impl fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolutionKind::Ordinary => write!(f, "ordinary"),
            SolutionKind::Perfect => write!(f, "perfect"),
        }
    }
}

/// Sequence of moves that leaves a single peg on the board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    /// Moves to play from the initial board, none of them done.
    pub moves: Vec<PegMove>,

    /// Slot of the remaining peg.
    pub last_peg: usize,
}

impl Solution {
    /// Create a [`Solution`] object from a copy of the provided moves.
    pub fn new(moves: &[PegMove], last_peg: usize) -> Self {
        Self {
            moves: moves.iter().map(PegMove::fresh).collect(),
            last_peg,
        }
    }

    /// Number of moves in the solution.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the solution has no move, when the board starts with a single peg.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Lists of the ordinary and perfect solutions.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SolutionStore {
    /// Solutions where the last peg does not end in a starting empty slot.
    ordinary: Vec<Solution>,

    /// Solutions where the last peg ends in a starting empty slot.
    perfect: Vec<Solution>,
}

impl SolutionStore {
    /// Create an empty [`SolutionStore`] object.
    pub fn new() -> Self {
        Self {
            ordinary: Vec::new(),
            perfect: Vec::new(),
        }
    }

    /// Remove all the solutions.
    pub fn clear(&mut self) {
        self.ordinary.clear();
        self.perfect.clear();
    }

    /// Record a solution and return its category and its position in the category list.
    ///
    /// The solution is perfect when `last_peg` is one of the `start_empty` slots.
    pub fn record(
        &mut self,
        moves: &[PegMove],
        last_peg: usize,
        start_empty: &[usize],
    ) -> (SolutionKind, usize) {
        let kind: SolutionKind = if start_empty.contains(&last_peg) {
            SolutionKind::Perfect
        } else {
            SolutionKind::Ordinary
        };
        let list: &mut Vec<Solution> = self.list_mut(kind);
        list.push(Solution::new(moves, last_peg));
        (kind, list.len() - 1)
    }

    fn list(&self, kind: SolutionKind) -> &Vec<Solution> {
        match kind {
            SolutionKind::Ordinary => &self.ordinary,
            SolutionKind::Perfect => &self.perfect,
        }
    }

    fn list_mut(&mut self, kind: SolutionKind) -> &mut Vec<Solution> {
        match kind {
            SolutionKind::Ordinary => &mut self.ordinary,
            SolutionKind::Perfect => &mut self.perfect,
        }
    }

    /// Return the solution at the given position in the category list.
    pub fn get(&self, kind: SolutionKind, id: usize) -> Option<&Solution> {
        self.list(kind).get(id)
    }

    /// Return all the solutions of the given category.
    pub fn solutions(&self, kind: SolutionKind) -> &[Solution] {
        self.list(kind)
    }

    /// Number of solutions in the given category.
    pub fn count(&self, kind: SolutionKind) -> usize {
        self.list(kind).len()
    }

    /// Total number of solutions.
    pub fn len(&self) -> usize {
        self.ordinary.len() + self.perfect.len()
    }

    /// Whether no solution has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the first solution that leaves the last peg in the given slot.
    ///
    /// The ordinary solutions are searched first.
    pub fn find_with_last_peg(&self, last_peg: usize) -> Option<(SolutionKind, usize)> {
        [SolutionKind::Ordinary, SolutionKind::Perfect]
            .into_iter()
            .find_map(|kind| {
                self.list(kind)
                    .iter()
                    .position(|s| s.last_peg == last_peg)
                    .map(|id| (kind, id))
            })
    }

    /// Return the number of solutions for each slot where the last peg ends, sorted by slot.
    pub fn last_peg_histogram(&self) -> Vec<(usize, usize)> {
        let mut histogram: Vec<(usize, usize)> = Vec::new();
        for s in self.ordinary.iter().chain(self.perfect.iter()) {
            match histogram.iter_mut().find(|(slot, _)| *slot == s.last_peg) {
                Some((_, count)) => *count += 1,
                None => histogram.push((s.last_peg, 1)),
            }
        }
        histogram.sort_unstable();
        histogram
    }
}
