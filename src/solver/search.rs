/*
search.rs

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

//! Exhaustive depth-first search of the move sequences.
//!
//! The moves are played and undone on the board itself, so the board is never copied.
//! Instead of recursive calls, the search keeps one cursor per depth level.
//! A cursor is the next (slot, direction) pair to try at that level, encoded as
//! `slot * NUM_DIRECTIONS + direction`.
//! This way, the search can stop after any number of steps and continue later from the same
//! point, with [`Search::run`].

use log::{debug, error, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::board::direction::{Direction, NUM_DIRECTIONS};
use crate::board::peg_board::PegBoard;
use crate::peg_move::PegMove;
use crate::solution::{SolutionKind, SolutionStore};

/// Result of a [`Search::run`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// The step budget is used up. Call [`Search::run`] again to continue.
    Suspended,

    /// All the move sequences have been explored.
    Exhausted,

    /// The search was cancelled. The board is back in its state from before the search.
    Cancelled,
}

/// Flag shared with the code running the search, to ask the search to stop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a [`CancelToken`] object.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Ask the search to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether the search has been asked to stop.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clear the flag so that the token can be used for another search.
    pub fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// [`Search`] object.
#[derive(Debug)]
pub struct Search {
    /// Next candidate to try, for each depth level.
    cursors: Vec<usize>,

    /// Moves played from the initial board. There is one move less than cursors.
    path: Vec<PegMove>,

    /// Slots that make a solution perfect.
    start_empty: Vec<usize>,

    /// Solutions found so far.
    store: SolutionStore,

    /// Number of moves played.
    explored: u64,

    /// Number of search steps (a move played or a level left).
    steps: u64,

    /// Whether the search has been cancelled.
    cancelled: bool,
}

impl Search {
    /// Prepare a search from the current state of the board.
    pub fn new(board: &PegBoard) -> Self {
        let mut search: Search = Self {
            cursors: vec![0],
            path: Vec::with_capacity(board.len()),
            start_empty: board.start_empty().to_vec(),
            store: SolutionStore::new(),
            explored: 0,
            steps: 0,
            cancelled: false,
        };
        search.record_if_solved(board);
        search
    }

    /// Run the search for at most `budget` steps, or until the end if `budget` is None.
    ///
    /// The token is checked before every step. When the search is cancelled, all the moves are
    /// undone before the method returns.
    ///
    /// The board must not be changed between two calls.
    pub fn run(
        &mut self,
        board: &mut PegBoard,
        budget: Option<u64>,
        cancel: &CancelToken,
    ) -> SearchStatus {
        if self.cancelled {
            return SearchStatus::Cancelled;
        }
        let mut used: u64 = 0;
        loop {
            if self.is_finished() {
                return SearchStatus::Exhausted;
            }
            if cancel.is_cancelled() {
                self.cancel(board);
                return SearchStatus::Cancelled;
            }
            if budget.is_some_and(|b| used >= b) {
                return SearchStatus::Suspended;
            }
            used += 1;
            if !self.step(board) {
                info!(
                    "Search complete: {} moves explored, {} solutions ({} perfect)",
                    self.explored,
                    self.store.len(),
                    self.store.count(SolutionKind::Perfect)
                );
                return SearchStatus::Exhausted;
            }
        }
    }

    /// Play the next valid move at the current level, or leave the level if there is none.
    ///
    /// Return `false` when the first level is left, which ends the search.
    fn step(&mut self, board: &mut PegBoard) -> bool {
        let num_candidates: usize = board.len() * NUM_DIRECTIONS;
        let Some(&start) = self.cursors.last() else {
            return false;
        };
        self.steps += 1;

        let mut cursor: usize = start;
        let mut found: Option<PegMove> = None;
        while cursor < num_candidates {
            let slot: usize = cursor / NUM_DIRECTIONS;
            if !board.has_peg(slot) {
                cursor = (slot + 1) * NUM_DIRECTIONS;
                continue;
            }
            let direction: Option<Direction> = Direction::from_repr(cursor % NUM_DIRECTIONS);
            cursor += 1;
            if let Some(direction) = direction {
                let mut peg_move: PegMove = PegMove::new(slot, direction);
                if peg_move.apply(board) {
                    found = Some(peg_move);
                    break;
                }
            }
        }
        if let Some(c) = self.cursors.last_mut() {
            *c = cursor;
        }

        match found {
            Some(peg_move) => {
                self.path.push(peg_move);
                self.cursors.push(0);
                self.explored += 1;
                self.record_if_solved(board);
            }
            None => {
                self.cursors.pop();
                self.undo_last(board);
            }
        }
        !self.cursors.is_empty()
    }

    /// Undo the last move of the path.
    fn undo_last(&mut self, board: &mut PegBoard) {
        if let Some(mut peg_move) = self.path.pop()
            && !peg_move.undo(board)
        {
            error!("Cannot undo move {peg_move}: the board changed during the search");
        }
    }

    /// Record a solution if only one peg remains.
    fn record_if_solved(&mut self, board: &PegBoard) {
        if let Some(last_peg) = board.last_peg() {
            let (kind, id) = self.store.record(&self.path, last_peg, &self.start_empty);
            debug!("Found {kind} solution {id} with last peg {last_peg}");
        }
    }

    /// Stop the search and undo all the moves.
    pub fn cancel(&mut self, board: &mut PegBoard) {
        if self.cancelled || self.is_finished() {
            return;
        }
        debug!("Cancelling the search at depth {}", self.path.len());
        while !self.path.is_empty() {
            self.undo_last(board);
        }
        self.cursors.clear();
        self.cancelled = true;
    }

    /// Whether the search is over, because it has been completed or cancelled.
    pub fn is_finished(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Whether the search has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Number of moves played so far.
    pub fn explored(&self) -> u64 {
        self.explored
    }

    /// Number of search steps so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of moves currently played on the board.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Solutions found so far.
    pub fn store(&self) -> &SolutionStore {
        &self.store
    }

    /// Consume the search and return the solutions.
    pub fn into_store(self) -> SolutionStore {
        self.store
    }
}

/// Search all the solutions from the current state of the board.
pub fn solve(board: &mut PegBoard) -> SolutionStore {
    let mut search: Search = Search::new(board);
    search.run(board, None, &CancelToken::new());
    search.into_store()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::BoardLayout;
    use crate::solution::SolutionKind;

    fn board(base_slots: usize, empty: &[usize]) -> PegBoard {
        PegBoard::new(&BoardLayout::new(base_slots, empty)).unwrap()
    }

    #[test]
    fn small_board() {
        let mut b = board(4, &[1]);
        let mut search = Search::new(&b);
        search.run(&mut b, None, &CancelToken::new());
        assert_eq!(search.explored(), 259);
        let store = search.into_store();
        assert_eq!(store.count(SolutionKind::Perfect), 0);
        assert_eq!(store.count(SolutionKind::Ordinary), 14);
        assert!(store.solutions(SolutionKind::Ordinary).iter().all(|s| s.last_peg == 4));
    }

    #[test]
    fn first_candidate_is_played_first() {
        // Only the pegs in slots 3 and 8 can jump into slot 1
        let mut b = board(4, &[1]);
        let mut search = Search::new(&b);
        assert_eq!(search.run(&mut b, Some(1), &CancelToken::new()), SearchStatus::Suspended);
        assert_eq!(search.depth(), 1);
        assert_eq!(search.path[0].slot, 3);
        assert_eq!(search.path[0].direction, Direction::LeftDown);
        assert!(search.path[0].done);
        assert!(!b.has_peg(3));
        assert!(!b.has_peg(2));
        assert!(b.has_peg(1));
    }

    #[test]
    fn unsolvable_board() {
        let mut b = board(3, &[0]);
        let store = solve(&mut b);
        assert!(store.is_empty());
    }

    #[test]
    fn single_peg_is_already_solved() {
        let mut b = board(1, &[]);
        let store = solve(&mut b);
        let s = store.get(SolutionKind::Ordinary, 0).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.last_peg, 0);

        let mut b = board(1, &[0]);
        assert!(solve(&mut b).is_empty());
    }

    #[test]
    fn budget_does_not_change_the_result() {
        let mut b = board(4, &[1]);
        let expected = solve(&mut b);

        let token = CancelToken::new();
        let mut search = Search::new(&b);
        let mut calls = 0;
        while search.run(&mut b, Some(7), &token) == SearchStatus::Suspended {
            calls += 1;
        }
        assert!(calls > 10);
        assert_eq!(search.store(), &expected);
        assert_eq!(search.run(&mut b, Some(7), &token), SearchStatus::Exhausted);
    }

    #[test]
    fn cancel_restores_the_board() {
        let mut b = board(5, &[0]);
        let initial = b.occupancy();
        let token = CancelToken::new();
        let mut search = Search::new(&b);

        assert_eq!(search.run(&mut b, Some(1000), &token), SearchStatus::Suspended);
        assert!(search.depth() > 0);
        assert_ne!(b.occupancy(), initial);

        token.cancel();
        assert_eq!(search.run(&mut b, Some(1000), &token), SearchStatus::Cancelled);
        assert!(search.is_cancelled());
        assert_eq!(search.depth(), 0);
        assert_eq!(b.occupancy(), initial);

        // Stays cancelled
        token.clear();
        assert_eq!(search.run(&mut b, None, &token), SearchStatus::Cancelled);
    }

    #[test]
    fn zero_budget_makes_no_progress() {
        let mut b = board(4, &[1]);
        let mut search = Search::new(&b);
        assert_eq!(
            search.run(&mut b, Some(0), &CancelToken::new()),
            SearchStatus::Suspended
        );
        assert_eq!(search.steps(), 0);
        assert_eq!(search.explored(), 0);
    }
}
