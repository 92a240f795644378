/*
session.rs

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

//! Manage a board, its search, and the replay of its solutions.

use log::{debug, info, warn};

use crate::board::layout::BoardLayout;
use crate::board::peg_board::{BoardError, PegBoard};
use crate::playback::{Playback, StepOutcome};
use crate::solution::{SolutionKind, SolutionStore};
use crate::solver::search::{CancelToken, Search, SearchStatus};

/// Solving session for one board layout.
#[derive(Debug)]
pub struct Session {
    /// Layout used to build the board.
    layout: BoardLayout,

    /// The board. While a search is in progress, only the search changes it.
    board: PegBoard,

    /// Solutions of the last search, complete or not.
    store: SolutionStore,

    /// Number of moves that the last search explored.
    explored: u64,

    /// Search in progress.
    search: Option<Search>,

    /// Token checked by the search in progress.
    cancel: CancelToken,

    /// Solution being replayed.
    playback: Playback,
}

impl Session {
    /// Create a [`Session`] object for the given layout.
    pub fn new(layout: BoardLayout) -> Result<Self, BoardError> {
        let board: PegBoard = PegBoard::new(&layout)?;
        Ok(Self {
            layout,
            board,
            store: SolutionStore::new(),
            explored: 0,
            search: None,
            cancel: CancelToken::new(),
            playback: Playback::new(),
        })
    }

    /// Layout of the board.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// The board.
    pub fn board(&self) -> &PegBoard {
        &self.board
    }

    /// Solutions of the last search.
    pub fn store(&self) -> &SolutionStore {
        &self.store
    }

    /// Number of moves that the last search explored.
    pub fn explored(&self) -> u64 {
        self.explored
    }

    /// Replace the solutions, for example with solutions loaded from a file.
    pub fn set_store(&mut self, store: SolutionStore, explored: u64) {
        self.cancel();
        self.playback.clear();
        self.store = store;
        self.explored = explored;
    }

    /// Token that stops the search in progress when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Whether a search is in progress.
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Reset the board and prepare a new search. Previous solutions are dropped.
    ///
    /// Use [`Session::run`] to make the search progress.
    pub fn start(&mut self) {
        self.cancel();
        self.board.reset();
        self.playback.clear();
        self.store.clear();
        self.explored = 0;
        self.cancel.clear();
        self.search = Some(Search::new(&self.board));
        info!("Searching solutions for {} slots", self.board.len());
    }

    /// Make the search progress by at most `budget` steps, or until the end if `budget` is None.
    ///
    /// Return None if no search is in progress.
    pub fn run(&mut self, budget: Option<u64>) -> Option<SearchStatus> {
        let search: &mut Search = self.search.as_mut()?;
        let status: SearchStatus = search.run(&mut self.board, budget, &self.cancel);
        if status != SearchStatus::Suspended {
            self.finish_search();
        }
        Some(status)
    }

    /// Search all the solutions, without interruption.
    pub fn solve(&mut self) -> SearchStatus {
        self.start();
        self.run(None).unwrap_or(SearchStatus::Cancelled)
    }

    /// Keep the results of the search in progress and drop the search.
    fn finish_search(&mut self) {
        if let Some(search) = self.search.take() {
            self.explored = search.explored();
            self.store = search.into_store();
            debug!(
                "{} ordinary and {} perfect solutions kept",
                self.store.count(SolutionKind::Ordinary),
                self.store.count(SolutionKind::Perfect)
            );
        }
    }

    /// Stop the search in progress and undo its moves. The solutions found so far are kept.
    pub fn cancel(&mut self) {
        if let Some(search) = self.search.as_mut() {
            search.cancel(&mut self.board);
            info!("Search cancelled after {} moves", search.explored());
        }
        self.finish_search();
    }

    /// Stop the search, put the board back to its initial layout, and forget the replayed
    /// solution.
    pub fn reset(&mut self) {
        self.cancel();
        self.board.reset();
        self.playback.clear();
    }

    /// Number of solutions in the given category.
    pub fn count(&self, kind: SolutionKind) -> usize {
        self.store.count(kind)
    }

    /// Return the category and index of a solution that leaves its last peg in the given slot.
    pub fn find_solution_with_last_peg(&self, last_peg: usize) -> Option<(SolutionKind, usize)> {
        self.store.find_with_last_peg(last_peg)
    }

    /// Load the given solution, or play its next move. See [`Playback::step`].
    pub fn step_through_solution(&mut self, kind: SolutionKind, id: usize) -> StepOutcome {
        if self.is_searching() {
            warn!("Cannot replay a solution while searching");
            return StepOutcome::SearchInProgress;
        }
        self.playback.step(&mut self.board, &self.store, kind, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(BoardLayout::new(5, &[0])).unwrap()
    }

    #[test]
    fn cancel_then_reset_restores_the_layout() {
        let mut s = session();
        let initial = s.board().occupancy();
        s.start();
        assert_eq!(s.run(Some(5000)), Some(SearchStatus::Suspended));
        assert!(s.is_searching());
        assert_ne!(s.board().occupancy(), initial);

        s.cancel();
        assert!(!s.is_searching());
        assert_eq!(s.board().occupancy(), initial);
        assert_eq!(s.run(Some(10)), None);

        s.reset();
        assert_eq!(s.board().occupancy(), initial);
    }

    #[test]
    fn cancel_token_stops_the_search() {
        let mut s = session();
        let initial = s.board().occupancy();
        s.start();
        s.run(Some(100));
        s.cancel_token().cancel();
        assert_eq!(s.run(Some(100)), Some(SearchStatus::Cancelled));
        assert!(!s.is_searching());
        assert_eq!(s.board().occupancy(), initial);

        // A new search clears the token
        s.start();
        assert_eq!(s.run(Some(10)), Some(SearchStatus::Suspended));
    }

    #[test]
    fn no_playback_during_search() {
        let mut s = Session::new(BoardLayout::new(4, &[1])).unwrap();
        s.solve();
        s.start();
        s.run(Some(3));
        assert_eq!(
            s.step_through_solution(SolutionKind::Ordinary, 0),
            StepOutcome::SearchInProgress
        );
    }

    #[test]
    fn solve_and_replay() {
        let mut s = Session::new(BoardLayout::new(4, &[1])).unwrap();
        assert_eq!(s.solve(), SearchStatus::Exhausted);
        assert_eq!(s.count(SolutionKind::Ordinary), 14);
        assert_eq!(s.explored(), 259);
        assert_eq!(s.find_solution_with_last_peg(1), None);
        let (kind, id) = s.find_solution_with_last_peg(4).unwrap();
        assert_eq!((kind, id), (SolutionKind::Ordinary, 0));

        assert_eq!(
            s.step_through_solution(kind, id),
            StepOutcome::Loaded { moves: 8 }
        );
        let mut outcome = StepOutcome::NoMoreMoves;
        for _ in 0..8 {
            outcome = s.step_through_solution(kind, id);
        }
        assert_eq!(outcome, StepOutcome::Complete);
        assert_eq!(s.board().last_peg(), Some(4));

        s.reset();
        assert_eq!(s.board().peg_count(), 9);
        // The playback was cleared, so the solution is loaded again
        assert_eq!(
            s.step_through_solution(kind, id),
            StepOutcome::Loaded { moves: 8 }
        );
    }

    #[test]
    fn start_drops_previous_solutions() {
        let mut s = Session::new(BoardLayout::new(4, &[1])).unwrap();
        s.solve();
        assert_eq!(s.store().len(), 14);
        s.start();
        assert!(s.store().is_empty());
    }
}
