/*
playback.rs

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

//! Replay a solution one move at a time.
//!
//! The first call for a solution resets the board and loads the solution.
//! Each following call for the same solution plays its next move.

use log::{debug, info, warn};

use crate::board::peg_board::PegBoard;
use crate::peg_move::PegMove;
use crate::solution::{SolutionKind, SolutionStore};

/// Result of a [`Playback::step`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The board has been reset and the solution loaded. No move has been played yet.
    ///
    /// A solution without moves (a board that starts with a single peg) is already complete
    /// once loaded: the next step returns [`StepOutcome::NoMoreMoves`].
    Loaded { moves: usize },

    /// A move has been played. `step` starts at 1.
    Moved { step: usize, remaining: usize },

    /// The last move of the solution has just been played.
    Complete,

    /// All the moves have already been played. The board is unchanged.
    NoMoreMoves,

    /// There is no solution with this category and index. Nothing changed.
    InvalidIndex,

    /// The next move cannot be played on the current board. Nothing changed.
    MoveRejected,

    /// A search owns the board. Nothing changed.
    SearchInProgress,
}

/// Solution being replayed.
#[derive(Debug, Default)]
pub struct Playback {
    /// Category and index of the loaded solution.
    selected: Option<(SolutionKind, usize)>,

    /// Moves of the loaded solution.
    moves: Vec<PegMove>,

    /// Index of the next move to play.
    cursor: usize,
}

impl Playback {
    /// Create a [`Playback`] object with no solution loaded.
    pub fn new() -> Self {
        Self {
            selected: None,
            moves: Vec::new(),
            cursor: 0,
        }
    }

    /// Forget the loaded solution.
    pub fn clear(&mut self) {
        self.selected = None;
        self.moves.clear();
        self.cursor = 0;
    }

    /// Category and index of the loaded solution.
    pub fn selected(&self) -> Option<(SolutionKind, usize)> {
        self.selected
    }

    /// Number of moves already played.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Load the given solution, or play its next move if it is already loaded.
    pub fn step(
        &mut self,
        board: &mut PegBoard,
        store: &SolutionStore,
        kind: SolutionKind,
        id: usize,
    ) -> StepOutcome {
        let Some(solution) = store.get(kind, id) else {
            warn!(
                "Invalid solution index {id}: there are {} {kind} solutions",
                store.count(kind)
            );
            return StepOutcome::InvalidIndex;
        };

        if self.selected != Some((kind, id)) {
            board.reset();
            self.selected = Some((kind, id));
            self.moves = solution.moves.iter().map(PegMove::fresh).collect();
            self.cursor = 0;
            debug!(
                "Loaded {kind} solution {id}: {} moves, last peg in slot {}",
                self.moves.len(),
                solution.last_peg
            );
            return StepOutcome::Loaded {
                moves: self.moves.len(),
            };
        }

        let total: usize = self.moves.len();
        let Some(peg_move) = self.moves.get_mut(self.cursor) else {
            info!("No more moves can be made");
            return StepOutcome::NoMoreMoves;
        };
        if !peg_move.apply(board) {
            warn!("Move {peg_move} cannot be played on the current board");
            return StepOutcome::MoveRejected;
        }
        let played: PegMove = *peg_move;
        self.cursor += 1;
        debug!("Played move {} of {total}: {played}", self.cursor);

        if self.cursor == total {
            info!("End of solution has been reached");
            StepOutcome::Complete
        } else {
            StepOutcome::Moved {
                step: self.cursor,
                remaining: total - self.cursor,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::BoardLayout;
    use crate::solver::search::solve;

    fn solved_board() -> (PegBoard, SolutionStore) {
        let mut board = PegBoard::new(&BoardLayout::new(4, &[1])).unwrap();
        let store = solve(&mut board);
        (board, store)
    }

    #[test]
    fn step_through_a_solution() {
        let (mut board, store) = solved_board();
        let mut playback = Playback::new();
        let n = store.get(SolutionKind::Ordinary, 3).unwrap().len();
        assert_eq!(n, 8);

        assert_eq!(
            playback.step(&mut board, &store, SolutionKind::Ordinary, 3),
            StepOutcome::Loaded { moves: n }
        );
        for i in 1..n {
            assert_eq!(
                playback.step(&mut board, &store, SolutionKind::Ordinary, 3),
                StepOutcome::Moved {
                    step: i,
                    remaining: n - i
                }
            );
        }
        assert_eq!(
            playback.step(&mut board, &store, SolutionKind::Ordinary, 3),
            StepOutcome::Complete
        );
        assert_eq!(board.last_peg(), Some(4));

        let end = board.occupancy();
        assert_eq!(
            playback.step(&mut board, &store, SolutionKind::Ordinary, 3),
            StepOutcome::NoMoreMoves
        );
        assert_eq!(board.occupancy(), end);
        assert_eq!(playback.cursor(), n);
    }

    #[test]
    fn invalid_index_changes_nothing() {
        let (mut board, store) = solved_board();
        let mut playback = Playback::new();
        playback.step(&mut board, &store, SolutionKind::Ordinary, 0);
        playback.step(&mut board, &store, SolutionKind::Ordinary, 0);
        let occupancy = board.occupancy();

        assert_eq!(
            playback.step(&mut board, &store, SolutionKind::Perfect, 0),
            StepOutcome::InvalidIndex
        );
        assert_eq!(
            playback.step(&mut board, &store, SolutionKind::Ordinary, 14),
            StepOutcome::InvalidIndex
        );
        assert_eq!(board.occupancy(), occupancy);
        assert_eq!(playback.selected(), Some((SolutionKind::Ordinary, 0)));
        assert_eq!(playback.cursor(), 1);
    }

    #[test]
    fn selecting_another_solution_resets_the_board() {
        let (mut board, store) = solved_board();
        let initial = board.occupancy();
        let mut playback = Playback::new();
        playback.step(&mut board, &store, SolutionKind::Ordinary, 0);
        playback.step(&mut board, &store, SolutionKind::Ordinary, 0);
        assert_ne!(board.occupancy(), initial);

        assert_eq!(
            playback.step(&mut board, &store, SolutionKind::Ordinary, 1),
            StepOutcome::Loaded { moves: 8 }
        );
        assert_eq!(board.occupancy(), initial);
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn changed_board_rejects_the_move() {
        let (mut board, store) = solved_board();
        let mut playback = Playback::new();
        playback.step(&mut board, &store, SolutionKind::Ordinary, 0);
        // Fill every slot so that no jump can land
        for i in 0..board.len() {
            board.set_peg(i, true);
        }
        assert_eq!(
            playback.step(&mut board, &store, SolutionKind::Ordinary, 0),
            StepOutcome::MoveRejected
        );
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn solution_without_moves() {
        let mut board = PegBoard::new(&BoardLayout::new(1, &[])).unwrap();
        let store = solve(&mut board);
        let mut playback = Playback::new();
        assert_eq!(
            playback.step(&mut board, &store, SolutionKind::Ordinary, 0),
            StepOutcome::Loaded { moves: 0 }
        );
        assert_eq!(
            playback.step(&mut board, &store, SolutionKind::Ordinary, 0),
            StepOutcome::NoMoreMoves
        );
        assert_eq!(board.last_peg(), Some(0));
        assert_eq!(playback.cursor(), 0);
    }
}
