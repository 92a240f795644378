/*
classic_board_test.rs

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

//! Full search of the classic board: five slots in the base row and the left corner empty.
//!
//! The counts are the known results for this board. Every sampled solution is also replayed on
//! a fresh board to check that it really leaves a single peg.

use pegsolver::board::direction::Direction;
use pegsolver::peg_move::PegMove;
use pegsolver::playback::StepOutcome;
use pegsolver::solver::search::SearchStatus;
use pegsolver::{BoardLayout, PegBoard, Session, Solution, SolutionKind};

fn classic_layout() -> BoardLayout {
    BoardLayout::new(5, &[0])
}

/// Play the moves of the solution on a fresh board and return the board.
fn replay(solution: &Solution) -> PegBoard {
    let mut board = PegBoard::new(&classic_layout()).unwrap();
    for (i, m) in solution.moves.iter().enumerate() {
        let before = board.peg_count();
        let mut peg_move = m.fresh();
        assert!(peg_move.apply(&mut board), "move {i} ({m}) rejected");
        assert_eq!(board.peg_count(), before - 1);
    }
    board
}

#[test]
fn classic_board() {
    let mut session = Session::new(classic_layout()).unwrap();
    assert_eq!(session.solve(), SearchStatus::Exhausted);
    assert!(!session.is_searching());
    assert_eq!(session.explored(), 1_293_178);

    let store = session.store();
    assert_eq!(store.count(SolutionKind::Perfect), 6816);
    assert_eq!(store.count(SolutionKind::Ordinary), 22944);
    assert_eq!(
        store.last_peg_histogram(),
        vec![(0, 6816), (3, 3408), (11, 16128), (12, 3408)]
    );

    // Candidates are tried by slot, then by direction
    let first = store.get(SolutionKind::Perfect, 0).unwrap();
    assert_eq!(first.moves[0], PegMove::new(2, Direction::LeftDown));
    assert_eq!(first.moves[1], PegMove::new(9, Direction::RightDown));

    for kind in [SolutionKind::Perfect, SolutionKind::Ordinary] {
        for solution in store.solutions(kind).iter().step_by(997) {
            assert_eq!(solution.len(), 13);
            assert_eq!(kind == SolutionKind::Perfect, solution.last_peg == 0);
            let board = replay(solution);
            assert_eq!(board.last_peg(), Some(solution.last_peg));
        }
    }

    // The search leaves the board as it found it
    assert_eq!(session.board().peg_count(), 14);
    assert!(!session.board().has_peg(0));
}

#[test]
fn replay_a_perfect_solution() {
    let mut session = Session::new(classic_layout()).unwrap();
    session.solve();
    let id = session.count(SolutionKind::Perfect) / 2;

    assert_eq!(
        session.step_through_solution(SolutionKind::Perfect, id),
        StepOutcome::Loaded { moves: 13 }
    );
    for step in 1..13 {
        assert_eq!(
            session.step_through_solution(SolutionKind::Perfect, id),
            StepOutcome::Moved {
                step,
                remaining: 13 - step
            }
        );
        assert_eq!(session.board().peg_count(), 14 - step);
    }
    assert_eq!(
        session.step_through_solution(SolutionKind::Perfect, id),
        StepOutcome::Complete
    );
    assert_eq!(session.board().last_peg(), Some(0));

    let end = session.board().occupancy();
    assert_eq!(
        session.step_through_solution(SolutionKind::Perfect, id),
        StepOutcome::NoMoreMoves
    );
    assert_eq!(session.board().occupancy(), end);

    // Selecting the last peg finds a solution that really ends there
    let (kind, id) = session.find_solution_with_last_peg(12).unwrap();
    assert_eq!(kind, SolutionKind::Ordinary);
    assert_eq!(session.store().get(kind, id).unwrap().last_peg, 12);
}
