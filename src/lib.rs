/*
lib.rs

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

//! Peg solitaire solver for triangular boards.
//!
//! A triangular board has `n(n+1)/2` slots, all of them with a peg except a few starting empty
//! slots.
//! A peg jumps over an adjacent peg into an empty slot, and the jumped peg is removed.
//! The goal is to leave a single peg on the board.
//!
//! * [`board`] builds the board graph from a [`board::layout::BoardLayout`].
//! * [`peg_move`] plays and undoes moves.
//! * [`solver`] explores all the games and collects the solutions in a
//!   [`solution::SolutionStore`].
//!   The search can run by chunks in the calling thread or in a background thread, and can be
//!   cancelled.
//! * [`playback`] replays a solution move by move.
//! * [`session::Session`] ties everything together for a front end.
//! * [`saver`] saves and restores the solutions in JSON format.
//!
//! A solution is *perfect* when its last peg ends in one of the starting empty slots.

pub mod board;
pub mod config;
pub mod draw;
pub mod peg_move;
pub mod playback;
pub mod saver;
pub mod session;
pub mod solution;
pub mod solver;

pub use board::layout::BoardLayout;
pub use board::peg_board::{BoardError, PegBoard};
pub use session::Session;
pub use solution::{Solution, SolutionKind, SolutionStore};
