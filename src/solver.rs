/*
solver.rs

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

//! Find all the move sequences that leave a single peg.
//!
//! The search explores every possible game from the current board.
//! It can run in two ways:
//!
//! * In the calling thread, by small chunks.
//!   Create a [`search::Search`] object and call its [`search::Search::run`] method with a step
//!   budget until it does not return [`search::SearchStatus::Suspended`].
//!   The [`crate::session::Session`] object works this way.
//!
//! * In a background thread, with [`worker::SolverHandle::spawn`].
//!   The thread reports its progress and result through a channel, and can be cancelled at any
//!   time.
//!
//! In both cases, cancelling the search undoes all the moves it played, so the board is left as
//! it was when the search started.
//!
//! The number of games grows very fast with the size of the board.
//! Boards with more than 15 slots can take a very long time.

pub mod search;
pub mod worker;
