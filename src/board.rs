/*
board.rs

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

//! Build the peg board graph.
//!
//! A [`layout::BoardLayout`] object gives the size of the triangle and the slots that start
//! without a peg.
//! From this layout, [`peg_board::PegBoard::new`] creates the [`slot::Slot`] objects and connects
//! each of them to its neighbors in the six [`direction::Direction`] directions.
//!
//! The graph does not change after it is built.
//! Only the peg status of the slots changes, when moves are played or undone, and when the board
//! is reset.

pub mod direction;
pub mod layout;
pub mod peg_board;
pub mod slot;
