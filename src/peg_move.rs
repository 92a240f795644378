/*
peg_move.rs

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

//! Reversible peg moves.
//!
//! A move is a peg jumping over an adjacent peg and landing in the empty slot right behind it.
//! The jumped peg is removed from the board.
//! A move that has been played can be undone, which puts the two pegs back in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::direction::Direction;
use crate::board::peg_board::PegBoard;

/// Peg move.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PegMove {
    /// Slot of the peg that jumps.
    pub slot: usize,

    /// Direction of the jump.
    pub direction: Direction,

    /// Whether the move has been played (and so can be undone).
    pub done: bool,
}

impl PegMove {
    /// Create a [`PegMove`] object that has not been played yet.
    pub fn new(slot: usize, direction: Direction) -> Self {
        Self {
            slot,
            direction,
            done: false,
        }
    }

    /// Return a copy of the move in its not played state.
    pub fn fresh(&self) -> Self {
        Self::new(self.slot, self.direction)
    }

    /// Return the jumped slot and the landing slot, or None if the jump goes off the board.
    pub fn endpoints(&self, board: &PegBoard) -> Option<(usize, usize)> {
        let jumped: usize = board.neighbor(self.slot, self.direction)?;
        let landing: usize = board.neighbor(jumped, self.direction)?;
        Some((jumped, landing))
    }

    /// Whether the move can be played, or undone if it is already done.
    pub fn is_valid(&self, board: &PegBoard) -> bool {
        match self.endpoints(board) {
            Some((jumped, landing)) => {
                let source: bool = board.has_peg(self.slot);
                let jumped: bool = board.has_peg(jumped);
                let landing: bool = board.has_peg(landing);
                if self.done {
                    !source && !jumped && landing
                } else {
                    source && jumped && !landing
                }
            }
            None => false,
        }
    }

    /// Play the move. Return `false` and leave the board unchanged if the move is not valid.
    pub fn apply(&mut self, board: &mut PegBoard) -> bool {
        if self.done || !self.is_valid(board) {
            return false;
        }
        if let Some((jumped, landing)) = self.endpoints(board) {
            board.set_peg(self.slot, false);
            board.set_peg(jumped, false);
            board.set_peg(landing, true);
            self.done = true;
            return true;
        }
        false
    }

    /// Undo the move. Return `false` and leave the board unchanged if the move cannot be undone.
    pub fn undo(&mut self, board: &mut PegBoard) -> bool {
        if !self.done || !self.is_valid(board) {
            return false;
        }
        if let Some((jumped, landing)) = self.endpoints(board) {
            board.set_peg(self.slot, true);
            board.set_peg(jumped, true);
            board.set_peg(landing, false);
            self.done = false;
            return true;
        }
        false
    }
}

impl fmt::Display for PegMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.slot, self.direction)
    }
}
