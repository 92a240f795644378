/*
slot.rs

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

//! Slot in the peg board graph.

use serde::{Deserialize, Serialize};

use super::direction::{Direction, NUM_DIRECTIONS};

/// A hole in the board, with or without a peg.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Slot {
    /// Whether a peg sits in the slot.
    pub has_peg: bool,

    /// Index of the adjacent slot for each [`Direction`], or None at the edge of the board.
    connections: [Option<usize>; NUM_DIRECTIONS],
}

impl Slot {
    /// Create a slot with a peg and no connection.
    pub fn new() -> Self {
        Self {
            has_peg: true,
            connections: [None; NUM_DIRECTIONS],
        }
    }

    /// Return the adjacent slot in the given direction.
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.connections[direction.index()]
    }

    /// Set the adjacent slot in the given direction.
    ///
    /// Only this side of the connection is updated. See [`super::peg_board::PegBoard`] for the
    /// method that connects both slots.
    pub fn set_neighbor(&mut self, direction: Direction, slot_id: usize) {
        self.connections[direction.index()] = Some(slot_id);
    }

    /// Iterate over the existing connections.
    pub fn connections(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(|d| self.neighbor(*d).map(|s| (*d, s)))
    }
}
