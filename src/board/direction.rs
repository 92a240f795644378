/*
direction.rs

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

//! Connection directions between the slots of the board.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Number of directions around a slot.
pub const NUM_DIRECTIONS: usize = 6;

/// Direction of a connection between two adjacent slots.
///
/// The directions go around the slot, so the opposite of a direction is three steps away.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(usize)]
pub enum Direction {
    Down,
    LeftDown,
    LeftUp,
    Up,
    RightUp,
    RightDown,
}

impl Direction {
    /// All the directions, in the order the solver tries them.
    pub const ALL: [Direction; NUM_DIRECTIONS] = [
        Direction::Down,
        Direction::LeftDown,
        Direction::LeftUp,
        Direction::Up,
        Direction::RightUp,
        Direction::RightDown,
    ];

    /// Position of the direction in the [`Direction::ALL`] array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite direction.
    pub fn reverse(self) -> Direction {
        Direction::ALL[(self.index() + NUM_DIRECTIONS / 2) % NUM_DIRECTIONS]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::LeftDown => write!(f, "left-down"),
            Direction::LeftUp => write!(f, "left-up"),
            Direction::Up => write!(f, "up"),
            Direction::RightUp => write!(f, "right-up"),
            Direction::RightDown => write!(f, "right-down"),
        }
    }
}
