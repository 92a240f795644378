/*
peg_board.rs

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

//! Triangular peg board.
//!
//! The slots are stored in a vector and reference each other by their index.
//! The rows are built from the base of the triangle up to the apex, so slot 0 is the left corner
//! of the base row, and the last slot is the apex.
//!
//! For a board with five slots in its base row:
//!
//! ```text
//!     14
//!    12 13
//!   9 10 11
//!  5 6  7  8
//! 0 1 2  3  4
//! ```

use log::debug;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::direction::Direction;
use super::layout::BoardLayout;
use super::slot::Slot;
use crate::config::MAX_BASE_SLOTS;

/// Type of errors.
#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    /// The base row must have at least one slot.
    #[error("the base row of the board must have at least one slot")]
    InvalidSize,

    /// The base row has more slots than supported.
    #[error("the base row of the board has {base_slots} slots, the maximum is {max}")]
    TooLarge { base_slots: usize, max: usize },

    /// A row does not have one slot less than the row below it.
    #[error("row {row} has {found} slots, but the row below has {below} slots")]
    TopologyMismatch {
        row: usize,
        found: usize,
        below: usize,
    },
}

/// Peg board object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PegBoard {
    /// All the slots of the board.
    slots: Vec<Slot>,

    /// Number of slots in the base row.
    base_slots: usize,

    /// Slots that are empty when the board is reset. Out of range positions from the layout have
    /// already been removed.
    start_empty: Vec<usize>,
}

impl PegBoard {
    /// Build the board described by the provided [`BoardLayout`] object.
    ///
    /// # Errors
    ///
    /// The method returns an error if the base row is empty or too large, or if the rows cannot
    /// be connected.
    pub fn new(layout: &BoardLayout) -> Result<Self, BoardError> {
        if layout.base_slots == 0 {
            return Err(BoardError::InvalidSize);
        }
        if layout.base_slots > MAX_BASE_SLOTS {
            return Err(BoardError::TooLarge {
                base_slots: layout.base_slots,
                max: MAX_BASE_SLOTS,
            });
        }
        let num_slots: usize = layout.num_slots().ok_or(BoardError::InvalidSize)?;

        let mut board: PegBoard = Self {
            slots: Vec::with_capacity(num_slots),
            base_slots: layout.base_slots,
            start_empty: layout.valid_empty_positions(),
        };
        board.build_triangle()?;
        board.reset();
        debug!(
            "Board with {} slots, empty positions {:?}",
            board.len(),
            board.start_empty
        );
        Ok(board)
    }

    /// Create the slots row by row and connect each slot to its neighbors.
    ///
    /// Every slot is connected to its left neighbor in the row, and to the two slots below it.
    /// The other three connections are set when the neighbors are created.
    fn build_triangle(&mut self) -> Result<(), BoardError> {
        let mut previous: Vec<usize> = Vec::new();

        for (row, size) in (1..=self.base_slots).rev().enumerate() {
            let mut current: Vec<usize> = Vec::with_capacity(size);
            for j in 0..size {
                let slot_id: usize = self.slots.len();
                self.slots.push(Slot::new());
                current.push(slot_id);
                if j != 0 {
                    self.add_connection(slot_id, current[j - 1], Direction::LeftDown);
                }
            }

            if !previous.is_empty() {
                if previous.len() != current.len() + 1 {
                    return Err(BoardError::TopologyMismatch {
                        row,
                        found: current.len(),
                        below: previous.len(),
                    });
                }
                for (j, &slot_id) in current.iter().enumerate() {
                    self.add_connection(slot_id, previous[j], Direction::Down);
                    self.add_connection(slot_id, previous[j + 1], Direction::RightDown);
                }
            }
            previous = current;
        }
        Ok(())
    }

    /// Connect two slots in both directions.
    fn add_connection(&mut self, slot_id: usize, other_id: usize, direction: Direction) {
        self.slots[slot_id].set_neighbor(direction, other_id);
        self.slots[other_id].set_neighbor(direction.reverse(), slot_id);
    }

    /// Put the pegs back in all the slots, except in the starting empty positions.
    pub fn reset(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.has_peg = !self.start_empty.contains(&i);
        }
    }

    /// Number of slots on the board.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the board has no slot. A board built with [`PegBoard::new`] is never empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots that are empty after a reset.
    pub fn start_empty(&self) -> &[usize] {
        &self.start_empty
    }

    /// Return the slots.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Whether the given slot has a peg. Unknown slots have no peg.
    pub fn has_peg(&self, slot_id: usize) -> bool {
        self.slots.get(slot_id).is_some_and(|s| s.has_peg)
    }

    /// Add or remove the peg in the given slot.
    pub fn set_peg(&mut self, slot_id: usize, has_peg: bool) {
        if let Some(slot) = self.slots.get_mut(slot_id) {
            slot.has_peg = has_peg;
        }
    }

    /// Return the adjacent slot in the given direction.
    pub fn neighbor(&self, slot_id: usize, direction: Direction) -> Option<usize> {
        self.slots.get(slot_id).and_then(|s| s.neighbor(direction))
    }

    /// Number of pegs on the board.
    pub fn peg_count(&self) -> usize {
        self.slots.iter().filter(|s| s.has_peg).count()
    }

    /// Return the slot of the only remaining peg, or None if there is not exactly one peg.
    pub fn last_peg(&self) -> Option<usize> {
        let mut pegs = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.has_peg)
            .map(|(i, _)| i);
        match (pegs.next(), pegs.next()) {
            (Some(i), None) => Some(i),
            _ => None,
        }
    }

    /// Return the peg status of all the slots.
    pub fn occupancy(&self) -> Vec<bool> {
        self.slots.iter().map(|s| s.has_peg).collect()
    }

    /// Return the range of slot IDs for each row, from the base row to the apex.
    pub fn rows(&self) -> Vec<Range<usize>> {
        let mut rows: Vec<Range<usize>> = Vec::with_capacity(self.base_slots);
        let mut start: usize = 0;
        for size in (1..=self.base_slots).rev() {
            rows.push(start..start + size);
            start += size;
        }
        rows
    }
}
