/*
layout.rs

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

//! Board layout: the size of the triangle and the slots that start empty.
//!
//! The layout can be given on the command line or read from a JSON file such as:
//!
//! ```json
//! { "base_slots": 5, "empty_positions": [0] }
//! ```

use log::{debug, warn};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_BASE_SLOTS, DEFAULT_EMPTY_POSITION};

/// Board configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardLayout {
    /// Number of slots in the base row of the triangle.
    pub base_slots: usize,

    /// Slots without a peg when the board is built or reset.
    ///
    /// When the last peg ends in one of these slots, the solution is perfect.
    pub empty_positions: Vec<usize>,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_SLOTS, &[DEFAULT_EMPTY_POSITION])
    }
}

impl BoardLayout {
    /// Create a [`BoardLayout`] object.
    pub fn new(base_slots: usize, empty_positions: &[usize]) -> Self {
        Self {
            base_slots,
            empty_positions: empty_positions.to_vec(),
        }
    }

    /// Read the layout from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Layout file: {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let layout: BoardLayout = serde_json::from_reader(reader)?;
        Ok(layout)
    }

    /// Number of slots in the triangle, or None if it does not fit in a `usize`.
    pub fn num_slots(&self) -> Option<usize> {
        self.base_slots
            .checked_add(1)
            .and_then(|n| n.checked_mul(self.base_slots))
            .map(|n| n / 2)
    }

    /// Return the empty positions that exist on the board, without duplicates.
    ///
    /// Out of range positions are reported and ignored.
    pub fn valid_empty_positions(&self) -> Vec<usize> {
        let num_slots: usize = self.num_slots().unwrap_or(usize::MAX);
        let mut positions: Vec<usize> = Vec::with_capacity(self.empty_positions.len());

        for &pos in &self.empty_positions {
            if pos >= num_slots {
                warn!("Invalid empty position {pos}: the board has {num_slots} slots");
                continue;
            }
            if !positions.contains(&pos) {
                positions.push(pos);
            }
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_triangle() {
        let layout = BoardLayout::default();
        assert_eq!(layout.base_slots, 5);
        assert_eq!(layout.num_slots(), Some(15));
        assert_eq!(layout.empty_positions, vec![0]);
    }

    #[test]
    fn out_of_range_positions_are_ignored() {
        let layout = BoardLayout::new(4, &[3, 10, 42, 3, 9]);
        assert_eq!(layout.valid_empty_positions(), vec![3, 9]);
    }

    #[test]
    fn parse_json() {
        let layout: BoardLayout =
            serde_json::from_str(r#"{ "base_slots": 6, "empty_positions": [4, 7] }"#).unwrap();
        assert_eq!(layout, BoardLayout::new(6, &[4, 7]));
    }

    #[test]
    fn huge_layout_has_no_slot_count() {
        assert_eq!(BoardLayout::new(usize::MAX, &[]).num_slots(), None);
        assert_eq!(BoardLayout::new(1usize << 33, &[0]).num_slots(), None);
        assert_eq!(BoardLayout::new(6, &[]).num_slots(), Some(21));
    }
}
