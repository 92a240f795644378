/*
draw.rs

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

//! Draw the board as text.
//!
//! The apex is on the first line and the base row on the last line:
//!
//! ```text
//!     o
//!    o o
//!   o o o
//!  o o o o
//! . o o o o
//! ```

use log::{Level, debug, log_enabled};

use crate::board::peg_board::PegBoard;

/// Character for a slot with a peg.
const PEG: char = 'o';

/// Character for an empty slot.
const HOLE: char = '.';

/// Build the lines of the triangle, from the apex to the base, with the given cell text.
fn draw_rows<F>(board: &PegBoard, width: usize, cell: F) -> String
where
    F: Fn(usize) -> String,
{
    let mut s: String = String::new();
    for (row, slots) in board.rows().iter().enumerate().rev() {
        s.push_str(&" ".repeat(row * (width + 1) / 2));
        let cells: Vec<String> = slots
            .clone()
            .map(|slot_id| format!("{:>width$}", cell(slot_id)))
            .collect();
        s.push_str(&cells.join(" "));
        s.push('\n');
    }
    s
}

/// Return the board with its pegs and empty slots.
pub fn draw_pegs(board: &PegBoard) -> String {
    draw_rows(board, 1, |slot_id| {
        let c: char = if board.has_peg(slot_id) { PEG } else { HOLE };
        c.to_string()
    })
}

/// Return the board with the slot IDs, to help choosing the empty positions.
pub fn draw_slot_ids(board: &PegBoard) -> String {
    let width: usize = board.len().saturating_sub(1).to_string().len();
    draw_rows(board, width, |slot_id| slot_id.to_string())
}

/// Print the connections of all the slots.
pub fn debug_connections(board: &PegBoard) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    let mut s: String = String::new();
    for (slot_id, slot) in board.slots().iter().enumerate() {
        s.clear();
        s.push_str(&format!("{slot_id:>3} -->"));
        for (direction, other) in slot.connections() {
            s.push_str(&format!(" {other}({direction})"));
        }
        debug!("{s}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::BoardLayout;

    #[test]
    fn pegs() {
        let board = PegBoard::new(&BoardLayout::new(3, &[0, 5])).unwrap();
        assert_eq!(draw_pegs(&board), "  .\n o o\n. o o\n");
    }

    #[test]
    fn slot_ids() {
        let board = PegBoard::new(&BoardLayout::new(3, &[])).unwrap();
        assert_eq!(draw_slot_ids(&board), "  5\n 3 4\n0 1 2\n");

        let board = PegBoard::new(&BoardLayout::new(5, &[])).unwrap();
        let text = draw_slot_ids(&board);
        assert_eq!(text.lines().next(), Some("      14"));
        assert_eq!(text.lines().last(), Some(" 0  1  2  3  4"));
    }
}
