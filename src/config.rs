/*
config.rs

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

//! Default settings.

/// Long version message.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>"
);

/// Number of slots in the base row of the classic triangle board.
pub const DEFAULT_BASE_SLOTS: usize = 5;

/// Largest base row accepted for a board.
pub const MAX_BASE_SLOTS: usize = 64;

/// Slot without a peg at the start of the classic game: a corner of the base row.
pub const DEFAULT_EMPTY_POSITION: usize = 0;

/// Number of search steps between two progress reports from the search thread.
pub const PROGRESS_CHUNK: u64 = 200_000;
