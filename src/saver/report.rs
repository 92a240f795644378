/*
report.rs

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

//! Save and restore the solutions of a board.
//!
//! The saved object is a serialization of the [`Report`] object in JSON format by using
//! [`serde`].

use chrono::Local;
use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::board::layout::BoardLayout;
use crate::session::Session;
use crate::solution::SolutionStore;

/// Result of a search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Report {
    /// Layout of the solved board.
    pub layout: BoardLayout,

    /// When the report was created, in RFC 3339 format.
    pub created: String,

    /// Number of moves explored by the search.
    pub explored: u64,

    /// Whether the search explored all the games. Cancelled searches give partial results.
    pub complete: bool,

    /// Solutions found by the search.
    pub solutions: SolutionStore,
}

impl Report {
    /// Create a [`Report`] object from the last search of the session.
    pub fn new(session: &Session, complete: bool) -> Self {
        Self {
            layout: session.layout().clone(),
            created: Local::now().to_rfc3339(),
            explored: session.explored(),
            complete,
            solutions: session.store().clone(),
        }
    }
}

/// Object to save and restore a report.
pub struct SaverReport {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverReport {
    /// Create a [`SaverReport`] object that uses the provided file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Report file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`Report`] object from the file.
    ///
    /// Return the [`Report`] object or None if the file does not exist.
    pub fn get_report(&self) -> Result<Option<Report>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let report: Report = serde_json::from_reader(reader)?;
        Ok(Some(report))
    }

    /// Save the provided [`Report`] object.
    pub fn save_report(&self, report: &Report) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, report)?;
        writer.flush()?;
        Ok(())
    }
}
