/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Solve the classic board, with five slots in the base row and the left corner empty:
//!
//! ```text
//! $ pegsolver
//!     o
//!    o o
//!   o o o
//!  o o o o
//! . o o o o
//!
//! 22944 ordinary solutions
//! 6816 perfect solutions
//! ```
//!
//! Solve a board with six slots in the base row, give up after a minute, and save the result:
//!
//! ```text
//! $ pegsolver -r 6 -e 4 -t 60 -s six.json
//! ```
//!
//! Replay a random perfect solution from the saved result:
//!
//! ```text
//! $ pegsolver -l six.json -p perfect
//! ```

use clap::Parser;
use log::{debug, info, warn};
use rand::Rng;
use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use pegsolver::config::{
    COPYRIGHT_NOTICE, DEFAULT_BASE_SLOTS, DEFAULT_EMPTY_POSITION, PROGRESS_CHUNK,
};
use pegsolver::draw;
use pegsolver::playback::StepOutcome;
use pegsolver::saver::report::{Report, SaverReport};
use pegsolver::solver::search::SearchStatus;
use pegsolver::solver::worker::{SolverEvent, SolverHandle};
use pegsolver::{BoardLayout, Session, SolutionKind};

/// Find all the ways to solve a triangular peg solitaire.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of slots in the base row of the board
    #[arg(short, long, default_value_t = DEFAULT_BASE_SLOTS)]
    rows: usize,

    /// Slot without a peg at the start (can be repeated)
    #[arg(short, long, default_values_t = [DEFAULT_EMPTY_POSITION])]
    empty: Vec<usize>,

    /// JSON file with the board layout, instead of --rows and --empty
    #[arg(short, long, conflicts_with = "load")]
    config: Option<PathBuf>,

    /// Stop searching after this number of seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Save the solutions in this JSON file
    #[arg(short, long, conflicts_with = "load")]
    save: Option<PathBuf>,

    /// Load the solutions from this JSON file instead of searching
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Replay a solution of this category
    #[arg(value_enum, short, long)]
    play: Option<SolutionKind>,

    /// Index of the solution to replay. A random solution is replayed if not set
    #[arg(short, long, requires = "play")]
    index: Option<usize>,

    /// Replay a solution that leaves the last peg in this slot
    #[arg(long, conflicts_with = "play")]
    last_peg: Option<usize>,

    /// Print some statistics
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Build the session, from a saved report or by searching the solutions
    //
    let mut session: Session;
    let complete: bool;
    let mut duration: Duration = Duration::ZERO;

    if let Some(path) = &args.load {
        let report: Report = match SaverReport::new(path.clone()).get_report() {
            Ok(Some(r)) => r,
            Ok(None) => {
                eprintln!("No such file: {}", path.display());
                return 1;
            }
            Err(e) => {
                eprintln!("Cannot read {}: {e}", path.display());
                return 1;
            }
        };
        session = match Session::new(report.layout.clone()) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Invalid board in {}: {e}", path.display());
                return 1;
            }
        };
        info!("Loaded solutions created on {}", report.created);
        session.set_store(report.solutions, report.explored);
        complete = report.complete;
    } else {
        let layout: BoardLayout = match &args.config {
            Some(path) => match BoardLayout::from_file(path) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Cannot read the layout from {}: {e}", path.display());
                    return 1;
                }
            },
            None => BoardLayout::new(args.rows, &args.empty),
        };
        session = match Session::new(layout) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Invalid board: {e}");
                return 1;
            }
        };
        if args.summary {
            println!("{}", draw::draw_slot_ids(session.board()));
        }
        let start: Instant = Instant::now();
        complete = search(&mut session, args.timeout.map(Duration::from_secs));
        duration = start.elapsed();
    }

    draw::debug_connections(session.board());
    println!("{}", draw::draw_pegs(session.board()));
    if !complete {
        println!("The search did not complete, the results are partial");
    }
    if session.store().is_empty() {
        println!("No solution");
    } else {
        println!(
            "{} ordinary solutions",
            session.count(SolutionKind::Ordinary)
        );
        println!("{} perfect solutions", session.count(SolutionKind::Perfect));
    }

    if args.summary {
        println!(
            "
    explored moves = {}
          duration = {}s",
            session.explored(),
            duration.as_secs_f32()
        );
        for (slot_id, count) in session.store().last_peg_histogram() {
            println!("  last peg in slot {slot_id:>3}: {count}");
        }
    }

    if let Some(path) = &args.save {
        let report: Report = Report::new(&session, complete);
        if let Err(e) = SaverReport::new(path.clone()).save_report(&report) {
            eprintln!("Cannot save the solutions in {}: {e}", path.display());
            return 1;
        }
        info!("Solutions saved in {}", path.display());
    }

    //
    // Replay a solution
    //
    let selection: Option<(SolutionKind, usize)> = match (args.play, args.last_peg) {
        (Some(kind), _) => match args.index {
            Some(id) => Some((kind, id)),
            None => {
                let count: usize = session.count(kind);
                if count == 0 {
                    eprintln!("There are no {kind} solutions");
                    return 1;
                }
                Some((kind, rand::rng().random_range(0..count)))
            }
        },
        (None, Some(last_peg)) => match session.find_solution_with_last_peg(last_peg) {
            Some(s) => Some(s),
            None => {
                eprintln!("No solution leaves the last peg in slot {last_peg}");
                return 1;
            }
        },
        (None, None) => None,
    };

    if let Some((kind, id)) = selection
        && !replay(&mut session, kind, id)
    {
        return 1;
    }
    0
}

/// Search the solutions in a background thread, and return whether the search completed.
fn search(session: &mut Session, timeout: Option<Duration>) -> bool {
    let start: Instant = Instant::now();
    let handle: SolverHandle = SolverHandle::spawn(session.board().clone(), PROGRESS_CHUNK);
    let mut cancelled: bool = false;
    let mut complete: bool = false;

    while let Some(event) = handle.recv() {
        match event {
            SolverEvent::Progress { explored, found } => {
                debug!("{explored} moves explored, {found} solutions found");
                if !cancelled && timeout.is_some_and(|t| start.elapsed() >= t) {
                    warn!("Timeout: stopping the search");
                    handle.cancel();
                    cancelled = true;
                }
            }
            SolverEvent::Finished {
                status,
                explored,
                store,
            } => {
                session.set_store(store, explored);
                complete = status == SearchStatus::Exhausted;
                break;
            }
        }
    }
    if handle.join().is_none() {
        warn!("The search thread panicked");
    }
    complete
}

/// Print the board after each move of the given solution. Return `false` if the solution does
/// not exist.
fn replay(session: &mut Session, kind: SolutionKind, id: usize) -> bool {
    match session.step_through_solution(kind, id) {
        StepOutcome::Loaded { moves } => {
            println!("Replaying {kind} solution {id} ({moves} moves)\n");
        }
        _ => {
            eprintln!(
                "Invalid solution index {id}: there are {} {kind} solutions",
                session.count(kind)
            );
            return false;
        }
    }

    let total: usize = session.store().get(kind, id).map_or(0, |s| s.len());
    loop {
        let outcome: StepOutcome = session.step_through_solution(kind, id);
        let step: usize = match outcome {
            StepOutcome::Moved { step, .. } => step,
            StepOutcome::Complete => total,
            StepOutcome::NoMoreMoves => return true,
            _ => return false,
        };
        if let Some(peg_move) = session
            .store()
            .get(kind, id)
            .and_then(|s| s.moves.get(step - 1))
        {
            println!("Move {step}: {peg_move}");
        }
        println!("{}", draw::draw_pegs(session.board()));
        if outcome == StepOutcome::Complete {
            return true;
        }
    }
}
