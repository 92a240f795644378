/*
worker.rs

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

//! Run the search in a background thread.
//!
//! The thread owns the board while it searches, and gives it back when it ends.
//! Progress and the final result are sent through an [`async_channel`] channel.

use log::debug;
use std::thread::{self, JoinHandle};

use super::search::{CancelToken, Search, SearchStatus};
use crate::board::peg_board::PegBoard;
use crate::solution::SolutionStore;

/// Number of events that can wait in the channel before the search thread blocks.
const EVENT_QUEUE_SIZE: usize = 4;

/// Messages sent by the search thread.
#[derive(Debug)]
pub enum SolverEvent {
    /// Sent after each chunk of search steps.
    Progress { explored: u64, found: usize },

    /// Last message, when the search is exhausted or cancelled.
    Finished {
        status: SearchStatus,
        explored: u64,
        store: SolutionStore,
    },
}

/// Handle on a running search thread.
pub struct SolverHandle {
    cancel: CancelToken,
    events: async_channel::Receiver<SolverEvent>,
    thread: JoinHandle<PegBoard>,
}

impl SolverHandle {
    /// Start searching the solutions of the provided board in a new thread.
    ///
    /// A [`SolverEvent::Progress`] event is sent every `chunk` search steps.
    pub fn spawn(mut board: PegBoard, chunk: u64) -> Self {
        let cancel: CancelToken = CancelToken::new();
        let (sender, receiver) = async_channel::bounded::<SolverEvent>(EVENT_QUEUE_SIZE);
        let token: CancelToken = cancel.clone();

        let thread: JoinHandle<PegBoard> = thread::spawn(move || {
            let mut search: Search = Search::new(&board);
            let status: SearchStatus = loop {
                let status: SearchStatus = search.run(&mut board, Some(chunk), &token);
                if status != SearchStatus::Suspended {
                    break status;
                }
                let progress = SolverEvent::Progress {
                    explored: search.explored(),
                    found: search.store().len(),
                };
                if sender.send_blocking(progress).is_err() {
                    debug!("Nobody listens to the search anymore, stopping");
                    search.cancel(&mut board);
                    break SearchStatus::Cancelled;
                }
            };
            debug!("Search thread done: {status:?}");

            let explored: u64 = search.explored();
            // The receiver might be gone already
            let _ = sender.send_blocking(SolverEvent::Finished {
                status,
                explored,
                store: search.into_store(),
            });
            board
        });

        Self {
            cancel,
            events: receiver,
            thread,
        }
    }

    /// Ask the search to stop. A [`SolverEvent::Finished`] event follows.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the next event. Return None when the thread is gone.
    pub fn recv(&self) -> Option<SolverEvent> {
        self.events.recv_blocking().ok()
    }

    /// Wait for the thread to end and return the board, in the state it was before the search.
    ///
    /// Events that have not been received are dropped.
    pub fn join(self) -> Option<PegBoard> {
        let SolverHandle { events, thread, .. } = self;
        drop(events);
        thread.join().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::BoardLayout;
    use crate::solution::SolutionKind;

    #[test]
    fn search_in_background() {
        let board = PegBoard::new(&BoardLayout::new(4, &[1])).unwrap();
        let initial = board.occupancy();
        let handle = SolverHandle::spawn(board, 16);

        let mut progress = 0;
        let result = loop {
            match handle.recv() {
                Some(SolverEvent::Progress { .. }) => progress += 1,
                Some(SolverEvent::Finished {
                    status,
                    explored,
                    store,
                }) => break (status, explored, store),
                None => panic!("search thread ended without a result"),
            }
        };
        assert!(progress > 0);
        assert_eq!(result.0, SearchStatus::Exhausted);
        assert_eq!(result.1, 259);
        assert_eq!(result.2.count(SolutionKind::Ordinary), 14);

        let board = handle.join().unwrap();
        assert_eq!(board.occupancy(), initial);
    }

    #[test]
    fn cancel_in_background() {
        let board = PegBoard::new(&BoardLayout::new(5, &[0])).unwrap();
        let initial = board.occupancy();
        let handle = SolverHandle::spawn(board, 100);

        // Wait for the search to start
        assert!(matches!(handle.recv(), Some(SolverEvent::Progress { .. })));
        handle.cancel();

        let status = loop {
            match handle.recv() {
                Some(SolverEvent::Progress { .. }) => (),
                Some(SolverEvent::Finished { status, .. }) => break status,
                None => panic!("search thread ended without a result"),
            }
        };
        assert_eq!(status, SearchStatus::Cancelled);
        let board = handle.join().unwrap();
        assert_eq!(board.occupancy(), initial);
    }

    #[test]
    fn dropping_the_receiver_stops_the_search() {
        let board = PegBoard::new(&BoardLayout::new(5, &[0])).unwrap();
        let initial = board.occupancy();
        let handle = SolverHandle::spawn(board, 10);
        let board = handle.join().unwrap();
        assert_eq!(board.occupancy(), initial);
    }
}
