//! Barrier-synchronized parallel stepping engine.
//!
//! [`simulate`] advances a [`Board`] by a fixed number of generations using a
//! pool of worker threads created for the duration of the call. The interior
//! rows are partitioned once into contiguous bands (see [`crate::partition`]),
//! and every worker runs the full generation loop over its own band:
//!
//! ```text
//! for each generation:
//!     compute next state of own band into the back buffer
//!     barrier A            // all compute writes finished
//!     leader swaps buffers // exactly one worker flips front/back
//!     barrier B            // swap visible before anyone reads again
//! ```
//!
//! Both barriers are required. Barrier A guarantees no worker swaps while
//! another is still reading the old front or writing the back; barrier B
//! guarantees no worker starts the next generation against a pre-swap board.
//! Workers write disjoint rows of the back buffer and only read the front, so
//! the protocol needs no per-cell locking.
//!
//! Workers block only at the two barriers; the hot loop performs no I/O,
//! locking, or allocation. Thread-creation failure is a setup failure: the
//! simulation attempt is abandoned before any generation runs and the error
//! names the worker that could not be started.

use crate::board::Board;
use crate::errors::{LifeError, Result};
use crate::partition::{Band, partition};
use crate::rules::next_state;
use crate::validation::validate_thread_count;
use log::debug;
use parking_lot::{Condvar, Mutex};
use std::sync::Barrier;
use std::thread;

/// Everything one worker needs, fixed before its thread starts.
#[derive(Clone, Copy)]
struct WorkerContext<'a> {
    band: Band,
    steps: usize,
    board: &'a Board,
    barrier: &'a Barrier,
    gate: &'a StartGate,
}

/// Rendezvous that holds workers until setup has fully succeeded.
///
/// Workers wait here before entering the generation loop. If any later spawn
/// fails, the coordinator releases the gate with `run = false` and the
/// already-started workers return without ever touching the barrier, so a
/// partial worker set can never deadlock on it.
struct StartGate {
    decision: Mutex<Option<bool>>,
    released: Condvar,
}

impl StartGate {
    fn new() -> Self {
        Self { decision: Mutex::new(None), released: Condvar::new() }
    }

    /// Release all waiting workers; `run` says whether they should simulate.
    fn release(&self, run: bool) {
        *self.decision.lock() = Some(run);
        self.released.notify_all();
    }

    /// Block until released; returns whether to run.
    fn wait(&self) -> bool {
        let mut decision = self.decision.lock();
        loop {
            if let Some(run) = *decision {
                return run;
            }
            self.released.wait(&mut decision);
        }
    }
}

/// One worker's generation loop. Runs on its own thread for the whole
/// simulation; an empty band still arrives at every barrier so the protocol
/// counts stay correct.
fn run_worker(ctx: WorkerContext<'_>) {
    if !ctx.gate.wait() {
        return;
    }
    let width = ctx.board.width();
    for _ in 0..ctx.steps {
        for y in ctx.band.rows() {
            for x in 1..width - 1 {
                ctx.board.set_next(x, y, next_state(ctx.board, x, y));
            }
        }
        // Barrier A: every worker has finished reading the front buffer and
        // writing its band of the back buffer.
        ctx.barrier.wait();
        if ctx.band.is_leader {
            ctx.board.swap();
        }
        // Barrier B: the swap is visible to all workers before any of them
        // begins the next generation's reads.
        ctx.barrier.wait();
    }
}

/// Advance `board` by exactly `steps` generations using `threads` workers.
///
/// The board is updated in place; with `steps == 0` it is left untouched
/// (workers are still set up and torn down). The final state is identical for
/// any thread count, including counts larger than the number of interior rows.
///
/// # Errors
/// Returns [`LifeError::InvalidParameter`] if `threads` is zero,
/// [`LifeError::WorkerSpawn`] if the OS refuses to create a worker thread, and
/// [`LifeError::WorkerPanicked`] if a worker dies mid-simulation.
pub fn simulate(threads: usize, board: &Board, steps: usize) -> Result<()> {
    validate_thread_count(threads)?;
    let bands = partition(board.height() - 2, threads);
    let barrier = Barrier::new(threads);
    let gate = StartGate::new();
    debug!(
        "Simulating {steps} generation(s) of a {}x{} board on {threads} worker(s)",
        board.width(),
        board.height()
    );

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);
        for band in bands {
            let ctx = WorkerContext { band, steps, board, barrier: &barrier, gate: &gate };
            let spawned = thread::Builder::new()
                .name(format!("life-worker-{}", band.worker_id))
                .spawn_scoped(scope, move || run_worker(ctx));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    // Unwind the partially started pool: released workers see
                    // run = false and exit before reaching the barrier.
                    gate.release(false);
                    for handle in handles {
                        let _ = handle.join();
                    }
                    return Err(LifeError::WorkerSpawn { worker_id: band.worker_id, source });
                }
            }
        }
        gate.release(true);

        let mut panicked = None;
        for (worker_id, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(worker_id);
            }
        }
        match panicked {
            Some(worker_id) => Err(LifeError::WorkerPanicked { worker_id }),
            None => Ok(()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 7x7 board with a small asymmetric seed in the middle.
    fn seeded_board() -> Board {
        let board = Board::new(7, 7).unwrap();
        for &(x, y) in &[(2, 2), (3, 2), (4, 2), (4, 3), (3, 4)] {
            board.set(x, y, true);
        }
        board
    }

    #[test]
    fn test_zero_steps_leaves_board_unchanged() {
        let board = seeded_board();
        let before = board.snapshot();
        simulate(3, &board, 0).unwrap();
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let board = seeded_board();
        let result = simulate(0, &board, 5);
        assert!(matches!(result, Err(LifeError::InvalidParameter { .. })));
    }

    #[test]
    fn test_single_worker_matches_hand_computed_step() {
        // Horizontal blinker centered on (2, 2) of a 5x5 board.
        let board = Board::new(5, 5).unwrap();
        for x in 1..=3 {
            board.set(x, 2, true);
        }
        simulate(1, &board, 1).unwrap();
        let expected = Board::new(5, 5).unwrap();
        for y in 1..=3 {
            expected.set(2, y, true);
        }
        assert_eq!(board.snapshot(), expected.snapshot());
    }

    #[test]
    fn test_thread_counts_agree() {
        let reference = seeded_board();
        simulate(1, &reference, 6).unwrap();
        for threads in [2, 3, 5, 17] {
            let board = seeded_board();
            simulate(threads, &board, 6).unwrap();
            assert_eq!(
                board.snapshot(),
                reference.snapshot(),
                "thread count {threads} diverged from single-worker result"
            );
        }
    }

    #[test]
    fn test_more_workers_than_interior_rows() {
        // 5 interior rows, 12 workers: trailing workers get empty bands but
        // must still keep the barrier protocol in step.
        let board = seeded_board();
        let reference = seeded_board();
        simulate(1, &reference, 4).unwrap();
        simulate(12, &board, 4).unwrap();
        assert_eq!(board.snapshot(), reference.snapshot());
    }

    #[test]
    fn test_border_stays_dead() {
        let board = Board::new(6, 6).unwrap();
        // Fill the whole interior so the border is under maximum pressure.
        for y in 1..=4 {
            for x in 1..=4 {
                board.set(x, y, true);
            }
        }
        simulate(2, &board, 3).unwrap();
        let w = board.width();
        let h = board.height();
        for x in 0..w {
            assert!(!board.get(x, 0));
            assert!(!board.get(x, h - 1));
        }
        for y in 0..h {
            assert!(!board.get(0, y));
            assert!(!board.get(w - 1, y));
        }
    }

    #[test]
    fn test_start_gate_releases_waiters() {
        let gate = StartGate::new();
        thread::scope(|scope| {
            let waiter = scope.spawn(|| gate.wait());
            gate.release(true);
            assert!(waiter.join().unwrap());
        });
    }
}
