//! Row-band partitioning of the board interior across workers.
//!
//! The interior rows `[1, height - 2]` are split into contiguous,
//! non-overlapping bands, one per worker. Rows divide as evenly as possible:
//! every worker gets `interior_rows / workers` rows and the first
//! `interior_rows % workers` workers take one extra. With more workers than
//! rows, trailing workers get an empty band and simply sit out the compute
//! phase (they still participate in barrier synchronization).

use std::ops::RangeInclusive;

/// One worker's assignment: a contiguous band of interior rows.
///
/// Immutable once computed. `end_row < start_row` encodes an empty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Id of the worker this band belongs to, in `[0, workers)`.
    pub worker_id: usize,
    /// First interior row of the band (inclusive).
    pub start_row: usize,
    /// Last interior row of the band (inclusive).
    pub end_row: usize,
    /// Whether this worker is the designated leader that performs the buffer
    /// swap between generations. Decided here, at partition time, so the
    /// election strategy stays in one place.
    pub is_leader: bool,
}

impl Band {
    /// The rows of this band; empty when the band is empty.
    #[must_use]
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.start_row..=self.end_row
    }

    /// Number of rows in this band.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.end_row < self.start_row { 0 } else { self.end_row - self.start_row + 1 }
    }

    /// Whether this band holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end_row < self.start_row
    }
}

/// Split `interior_rows` rows among `workers` workers.
///
/// Bands are contiguous, non-overlapping, and together cover exactly the
/// interior rows `[1, interior_rows]`. Worker 0 is the leader.
///
/// # Panics
/// Panics if `workers` is zero; callers validate the thread count first.
///
/// # Example
/// ```
/// use parlife_lib::partition::partition;
///
/// let bands = partition(10, 3);
/// assert_eq!(bands.len(), 3);
/// assert_eq!((bands[0].start_row, bands[0].end_row), (1, 4));
/// assert_eq!((bands[1].start_row, bands[1].end_row), (5, 7));
/// assert_eq!((bands[2].start_row, bands[2].end_row), (8, 10));
/// assert!(bands[0].is_leader);
/// ```
#[must_use]
pub fn partition(interior_rows: usize, workers: usize) -> Vec<Band> {
    assert!(workers > 0, "partition requires at least one worker");
    let rows_per_worker = interior_rows / workers;
    let extra = interior_rows % workers;
    (0..workers)
        .map(|worker_id| {
            let start_row = 1 + worker_id * rows_per_worker + worker_id.min(extra);
            let len = rows_per_worker + usize::from(worker_id < extra);
            Band {
                worker_id,
                start_row,
                // Empty band: end_row lands one below start_row.
                end_row: start_row + len - 1,
                is_leader: worker_id == 0,
            }
        })
        .collect()
}
