//! Concurrent generation stepping.
//!
//! A worker pool is spawned for each step and dropped when the step
//! returns. Rows are split into partitions; workers claim partitions one at
//! a time from a shared counter, so whoever finishes first absorbs the
//! remainder. Workers only read the previous generation and only write
//! their own partition of the current one.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::trace;

use super::board::Board;
use super::cell::Cell;
use super::coordinate::Coordinate;
use crate::error::Result;

/// Partitions handed out per worker; more than one keeps workers busy when
/// live cells cluster in a few rows
const PARTITIONS_PER_WORKER: usize = 4;

/// Number of processing units, at least one
pub fn available_workers() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

impl Board {
    /// Advance one generation using one worker per processing unit.
    ///
    /// Produces exactly the grid and alive count of [`Board::next_generation`].
    /// Blocks until every worker has finished; growth observers then run on
    /// the calling thread.
    pub fn next_generation_concurrent(&mut self) -> Result<()> {
        self.next_generation_with_workers(available_workers())
    }

    /// Advance one generation with a pool of `workers` threads
    pub fn next_generation_with_workers(&mut self, workers: usize) -> Result<()> {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("life-step-{i}"))
            .build()?;

        let interest = self.begin_step();
        let evaluated = interest.len();
        let (ctx, current) = self.step_parts();
        let cols = ctx.cols;

        let rows_per_partition = ctx.rows.div_ceil(workers * PARTITIONS_PER_WORKER).max(1);
        let partition_len = rows_per_partition * cols;

        // Each region is locked by exactly one worker, once
        let regions: Vec<Mutex<&mut [Cell]>> =
            current.chunks_mut(partition_len).map(Mutex::new).collect();
        let mut buckets: Vec<Vec<Coordinate>> = vec![Vec::new(); regions.len()];
        for coord in interest {
            buckets[coord.row / rows_per_partition].push(coord);
        }

        let next_partition = AtomicUsize::new(0);
        let alive = AtomicUsize::new(0);

        pool.scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|_| {
                    loop {
                        let index = next_partition.fetch_add(1, Ordering::Relaxed);
                        let Some(region) = regions.get(index) else {
                            break;
                        };
                        let mut region = region.lock().unwrap_or_else(PoisonError::into_inner);
                        let base = index * partition_len;
                        let mut born = 0;
                        for &coord in &buckets[index] {
                            if ctx.next_state(coord) {
                                region[coord.row * cols + coord.col - base].resurrect();
                                born += 1;
                            }
                        }
                        trace!(partition = index, born, "partition evaluated");
                        alive.fetch_add(born, Ordering::Relaxed);
                    }
                });
            }
        });

        // The scope has joined every worker at this point
        drop(regions);
        self.finish_step(alive.into_inner(), evaluated);
        Ok(())
    }

    /// Advance `n` generations concurrently
    pub fn advance_concurrent(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.next_generation_concurrent()?;
        }
        Ok(())
    }
}
