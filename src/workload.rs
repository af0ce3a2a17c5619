//! The sort/reverse driver loop.
//!
//! The seed is ascending, so the first sort sees sorted input and every later
//! sort sees the reversed output of the previous one. Both are the worst case
//! for a first-element pivot.

use std::time::Instant;

use clap::ValueEnum;
use thiserror::Error;
use tracing::{info, info_span, trace};

use crate::qsort::{normal, stack};
use crate::reverse::reverse;

/// Longest sequence the recursive routine is allowed to run on. Depth equals
/// the length on the driver's input.
pub const MAX_RECURSIVE_LEN: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// `qsort::normal`
    #[default]
    Recursive,
    /// `qsort::stack`
    Stack,
}

impl Strategy {
    pub fn sort(self, v: &mut [i32]) {
        match self {
            Strategy::Recursive => normal::qsort(v),
            Strategy::Stack => stack::qsort(v),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("seed of length {len} does not fit in i32")]
    SeedOverflow { len: usize },
    #[error("length {len} exceeds {max} for the recursive strategy, use --strategy stack")]
    RecursionTooDeep { len: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    pub len: usize,
    pub rounds: usize,
    pub strategy: Strategy,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            len: 1000,
            rounds: 10_000,
            strategy: Strategy::Recursive,
        }
    }
}

impl Workload {
    pub fn validate(&self) -> Result<(), WorkloadError> {
        if self.strategy == Strategy::Recursive && self.len > MAX_RECURSIVE_LEN {
            return Err(WorkloadError::RecursionTooDeep {
                len: self.len,
                max: MAX_RECURSIVE_LEN,
            });
        }
        Ok(())
    }

    /// `[0, 2, 4, ..]` of length `self.len`.
    pub fn seed(&self) -> Result<Vec<i32>, WorkloadError> {
        let fits = i32::try_from(self.len.saturating_sub(1))
            .ok()
            .and_then(|last| last.checked_mul(2))
            .is_some();
        if !fits {
            return Err(WorkloadError::SeedOverflow { len: self.len });
        }

        Ok((0..self.len as i32).map(|i| i * 2).collect())
    }

    /// Seeds a fresh buffer, runs every round on it and returns it.
    pub fn run(&self) -> Result<Vec<i32>, WorkloadError> {
        self.validate()?;
        let mut v = self.seed()?;
        self.run_on(&mut v);
        Ok(v)
    }

    pub fn run_on(&self, v: &mut [i32]) {
        self.run_with(v, |_, _| {});
    }

    /// Runs every round on `v`, handing it to `on_sorted` right after each
    /// sort step, before the reverse.
    pub fn run_with<F>(&self, v: &mut [i32], mut on_sorted: F)
    where
        F: FnMut(usize, &[i32]),
    {
        let span = info_span!(
            "workload",
            len = v.len(),
            rounds = self.rounds,
            strategy = ?self.strategy
        );
        let _enter = span.enter();

        info!("starting");
        let started = Instant::now();

        for round in 0..self.rounds {
            self.strategy.sort(v);
            on_sorted(round, &*v);
            reverse(v);
            trace!(round, "round done");
        }

        info!(elapsed = ?started.elapsed(), "finished");
    }
}
