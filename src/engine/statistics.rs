// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics.
//!
//! Counters are kept in a flat array indexed by variant and are incremented
//! by the search drivers as they run. They are observational only; nothing
//! in the engine reads them back.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The events the drivers count.
#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Complete covers delivered to the callback.
    Solutions,
    /// Rows descended into.
    Branches,
    /// Rows undone on the way back up.
    Backtracks,
}

/// Flat counter storage for one solve.
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
