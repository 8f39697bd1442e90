//! Endless-loop detection.
//!
//! Keeps the fingerprints of the last [`HISTORY_CAPACITY`] generations in a
//! ring buffer. When one fingerprint shows up [`LOOP_THRESHOLD`] times, the
//! grid is considered static or stuck in a short oscillation.
//!
//! This is a heuristic. Oscillators with a long period, or cycles that do not
//! repeat often enough inside the window, are not detected.

use crate::config::game::{HISTORY_CAPACITY, LOOP_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagnationDetector {
    history: [Option<u64>; HISTORY_CAPACITY],
    // Next slot to overwrite.
    pointer: usize,
}

impl StagnationDetector {
    pub fn new() -> Self {
        Self {
            history: [None; HISTORY_CAPACITY],
            pointer: 0,
        }
    }

    /// Store a fingerprint, overwriting the oldest one once the buffer is full.
    pub fn record(&mut self, fingerprint: u64) {
        self.history[self.pointer] = Some(fingerprint);
        self.pointer = (self.pointer + 1) % HISTORY_CAPACITY;
    }

    /// True if any retained fingerprint occurs at least [`LOOP_THRESHOLD`] times.
    pub fn is_endless_loop(&self) -> bool {
        let retained = || self.history.iter().flatten();
        retained().any(|hash| retained().filter(|other| *other == hash).count() >= LOOP_THRESHOLD)
    }
}

impl Default for StagnationDetector {
    fn default() -> Self {
        Self::new()
    }
}
