use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Lifecycle of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Running,
    Draining,
    Terminated,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// `max_frame_count` frames were computed.
    MaxFrames,
    /// The stagnation detector saw the same grid too often.
    EndlessLoop,
}

/// Number of cells that changed state in one generation advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationDelta {
    pub died: usize,
    pub born: usize,
}

impl GenerationDelta {
    pub fn is_empty(&self) -> bool {
        self.died == 0 && self.born == 0
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub frame_count: u64,
    pub live_cells: usize,
    pub reason: StopReason,
}
