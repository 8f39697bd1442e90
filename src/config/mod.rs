/// Main configuration module.
///
/// Re-exports the default constants and the query-string options layer.
pub mod game;
pub mod options;

pub use options::{SimulationConfig, TerminalSize};
