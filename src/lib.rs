//! Conway's Game of Life on a bounded grid, rendered to a terminal.
//!
//! - [`game::grid`]: cell storage and neighbor counting
//! - [`game::systems`]: generation rules, stagnation detection and rendering
//! - [`game::template`]: starting patterns from `templates/<name>.txt`
//! - [`game::state`] / [`game::game_loop`]: the frame loop
//! - [`config`]: defaults and the query-string options layer

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
