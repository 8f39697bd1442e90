//! Generation advance.
//!
//! Conway's rules, applied to every cell at once:
//! 1. An alive cell with fewer than 2 or more than 3 alive neighbors dies.
//! 2. An alive cell with 2 or 3 alive neighbors lives on.
//! 3. A dead cell with exactly 3 alive neighbors becomes alive.

use log::trace;

use crate::game::grid::Grid;
use crate::game::types::{GenerationDelta, Position};

/// Advance `grid` by one generation.
///
/// The first pass reads only the current state and queues the cells to kill
/// and to bring to life. The second pass applies all kills, then all births,
/// so no cell ever sees a neighbor that was already updated.
pub fn next_generation(grid: &mut Grid) -> GenerationDelta {
    let mut kill_queue = Vec::new();
    let mut born_queue = Vec::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let neighbor_count = grid.count_alive_neighbors(x, y);
            let alive = grid.is_alive(x, y);

            if alive && !(2..=3).contains(&neighbor_count) {
                kill_queue.push(Position { x, y });
            } else if !alive && neighbor_count == 3 {
                born_queue.push(Position { x, y });
            }
        }
    }

    for pos in &kill_queue {
        grid.kill(pos.x, pos.y);
    }
    for pos in &born_queue {
        grid.set_alive(pos.x, pos.y);
    }

    trace!("Generation advanced: {} died, {} born", kill_queue.len(), born_queue.len());

    GenerationDelta {
        died: kill_queue.len(),
        born: born_queue.len(),
    }
}
