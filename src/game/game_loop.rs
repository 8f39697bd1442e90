//! Main simulation loop.
//!
//! Steps the simulation until a stop condition fires, then drains it.

use log::info;

use crate::error::LifeError;
use crate::game::state::Simulation;
use crate::game::systems::Renderer;
use crate::game::types::RunSummary;

/// Run the loop to completion.
pub fn run_game_loop<R: Renderer + ?Sized>(
    simulation: &mut Simulation,
    renderer: &mut R,
) -> Result<RunSummary, LifeError> {
    info!(
        "Game start: {}x{} grid, {} live cells",
        simulation.grid().width(),
        simulation.grid().height(),
        simulation.grid().count_live_cells()
    );

    let reason = loop {
        if let Some(reason) = simulation.step(renderer)? {
            break reason;
        }
    };

    let summary = simulation.finish(renderer, reason)?;
    info!(
        "Game over after {} frames ({:?}), {} live cells left",
        summary.frame_count, summary.reason, summary.live_cells
    );
    Ok(summary)
}
