//! Simulation state and the per-frame step.
//!
//! A [`Simulation`] owns the config, the grid and the stagnation detector for
//! the whole run and moves through [`Phase`]s:
//! `Initializing -> Running -> Draining -> Terminated`.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SimulationConfig;
use crate::error::LifeError;
use crate::game::grid::Grid;
use crate::game::systems::{Renderer, StagnationDetector, Status, next_generation};
use crate::game::template::Template;
use crate::game::types::{GenerationDelta, Phase, RunSummary, StopReason};

#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    detector: StagnationDetector,
    frame_count: u64,
    phase: Phase,
    started_at: Instant,
}

impl Simulation {
    /// Build and populate the grid. Fails if the template cannot be read, in
    /// which case nothing has been rendered yet.
    pub fn new(config: SimulationConfig) -> Result<Self, LifeError> {
        let grid = Grid::new(config.width, config.height);
        let mut simulation = Self {
            config,
            grid,
            detector: StagnationDetector::new(),
            frame_count: 0,
            phase: Phase::Initializing,
            started_at: Instant::now(),
        };
        simulation.initialize()?;
        Ok(simulation)
    }

    fn initialize(&mut self) -> Result<(), LifeError> {
        let config = &self.config;
        let (random, rand_max) = (config.random, config.rand_max);
        match config.seed {
            Some(seed) => self.grid.populate(random, rand_max, &mut StdRng::seed_from_u64(seed)),
            None => self.grid.populate(random, rand_max, &mut rand::rng()),
        }

        if let Some(name) = &config.template {
            let template = Template::load(&config.templates_dir, name)?;
            let stamped = template.stamp(&mut self.grid);
            debug!(
                "Stamped {} of {} cells from template '{}'",
                stamped,
                template.cells().len(),
                template.name()
            );
        }

        info!(
            "Initialized {}x{} grid with {} live cells",
            self.grid.width(),
            self.grid.height(),
            self.grid.count_live_cells()
        );
        self.phase = Phase::Running;
        Ok(())
    }

    /// Run one frame: optionally render and wait, then advance the grid.
    /// Returns the stop reason once a termination condition is met.
    pub fn step<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<Option<StopReason>, LifeError> {
        self.frame_count += 1;

        if self.config.realtime {
            renderer.render_grid(&self.grid)?;
            renderer.render_footer(self.grid.width(), &self.status())?;
            thread::sleep(Duration::from_micros(self.config.timeout));
            renderer.clear()?;
        }

        let delta = self.advance();
        if delta.is_empty() {
            trace!("Frame {}: no change", self.frame_count);
        } else {
            trace!("Frame {}: {} died, {} born", self.frame_count, delta.died, delta.born);
        }

        let reason = self.stop_reason();
        if let Some(reason) = reason {
            debug!("Stopping after frame {}: {:?}", self.frame_count, reason);
            self.phase = Phase::Draining;
        }
        Ok(reason)
    }

    fn advance(&mut self) -> GenerationDelta {
        let delta = next_generation(&mut self.grid);
        if !self.config.keep_alive {
            self.detector.record(self.grid.fingerprint());
        }
        delta
    }

    /// Frame budget exhausted, or (unless kept alive) the grid is looping.
    pub fn stop_reason(&self) -> Option<StopReason> {
        if self.config.max_frame_count > 0 && self.frame_count >= self.config.max_frame_count {
            return Some(StopReason::MaxFrames);
        }
        if !self.config.keep_alive && self.detector.is_endless_loop() {
            return Some(StopReason::EndlessLoop);
        }
        None
    }

    /// Drain and terminate. Runs without realtime rendering get their only
    /// frame drawn here.
    pub fn finish<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        reason: StopReason,
    ) -> Result<RunSummary, LifeError> {
        if !self.config.realtime {
            renderer.clear()?;
            renderer.render_grid(&self.grid)?;
        }
        self.phase = Phase::Terminated;

        Ok(RunSummary {
            frame_count: self.frame_count,
            live_cells: self.grid.count_live_cells(),
            reason,
        })
    }

    pub fn status(&self) -> Status {
        Status {
            frame_count: self.frame_count,
            live_cells: self.grid.count_live_cells(),
            elapsed_secs: self.started_at.elapsed().as_secs(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
