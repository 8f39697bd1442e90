//! Main entry point for the terminal Game of Life.
//!
//! Parses the single query-string argument, resolves the configuration against
//! the terminal size, builds the simulation and runs it until it stops on its
//! own (frame limit or detected loop).

use std::io::{self, BufWriter};
use std::process::ExitCode;

use log::{debug, error, info};

use term_life::cli::{self, Command};
use term_life::config::SimulationConfig;
use term_life::error::LifeError;
use term_life::game::game_loop::run_game_loop;
use term_life::game::state::Simulation;
use term_life::game::systems::TerminalRenderer;
use term_life::game::types::RunSummary;

fn main() -> ExitCode {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let query = match cli::parse_args(std::env::args().skip(1)) {
        Command::Help => {
            cli::print_help();
            return ExitCode::SUCCESS;
        }
        Command::Run { query } => query,
    };

    match run(&query) {
        Ok(summary) => {
            info!("Finished: {:?}", summary);
            println!("Bye!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("life: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(query: &str) -> Result<RunSummary, LifeError> {
    let config = SimulationConfig::from_query(query, cli::terminal_size())?;
    debug!("Resolved config: {}", serde_json::to_string(&config)?);

    // Fails here, before anything is drawn, if the template is missing.
    let mut simulation = Simulation::new(config)?;

    let stdout = io::stdout();
    let mut renderer = TerminalRenderer::new(
        BufWriter::new(stdout.lock()),
        simulation.config().cell.clone(),
        simulation.config().empty.clone(),
    );
    let summary = run_game_loop(&mut simulation, &mut renderer)?;
    debug!("Run summary: {}", serde_json::to_string(&summary)?);
    Ok(summary)
}
