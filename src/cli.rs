//! Command-line surface.
//!
//! The binary takes a single positional argument: either `help`, or a
//! query string of options such as `timeout=250000&rand_max=5`.

use log::warn;

use crate::config::TerminalSize;
use crate::config::game::{FALLBACK_TERMINAL_COLUMNS, FALLBACK_TERMINAL_ROWS};

pub const HELP_TEXT: &str = "
  Conway's Game of Life in the terminal
 ---------------------------------------
  Options:
  - random (default=1): Populate the grid with random cells
  - rand_max (default=5): A cell is alive with chance 1/(rand_max+1). Lower means more alive cells
  - timeout (default=5000): Microseconds between rendered frames
  - realtime (default=1): Render every frame, or only compute and render the last one
  - max_frame_count (default=0): Stop after this many frames, 0 for no limit
  - keep_alive (default=0): Keep running when the grid repeats itself
  - template: Load a pattern from templates/<template>.txt
  - cell (default=O): Alive cell character
  - empty (default=space): Dead cell character
  - width (default=terminal columns): Grid width
  - height (default=terminal rows - 3): Grid height
  - seed: Seed for the random grid
  - templates_dir (default=templates): Where templates are looked up

  Options use the query string format. Examples:
  - life 'template=glider_gun'
  - life 'timeout=250000&rand_max=5&max_frame_count=1000'
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run { query: String },
}

/// Interpret the arguments following the program name.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Command {
    let mut args = args.into_iter();
    let command = match args.next() {
        Some(arg) if arg == "help" => Command::Help,
        Some(query) => Command::Run { query },
        None => Command::Run { query: String::new() },
    };
    if args.next().is_some() {
        warn!("Only the first argument is used, ignoring the rest");
    }
    command
}

pub fn print_help() {
    println!("{}", HELP_TEXT);
}

/// Current terminal size, or 80x24 when it cannot be queried.
pub fn terminal_size() -> TerminalSize {
    match crossterm::terminal::size() {
        Ok((columns, rows)) => TerminalSize { columns, rows },
        Err(err) => {
            warn!(
                "Could not query terminal size ({}), assuming {}x{}",
                err, FALLBACK_TERMINAL_COLUMNS, FALLBACK_TERMINAL_ROWS
            );
            TerminalSize {
                columns: FALLBACK_TERMINAL_COLUMNS,
                rows: FALLBACK_TERMINAL_ROWS,
            }
        }
    }
}
