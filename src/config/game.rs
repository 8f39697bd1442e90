/// Game configuration constants.
///
/// This module defines the default simulation parameters, used whenever the
/// query-string argument does not override them.
pub const DEFAULT_RANDOM: bool = true;

/// Inverse density of random alive cells. A cell is alive with probability 1/(RAND_MAX + 1).
pub const DEFAULT_RAND_MAX: u32 = 5;

/// Delay between two rendered frames, in microseconds.
pub const DEFAULT_TIMEOUT_MICROS: u64 = 5000;

/// Render every frame, or only compute and render the last one.
pub const DEFAULT_REALTIME: bool = true;

/// Maximum number of frames. 0 means unbounded.
pub const DEFAULT_MAX_FRAME_COUNT: u64 = 0;

/// Keep running even when the stagnation detector reports a loop.
pub const DEFAULT_KEEP_ALIVE: bool = false;

/// Glyph printed for an alive cell.
pub const DEFAULT_CELL_GLYPH: &str = "O";

/// Glyph printed for a dead cell.
pub const DEFAULT_EMPTY_GLYPH: &str = " ";

/// Directory searched for `<name>.txt` pattern files.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Character marking an alive cell in a template file.
pub const TEMPLATE_ALIVE_MARKER: char = 'O';

/// Terminal rows kept free below the grid (footer rule, status line, prompt).
pub const FOOTER_ROWS: usize = 3;

/// Smallest width or height a grid may have.
pub const MIN_DIMENSION: usize = 1;

/// Terminal size assumed when the real one cannot be queried.
pub const FALLBACK_TERMINAL_COLUMNS: u16 = 80;
pub const FALLBACK_TERMINAL_ROWS: u16 = 24;

/// Number of grid fingerprints kept by the stagnation detector.
pub const HISTORY_CAPACITY: usize = 11;

/// Number of equal fingerprints in the history that counts as an endless loop.
pub const LOOP_THRESHOLD: usize = 4;
