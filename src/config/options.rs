//! Simulation options.
//!
//! Options arrive as a single query-string argument (`key1=val1&key2=val2`).
//! They are merged over the defaults from [`crate::config::game`] and the
//! current terminal size, then frozen into a [`SimulationConfig`].

use std::path::PathBuf;

use log::warn;
use serde::Serialize;

use crate::config::game::*;
use crate::error::ConfigError;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

/// Immutable set of options for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub random: bool,
    pub rand_max: u32,
    /// Microseconds slept between rendered frames.
    pub timeout: u64,
    pub realtime: bool,
    pub max_frame_count: u64,
    pub keep_alive: bool,
    pub template: Option<String>,
    pub cell: String,
    pub empty: String,
    pub seed: Option<u64>,
    pub templates_dir: PathBuf,
}

impl SimulationConfig {
    /// Defaults for a terminal of the given size. The grid fills the terminal
    /// minus the footer rows.
    pub fn defaults(terminal: TerminalSize) -> Self {
        Self {
            width: usize::from(terminal.columns),
            height: usize::from(terminal.rows).saturating_sub(FOOTER_ROWS),
            random: DEFAULT_RANDOM,
            rand_max: DEFAULT_RAND_MAX,
            timeout: DEFAULT_TIMEOUT_MICROS,
            realtime: DEFAULT_REALTIME,
            max_frame_count: DEFAULT_MAX_FRAME_COUNT,
            keep_alive: DEFAULT_KEEP_ALIVE,
            template: None,
            cell: DEFAULT_CELL_GLYPH.to_string(),
            empty: DEFAULT_EMPTY_GLYPH.to_string(),
            seed: None,
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
        }
    }

    /// Build a config from the query-string argument.
    ///
    /// When `template` is given and `random` is not, random population is
    /// turned off. Zero dimensions are clamped to [`MIN_DIMENSION`].
    pub fn from_query(query: &str, terminal: TerminalSize) -> Result<Self, ConfigError> {
        let mut config = Self::defaults(terminal);
        let mut random_given = false;
        let mut template_given = false;

        for (key, value) in parse_query(query)? {
            match key.as_str() {
                "random" => {
                    config.random = parse_flag(&key, &value)?;
                    random_given = true;
                }
                "rand_max" => config.rand_max = parse_number(&key, &value)?,
                "timeout" => config.timeout = parse_number(&key, &value)?,
                "realtime" => config.realtime = parse_flag(&key, &value)?,
                "max_frame_count" => config.max_frame_count = parse_number(&key, &value)?,
                "keep_alive" => config.keep_alive = parse_flag(&key, &value)?,
                "template" => {
                    template_given = true;
                    config.template = (!value.is_empty()).then_some(value);
                }
                "cell" => config.cell = value,
                "empty" => config.empty = value,
                "width" => config.width = parse_number(&key, &value)?,
                "height" => config.height = parse_number(&key, &value)?,
                "seed" => config.seed = Some(parse_number(&key, &value)?),
                "templates_dir" => config.templates_dir = PathBuf::from(value),
                _ => warn!("Ignoring unknown option '{}'", key),
            }
        }

        if template_given && !random_given {
            config.random = false;
        }

        config.width = clamp_dimension("width", config.width);
        config.height = clamp_dimension("height", config.height);

        if config.cell.is_empty() {
            return Err(ConfigError::EmptyGlyph { key: "cell" });
        }
        if config.empty.is_empty() {
            return Err(ConfigError::EmptyGlyph { key: "empty" });
        }

        Ok(config)
    }
}

/// Split a query string into decoded key/value pairs, in order.
/// `+` decodes to a space, a key without `=` gets an empty value.
pub fn parse_query(query: &str) -> Result<Vec<(String, String)>, ConfigError> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key, raw_key)?;
            let value = decode_component(&key, raw_value)?;
            Ok((key, value))
        })
        .collect()
}

fn decode_component(key: &str, raw: &str) -> Result<String, ConfigError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|source| ConfigError::Encoding {
            key: key.to_string(),
            source,
        })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "a boolean (1/0, true/false, yes/no, on/off)",
        }),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected: "a non-negative integer",
    })
}

fn clamp_dimension(key: &str, value: usize) -> usize {
    if value < MIN_DIMENSION {
        warn!("Grid {} resolved to {}, clamping to {}", key, value, MIN_DIMENSION);
        MIN_DIMENSION
    } else {
        value
    }
}
