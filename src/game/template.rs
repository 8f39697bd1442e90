//! Starting patterns loaded from plain-text files.
//!
//! A template file holds rows of characters separated by newlines. The alive
//! marker `O` is an alive cell, every other character is dead.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::config::game::TEMPLATE_ALIVE_MARKER;
use crate::error::LifeError;
use crate::game::grid::Grid;
use crate::game::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    /// Alive cells, relative to the template's top-left corner.
    cells: Vec<Position>,
}

impl Template {
    /// Read `<dir>/<name>.txt`.
    pub fn load(dir: &Path, name: &str) -> Result<Self, LifeError> {
        let path = dir.join(format!("{}.txt", name));
        let source = fs::read_to_string(&path).map_err(|source| LifeError::TemplateNotFound {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;
        let template = Self::parse(name, &source);
        info!(
            "Loaded template '{}' ({} alive cells) from {}",
            name,
            template.cells.len(),
            path.display()
        );
        Ok(template)
    }

    /// Walk the text with a cursor: the marker sets the cursor cell alive, a
    /// newline moves to the start of the next row, anything else moves right
    /// by one column per `char`.
    pub fn parse(name: &str, source: &str) -> Self {
        let mut cells = Vec::new();
        let (mut x, mut y) = (0, 0);

        for c in source.chars() {
            if c == TEMPLATE_ALIVE_MARKER {
                cells.push(Position { x, y });
            }
            if c == '\n' {
                y += 1;
                x = 0;
            } else {
                x += 1;
            }
        }

        Self {
            name: name.to_string(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Set the template's cells alive on `grid`, shifted by [`stamp_origin`].
    /// Cells falling outside the grid are skipped. Returns how many were set.
    pub fn stamp(&self, grid: &mut Grid) -> usize {
        let origin = stamp_origin(grid.width(), grid.height());
        let mut stamped = 0;

        for cell in &self.cells {
            let (x, y) = (origin.x + cell.x, origin.y + cell.y);
            if grid.contains(x, y) {
                grid.set_alive(x, y);
                stamped += 1;
            }
        }

        let clipped = self.cells.len() - stamped;
        if clipped > 0 {
            debug!(
                "Template '{}' clipped {} cells outside the {}x{} grid",
                self.name,
                clipped,
                grid.width(),
                grid.height()
            );
        }
        stamped
    }
}

/// Top-left corner where templates are stamped: a quarter of each dimension,
/// `(⌊width/2⌋/2, ⌊height/2⌋/2)`.
pub fn stamp_origin(width: usize, height: usize) -> Position {
    Position {
        x: (width / 2) / 2,
        y: (height / 2) / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const GLIDER: &str = ".O.\n..O\nOOO\n";

    #[test]
    fn test_parse_glider() {
        let template = Template::parse("glider", GLIDER);
        assert_eq!(template.name(), "glider");
        assert_eq!(
            template.cells(),
            &[
                Position { x: 1, y: 0 },
                Position { x: 2, y: 1 },
                Position { x: 0, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 2, y: 2 },
            ]
        );
    }

    #[test]
    fn test_parse_treats_other_characters_as_dead() {
        let template = Template::parse("mixed", "o0 xO\n\nO");
        assert_eq!(template.cells(), &[Position { x: 4, y: 0 }, Position { x: 0, y: 2 }]);
    }

    #[test]
    fn test_parse_advances_one_column_per_character() {
        // Multi-byte dead glyphs still take a single column.
        let template = Template::parse("unicode", "·█O
");
        assert_eq!(template.cells(), &[Position { x: 2, y: 0 }]);
    }

    #[test]
    fn test_stamp_origin_is_a_quarter_of_each_dimension() {
        assert_eq!(stamp_origin(20, 20), Position { x: 5, y: 5 });
        assert_eq!(stamp_origin(81, 21), Position { x: 20, y: 5 });
        assert_eq!(stamp_origin(1, 3), Position { x: 0, y: 0 });
    }

    #[test]
    fn test_stamp_clips_cells_outside_the_grid() {
        let template = Template::parse("line", "OOOOOOOOOO\n");
        let mut grid = Grid::new(8, 4);
        // Origin is (2, 1), so only columns 2..8 fit.
        assert_eq!(template.stamp(&mut grid), 6);
        assert_eq!(grid.count_live_cells(), 6);
        assert!(grid.is_alive(7, 1));
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let dir = PathBuf::from("definitely/not/a/templates/dir");
        let err = Template::load(&dir, "nope").unwrap_err();
        match err {
            LifeError::TemplateNotFound { name, path, .. } => {
                assert_eq!(name, "nope");
                assert_eq!(path, dir.join("nope.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_reads_from_dir() {
        let dir = std::env::temp_dir().join(format!("term-life-template-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("glider.txt"), GLIDER).unwrap();

        let template = Template::load(&dir, "glider").unwrap();
        assert_eq!(template.cells().len(), 5);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_bundled_templates_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
        for (name, alive) in [
            ("glider", 5),
            ("blinker", 3),
            ("toad", 6),
            ("beacon", 8),
            ("pulsar", 48),
            ("r_pentomino", 5),
            ("glider_gun", 36),
        ] {
            let template = Template::load(&dir, name).unwrap();
            assert_eq!(template.cells().len(), alive, "{name}");
        }
    }
}
