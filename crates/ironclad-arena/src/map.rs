//! Text map-file loader and writer.
//!
//! Format, line by line: a free-form description; `MaxSteps=<N>`;
//! `NumShells=<N>`; `Rows=<H>`; `Cols=<W>`; then `H` rows of `W` cell
//! characters. Short rows are padded with spaces, extra characters and
//! rows are ignored, and unrecognized characters read as empty terrain.
//! `1` and `2` place tanks in file order.

use std::fs;
use std::path::Path;

use thiserror::Error;

use ironclad_core::enums::{Cell, Player};
use ironclad_core::types::Position;

use crate::grid::Arena;

/// A tank's starting cell, in map scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TankSpawn {
    pub position: Position,
    pub player: Player,
}

/// A parsed, validated map: header parameters, terrain, and tank spawns.
#[derive(Debug, Clone)]
pub struct MapFile {
    /// The description line. Not interpreted by the kernel.
    pub name: String,
    pub max_steps: u32,
    pub num_shells: u32,
    pub arena: Arena,
    pub spawns: Vec<TankSpawn>,
}

/// Configuration errors. All of these are fatal before the tick loop
/// starts; none can occur mid-game.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("map file ended before the {0} line")]
    MissingLine(&'static str),
    #[error("line {line}: expected `{key}=<number>`")]
    BadHeader { line: usize, key: &'static str },
    #[error("grid dimensions must be at least 1×1 (got {rows} rows × {cols} cols)")]
    BadDimensions { rows: u32, cols: u32 },
    #[error("player {0} has no tanks on the map")]
    NoTanks(u8),
}

impl MapFile {
    /// Load and parse a map file from disk.
    pub fn load(path: &Path) -> Result<MapFile, MapError> {
        let text = fs::read_to_string(path)?;
        MapFile::parse(&text)
    }

    /// Parse the text form of a map.
    pub fn parse(text: &str) -> Result<MapFile, MapError> {
        let mut lines = text.lines();

        let name = lines
            .next()
            .ok_or(MapError::MissingLine("description"))?
            .to_string();
        let max_steps = parse_header(lines.next(), "MaxSteps", 2)?;
        let num_shells = parse_header(lines.next(), "NumShells", 3)?;
        let rows = parse_header(lines.next(), "Rows", 4)?;
        let cols = parse_header(lines.next(), "Cols", 5)?;

        if rows == 0 || cols == 0 {
            return Err(MapError::BadDimensions { rows, cols });
        }

        let mut arena = Arena::new(cols as usize, rows as usize);
        let mut spawns = Vec::new();

        for (y, row) in lines.take(rows as usize).enumerate() {
            for (x, c) in row.chars().take(cols as usize).enumerate() {
                let position = Position::new(x as i32, y as i32);
                match c {
                    '1' => spawns.push(TankSpawn {
                        position,
                        player: Player::One,
                    }),
                    '2' => spawns.push(TankSpawn {
                        position,
                        player: Player::Two,
                    }),
                    _ => arena.set_cell(position, Cell::from_map_char(c)),
                }
            }
        }
        // Missing trailing rows stay empty, matching short-row padding.

        for player in [Player::One, Player::Two] {
            if !spawns.iter().any(|s| s.player == player) {
                return Err(MapError::NoTanks(player.number()));
            }
        }

        Ok(MapFile {
            name,
            max_steps,
            num_shells,
            arena,
            spawns,
        })
    }

    /// Regenerate the text form. Parsing the result yields an equivalent
    /// map.
    pub fn render(&self) -> String {
        let width = self.arena.width();
        let height = self.arena.height();
        let mut rows: Vec<Vec<char>> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| self.arena.cell(x as i32, y as i32).to_char())
                    .collect()
            })
            .collect();
        for spawn in &self.spawns {
            rows[spawn.position.y as usize][spawn.position.x as usize] =
                spawn.player.tank_char();
        }

        let mut out = String::new();
        out.push_str(&self.name);
        out.push('\n');
        out.push_str(&format!("MaxSteps={}\n", self.max_steps));
        out.push_str(&format!("NumShells={}\n", self.num_shells));
        out.push_str(&format!("Rows={height}\n"));
        out.push_str(&format!("Cols={width}\n"));
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

/// Parse one `Key=<number>` header line. Whitespace around the key, the
/// `=`, and the value is tolerated.
fn parse_header(
    line: Option<&str>,
    key: &'static str,
    line_no: usize,
) -> Result<u32, MapError> {
    let line = line.ok_or(MapError::MissingLine(key))?;
    let bad = || MapError::BadHeader { line: line_no, key };
    let (found_key, value) = line.split_once('=').ok_or_else(bad)?;
    if found_key.trim() != key {
        return Err(bad());
    }
    value.trim().parse().map_err(|_| bad())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL_MAP: &str = "\
skirmish lane
MaxSteps=10
NumShells=2
Rows=3
Cols=5

1 # 2
  @
";

    #[test]
    fn test_parse_small_map() {
        let map = MapFile::parse(SMALL_MAP).unwrap();
        assert_eq!(map.name, "skirmish lane");
        assert_eq!(map.max_steps, 10);
        assert_eq!(map.num_shells, 2);
        assert_eq!(map.arena.width(), 5);
        assert_eq!(map.arena.height(), 3);
        assert_eq!(map.arena.cell(2, 1), Cell::Wall);
        assert_eq!(map.arena.cell(2, 2), Cell::Mine);
        assert_eq!(
            map.spawns,
            vec![
                TankSpawn {
                    position: Position::new(0, 1),
                    player: Player::One
                },
                TankSpawn {
                    position: Position::new(4, 1),
                    player: Player::Two
                },
            ]
        );
    }

    #[test]
    fn test_short_rows_and_unknown_chars_read_empty() {
        let text = "pad test\nMaxSteps=5\nNumShells=1\nRows=2\nCols=4\n1x2\n";
        let map = MapFile::parse(text).unwrap();
        // 'x' is empty terrain; the missing fourth column and second row pad out.
        assert_eq!(map.arena.cell(1, 0), Cell::Empty);
        assert_eq!(map.arena.cell(3, 0), Cell::Empty);
        assert_eq!(map.arena.cell(0, 1), Cell::Empty);
        assert_eq!(map.spawns.len(), 2);
    }

    #[test]
    fn test_weak_wall_char_seeds_one_hit() {
        let text = "weak\nMaxSteps=5\nNumShells=1\nRows=1\nCols=5\n1 = 2\n";
        let map = MapFile::parse(text).unwrap();
        let p = Position::new(2, 0);
        assert_eq!(map.arena.cell_at(p), Cell::WeakWall);
        assert_eq!(map.arena.wall_hits(p), 1);
    }

    #[test]
    fn test_header_errors() {
        let missing = "desc\nMaxSteps=10\n";
        assert!(matches!(
            MapFile::parse(missing),
            Err(MapError::MissingLine("NumShells"))
        ));

        let garbled = "desc\nMaxSteps=ten\nNumShells=1\nRows=1\nCols=3\n1 2\n";
        assert!(matches!(
            MapFile::parse(garbled),
            Err(MapError::BadHeader { line: 2, .. })
        ));

        let wrong_key = "desc\nSteps=10\nNumShells=1\nRows=1\nCols=3\n1 2\n";
        assert!(matches!(
            MapFile::parse(wrong_key),
            Err(MapError::BadHeader { line: 2, .. })
        ));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let text = "desc\nMaxSteps=10\nNumShells=1\nRows=0\nCols=3\n";
        assert!(matches!(
            MapFile::parse(text),
            Err(MapError::BadDimensions { .. })
        ));
    }

    #[test]
    fn test_side_without_tanks_rejected() {
        let text = "desc\nMaxSteps=10\nNumShells=1\nRows=1\nCols=3\n1  \n";
        assert!(matches!(MapFile::parse(text), Err(MapError::NoTanks(2))));
    }

    #[test]
    fn test_render_round_trips() {
        let map = MapFile::parse(SMALL_MAP).unwrap();
        let again = MapFile::parse(&map.render()).unwrap();
        assert_eq!(again.max_steps, map.max_steps);
        assert_eq!(again.num_shells, map.num_shells);
        assert_eq!(again.spawns, map.spawns);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(again.arena.cell(x, y), map.arena.cell(x, y));
            }
        }
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_MAP.as_bytes()).unwrap();
        let map = MapFile::load(file.path()).unwrap();
        assert_eq!(map.spawns.len(), 2);

        let missing = MapFile::load(Path::new("/nonexistent/arena.txt"));
        assert!(matches!(missing, Err(MapError::Io(_))));
    }
}
