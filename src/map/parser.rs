//! Board parsing functionality for converting raw layouts into structured data.

use glam::IVec2;

use crate::constants::MapTile;
use crate::error::ParseError;

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedBoard {
    /// The parsed tile layout, row-major.
    pub tiles: Vec<MapTile>,
    /// Board width, in cells.
    pub width: u32,
    /// Board height, in cells.
    pub height: u32,
    /// The player's spawn cell.
    pub player_spawn: IVec2,
    /// The adversary's spawn cell.
    pub adversary_spawn: IVec2,
}

/// Parser for converting raw board layouts into structured map data.
pub struct BoardParser;

impl BoardParser {
    /// Parses a single character into a map tile.
    ///
    /// Spawn markers parse as empty tiles; the caller records their cells.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Pellet),
            'o' => Ok(MapTile::PowerPellet),
            ' ' => Ok(MapTile::Empty),
            'P' => Ok(MapTile::Empty),
            'G' => Ok(MapTile::Empty),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// Accepts any rectangular board with exactly one `P` and one `G` marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty or ragged, contains unknown
    /// characters, or does not carry exactly one of each spawn marker.
    pub fn parse(rows: &[&str]) -> Result<ParsedBoard, ParseError> {
        let height = rows.len();
        if height == 0 {
            return Err(ParseError::EmptyBoard);
        }
        let width = rows[0].chars().count();
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut player_spawn: Option<IVec2> = None;
        let mut adversary_spawn: Option<IVec2> = None;

        for (y, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    width: row_width,
                    expected: width,
                });
            }

            for (x, character) in row.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                let cell = IVec2::new(x as i32, y as i32);

                match character {
                    'P' => {
                        if player_spawn.replace(cell).is_some() {
                            return Err(ParseError::DuplicateSpawn("player"));
                        }
                    }
                    'G' => {
                        if adversary_spawn.replace(cell).is_some() {
                            return Err(ParseError::DuplicateSpawn("adversary"));
                        }
                    }
                    _ => {}
                }

                tiles.push(tile);
            }
        }

        Ok(ParsedBoard {
            tiles,
            width: width as u32,
            height: height as u32,
            player_spawn: player_spawn.ok_or(ParseError::MissingSpawn("player"))?,
            adversary_spawn: adversary_spawn.ok_or(ParseError::MissingSpawn("adversary"))?,
        })
    }
}
