//! Map construction and grid queries.

use bevy_ecs::resource::Resource;
use glam::{IVec2, UVec2, Vec2};
use tracing::trace;

use crate::constants::{MapTile, CELL_SIZE, PELLET_SCORE, POWER_PELLET_SCORE};
use crate::error::GameResult;
use crate::map::parser::BoardParser;

/// What a pellet lookup consumed, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumed {
    None,
    Pellet,
    PowerPellet,
}

impl Consumed {
    /// Score awarded for the consumed tile.
    pub const fn score(self) -> u32 {
        match self {
            Consumed::None => 0,
            Consumed::Pellet => PELLET_SCORE,
            Consumed::PowerPellet => POWER_PELLET_SCORE,
        }
    }
}

/// The game board: an immutable wall layout with a mutable pellet overlay.
///
/// A pristine copy of the parsed layout is retained so a session reset can
/// restore every consumed pellet. The remaining-pellet count is cached and
/// kept exactly consistent with the tiles.
#[derive(Resource, Clone)]
pub struct Map {
    tiles: Vec<MapTile>,
    original: Vec<MapTile>,
    size: UVec2,
    remaining: u32,
    /// The player's spawn cell.
    pub player_spawn: IVec2,
    /// The adversary's spawn cell.
    pub adversary_spawn: IVec2,
}

impl Map {
    /// Creates a new `Map` from a raw board layout.
    ///
    /// # Errors
    ///
    /// Returns a parse error for empty/ragged boards, unknown characters, or
    /// missing/duplicate spawn markers.
    pub fn parse(rows: &[&str]) -> GameResult<Map> {
        let parsed = BoardParser::parse(rows)?;
        let remaining = Self::count_pellets(&parsed.tiles);

        Ok(Map {
            original: parsed.tiles.clone(),
            tiles: parsed.tiles,
            size: UVec2::new(parsed.width, parsed.height),
            remaining,
            player_spawn: parsed.player_spawn,
            adversary_spawn: parsed.adversary_spawn,
        })
    }

    /// Board dimensions, in cells.
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Board width, in pixels.
    pub fn pixel_width(&self) -> f32 {
        (self.size.x * CELL_SIZE) as f32
    }

    /// The tile at `cell`. Out-of-bounds lookups read as walls.
    pub fn tile_at(&self, cell: IVec2) -> MapTile {
        self.index(cell).map_or(MapTile::Wall, |i| self.tiles[i])
    }

    /// Whether `cell` is a wall (out-of-bounds counts as one).
    pub fn is_wall(&self, cell: IVec2) -> bool {
        self.tile_at(cell) == MapTile::Wall
    }

    /// Consumes the pellet at `cell`, if one is present.
    ///
    /// The tile becomes empty, so a second call reports `Consumed::None`.
    pub fn consume_pellet(&mut self, cell: IVec2) -> Consumed {
        let Some(index) = self.index(cell) else {
            return Consumed::None;
        };

        let consumed = match self.tiles[index] {
            MapTile::Pellet => Consumed::Pellet,
            MapTile::PowerPellet => Consumed::PowerPellet,
            _ => return Consumed::None,
        };

        self.tiles[index] = MapTile::Empty;
        self.remaining -= 1;
        trace!(cell = ?cell, remaining = self.remaining, "pellet consumed");
        consumed
    }

    /// Restores every tile from the pristine layout and recomputes the
    /// remaining-pellet count. Used only on session reset.
    pub fn reset_pellets(&mut self) {
        self.tiles.copy_from_slice(&self.original);
        self.remaining = Self::count_pellets(&self.tiles);
    }

    /// Number of pellet and power-pellet tiles still on the board.
    pub fn remaining_pellets(&self) -> u32 {
        self.remaining
    }

    /// The tile layout, row-major. Paired with [`Map::size`] for indexing.
    pub fn tiles(&self) -> &[MapTile] {
        &self.tiles
    }

    /// The cell containing `point` (a pixel coordinate).
    pub fn cell_under(point: Vec2) -> IVec2 {
        (point / CELL_SIZE as f32).floor().as_ivec2()
    }

    /// The top-left pixel of `cell`, where an actor anchored to it sits.
    pub fn cell_origin(cell: IVec2) -> Vec2 {
        cell.as_vec2() * CELL_SIZE as f32
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.size.x as i32 || cell.y >= self.size.y as i32 {
            return None;
        }
        Some(cell.y as usize * self.size.x as usize + cell.x as usize)
    }

    fn count_pellets(tiles: &[MapTile]) -> u32 {
        tiles
            .iter()
            .filter(|tile| matches!(tile, MapTile::Pellet | MapTile::PowerPellet))
            .count() as u32
    }
}
