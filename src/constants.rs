//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

/// How often the demo loop wakes up to poll the simulation clock.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each cell, in pixels.
pub const CELL_SIZE: u32 = 16;
/// The size of the game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 31);
/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(BOARD_CELL_SIZE.x * CELL_SIZE, BOARD_CELL_SIZE.y * CELL_SIZE);

/// The logical frame the speed constants are balanced around, in milliseconds.
///
/// Speeds are expressed in pixels per reference frame; each tick scales them
/// by `elapsed_ms / REFERENCE_FRAME_MS`.
pub const REFERENCE_FRAME_MS: f32 = 16.0;
/// Minimum accumulated time before the clock yields a tick, in milliseconds.
pub const MIN_TICK_MS: f32 = 16.0;

/// Player speed, in pixels per reference frame.
pub const PLAYER_SPEED: f32 = CELL_SIZE as f32;
/// Adversary speed, in pixels per reference frame.
pub const ADVERSARY_SPEED: f32 = CELL_SIZE as f32;

/// How long the adversary stays in each primary mode, in milliseconds.
pub const CHASE_DURATION_MS: f32 = 3000.0;
pub const SCATTER_DURATION_MS: f32 = 3000.0;
/// How long a power pellet keeps the adversary frightened, in milliseconds.
pub const FRIGHTENED_DURATION_MS: f32 = 8000.0;

/// The adversary's home corner, targeted while scattering.
pub const SCATTER_TARGET: glam::IVec2 = glam::IVec2::new(1, 1);

pub const PELLET_SCORE: u32 = 10;
pub const POWER_PELLET_SCORE: u32 = 50;
pub const CAPTURE_SCORE: u32 = 200;

pub const STARTING_LIVES: u8 = 3;

pub const PLAYER_COLOR: &str = "yellow";
pub const ADVERSARY_COLOR: &str = "red";
pub const FRIGHTENED_COLOR: &str = "blue";

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An empty, walkable tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    PowerPellet,
}

/// The raw layout of the game board, as a 2D array of characters.
///
/// `#` wall, `.` pellet, `o` power pellet, space open corridor, `P` player
/// spawn, `G` adversary spawn. The middle row is the tunnel row, open at both
/// edges.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "######.##### ## #####.######",
    "######.##     G    ##.######",
    "######.## ######## ##.######",
    "######.## #      # ##.######",
    "      .   #      #   .      ",
    "######.## #      # ##.######",
    "######.## ######## ##.######",
    "######.##          ##.######",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##....... P.......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
    "############################",
];
