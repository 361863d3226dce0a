//! Board terrain
//!
//! A fixed rectangular room: Wall cells along the perimeter, Floor cells
//! inside. The grid is generated once and never mutated; entity occupancy
//! is never written into cells and is always derived from entity positions
//! at query time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{S_FLOOR, S_WALL};
use crate::error::GameError;
use crate::position::Position;

/// Terrain kind of a single cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Floor = 0,
    Wall = 1,
}

impl CellKind {
    /// Check if this cell can be walked on
    pub const fn is_passable(&self) -> bool {
        matches!(self, CellKind::Floor)
    }

    /// Get the display character for this cell kind
    pub const fn symbol(&self) -> char {
        match self {
            CellKind::Floor => S_FLOOR,
            CellKind::Wall => S_WALL,
        }
    }
}

/// The static terrain grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major: `cells[y][x]`
    cells: Vec<Vec<CellKind>>,
}

impl Board {
    /// Build a bordered room of the given dimensions.
    ///
    /// Needs at least one interior cell, so anything under 3x3 is an error.
    pub fn new(width: i32, height: i32) -> Result<Self, GameError> {
        if width < 3 || height < 3 {
            return Err(GameError::BoardTooSmall { width, height });
        }

        let mut cells = vec![vec![CellKind::Floor; width as usize]; height as usize];
        for x in 0..width as usize {
            cells[0][x] = CellKind::Wall;
            cells[height as usize - 1][x] = CellKind::Wall;
        }
        for row in &mut cells {
            row[0] = CellKind::Wall;
            row[width as usize - 1] = CellKind::Wall;
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// The standard room every game session is played on
    pub fn standard() -> Self {
        Self::new(crate::consts::BOARD_WIDTH, crate::consts::BOARD_HEIGHT)
            .expect("standard dimensions satisfy the minimum")
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Terrain at (x, y); out-of-bounds reads as Wall
    pub fn cell(&self, x: i32, y: i32) -> CellKind {
        if !self.in_bounds(x, y) {
            return CellKind::Wall;
        }
        self.cells[y as usize][x as usize]
    }

    /// Check if (x, y) lies within the grid
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Check if a position is valid for movement: in bounds and not a wall.
    ///
    /// Pure function of the static terrain, independent of occupancy.
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cell(x, y).is_passable()
    }

    /// The exact board center, target of the spawn-sampler fallback
    pub const fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }
}
