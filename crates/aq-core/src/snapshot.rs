//! Render snapshot
//!
//! A closed set of drawable glyphs plus the painter-ordered grid the
//! presentation layer reads: terrain first, then treasures, monsters,
//! and the player on top.

use strum::{Display, EnumIter};

use crate::board::CellKind;
use crate::consts::{S_FLOOR, S_MONSTER, S_PLAYER, S_TREASURE, S_WALL};
use crate::gameloop::GameState;

/// Everything a cell can display as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Glyph {
    Wall,
    Floor,
    Treasure,
    Monster,
    Player,
}

impl Glyph {
    /// Get the display character for this glyph
    pub const fn symbol(&self) -> char {
        match self {
            Glyph::Wall => S_WALL,
            Glyph::Floor => S_FLOOR,
            Glyph::Treasure => S_TREASURE,
            Glyph::Monster => S_MONSTER,
            Glyph::Player => S_PLAYER,
        }
    }
}

impl From<CellKind> for Glyph {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Wall => Glyph::Wall,
            CellKind::Floor => Glyph::Floor,
        }
    }
}

/// Paint the current state into a `[y][x]` glyph grid.
///
/// Layering: terrain, uncollected treasures, alive monsters, then the
/// living player, so later layers cover earlier ones.
pub fn render_grid(state: &GameState) -> Vec<Vec<Glyph>> {
    let width = state.board.width() as usize;
    let height = state.board.height() as usize;

    let mut grid = vec![vec![Glyph::Floor; width]; height];
    for (y, row) in grid.iter_mut().enumerate() {
        for (x, glyph) in row.iter_mut().enumerate() {
            *glyph = state.board.cell(x as i32, y as i32).into();
        }
    }

    for treasure in &state.treasures {
        if treasure.is_present() {
            grid[treasure.pos.y as usize][treasure.pos.x as usize] = Glyph::Treasure;
        }
    }
    for monster in &state.monsters {
        if monster.is_alive() {
            grid[monster.pos.y as usize][monster.pos.x as usize] = Glyph::Monster;
        }
    }
    if state.player.is_alive() {
        grid[state.player.pos.y as usize][state.player.pos.x as usize] = Glyph::Player;
    }

    grid
}
