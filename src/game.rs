use std::collections::HashMap;

use ::rand::{thread_rng, Rng};
use macroquad::prelude::*;

use crate::tetromino::{Piece, ShapeKind};

// -------------------------------------------------------------------
// Board constants
pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 20;

/// Seconds between gravity steps.
pub const FALL_INTERVAL: f32 = 0.4;
/// Seconds between held-key repeat steps.
pub const MOVE_INTERVAL: f32 = 0.05;

pub const EMPTY_COLOR: Color = BLACK;

/// Per-frame board snapshot, rebuilt from the locked cells.
pub type Grid = [[Color; GRID_WIDTH]; GRID_HEIGHT];

/// Cells that are permanently part of the stack, keyed by (column, row).
/// Negative rows can appear here when a piece locks while it still
/// overhangs the top of the board; the loss check catches them on the
/// same frame.
pub type LockedCells = HashMap<(i32, i32), Color>;

/// Keyboard state sampled once per frame. `left`, `right` and `down` are
/// held-state; `rotate` is an edge (pressed this frame).
#[derive(Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub rotate: bool,
}

pub struct GameState {
    pub locked: LockedCells,
    pub grid: Grid,
    pub current: Piece,
    pub next: Piece,
    pub game_over: bool,
    fall_timer: f32,
    move_timer: f32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            locked: HashMap::new(),
            grid: [[EMPTY_COLOR; GRID_WIDTH]; GRID_HEIGHT],
            current: random_piece(),
            next: random_piece(),
            game_over: false,
            fall_timer: 0.0,
            move_timer: 0.0,
        }
    }

    /// Advance the game by one frame: rebuild the snapshot, run the
    /// gravity and repeat-move timers against the sampled input, lock if
    /// a downward move failed, then run loss detection.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if self.game_over {
            return;
        }
        self.grid = create_grid(&self.locked);

        let mut lock_now = false;

        if input.rotate {
            self.current.rotation += 1;
            if !valid_position(&self.current, &self.grid) {
                self.current.rotation -= 1;
            }
        }

        self.fall_timer += dt;
        if self.fall_timer >= FALL_INTERVAL {
            self.fall_timer -= FALL_INTERVAL;
            // Soft drop takes over descent entirely while down is held.
            if !input.down {
                self.current.y += 1;
                if !valid_position(&self.current, &self.grid) && self.current.y > 0 {
                    self.current.y -= 1;
                    lock_now = true;
                }
            }
        }

        self.move_timer += dt;
        if self.move_timer >= MOVE_INTERVAL {
            self.move_timer -= MOVE_INTERVAL;
            if input.down {
                self.current.y += 1;
                if !valid_position(&self.current, &self.grid) {
                    self.current.y -= 1;
                    lock_now = true;
                }
            }
            // Left wins when both directions are held.
            if input.left {
                self.current.x -= 1;
                if !valid_position(&self.current, &self.grid) {
                    self.current.x += 1;
                }
            } else if input.right {
                self.current.x += 1;
                if !valid_position(&self.current, &self.grid) {
                    self.current.x -= 1;
                }
            }
        }

        // Paint the active piece into the snapshot before any lock swaps
        // it out; cells above the board stay hidden.
        for (x, y) in self.current.cells() {
            if x >= 0 && x < GRID_WIDTH as i32 && y >= 0 && y < GRID_HEIGHT as i32 {
                self.grid[y as usize][x as usize] = self.current.color;
            }
        }

        if lock_now {
            self.lock_piece();
        }

        if check_lost(&self.locked) {
            self.game_over = true;
        }
    }

    /// Write every cell of the active piece into the stack, including
    /// any still above the board, and promote the pre-drawn next piece.
    pub fn lock_piece(&mut self) {
        for (x, y) in self.current.cells() {
            self.locked.insert((x, y), self.current.color);
        }
        self.current = self.next;
        self.next = random_piece();
    }
}

/// Rebuild the render/validation snapshot from the locked stack.
pub fn create_grid(locked: &LockedCells) -> Grid {
    let mut grid = [[EMPTY_COLOR; GRID_WIDTH]; GRID_HEIGHT];
    for (&(x, y), &color) in locked {
        if x >= 0 && x < GRID_WIDTH as i32 && y >= 0 && y < GRID_HEIGHT as i32 {
            grid[y as usize][x as usize] = color;
        }
    }
    grid
}

/// A placement is valid when every cell sits inside the columns and is
/// either above the board (still dropping in) or on an empty board cell.
pub fn valid_position(piece: &Piece, grid: &Grid) -> bool {
    for (x, y) in piece.cells() {
        if x < 0 || x >= GRID_WIDTH as i32 {
            return false;
        }
        if y < 0 {
            continue;
        }
        if y >= GRID_HEIGHT as i32 || grid[y as usize][x as usize] != EMPTY_COLOR {
            return false;
        }
    }
    true
}

/// The stack has reached the top once any locked cell sits at row 0 or
/// above it.
pub fn check_lost(locked: &LockedCells) -> bool {
    locked.keys().any(|&(_, y)| y < 1)
}

fn random_piece() -> Piece {
    let mut rng = thread_rng();
    Piece::new(ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())])
}
