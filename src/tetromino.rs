use macroquad::prelude::*;

use crate::game::GRID_WIDTH;

// -------------------------------------------------------------------
// Shape catalog: each shape is a list of 5x5 rotation states, '0' marks
// an occupied cell. S, Z and I come in two orientations, the square in
// one; only J, L and T use all four.

/// One orientation of a shape.
pub type RotationState = [&'static str; 5];

const S_STATES: [RotationState; 2] = [
    [".....", ".....", "..00.", ".00..", "....."],
    [".....", "..0..", "..00.", "...0.", "....."],
];

const Z_STATES: [RotationState; 2] = [
    [".....", ".....", ".00..", "..00.", "....."],
    [".....", "..0..", ".00..", ".0...", "....."],
];

const I_STATES: [RotationState; 2] = [
    [".....", "..0..", "..0..", "..0..", "..0.."],
    [".....", "0000.", ".....", ".....", "....."],
];

const O_STATES: [RotationState; 1] = [
    [".....", ".....", ".00..", ".00..", "....."],
];

const J_STATES: [RotationState; 4] = [
    [".....", ".0...", ".000.", ".....", "....."],
    [".....", "..00.", "..0..", "..0..", "....."],
    [".....", ".....", ".000.", "...0.", "....."],
    [".....", "..0..", "..0..", ".00..", "....."],
];

const L_STATES: [RotationState; 4] = [
    [".....", "...0.", ".000.", ".....", "....."],
    [".....", "..0..", "..0..", "..00.", "....."],
    [".....", ".....", ".000.", ".0...", "....."],
    [".....", ".00..", "..0..", "..0..", "....."],
];

const T_STATES: [RotationState; 4] = [
    [".....", "..0..", ".000.", ".....", "....."],
    [".....", "..0..", "..00.", "..0..", "....."],
    [".....", ".....", ".000.", "..0..", "....."],
    [".....", "..0..", ".00..", "..0..", "....."],
];

/// Display colors, indexed by catalog order ([`ShapeKind::ALL`]).
pub const SHAPE_COLORS: [Color; 7] = [
    Color { r: 0.0,   g: 1.0,    b: 0.0,   a: 1.0 }, // S
    Color { r: 1.0,   g: 0.0,    b: 0.0,   a: 1.0 }, // Z
    Color { r: 0.0,   g: 1.0,    b: 1.0,   a: 1.0 }, // I
    Color { r: 1.0,   g: 1.0,    b: 0.0,   a: 1.0 }, // O
    Color { r: 1.0,   g: 0.6471, b: 0.0,   a: 1.0 }, // J
    Color { r: 0.0,   g: 0.0,    b: 1.0,   a: 1.0 }, // L
    Color { r: 0.502, g: 0.0,    b: 0.502, a: 1.0 }, // T
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    S,
    Z,
    I,
    O,
    J,
    L,
    T,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::T,
    ];

    pub fn states(self) -> &'static [RotationState] {
        match self {
            ShapeKind::S => &S_STATES,
            ShapeKind::Z => &Z_STATES,
            ShapeKind::I => &I_STATES,
            ShapeKind::O => &O_STATES,
            ShapeKind::J => &J_STATES,
            ShapeKind::L => &L_STATES,
            ShapeKind::T => &T_STATES,
        }
    }

    pub fn color(self) -> Color {
        SHAPE_COLORS[self as usize]
    }
}

/// The active falling piece: a catalog shape plus its board position and
/// rotation index. The rotation index is free-running; lookups take it
/// modulo the shape's state count.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    pub rotation: usize,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: ShapeKind) -> Self {
        Piece {
            kind,
            x: GRID_WIDTH as i32 / 2,
            y: 0,
            rotation: 0,
            color: kind.color(),
        }
    }

    /// The 5x5 mask for the current rotation.
    pub fn state(&self) -> &'static RotationState {
        let states = self.kind.states();
        &states[self.rotation % states.len()]
    }

    /// Absolute board cells occupied by the piece. The 5x5 template is
    /// biased by (-2, -4), so a fresh piece sits centered on the spawn
    /// column with its visible rows entering from just above the board.
    /// Recomputed on every call, never cached.
    pub fn cells(&self) -> Vec<(i32, i32)> {
        let mut positions = Vec::with_capacity(4);
        for (row, line) in self.state().iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '0' {
                    positions.push((self.x + col as i32 - 2, self.y + row as i32 - 4));
                }
            }
        }
        positions
    }
}
