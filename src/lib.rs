//! A minimal falling-block game: one 10x20 playfield, seven tetromino
//! shapes, timed gravity plus held-key movement, stacking without line
//! clears, and a top-out loss condition.

pub mod draw;
pub mod game;
pub mod tetromino;

pub use game::{GameState, InputState};
pub use tetromino::{Piece, ShapeKind};
