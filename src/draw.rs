use macroquad::prelude::*;

use crate::game::{Grid, GRID_HEIGHT, GRID_WIDTH};

// -------------------------------------------------------------------
// Window layout: the playfield is bottom-centered in an 800x700 window.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 700.0;
pub const TILE_SIZE: f32 = 30.0;

pub const PLAY_WIDTH: f32 = GRID_WIDTH as f32 * TILE_SIZE;
pub const PLAY_HEIGHT: f32 = GRID_HEIGHT as f32 * TILE_SIZE;
pub const TOP_LEFT_X: f32 = (SCREEN_WIDTH - PLAY_WIDTH) / 2.0;
pub const TOP_LEFT_Y: f32 = SCREEN_HEIGHT - PLAY_HEIGHT;

const LINE_COLOR: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 };

/// Draw one frame of the playfield: the title, every cell of the grid
/// snapshot, the grid lines over them, and the border.
pub fn draw_window(grid: &Grid) {
    clear_background(BLACK);

    let title = "Tetris";
    let measure = measure_text(title, None, 60, 1.0);
    draw_text(
        title,
        TOP_LEFT_X + (PLAY_WIDTH - measure.width) / 2.0,
        80.0,
        60.0,
        WHITE,
    );

    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            draw_rectangle(
                TOP_LEFT_X + x as f32 * TILE_SIZE,
                TOP_LEFT_Y + y as f32 * TILE_SIZE,
                TILE_SIZE,
                TILE_SIZE,
                grid[y][x],
            );
        }
    }

    draw_grid_lines();
    draw_rectangle_lines(TOP_LEFT_X, TOP_LEFT_Y, PLAY_WIDTH, PLAY_HEIGHT, 4.0, RED);
}

fn draw_grid_lines() {
    for row in 0..GRID_HEIGHT {
        let y = TOP_LEFT_Y + row as f32 * TILE_SIZE;
        draw_line(TOP_LEFT_X, y, TOP_LEFT_X + PLAY_WIDTH, y, 1.0, LINE_COLOR);
    }
    for col in 0..GRID_WIDTH {
        let x = TOP_LEFT_X + col as f32 * TILE_SIZE;
        draw_line(x, TOP_LEFT_Y, x, TOP_LEFT_Y + PLAY_HEIGHT, 1.0, LINE_COLOR);
    }
}

/// Center a message inside the playfield.
pub fn draw_text_middle(text: &str, font_size: u16, color: Color) {
    let measure = measure_text(text, None, font_size, 1.0);
    let x = TOP_LEFT_X + (PLAY_WIDTH - measure.width) / 2.0;
    let y = TOP_LEFT_Y + (PLAY_HEIGHT - measure.height) / 2.0;
    draw_text(text, x, y, font_size as f32, color);
}
