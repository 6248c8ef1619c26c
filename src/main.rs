use macroquad::prelude::*;

use mini_tetris::draw::{draw_text_middle, draw_window, SCREEN_HEIGHT, SCREEN_WIDTH};
use mini_tetris::game::{GameState, InputState};

/// How long the loss message stays up before returning to the menu.
const LOST_DISPLAY_SECS: f32 = 2.0;

enum Screen {
    Menu,
    Playing,
    Lost,
}

#[macroquad::main("Tetris")]
async fn main() {
    request_new_screen_size(SCREEN_WIDTH, SCREEN_HEIGHT);

    let mut screen = Screen::Menu;
    let mut game = GameState::new();
    let mut lost_timer = 0.0_f32;

    loop {
        match screen {
            Screen::Menu => {
                clear_background(BLACK);
                draw_text_middle("Press any key to play", 60, WHITE);
                if get_last_key_pressed().is_some() {
                    game = GameState::new();
                    screen = Screen::Playing;
                }
            }
            Screen::Playing => {
                let input = InputState {
                    left: is_key_down(KeyCode::Left),
                    right: is_key_down(KeyCode::Right),
                    down: is_key_down(KeyCode::Down),
                    rotate: is_key_pressed(KeyCode::Up),
                };
                game.update(get_frame_time(), &input);
                draw_window(&game.grid);
                if game.game_over {
                    lost_timer = LOST_DISPLAY_SECS;
                    screen = Screen::Lost;
                }
            }
            Screen::Lost => {
                draw_window(&game.grid);
                draw_text_middle("You Lost", 80, WHITE);
                lost_timer -= get_frame_time();
                if lost_timer <= 0.0 {
                    screen = Screen::Menu;
                }
            }
        }
        next_frame().await;
    }
}
