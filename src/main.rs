//! Super Mano Bros
//!
//! A tiny Mario-style 2D platformer demo built on macroquad: a title
//! screen, one playable level, and a settings/pause screen. The
//! interesting part is the per-frame simulation in game/; everything else
//! is thin glue over macroquad's windowing, texture loading, input
//! polling, and drawing.

mod app;
mod assets;
mod audio;
mod game;
mod settings;
mod title;
mod ui;

use macroquad::prelude::*;

use app::{App, SCREEN_HEIGHT, SCREEN_WIDTH};
use assets::GameAssets;
use ui::MouseState;

/// Fixed simulation and render rate
const TARGET_FRAME_TIME: f64 = 1.0 / 60.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Super Mano Bros".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Crash logging first, before anything can panic
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let assets = GameAssets::load().await;
    let mut app = App::new(assets);

    loop {
        let frame_start = get_time();
        let mouse = MouseState::poll();
        if !app.frame(&mouse) {
            break;
        }
        limit_frame_rate(frame_start);
        next_frame().await;
    }
}

/// Hold the loop to the fixed frame rate: sleep for the bulk of the
/// remaining frame time, then spin-wait for precision. The simulation
/// advances one step per rendered frame, so the pacing here is also the
/// physics timestep.
fn limit_frame_rate(frame_start: f64) {
    let elapsed = get_time() - frame_start;
    if TARGET_FRAME_TIME - elapsed <= 0.0 {
        return;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < TARGET_FRAME_TIME {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < TARGET_FRAME_TIME {
            std::hint::spin_loop();
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < TARGET_FRAME_TIME {
            // Busy wait - the browser handles frame pacing
        }
    }
}
