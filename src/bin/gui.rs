//! Shell window entry point.
//!
//! Opens the one top-level window and runs the render loop until the user
//! closes it. No widgets, no input handling, no store access.

use macroquad::prelude::*;
use mimalloc::MiMalloc;

use stockroom::gui::{draw_welcome, palette, window_conf};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[macroquad::main(window_conf)]
async fn main() {
    loop {
        clear_background(palette::BACKGROUND);

        draw_welcome();

        next_frame().await;
    }
}
