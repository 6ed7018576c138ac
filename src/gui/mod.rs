//! Shell window: window configuration and static drawing.
//!
//! The window shows a single welcome label and does nothing else; all
//! interactive screens are future work owned elsewhere.

use macroquad::prelude::*;

/// Title of the one top-level window.
pub const WINDOW_TITLE: &str = "Inventory Management";
/// The static label shown in the window body.
pub const WELCOME_TEXT: &str = "Welcome to Inventory App";

/// Window width in pixels.
pub const WINDOW_W: i32 = 480;
/// Window height in pixels.
pub const WINDOW_H: i32 = 200;

/// Welcome label font size.
pub const WELCOME_FONT_SIZE: f32 = 28.0;

pub mod palette {
    use macroquad::prelude::Color;

    /// Window background.
    pub const BACKGROUND: Color = Color::new(0.114, 0.169, 0.326, 1.0);
    /// Primary text.
    pub const TEXT: Color = Color::new(1.0, 0.945, 0.910, 1.0);
}

/// Window configuration for the shell window.
pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_W,
        window_height: WINDOW_H,
        window_resizable: false,
        ..Default::default()
    }
}

/// Draw the welcome label centered in the current window.
pub fn draw_welcome() {
    let dims = measure_text(WELCOME_TEXT, None, WELCOME_FONT_SIZE as u16, 1.0);
    let x = (screen_width() - dims.width) / 2.0;
    let y = (screen_height() + dims.height) / 2.0;
    draw_text(WELCOME_TEXT, x, y, WELCOME_FONT_SIZE, palette::TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_conf_carries_fixed_title() {
        let conf = window_conf();
        assert_eq!(conf.window_title, "Inventory Management");
        assert!(!conf.window_resizable);
    }

    #[test]
    fn welcome_text_is_the_fixed_string() {
        assert_eq!(WELCOME_TEXT, "Welcome to Inventory App");
    }
}
