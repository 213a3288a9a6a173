//! Basic UI widgets

use macroquad::prelude::*;

use super::theme;
use super::MouseState;

/// Draw text centered inside a rect.
/// Positions are rounded to integer pixels for crisp rendering.
pub fn draw_label_centered(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let text_x = (rect.x + (rect.w - dims.width) * 0.5).round();
    let text_y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(text, text_x, text_y, font_size, color);
}

/// Draw a texture stretched to a rect, or a flat placeholder when missing
pub fn draw_texture_or_rect(texture: Option<&Texture2D>, rect: &Rect, fallback: Color) {
    match texture {
        Some(tex) => draw_texture_ex(
            tex,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(rect.x, rect.y, rect.w, rect.h, fallback),
    }
}

/// Title-screen button: texture (or placeholder), hover wash, centered label.
/// Returns true if clicked this frame.
pub fn texture_button(
    mouse: &MouseState,
    rect: Rect,
    texture: Option<&Texture2D>,
    label: &str,
    hover_wash: Color,
) -> bool {
    draw_texture_or_rect(texture, &rect, theme::BUTTON_FALLBACK);
    if mouse.inside(&rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, hover_wash);
    }
    draw_label_centered(label, &rect, theme::FONT_SIZE_BUTTON, theme::LABEL_COLOR);
    mouse.clicked(&rect)
}

/// Settings-screen button: flat rect that brightens on hover.
/// Returns true if clicked this frame.
pub fn panel_button(mouse: &MouseState, rect: Rect, label: &str, idle: Color, hover: Color) -> bool {
    let fill = if mouse.inside(&rect) { hover } else { idle };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    draw_label_centered(label, &rect, theme::FONT_SIZE_PANEL, theme::LABEL_COLOR);
    mouse.clicked(&rect)
}
