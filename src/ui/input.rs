//! Input state for UI interaction

use macroquad::prelude::*;

/// Mouse button state, captured once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_released: bool, // Just released this frame
}

impl MouseState {
    /// Capture the current mouse state from macroquad
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_released: is_mouse_button_released(MouseButton::Left),
        }
    }

    /// Mouse position as a point
    pub fn point(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.point())
    }

    /// Check if a click was completed inside a rect this frame
    /// (buttons trigger on release, so a drag-away cancels the click)
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_released && self.inside(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_at(x: f32, y: f32, left_released: bool) -> MouseState {
        MouseState {
            x,
            y,
            left_released,
        }
    }

    #[test]
    fn test_inside() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(mouse_at(50.0, 40.0, false).inside(&r));
        assert!(!mouse_at(5.0, 40.0, false).inside(&r));
        assert!(!mouse_at(50.0, 100.0, false).inside(&r));
    }

    #[test]
    fn test_clicked_requires_release_inside() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(mouse_at(50.0, 50.0, true).clicked(&r));
        assert!(!mouse_at(50.0, 50.0, false).clicked(&r));
        assert!(!mouse_at(150.0, 50.0, true).clicked(&r));
    }
}
