//! Page viewports and the canvas sizes derived from them

use serde::{Deserialize, Serialize};

/// CSS width given to every page canvas so it fills its parent
pub const CANVAS_DISPLAY_WIDTH: &str = "100%";

/// Page dimensions at a given scale, in CSS pixels, as reported by the library
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scale: f64, width: f64, height: f64) -> Self {
        Self { scale, width, height }
    }

    /// Drawing-buffer size for a canvas showing this viewport
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::from_viewport(self)
    }
}

/// Integer drawing-buffer size of a page canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Truncates toward zero like assigning a number to `canvas.width`.
    /// Non-finite and negative dimensions become 0.
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            width: pixels(viewport.width),
            height: pixels(viewport.height),
        }
    }
}

fn pixels(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.trunc().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_page_at_double_scale() {
        // US Letter is 612x792 points
        let size = Viewport::new(2.0, 1224.0, 1584.0).canvas_size();
        assert_eq!(size, CanvasSize { width: 1224, height: 1584 });
    }

    #[test]
    fn test_fractional_dimensions_truncate() {
        // A4 is 595.28x841.89 points
        let size = Viewport::new(1.0, 595.28, 841.89).canvas_size();
        assert_eq!(size, CanvasSize { width: 595, height: 841 });
    }

    #[test]
    fn test_degenerate_dimensions_become_zero() {
        assert_eq!(pixels(-3.0), 0);
        assert_eq!(pixels(f64::NAN), 0);
        assert_eq!(pixels(f64::INFINITY), 0);
        assert_eq!(pixels(0.4), 0);
    }
}
