pub use kurbo::{Point, Rect, Vec2};

/// Container size in layout pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Build a viewport from layout-pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Finite and strictly positive on both axes.
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Midpoint of the container.
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Shorter of width and height.
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// Full container rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Bounds a node center may occupy, `[padding, size - padding]` on both axes.
    ///
    /// Collapses to the center line when the viewport is smaller than twice the padding.
    pub fn inset(self, padding: f64) -> Rect {
        let (x0, x1) = inset_axis(self.width, padding);
        let (y0, y1) = inset_axis(self.height, padding);
        Rect::new(x0, y0, x1, y1)
    }
}

fn inset_axis(size: f64, padding: f64) -> (f64, f64) {
    let lo = padding;
    let hi = size - padding;
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = size * 0.5;
        (mid, mid)
    }
}

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a color from straight channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same channels with alpha set from a `[0, 1]` fraction.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: unit_to_u8(alpha),
            ..self
        }
    }

    /// Alpha as a `[0, 1]` fraction.
    pub fn alpha(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// `#rrggbb` form, alpha excluded.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub(crate) fn unit_to_u8(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
