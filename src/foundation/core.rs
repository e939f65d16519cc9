pub use kurbo::{Affine, Point, Vec2};

/// Smallest accepted surface edge in pixels.
pub const MIN_DIM: u32 = 16;
/// Largest accepted surface edge in pixels. Fits the `u16` surfaces used by the CPU backend.
pub const MAX_DIM: u32 = 4096;

/// Output surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas with both edges clamped into `[MIN_DIM, MAX_DIM]`.
    ///
    /// Out-of-range sizes are clamped rather than rejected.
    pub fn clamped(width: i64, height: i64) -> Self {
        fn clamp_dim(v: i64) -> u32 {
            v.clamp(i64::from(MIN_DIM), i64::from(MAX_DIM)) as u32
        }
        Self {
            width: clamp_dim(width),
            height: clamp_dim(height),
        }
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    /// Pixel-space center of the surface.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Closed numeric interval `[min, max]`, serialized as a two-element array.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span(pub f64, pub f64);

impl Span {
    /// Interval symmetric around zero: `[-half, half]`.
    pub fn symmetric(half: f64) -> Self {
        Self(-half.abs(), half.abs())
    }

    /// Lower bound.
    pub fn min(self) -> f64 {
        self.0
    }

    /// Upper bound.
    pub fn max(self) -> f64 {
        self.1
    }

    /// Midpoint of the interval.
    pub fn mid(self) -> f64 {
        (self.0 + self.1) / 2.0
    }

    /// Return a well-formed span: bounds ordered, non-finite bounds replaced with `fallback`.
    pub fn sanitized(self, fallback: Span) -> Self {
        if !self.0.is_finite() || !self.1.is_finite() {
            return fallback;
        }
        if self.0 <= self.1 {
            self
        } else {
            Self(self.1, self.0)
        }
    }

    /// Clamp both bounds into `[lo, hi]`.
    pub fn clamp_to(self, lo: f64, hi: f64) -> Self {
        Self(self.0.clamp(lo, hi), self.1.clamp(lo, hi))
    }

    /// Return `true` when `v` lies inside the closed interval.
    pub fn contains(self, v: f64) -> bool {
        self.0 <= v && v <= self.1
    }
}

/// Vertical placement of a layer inside a composite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Anchor the layer to the top edge.
    #[default]
    Top,
    /// Anchor the layer to the bottom edge.
    Bottom,
}

impl std::str::FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(format!("unknown placement \"{other}\" (expected top|bottom)")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
