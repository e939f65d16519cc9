//! Per-string and per-glyph jitter.
//!
//! Draw order is part of the output contract. For a given seed the sequence is consumed as:
//!
//! 1. rotation (degrees)
//! 2. font-size scale
//! 3. center x offset
//! 4. center y offset
//! 5. for each `char` of the text, left to right:
//!    baseline offset, spacing delta, opacity, stroke noise x, stroke noise y
//!
//! Reordering these draws changes every artifact previously generated from the same seed.

use serde::{Deserialize, Serialize};

use crate::foundation::core::Span;
use crate::seed::sequence::SeededSequence;

/// Variance ranges for the jitter model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterConfig {
    /// Whole-string rotation in degrees.
    pub rotation_deg: Span,
    /// Whole-string font-size multiplier.
    pub size_scale: Span,
    /// Horizontal center offset in pixels.
    pub center_x_px: Span,
    /// Vertical center offset in pixels.
    pub center_y_px: Span,
    /// Per-glyph baseline offset in pixels.
    pub baseline_px: Span,
    /// Per-glyph extra advance in pixels.
    pub spacing_px: Span,
    /// Per-glyph ink opacity.
    pub opacity: Span,
    /// Half-range of the per-glyph horizontal stroke noise, before intensity scaling.
    pub stroke_noise_x_px: f64,
    /// Half-range of the per-glyph vertical stroke noise, before intensity scaling.
    pub stroke_noise_y_px: f64,
    /// Multiplier applied to the stroke noise.
    pub intensity: f64,
    /// Half-range of the per-pixel channel noise applied to bitmap output.
    pub texture_noise: f64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            rotation_deg: Span::symmetric(2.5),
            size_scale: Span(0.8, 1.2),
            center_x_px: Span::symmetric(5.0),
            center_y_px: Span::symmetric(3.0),
            baseline_px: Span::symmetric(2.0),
            spacing_px: Span(-1.0, 2.0),
            opacity: Span(0.85, 1.0),
            stroke_noise_x_px: 0.5,
            stroke_noise_y_px: 0.3,
            intensity: 1.0,
            texture_noise: 8.0,
        }
    }
}

impl JitterConfig {
    /// Return a copy with every span well-formed and every value in a safe range.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            rotation_deg: self
                .rotation_deg
                .sanitized(d.rotation_deg)
                .clamp_to(-45.0, 45.0),
            size_scale: self.size_scale.sanitized(d.size_scale).clamp_to(0.1, 4.0),
            center_x_px: self.center_x_px.sanitized(d.center_x_px).clamp_to(-100.0, 100.0),
            center_y_px: self.center_y_px.sanitized(d.center_y_px).clamp_to(-100.0, 100.0),
            baseline_px: self.baseline_px.sanitized(d.baseline_px).clamp_to(-50.0, 50.0),
            spacing_px: self.spacing_px.sanitized(d.spacing_px).clamp_to(-50.0, 50.0),
            opacity: self.opacity.sanitized(d.opacity).clamp_to(0.0, 1.0),
            stroke_noise_x_px: finite_or(self.stroke_noise_x_px, d.stroke_noise_x_px)
                .abs()
                .min(10.0),
            stroke_noise_y_px: finite_or(self.stroke_noise_y_px, d.stroke_noise_y_px)
                .abs()
                .min(10.0),
            intensity: finite_or(self.intensity, d.intensity).clamp(0.0, 10.0),
            texture_noise: finite_or(self.texture_noise, d.texture_noise).clamp(0.0, 64.0),
        }
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Whole-string deltas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StringJitter {
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Font-size multiplier.
    pub size_scale: f64,
    /// Horizontal center offset in pixels.
    pub offset_x: f64,
    /// Vertical center offset in pixels.
    pub offset_y: f64,
}

impl StringJitter {
    /// Rotation in radians, as used for drawing.
    pub fn rotation_rad(&self) -> f64 {
        self.rotation_deg.to_radians()
    }
}

/// Per-character deltas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GlyphJitter {
    /// Character the deltas apply to.
    pub ch: char,
    /// Vertical baseline offset in pixels.
    pub baseline_dy: f64,
    /// Extra horizontal advance after this character, in pixels.
    pub spacing: f64,
    /// Ink opacity multiplier.
    pub opacity: f64,
    /// Horizontal stroke noise applied right before drawing.
    pub stroke_dx: f64,
    /// Vertical stroke noise applied right before drawing.
    pub stroke_dy: f64,
}

/// All jitter for one rendered string.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JitterPlan {
    /// Whole-string deltas.
    pub string: StringJitter,
    /// One entry per `char` of the text, in order.
    pub glyphs: Vec<GlyphJitter>,
}

impl JitterPlan {
    /// Draw a plan for `text` from `rng`, in the documented order.
    pub fn sample(text: &str, config: &JitterConfig, rng: &mut SeededSequence) -> Self {
        let string = StringJitter {
            rotation_deg: draw(rng, config.rotation_deg),
            size_scale: draw(rng, config.size_scale),
            offset_x: draw(rng, config.center_x_px),
            offset_y: draw(rng, config.center_y_px),
        };

        let nx = config.stroke_noise_x_px * config.intensity;
        let ny = config.stroke_noise_y_px * config.intensity;
        let glyphs = text
            .chars()
            .map(|ch| GlyphJitter {
                ch,
                baseline_dy: draw(rng, config.baseline_px),
                spacing: draw(rng, config.spacing_px),
                opacity: draw(rng, config.opacity),
                stroke_dx: rng.range(-nx, nx),
                stroke_dy: rng.range(-ny, ny),
            })
            .collect();

        Self { string, glyphs }
    }
}

fn draw(rng: &mut SeededSequence, span: Span) -> f64 {
    rng.range(span.min(), span.max())
}

#[cfg(test)]
#[path = "../../tests/unit/jitter/model.rs"]
mod tests;
