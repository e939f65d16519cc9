use std::fmt::Write as _;

use crate::composite::blend::{PremulView, blit_over};
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, MIN_DIM, Placement};
use crate::foundation::error::InkdateResult;
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};
use crate::render::artifact::{RasterImage, data_uri, encode_png};
use crate::render::markup::fmt_num;

/// Axis-aligned pixel rectangle inside a composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Slot {
    /// Center `w × h` inside this slot.
    pub fn center(self, w: u32, h: u32) -> (i64, i64) {
        (
            i64::from(self.x) + (i64::from(self.width) - i64::from(w)) / 2,
            i64::from(self.y) + (i64::from(self.height) - i64::from(h)) / 2,
        )
    }
}

/// Where the signature and the date go on a composite canvas.
///
/// The signature slot is `signature_fraction` of the canvas height (capped to the padded
/// area); the date gets what is left after padding. The date slot has the same size whether
/// or not a signature ends up being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeLayout {
    /// Output surface.
    pub canvas: Canvas,
    /// Box the signature is fitted into.
    pub signature: Slot,
    /// Box the date is rendered at.
    pub date: Slot,
}

impl CompositeLayout {
    /// Compute slots for the given canvas and placement options.
    ///
    /// `padding` is clamped so that at least [`MIN_DIM`] pixels of inner area remain.
    /// When both layers ask for the same edge the date is stacked on the inner side of the
    /// signature.
    pub fn compute(
        canvas: Canvas,
        padding: u32,
        signature_fraction: f64,
        signature_position: Placement,
        date_position: Placement,
    ) -> Self {
        let (w, h) = (canvas.width, canvas.height);
        let max_pad = (w.min(h).saturating_sub(MIN_DIM)) / 2;
        let pad = padding.min(max_pad);
        let inner_w = w - 2 * pad;
        let inner_h = h - 2 * pad;

        let fraction = if signature_fraction.is_finite() {
            signature_fraction.clamp(0.0, 1.0)
        } else {
            0.6
        };
        let sig_h = ((f64::from(h) * fraction).round() as u32).min(inner_h);
        let date_h = inner_h.saturating_sub(sig_h).saturating_sub(pad).max(1);

        let at = |placement: Placement, height: u32| match placement {
            Placement::Top => pad,
            Placement::Bottom => h - pad - height.min(inner_h),
        };

        let sig_y = at(signature_position, sig_h);
        let date_y = if signature_position == date_position {
            match signature_position {
                Placement::Top => (sig_y + sig_h + pad).min(h - pad - date_h.min(inner_h)),
                Placement::Bottom => sig_y.saturating_sub(pad + date_h).max(pad),
            }
        } else {
            at(date_position, date_h)
        };

        Self {
            canvas,
            signature: Slot {
                x: pad,
                y: sig_y,
                width: inner_w,
                height: sig_h,
            },
            date: Slot {
                x: pad,
                y: date_y,
                width: inner_w,
                height: date_h.min(inner_h),
            },
        }
    }
}

/// Raster composite: background, then signature, then the date raster.
///
/// `signature` and `date` are straight-alpha; the result is straight-alpha too.
pub(crate) fn composite_bitmap(
    layout: &CompositeLayout,
    background: Option<Color>,
    signature: Option<&image::RgbaImage>,
    date: &RasterImage,
) -> InkdateResult<RasterImage> {
    let Canvas { width, height } = layout.canvas;
    let mut buf = vec![0u8; layout.canvas.rgba_len()];
    if let Some(bg) = background.filter(|c| !c.is_transparent()) {
        let mut px = bg.to_rgba8();
        premultiply_rgba8_in_place(&mut px);
        for dst in buf.chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }

    if let Some(sig) = signature {
        let mut premul = sig.as_raw().clone();
        premultiply_rgba8_in_place(&mut premul);
        let (x, y) = layout.signature.center(sig.width(), sig.height());
        let view = PremulView {
            data: &premul,
            width: sig.width(),
            height: sig.height(),
        };
        blit_over(&mut buf, width, height, view, x, y)?;
    }

    let mut premul = date.rgba.clone();
    premultiply_rgba8_in_place(&mut premul);
    let (x, y) = layout.date.center(date.width, date.height);
    let view = PremulView {
        data: &premul,
        width: date.width,
        height: date.height,
    };
    blit_over(&mut buf, width, height, view, x, y)?;

    unpremultiply_rgba8_in_place(&mut buf);
    RasterImage::encode(width, height, buf)
}

/// SVG composite: the signature is embedded as a PNG data URI, the date as an SVG data URI.
pub(crate) fn composite_markup(
    layout: &CompositeLayout,
    background: Option<Color>,
    signature: Option<&image::RgbaImage>,
    date_svg: &str,
) -> InkdateResult<String> {
    let Canvas { width: w, height: h } = layout.canvas;
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    if let Some(bg) = background.filter(|c| !c.is_transparent()) {
        let _ = write!(
            svg,
            r#"<rect width="{w}" height="{h}" fill="{}" fill-opacity="{}"/>"#,
            bg.to_hex_rgb(),
            fmt_num(bg.opacity()),
        );
    }
    if let Some(sig) = signature {
        let png = encode_png(sig.as_raw(), sig.width(), sig.height())?;
        let (x, y) = layout.signature.center(sig.width(), sig.height());
        let _ = write!(
            svg,
            r#"<image x="{x}" y="{y}" width="{}" height="{}" href="{}"/>"#,
            sig.width(),
            sig.height(),
            data_uri("image/png", &png),
        );
    }
    let d = layout.date;
    let _ = write!(
        svg,
        r#"<image x="{}" y="{}" width="{}" height="{}" href="{}"/>"#,
        d.x,
        d.y,
        d.width,
        d.height,
        data_uri("image/svg+xml", date_svg.as_bytes()),
    );
    svg.push_str("</svg>");
    Ok(svg)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/compositor.rs"]
mod tests;
