use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{InkdateError, InkdateResult};

/// Decode any raster format `image` understands into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> InkdateResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(InkdateError::asset("decoded image is empty"));
    }
    Ok(rgba)
}

/// Parse an SVG document.
pub fn parse_svg(bytes: &[u8]) -> InkdateResult<Arc<usvg::Tree>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(Arc::new(tree))
}

/// Rasterize `tree` stretched to exactly `width × height`; returns premultiplied RGBA8.
pub(crate) fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> InkdateResult<Vec<u8>> {
    let size = tree.size();
    if !(size.width().is_finite() && size.height().is_finite())
        || size.width() <= 0.0
        || size.height() <= 0.0
    {
        return Err(InkdateError::asset("svg has invalid width/height"));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| InkdateError::asset("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
