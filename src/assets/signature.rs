use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assets::decode::{decode_image, parse_svg, rasterize_svg_to_premul_rgba8};
use crate::foundation::error::{InkdateError, InkdateResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

#[derive(Clone, Debug)]
enum SignatureSource {
    Raster(image::RgbaImage),
    Svg(Arc<usvg::Tree>),
}

/// A decoded signature image, ready to be fitted into a composite.
#[derive(Clone, Debug)]
pub struct LoadedSignature {
    path: PathBuf,
    source: SignatureSource,
}

impl LoadedSignature {
    /// Decode signature bytes; `path` picks the decoder (`.svg` or markup content ⇒ SVG).
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8]) -> InkdateResult<Self> {
        let path = path.into();
        let source = if looks_like_svg(&path, bytes) {
            SignatureSource::Svg(parse_svg(bytes)?)
        } else {
            SignatureSource::Raster(decode_image(bytes)?)
        };
        Ok(Self { path, source })
    }

    /// Where the signature was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Natural size in pixels (SVG user units for vector signatures).
    pub fn intrinsic_size(&self) -> (f64, f64) {
        match &self.source {
            SignatureSource::Raster(img) => (f64::from(img.width()), f64::from(img.height())),
            SignatureSource::Svg(tree) => (
                f64::from(tree.size().width()),
                f64::from(tree.size().height()),
            ),
        }
    }

    /// Scale into a `max_w × max_h` box, preserving aspect ratio.
    ///
    /// Raster signatures are resampled in premultiplied space; the result is straight alpha.
    pub fn fitted(&self, max_w: u32, max_h: u32) -> InkdateResult<image::RgbaImage> {
        let (src_w, src_h) = self.intrinsic_size();
        let (w, h) = fit_size(src_w, src_h, max_w, max_h)
            .ok_or_else(|| InkdateError::asset("signature has no usable size"))?;

        let mut rgba = match &self.source {
            SignatureSource::Raster(img) => {
                let mut premul = img.as_raw().clone();
                premultiply_rgba8_in_place(&mut premul);
                let premul = image::RgbaImage::from_raw(img.width(), img.height(), premul)
                    .ok_or_else(|| InkdateError::asset("signature buffer size mismatch"))?;
                image::imageops::resize(&premul, w, h, image::imageops::FilterType::Lanczos3)
                    .into_raw()
            }
            SignatureSource::Svg(tree) => rasterize_svg_to_premul_rgba8(tree, w, h)?,
        };
        unpremultiply_rgba8_in_place(&mut rgba);
        image::RgbaImage::from_raw(w, h, rgba)
            .ok_or_else(|| InkdateError::asset("signature buffer size mismatch"))
    }
}

/// Read and decode a signature from disk.
pub fn load_signature(path: &Path) -> InkdateResult<LoadedSignature> {
    let bytes = std::fs::read(path).map_err(|e| {
        InkdateError::asset(format!("failed to read signature '{}': {e}", path.display()))
    })?;
    LoadedSignature::from_bytes(path, &bytes)
}

/// Async variant of [`load_signature`] reading through `tokio::fs`.
pub async fn load_signature_async(path: &Path) -> InkdateResult<LoadedSignature> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        InkdateError::asset(format!("failed to read signature '{}': {e}", path.display()))
    })?;
    LoadedSignature::from_bytes(path, &bytes)
}

/// Largest size with the aspect of `src_w × src_h` that fits `max_w × max_h`.
pub(crate) fn fit_size(src_w: f64, src_h: f64, max_w: u32, max_h: u32) -> Option<(u32, u32)> {
    if !(src_w.is_finite() && src_h.is_finite()) || src_w <= 0.0 || src_h <= 0.0 {
        return None;
    }
    if max_w == 0 || max_h == 0 {
        return None;
    }
    let scale = (f64::from(max_w) / src_w).min(f64::from(max_h) / src_h);
    let w = ((src_w * scale).round() as u32).clamp(1, max_w);
    let h = ((src_h * scale).round() as u32).clamp(1, max_h);
    Some((w, h))
}

fn looks_like_svg(path: &Path, bytes: &[u8]) -> bool {
    let by_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    by_ext || bytes.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'<')
}

#[cfg(test)]
#[path = "../../tests/unit/assets/signature.rs"]
mod tests;
