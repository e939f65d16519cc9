use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;
use base64::Engine as _;
use serde::Serialize;

use crate::foundation::error::{InkdateError, InkdateResult};

/// Which renderer produced an artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// CPU raster output (PNG).
    Bitmap,
    /// Vector markup output (SVG).
    Markup,
}

/// Straight-alpha RGBA8 pixels together with their PNG encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA8 bytes, tightly packed, row-major.
    pub rgba: Vec<u8>,
    /// PNG encoding of `rgba`.
    pub png: Vec<u8>,
}

impl RasterImage {
    /// Encode `rgba` and bundle it with its PNG bytes.
    pub fn encode(width: u32, height: u32, rgba: Vec<u8>) -> InkdateResult<Self> {
        let png = encode_png(&rgba, width, height)?;
        Ok(Self {
            width,
            height,
            rgba,
            png,
        })
    }
}

/// Artifact payload: exactly one representation per artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArtifactPayload {
    /// Raster output from the bitmap backend.
    Png(RasterImage),
    /// Self-contained SVG document from the markup backend.
    Svg(String),
}

/// Flat, serializable description of how an artifact was produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMetadata {
    /// The date text that was drawn.
    pub formatted_date: String,
    /// Seed the jitter sequence was started from.
    pub seed: u32,
    /// Requested font family.
    pub font_family: String,
    /// Effective font size after profile and jitter scaling.
    pub font_size: f64,
    /// Whole-string rotation in degrees.
    pub rotation: f64,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Renderer that produced the payload.
    pub backend: BackendKind,
    /// Handwriting style applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Style transfer profile applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// For composites: whether the signature layer made it into the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_included: Option<bool>,
}

/// A rendered date (or composite) plus its metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedArtifact {
    /// Image payload.
    pub payload: ArtifactPayload,
    /// Generation metadata.
    pub metadata: ArtifactMetadata,
}

impl RenderedArtifact {
    /// MIME type of the payload.
    pub fn mime_type(&self) -> &'static str {
        match self.payload {
            ArtifactPayload::Png(_) => "image/png",
            ArtifactPayload::Svg(_) => "image/svg+xml",
        }
    }

    /// File extension matching the payload.
    pub fn extension(&self) -> &'static str {
        match self.payload {
            ArtifactPayload::Png(_) => "png",
            ArtifactPayload::Svg(_) => "svg",
        }
    }

    /// Encoded payload bytes (PNG bytes or UTF-8 SVG text).
    pub fn bytes(&self) -> &[u8] {
        match &self.payload {
            ArtifactPayload::Png(r) => &r.png,
            ArtifactPayload::Svg(s) => s.as_bytes(),
        }
    }

    /// Base64 data URI suitable for embedding in HTML or another SVG.
    pub fn data_uri(&self) -> String {
        data_uri(self.mime_type(), self.bytes())
    }

    /// Raster payload, when produced by the bitmap backend.
    pub fn raster(&self) -> Option<&RasterImage> {
        match &self.payload {
            ArtifactPayload::Png(r) => Some(r),
            ArtifactPayload::Svg(_) => None,
        }
    }

    /// SVG payload, when produced by the markup backend.
    pub fn svg(&self) -> Option<&str> {
        match &self.payload {
            ArtifactPayload::Png(_) => None,
            ArtifactPayload::Svg(s) => Some(s),
        }
    }

    /// Write the encoded payload to `path`, creating parent directories.
    pub fn write_to(&self, path: impl AsRef<Path>) -> InkdateResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(path, self.bytes())
            .with_context(|| format!("write artifact '{}'", path.display()))?;
        Ok(())
    }
}

pub(crate) fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

pub(crate) fn encode_png(rgba: &[u8], width: u32, height: u32) -> InkdateResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, rgba.to_vec())
        .ok_or_else(|| InkdateError::render("rgba buffer does not match dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| InkdateError::render(format!("png encode failed: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/render/artifact.rs"]
mod tests;
