//! inkdate synthesizes "handwritten" date images deterministically from a seed.
//!
//! A request is turned into text by [`format_date`], jittered glyph by glyph from a
//! [`SeededSequence`] (seeded per calendar day by [`daily_seed`] unless an explicit seed is
//! given), and rendered by one of two backends:
//!
//! - a CPU bitmap renderer producing PNG, used whenever a font face can be loaded
//! - an SVG markup renderer used otherwise, or for a single call whose bitmap render failed
//!
//! [`HandwritingEngine`] is the entry point. It also composites a handwritten date with a
//! signature image.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composite;
mod engine;
mod foundation;
mod jitter;
mod render;
mod seed;
mod style;
mod text;

pub use crate::assets::decode::{decode_image, parse_svg};
pub use crate::assets::signature::{LoadedSignature, load_signature, load_signature_async};
pub use crate::composite::compositor::{CompositeLayout, Slot};
pub use crate::engine::config::{
    BackendPreference, CompositeDefaults, EngineConfig, GenerationDefaults, MAX_VARIATIONS,
};
pub use crate::engine::handwriting::{HandwritingEngine, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use crate::engine::options::{CompositeOptions, GenerateOptions};
pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Affine, Canvas, MAX_DIM, MIN_DIM, Placement, Point, Span, Vec2};
pub use crate::foundation::error::{InkdateError, InkdateResult};
pub use crate::jitter::model::{GlyphJitter, JitterConfig, JitterPlan, StringJitter};
pub use crate::render::artifact::{
    ArtifactMetadata, ArtifactPayload, BackendKind, RasterImage, RenderedArtifact,
};
pub use crate::render::backend::{RenderBackend, RenderCapability, RenderJob, create_backend};
pub use crate::render::bitmap::BitmapRenderer;
pub use crate::render::markup::MarkupRenderer;
pub use crate::render::noise::apply_texture_noise;
pub use crate::seed::daily::{daily_seed, daily_seed_for};
pub use crate::seed::sequence::SeededSequence;
pub use crate::style::catalog::{HandwritingStyle, StyleCatalog};
pub use crate::style::profile::{ProfileRegistry, StyleTransferProfile};
pub use crate::text::fonts::{
    FALLBACK_FAMILIES, FONT_ENV_VAR, FontBook, FontConfig, FontFace, FontFaceConfig,
};
pub use crate::text::format::{DateFormat, format_date};
