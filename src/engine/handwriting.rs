use std::path::Path;

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::assets::signature::{LoadedSignature, load_signature, load_signature_async};
use crate::composite::compositor::{CompositeLayout, composite_bitmap, composite_markup};
use crate::engine::config::{BackendPreference, EngineConfig, MAX_VARIATIONS};
use crate::engine::options::{CompositeOptions, GenerateOptions};
use crate::foundation::core::Canvas;
use crate::foundation::error::InkdateResult;
use crate::jitter::model::JitterPlan;
use crate::render::artifact::{ArtifactPayload, BackendKind, RenderedArtifact};
use crate::render::backend::{RenderBackend, RenderCapability, RenderJob, create_backend};
use crate::render::markup::MarkupRenderer;
use crate::seed::daily::daily_seed;
use crate::seed::sequence::SeededSequence;
use crate::style::catalog::{HandwritingStyle, StyleCatalog};
use crate::style::profile::{ProfileRegistry, StyleTransferProfile};
use crate::text::format::format_date;

/// Smallest base font size accepted, in pixels.
pub const MIN_FONT_SIZE: f64 = 6.0;
/// Largest base font size accepted, in pixels.
pub const MAX_FONT_SIZE: f64 = 400.0;

/// Entry point for date generation and signature compositing.
///
/// The render capability is decided once, at construction, and fixes the backend for the
/// engine's lifetime. Every call owns its own [`SeededSequence`], so an engine can be
/// shared across threads freely.
pub struct HandwritingEngine {
    config: EngineConfig,
    capability: RenderCapability,
    backend: Box<dyn RenderBackend>,
    styles: StyleCatalog,
    profiles: ProfileRegistry,
}

struct Resolved<'a> {
    job: RenderJob,
    style: Option<&'a HandwritingStyle>,
    profile: Option<&'a StyleTransferProfile>,
}

impl HandwritingEngine {
    /// Build an engine, probing fonts unless the configuration forces markup output.
    pub fn new(config: EngineConfig) -> InkdateResult<Self> {
        let capability = match config.backend {
            BackendPreference::Markup => {
                tracing::info!("markup backend selected by configuration");
                RenderCapability::MarkupOnly
            }
            BackendPreference::Auto => RenderCapability::probe(&config.fonts),
        };
        Self::with_capability(config, capability)
    }

    /// Build an engine around an already decided capability.
    pub fn with_capability(
        config: EngineConfig,
        capability: RenderCapability,
    ) -> InkdateResult<Self> {
        let styles = StyleCatalog::from_styles(config.styles.iter().cloned())?;
        let profiles = ProfileRegistry::with_custom(config.profiles.iter().cloned());
        let backend = create_backend(&capability);
        Ok(Self {
            config,
            capability,
            backend,
            styles,
            profiles,
        })
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Capability decided at construction.
    pub fn capability(&self) -> &RenderCapability {
        &self.capability
    }

    /// Backend every call is served by (barring per-call fallback).
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Configured handwriting styles.
    pub fn styles(&self) -> &StyleCatalog {
        &self.styles
    }

    /// Built-in and configured style transfer profiles.
    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    fn lookup_style(&self, name: Option<&str>) -> Option<&HandwritingStyle> {
        let name = name?;
        let style = self.styles.get(name);
        if style.is_none() {
            tracing::warn!(style = name, "unknown handwriting style; using defaults");
        }
        style
    }

    fn lookup_profile(&self, name: Option<&str>) -> Option<&StyleTransferProfile> {
        let name = name?;
        let profile = self.profiles.get(name);
        if profile.is_none() {
            tracing::warn!(profile = name, "unknown style transfer profile; ignoring");
        }
        profile
    }

    /// Merge request, style and configuration into a render job.
    ///
    /// Precedence per field: explicit option, then style, then configuration.
    fn resolve(&self, opts: &GenerateOptions) -> Resolved<'_> {
        let g = &self.config.generation;
        let style = self.lookup_style(opts.style.as_deref());
        let profile = self.lookup_profile(opts.profile.as_deref());

        let date = opts
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let text = format_date(date, opts.format.unwrap_or(g.format));

        let font_family = opts
            .font_family
            .clone()
            .or_else(|| style.map(|s| s.font_family.clone()))
            .unwrap_or_else(|| g.font_family.clone());

        let base_size = opts
            .font_size
            .or_else(|| style.map(|s| s.base_font_size_pt))
            .unwrap_or(g.font_size);
        let base_size = clamp_font_size(base_size, g.font_size);
        let font_size = profile.map_or(base_size, |p| {
            clamp_font_size(p.apply_to_font_size(base_size), base_size)
        });

        let base_jitter = self.config.jitter.sanitized();
        let jitter = style.map_or(base_jitter, |s| s.jitter_config(&base_jitter, font_size));

        let seed = opts.variation_seed.unwrap_or_else(|| daily_seed(date));

        let job = RenderJob {
            text,
            canvas: Canvas::clamped(
                opts.width.unwrap_or(g.width),
                opts.height.unwrap_or(g.height),
            ),
            font_family,
            font_size,
            ink: opts.ink_color.unwrap_or(g.ink_color),
            background: opts.background_color.or(g.background_color),
            jitter,
            seed,
        };
        Resolved {
            job,
            style,
            profile,
        }
    }

    fn render(&self, resolved: Resolved<'_>) -> InkdateResult<RenderedArtifact> {
        let Resolved {
            job,
            style,
            profile,
        } = resolved;
        tracing::debug!(seed = job.seed, text = %job.text, "rendering date");

        let mut rng = SeededSequence::new(job.seed);
        let plan = JitterPlan::sample(&job.text, &job.jitter, &mut rng);
        let mut artifact = match self.backend.render(&job, &plan, &mut rng) {
            Ok(a) => a,
            Err(err) if self.backend.kind() == BackendKind::Bitmap => {
                tracing::warn!(error = %err, "bitmap render failed; serving markup for this call");
                MarkupRenderer.render(&job, &plan, &mut rng)?
            }
            Err(err) => return Err(err),
        };
        artifact.metadata.style = style.map(|s| s.name.clone());
        artifact.metadata.profile = profile.map(|p| p.name.clone());
        Ok(artifact)
    }

    /// Render one handwritten date.
    #[tracing::instrument(skip(self, opts))]
    pub fn generate_handwritten_date(
        &self,
        opts: &GenerateOptions,
    ) -> InkdateResult<RenderedArtifact> {
        self.render(self.resolve(opts))
    }

    /// Render up to ten variations of `date`, in index order.
    ///
    /// Variation `i` uses seed `base + i * variation_stride` (wrapping), where `base` is the
    /// explicit seed in `opts` or the daily seed of `date`. `count` is clamped; zero yields an
    /// empty list.
    #[tracing::instrument(skip(self, opts))]
    pub fn generate_date_variations(
        &self,
        date: NaiveDate,
        count: usize,
        opts: &GenerateOptions,
    ) -> InkdateResult<Vec<RenderedArtifact>> {
        let limit = self.config.max_variations.min(MAX_VARIATIONS);
        let count = count.min(limit);
        let base = opts.variation_seed.unwrap_or_else(|| daily_seed(date));
        let stride = self.config.variation_stride;
        tracing::debug!(base, stride, count, "generating variations");

        (0..count)
            .into_par_iter()
            .map(|i| {
                let seed = base.wrapping_add((i as u32).wrapping_mul(stride));
                let mut o = opts.clone();
                o.date = Some(date);
                o.variation_seed = Some(seed);
                self.generate_handwritten_date(&o)
            })
            .collect()
    }

    /// Composite a signature (if any) with a handwritten date.
    ///
    /// A signature that cannot be read or decoded is logged and left out; the date is
    /// always rendered.
    #[tracing::instrument(skip(self, opts))]
    pub fn composite_signature_with_date(
        &self,
        signature: Option<&Path>,
        date: NaiveDate,
        opts: &CompositeOptions,
    ) -> InkdateResult<RenderedArtifact> {
        let loaded = signature.map(load_signature);
        self.composite(loaded, date, opts)
    }

    /// Async variant of [`HandwritingEngine::composite_signature_with_date`]; the signature
    /// is read with `tokio::fs`, the rendering itself runs inline.
    #[tracing::instrument(skip(self, opts))]
    pub async fn composite_signature_with_date_async(
        &self,
        signature: Option<&Path>,
        date: NaiveDate,
        opts: &CompositeOptions,
    ) -> InkdateResult<RenderedArtifact> {
        let loaded = match signature {
            Some(path) => Some(load_signature_async(path).await),
            None => None,
        };
        self.composite(loaded, date, opts)
    }

    fn composite(
        &self,
        loaded: Option<InkdateResult<LoadedSignature>>,
        date: NaiveDate,
        opts: &CompositeOptions,
    ) -> InkdateResult<RenderedArtifact> {
        let d = &self.config.composite;
        let canvas = Canvas::clamped(
            opts.output_width.unwrap_or(d.width),
            opts.output_height.unwrap_or(d.height),
        );
        let padding = opts.padding.unwrap_or(d.padding).clamp(0, i64::from(u32::MAX)) as u32;
        let layout = CompositeLayout::compute(
            canvas,
            padding,
            opts.signature_height_fraction
                .unwrap_or(d.signature_height_fraction),
            opts.signature_position.unwrap_or(d.signature_position),
            opts.date_position.unwrap_or(d.date_position),
        );

        let signature = loaded.and_then(|res| {
            let fitted = res.and_then(|s| {
                tracing::debug!(path = %s.path().display(), "fitting signature");
                s.fitted(layout.signature.width, layout.signature.height)
            });
            match fitted {
                Ok(img) => Some(img),
                Err(err) => {
                    tracing::warn!(error = %err, "signature unavailable; compositing date only");
                    None
                }
            }
        });

        let mut date_opts = opts.date.clone();
        date_opts.date = Some(date);
        date_opts.width = Some(i64::from(layout.date.width));
        date_opts.height = Some(i64::from(layout.date.height));
        let date_artifact = self.generate_handwritten_date(&date_opts)?;

        let payload = match &date_artifact.payload {
            ArtifactPayload::Png(raster) => ArtifactPayload::Png(composite_bitmap(
                &layout,
                opts.background_color,
                signature.as_ref(),
                raster,
            )?),
            ArtifactPayload::Svg(svg) => ArtifactPayload::Svg(composite_markup(
                &layout,
                opts.background_color,
                signature.as_ref(),
                svg,
            )?),
        };

        let mut metadata = date_artifact.metadata;
        metadata.width = canvas.width;
        metadata.height = canvas.height;
        metadata.signature_included = Some(signature.is_some());
        Ok(RenderedArtifact { payload, metadata })
    }
}

fn clamp_font_size(size: f64, fallback: f64) -> f64 {
    let size = if size.is_finite() { size } else { fallback };
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/handwriting.rs"]
mod tests;
