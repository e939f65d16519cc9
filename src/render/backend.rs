use crate::foundation::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::InkdateResult;
use crate::jitter::model::{JitterConfig, JitterPlan};
use crate::render::artifact::{ArtifactMetadata, BackendKind, RenderedArtifact};
use crate::render::bitmap::BitmapRenderer;
use crate::render::markup::MarkupRenderer;
use crate::seed::sequence::SeededSequence;
use crate::text::fonts::{FontBook, FontConfig};

/// Fully resolved input for one date render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderJob {
    /// Date text to draw.
    pub text: String,
    /// Output surface.
    pub canvas: Canvas,
    /// Requested font family.
    pub font_family: String,
    /// Base font size in pixels, before the jitter scale.
    pub font_size: f64,
    /// Ink color.
    pub ink: Color,
    /// Background fill; `None` leaves the surface transparent.
    pub background: Option<Color>,
    /// Variance ranges the plan was drawn with.
    pub jitter: JitterConfig,
    /// Seed the plan was drawn from.
    pub seed: u32,
}

impl RenderJob {
    /// Font size after the plan's whole-string scale.
    pub fn effective_font_size(&self, plan: &JitterPlan) -> f64 {
        self.font_size * plan.string.size_scale
    }

    pub(crate) fn metadata(&self, plan: &JitterPlan, backend: BackendKind) -> ArtifactMetadata {
        ArtifactMetadata {
            formatted_date: self.text.clone(),
            seed: self.seed,
            font_family: self.font_family.clone(),
            font_size: self.effective_font_size(plan),
            rotation: plan.string.rotation_deg,
            width: self.canvas.width,
            height: self.canvas.height,
            backend,
            style: None,
            profile: None,
            signature_included: None,
        }
    }
}

/// A renderer that turns a [`RenderJob`] and its [`JitterPlan`] into an artifact.
///
/// `rng` is the same sequence the plan was drawn from, positioned right after the plan's
/// draws. Renderers that need more randomness continue drawing from it.
pub trait RenderBackend: Send + Sync {
    /// Which output this backend produces.
    fn kind(&self) -> BackendKind;

    /// Render one job.
    fn render(
        &self,
        job: &RenderJob,
        plan: &JitterPlan,
        rng: &mut SeededSequence,
    ) -> InkdateResult<RenderedArtifact>;
}

/// What the host can render, decided once when an engine is built.
#[derive(Clone, Debug)]
pub enum RenderCapability {
    /// Raster rendering with the given fonts.
    Bitmap(FontBook),
    /// No usable font; only SVG markup can be produced.
    MarkupOnly,
}

impl RenderCapability {
    /// Probe the configured fonts.
    pub fn probe(fonts: &FontConfig) -> Self {
        let book = FontBook::load(fonts);
        if book.is_empty() {
            tracing::warn!("no usable font face found; rendering svg markup for this engine");
            Self::MarkupOnly
        } else {
            tracing::info!(faces = book.faces().len(), "bitmap rendering available");
            Self::Bitmap(book)
        }
    }

    /// Backend kind this capability selects.
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Bitmap(_) => BackendKind::Bitmap,
            Self::MarkupOnly => BackendKind::Markup,
        }
    }
}

/// Create the backend selected by `capability`.
pub fn create_backend(capability: &RenderCapability) -> Box<dyn RenderBackend> {
    match capability {
        RenderCapability::Bitmap(book) => Box::new(BitmapRenderer::new(book.clone())),
        RenderCapability::MarkupOnly => Box::new(MarkupRenderer),
    }
}
