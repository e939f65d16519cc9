use crate::foundation::core::{Affine, Vec2};
use crate::foundation::error::{InkdateError, InkdateResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::jitter::model::JitterPlan;
use crate::render::artifact::{ArtifactPayload, BackendKind, RasterImage, RenderedArtifact};
use crate::render::backend::{RenderBackend, RenderJob};
use crate::render::noise::apply_texture_noise;
use crate::seed::sequence::SeededSequence;
use crate::text::fonts::{FontBook, FontFace};
use crate::text::layout::{TextBrushRgba8, TextLayoutEngine};

/// CPU raster renderer backed by `vello_cpu` and `parley`.
///
/// Every character is shaped on its own so that each one can carry its own baseline offset,
/// spacing, opacity and stroke displacement. The whole run is then rotated about the
/// (jittered) canvas center.
#[derive(Clone, Debug)]
pub struct BitmapRenderer {
    fonts: FontBook,
}

struct ShapedGlyph {
    layout: parley::Layout<TextBrushRgba8>,
    width: f64,
    height: f64,
}

impl BitmapRenderer {
    /// Renderer drawing with faces from `fonts`.
    pub fn new(fonts: FontBook) -> Self {
        Self { fonts }
    }

    fn face_for(&self, family: &str) -> InkdateResult<&FontFace> {
        self.fonts
            .resolve(family)
            .ok_or_else(|| InkdateError::render("no font face available for bitmap rendering"))
    }

    /// Rasterize `job` into premultiplied RGBA8 bytes.
    fn rasterize(&self, job: &RenderJob, plan: &JitterPlan) -> InkdateResult<Vec<u8>> {
        let face = self.face_for(&job.font_family)?;
        let mut engine = TextLayoutEngine::for_font(&face.bytes)?;
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()),
            0,
        );

        let size_px = job.effective_font_size(plan) as f32;
        let brush = TextBrushRgba8::from_rgba8(job.ink.to_rgba8());

        let mut shaped = Vec::with_capacity(plan.glyphs.len());
        for glyph in &plan.glyphs {
            let mut buf = [0u8; 4];
            let layout = engine.layout_line(glyph.ch.encode_utf8(&mut buf), size_px, brush)?;
            let width = f64::from(layout.full_width());
            let height = f64::from(layout.height());
            shaped.push(ShapedGlyph {
                layout,
                width,
                height,
            });
        }

        let total: f64 = shaped
            .iter()
            .zip(&plan.glyphs)
            .map(|(s, g)| s.width + g.spacing)
            .sum();

        let w: u16 = job
            .canvas
            .width
            .try_into()
            .map_err(|_| InkdateError::render("canvas width exceeds u16"))?;
        let h: u16 = job
            .canvas
            .height
            .try_into()
            .map_err(|_| InkdateError::render("canvas height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());

        if let Some(bg) = job.background.filter(|c| !c.is_transparent()) {
            let [r, g, b, a] = bg.to_rgba8();
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));
        }

        let center = job.canvas.center();
        let base = Affine::translate(Vec2::new(
            center.x + plan.string.offset_x,
            center.y + plan.string.offset_y,
        )) * Affine::rotate(plan.string.rotation_rad());

        let mut pen_x = -total / 2.0;
        for (s, g) in shaped.iter().zip(&plan.glyphs) {
            let tr = base
                * Affine::translate(Vec2::new(
                    pen_x + g.stroke_dx,
                    g.baseline_dy + g.stroke_dy - s.height / 2.0,
                ));
            ctx.set_transform(affine_to_cpu(tr));
            let opacity = g.opacity.clamp(0.0, 1.0) as f32;
            if opacity < 1.0 {
                ctx.push_opacity_layer(opacity);
            }
            draw_layout(&mut ctx, &font, &s.layout);
            if opacity < 1.0 {
                ctx.pop_layer();
            }
            pen_x += s.width + g.spacing;
        }

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        Ok(pixmap.data_as_u8_slice().to_vec())
    }
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrushRgba8>,
) {
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

impl RenderBackend for BitmapRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::Bitmap
    }

    fn render(
        &self,
        job: &RenderJob,
        plan: &JitterPlan,
        rng: &mut SeededSequence,
    ) -> InkdateResult<RenderedArtifact> {
        let mut rgba = self.rasterize(job, plan)?;
        unpremultiply_rgba8_in_place(&mut rgba);
        let touched = apply_texture_noise(&mut rgba, job.jitter.texture_noise, rng);
        tracing::trace!(touched, "applied texture noise");

        let image = RasterImage::encode(job.canvas.width, job.canvas.height, rgba)?;
        Ok(RenderedArtifact {
            payload: ArtifactPayload::Png(image),
            metadata: job.metadata(plan, BackendKind::Bitmap),
        })
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
