use std::fmt::Write as _;

use crate::foundation::error::InkdateResult;
use crate::jitter::model::JitterPlan;
use crate::render::artifact::{ArtifactPayload, BackendKind, RenderedArtifact};
use crate::render::backend::{RenderBackend, RenderJob};
use crate::seed::sequence::SeededSequence;
use crate::text::fonts::css_font_stack;

/// SVG fallback renderer.
///
/// Only the whole-string rotation and the effective font size survive in this output;
/// per-glyph offsets, opacity and texture noise have no markup counterpart and are
/// dropped. The plan is still drawn in full upstream, so metadata matches the bitmap path
/// for the same seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupRenderer;

impl MarkupRenderer {
    /// Build the SVG document for `job`.
    pub fn document(&self, job: &RenderJob, plan: &JitterPlan) -> String {
        let w = job.canvas.width;
        let h = job.canvas.height;
        let center = job.canvas.center();
        let size = job.effective_font_size(plan);

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if let Some(bg) = job.background.filter(|c| !c.is_transparent()) {
            let _ = write!(
                svg,
                r#"<rect width="{w}" height="{h}" fill="{}" fill-opacity="{}"/>"#,
                bg.to_hex_rgb(),
                fmt_num(bg.opacity()),
            );
        }
        let _ = write!(
            svg,
            r#"<text x="{cx}" y="{cy}" font-family="{family}" font-size="{size}" fill="{fill}" fill-opacity="{alpha}" text-anchor="middle" dominant-baseline="middle" transform="rotate({rot} {cx} {cy})">{text}</text>"#,
            cx = fmt_num(center.x),
            cy = fmt_num(center.y),
            family = xml_escape(&css_font_stack(&job.font_family)),
            size = fmt_num(size),
            fill = job.ink.to_hex_rgb(),
            alpha = fmt_num(job.ink.opacity()),
            rot = fmt_num(plan.string.rotation_deg),
            text = xml_escape(&job.text),
        );
        svg.push_str("</svg>");
        svg
    }
}

impl RenderBackend for MarkupRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::Markup
    }

    fn render(
        &self,
        job: &RenderJob,
        plan: &JitterPlan,
        _rng: &mut SeededSequence,
    ) -> InkdateResult<RenderedArtifact> {
        Ok(RenderedArtifact {
            payload: ArtifactPayload::Svg(self.document(job, plan)),
            metadata: job.metadata(plan, BackendKind::Markup),
        })
    }
}

/// Fixed-precision number formatting for attributes; trims trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub(crate) fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/markup.rs"]
mod tests;
