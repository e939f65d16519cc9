use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Span;
use crate::foundation::error::{InkdateError, InkdateResult};
use crate::jitter::model::JitterConfig;

/// Administrator-defined handwriting style.
///
/// Styles are never hard-deleted: deactivation hides a style from new documents while
/// keeping it renderable for documents that already reference it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandwritingStyle {
    /// Unique name.
    pub name: String,
    /// Font family requested when rendering with this style.
    pub font_family: String,
    /// Base font size, rendered one point per pixel.
    pub base_font_size_pt: f64,
    /// Whole-string rotation range in degrees.
    pub rotation_variance_deg: Span,
    /// Per-glyph spacing range in em; multiplied by the font size to get pixels.
    pub spacing_variance_em: Span,
    /// Stroke width factor range; its midpoint becomes the stroke-noise intensity.
    pub stroke_width_variance_factor: Span,
    /// `false` once soft-deleted.
    #[serde(default = "yes")]
    pub active: bool,
}

fn yes() -> bool {
    true
}

impl HandwritingStyle {
    /// Overlay this style's variance ranges on `base` for a given effective font size.
    pub fn jitter_config(&self, base: &JitterConfig, font_size: f64) -> JitterConfig {
        JitterConfig {
            rotation_deg: self.rotation_variance_deg,
            spacing_px: Span(
                self.spacing_variance_em.min() * font_size,
                self.spacing_variance_em.max() * font_size,
            ),
            intensity: self.stroke_width_variance_factor.mid(),
            ..*base
        }
        .sanitized()
    }

    fn validate(&self) -> InkdateResult<()> {
        if self.name.trim().is_empty() {
            return Err(InkdateError::validation("style name must be non-empty"));
        }
        if self.font_family.trim().is_empty() {
            return Err(InkdateError::validation(format!(
                "style '{}' must name a font family",
                self.name
            )));
        }
        if !self.base_font_size_pt.is_finite() || self.base_font_size_pt <= 0.0 {
            return Err(InkdateError::validation(format!(
                "style '{}' base_font_size_pt must be finite and > 0",
                self.name
            )));
        }
        Ok(())
    }
}

/// In-memory set of handwriting styles keyed by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleCatalog {
    styles: BTreeMap<String, HandwritingStyle>,
}

impl StyleCatalog {
    /// Build a catalog, rejecting invalid or duplicate entries.
    pub fn from_styles(styles: impl IntoIterator<Item = HandwritingStyle>) -> InkdateResult<Self> {
        let mut out = Self::default();
        for s in styles {
            out.create(s)?;
        }
        Ok(out)
    }

    /// Parse a JSON array of styles.
    pub fn from_json(json: &str) -> InkdateResult<Self> {
        let styles: Vec<HandwritingStyle> = serde_json::from_str(json)?;
        Self::from_styles(styles)
    }

    /// Serialize every style, inactive ones included.
    pub fn to_json(&self) -> InkdateResult<String> {
        let all: Vec<&HandwritingStyle> = self.styles.values().collect();
        Ok(serde_json::to_string_pretty(&all)?)
    }

    /// Add a style. Names are unique across active and inactive styles.
    pub fn create(&mut self, style: HandwritingStyle) -> InkdateResult<()> {
        style.validate()?;
        if self.styles.contains_key(&style.name) {
            return Err(InkdateError::validation(format!(
                "style '{}' already exists",
                style.name
            )));
        }
        self.styles.insert(style.name.clone(), style);
        Ok(())
    }

    /// Look up a style by exact name, active or not.
    pub fn get(&self, name: &str) -> Option<&HandwritingStyle> {
        self.styles.get(name)
    }

    /// Styles available for new documents.
    pub fn active(&self) -> impl Iterator<Item = &HandwritingStyle> {
        self.styles.values().filter(|s| s.active)
    }

    /// Every style in name order.
    pub fn all(&self) -> impl Iterator<Item = &HandwritingStyle> {
        self.styles.values()
    }

    /// Soft-delete a style. Returns `false` when it was already inactive.
    pub fn deactivate(&mut self, name: &str) -> InkdateResult<bool> {
        let style = self
            .styles
            .get_mut(name)
            .ok_or_else(|| InkdateError::validation(format!("unknown style '{name}'")))?;
        let was_active = style.active;
        style.active = false;
        Ok(was_active)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/catalog.rs"]
mod tests;
