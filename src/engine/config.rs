use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::core::Placement;
use crate::foundation::error::{InkdateError, InkdateResult};
use crate::jitter::model::JitterConfig;
use crate::style::catalog::HandwritingStyle;
use crate::style::profile::StyleTransferProfile;
use crate::text::fonts::FontConfig;
use crate::text::format::DateFormat;

/// Which renderer an engine may pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Bitmap when a font loads, markup otherwise.
    #[default]
    Auto,
    /// Always emit SVG markup.
    Markup,
}

/// Defaults applied to a date request when it leaves a field unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    /// Date text layout.
    pub format: DateFormat,
    /// Surface width in pixels.
    pub width: i64,
    /// Surface height in pixels.
    pub height: i64,
    /// Requested font family.
    pub font_family: String,
    /// Base font size in pixels.
    pub font_size: f64,
    /// Ink color.
    pub ink_color: Color,
    /// Background fill; `None` is transparent.
    pub background_color: Option<Color>,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            format: DateFormat::Full,
            width: 350,
            height: 80,
            font_family: "Caveat".to_string(),
            font_size: 32.0,
            ink_color: Color::INK,
            background_color: None,
        }
    }
}

/// Defaults for signature composites.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeDefaults {
    /// Output width in pixels.
    pub width: i64,
    /// Output height in pixels.
    pub height: i64,
    /// Edge the signature is anchored to.
    pub signature_position: Placement,
    /// Edge the date is anchored to.
    pub date_position: Placement,
    /// Padding around and between layers, in pixels.
    pub padding: i64,
    /// Share of the output height given to the signature.
    pub signature_height_fraction: f64,
}

impl Default for CompositeDefaults {
    fn default() -> Self {
        Self {
            width: 400,
            height: 200,
            signature_position: Placement::Top,
            date_position: Placement::Bottom,
            padding: 10,
            signature_height_fraction: 0.6,
        }
    }
}

/// Engine configuration. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Font discovery.
    pub fonts: FontConfig,
    /// Renderer selection.
    pub backend: BackendPreference,
    /// Request defaults.
    pub generation: GenerationDefaults,
    /// Variance ranges used when no style overrides them.
    pub jitter: JitterConfig,
    /// Seed distance between consecutive variations.
    pub variation_stride: u32,
    /// Upper bound on variations per call.
    pub max_variations: usize,
    /// Composite defaults.
    pub composite: CompositeDefaults,
    /// Extra style transfer profiles; same-named entries replace built-ins.
    pub profiles: Vec<StyleTransferProfile>,
    /// Handwriting styles available by name.
    pub styles: Vec<HandwritingStyle>,
}

/// Hard cap on variations per call, regardless of configuration.
pub const MAX_VARIATIONS: usize = 10;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fonts: FontConfig::default(),
            backend: BackendPreference::Auto,
            generation: GenerationDefaults::default(),
            jitter: JitterConfig::default(),
            variation_stride: 1000,
            max_variations: MAX_VARIATIONS,
            composite: CompositeDefaults::default(),
            profiles: Vec::new(),
            styles: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> InkdateResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| InkdateError::validation(format!("parse engine config JSON: {e}")))
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> InkdateResult<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> InkdateResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            InkdateError::validation(format!("open engine config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Config that never probes host fonts and always renders markup.
    pub fn markup_only() -> Self {
        Self {
            fonts: FontConfig::none(),
            backend: BackendPreference::Markup,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
