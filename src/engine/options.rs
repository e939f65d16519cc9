use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::core::Placement;
use crate::text::format::DateFormat;

/// One date request. Unset fields fall back to the selected style, then to the engine
/// configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Date to draw; today (local time) when unset.
    pub date: Option<NaiveDate>,
    /// Text layout.
    pub format: Option<DateFormat>,
    /// Surface width in pixels, clamped to the supported range.
    pub width: Option<i64>,
    /// Surface height in pixels, clamped to the supported range.
    pub height: Option<i64>,
    /// Requested font family.
    pub font_family: Option<String>,
    /// Base font size in pixels.
    pub font_size: Option<f64>,
    /// Ink color.
    pub ink_color: Option<Color>,
    /// Background fill.
    pub background_color: Option<Color>,
    /// Explicit seed; when unset the seed is derived from the calendar day of `date`.
    pub variation_seed: Option<u32>,
    /// Handwriting style name.
    pub style: Option<String>,
    /// Style transfer profile name.
    pub profile: Option<String>,
}

impl GenerateOptions {
    /// Options for `date` with everything else defaulted.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Set an explicit seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.variation_seed = Some(seed);
        self
    }

    /// Set the date format.
    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// One composite request. Unset fields fall back to the engine's composite defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompositeOptions {
    /// Output width in pixels.
    pub output_width: Option<i64>,
    /// Output height in pixels.
    pub output_height: Option<i64>,
    /// Edge the signature is anchored to.
    pub signature_position: Option<Placement>,
    /// Edge the date is anchored to.
    pub date_position: Option<Placement>,
    /// Padding in pixels.
    pub padding: Option<i64>,
    /// Share of the output height given to the signature.
    pub signature_height_fraction: Option<f64>,
    /// Background behind both layers.
    pub background_color: Option<Color>,
    /// Date request; its width and height are replaced by the date slot size.
    pub date: GenerateOptions,
}

#[cfg(test)]
#[path = "../../tests/unit/engine/options.rs"]
mod tests;
