use serde::{Deserialize, Serialize};

/// Straight-alpha color with normalized `0..=1` channels.
///
/// Deserializes from `"#RRGGBB"`, `"#RRGGBBAA"`, `"transparent"` or `{r,g,b[,a]}`.
/// Serializes as `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Near-black default ink.
    pub const INK: Color = Color {
        r: 26.0 / 255.0,
        g: 26.0 / 255.0,
        b: 26.0 / 255.0,
        a: 1.0,
    };

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Build a color from normalized channels.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Straight-alpha RGBA8 representation.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// `true` when the alpha channel rounds to zero.
    pub fn is_transparent(self) -> bool {
        self.to_rgba8()[3] == 0
    }

    /// `#rrggbb` without the alpha channel, for SVG `fill` attributes.
    pub fn to_hex_rgb(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `#rrggbbaa`.
    pub fn to_hex_rgba(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// Alpha clamped into `0..=1`.
    pub fn opacity(self) -> f64 {
        self.a.clamp(0.0, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::INK
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex_rgba())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Channels {
                r: f64,
                g: f64,
                b: f64,
                a: Option<f64>,
            },
        }

        match Wire::deserialize(deserializer)? {
            Wire::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Wire::Channels { r, g, b, a } => Ok(Self::rgba(r, g, b, a.unwrap_or(1.0))),
        }
    }
}

/// `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
fn parse_hex(s: &str) -> Result<Color, String> {
    let digits = s.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color \"{s}\"; expected #RRGGBB or #RRGGBBAA"));
    }

    let mut channels = [1.0f64; 4];
    for (slot, pair) in channels.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
        let byte = pair
            .iter()
            .fold(0u32, |acc, &d| acc * 16 + char::from(d).to_digit(16).unwrap_or(0));
        *slot = f64::from(byte) / 255.0;
    }
    let [r, g, b, a] = channels;
    Ok(Color::rgba(r, g, b, a))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
