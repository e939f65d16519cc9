use chrono::{Datelike as _, NaiveDate};

/// Human-readable date layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DateFormat {
    /// `January 5, 2026`
    #[default]
    Full,
    /// `Jan 5, 2026`
    Short,
    /// `1/5/2026`
    Numeric,
    /// `5 January 2026`
    Formal,
}

impl DateFormat {
    /// Parse a format name; unknown names fall back to [`DateFormat::Full`].
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "short" => Self::Short,
            "numeric" => Self::Numeric,
            "formal" => Self::Formal,
            _ => Self::Full,
        }
    }

    /// Lowercase name as accepted by [`DateFormat::parse_lossy`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Short => "short",
            Self::Numeric => "numeric",
            Self::Formal => "formal",
        }
    }
}

impl From<String> for DateFormat {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl std::str::FromStr for DateFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lossy(s))
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `date` in the requested layout. Never fails.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    let (day, year) = (date.day(), date.year());
    match format {
        DateFormat::Full => format!("{} {day}, {year}", date.format("%B")),
        DateFormat::Short => format!("{} {day}, {year}", date.format("%b")),
        DateFormat::Numeric => format!("{}/{day}/{year}", date.month()),
        DateFormat::Formal => format!("{day} {} {year}", date.format("%B")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/format.rs"]
mod tests;
