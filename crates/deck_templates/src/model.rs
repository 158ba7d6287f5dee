//! Presentation template data model
//!
//! The JSON shape (camelCase fields, `layout.type` tag) is the persisted
//! format for custom templates.

use crate::color::is_hex_color;
use serde::{Deserialize, Serialize};

/// English Metric Units per inch
pub const EMU_PER_INCH: f64 = 914_400.0;

/// Widescreen slide size in EMU (13.333in x 7.5in)
pub const WIDESCREEN_EMU: (i64, i64) = (12_192_000, 6_858_000);

/// Standard slide size in EMU (10in x 7.5in)
pub const STANDARD_EMU: (i64, i64) = (9_144_000, 6_858_000);

/// One presentation design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Stable unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether this is the catalog fallback
    #[serde(default)]
    pub is_default: bool,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
    /// Color roles
    pub colors: ThemeColors,
    /// Typefaces
    pub fonts: ThemeFonts,
    /// Slide geometry
    pub layout: SlideLayout,
}

/// The ten color roles a template defines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub primary_dark: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub text_light: String,
    pub table_header: String,
    pub table_stripe: String,
    pub white: String,
    pub border: String,
}

impl ThemeColors {
    /// All roles as (name, value) pairs
    pub fn roles(&self) -> [(&'static str, &str); 10] {
        [
            ("primary", &self.primary),
            ("primaryDark", &self.primary_dark),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("text", &self.text),
            ("textLight", &self.text_light),
            ("tableHeader", &self.table_header),
            ("tableStripe", &self.table_stripe),
            ("white", &self.white),
            ("border", &self.border),
        ]
    }

    /// True when every role is a 6 hex digit string
    pub fn is_well_formed(&self) -> bool {
        self.roles().iter().all(|(_, value)| is_hex_color(value))
    }
}

/// Title and body typefaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub title: String,
    pub body: String,
}

impl ThemeFonts {
    /// Use the same typeface for title and body
    pub fn uniform(typeface: impl Into<String>) -> Self {
        let typeface = typeface.into();
        Self {
            title: typeface.clone(),
            body: typeface,
        }
    }
}

/// Slide size classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SlideLayout {
    #[serde(rename = "16x9")]
    Widescreen,
    #[serde(rename = "4x3")]
    Standard,
    /// Any other size, in inches
    #[serde(rename = "custom")]
    Custom { width: f64, height: f64 },
}

impl Default for SlideLayout {
    fn default() -> Self {
        Self::Widescreen
    }
}

impl SlideLayout {
    /// Classify a slide size declared in EMU
    ///
    /// Degenerate sizes fall back to widescreen.
    pub fn from_emu(cx: i64, cy: i64) -> Self {
        if cx <= 0 || cy <= 0 {
            return Self::Widescreen;
        }
        match (cx, cy) {
            WIDESCREEN_EMU => Self::Widescreen,
            STANDARD_EMU => Self::Standard,
            _ => Self::Custom {
                width: emu_to_inches(cx),
                height: emu_to_inches(cy),
            },
        }
    }

    /// Slide width and height in inches
    pub fn dimensions_inches(&self) -> (f64, f64) {
        match *self {
            Self::Widescreen => (13.333, 7.5),
            Self::Standard => (10.0, 7.5),
            Self::Custom { width, height } => (width, height),
        }
    }

    /// Tag used in the persisted form
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Widescreen => "16x9",
            Self::Standard => "4x3",
            Self::Custom { .. } => "custom",
        }
    }
}

/// Convert EMU to inches rounded to 2 decimals
pub fn emu_to_inches(emu: i64) -> f64 {
    (emu as f64 / EMU_PER_INCH * 100.0).round() / 100.0
}
