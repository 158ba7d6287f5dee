//! Theme extraction: presentation package to custom [`Template`]

use super::presentation::parse_slide_size;
use super::reader::PptxReader;
use super::theme::{ParsedTheme, ThemeParser};
use super::{PRESENTATION_PART, THEME_PART};
use crate::builtin::FALLBACK_TYPEFACE;
use crate::color::{lighten, ColorScheme, SchemeSlot};
use crate::error::{ExtractError, ExtractResult};
use crate::model::{SlideLayout, Template, ThemeColors, ThemeFonts};
use chrono::{DateTime, SecondsFormat, Utc};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

const FALLBACK_PRIMARY: &str = "2B579A";
const FALLBACK_SECONDARY: &str = "E67E22";
const FALLBACK_TEXT_LIGHT: &str = "666666";
const TEXT: &str = "333333";
const WHITE: &str = "FFFFFF";

/// Builds custom templates from uploaded presentation packages
#[derive(Debug, Clone)]
pub struct ThemeExtractor {
    fallback_typeface: String,
}

impl Default for ThemeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeExtractor {
    /// Create an extractor using the built-in fallback typeface
    pub fn new() -> Self {
        Self::with_fallback_typeface(FALLBACK_TYPEFACE)
    }

    /// Create an extractor with a custom fallback typeface
    pub fn with_fallback_typeface(typeface: impl Into<String>) -> Self {
        Self {
            fallback_typeface: typeface.into(),
        }
    }

    /// Read a package from disk
    ///
    /// The file name (extension stripped) names the template when the
    /// theme does not.
    pub async fn extract_file(&self, path: impl AsRef<Path>) -> ExtractResult<Template> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.extract_from_bytes(&bytes, &file_name)
    }

    /// Extract from an in-memory package
    pub fn extract_from_bytes(&self, bytes: &[u8], file_name: &str) -> ExtractResult<Template> {
        self.extract_from_reader(Cursor::new(bytes), file_name)
    }

    /// Extract from any seekable package source
    pub fn extract_from_reader<R: Read + Seek>(
        &self,
        reader: R,
        file_name: &str,
    ) -> ExtractResult<Template> {
        let mut package = PptxReader::new(reader)?;

        let theme_xml = package
            .read_part(THEME_PART)?
            .ok_or_else(|| ExtractError::NoTheme(THEME_PART.to_string()))?;
        let theme = ThemeParser::new().parse(&theme_xml)?;

        let slide_size = Self::read_slide_size(&mut package, file_name);

        let template = self.build_template(&theme, slide_size, file_name, Utc::now())?;
        tracing::info!(
            "Extracted template {} ({}) from {}",
            template.id,
            template.name,
            file_name
        );
        Ok(template)
    }

    /// Slide size from the optional presentation part
    ///
    /// A missing, unreadable or malformed part yields `None` (16x9).
    fn read_slide_size<R: Read + Seek>(
        package: &mut PptxReader<R>,
        file_name: &str,
    ) -> Option<(i64, i64)> {
        let parsed = package
            .read_part(PRESENTATION_PART)
            .and_then(|xml| xml.map(|xml| parse_slide_size(&xml)).transpose());

        match parsed {
            Ok(Some(size)) => size,
            Ok(None) => {
                tracing::debug!("No {} in {}, assuming 16x9", PRESENTATION_PART, file_name);
                None
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable {} in {}, assuming 16x9: {}",
                    PRESENTATION_PART,
                    file_name,
                    e
                );
                None
            }
        }
    }

    /// Map a parsed theme onto a new custom template
    pub fn build_template(
        &self,
        theme: &ParsedTheme,
        slide_size: Option<(i64, i64)>,
        file_name: &str,
        now: DateTime<Utc>,
    ) -> ExtractResult<Template> {
        let scheme = theme.color_scheme.as_ref().ok_or(ExtractError::NoColorScheme)?;

        let name = theme
            .name
            .clone()
            .unwrap_or_else(|| strip_extension(file_name).to_string());

        let fonts = ThemeFonts {
            title: theme
                .major_east_asian
                .clone()
                .unwrap_or_else(|| self.fallback_typeface.clone()),
            body: theme
                .minor_east_asian
                .clone()
                .unwrap_or_else(|| self.fallback_typeface.clone()),
        };

        let layout = slide_size
            .map(|(cx, cy)| SlideLayout::from_emu(cx, cy))
            .unwrap_or_default();

        Ok(Template {
            id: format!("custom-{}", now.timestamp_millis()),
            name,
            is_default: false,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            colors: derive_colors(scheme),
            fonts,
            layout,
        })
    }
}

/// Map color scheme slots onto template color roles
pub fn derive_colors(scheme: &ColorScheme) -> ThemeColors {
    let slot = |s: SchemeSlot| scheme.get(s).map(str::to_string);

    let primary = slot(SchemeSlot::Accent1).unwrap_or_else(|| FALLBACK_PRIMARY.to_string());
    let accent6 = slot(SchemeSlot::Accent6);

    let table_stripe = match &accent6 {
        Some(a6) => lighten_or(a6, 0.5, &primary),
        None => lighten_or(&primary, 0.92, &primary),
    };
    let border = accent6.unwrap_or_else(|| lighten_or(&primary, 0.7, &primary));

    for missing in [SchemeSlot::Accent1, SchemeSlot::Accent2, SchemeSlot::Dark2, SchemeSlot::Light2] {
        if scheme.get(missing).is_none() {
            tracing::debug!("Theme has no {} color, using fallback", missing);
        }
    }

    ThemeColors {
        primary_dark: primary.clone(),
        secondary: slot(SchemeSlot::Accent2).unwrap_or_else(|| FALLBACK_SECONDARY.to_string()),
        accent: slot(SchemeSlot::Accent4).unwrap_or_else(|| primary.clone()),
        text: TEXT.to_string(),
        text_light: slot(SchemeSlot::Light2).unwrap_or_else(|| FALLBACK_TEXT_LIGHT.to_string()),
        table_header: slot(SchemeSlot::Dark2).unwrap_or_else(|| primary.clone()),
        table_stripe,
        white: WHITE.to_string(),
        border,
        primary,
    }
}

fn lighten_or(hex: &str, factor: f64, fallback: &str) -> String {
    lighten(hex, factor).unwrap_or_else(|| fallback.to_string())
}

/// Drop the last `.ext` from a file name
fn strip_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}
