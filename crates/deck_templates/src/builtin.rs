//! Built-in templates shipped with the application
//!
//! Built-ins are immutable, always listed first, and can never be deleted.

use crate::model::{SlideLayout, Template, ThemeColors, ThemeFonts};

/// Id of the catalog default
pub const DEFAULT_TEMPLATE_ID: &str = "purple-a4";

/// Ids of every built-in template, in catalog order
pub const BUILTIN_TEMPLATE_IDS: [&str; 3] = [DEFAULT_TEMPLATE_ID, "navy-corporate", "teal-modern"];

/// Typeface used when a theme declares none
pub const FALLBACK_TYPEFACE: &str = "Meiryo";

const BUILTIN_CREATED_AT: &str = "2024-01-01T00:00:00.000Z";

/// True iff `id` names a built-in template
pub fn is_builtin(id: &str) -> bool {
    BUILTIN_TEMPLATE_IDS.contains(&id)
}

/// The built-in catalog in declaration order
pub fn builtin_templates() -> Vec<Template> {
    vec![
        builtin(
            DEFAULT_TEMPLATE_ID,
            "Purple (A4)",
            true,
            ThemeColors {
                primary: "6B3FA0".into(),
                primary_dark: "4A2A70".into(),
                secondary: "E67E22".into(),
                accent: "9B59B6".into(),
                text: "333333".into(),
                text_light: "666666".into(),
                table_header: "6B3FA0".into(),
                table_stripe: "F3EEF8".into(),
                white: "FFFFFF".into(),
                border: "D5C8E6".into(),
            },
        ),
        builtin(
            "navy-corporate",
            "Navy Corporate",
            false,
            ThemeColors {
                primary: "2B579A".into(),
                primary_dark: "1E3F70".into(),
                secondary: "E67E22".into(),
                accent: "3498DB".into(),
                text: "333333".into(),
                text_light: "666666".into(),
                table_header: "2B579A".into(),
                table_stripe: "EDF2F9".into(),
                white: "FFFFFF".into(),
                border: "C5D3E8".into(),
            },
        ),
        builtin(
            "teal-modern",
            "Teal Modern",
            false,
            ThemeColors {
                primary: "16A085".into(),
                primary_dark: "0E6655".into(),
                secondary: "F39C12".into(),
                accent: "1ABC9C".into(),
                text: "333333".into(),
                text_light: "666666".into(),
                table_header: "0E6655".into(),
                table_stripe: "E8F6F3".into(),
                white: "FFFFFF".into(),
                border: "A3E4D7".into(),
            },
        ),
    ]
}

fn builtin(id: &str, name: &str, is_default: bool, colors: ThemeColors) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        is_default,
        created_at: BUILTIN_CREATED_AT.to_string(),
        colors,
        fonts: ThemeFonts::uniform(FALLBACK_TYPEFACE),
        layout: SlideLayout::Widescreen,
    }
}
