//! PPTX theme extraction
//!
//! A PPTX file is a ZIP archive of OOXML parts. Only two are read here:
//! - `ppt/theme/theme1.xml` - color scheme, font scheme, theme name (required)
//! - `ppt/presentation.xml` - slide size (optional)

mod extract;
mod presentation;
mod reader;
mod theme;

pub use extract::{derive_colors, ThemeExtractor};
pub use presentation::parse_slide_size;
pub use reader::{PptxReader, XmlParser};
pub use theme::{ParsedTheme, ThemeParser};

/// Path of the theme part inside the package
pub const THEME_PART: &str = "ppt/theme/theme1.xml";

/// Path of the presentation part inside the package
pub const PRESENTATION_PART: &str = "ppt/presentation.xml";

/// XML namespaces used in PPTX parts
pub mod namespaces {
    /// DrawingML namespace (themes, colors, fonts)
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    /// PresentationML namespace
    pub const P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
}
