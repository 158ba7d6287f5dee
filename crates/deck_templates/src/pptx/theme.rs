//! theme1.xml parser
//!
//! Reads the theme name, the first color scheme and the East-Asian
//! typefaces of the major/minor fonts.

use super::namespaces::A;
use crate::color::{ColorScheme, SchemeSlot};
use crate::error::ExtractResult;
use crate::pptx::reader::XmlParser;
use quick_xml::events::{BytesStart, Event};

/// Raw theme data before mapping onto template roles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTheme {
    /// `name` attribute of the root `a:theme` element
    pub name: Option<String>,
    /// First `a:clrScheme` in the document
    pub color_scheme: Option<ColorScheme>,
    /// `a:majorFont/a:ea/@typeface`
    pub major_east_asian: Option<String>,
    /// `a:minorFont/a:ea/@typeface`
    pub minor_east_asian: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FontSlot {
    Major,
    Minor,
}

/// Parser for theme parts
pub struct ThemeParser;

impl ThemeParser {
    /// Create a new theme parser
    pub fn new() -> Self {
        Self
    }

    /// Parse theme XML
    pub fn parse(&self, content: &str) -> ExtractResult<ParsedTheme> {
        let mut theme = ParsedTheme::default();
        let mut reader = XmlParser::from_string(content);

        let mut scheme: Option<ColorScheme> = None;
        let mut in_scheme = false;
        let mut scheme_done = false;
        let mut current_slot: Option<SchemeSlot> = None;
        let mut slot_resolved = false;
        let mut font_slot: Option<FontSlot> = None;

        loop {
            let (ns, event) = reader.read_resolved_event()?;
            let in_a = XmlParser::in_namespace(&ns, A);

            match event {
                Event::Start(ref e) if in_a => {
                    let local = e.local_name();
                    match local.as_ref() {
                        b"theme" => {
                            theme.name = XmlParser::get_attribute(e, "name")
                                .filter(|n| !n.trim().is_empty());
                        }
                        b"clrScheme" if !scheme_done => {
                            let mut s = ColorScheme::new();
                            if let Some(name) = XmlParser::get_attribute(e, "name") {
                                s.set_name(name);
                            }
                            scheme = Some(s);
                            in_scheme = true;
                        }
                        b"majorFont" => font_slot = Some(FontSlot::Major),
                        b"minorFont" => font_slot = Some(FontSlot::Minor),
                        b"ea" if current_slot.is_none() => {
                            Self::read_east_asian(e, font_slot, &mut theme);
                        }
                        name if in_scheme && current_slot.is_none() => {
                            current_slot = std::str::from_utf8(name)
                                .ok()
                                .and_then(SchemeSlot::from_local_name);
                            slot_resolved = false;
                        }
                        _ => {
                            if let (Some(slot), Some(s)) = (current_slot, scheme.as_mut()) {
                                Self::read_slot_color(e, slot, s, &mut slot_resolved);
                            }
                        }
                    }
                }
                Event::Empty(ref e) if in_a => {
                    let local = e.local_name();
                    if let (Some(slot), Some(s)) = (current_slot, scheme.as_mut()) {
                        Self::read_slot_color(e, slot, s, &mut slot_resolved);
                    } else if local.as_ref() == b"ea" {
                        Self::read_east_asian(e, font_slot, &mut theme);
                    }
                }
                Event::End(ref e) if in_a => {
                    let local = e.local_name();
                    match local.as_ref() {
                        b"clrScheme" if in_scheme => {
                            in_scheme = false;
                            scheme_done = true;
                            current_slot = None;
                        }
                        b"majorFont" | b"minorFont" => font_slot = None,
                        name => {
                            if current_slot.map(|s| s.local_name().as_bytes()) == Some(name) {
                                current_slot = None;
                            }
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        theme.color_scheme = scheme;
        Ok(theme)
    }

    /// Record `a:ea/@typeface` for the enclosing major or minor font
    fn read_east_asian(e: &BytesStart, font_slot: Option<FontSlot>, theme: &mut ParsedTheme) {
        let typeface = XmlParser::get_attribute(e, "typeface").filter(|t| !t.trim().is_empty());
        match font_slot {
            Some(FontSlot::Major) => theme.major_east_asian = typeface,
            Some(FontSlot::Minor) => theme.minor_east_asian = typeface,
            None => {}
        }
    }

    /// Record the first color child of a slot
    ///
    /// `a:srgbClr/@val` is used directly; `a:sysClr` contributes its
    /// `lastClr`, the color it last resolved to.
    fn read_slot_color(
        e: &BytesStart,
        slot: SchemeSlot,
        scheme: &mut ColorScheme,
        resolved: &mut bool,
    ) {
        if *resolved {
            return;
        }
        let value = match e.local_name().as_ref() {
            b"srgbClr" => XmlParser::get_attribute(e, "val"),
            b"sysClr" => XmlParser::get_attribute(e, "lastClr"),
            _ => return,
        };
        *resolved = true;
        match value {
            Some(hex) if scheme.set(slot, &hex) => {}
            other => tracing::debug!("Theme slot {} has no usable color ({:?})", slot, other),
        }
    }
}

impl Default for ThemeParser {
    fn default() -> Self {
        Self::new()
    }
}
