//! presentation.xml parser (slide size only)

use super::namespaces::P;
use crate::error::ExtractResult;
use crate::pptx::reader::XmlParser;
use quick_xml::events::Event;

/// Read `p:sldSz` as `(cx, cy)` in EMU
///
/// Returns `None` when the element or either attribute is missing.
pub fn parse_slide_size(content: &str) -> ExtractResult<Option<(i64, i64)>> {
    let mut reader = XmlParser::from_string(content);

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e)
                if XmlParser::is_element(&ns, e, P, "sldSz") =>
            {
                let cx = XmlParser::get_emu_attribute(e, "cx");
                let cy = XmlParser::get_emu_attribute(e, "cy");
                return Ok(cx.zip(cy));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}
