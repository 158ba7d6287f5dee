//! ZIP archive reading and XML parsing utilities

use crate::error::{ExtractError, ExtractResult};
use quick_xml::events::BytesStart;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// A wrapper around a ZIP archive for reading presentation packages
pub struct PptxReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> PptxReader<R> {
    /// Open a package from a source that implements Read + Seek
    pub fn new(reader: R) -> ExtractResult<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Read a part as a string, or `None` when the archive lacks it
    pub fn read_part(&mut self, path: &str) -> ExtractResult<Option<String>> {
        let mut file = match self.archive.by_name(path) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(ExtractError::from(e)),
        };

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        Ok(Some(String::from_utf8(contents)?))
    }
}

/// Namespace-aware XML helpers
pub struct XmlParser;

impl XmlParser {
    /// Create a namespace-resolving reader over a string
    pub fn from_string(content: &str) -> NsReader<&[u8]> {
        let mut reader = NsReader::from_str(content);
        reader.config_mut().trim_text(true);
        reader
    }

    /// True when an element resolved to `namespace` and has `local` as its local name
    pub fn is_element(ns: &ResolveResult, event: &BytesStart, namespace: &str, local: &str) -> bool {
        Self::in_namespace(ns, namespace) && event.local_name().as_ref() == local.as_bytes()
    }

    /// True when a resolved name belongs to `namespace`
    pub fn in_namespace(ns: &ResolveResult, namespace: &str) -> bool {
        matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == namespace.as_bytes())
    }

    /// Get an unprefixed attribute value from an element
    pub fn get_attribute(event: &BytesStart, name: &str) -> Option<String> {
        event
            .attributes()
            .filter_map(|a| a.ok())
            .find(|a| a.key.as_ref() == name.as_bytes())
            .map(|a| String::from_utf8_lossy(&a.value).to_string())
    }

    /// Parse an EMU length attribute
    pub fn get_emu_attribute(event: &BytesStart, name: &str) -> Option<i64> {
        Self::get_attribute(event, name).and_then(|v| v.trim().parse::<i64>().ok())
    }
}
