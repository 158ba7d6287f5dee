//! Integration tests for theme extraction and the template catalog
//!
//! Packages are assembled in memory with `zip::ZipWriter`.

use deck_templates::{
    lighten, ExtractError, JsonFileStore, MemoryStore, SlideLayout, TemplateCatalog,
    ThemeExtractor, BUILTIN_TEMPLATE_IDS, DEFAULT_TEMPLATE_ID, FALLBACK_TYPEFACE,
};
use std::io::{Cursor, Write};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const P_NS: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

fn package(parts: &[(&str, String)]) -> Vec<u8> {
    let raw: Vec<(&str, &[u8])> = parts
        .iter()
        .map(|(name, body)| (*name, body.as_bytes()))
        .collect();
    package_bytes(&raw)
}

fn package_bytes(parts: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);
    for (name, body) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(body).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

fn sparse_theme() -> String {
    theme_xml(
        None,
        r#"<a:clrScheme name="Sparse"><a:accent1><a:srgbClr val="112233"/></a:accent1></a:clrScheme>"#,
        "",
    )
}

fn theme_xml(name: Option<&str>, scheme_body: &str, font_scheme: &str) -> String {
    let name_attr = name.map(|n| format!(r#" name="{}""#, n)).unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="{A_NS}"{name_attr}>
  <a:themeElements>
    {scheme_body}
    {font_scheme}
  </a:themeElements>
</a:theme>"#
    )
}

fn presentation_xml(cx: i64, cy: i64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{A_NS}" xmlns:p="{P_NS}">
  <p:sldMasterIdLst/>
  <p:sldSz cx="{cx}" cy="{cy}"/>
  <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#
    )
}

fn sparse_package(size: Option<(i64, i64)>) -> Vec<u8> {
    let mut parts = vec![("ppt/theme/theme1.xml", sparse_theme())];
    if let Some((cx, cy)) = size {
        parts.push(("ppt/presentation.xml", presentation_xml(cx, cy)));
    }
    package(&parts)
}

#[test]
fn test_extract_full_theme() {
    let theme = theme_xml(
        Some("Harbor"),
        r#"<a:clrScheme name="Harbor">
             <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
             <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
             <a:dk2><a:srgbClr val="1F3864"/></a:dk2>
             <a:lt2><a:srgbClr val="8497B0"/></a:lt2>
             <a:accent1><a:srgbClr val="0F6FC6"/></a:accent1>
             <a:accent2><a:srgbClr val="009DD9"/></a:accent2>
             <a:accent3><a:srgbClr val="0BD0D9"/></a:accent3>
             <a:accent4><a:srgbClr val="10CF9B"/></a:accent4>
             <a:accent5><a:srgbClr val="7CCA62"/></a:accent5>
             <a:accent6><a:srgbClr val="A5C249"/></a:accent6>
             <a:hlink><a:srgbClr val="F49100"/></a:hlink>
             <a:folHlink><a:srgbClr val="85DFD0"/></a:folHlink>
           </a:clrScheme>"#,
        r#"<a:fontScheme name="Harbor">
             <a:majorFont><a:latin typeface="Georgia"/><a:ea typeface="MS Mincho"/></a:majorFont>
             <a:minorFont><a:latin typeface="Verdana"/><a:ea typeface="MS Gothic"/></a:minorFont>
           </a:fontScheme>"#,
    );
    let bytes = package(&[
        ("[Content_Types].xml", "<Types/>".to_string()),
        ("ppt/theme/theme1.xml", theme),
        ("ppt/presentation.xml", presentation_xml(9_144_000, 6_858_000)),
    ]);

    let template = ThemeExtractor::new()
        .extract_from_bytes(&bytes, "harbor.pptx")
        .expect("extraction should succeed");

    assert_eq!(template.name, "Harbor");
    assert!(template.id.starts_with("custom-"));
    assert!(!template.is_default);
    assert_eq!(template.colors.primary, "0F6FC6");
    assert_eq!(template.colors.secondary, "009DD9");
    assert_eq!(template.colors.accent, "10CF9B");
    assert_eq!(template.colors.table_header, "1F3864");
    assert_eq!(template.colors.text_light, "8497B0");
    assert_eq!(template.colors.border, "A5C249");
    assert_eq!(template.colors.table_stripe, lighten("A5C249", 0.5).unwrap());
    assert_eq!(template.fonts.title, "MS Mincho");
    assert_eq!(template.fonts.body, "MS Gothic");
    assert_eq!(template.layout, SlideLayout::Standard);
}

#[test]
fn test_extract_sparse_theme_uses_fallbacks() {
    let template = ThemeExtractor::new()
        .extract_from_bytes(&sparse_package(None), "Roadmap 2025.pptx")
        .unwrap();

    assert_eq!(template.name, "Roadmap 2025");
    assert_eq!(template.colors.primary, "112233");
    assert_eq!(template.colors.accent, "112233");
    assert_eq!(template.colors.table_stripe, lighten("112233", 0.92).unwrap());
    assert_eq!(template.colors.text, "333333");
    assert_eq!(template.fonts.title, FALLBACK_TYPEFACE);
    assert_eq!(template.fonts.body, FALLBACK_TYPEFACE);
    assert_eq!(template.layout, SlideLayout::Widescreen);
}

#[test]
fn test_extract_slide_sizes() {
    let cases = [
        ((12_192_000, 6_858_000), SlideLayout::Widescreen),
        ((9_144_000, 6_858_000), SlideLayout::Standard),
        ((6_096_000, 6_858_000), SlideLayout::Custom { width: 6.67, height: 7.5 }),
        ((0, 6_858_000), SlideLayout::Widescreen),
    ];

    for (size, expected) in cases {
        let template = ThemeExtractor::new()
            .extract_from_bytes(&sparse_package(Some(size)), "deck.pptx")
            .unwrap();
        assert_eq!(template.layout, expected, "size {:?}", size);
    }
}

#[test]
fn test_malformed_presentation_part_defaults_to_widescreen() {
    let broken = format!(r#"<p:presentation xmlns:p="{P_NS}"><p:sldIdLst></p:oops>"#);
    let bytes = package(&[
        ("ppt/theme/theme1.xml", sparse_theme()),
        ("ppt/presentation.xml", broken),
    ]);

    let template = ThemeExtractor::new()
        .extract_from_bytes(&bytes, "broken-size.pptx")
        .unwrap();
    assert_eq!(template.layout, SlideLayout::Widescreen);
    assert_eq!(template.colors.primary, "112233");
}

#[test]
fn test_non_utf8_presentation_part_defaults_to_widescreen() {
    let theme = sparse_theme();
    let bytes = package_bytes(&[
        ("ppt/theme/theme1.xml", theme.as_bytes()),
        ("ppt/presentation.xml", &[0xff_u8, 0xfe, 0x3c, 0x00][..]),
    ]);

    let mut catalog = TemplateCatalog::new(MemoryStore::new());
    let template = catalog.import_package(&bytes, "utf16.pptx").unwrap();
    assert_eq!(template.layout, SlideLayout::Widescreen);
    assert_eq!(catalog.get_template(&template.id), Some(template));
}

#[test]
fn test_missing_theme_fails_without_mutation() {
    let bytes = package(&[("ppt/presentation.xml", presentation_xml(12_192_000, 6_858_000))]);
    let mut catalog = TemplateCatalog::new(MemoryStore::new());
    let before = catalog.list_templates();

    let err = catalog.import_package(&bytes, "broken.pptx").unwrap_err();
    assert!(matches!(err, ExtractError::NoTheme(_)));
    assert!(err.to_string().contains("no theme"));
    assert_eq!(catalog.list_templates(), before);
}

#[test]
fn test_missing_color_scheme_fails() {
    let theme = theme_xml(Some("Empty"), "", "");
    let bytes = package(&[("ppt/theme/theme1.xml", theme)]);

    let err = ThemeExtractor::new().extract_from_bytes(&bytes, "e.pptx").unwrap_err();
    assert!(matches!(err, ExtractError::NoColorScheme));
    assert_eq!(err.to_string(), "no color scheme found in theme");
}

#[test]
fn test_not_a_zip_fails() {
    let err = ThemeExtractor::new()
        .extract_from_bytes(b"definitely not a zip", "x.pptx")
        .unwrap_err();
    assert!(matches!(err, ExtractError::Zip(_)));
}

#[test]
fn test_import_then_select_and_delete() {
    let mut catalog = TemplateCatalog::new(MemoryStore::new());
    let template = catalog
        .import_package(&sparse_package(Some((12_192_000, 6_858_000))), "imported.pptx")
        .unwrap();

    let templates = catalog.list_templates();
    assert_eq!(templates.len(), BUILTIN_TEMPLATE_IDS.len() + 1);
    assert_eq!(templates.last().map(|t| t.id.as_str()), Some(template.id.as_str()));

    catalog.set_selected_id(&template.id);
    assert_eq!(catalog.get_selected(), template);

    catalog.delete_template(&template.id);
    assert_eq!(catalog.get_selected_id(), DEFAULT_TEMPLATE_ID);
    assert_eq!(catalog.list_templates().len(), BUILTIN_TEMPLATE_IDS.len());
}

#[test]
fn test_file_store_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    let imported = {
        let mut catalog = TemplateCatalog::new(JsonFileStore::in_dir(temp_dir.path()));
        let t = catalog
            .import_package(&sparse_package(Some((6_096_000, 6_858_000))), "tall.pptx")
            .unwrap();
        catalog.set_selected_id(&t.id);
        t
    };

    let catalog = TemplateCatalog::new(JsonFileStore::in_dir(temp_dir.path()));
    assert_eq!(catalog.get_template(&imported.id), Some(imported.clone()));
    assert_eq!(catalog.get_selected(), imported);
}

#[test]
fn test_corrupt_storage_file_is_replaced_on_import() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::in_dir(temp_dir.path());
    std::fs::write(store.path(), "{\"pptx-custom-templates\": [trunc").unwrap();

    let mut catalog = TemplateCatalog::new(store);
    assert_eq!(catalog.list_templates().len(), BUILTIN_TEMPLATE_IDS.len());

    let imported = catalog
        .import_package(&sparse_package(None), "after-crash.pptx")
        .unwrap();
    catalog.set_selected_id(&imported.id);

    let reopened = TemplateCatalog::new(JsonFileStore::in_dir(temp_dir.path()));
    assert_eq!(reopened.get_template(&imported.id), Some(imported.clone()));
    assert_eq!(reopened.get_selected(), imported);
}

#[tokio::test]
async fn test_extract_file_uses_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Investor Update.pptx");
    std::fs::write(&path, sparse_package(None)).unwrap();

    let template = ThemeExtractor::new().extract_file(&path).await.unwrap();
    assert_eq!(template.name, "Investor Update");
}

#[tokio::test]
async fn test_extract_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = ThemeExtractor::new()
        .extract_file(temp_dir.path().join("absent.pptx"))
        .await;
    assert!(matches!(result, Err(ExtractError::Io(_))));
}
