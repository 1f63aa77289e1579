//! Presentation template module.
//!
//! Fixed parts every generated presentation carries: one slide master with
//! a single blank layout, the theme and the presentation-level property
//! parts. They are embedded from `resources/` at compile time.

use crate::common::xml::escape_xml;

/// Slide master with a single layout (`rId1`) and the theme (`rId2`).
pub fn slide_master_xml() -> &'static str {
    include_str!("../../../resources/slideMasters/slideMaster1.xml")
}

/// The Blank layout: no placeholders.
pub fn blank_layout_xml() -> &'static str {
    include_str!("../../../resources/slideLayouts/slideLayout1.xml")
}

pub fn theme_xml() -> &'static str {
    include_str!("../../../resources/theme/theme1.xml")
}

pub fn pres_props_xml() -> &'static str {
    include_str!("../../../resources/presProps.xml")
}

pub fn view_props_xml() -> &'static str {
    include_str!("../../../resources/viewProps.xml")
}

pub fn table_styles_xml() -> &'static str {
    include_str!("../../../resources/tableStyles.xml")
}

/// `docProps/core.xml`. No timestamps are written, so output is reproducible.
pub fn core_properties_xml(title: Option<&str>) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(concat!(
        r#"<cp:coreProperties"#,
        r#" xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties""#,
        r#" xmlns:dc="http://purl.org/dc/elements/1.1/""#,
        r#" xmlns:dcterms="http://purl.org/dc/terms/""#,
        r#" xmlns:dcmitype="http://purl.org/dc/dcmitype/""#,
        r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    if let Some(title) = title {
        xml.push_str("<dc:title>");
        xml.push_str(&escape_xml(title));
        xml.push_str("</dc:title>");
    }
    xml.push_str("<dc:creator>");
    xml.push_str(env!("CARGO_PKG_NAME"));
    xml.push_str("</dc:creator>");
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");
    xml
}

/// `docProps/app.xml`.
pub fn app_properties_xml(slide_count: usize) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{} {}</Application>",
            "<PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
            "<Slides>{}</Slides>",
            "</Properties>"
        ),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        slide_count
    )
}
