//! Presentation writer for PPTX.

use crate::common::unit::inches_to_emu;
use crate::layout;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;
use std::path::Path;
use tempfile::NamedTempFile;

use super::slide::MutableSlide;

/// A mutable PowerPoint presentation for writing.
///
/// Every slide uses the single blank layout. Nothing touches the file
/// system until [`MutablePresentation::save`].
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title written to the core properties
    title: Option<String>,
}

impl MutablePresentation {
    /// Create a new empty presentation at the listing slide size (10" x 7.5", 4:3).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches_to_emu(layout::SLIDE_WIDTH),
            slide_height: inches_to_emu(layout::SLIDE_HEIGHT),
            title: None,
        }
    }

    /// Add a new slide to the presentation.
    pub fn add_slide(&mut self) -> Result<&mut MutableSlide> {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let index = self.slides.len() - 1;
        Ok(&mut self.slides[index])
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the document title stored in `docProps/core.xml`.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Generate presentation.xml content.
    ///
    /// `master_rel_id` and `slide_rel_ids` are the rIds assigned in the
    /// presentation part's relationships.
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#,
            r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
            r#" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
            r#" saveSubsetFonts="1">"#
        ));

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the OPC package: document parts, their relationships and
    /// the fixed template parts.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let core_uri = PackURI::new("/docProps/core.xml")?;
        let app_uri = PackURI::new("/docProps/app.xml")?;
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?;
        let theme_uri = PackURI::new("/ppt/theme/theme1.xml")?;
        let pres_props_uri = PackURI::new("/ppt/presProps.xml")?;
        let view_props_uri = PackURI::new("/ppt/viewProps.xml")?;
        let table_styles_uri = PackURI::new("/ppt/tableStyles.xml")?;

        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        let slide_uris = (1..=self.slides.len())
            .map(|n| PackURI::new(format!("/ppt/slides/slide{n}.xml")))
            .collect::<Result<Vec<_>>>()?;

        let mut pres_part = Part::new(pres_uri, ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        let slide_rel_ids: Vec<String> = slide_uris
            .iter()
            .map(|uri| pres_part.relate_to(uri, rt::SLIDE))
            .collect();
        pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
        pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);
        pres_part.set_blob(
            self.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?
                .into_bytes(),
        );
        package.add_part(pres_part);

        // The master's layout list refers to rId1, so the layout is related first.
        let mut master_part = Part::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml().as_bytes().to_vec(),
        );
        master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master_part.relate_to(&theme_uri, rt::THEME);
        package.add_part(master_part);

        let mut layout_part = Part::new(
            layout_uri.clone(),
            ct::PML_SLIDE_LAYOUT,
            template::blank_layout_xml().as_bytes().to_vec(),
        );
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        package.add_part(layout_part);

        for (slide, uri) in self.slides.iter().zip(slide_uris) {
            let mut slide_part = Part::new(uri, ct::PML_SLIDE, slide.to_xml()?.into_bytes());
            slide_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            package.add_part(slide_part);
        }

        package.add_part(Part::new(
            theme_uri,
            ct::OFC_THEME,
            template::theme_xml().as_bytes().to_vec(),
        ));
        package.add_part(Part::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::pres_props_xml().as_bytes().to_vec(),
        ));
        package.add_part(Part::new(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::view_props_xml().as_bytes().to_vec(),
        ));
        package.add_part(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::table_styles_xml().as_bytes().to_vec(),
        ));
        package.add_part(Part::new(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            template::core_properties_xml(self.title.as_deref()).into_bytes(),
        ));
        package.add_part(Part::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_properties_xml(self.slides.len()).into_bytes(),
        ));

        Ok(package)
    }

    /// Serialize the presentation to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(&self.to_package()?)
    }

    /// Write the presentation to `path`.
    ///
    /// The package is serialized in memory first and then written to a
    /// temporary file in the target directory, which is renamed over `path`
    /// only once fully written. On failure `path` is left untouched and the
    /// temporary file is removed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(&bytes)?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|e| OoxmlError::Io(e.error))?;

        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::EmuRect;
    use crate::render::canvas::{Alignment, SlideCanvas, TextRun};
    use std::io::{Cursor, Read};

    fn sample() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide().unwrap();
        let shape = slide
            .add_text_box(
                EmuRect {
                    x: 0,
                    y: 0,
                    cx: 914_400,
                    cy: 914_400,
                },
                Alignment::Left,
            )
            .unwrap();
        slide
            .set_text(shape, Alignment::Left, &TextRun::new("Hello", 18.0))
            .unwrap();
        pres
    }

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
    }

    #[test]
    fn test_add_slide() {
        let mut pres = MutablePresentation::new();
        assert_eq!(pres.add_slide().unwrap().slide_id(), 256);
        assert_eq!(pres.add_slide().unwrap().slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_presentation_xml() {
        let pres = sample();
        let xml = pres
            .generate_presentation_xml("rId1", &["rId2".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));
        assert!(pres.generate_presentation_xml("rId1", &[]).is_err());
    }

    #[test]
    fn test_package_parts() {
        let package = sample().to_package().unwrap();
        for name in [
            "/ppt/presentation.xml",
            "/ppt/slideMasters/slideMaster1.xml",
            "/ppt/slideLayouts/slideLayout1.xml",
            "/ppt/slides/slide1.xml",
            "/ppt/theme/theme1.xml",
            "/ppt/presProps.xml",
            "/ppt/viewProps.xml",
            "/ppt/tableStyles.xml",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ] {
            assert!(package.part(name).is_some(), "missing {name}");
        }

        let master = package.part("/ppt/slideMasters/slideMaster1.xml").unwrap();
        let layout_rel = format!(
            r#"Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml""#,
            rt::SLIDE_LAYOUT
        );
        assert!(master.rels().to_xml().contains(&layout_rel));
    }

    #[test]
    fn test_to_bytes_round_trip() {
        let bytes = sample().to_bytes().unwrap();
        let content_types = read_member(&bytes, "[Content_Types].xml");
        assert!(content_types.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        let slide = read_member(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains("<a:t>Hello</a:t>"));
        let rels = read_member(&bytes, "ppt/slides/_rels/slide1.xml.rels");
        assert!(rels.contains("../slideLayouts/slideLayout1.xml"));
    }

    #[test]
    fn test_save_replaces_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing.pptx");
        std::fs::write(&path, b"stale").unwrap();

        sample().save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_to_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("listing.pptx");
        assert!(sample().save(&path).is_err());
        assert!(!path.exists());
    }
}
