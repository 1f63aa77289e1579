use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
/// Relationships between parts of an OPC package.
use std::collections::BTreeMap;

/// A single internal relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    r_id: String,
    /// Relationship type URI
    reltype: String,
    /// Target reference relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// The relationships owned by one source part (or by the package itself).
///
/// IDs are allocated sequentially (`rId1`, `rId2`, ...) in insertion order,
/// so a writer that adds relationships in a fixed order gets fixed IDs.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Keyed by numeric suffix so serialization order is rId1, rId2, ..., rId10
    rels: BTreeMap<u32, Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its newly allocated rId.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        let next = self.rels.keys().next_back().map_or(1, |n| n + 1);
        let r_id = format!("rId{}", next);
        self.rels.insert(
            next,
            Relationship::new(r_id.clone(), reltype.to_string(), target_ref.to_string()),
        );
        r_id
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize as a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in self.rels.values() {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}
