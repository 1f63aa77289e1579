//! In-memory OPC package assembled before serialization.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// A set of parts plus the package-level relationships (`/_rels/.rels`).
#[derive(Debug, Default)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relate the package itself to `target` (e.g. the main document part).
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.add(reltype, target.membername())
    }

    /// Add a part. Parts are written in insertion order.
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part(&self, partname: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.partname().as_str() == partname)
    }
}
