/// Open Packaging Conventions (OPC) writing.
///
/// An OOXML document is a ZIP archive of parts, tied together by
/// relationship parts and described by `[Content_Types].xml`. This module
/// covers the write side only:
///
/// - Part naming ([`PackURI`])
/// - Relationships ([`Relationships`])
/// - Content type management and ZIP serialization ([`PackageWriter`])

pub mod constants;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
