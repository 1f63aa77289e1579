//! XML text escaping shared by every part writer.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

const ESCAPED: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Whether `c` is outside the XML 1.0 `Char` production.
///
/// Covers the C0 controls other than tab, line feed and carriage return,
/// plus U+FFFE and U+FFFF. Such characters cannot be written even as
/// character references.
#[inline]
pub fn is_forbidden_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

/// Escape XML special characters and drop characters XML cannot carry.
///
/// # Examples
///
/// ```
/// use forecourt::common::xml::escape_xml;
/// assert_eq!(escape_xml("Smith & Sons <Motors>"), "Smith &amp; Sons &lt;Motors&gt;");
/// assert_eq!(escape_xml("Ford\u{1}Focus"), "FordFocus");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    if s.contains(is_forbidden_xml_char) {
        let cleaned: String = s.chars().filter(|&c| !is_forbidden_xml_char(c)).collect();
        XML_ESCAPER.replace_all(&cleaned, &ESCAPED)
    } else {
        XML_ESCAPER.replace_all(s, &ESCAPED)
    }
}

/// Unescape the five predefined XML entities. Unknown entities are left unchanged.
///
/// # Examples
///
/// ```
/// use forecourt::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}
