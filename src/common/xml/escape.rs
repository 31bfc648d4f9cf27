use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

/// Code points XML 1.0 does not allow anywhere in a document; they are dropped.
fn forbidden_chars() -> impl Iterator<Item = String> {
    (0x00..=0x08u32)
        .chain([0x0B, 0x0C])
        .chain(0x0E..=0x1F)
        .chain([0xFFFE, 0xFFFF])
        .filter_map(char::from_u32)
        .map(String::from)
}

/// An automaton together with the replacement for each of its patterns.
struct Escaper {
    automaton: AhoCorasick,
    replacements: Vec<&'static str>,
}

impl Escaper {
    fn new(pairs: &[(&str, &'static str)], name: &str) -> Self {
        let forbidden: Vec<String> = forbidden_chars().collect();
        let patterns = pairs
            .iter()
            .map(|(pattern, _)| pattern.to_string())
            .chain(forbidden.iter().cloned());
        let replacements = pairs
            .iter()
            .map(|(_, replacement)| *replacement)
            .chain(forbidden.iter().map(|_| ""))
            .collect();
        let automaton = AhoCorasick::builder()
            .match_kind(aho_corasick::MatchKind::LeftmostFirst)
            .build(patterns)
            .unwrap_or_else(|e| panic!("Failed to build {name}: {e}"));
        Self {
            automaton,
            replacements,
        }
    }

    fn replace_all(&self, s: &str) -> String {
        self.automaton.replace_all(s, &self.replacements)
    }
}

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<Escaper> = Lazy::new(|| {
    Escaper::new(
        &[
            ("&", "&amp;"),
            ("<", "&lt;"),
            (">", "&gt;"),
            ("\"", "&quot;"),
            ("'", "&apos;"),
        ],
        "XML escaper",
    )
});

// Text content additionally maps control characters onto ODF text elements.
// "\r\n" is listed before "\r" and "\n" so the pair collapses into one break.
static TEXT_ESCAPER: Lazy<Escaper> = Lazy::new(|| {
    Escaper::new(
        &[
            ("&", "&amp;"),
            ("<", "&lt;"),
            (">", "&gt;"),
            ("\"", "&quot;"),
            ("'", "&apos;"),
            ("\r\n", "<text:line-break/>"),
            ("\n", "<text:line-break/>"),
            ("\r", "<text:line-break/>"),
            ("\t", "<text:tab/>"),
        ],
        "text escaper",
    )
});

/// Escape XML special characters.
///
/// Control characters that XML 1.0 forbids are removed.
///
/// # Examples
///
/// ```
/// use odpgen::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s)
}

/// Escape text for a `text:p`/`text:span` body.
///
/// Besides the XML entities, line breaks become `<text:line-break/>` and tabs
/// become `<text:tab/>`. Other control characters are removed.
///
/// # Examples
///
/// ```
/// use odpgen::common::xml::escape_text_content;
/// assert_eq!(
///     escape_text_content("Q&A\nDone"),
///     "Q&amp;A<text:line-break/>Done"
/// );
/// ```
#[inline]
pub fn escape_text_content(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s)
}
