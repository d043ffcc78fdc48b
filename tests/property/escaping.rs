//! Property-based tests for XML escaping

use proptest::prelude::*;
use xml_listing::xml::escape::escape;

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

proptest! {
    /// Escaped text never contains raw markup characters
    #[test]
    fn test_escape_removes_markup_characters(text in any::<String>()) {
        let escaped = escape(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    /// Unescaping recovers the original text
    #[test]
    fn test_escape_is_reversible(text in any::<String>()) {
        prop_assert_eq!(unescape(&escape(&text)), text);
    }

    /// Text without special characters passes through unchanged
    #[test]
    fn test_plain_text_unchanged(text in "[a-zA-Z0-9 ._-]*") {
        prop_assert_eq!(escape(&text), text);
    }
}
