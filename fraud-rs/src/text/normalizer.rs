use regex::Regex;
use std::sync::OnceLock;

/// Compiled normalization patterns.
///
/// The steps run in a fixed order: tags are stripped before entities are
/// decoded, and entities are decoded before punctuation is removed, so that
/// `&lt;` or `&amp;` never survive as punctuation.
///
/// Only well-formed entity references are decoded. A named reference missing
/// its semicolon (`&nbsp`, `&copy2024`) is left as text, so its `&` is then
/// dropped with the other punctuation, and numeric references map straight to
/// their code point (`&#128;` is U+0080).
pub struct TextNormalizer {
    tags: Regex,
    urls: Regex,
    emails: Regex,
    digits: Regex,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            tags: Regex::new(r"<.*?>").expect("valid tag pattern"),
            urls: Regex::new(r"http\S+|www\S+").expect("valid url pattern"),
            emails: Regex::new(r"\S+@\S+").expect("valid email pattern"),
            digits: Regex::new(r"\d+").expect("valid digit pattern"),
        }
    }

    /// Normalize raw email text. Never fails; may return an empty string.
    pub fn normalize(&self, raw: &str) -> String {
        let text = self.tags.replace_all(raw, " ");
        let text = html_escape::decode_html_entities(&text);
        let text = self.urls.replace_all(&text, " ");
        let text = self.emails.replace_all(&text, " ");
        let text = self.digits.replace_all(&text, " ");

        let stripped: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
        let lowered = stripped.to_lowercase();

        lowered.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn shared() -> &'static TextNormalizer {
    static NORMALIZER: OnceLock<TextNormalizer> = OnceLock::new();
    NORMALIZER.get_or_init(TextNormalizer::new)
}

/// Normalize with the process-wide compiled patterns
pub fn normalize(raw: &str) -> String {
    shared().normalize(raw)
}

/// Absent input normalizes to the empty string
pub fn normalize_opt(raw: Option<&str>) -> String {
    raw.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_lowercases() {
        assert_eq!(
            normalize("<p>Hello <b>World</b></p>"),
            "hello world"
        );
    }

    #[test]
    fn test_decoded_entities_lose_punctuation() {
        // &amp; decodes to '&', which is then removed as punctuation
        assert_eq!(normalize("Tom &amp; Jerry &quot;live&quot;"), "tom jerry live");
        // encoded tags are not stripped as tags, only their punctuation goes
        assert_eq!(normalize("&lt;b&gt;bold&lt;/b&gt;"), "bboldb");
    }

    #[test]
    fn test_removes_urls_and_addresses() {
        assert_eq!(
            normalize("Visit http://fakeurl.com/login or www.example.org now"),
            "visit or now"
        );
        assert_eq!(
            normalize("Contact support@paypal-secure.com today"),
            "contact today"
        );
    }

    #[test]
    fn test_removes_digits_and_punctuation() {
        assert_eq!(normalize("Q2 report: $1,000,000!!!"), "q report");
        assert_eq!(normalize("re-send (ASAP)"), "resend asap");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  a \t\n  b   c  "), "a b c");
    }

    #[test]
    fn test_non_ascii_survives() {
        // curly apostrophes and emoji are not ASCII punctuation
        assert_eq!(normalize("You’ve won 💰💰!!!"), "you’ve won 💰💰");
    }

    #[test]
    fn test_unterminated_entities_kept_as_text() {
        assert_eq!(normalize("a&nbspb"), "anbspb");
        assert_eq!(normalize("&copy2024 hi"), "copy hi");
        assert_eq!(normalize("a&nbsp;b"), "a b");
        assert_eq!(normalize("&#128;"), "\u{80}");
    }

    #[test]
    fn test_empty_and_absent() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t"), "");
        assert_eq!(normalize("12345 !!! ..."), "");
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("Hi!")), "hi");
    }

    #[test]
    fn test_paypal_sample() {
        let raw = "Your PayPal account has been restricted. Please verify your identity by clicking here: http://fakeurl.com/login";
        assert_eq!(
            normalize(raw),
            "your paypal account has been restricted please verify your identity by clicking here"
        );
    }
}
