/// The only entities that show up in exported listing descriptions.
const ENTITIES: &[(&str, &str)] = &[("&rsquo;", "\u{2019}"), ("&quot;", "\""), ("&amp;", "&")];

/// Resolves the known entities; `&amp;` goes last so text is decoded once.
pub fn unescape_entities(raw: &str) -> String {
    ENTITIES
        .iter()
        .fold(raw.to_string(), |text, (entity, ch)| text.replace(entity, ch))
}

/// Unescaped description split on line breaks (`\r\n` or `\n`).
pub fn description_lines(raw: &str) -> Vec<String> {
    let text = unescape_entities(raw).replace("\r\n", "\n");
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape_entities("it&rsquo;s"), "it\u{2019}s");
        assert_eq!(unescape_entities("&quot;x&quot;"), "\"x\"");
        assert_eq!(unescape_entities("a &amp; b"), "a & b");
        assert_eq!(unescape_entities("&lt;b&gt;"), "&lt;b&gt;");
    }

    #[test]
    fn test_decoded_once() {
        assert_eq!(unescape_entities("&amp;quot;"), "&quot;");
    }

    #[test]
    fn test_description_lines() {
        assert_eq!(description_lines("a\r\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert!(description_lines("").is_empty());
    }
}
