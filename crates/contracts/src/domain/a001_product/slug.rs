use unicode_normalization::UnicodeNormalization;

/// Returned for absent or empty titles and for titles with no sluggable characters.
pub const FALLBACK_SLUG: &str = "product";

/// Builds the URL-safe token used in product links.
///
/// Lower-cases, decomposes (NFD) and drops combining diacritical marks, turns
/// whitespace runs into a single hyphen, drops anything that is not an ASCII
/// word character or hyphen, collapses hyphens and trims them from both ends.
pub fn slugify(title: Option<&str>) -> String {
    let title = match title {
        Some(t) if !t.is_empty() => t,
        _ => return FALLBACK_SLUG.to_string(),
    };

    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().nfd() {
        if is_combining_diacritic(c) {
            continue;
        }
        if c.is_whitespace() || c == '-' {
            pending_hyphen = !slug.is_empty();
        } else if c.is_ascii_alphanumeric() || c == '_' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(c.to_ascii_lowercase());
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
