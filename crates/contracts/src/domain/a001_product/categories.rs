//! Keyword tagging of catalog rows.
//!
//! Tags come from an ordered list of `pattern -> tag` rules tested against the
//! row text. Rules are independent, so one row can receive several tags.

use once_cell::sync::Lazy;
use regex::Regex;

/// Assigned when no rule matched.
pub const OTHER: &str = "other";

/// Filter value that selects every row.
pub const ALL: &str = "all";

/// Filter buttons shown above the catalog grid, in display order.
pub const FILTERS: &[&str] = &[
    ALL, "raku", "saggar", "kintsugi", "lamps", "plates", "vases", OTHER,
];

const DEFAULT_RULES: &[(&str, &str)] = &[
    ("raku", "raku"),
    ("saggar", "saggar"),
    ("kintsugi", "kintsugi"),
    ("lamp|lantern", "lamps"),
    ("plate", "plates"),
    ("vase", "vases"),
];

static DEFAULT_CATEGORY_RULES: Lazy<CategoryRules> = Lazy::new(CategoryRules::default);

#[derive(Debug, Clone)]
pub struct CategoryRule {
    pattern: Regex,
    tag: String,
}

impl CategoryRule {
    /// Compiles `pattern` as a case-insensitive regex.
    pub fn new(pattern: &str, tag: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(&format!("(?i){}", pattern))?,
            tag: tag.into(),
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

#[derive(Debug, Clone)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Tags for `text` in rule order, without duplicates. Never empty.
    pub fn classify(&self, text: &str) -> Vec<String> {
        let folded = text.to_lowercase();
        let mut tags: Vec<String> = Vec::new();
        for rule in &self.rules {
            if rule.matches(&folded) && !tags.iter().any(|t| t == rule.tag()) {
                tags.push(rule.tag().to_string());
            }
        }
        if tags.is_empty() {
            tags.push(OTHER.to_string());
        }
        tags
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .map(|(pattern, tag)| {
                CategoryRule::new(pattern, *tag).expect("built-in category pattern is valid")
            })
            .collect();
        Self::new(rules)
    }
}

/// Classifies with the built-in rule list.
pub fn classify(text: &str) -> Vec<String> {
    DEFAULT_CATEGORY_RULES.classify(text)
}

/// Splits a free-form `TAG` cell (comma or semicolon separated) into tags.
pub fn parse_tag_field(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split([',', ';']).map(|t| t.trim().to_lowercase()) {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Appends explicit tags after keyword tags.
///
/// `other` from the keyword pass stays, so a row with only explicit tags is
/// still reachable from the `other` filter.
pub fn merge_tags(keyword_tags: Vec<String>, explicit: &[String]) -> Vec<String> {
    let mut tags = keyword_tags;
    for tag in explicit {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    if tags.is_empty() {
        tags.push(OTHER.to_string());
    }
    tags
}

/// Label for a filter button.
pub fn filter_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_tags_in_rule_order() {
        let tags = classify("Raku Vase A raku vase with kintsugi repair");
        assert_eq!(tags, vec!["raku", "kintsugi", "vases"]);
    }

    #[test]
    fn test_lamp_and_lantern_share_a_tag() {
        assert_eq!(classify("Table LAMP"), vec!["lamps"]);
        assert_eq!(classify("garden lanterns"), vec!["lamps"]);
        assert_eq!(classify("lamp and lantern"), vec!["lamps"]);
    }

    #[test]
    fn test_plural_forms_match() {
        assert_eq!(classify("set of plates"), vec!["plates"]);
        assert_eq!(classify("two vases"), vec!["vases"]);
    }

    #[test]
    fn test_no_match_is_other() {
        assert_eq!(classify("a mug"), vec![OTHER]);
        assert_eq!(classify(""), vec![OTHER]);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "Saggar fired plate";
        assert_eq!(classify(text), classify(text));
        assert_eq!(classify(text), vec!["saggar", "plates"]);
    }

    #[test]
    fn test_custom_rules() {
        let rules = CategoryRules::new(vec![
            CategoryRule::new(r"\bbowls?\b", "bowls").unwrap(),
            CategoryRule::new("mug", "mugs").unwrap(),
        ]);
        assert_eq!(rules.classify("Blue Bowl"), vec!["bowls"]);
        assert_eq!(rules.classify("bowling trophy"), vec![OTHER]);
        assert_eq!(rules.classify("mug and bowl"), vec!["bowls", "mugs"]);
    }

    #[test]
    fn test_duplicate_tags_are_collapsed() {
        let rules = CategoryRules::new(vec![
            CategoryRule::new("cup", "drinkware").unwrap(),
            CategoryRule::new("mug", "drinkware").unwrap(),
        ]);
        assert_eq!(rules.classify("cup and mug"), vec!["drinkware"]);
    }

    #[test]
    fn test_parse_tag_field() {
        assert_eq!(parse_tag_field(" Gift ; raku,, GIFT "), vec!["gift", "raku"]);
        assert!(parse_tag_field("  ").is_empty());
    }

    #[test]
    fn test_merge_tags() {
        let merged = merge_tags(vec![OTHER.to_string()], &["gift".to_string()]);
        assert_eq!(merged, vec![OTHER, "gift"]);

        let merged = merge_tags(
            vec!["raku".to_string()],
            &["raku".to_string(), "gift".to_string()],
        );
        assert_eq!(merged, vec!["raku", "gift"]);

        assert_eq!(merge_tags(vec![OTHER.to_string()], &[]), vec![OTHER]);
        assert_eq!(merge_tags(Vec::new(), &[]), vec![OTHER]);
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(filter_label("vases"), "Vases");
        assert_eq!(filter_label(""), "");
    }
}
