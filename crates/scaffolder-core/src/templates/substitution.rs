//! Placeholder substitution for template text

use crate::identity::Identity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Literal tokens baked into the template payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderTokens {
    /// Token replaced with the display name
    pub display_name: String,

    /// Token replaced with the slug
    pub slug: String,

    /// Token replaced with the full bundle identifier
    pub bundle_id: String,
}

impl Default for PlaceholderTokens {
    fn default() -> Self {
        Self {
            display_name: "native-tide".to_string(),
            slug: "nativetide".to_string(),
            bundle_id: "com.anonymous.nativetide".to_string(),
        }
    }
}

/// Ordered (pattern, replacement) pairs applied to text content
///
/// Patterns are tried longest first at every position, so a pattern that
/// contains another one as a substring (the dotted bundle id contains the
/// slug token) always wins. Replacement text is never scanned again.
#[derive(Debug, Clone)]
pub struct SubstitutionMap {
    pairs: Vec<(String, String)>,
}

impl SubstitutionMap {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        let mut pairs: Vec<_> = pairs.into_iter().filter(|(p, _)| !p.is_empty()).collect();
        // Stable: equal-length patterns keep their declared order
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { pairs }
    }

    /// Map each placeholder token to the matching identity field
    pub fn from_identity(tokens: &PlaceholderTokens, identity: &Identity) -> Self {
        Self::new(vec![
            (tokens.bundle_id.clone(), identity.bundle_id.clone()),
            (tokens.display_name.clone(), identity.display_name.clone()),
            (tokens.slug.clone(), identity.slug.clone()),
        ])
    }

    /// Replace every placeholder occurrence in a single left-to-right pass
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.pairs.iter().any(|(p, _)| text.contains(p.as_str())) {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < text.len() {
            let rest = &text[i..];
            if let Some((pattern, replacement)) =
                self.pairs.iter().find(|(p, _)| rest.starts_with(p.as_str()))
            {
                out.push_str(replacement);
                i += pattern.len();
                continue;
            }
            match rest.chars().next() {
                Some(c) => {
                    out.push(c);
                    i += c.len_utf8();
                }
                None => break,
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_for(name: &str) -> SubstitutionMap {
        SubstitutionMap::from_identity(&PlaceholderTokens::default(), &Identity::new(name))
    }

    #[test]
    fn test_all_tokens_replaced_in_one_pass() {
        let map = map_for("My Cool App!");
        let text = r#"{"name": "native-tide", "slug": "nativetide", "bundleIdentifier": "com.anonymous.nativetide"}"#;
        assert_eq!(
            map.apply(text),
            r#"{"name": "My Cool App!", "slug": "mycoolapp", "bundleIdentifier": "com.anonymous.mycoolapp"}"#
        );
    }

    #[test]
    fn test_bundle_id_matched_before_slug() {
        let map = map_for("Ocean");
        let out = map.apply("package=com.anonymous.nativetide");
        assert_eq!(out, "package=com.anonymous.ocean");
        assert!(!out.contains("nativetide"));

        // Declaration order does not matter
        let reversed = SubstitutionMap::new(vec![
            ("nativetide".to_string(), "ocean".to_string()),
            ("com.anonymous.nativetide".to_string(), "org.example.ocean".to_string()),
        ]);
        assert_eq!(
            reversed.apply("com.anonymous.nativetide nativetide"),
            "org.example.ocean ocean"
        );
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        // Display name containing the slug token must not be rewritten again
        let map = map_for("nativetide pro");
        assert_eq!(map.apply("native-tide"), "nativetide pro");
        assert_eq!(map.apply("nativetide"), "nativetidepro");
    }

    #[test]
    fn test_text_without_tokens_is_borrowed() {
        let map = map_for("Ocean");
        let text = "export default function App() {}\n";
        assert!(matches!(map.apply(text), Cow::Borrowed(_)));
        assert_eq!(map.apply(""), "");
    }

    #[test]
    fn test_multibyte_text_survives() {
        let map = map_for("Ocean");
        assert_eq!(map.apply("🌊 native-tide — ünïcode"), "🌊 Ocean — ünïcode");
    }

    #[test]
    fn test_empty_patterns_ignored() {
        let map = SubstitutionMap::new(vec![(String::new(), "x".to_string())]);
        assert!(map.pairs.is_empty());
        assert_eq!(map.apply("abc"), "abc");
    }
}
