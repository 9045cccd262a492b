//! Project identity derived from the user-supplied application name

use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;

/// Slug used when a display name has no usable characters
pub const FALLBACK_SLUG: &str = "myapp";

/// Prefix joined with the slug to form the bundle identifier
pub const BUNDLE_ID_PREFIX: &str = "com.anonymous.";

/// Name, slug and bundle identifier of the project being generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    pub slug: String,
    pub bundle_id: String,
}

impl Identity {
    /// Derive an identity with the default prefix and fallback
    pub fn new(display_name: &str) -> Self {
        let display_name = display_name.trim().to_string();
        let slug = derive_slug(&display_name);
        let bundle_id = derive_bundle_id(&slug);
        Self {
            display_name,
            slug,
            bundle_id,
        }
    }

    /// Derive an identity using a product's prefix and fallback slug
    pub fn for_product<C: ProductConfig>(config: &C, display_name: &str) -> Self {
        let display_name = display_name.trim().to_string();
        let slug = slugify(&display_name, config.fallback_slug());
        let bundle_id = format!("{}{}", config.bundle_id_prefix(), slug);
        Self {
            display_name,
            slug,
            bundle_id,
        }
    }
}

/// Turn a display name into a lowercase alphanumeric slug
///
/// `"My Cool App!"` becomes `"mycoolapp"`. Names without any ASCII letter or
/// digit fall back to [`FALLBACK_SLUG`].
pub fn derive_slug(display_name: &str) -> String {
    slugify(display_name, FALLBACK_SLUG)
}

/// Bundle identifier for a slug, e.g. `com.anonymous.mycoolapp`
pub fn derive_bundle_id(slug: &str) -> String {
    format!("{}{}", BUNDLE_ID_PREFIX, slug)
}

fn slugify(display_name: &str, fallback: &str) -> String {
    let lowered = display_name.to_lowercase();
    let collapsed: String = lowered
        .trim()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    let slug = collapsed.trim_matches('-');

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug.to_string()
    }
}

/// Check an application name typed by the user
///
/// Accepts ASCII letters, digits, spaces and hyphens; rejects blank input.
pub fn validate_app_name(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(ScaffoldError::validation("App name cannot be empty"));
    }
    if !input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
    {
        return Err(ScaffoldError::validation(
            "App name can only contain letters, numbers, spaces, and hyphens",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_strips_spaces_and_punctuation() {
        assert_eq!(derive_slug("My Cool App!"), "mycoolapp");
        assert_eq!(derive_slug("  Native Tide  "), "nativetide");
        assert_eq!(derive_slug("native-tide"), "nativetide");
        assert_eq!(derive_slug("App 2 Go"), "app2go");
    }

    #[test]
    fn test_slug_fallback() {
        assert_eq!(derive_slug(""), FALLBACK_SLUG);
        assert_eq!(derive_slug("!!!"), FALLBACK_SLUG);
        assert_eq!(derive_slug("   "), FALLBACK_SLUG);
        assert_eq!(derive_slug("---"), FALLBACK_SLUG);
    }

    #[test]
    fn test_slug_drops_non_ascii_letters() {
        assert_eq!(derive_slug("Café Crème"), "cafcrme");
    }

    #[test]
    fn test_slug_charset_for_plain_names() {
        for name in ["Hello World", "abc 123", "A B C D", "x9 Y8 z7", "Tide"] {
            let slug = derive_slug(name);
            assert!(!slug.is_empty());
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected slug {slug:?} for {name:?}"
            );
        }
    }

    #[test]
    fn test_slug_is_idempotent() {
        for name in ["My Cool App!", "", "!!!", "Native-Tide 2", "ÅÄÖ"] {
            let once = derive_slug(name);
            assert_eq!(derive_slug(&once), once);
        }
    }

    #[test]
    fn test_bundle_id_is_prefix_plus_slug() {
        assert_eq!(derive_bundle_id("mycoolapp"), "com.anonymous.mycoolapp");
        assert_eq!(derive_bundle_id(""), "com.anonymous.");
        for slug in ["a", "myapp", "x1y2"] {
            assert_eq!(derive_bundle_id(slug), format!("{BUNDLE_ID_PREFIX}{slug}"));
        }
    }

    #[test]
    fn test_identity_from_display_name() {
        let identity = Identity::new("  My Cool App!  ");
        assert_eq!(identity.display_name, "My Cool App!");
        assert_eq!(identity.slug, "mycoolapp");
        assert_eq!(identity.bundle_id, "com.anonymous.mycoolapp");
    }

    #[test]
    fn test_validate_app_name() {
        assert!(validate_app_name("My App").is_ok());
        assert!(validate_app_name("my-app-2").is_ok());

        let err = validate_app_name("   ").unwrap_err();
        assert!(err.is_validation());
        assert!(validate_app_name("My App!").unwrap_err().is_validation());
        assert!(validate_app_name("app_name").is_err());
    }
}
