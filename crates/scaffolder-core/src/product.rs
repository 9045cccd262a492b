//! Product configuration trait for CLI binaries
//!
//! Each scaffolding binary implements this trait to describe the template it
//! ships and how generated projects are named.

use crate::templates::substitution::PlaceholderTokens;
use std::path::{Path, PathBuf};

/// Configuration trait for scaffolding products
///
/// Implementors define:
/// - Product identity (name, display name)
/// - Where the bundled template store lives
/// - The placeholder tokens baked into the template
/// - How bundle identifiers are formed
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Template store used when neither a flag nor the env var overrides it
    fn default_template_dir(&self) -> PathBuf;

    /// Environment variable name for overriding the template store location
    fn template_dir_env(&self) -> &'static str;

    /// Literal tokens the template uses for name, slug and bundle id
    fn placeholder_tokens(&self) -> PlaceholderTokens {
        PlaceholderTokens::default()
    }

    /// Prefix joined with the slug to build a bundle identifier
    fn bundle_id_prefix(&self) -> &'static str {
        crate::identity::BUNDLE_ID_PREFIX
    }

    /// Slug used when the app name has no usable characters
    fn fallback_slug(&self) -> &'static str {
        crate::identity::FALLBACK_SLUG
    }

    /// Default app name offered by the prompt
    fn default_app_name(&self) -> &'static str {
        "my-app"
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Resolve the template store: explicit path, then env var, then default
    fn resolve_template_dir(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match std::env::var_os(self.template_dir_env()) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => self.default_template_dir(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone)]
    pub(crate) struct TestConfig;

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "test"
        }

        fn display_name(&self) -> &'static str {
            "Test"
        }

        fn default_template_dir(&self) -> PathBuf {
            PathBuf::from("templates/test")
        }

        fn template_dir_env(&self) -> &'static str {
            "SCAFFOLDER_CORE_TEST_TEMPLATE_DIR"
        }

        fn next_steps(&self, dir: &Path) -> Vec<String> {
            vec![format!("cd {}", dir.display())]
        }

        fn cli_description(&self) -> &'static str {
            "test product"
        }
    }

    #[test]
    fn test_explicit_template_dir_wins() {
        let dir = TestConfig.resolve_template_dir(Some(Path::new("/tmp/elsewhere")));
        assert_eq!(dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn test_default_template_dir() {
        // The env var above is never set by the test suite
        let dir = TestConfig.resolve_template_dir(None);
        assert_eq!(dir, PathBuf::from("templates/test"));
    }

    #[test]
    fn test_identity_uses_product_defaults() {
        let identity = crate::Identity::for_product(&TestConfig, "!!!");
        assert_eq!(identity.slug, "myapp");
        assert_eq!(identity.bundle_id, "com.anonymous.myapp");
    }
}
