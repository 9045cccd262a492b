//! Synchronization manifest types and parsing

use super::rules::ExclusionRules;
use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_FILES: &[&str] = &[
    "package.json",
    "app.json",
    "tsconfig.json",
    "babel.config.js",
    "metro.config.js",
    "eslint.config.js",
    "commitlint.config.js",
    "index.ts",
    "README.md",
    ".gitignore",
    "expo-env.d.ts",
];

const DEFAULT_DIRS: &[&str] = &["src", "assets", "scripts"];

const DEFAULT_EXCLUDE: &[&str] = &[
    "node_modules",
    "ios",
    "android",
    ".expo",
    "build",
    "dist",
    "coverage",
    ".git",
    "yarn.lock",
    "package-lock.json",
    ".DS_Store",
    "*.log",
];

const DEFAULT_DOTFILE_ALLOW: &[&str] = &[".gitignore"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_files() -> Vec<String> {
    strings(DEFAULT_FILES)
}

fn default_dirs() -> Vec<String> {
    strings(DEFAULT_DIRS)
}

fn default_exclude() -> Vec<String> {
    strings(DEFAULT_EXCLUDE)
}

fn default_dotfile_allow() -> Vec<String> {
    strings(DEFAULT_DOTFILE_ALLOW)
}

/// What to pull from the source project into the template store
///
/// Every field is optional in YAML and falls back to the built-in list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncManifest {
    /// Top-level files copied verbatim (no exclusion applied)
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Top-level directories mirrored recursively
    #[serde(default = "default_dirs")]
    pub dirs: Vec<String>,

    /// Segment patterns excluded inside mirrored directories
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Dotfiles that are still copied
    #[serde(default = "default_dotfile_allow")]
    pub dotfile_allow: Vec<String>,
}

impl Default for SyncManifest {
    fn default() -> Self {
        Self {
            files: default_files(),
            dirs: default_dirs(),
            exclude: default_exclude(),
            dotfile_allow: default_dotfile_allow(),
        }
    }
}

impl SyncManifest {
    /// Read a manifest from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScaffoldError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ScaffoldError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn rules(&self) -> ExclusionRules {
        ExclusionRules::new(self.exclude.clone(), self.dotfile_allow.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let manifest = SyncManifest::parse("dirs: [src]\n").unwrap();
        assert_eq!(manifest.dirs, vec!["src".to_string()]);
        assert_eq!(manifest.files, default_files());
        assert!(manifest.exclude.contains(&"node_modules".to_string()));
        assert_eq!(manifest.dotfile_allow, vec![".gitignore".to_string()]);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SyncManifest::parse("").unwrap(), SyncManifest::default());
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(SyncManifest::parse("files: {not: a list}").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let err = SyncManifest::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestRead { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_load_keeps_error_source() {
        use std::error::Error as _;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sync.yaml");
        std::fs::write(&path, "dirs: 42\n").unwrap();

        let err = SyncManifest::load(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
        let source = err.source().expect("yaml error kept as source");
        assert!(source.downcast_ref::<serde_yaml::Error>().is_some());

        let missing = SyncManifest::load(&dir.path().join("absent.yaml")).unwrap_err();
        let io = missing.source().and_then(|e| e.downcast_ref::<std::io::Error>());
        assert_eq!(io.map(|e| e.kind()), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_default_rules() {
        let rules = SyncManifest::default().rules();
        assert!(rules.is_excluded(Path::new("src/node_modules/x.js")));
        assert!(rules.is_excluded(Path::new("src/debug.log")));
        assert!(rules.is_excluded(Path::new("assets/.DS_Store")));
        assert!(!rules.is_excluded(Path::new("src/app/index.tsx")));
    }
}
