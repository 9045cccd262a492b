//! Exclusion rules applied while mirroring a source project

use std::path::{Component, Path};

/// Segment-based exclusion rules
///
/// An entry is excluded when any segment of its path matches any pattern.
/// Patterns are matched like this:
/// - `*.log` (leading `*`): segment ends with `.log`
/// - `node_modules`: segment equals or starts with `node_modules`
///
/// Segments beginning with `.` are skipped too, unless listed in the dotfile
/// allow-list. An allow-listed name is never excluded by a pattern either, so
/// `.gitignore` survives the `.git` prefix.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    patterns: Vec<String>,
    dotfile_allow: Vec<String>,
}

impl ExclusionRules {
    pub fn new(patterns: Vec<String>, dotfile_allow: Vec<String>) -> Self {
        Self {
            patterns,
            dotfile_allow,
        }
    }

    /// Whether a single name matches an exclusion pattern
    pub fn matches_segment(&self, segment: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            if let Some(suffix) = pattern.strip_prefix('*') {
                segment.ends_with(suffix)
            } else {
                segment.starts_with(pattern.as_str())
            }
        })
    }

    fn is_allowed(&self, name: &str) -> bool {
        self.dotfile_allow.iter().any(|allowed| allowed == name)
    }

    /// Whether a name is a hidden entry that must be skipped
    pub fn is_hidden(&self, name: &str) -> bool {
        name.starts_with('.') && !self.is_allowed(name)
    }

    /// Check a path relative to the source root
    ///
    /// Every segment is tested against the patterns; only the final segment
    /// is subject to the dotfile rule since parents were already accepted.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let segments = relative.components().filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        });

        let mut last = None;
        for segment in segments {
            if !self.is_allowed(&segment) && self.matches_segment(&segment) {
                return true;
            }
            last = Some(segment);
        }

        last.is_some_and(|name| self.is_hidden(&name))
    }
}
