//! Binary/text classification of template entries

use std::path::{Path, PathBuf};

/// Extensions copied byte-for-byte without decoding
pub const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "ico", "svg", "webp", "pdf", "zip", "tar", "gz",
];

/// How a file's content is handled during copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Binary,
    Text,
}

/// What kind of node an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File(FileClass),
}

/// A node discovered while walking a template tree
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Path relative to the walk root
    pub relative: PathBuf,
    pub kind: EntryKind,
}

/// Classify a file by extension only (case-insensitive)
pub fn classify(path: &Path) -> FileClass {
    let is_binary = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            BINARY_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false);

    if is_binary {
        FileClass::Binary
    } else {
        FileClass::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_extensions() {
        for name in [
            "icon.png", "splash.JPG", "photo.jpeg", "a.gif", "favicon.ico", "logo.svg",
            "hero.webp", "doc.pdf", "bundle.zip", "src.tar", "src.tar.gz",
        ] {
            assert_eq!(classify(Path::new(name)), FileClass::Binary, "{name}");
        }
    }

    #[test]
    fn test_text_by_default() {
        for name in [
            "app.json", "index.ts", "README.md", ".gitignore", "Makefile", "font.ttf",
            "assets/png",
        ] {
            assert_eq!(classify(Path::new(name)), FileClass::Text, "{name}");
        }
    }
}
