//! Template materialization: copy a template tree into a new project
//!
//! Text files go through the [`SubstitutionMap`]; binary files are copied
//! byte-for-byte. The walk is an explicit worklist and stops at the first
//! failure. Files already written are left in place.

use crate::error::{Result, ScaffoldError};
use crate::identity::Identity;
use crate::templates::classify::{classify, DirectoryEntry, EntryKind, FileClass};
use crate::templates::substitution::{PlaceholderTokens, SubstitutionMap};
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Knobs for a materialization run
#[derive(Debug, Clone, Default)]
pub struct MaterializeOptions {
    /// Tokens searched for in the template
    pub tokens: PlaceholderTokens,

    /// Also apply substitution to file and directory names
    pub rewrite_paths: bool,
}

/// What a materialization run produced
#[derive(Debug, Clone, Default)]
pub struct MaterializeReport {
    pub directories: usize,
    pub text_files: usize,
    pub binary_files: usize,

    /// Destination paths of written files, relative to the project root
    pub files: Vec<PathBuf>,
}

impl MaterializeReport {
    pub fn file_count(&self) -> usize {
        self.text_files + self.binary_files
    }

    fn record(&mut self, entry: &DirectoryEntry) {
        match entry.kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::File(FileClass::Text) => {
                self.text_files += 1;
                self.files.push(entry.relative.clone());
            }
            EntryKind::File(FileClass::Binary) => {
                self.binary_files += 1;
                self.files.push(entry.relative.clone());
            }
        }
    }
}

/// Copy `source_root` into `dest_root`, rewriting placeholders for `identity`
///
/// The caller is responsible for rejecting an existing destination; this
/// function creates `dest_root` if needed and writes into it.
pub async fn materialize(
    source_root: &Path,
    dest_root: &Path,
    identity: &Identity,
    options: &MaterializeOptions,
) -> Result<MaterializeReport> {
    let map = SubstitutionMap::from_identity(&options.tokens, identity);

    fs::create_dir_all(dest_root)
        .await
        .map_err(|e| ScaffoldError::destination_write(dest_root, e))?;

    let mut report = MaterializeReport::default();
    // (source relative dir, destination relative dir)
    let mut pending: Vec<(PathBuf, PathBuf)> = vec![(PathBuf::new(), PathBuf::new())];

    while let Some((src_rel, dest_rel)) = pending.pop() {
        let src_dir = source_root.join(&src_rel);
        for name in list_dir(&src_dir).await? {
            let src_path = src_dir.join(&name);
            let child_src = src_rel.join(&name);
            let child_dest = dest_rel.join(rewrite_name(&name, &map, options.rewrite_paths)?);
            let dest_path = dest_root.join(&child_dest);

            let metadata = fs::metadata(&src_path)
                .await
                .map_err(|e| ScaffoldError::source_read(&src_path, e))?;

            let entry = if metadata.is_dir() {
                fs::create_dir_all(&dest_path)
                    .await
                    .map_err(|e| ScaffoldError::destination_write(&dest_path, e))?;
                pending.push((child_src, child_dest.clone()));
                DirectoryEntry {
                    relative: child_dest,
                    kind: EntryKind::Directory,
                }
            } else if metadata.is_file() {
                let class = classify(&src_path);
                copy_file(&src_path, &dest_path, class, &map).await?;
                DirectoryEntry {
                    relative: child_dest,
                    kind: EntryKind::File(class),
                }
            } else {
                tracing::warn!(path = %src_path.display(), "skipping special file");
                continue;
            };

            tracing::debug!(path = %entry.relative.display(), kind = ?entry.kind, "materialized");
            report.record(&entry);
        }
    }

    tracing::info!(
        dest = %dest_root.display(),
        directories = report.directories,
        text_files = report.text_files,
        binary_files = report.binary_files,
        "template materialized"
    );

    Ok(report)
}

/// Sorted entry names of a directory
async fn list_dir(dir: &Path) -> Result<Vec<OsString>> {
    let mut reader = fs::read_dir(dir)
        .await
        .map_err(|e| ScaffoldError::source_read(dir, e))?;

    let mut names = Vec::new();
    while let Some(entry) = reader
        .next_entry()
        .await
        .map_err(|e| ScaffoldError::source_read(dir, e))?
    {
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}

async fn copy_file(src: &Path, dest: &Path, class: FileClass, map: &SubstitutionMap) -> Result<()> {
    match class {
        FileClass::Binary => {
            let bytes = fs::read(src)
                .await
                .map_err(|e| ScaffoldError::source_read(src, e))?;
            fs::write(dest, &bytes)
                .await
                .map_err(|e| ScaffoldError::destination_write(dest, e))
        }
        FileClass::Text => {
            // Non UTF-8 content surfaces here as InvalidData
            let contents = fs::read_to_string(src)
                .await
                .map_err(|e| ScaffoldError::source_read(src, e))?;
            let rewritten = map.apply(&contents);
            fs::write(dest, rewritten.as_bytes())
                .await
                .map_err(|e| ScaffoldError::destination_write(dest, e))
        }
    }
}

/// Apply substitution to one path segment when enabled
///
/// The result must stay a single plain name so writes remain under the
/// destination root.
fn rewrite_name(name: &OsString, map: &SubstitutionMap, enabled: bool) -> Result<OsString> {
    if !enabled {
        return Ok(name.clone());
    }
    let Some(original) = name.to_str() else {
        return Ok(name.clone());
    };

    let rewritten = map.apply(original).into_owned();
    let mut components = Path::new(&rewritten).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(OsString::from(rewritten)),
        _ => Err(ScaffoldError::validation(format!(
            "Renaming '{}' gives '{}', which is not a plain file name",
            original, rewritten
        ))),
    }
}
