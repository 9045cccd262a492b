//! Template store synchronization from a canonical source project
//!
//! The template store is erased and rebuilt on every run. Listed top-level
//! files are copied as-is; listed directories are mirrored with the
//! [`ExclusionRules`] applied. Content is never rewritten.

pub mod manifest;
pub mod rules;

use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use manifest::SyncManifest;
pub use rules::ExclusionRules;

/// Outcome of a synchronization run
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Listed files that were copied
    pub files: Vec<String>,

    /// Listed directories that were mirrored
    pub dirs: Vec<String>,

    /// Listed files or directories absent from the source
    pub skipped: Vec<String>,

    /// Files written while mirroring directories
    pub mirrored_files: usize,

    /// Entries pruned by the exclusion rules (subtrees count once)
    pub excluded: usize,
}

/// Replace the contents of `template_root` with a filtered copy of `source_root`
pub fn synchronize(
    source_root: &Path,
    template_root: &Path,
    manifest: &SyncManifest,
) -> Result<SyncReport> {
    check_disjoint(source_root, template_root)?;

    empty_dir(template_root)?;

    let rules = manifest.rules();
    let mut report = SyncReport::default();

    for file in &manifest.files {
        let src = source_root.join(file);
        if !src.is_file() {
            tracing::debug!(file = %file, "listed file not in source, skipping");
            report.skipped.push(file.clone());
            continue;
        }
        copy_file(&src, &template_root.join(file))?;
        report.files.push(file.clone());
    }

    for dir in &manifest.dirs {
        let src = source_root.join(dir);
        if !src.is_dir() {
            tracing::debug!(dir = %dir, "listed directory not in source, skipping");
            report.skipped.push(dir.clone());
            continue;
        }
        mirror_dir(source_root, &src, template_root, &rules, &mut report)?;
        report.dirs.push(dir.clone());
    }

    tracing::info!(
        template = %template_root.display(),
        files = report.files.len(),
        dirs = report.dirs.len(),
        mirrored = report.mirrored_files,
        excluded = report.excluded,
        "template store synchronized"
    );

    Ok(report)
}

fn mirror_dir(
    source_root: &Path,
    dir: &Path,
    template_root: &Path,
    rules: &ExclusionRules,
    report: &mut SyncReport,
) -> Result<()> {
    let mut excluded = 0;
    let walker = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // Segments are checked relative to the source root, listed dir included
            if entry.depth() == 0 {
                return true;
            }
            let keep = entry
                .path()
                .strip_prefix(source_root)
                .map(|rel| !rules.is_excluded(rel))
                .unwrap_or(false);
            if !keep {
                tracing::debug!(path = %entry.path().display(), "excluded");
                excluded += 1;
            }
            keep
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ScaffoldError::source_read(&path, e.into())
        })?;
        let relative = entry
            .path()
            .strip_prefix(source_root)
            .map_err(|_| {
                ScaffoldError::validation(format!(
                    "{} escapes {}",
                    entry.path().display(),
                    source_root.display()
                ))
            })?;
        let dest = template_root.join(relative);

        // Directories appear only once a file is copied into them
        if !entry.file_type().is_dir() {
            copy_file(entry.path(), &dest)?;
            report.mirrored_files += 1;
        }
    }

    report.excluded += excluded;
    Ok(())
}

/// Remove everything inside `dir`, creating it when missing
fn empty_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return fs::create_dir_all(dir).map_err(|e| ScaffoldError::destination_write(dir, e));
    }

    let entries = fs::read_dir(dir).map_err(|e| ScaffoldError::destination_write(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ScaffoldError::destination_write(dir, e))?;
        let path = entry.path();
        let is_dir = entry
            .file_type()
            .map_err(|e| ScaffoldError::destination_write(&path, e))?
            .is_dir();
        let removed = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| ScaffoldError::destination_write(&path, e))?;
    }
    Ok(())
}

fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::destination_write(parent, e))?;
    }
    let bytes = fs::read(src).map_err(|e| ScaffoldError::source_read(src, e))?;
    fs::write(dest, bytes).map_err(|e| ScaffoldError::destination_write(dest, e))
}

/// Reject trees that overlap, since the template store is erased first
fn check_disjoint(source_root: &Path, template_root: &Path) -> Result<()> {
    let source = source_root
        .canonicalize()
        .map_err(|e| ScaffoldError::source_read(source_root, e))?;
    let template = resolve_existing(template_root)?;

    if source.starts_with(&template) || template.starts_with(&source) {
        return Err(ScaffoldError::validation(format!(
            "Source {} and template directory {} overlap",
            source_root.display(),
            template_root.display()
        )));
    }
    Ok(())
}

/// Canonical form of a path that may not exist yet
///
/// The deepest existing ancestor is canonicalized and the missing tail is
/// appended as-is.
fn resolve_existing(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| ScaffoldError::source_read(path, e))?
            .join(path)
    };

    let mut existing = absolute.as_path();
    let mut tail = Vec::new();
    loop {
        match existing.canonicalize() {
            Ok(canonical) => {
                return Ok(tail
                    .iter()
                    .rev()
                    .fold(canonical, |acc: PathBuf, part| acc.join(part)));
            }
            Err(e) => match (existing.parent(), existing.file_name()) {
                (Some(parent), Some(name)) => {
                    tail.push(name.to_os_string());
                    existing = parent;
                }
                _ => return Err(ScaffoldError::source_read(path, e)),
            },
        }
    }
}

/// Refresh a product's template store and print what was copied
pub fn sync_template<C: ProductConfig>(
    config: &C,
    source: &Path,
    template_dir: Option<&Path>,
    manifest_path: Option<&Path>,
) -> anyhow::Result<SyncReport> {
    if !source.is_dir() {
        return Err(ScaffoldError::validation(format!(
            "Source project not found: {}",
            source.display()
        ))
        .into());
    }

    let template_dir: PathBuf = config.resolve_template_dir(template_dir);
    let manifest = match manifest_path {
        Some(path) => SyncManifest::load(path)?,
        None => SyncManifest::default(),
    };

    println!(
        "{}",
        format!("Copying {} template files...", config.display_name())
            .cyan()
            .bold()
    );
    println!();

    let report = synchronize(source, &template_dir, &manifest)?;

    for file in &report.files {
        println!("  {} Copied: {}", "->".blue(), file);
    }
    for dir in &report.dirs {
        println!("  {} Copied directory: {}", "->".blue(), dir);
    }
    for missing in &report.skipped {
        eprintln!("  {} not found in source: {}", "Skipped".yellow(), missing);
    }

    println!();
    println!(
        "{} {} files into {}",
        "Synchronized".green().bold(),
        report.files.len() + report.mirrored_files,
        template_dir.display()
    );

    Ok(report)
}
