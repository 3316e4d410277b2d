//! Two-pass workspace clearing.

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Options controlling clear behavior (runtime flags)
#[derive(Clone, Copy)]
pub struct ClearOptions {
    pub delete: bool,
    pub verbose: bool,
    pub calculate_sizes: bool,
}

/// Kind of a directory entry, classified without following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Symlink,
    Dir,
}

/// An entry observed during a clear run
#[derive(Debug)]
pub struct ClearedEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
    pub removed: bool,
}

/// Result of a clear run
#[derive(Debug, Default)]
pub struct ClearReport {
    pub entries: Vec<ClearedEntry>,
    pub reclaimed_bytes: u64,
}

/// Clear a working directory in two passes.
///
/// Pass 1 removes every entry directly under `root`: files and symlinks are
/// unlinked, directories are removed with their contents. A directory named
/// `keep` is left in place. Pass 2 then empties `root/<keep>` itself, with no
/// further protection, if it exists as a directory.
///
/// Failing to list `root` is fatal. Failures on individual entries are logged
/// to stderr and the run continues with the next entry.
pub fn clear_workspace(root: &Path, keep: &str, options: ClearOptions) -> Result<ClearReport> {
    let mut report = ClearReport::default();

    clear_directory(root, Some(keep), options, &mut report)?;

    // The protection only preserves the directory's existence. Its contents
    // are cleared in a second pass, existence-checked first: pass 1 may have
    // unlinked a file or symlink carrying the protected name.
    let kept = root.join(keep);
    if kept.is_dir() {
        clear_directory(&kept, None, options, &mut report)?;
    }

    Ok(report)
}

/// Run one clearing pass over the direct entries of `dir`.
///
/// `keep` names a subdirectory to skip; `None` clears everything.
fn clear_directory(
    dir: &Path,
    keep: Option<&str>,
    options: ClearOptions,
    report: &mut ClearReport,
) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Warning: Failed to access entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        let path = entry.path();
        let name = entry.file_name();

        // Use symlink_metadata so links are classified as links, never
        // followed into their targets
        let metadata = match fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(err) => {
                eprintln!("Failed to delete {}. Reason: {}", name.to_string_lossy(), err);
                continue;
            }
        };
        let kind = classify(metadata.file_type());

        // Only a directory is protected by name; a file called the same
        // thing is removed like any other entry
        if kind == EntryKind::Dir && keep.is_some_and(|k| name.as_os_str() == OsStr::new(k)) {
            if options.verbose {
                println!("Keeping: {}", path.display());
            }
            continue;
        }

        let size = if options.calculate_sizes {
            entry_size(&path, &metadata)
        } else {
            0
        };

        let removed = if options.delete {
            match remove_entry(&path, kind) {
                Ok(()) => {
                    if options.verbose {
                        println!("Removed: {}", path.display());
                    }
                    true
                }
                Err(err) => {
                    eprintln!("Failed to delete {}. Reason: {}", name.to_string_lossy(), err);
                    false
                }
            }
        } else {
            println!("Would remove: {}", path.display());
            false
        };

        if removed || !options.delete {
            report.reclaimed_bytes += size;
        }

        report.entries.push(ClearedEntry {
            path,
            kind,
            size,
            removed,
        });
    }

    Ok(())
}

fn classify(file_type: fs::FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Dir
    } else {
        EntryKind::File
    }
}

/// Remove one entry according to its kind: files and symlinks are unlinked
/// (the link, not its target), directories go with their entire contents.
fn remove_entry(path: &Path, kind: EntryKind) -> std::io::Result<()> {
    match kind {
        EntryKind::File | EntryKind::Symlink => fs::remove_file(path),
        EntryKind::Dir => fs::remove_dir_all(path),
    }
}

/// Size of an entry as it would be reclaimed: metadata length for files,
/// recursive sum over regular files for directories, zero for symlinks.
fn entry_size(path: &Path, metadata: &fs::Metadata) -> u64 {
    if metadata.file_type().is_symlink() {
        0
    } else if metadata.is_dir() {
        directory_size(path)
    } else {
        metadata.len()
    }
}

/// Calculate total size of a directory's regular files. Symlinks are neither
/// followed nor counted; unreadable entries count as zero.
fn directory_size(path: &Path) -> u64 {
    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| fs::symlink_metadata(e.path()).ok())
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .sum()
}
