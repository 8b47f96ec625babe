use crate::error::{BuildError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A regular file found in the target platform.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArtifactRecord {
    pub path: PathBuf,
    /// First-level directory below the root, `None` for files at the root.
    pub subtree: Option<String>,
}

/// Answers whether a path is a regular file at reconciliation time.
pub trait FileProbe {
    fn is_file(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskProbe;

impl FileProbe for DiskProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Read-only snapshot of every regular file below a platform installation.
///
/// The tree is enumerated exactly once; scanning and reconciliation never go
/// back to the filesystem for discovery.
#[derive(Debug, Clone)]
pub struct TargetTree {
    root: PathBuf,
    records: BTreeSet<ArtifactRecord>,
    files: BTreeSet<PathBuf>,
}

impl TargetTree {
    /// Walks `root` recursively, following symlinked directories. The root
    /// is canonicalized first so every record holds an absolute path.
    /// Unreadable entries below the root (including symlink loops) are
    /// skipped with a warning; an unreadable root is an error.
    pub fn snapshot(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(BuildError::not_found(
                "Target platform installation dir",
                root,
            ));
        }
        let root = root.canonicalize()?;

        let start = std::time::Instant::now();
        let mut paths = Vec::new();

        for entry in WalkDir::new(&root).follow_links(true).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() {
                paths.push(entry.into_path());
            }
        }

        debug!(
            "Snapshot of {:?}: {} files in {:?}",
            root,
            paths.len(),
            start.elapsed()
        );

        Ok(Self::from_paths(root, paths))
    }

    /// Builds a snapshot from an explicit file list. Relative paths not
    /// already starting with `root` are taken relative to it.
    pub fn from_paths(root: impl Into<PathBuf>, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let root = root.into();
        let mut records = BTreeSet::new();
        let mut files = BTreeSet::new();

        for path in paths {
            let path = if path.is_relative() && !path.starts_with(&root) {
                root.join(path)
            } else {
                path
            };
            let subtree = subtree_of(&root, &path);
            files.insert(path.clone());
            records.insert(ArtifactRecord { path, subtree });
        }

        Self {
            root,
            records,
            files,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn records(&self) -> impl Iterator<Item = &ArtifactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FileProbe for TargetTree {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

fn subtree_of(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut components = relative.components();
    let first = components.next()?;
    // The last component is the file itself.
    components.next()?;
    Some(first.as_os_str().to_string_lossy().into_owned())
}
