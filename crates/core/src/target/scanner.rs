//! Partitions a target platform snapshot into source and binary archives.
//!
//! Sources are collected from anywhere below the root, binaries only from
//! the configured first-level subtrees. A file is never counted as both, and
//! the project's own output artifact is never offered as a dependency.

use super::tree::TargetTree;
use crate::config::Layout;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// Source and binary archives discovered in a target platform.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub sources: BTreeSet<PathBuf>,
    pub binaries: BTreeSet<PathBuf>,
}

pub struct ArtifactScanner {
    layout: Layout,
    self_artifact: Option<String>,
}

impl ArtifactScanner {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            self_artifact: None,
        }
    }

    /// Exclude the archive the project itself builds, e.g.
    /// `org.example.plugin_1.0.0.jar`.
    pub fn with_self_artifact(mut self, name: impl Into<String>) -> Self {
        self.self_artifact = Some(name.into());
        self
    }

    pub fn scan(&self, tree: &TargetTree) -> ScanResult {
        let mut result = ScanResult::default();
        let mut candidates = BTreeSet::new();

        for record in tree.records() {
            let Some(name) = record.path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if self.layout.is_source_name(name) {
                result.sources.insert(record.path.clone());
                continue;
            }

            let in_subtree = record
                .subtree
                .as_deref()
                .is_some_and(|s| self.layout.subtrees.iter().any(|t| t == s));
            if in_subtree && self.layout.is_archive_name(name) {
                candidates.insert(record.path.clone());
            }
        }

        for path in candidates {
            let is_self = self.self_artifact.as_deref().is_some_and(|own| {
                path.file_name().and_then(|n| n.to_str()) == Some(own)
            });
            if is_self {
                debug!("Skipping own output artifact {:?}", path);
                continue;
            }
            result.binaries.insert(path);
        }

        info!(
            "Target platform scan complete: {} source archives, {} binary archives",
            result.sources.len(),
            result.binaries.len()
        );

        result
    }
}
