use super::scanner::ScanResult;
use super::tree::FileProbe;
use crate::config::Layout;
use crate::filter::PatternFilter;
use crate::model::ClasspathEntry;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Pairs source archives with their binary siblings and turns the result
/// into `lib` classpath entries.
pub struct Reconciler {
    layout: Layout,
    filter: PatternFilter,
}

impl Reconciler {
    pub fn new(layout: Layout) -> Self {
        let filter = PatternFilter::new(layout.deny_list.iter().cloned());
        Self { layout, filter }
    }

    /// Expected binary sibling of a source archive, in the same directory.
    pub fn binary_sibling(&self, source: &Path) -> Option<PathBuf> {
        let name = source.file_name()?.to_str()?;
        Some(source.with_file_name(self.layout.binary_name_for(name)))
    }

    /// Produces one entry per source/binary pair and per unpaired binary,
    /// sorted by path.
    ///
    /// A source whose sibling is not among the scanned binaries yields
    /// nothing. A sibling is claimed by its source as soon as the names
    /// match, even if one of the two files has vanished from disk since the
    /// scan.
    pub fn reconcile(&self, scan: &ScanResult, probe: &dyn FileProbe) -> Vec<ClasspathEntry> {
        let mut binaries = scan.binaries.clone();
        let mut entries = Vec::new();
        let mut paired = 0usize;

        for source in &scan.sources {
            if let Some(pattern) = self.filter.matching_pattern(source) {
                debug!("Ignoring source {:?} (matches `{}`)", source, pattern);
                continue;
            }
            let Some(binary) = self.binary_sibling(source) else {
                continue;
            };
            if !binaries.remove(&binary) {
                debug!("No binary archive for source {:?}", source);
                continue;
            }
            if probe.is_file(&binary) && probe.is_file(source) {
                entries.push(ClasspathEntry::lib_with_source(
                    binary.to_string_lossy(),
                    source.to_string_lossy(),
                ));
                paired += 1;
            }
        }

        let mut unpaired = 0usize;
        for binary in &binaries {
            if self.filter.is_excluded(binary) || !probe.is_file(binary) {
                continue;
            }
            entries.push(ClasspathEntry::lib(binary.to_string_lossy()));
            unpaired += 1;
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));

        info!(
            "Reconciled target platform: {} archives with sources, {} without",
            paired, unpaired
        );

        entries
    }
}
