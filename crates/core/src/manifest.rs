//! `Bundle-ClassPath` rewriting for OSGi manifests.
//!
//! Only the first `Bundle-ClassPath:` header and its continuation lines are
//! replaced. A manifest carrying the header twice is not supported: the
//! second occurrence is passed through untouched.

use std::path::Path;

pub const BUNDLE_CLASSPATH: &str = "Bundle-ClassPath:";

/// Header block listing `.` followed by `lib/<name>` for each library.
pub fn bundle_classpath(library_file_names: &[String]) -> String {
    if library_file_names.is_empty() {
        return format!("{BUNDLE_CLASSPATH} .");
    }
    let libs: Vec<String> = library_file_names
        .iter()
        .map(|name| format!(" lib/{name}"))
        .collect();
    format!("{BUNDLE_CLASSPATH} .,\n{}", libs.join(",\n"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatchState {
    Searching,
    InsideField,
    Done,
}

/// Returns `manifest_text` with its `Bundle-ClassPath` replaced (or
/// appended). Every emitted line is right-trimmed and ends with `\n`.
pub fn patch_bundle_classpath(manifest_text: &str, library_file_names: &[String]) -> String {
    let block = bundle_classpath(library_file_names);
    let mut patched = String::with_capacity(manifest_text.len() + block.len() + 1);
    let mut state = PatchState::Searching;

    for line in manifest_text.lines() {
        match state {
            PatchState::Searching if line.starts_with(BUNDLE_CLASSPATH) => {
                patched.push_str(&block);
                patched.push('\n');
                state = PatchState::InsideField;
                continue;
            }
            PatchState::InsideField if line.starts_with(' ') => continue,
            PatchState::InsideField => state = PatchState::Done,
            _ => {}
        }
        patched.push_str(line.trim_end());
        patched.push('\n');
    }

    if state == PatchState::Searching {
        if !patched.ends_with('\n') {
            patched.push('\n');
        }
        patched.push_str(&block);
        patched.push('\n');
    }

    patched
}

/// Rewrites the manifest file at `path` in place.
pub fn patch_manifest_file(path: &Path, library_file_names: &[String]) -> crate::Result<()> {
    let manifest = std::fs::read_to_string(path)?;
    let patched = patch_bundle_classpath(&manifest, library_file_names);
    std::fs::write(path, patched)?;
    Ok(())
}
