use crate::model::{ClasspathDescriptor, ClasspathEntry};

pub const SOURCE_ROOT: &str = "src";
pub const SOURCE_INCLUDE: &str = "**/*.java";
pub const OUTPUT_DIR: &str = "target/classes";

/// Splits the raw output of a dependency lister into individual paths.
///
/// The list is separated by `separator`; line breaks are treated the same
/// way and empty segments are dropped.
pub fn parse_dependency_list(text: &str, separator: char) -> Vec<String> {
    text.split(|c: char| c == separator || c == '\n' || c == '\r')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the final descriptor from the lister output and the reconciled
/// target platform entries.
pub struct ClasspathAssembler {
    runtime_container: String,
}

impl ClasspathAssembler {
    pub fn new(runtime_container: impl Into<String>) -> Self {
        Self {
            runtime_container: runtime_container.into(),
        }
    }

    /// Source root, output directory and JRE container, in that order.
    pub fn fixed_entries(&self) -> [ClasspathEntry; 3] {
        [
            ClasspathEntry::src(SOURCE_ROOT, SOURCE_INCLUDE),
            ClasspathEntry::output(OUTPUT_DIR),
            ClasspathEntry::container(self.runtime_container.clone()),
        ]
    }

    /// Fixed entries, then the sorted external paths, then `reconciled` as
    /// given. Paths shared between the groups are kept in both.
    pub fn assemble(
        &self,
        mut external: Vec<String>,
        reconciled: Vec<ClasspathEntry>,
    ) -> ClasspathDescriptor {
        external.sort();

        let mut entries = Vec::with_capacity(3 + external.len() + reconciled.len());
        entries.extend(self.fixed_entries());
        entries.extend(external.into_iter().map(ClasspathEntry::lib));
        entries.extend(reconciled);

        ClasspathDescriptor::new(entries)
    }
}
