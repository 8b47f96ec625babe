use std::path::Path;

/// Substring denylist applied to every candidate artifact path.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    deny_list: Vec<String>,
}

impl PatternFilter {
    pub fn new(deny_list: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            deny_list: deny_list.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the first denylist entry found in `path`, if any.
    pub fn matching_pattern(&self, path: &Path) -> Option<&str> {
        let path = path.to_string_lossy();
        self.deny_list
            .iter()
            .find(|pattern| path.contains(pattern.as_str()))
            .map(String::as_str)
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.matching_pattern(path).is_some()
    }
}
