use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    Src,
    Output,
    Con,
    Lib,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Src => "src",
            EntryKind::Output => "output",
            EntryKind::Con => "con",
            EntryKind::Lib => "lib",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "src" => Ok(EntryKind::Src),
            "output" => Ok(EntryKind::Output),
            "con" => Ok(EntryKind::Con),
            "lib" => Ok(EntryKind::Lib),
            other => Err(format!("unknown classpath entry kind `{other}`")),
        }
    }
}

/// One `<classpathentry>` of a `.classpath` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClasspathEntry {
    pub kind: EntryKind,
    pub path: String,
    pub sourcepath: Option<String>,
    pub including: Option<String>,
}

impl ClasspathEntry {
    pub fn new(kind: EntryKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            sourcepath: None,
            including: None,
        }
    }

    pub fn src(path: impl Into<String>, including: impl Into<String>) -> Self {
        Self {
            including: Some(including.into()),
            ..Self::new(EntryKind::Src, path)
        }
    }

    pub fn output(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Output, path)
    }

    pub fn container(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Con, path)
    }

    pub fn lib(path: impl Into<String>) -> Self {
        Self::new(EntryKind::Lib, path)
    }

    /// A binary archive paired with its source archive.
    pub fn lib_with_source(path: impl Into<String>, sourcepath: impl Into<String>) -> Self {
        Self {
            sourcepath: Some(sourcepath.into()),
            ..Self::lib(path)
        }
    }
}
