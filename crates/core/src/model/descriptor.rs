use super::entry::{ClasspathEntry, EntryKind};
use crate::error::{BuildError, Result};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::path::{Path, PathBuf};
use tracing::debug;

const ROOT_ELEMENT: &str = "classpath";
const ENTRY_ELEMENT: &str = "classpathentry";

/// The ordered entries of a `.classpath` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClasspathDescriptor {
    pub entries: Vec<ClasspathEntry>,
}

impl ClasspathDescriptor {
    pub fn new(entries: Vec<ClasspathEntry>) -> Self {
        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BuildError::not_found("File", path));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parses descriptor XML. `origin` only labels errors.
    ///
    /// Entries of kinds this tool does not produce (`var`, ...) are skipped.
    pub fn parse(xml: &str, origin: &Path) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut entries = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e))
                    if e.name().as_ref() == ENTRY_ELEMENT.as_bytes() =>
                {
                    if let Some(entry) = parse_entry(&e, origin)? {
                        entries.push(entry);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(BuildError::xml(origin, e)),
                _ => {}
            }
        }

        Ok(Self { entries })
    }

    /// Pretty-printed XML with a declaration header, two-space indentation
    /// and a trailing newline.
    ///
    /// The declaration is `<?xml version="1.0" encoding="utf-8"?>` with
    /// double quotes. Descriptors written by lxml-based tools use single
    /// quotes, so output is byte-identical to those only after the first
    /// line; Eclipse reads both.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let origin = Path::new(".classpath");
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(|e| BuildError::xml(origin, e))?;
        writer
            .write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))
            .map_err(|e| BuildError::xml(origin, e))?;

        for entry in &self.entries {
            let mut element = BytesStart::new(ENTRY_ELEMENT);
            element.push_attribute(("kind", entry.kind.as_str()));
            element.push_attribute(("path", entry.path.as_str()));
            if let Some(sourcepath) = &entry.sourcepath {
                element.push_attribute(("sourcepath", sourcepath.as_str()));
            }
            if let Some(including) = &entry.including {
                element.push_attribute(("including", including.as_str()));
            }
            writer
                .write_event(Event::Empty(element))
                .map_err(|e| BuildError::xml(origin, e))?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))
            .map_err(|e| BuildError::xml(origin, e))?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Overwrites `path` with the serialized descriptor.
    pub fn write(&self, path: &Path) -> Result<()> {
        let bytes = self.to_xml()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// The configured output directory (first `output` entry).
    pub fn output_dir(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.kind == EntryKind::Output)
            .map(|e| e.path.as_str())
    }

    /// Sorted `lib` paths that are not provided by the target platform.
    pub fn third_party_libs(&self, platform_prefix: &str) -> Vec<PathBuf> {
        let mut libs: Vec<PathBuf> = self
            .entries
            .iter()
            .filter(|e| e.kind == EntryKind::Lib && !e.path.starts_with(platform_prefix))
            .map(|e| PathBuf::from(&e.path))
            .collect();
        libs.sort();
        libs
    }
}

fn parse_entry(element: &BytesStart<'_>, origin: &Path) -> Result<Option<ClasspathEntry>> {
    let mut kind = None;
    let mut path = None;
    let mut sourcepath = None;
    let mut including = None;

    for attr in element.attributes() {
        let attr = attr.map_err(|e| BuildError::xml(origin, e))?;
        let value = attr
            .unescape_value()
            .map_err(|e| BuildError::xml(origin, e))?
            .into_owned();
        match attr.key.as_ref() {
            b"kind" => kind = Some(value),
            b"path" => path = Some(value),
            b"sourcepath" => sourcepath = Some(value),
            b"including" => including = Some(value),
            _ => {}
        }
    }

    let (Some(kind), Some(path)) = (kind, path) else {
        debug!("Skipping classpath entry without kind or path in {:?}", origin);
        return Ok(None);
    };
    let Ok(kind) = kind.parse::<EntryKind>() else {
        debug!("Skipping classpath entry of kind `{}` in {:?}", kind, origin);
        return Ok(None);
    };

    Ok(Some(ClasspathEntry {
        kind,
        path,
        sourcepath,
        including,
    }))
}
