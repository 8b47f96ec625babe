//! Maven coordinates from `pom.xml`.

use epb_core::{BuildError, Result};
use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use std::path::Path;

pub const POM_FILE: &str = "pom.xml";
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy)]
enum Field {
    GroupId,
    ArtifactId,
    Version,
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"groupId" => Some(Field::GroupId),
            b"artifactId" => Some(Field::ArtifactId),
            b"version" => Some(Field::Version),
            _ => None,
        }
    }
}

/// `groupId`, `artifactId` and `version` of a project.
///
/// Each field is the first element of that name in the POM namespace, in
/// document order, so a `<parent>` block declared first wins over the
/// project's own values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            group: UNKNOWN.to_string(),
            artifact: UNKNOWN.to_string(),
            version: UNKNOWN.to_string(),
        }
    }
}

impl Coordinates {
    pub fn read(pom: &Path) -> Result<Self> {
        if !pom.is_file() {
            return Err(BuildError::not_found("File", pom));
        }
        let content = std::fs::read_to_string(pom)?;
        Self::parse(&content, pom)
    }

    pub fn parse(xml: &str, origin: &Path) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut group = None;
        let mut artifact = None;
        let mut version = None;
        let mut current: Option<Field> = None;

        loop {
            match reader.read_resolved_event() {
                Ok((ResolveResult::Bound(Namespace(ns)), Event::Start(e)))
                    if ns == POM_NAMESPACE.as_bytes() =>
                {
                    current = Field::from_local_name(e.local_name().as_ref());
                }
                Ok((_, Event::Start(_))) | Ok((_, Event::End(_))) => current = None,
                Ok((_, Event::Text(text))) => {
                    let Some(field) = current.take() else {
                        continue;
                    };
                    let value = text
                        .unescape()
                        .map_err(|e| BuildError::xml(origin, e))?
                        .into_owned();
                    let slot = match field {
                        Field::GroupId => &mut group,
                        Field::ArtifactId => &mut artifact,
                        Field::Version => &mut version,
                    };
                    slot.get_or_insert(value);
                }
                Ok((_, Event::Eof)) => break,
                Err(e) => return Err(BuildError::xml(origin, e)),
                _ => {}
            }
        }

        let defaults = Coordinates::default();
        Ok(Self {
            group: group.unwrap_or(defaults.group),
            artifact: artifact.unwrap_or(defaults.artifact),
            version: version.unwrap_or(defaults.version),
        })
    }

    /// `{group}.{artifact}_{version}.jar`, the bundle file name Eclipse
    /// expects in `dropins/`.
    pub fn artifact_name(&self) -> String {
        format!("{}.{}_{}.jar", self.group, self.artifact, self.version)
    }
}
