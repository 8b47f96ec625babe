#![allow(dead_code)]

use epb_core::tool::{ArchiveRequest, Archiver, BuildTool, Toolchain};
use epb_core::{BuilderConfig, Layout, PluginBuilder, Result};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

pub const ARTIFACT: &str = "org.example.demo_1.0.0.jar";

pub struct FakeBuildTool {
    pub listing: String,
}

impl BuildTool for FakeBuildTool {
    fn name(&self) -> &str {
        "fake-maven"
    }

    fn descriptor_file(&self) -> &str {
        "pom.xml"
    }

    fn artifact_name(&self, _project_root: &Path) -> Result<String> {
        Ok(ARTIFACT.to_string())
    }

    fn list_dependencies(&self, _project_root: &Path) -> Result<String> {
        Ok(self.listing.clone())
    }
}

/// Writes a placeholder archive and records every request.
#[derive(Default, Clone)]
pub struct FakeArchiver {
    pub requests: Rc<RefCell<Vec<ArchiveRequest>>>,
}

impl Archiver for FakeArchiver {
    fn name(&self) -> &str {
        "fake-jar"
    }

    fn archive(&self, request: &ArchiveRequest) -> Result<()> {
        fs::write(request.working_dir.join(&request.archive), b"fake jar")?;
        self.requests.borrow_mut().push(request.clone());
        Ok(())
    }
}

pub fn touch(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn config() -> BuilderConfig {
    BuilderConfig {
        layout: Layout {
            deny_list: vec!["egit".to_string(), "/jre/".to_string()],
            ..Layout::default()
        },
        ..BuilderConfig::default()
    }
}

pub fn builder(config: BuilderConfig, listing: &str, archiver: FakeArchiver) -> PluginBuilder {
    PluginBuilder::new(
        config,
        Toolchain {
            build_tool: Box::new(FakeBuildTool {
                listing: listing.to_string(),
            }),
            archiver: Box::new(archiver),
        },
    )
}

/// An Eclipse/Maven project with one source file under `parent/plugin`.
pub fn make_project(parent: &Path) -> std::path::PathBuf {
    let root = parent.join("plugin");
    touch(&root.join(".project"), b"<projectDescription/>");
    touch(&root.join("pom.xml"), b"<project/>");
    touch(&root.join("src/org/example/Demo.java"), b"class Demo {}");
    root
}
