mod common;

use common::{ARTIFACT, FakeArchiver, builder, config, touch};
use epb_core::BuildError;
use epb_core::model::{ClasspathDescriptor, ClasspathEntry};
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

fn make_project(dir: &TempDir) -> PathBuf {
    common::make_project(dir.path())
}

fn make_platform(dir: &TempDir) -> PathBuf {
    let platform = dir.path().join("platform");
    for jar in [
        "plugins/org.a_1.0.jar",
        "plugins/org.a.source_1.0.jar",
        "plugins/org.b_2.0.jar",
        "plugins/org.egit.core_1.0.jar",
        "features/feat/lib/feat_1.0.jar",
        "jre/lib/rt.jar",
        "other/org.c_1.0.jar",
        "other/org.c.source_1.0.jar",
    ] {
        touch(&platform.join(jar), b"jar");
    }
    touch(&platform.join("dropins").join(ARTIFACT), b"previous build");
    touch(&platform.join("plugins/readme.txt"), b"not an archive");
    platform.canonicalize().unwrap()
}

fn path_str(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_build_classpath_end_to_end() {
    let dir = tempdir().unwrap();
    let root = make_project(&dir);
    let platform = make_platform(&dir);
    let builder = builder(
        config(),
        "/m2/b-1.0.jar:/m2/a-1.0.jar\n",
        FakeArchiver::default(),
    );

    let report = builder
        .build_classpath(&root.join("src/org/example/Demo.java"), &platform)
        .unwrap();

    assert_eq!(report.project_root, root.canonicalize().unwrap());
    assert_eq!(report.external_entries, 2);
    assert_eq!(report.platform_entries, 3);

    let written = fs::read(&report.classpath_file).unwrap();
    let descriptor = ClasspathDescriptor::parse(
        &String::from_utf8(written.clone()).unwrap(),
        &report.classpath_file,
    )
    .unwrap();

    let expected = vec![
        ClasspathEntry::src("src", "**/*.java"),
        ClasspathEntry::output("target/classes"),
        ClasspathEntry::container(config().runtime_container()),
        ClasspathEntry::lib("/m2/a-1.0.jar"),
        ClasspathEntry::lib("/m2/b-1.0.jar"),
        ClasspathEntry::lib(path_str(platform.join("features/feat/lib/feat_1.0.jar"))),
        ClasspathEntry::lib_with_source(
            path_str(platform.join("plugins/org.a_1.0.jar")),
            path_str(platform.join("plugins/org.a.source_1.0.jar")),
        ),
        ClasspathEntry::lib(path_str(platform.join("plugins/org.b_2.0.jar"))),
    ];
    assert_eq!(descriptor.entries, expected);

    // Same tree, same listing: same bytes.
    builder.build_classpath(&root, &platform).unwrap();
    assert_eq!(fs::read(&report.classpath_file).unwrap(), written);
}

#[test]
fn test_build_classpath_missing_platform() {
    let dir = tempdir().unwrap();
    let root = make_project(&dir);
    let builder = builder(config(), "", FakeArchiver::default());

    let err = builder
        .build_classpath(&root, &dir.path().join("no-platform"))
        .unwrap_err();
    assert!(matches!(err, BuildError::NotFound { .. }));
    assert!(!root.join(".classpath").exists());
}

#[test]
fn test_build_classpath_outside_project() {
    let dir = tempdir().unwrap();
    let platform = make_platform(&dir);
    touch(&dir.path().join("loose/Foo.java"), b"");
    let builder = builder(config(), "", FakeArchiver::default());

    let err = builder
        .build_classpath(&dir.path().join("loose/Foo.java"), &platform)
        .unwrap_err();
    assert!(matches!(err, BuildError::ProjectRootNotFound(_)));
}

/// A project whose `.classpath` lists two Maven libraries and one platform
/// library, with compiled classes and an `OSGI-INF` folder.
fn make_buildable_project(dir: &TempDir) -> PathBuf {
    let root = make_project(dir);
    let m2 = dir.path().join("m2");
    touch(&m2.join("b-1.0.jar"), b"bbb");
    touch(&m2.join("a-1.0.jar"), b"aaa");

    let descriptor = ClasspathDescriptor::new(vec![
        ClasspathEntry::src("src", "**/*.java"),
        ClasspathEntry::output("target/classes"),
        ClasspathEntry::container(config().runtime_container()),
        ClasspathEntry::lib(path_str(m2.join("a-1.0.jar"))),
        ClasspathEntry::lib(path_str(m2.join("b-1.0.jar"))),
        ClasspathEntry::lib("/opt/capella_6.0.0/plugins/org.a_1.0.jar"),
    ]);
    descriptor.write(&root.join(".classpath")).unwrap();

    touch(
        &root.join("META-INF/MANIFEST.MF"),
        b"Manifest-Version: 1.0\nBundle-ClassPath: .\nBundle-Name: Demo\n",
    );
    touch(&root.join("plugin.xml"), b"<plugin/>");
    touch(&root.join("target/classes/org/example/Demo.class"), b"\xca\xfe");
    touch(&root.join("OSGI-INF/component.xml"), b"<component/>");
    root
}

#[test]
fn test_package_deploy_clean() {
    let dir = tempdir().unwrap();
    let root = make_buildable_project(&dir);
    let archiver = FakeArchiver::default();
    let builder = builder(config(), "", archiver.clone());

    let report = builder.package(&root).unwrap();

    assert_eq!(report.archive, root.join("target").join(ARTIFACT));
    assert_eq!(
        report.staged_libraries,
        vec!["a-1.0.jar".to_string(), "b-1.0.jar".to_string()]
    );
    assert_eq!(fs::read(root.join("lib/a-1.0.jar")).unwrap(), b"aaa");
    assert_eq!(
        fs::read_to_string(root.join("META-INF/MANIFEST.MF")).unwrap(),
        "Manifest-Version: 1.0\nBundle-ClassPath: .,\n lib/a-1.0.jar,\n lib/b-1.0.jar\nBundle-Name: Demo\n"
    );

    {
        let requests = archiver.requests.borrow();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.working_dir, root);
        assert_eq!(request.content_root, root.join("target/classes"));
        assert_eq!(request.manifest, PathBuf::from("META-INF/MANIFEST.MF"));
        assert_eq!(request.extra_file, PathBuf::from("plugin.xml"));
        assert_eq!(
            request.extra_dirs,
            vec![PathBuf::from("lib"), PathBuf::from("OSGI-INF")]
        );
    }

    let platform = make_platform(&dir);
    let deployed = builder.deploy(&root, &platform).unwrap();
    assert_eq!(deployed, platform.join("dropins").join(ARTIFACT));
    assert_eq!(fs::read(&deployed).unwrap(), b"fake jar");

    let removed = builder.clean(&root).unwrap();
    assert_eq!(removed, vec![report.archive.clone(), root.join("lib")]);
    assert!(!report.archive.exists());
    assert!(!root.join("lib").exists());
    assert!(builder.clean(&root).unwrap().is_empty());
}

#[test]
fn test_package_without_manifest_changes_nothing() {
    let dir = tempdir().unwrap();
    let root = make_buildable_project(&dir);
    fs::remove_file(root.join("META-INF/MANIFEST.MF")).unwrap();
    let archiver = FakeArchiver::default();
    let builder = builder(config(), "", archiver.clone());

    let err = builder.package(&root).unwrap_err();

    assert!(matches!(err, BuildError::NotFound { .. }));
    assert!(!root.join("lib").exists());
    assert!(archiver.requests.borrow().is_empty());
}

#[test]
fn test_package_with_empty_output() {
    let dir = tempdir().unwrap();
    let root = make_buildable_project(&dir);
    fs::remove_dir_all(root.join("target/classes")).unwrap();
    fs::create_dir_all(root.join("target/classes")).unwrap();
    let builder = builder(config(), "", FakeArchiver::default());

    let err = builder.package(&root).unwrap_err();
    assert!(matches!(err, BuildError::EmptyOutput(_)));
}

#[test]
fn test_deploy_requires_dropins_and_archive() {
    let dir = tempdir().unwrap();
    let root = make_buildable_project(&dir);
    let builder = builder(config(), "", FakeArchiver::default());

    let bare_platform = dir.path().join("bare");
    fs::create_dir_all(&bare_platform).unwrap();
    let err = builder.deploy(&root, &bare_platform).unwrap_err();
    assert!(matches!(err, BuildError::NotFound { .. }));

    // Not packaged yet.
    let platform = make_platform(&dir);
    let err = builder.deploy(&root, &platform).unwrap_err();
    assert!(matches!(err, BuildError::NotFound { .. }));
    assert_eq!(
        fs::read(platform.join("dropins").join(ARTIFACT)).unwrap(),
        b"previous build"
    );
}
