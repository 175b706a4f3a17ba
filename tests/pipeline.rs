//! Library-level pipeline runs with a stub packager.
#![cfg(unix)]

use base_converter_release::bundler::{
    Arch, InstallerKind, Os, PackagerCommand, PipelineOptions, PlatformTag, ReleaseConfig,
    ReleasePipeline, Settings, SettingsBuilder, SmokeOutcome,
};
use std::path::Path;

const BUILD: &str = r#"mkdir -p dist
printf '#!/bin/sh\necho "Binary Octal Decimal Hexadecimal"\n' > dist/base-converter
chmod +x dist/base-converter"#;

fn settings(dir: &Path, tag: PlatformTag) -> Settings {
    SettingsBuilder::new()
        .project_directory(dir)
        .platform(tag)
        .build()
        .unwrap()
}

fn options(clean: bool) -> PipelineOptions {
    PipelineOptions {
        packager: Some(PackagerCommand::new("sh", ["-c", BUILD])),
        clean,
        ..Default::default()
    }
}

fn dist_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.join("dist"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn installers(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter(|e| {
            let name = e.as_ref().unwrap().file_name();
            name.to_string_lossy().starts_with("install-")
        })
        .count()
}

#[tokio::test]
async fn rerun_leaves_one_artifact_and_one_installer() {
    let dir = tempfile::tempdir().unwrap();
    let tag = PlatformTag::new(Os::Linux, Arch::Arm64);

    for _ in 0..2 {
        ReleasePipeline::new(settings(dir.path(), tag.clone()), options(true))
            .run()
            .await
            .unwrap();
    }

    assert_eq!(dist_entries(dir.path()), vec!["base-converter-linux-arm64"]);
    assert_eq!(installers(dir.path()), 1);
}

#[tokio::test]
async fn rerun_without_clean_replaces_the_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let tag = PlatformTag::new(Os::Linux, Arch::Amd64);

    for _ in 0..2 {
        ReleasePipeline::new(settings(dir.path(), tag.clone()), options(false))
            .run()
            .await
            .unwrap();
    }

    assert_eq!(dist_entries(dir.path()), vec!["base-converter-linux-amd64"]);
    assert_eq!(installers(dir.path()), 1);
}

#[tokio::test]
async fn darwin_tag_gets_the_macos_installer() {
    let dir = tempfile::tempdir().unwrap();
    let tag = PlatformTag::from_raw("Darwin", "arm64");

    let report = ReleasePipeline::new(settings(dir.path(), tag), options(true))
        .run()
        .await
        .unwrap();

    assert_eq!(
        report.installer,
        dir.path().join(InstallerKind::MacOs.file_name())
    );
    let script = std::fs::read_to_string(&report.installer).unwrap();
    assert!(script.contains("base-converter-darwin-*"));
    assert_eq!(report.smoke_test, SmokeOutcome::Passed);
}

#[tokio::test]
async fn config_overrides_flow_into_release_notes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("release.toml"),
        "[package]\nversion = \"2.1\"\n",
    )
    .unwrap();
    let config = ReleaseConfig::discover(None, dir.path()).await.unwrap();
    let settings = SettingsBuilder::new()
        .project_directory(dir.path())
        .config(config)
        .platform(PlatformTag::new(Os::Linux, Arch::Amd64))
        .build()
        .unwrap();

    let report = ReleasePipeline::new(settings, options(true))
        .run()
        .await
        .unwrap();

    let notes = std::fs::read_to_string(report.release_notes).unwrap();
    assert!(notes.starts_with("Base Converter v2.1"));
    assert!(notes.contains("Platform: linux-amd64"));
}
