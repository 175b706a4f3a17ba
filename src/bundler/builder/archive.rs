//! Release archive creation.
//!
//! Packs the executable, installer script and release notes into a single
//! download: `.tar.gz` for POSIX targets, `.zip` for Windows.

use crate::bundler::{
    error::{Error, Result},
    settings::Settings,
};
use flate2::{Compression, write::GzEncoder};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// Archive container format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArchiveFormat {
    /// gzip-compressed tarball
    TarGz,
    /// zip with deflate
    Zip,
}

impl ArchiveFormat {
    /// File extension without leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ArchiveFormat::TarGz => "tar.gz",
            ArchiveFormat::Zip => "zip",
        }
    }
}

/// Creates `dist/<product>-<os>-<arch>.<ext>` containing `files` at its root.
///
/// An existing archive of the same name is replaced.
pub async fn create_archive(settings: &Settings, files: &[PathBuf]) -> Result<PathBuf> {
    let format = if settings.platform().is_windows() {
        ArchiveFormat::Zip
    } else {
        ArchiveFormat::TarGz
    };
    let archive_path = settings.dist_directory().join(format!(
        "{}-{}.{}",
        settings.product_name(),
        settings.platform(),
        format.extension()
    ));

    let files = files.to_vec();
    let target = archive_path.clone();
    tokio::task::spawn_blocking(move || write_archive(format, &target, &files))
        .await
        .map_err(|e| Error::Archive(format!("archive task panicked: {e}")))??;

    log::info!("Created archive {}", archive_path.display());
    Ok(archive_path)
}

fn entry_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Archive(format!("{} has no file name", path.display())))
}

/// Unix mode recorded for a zip member: executables and scripts get 0755.
fn zip_mode(path: &Path) -> u32 {
    match path.extension().and_then(|e| e.to_str()) {
        Some("exe" | "bat" | "sh") => 0o755,
        _ => 0o644,
    }
}

fn write_archive(format: ArchiveFormat, target: &Path, files: &[PathBuf]) -> Result<()> {
    let file = File::create(target).map_err(|error| Error::Fs {
        context: "creating archive",
        path: target.to_path_buf(),
        error,
    })?;

    match format {
        ArchiveFormat::TarGz => {
            let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
            for path in files {
                builder
                    .append_path_with_name(path, entry_name(path)?)
                    .map_err(|e| Error::Archive(format!("adding {}: {e}", path.display())))?;
            }
            builder
                .into_inner()
                .and_then(|encoder| encoder.finish())
                .map_err(|e| Error::Archive(format!("finishing tarball: {e}")))?;
        }
        ArchiveFormat::Zip => {
            let mut zip = zip::ZipWriter::new(file);
            for path in files {
                let options = zip::write::SimpleFileOptions::default()
                    .compression_method(zip::CompressionMethod::Deflated)
                    .unix_permissions(zip_mode(path));
                let contents = std::fs::read(path).map_err(|error| Error::Fs {
                    context: "reading archive member",
                    path: path.clone(),
                    error,
                })?;
                zip.start_file(entry_name(path)?, options)
                    .map_err(|e| Error::Archive(e.to_string()))?;
                zip.write_all(&contents)?;
            }
            zip.finish().map_err(|e| Error::Archive(e.to_string()))?;
        }
    }
    Ok(())
}
