//! Artifact checksum calculation.
//!
//! SHA-256 of the renamed executable, published next to it as a
//! `<artifact>.sha256` file in `sha256sum` format.

use crate::bundler::{
    Result,
    error::{Context, ErrorExt},
    utils::fs::{LineEnding, write_text},
};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Calculates the SHA-256 checksum of a file.
///
/// Reads the file in 8KB chunks and returns the lowercase hex digest
/// (64 characters).
pub async fn calculate_sha256(file_path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Writes `<artifact>.sha256` containing `<digest>  <file name>`.
pub async fn write_checksum(artifact: &Path) -> Result<PathBuf> {
    let digest = calculate_sha256(artifact).await?;
    let file_name = artifact
        .file_name()
        .context("artifact path has no file name")?
        .to_string_lossy()
        .into_owned();

    let checksum_path = artifact.with_file_name(format!("{file_name}.sha256"));
    write_text(
        &checksum_path,
        &format!("{digest}  {file_name}\n"),
        LineEnding::Lf,
    )
    .await?;

    log::info!("SHA256 {}: {}", file_name, digest);
    Ok(checksum_path)
}
