//! Filesystem store for uploaded images.
//!
//! Validates type and size, then persists the file under a
//! collision-resistant name and hands back the public URL. The write goes
//! through a single reliable primitive: stage into a named temp file in the
//! destination directory, then atomically rename into place, so a crashed
//! upload never leaves a half-written file at the public path.
//!
//! Known limitation, kept from the product's history: uploads are never
//! garbage-collected when the products or orders referencing them are
//! deleted, so the directory grows without bound.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Maximum accepted file size: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// URL prefix the upload directory is served under.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Accepted content types and the extension used when the original filename
/// doesn't carry a usable one.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/svg+xml", "svg"),
];

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "svg"];

/// Errors from validating or persisting an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The multipart request had no file field.
    #[error("no file field in request")]
    MissingFile,

    /// The declared content type is not an accepted image type.
    #[error("unsupported file type {0:?}: expected a JPEG, PNG, or SVG image")]
    UnsupportedType(String),

    /// The file exceeds the size limit.
    #[error("file is {size} bytes; the limit is {limit} bytes (5 MiB)")]
    TooLarge { size: usize, limit: usize },

    /// The file could not be written.
    #[error("could not store upload at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Store for uploaded images on the local filesystem.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Validate and persist one uploaded file, returning its public URL.
    ///
    /// Validation happens before anything touches the filesystem: a rejected
    /// upload performs no write at all.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::UnsupportedType`] or [`UploadError::TooLarge`]
    /// on validation failure, and [`UploadError::Io`] (with the attempted
    /// path) if the file cannot be written.
    pub async fn store(
        &self,
        original_name: Option<&str>,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String, UploadError> {
        let fallback_ext = validate_content_type(content_type)?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                size: data.len(),
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let filename = unique_filename(original_name, fallback_ext);
        let dest = self.dir.join(&filename);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(&self.dir, e))?;

        let dir = self.dir.clone();
        let write_dest = dest.clone();
        let result = tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut staged = tempfile::NamedTempFile::new_in(&dir)?;
            staged.write_all(&data)?;
            staged.persist(&write_dest).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| io_error(&dest, std::io::Error::other(e)))?;
        result.map_err(|e| io_error(&dest, e))?;

        Ok(format!("{PUBLIC_PREFIX}/{filename}"))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> UploadError {
    UploadError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Check the declared content type, returning the extension to use when the
/// original filename doesn't provide one.
fn validate_content_type(content_type: &str) -> Result<&'static str, UploadError> {
    ALLOWED_TYPES
        .iter()
        .find(|(ty, _)| *ty == content_type)
        .map(|(_, ext)| *ext)
        .ok_or_else(|| UploadError::UnsupportedType(content_type.to_owned()))
}

/// A collision-resistant filename, preserving the original extension when it
/// is one we accept.
fn unique_filename(original_name: Option<&str>, fallback_ext: &str) -> String {
    let ext = original_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or_else(|| fallback_ext.to_owned());

    format!("{}.{ext}", Uuid::new_v4().simple())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn accepts_the_three_image_types() {
        assert_eq!(validate_content_type("image/jpeg").unwrap(), "jpg");
        assert_eq!(validate_content_type("image/png").unwrap(), "png");
        assert_eq!(validate_content_type("image/svg+xml").unwrap(), "svg");
    }

    #[test]
    fn rejects_other_content_types() {
        for ty in ["image/gif", "application/pdf", "text/html", ""] {
            assert!(matches!(
                validate_content_type(ty),
                Err(UploadError::UnsupportedType(_))
            ));
        }
    }

    #[test]
    fn filenames_preserve_recognized_extensions() {
        let name = unique_filename(Some("logo.PNG"), "jpg");
        assert!(name.ends_with(".png"), "{name}");
    }

    #[test]
    fn filenames_fall_back_to_content_type_extension() {
        let name = unique_filename(Some("no-extension"), "svg");
        assert!(name.ends_with(".svg"), "{name}");
        let name = unique_filename(None, "jpg");
        assert!(name.ends_with(".jpg"), "{name}");
    }

    #[test]
    fn generated_names_are_unique_over_many_trials() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(unique_filename(Some("art.png"), "png")));
        }
    }

    #[tokio::test]
    async fn stores_a_valid_file_and_returns_public_url() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path().join("uploads"));

        let url = store
            .store(Some("sticker.png"), "image/png", vec![0x89, 0x50, 0x4e])
            .await
            .unwrap();

        assert!(url.starts_with("/uploads/"), "{url}");
        let filename = url.rsplit('/').next().unwrap();
        let on_disk = tmp.path().join("uploads").join(filename);
        assert_eq!(std::fs::read(on_disk).unwrap(), vec![0x89, 0x50, 0x4e]);
    }

    #[tokio::test]
    async fn rejected_uploads_write_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("uploads");
        let store = UploadStore::new(&dir);

        let oversized = vec![0u8; MAX_UPLOAD_BYTES + 1];
        assert!(matches!(
            store.store(Some("big.png"), "image/png", oversized).await,
            Err(UploadError::TooLarge { .. })
        ));
        assert!(matches!(
            store.store(Some("a.gif"), "image/gif", vec![1, 2, 3]).await,
            Err(UploadError::UnsupportedType(_))
        ));

        // The directory was never even created.
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn io_failures_name_the_attempted_path() {
        let tmp = tempfile::tempdir().unwrap();
        // A file where the upload directory should be forces the failure.
        let blocked = tmp.path().join("not-a-directory");
        std::fs::write(&blocked, b"file").unwrap();
        let store = UploadStore::new(&blocked);

        let err = store
            .store(Some("a.png"), "image/png", vec![1])
            .await
            .unwrap_err();
        match err {
            UploadError::Io { path, .. } => assert!(path.contains("not-a-directory"), "{path}"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
