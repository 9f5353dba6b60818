//! Disk storage for uploaded school images.
//!
//! Files land in `<public_dir>/schoolImages` and are served back as static
//! assets under `/schoolImages/`.

use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::domain::types::{ImagePath, TypeConstraintError};

/// Directory (and URL segment) holding uploaded images.
pub const IMAGE_DIR: &str = "schoolImages";

/// Used when the declared name has nothing left after sanitizing.
const FALLBACK_NAME: &str = "image";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create upload directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write image {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read upload {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid stored image path: {0}")]
    InvalidPath(#[from] TypeConstraintError),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persists uploaded image bytes and hands back their public path.
pub trait ImageWriter {
    fn store_image(&self, file_name: &str, contents: &mut dyn Read) -> StorageResult<ImagePath>;
}

/// Writes images below a public directory on the local filesystem.
#[derive(Clone, Debug)]
pub struct DiskImageStorage {
    upload_dir: PathBuf,
}

impl DiskImageStorage {
    pub fn new(public_dir: impl AsRef<Path>) -> Self {
        Self {
            upload_dir: public_dir.as_ref().join(IMAGE_DIR),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }
}

/// Strips any directory part and replaces each whitespace run with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let mut sanitized = String::with_capacity(base.len());
    let mut in_whitespace = false;
    for ch in base.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                sanitized.push('_');
            }
            in_whitespace = true;
        } else {
            sanitized.push(ch);
            in_whitespace = false;
        }
    }

    if sanitized.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        sanitized
    }
}

impl ImageWriter for DiskImageStorage {
    fn store_image(&self, file_name: &str, contents: &mut dyn Read) -> StorageResult<ImagePath> {
        fs::create_dir_all(&self.upload_dir).map_err(|source| StorageError::CreateDir {
            path: self.upload_dir.clone(),
            source,
        })?;

        let sanitized = sanitize_file_name(file_name);
        let mut stamp = Utc::now().timestamp_millis();

        // Same-millisecond uploads of the same name get the next free stamp.
        let (stored_name, path, mut file) = loop {
            let candidate = format!("{stamp}-{sanitized}");
            let path = self.upload_dir.join(&candidate);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => break (candidate, path, file),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => stamp += 1,
                Err(source) => return Err(StorageError::Write { path, source }),
            }
        };

        io::copy(contents, &mut file).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;

        log::info!("Stored school image at {}", path.display());

        Ok(ImagePath::new(format!("/{IMAGE_DIR}/{stored_name}"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_whitespace() {
        assert_eq!(sanitize_file_name("My Photo.png"), "My_Photo.png");
        assert_eq!(sanitize_file_name("a  \t b.jpg"), "a_b.jpg");
        assert_eq!(sanitize_file_name(" lead.png"), "_lead.png");
    }

    #[test]
    fn sanitize_drops_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\pic 1.png"), "pic_1.png");
        assert_eq!(sanitize_file_name("uploads/"), "image");
    }

    #[test]
    fn store_creates_directory_and_prefixes_timestamp() {
        let public = tempfile::tempdir().unwrap();
        let storage = DiskImageStorage::new(public.path().join("nested/public"));

        let path = storage
            .store_image("My Photo.png", &mut &b"png-bytes"[..])
            .unwrap();

        let stored_name = path
            .as_str()
            .strip_prefix("/schoolImages/")
            .expect("public prefix");
        let (stamp, rest) = stored_name.split_once('-').unwrap();
        assert!(!stamp.is_empty() && stamp.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(rest, "My_Photo.png");

        let on_disk = fs::read(storage.upload_dir().join(stored_name)).unwrap();
        assert_eq!(on_disk, b"png-bytes");
    }

    #[test]
    fn store_never_reuses_a_file() {
        let public = tempfile::tempdir().unwrap();
        let storage = DiskImageStorage::new(public.path());

        let first = storage.store_image("logo.png", &mut &b"one"[..]).unwrap();
        let second = storage.store_image("logo.png", &mut &b"two"[..]).unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_dir(storage.upload_dir()).unwrap().count(), 2);
    }

    #[test]
    fn store_fails_when_directory_is_a_file() {
        let public = tempfile::tempdir().unwrap();
        fs::write(public.path().join(IMAGE_DIR), b"not a dir").unwrap();
        let storage = DiskImageStorage::new(public.path());

        let result = storage.store_image("logo.png", &mut &b"x"[..]);

        assert!(matches!(result, Err(StorageError::CreateDir { .. })));
    }
}
