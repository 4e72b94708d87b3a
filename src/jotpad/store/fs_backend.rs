use super::backend::StorageBackend;
use crate::error::{JotpadError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-per-key storage under a single data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file holding `key`.
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)
                .map_err(|e| write_error(&self.root, e))?;
        }
        Ok(())
    }
}

/// Maps a storage key to a safe file stem.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn write_error(path: &Path, err: std::io::Error) -> JotpadError {
    JotpadError::StorageWrite(format!("{}: {}", path.display(), err))
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JotpadError::StorageRead(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.item_path(key);

        // Atomic write
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", sanitize_key(key), Uuid::new_v4()));
        fs::write(&tmp, value).map_err(|e| write_error(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(write_error(&target, e));
        }
        Ok(())
    }
}
