//! Cache directory handling for uploaded photos.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{AppError, AppResult};

/// Upper bound (inclusive) of the random part of a stored filename.
pub const RANDOM_SUFFIX_MAX: u64 = 1_000_000_000;

/// Creates the cache directory and any missing parents. Safe to call on every start.
pub async fn ensure_cache_dir(path: &Path) -> anyhow::Result<()> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("cache path {} exists but is not a directory", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("Creating cache directory {}", path.display());
            fs::create_dir_all(path).await?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Builds `<field>-<timestamp_ms>-<random><.ext>`.
pub fn stored_file_name(field: &str, original: &str, timestamp_ms: i64, random: u64) -> String {
    let ext = Path::new(original)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{}-{}-{}{}", field, timestamp_ms, random, ext)
}

fn random_suffix() -> u64 {
    let bits = uuid::Uuid::new_v4().as_u128();
    (bits % u128::from(RANDOM_SUFFIX_MAX + 1)) as u64
}

/// Writes uploaded files into the cache directory and reads them back.
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    dir: PathBuf,
}

impl PhotoStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores `bytes` under a generated name and returns that name.
    pub async fn save(&self, field: &str, original_filename: &str, bytes: &[u8]) -> AppResult<String> {
        let name = stored_file_name(field, original_filename, chrono::Utc::now().timestamp_millis(), random_suffix());
        fs::write(self.dir.join(&name), bytes).await?;
        tracing::info!(file = %name, size = bytes.len(), "Stored upload");
        Ok(name)
    }

    /// Full path of a stored file. Names containing path separators are rejected.
    pub fn path_for(&self, filename: &str) -> AppResult<PathBuf> {
        let candidate = Path::new(filename);
        if filename.is_empty() || candidate.file_name().map(|n| n != candidate.as_os_str()).unwrap_or(true) {
            return Err(AppError::BadRequest(format!("invalid stored file name: {}", filename)));
        }
        Ok(self.dir.join(candidate))
    }

    /// Opens a stored file for streaming. A missing file is a lookup miss.
    pub async fn open(&self, filename: &str) -> AppResult<fs::File> {
        let path = self.path_for(filename)?;
        match fs::File::open(&path).await {
            Ok(file) => Ok(file),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(file = %filename, "Photo referenced by an item is missing from the cache directory");
                Err(AppError::NotFound(format!("photo file {}", filename)))
            }
            Err(e) => Err(e.into()),
        }
    }
}
