//! Flat-file storage backend.
//!
//! Layout under the data directory:
//!
//! ```text
//! submissions.json          JSON array of pending submissions
//! submissions.seq           last issued submission id
//! articles.json             metadata for every published article
//! generated_news/{slug}.html rendered article documents
//! ```
//!
//! Every mutation holds one async mutex and replaces files through a temp
//! file + rename, so readers never observe a half-written file.

mod articles;
mod publication;
mod records;
mod submissions;

use crate::domain::errors::DomainResult;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

pub(crate) use records::{ArticleMetaRecord, SubmissionRecord};

const SUBMISSIONS_FILE: &str = "submissions.json";
const SEQUENCE_FILE: &str = "submissions.seq";
const ARTICLE_INDEX_FILE: &str = "articles.json";
const ARTICLES_DIR: &str = "generated_news";

pub struct FileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub async fn open(root: impl Into<PathBuf>) -> DomainResult<Self> {
        let root = root.into();
        fs::create_dir_all(root.join(ARTICLES_DIR)).await?;
        tracing::debug!(root = %root.display(), "file store ready");
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn submissions_path(&self) -> PathBuf {
        self.root.join(SUBMISSIONS_FILE)
    }

    fn sequence_path(&self) -> PathBuf {
        self.root.join(SEQUENCE_FILE)
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(ARTICLE_INDEX_FILE)
    }

    fn articles_dir(&self) -> PathBuf {
        self.root.join(ARTICLES_DIR)
    }

    fn article_path(&self, slug: &str) -> PathBuf {
        self.articles_dir().join(format!("{slug}.html"))
    }

    async fn load_json<T>(&self, path: &Path) -> DomainResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        match read_optional(path).await? {
            Some(bytes) if !bytes.iter().all(u8::is_ascii_whitespace) => {
                Ok(serde_json::from_slice(&bytes)?)
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn store_json<T>(&self, path: &Path, items: &[T]) -> DomainResult<()>
    where
        T: serde::Serialize,
    {
        let bytes = serde_json::to_vec_pretty(items)?;
        write_atomic(path, &bytes).await?;
        Ok(())
    }
}

/// Read a file, mapping "does not exist" to `None`.
async fn read_optional(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// Replace `path` with `bytes` via a sibling temp file and a rename.
async fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, bytes).await?;
    fs::rename(&tmp, path).await
}

/// Remove a file, treating "already gone" as success.
async fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn open_creates_article_directory() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path().join("data")).await.unwrap();
        assert!(store.articles_dir().is_dir());
    }

    #[tokio::test]
    async fn write_atomic_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("x.json");
        write_atomic(&path, b"[]").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"[]");
        assert!(!tmp.path().join("x.json.tmp").exists());
    }

    #[tokio::test]
    async fn empty_data_file_reads_as_empty_list() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();
        std::fs::write(store.submissions_path(), "\n").unwrap();
        let records: Vec<SubmissionRecord> =
            store.load_json(&store.submissions_path()).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn corrupt_data_file_is_a_storage_error() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::open(tmp.path()).await.unwrap();
        std::fs::write(store.submissions_path(), "{ not json").unwrap();
        let err = store
            .load_json::<SubmissionRecord>(&store.submissions_path())
            .await
            .unwrap_err();
        assert!(matches!(err, crate::domain::errors::DomainError::Storage(_)));
    }
}
