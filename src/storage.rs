use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `body` under `file_name` and return the stored path.
    async fn put_object(&self, file_name: &str, body: Bytes, content_type: &str)
        -> anyhow::Result<String>;
    /// `Ok(None)` when nothing exists at `path`.
    async fn read_object(&self, path: &str) -> anyhow::Result<Option<Bytes>>;
}

#[derive(Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FileStore for LocalStorage {
    async fn put_object(
        &self,
        file_name: &str,
        body: Bytes,
        content_type: &str,
    ) -> anyhow::Result<String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("create upload dir {}", self.root.display()))?;

        let path = self.root.join(file_name);
        tokio::fs::write(&path, &body)
            .await
            .with_context(|| format!("write upload {}", path.display()))?;

        tracing::debug!(path = %path.display(), content_type, bytes = body.len(), "upload stored");
        Ok(path.to_string_lossy().into_owned())
    }

    async fn read_object(&self, path: &str) -> anyhow::Result<Option<Bytes>> {
        match tokio::fs::read(path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read upload {}", path)),
        }
    }
}
