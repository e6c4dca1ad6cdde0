use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::services::file_service::DocumentKind;

/// Persists uploaded documents and hands back a publicly reachable URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    async fn save(
        &self,
        owner_id: Uuid,
        kind: DocumentKind,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String>;
}

/// Writes documents below `root/<kind>/`, served by the HTTP layer at `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalDiskStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn file_name(owner_id: Uuid, kind: DocumentKind, original_name: &str) -> String {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default();
        format!(
            "user_{}_{}_{}{}",
            owner_id,
            kind.as_str(),
            Utc::now().timestamp(),
            ext
        )
    }
}

#[async_trait]
impl DocumentStorage for LocalDiskStorage {
    async fn save(
        &self,
        owner_id: Uuid,
        kind: DocumentKind,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String> {
        let dir = self.root.join(kind.as_str());
        fs::create_dir_all(&dir).await?;

        let file_name = Self::file_name(owner_id, kind, original_name);
        fs::write(dir.join(&file_name), bytes).await.map_err(|e| {
            tracing::error!("Failed to write {} file: {}", kind.as_str(), e);
            Error::Internal(format!("Failed to save file: {}", e))
        })?;

        Ok(format!(
            "{}/uploads/{}/{}",
            self.public_base_url,
            kind.as_str(),
            file_name
        ))
    }
}
