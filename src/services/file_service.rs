use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::services::storage_service::DocumentStorage;

const MIB: usize = 1024 * 1024;
const PDF_SIGNATURE: &[u8] = b"%PDF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    Portfolio,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::Portfolio => "portfolio",
        }
    }

    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        &[".pdf"]
    }

    pub fn max_size(&self) -> usize {
        match self {
            DocumentKind::Resume => 10 * MIB,
            DocumentKind::Portfolio => 25 * MIB,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredDocument {
    pub url: String,
    pub file_name: String,
    pub size: usize,
}

/// Checks an upload against its kind's policy: size, then extension, then
/// the PDF signature.
pub fn validate_document(kind: DocumentKind, file_name: &str, bytes: &[u8]) -> Result<()> {
    let max = kind.max_size();
    if bytes.len() > max {
        return Err(Error::Validation(format!(
            "file size {} bytes exceeds maximum {} bytes",
            bytes.len(),
            max
        )));
    }

    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();
    let allowed = kind.allowed_extensions();
    if !allowed.contains(&ext.as_str()) {
        return Err(Error::Validation(format!(
            "file type {} not allowed. Allowed types: {}",
            ext,
            allowed.join(", ")
        )));
    }

    if !bytes.starts_with(PDF_SIGNATURE) {
        return Err(Error::Validation("Invalid PDF file content".to_string()));
    }
    Ok(())
}

#[derive(Clone)]
pub struct FileService {
    storage: Arc<dyn DocumentStorage>,
}

impl FileService {
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self { storage }
    }

    pub async fn upload(
        &self,
        owner_id: Uuid,
        kind: DocumentKind,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<StoredDocument> {
        validate_document(kind, file_name, bytes)?;
        let url = self.storage.save(owner_id, kind, file_name, bytes).await?;
        tracing::info!(%owner_id, kind = kind.as_str(), size = bytes.len(), "document stored");
        Ok(StoredDocument {
            url,
            file_name: file_name.to_string(),
            size: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage_service::MockDocumentStorage;

    #[test]
    fn size_is_checked_before_type() {
        let big = vec![0u8; 10 * MIB + 1];
        let err = validate_document(DocumentKind::Resume, "cv.docx", &big).unwrap_err();
        assert!(
            matches!(err, Error::Validation(ref msg) if msg == "file size 10485761 bytes exceeds maximum 10485760 bytes")
        );
    }

    #[test]
    fn portfolio_allows_larger_files() {
        let mut body = b"%PDF".to_vec();
        body.resize(20 * MIB, 0);
        assert!(validate_document(DocumentKind::Portfolio, "work.pdf", &body).is_ok());
        assert!(validate_document(DocumentKind::Resume, "work.pdf", &body).is_err());
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let err = validate_document(DocumentKind::Resume, "cv.docx", b"%PDF").unwrap_err();
        assert!(
            matches!(err, Error::Validation(ref msg) if msg == "file type .docx not allowed. Allowed types: .pdf")
        );
    }

    #[test]
    fn extension_check_is_case_insensitive_but_content_must_be_pdf() {
        assert!(validate_document(DocumentKind::Resume, "CV.PDF", b"%PDF-1.4").is_ok());
        assert!(validate_document(DocumentKind::Resume, "cv.pdf", b"PK\x03\x04").is_err());
    }

    #[tokio::test]
    async fn invalid_upload_never_reaches_storage() {
        let mut storage = MockDocumentStorage::new();
        storage.expect_save().never();
        let service = FileService::new(Arc::new(storage));
        assert!(service
            .upload(Uuid::new_v4(), DocumentKind::Resume, "cv.txt", b"hello")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn valid_upload_returns_storage_url() {
        let mut storage = MockDocumentStorage::new();
        storage
            .expect_save()
            .withf(|_, kind, name, _| *kind == DocumentKind::Portfolio && name == "work.pdf")
            .returning(|_, _, _, _| Ok("http://files.test/uploads/portfolio/x.pdf".into()));
        let service = FileService::new(Arc::new(storage));

        let stored = service
            .upload(Uuid::new_v4(), DocumentKind::Portfolio, "work.pdf", b"%PDF-1.7")
            .await
            .unwrap();
        assert_eq!(stored.url, "http://files.test/uploads/portfolio/x.pdf");
        assert_eq!(stored.size, 8);
    }
}
