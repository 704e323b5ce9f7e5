//! Document management: upload, listing, update, download, parsing

use std::path::Path;

use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};
use tokio::io::AsyncWriteExt;

use crate::client::RagflowClient;
use crate::error::{Error, Result};
use crate::types::{ListDocumentsParams, UpdateDocumentRequest};

impl RagflowClient {
    /// Upload files to a dataset.
    ///
    /// Each path becomes one `file` part in the multipart form, named after
    /// the path's final component. File contents are read up front, so every
    /// handle is released before the request goes out.
    pub async fn upload_documents<P: AsRef<Path>>(
        &self,
        dataset_id: &str,
        file_paths: &[P],
    ) -> Result<Value> {
        let mut form = Form::new();
        for path in file_paths {
            let path = path.as_ref();
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| {
                    Error::config(format!("path has no usable file name: {}", path.display()))
                })?
                .to_string();
            let bytes = tokio::fs::read(path).await?;
            form = form.part("file", Part::bytes(bytes).file_name(file_name));
        }
        self.post_multipart(&format!("datasets/{dataset_id}/documents"), form)
            .await
    }

    /// List documents in a dataset, paginated and optionally filtered.
    pub async fn list_documents(
        &self,
        dataset_id: &str,
        params: ListDocumentsParams,
    ) -> Result<Value> {
        self.get_json(&format!("datasets/{dataset_id}/documents"), &params)
            .await
    }

    /// Update a document's configuration. Only the fields set on the request
    /// are changed.
    pub async fn update_document(
        &self,
        dataset_id: &str,
        document_id: &str,
        request: UpdateDocumentRequest,
    ) -> Result<Value> {
        self.put_json(
            &format!("datasets/{dataset_id}/documents/{document_id}"),
            &request,
        )
        .await
    }

    /// Download a document's original file to `output_path`.
    ///
    /// The response body is streamed to disk chunk by chunk, so arbitrarily
    /// large files download in bounded memory.
    pub async fn download_document(
        &self,
        dataset_id: &str,
        document_id: &str,
        output_path: impl AsRef<Path>,
    ) -> Result<()> {
        let response = self
            .get_stream(&format!("datasets/{dataset_id}/documents/{document_id}"))
            .await?;

        let mut file = tokio::fs::File::create(output_path.as_ref()).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;
        Ok(())
    }

    /// Delete documents from a dataset by ID.
    pub async fn delete_documents(&self, dataset_id: &str, ids: &[String]) -> Result<Value> {
        self.delete_json(
            &format!("datasets/{dataset_id}/documents"),
            &json!({ "ids": ids }),
        )
        .await
    }

    /// Start parsing documents into chunks.
    pub async fn parse_documents(&self, dataset_id: &str, document_ids: &[String]) -> Result<Value> {
        self.post_json(
            &format!("datasets/{dataset_id}/chunks"),
            &json!({ "document_ids": document_ids }),
        )
        .await
    }

    /// Stop parsing documents that are still being processed.
    pub async fn stop_parsing_documents(
        &self,
        dataset_id: &str,
        document_ids: &[String],
    ) -> Result<Value> {
        self.delete_json(
            &format!("datasets/{dataset_id}/chunks"),
            &json!({ "document_ids": document_ids }),
        )
        .await
    }
}
