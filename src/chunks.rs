//! Chunk management and cross-dataset retrieval

use serde_json::{Value, json};

use crate::client::RagflowClient;
use crate::error::Result;
use crate::types::{AddChunkRequest, ListChunksParams, RetrievalRequest, UpdateChunkRequest};

impl RagflowClient {
    /// Add a chunk to a parsed document.
    pub async fn add_chunk(
        &self,
        dataset_id: &str,
        document_id: &str,
        request: AddChunkRequest,
    ) -> Result<Value> {
        self.post_json(
            &format!("datasets/{dataset_id}/documents/{document_id}/chunks"),
            &request,
        )
        .await
    }

    /// List chunks of a document, paginated and optionally filtered.
    pub async fn list_chunks(
        &self,
        dataset_id: &str,
        document_id: &str,
        params: ListChunksParams,
    ) -> Result<Value> {
        self.get_json(
            &format!("datasets/{dataset_id}/documents/{document_id}/chunks"),
            &params,
        )
        .await
    }

    /// Update a chunk's content or configuration. Only the fields set on the
    /// request are changed.
    pub async fn update_chunk(
        &self,
        dataset_id: &str,
        document_id: &str,
        chunk_id: &str,
        request: UpdateChunkRequest,
    ) -> Result<Value> {
        self.put_json(
            &format!("datasets/{dataset_id}/documents/{document_id}/chunks/{chunk_id}"),
            &request,
        )
        .await
    }

    /// Delete chunks from a document by ID.
    pub async fn delete_chunks(
        &self,
        dataset_id: &str,
        document_id: &str,
        chunk_ids: &[String],
    ) -> Result<Value> {
        self.delete_json(
            &format!("datasets/{dataset_id}/documents/{document_id}/chunks"),
            &json!({ "chunk_ids": chunk_ids }),
        )
        .await
    }

    /// Retrieve chunks across datasets by similarity to a question.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ragflow_client::{RagflowClient, RetrievalRequest};
    ///
    /// # async fn example() -> ragflow_client::Result<()> {
    /// # let client = RagflowClient::new("http://localhost:5000", "key")?;
    /// let request = RetrievalRequest::new("How do I configure chunking?")
    ///     .datasets(["ds-1", "ds-2"]);
    ///
    /// let response = client.retrieve_chunks(request).await?;
    /// for chunk in response["data"]["chunks"].as_array().into_iter().flatten() {
    ///     println!("{}", chunk["content"]);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn retrieve_chunks(&self, request: RetrievalRequest) -> Result<Value> {
        self.post_json("retrieval", &request).await
    }
}
