//! Dataset management operations

use serde_json::{Value, json};

use crate::client::RagflowClient;
use crate::error::Result;
use crate::types::{CreateDatasetRequest, ListDatasetsParams, UpdateDatasetRequest};

impl RagflowClient {
    /// Create a dataset.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ragflow_client::{CreateDatasetRequest, RagflowClient};
    ///
    /// # async fn example() -> ragflow_client::Result<()> {
    /// # let client = RagflowClient::new("http://localhost:5000", "key")?;
    /// let mut request = CreateDatasetRequest::new("example_dataset");
    /// request.description = Some("Demo dataset".to_string());
    ///
    /// let response = client.create_dataset(request).await?;
    /// let dataset_id = response["data"]["id"].as_str().unwrap().to_string();
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_dataset(&self, request: CreateDatasetRequest) -> Result<Value> {
        self.post_json("datasets", &request).await
    }

    /// List datasets, paginated and optionally filtered by name or ID.
    pub async fn list_datasets(&self, params: ListDatasetsParams) -> Result<Value> {
        self.get_json("datasets", &params).await
    }

    /// Update a dataset's configuration. Only the fields set on the request
    /// are changed.
    pub async fn update_dataset(
        &self,
        dataset_id: &str,
        request: UpdateDatasetRequest,
    ) -> Result<Value> {
        self.put_json(&format!("datasets/{dataset_id}"), &request)
            .await
    }

    /// Delete datasets by ID.
    pub async fn delete_datasets(&self, ids: &[String]) -> Result<Value> {
        self.delete_json("datasets", &json!({ "ids": ids })).await
    }
}
