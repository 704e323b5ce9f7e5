//! # RAGFlow Client
//!
//! A Rust client for the [RAGFlow](https://ragflow.io) REST API.
//!
//! ## Overview
//!
//! RAGFlow is a retrieval-augmented generation platform. This crate wraps its
//! HTTP/JSON API: datasets, documents, chunks, similarity retrieval, chat
//! assistants, sessions, and agents. Every public method performs exactly one
//! authenticated request and returns the decoded JSON body unmodified, so the
//! crate stays a thin, stateless transport layer — entity shapes are owned by
//! the server and passed through as [`serde_json::Value`].
//!
//! ## Key Characteristics
//!
//! - **One method per endpoint**: dataset/document/chunk/chat/session/agent
//!   operations map 1:1 onto the `/api/v1/` REST surface
//! - **Opaque payloads**: responses come back as raw JSON values, never
//!   reshaped or cached
//! - **Uniform errors**: any non-success status becomes
//!   [`Error::Api`](crate::Error::Api) carrying the status code and the raw
//!   body text
//! - **Partial updates**: optional request fields left unset are omitted from
//!   the wire entirely
//! - **Streaming downloads**: document downloads are written to disk chunk by
//!   chunk in bounded memory
//! - **No hidden policy**: no retries, no timeouts, no response caching —
//!   callers own those decisions
//!
//! ## Getting Started
//!
//! ```rust,no_run
//! use ragflow_client::{CreateDatasetRequest, ListDatasetsParams, RagflowClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RagflowClient::new("http://localhost:5000", "ragflow-abc123")?;
//!
//!     // Create a dataset
//!     let created = client
//!         .create_dataset(CreateDatasetRequest::new("example_dataset"))
//!         .await?;
//!     let dataset_id = created["data"]["id"].as_str().unwrap().to_string();
//!
//!     // Upload and parse documents
//!     client
//!         .upload_documents(&dataset_id, &["notes/chapter1.txt", "notes/chapter2.pdf"])
//!         .await?;
//!
//!     // List datasets filtered by ID
//!     let params = ListDatasetsParams {
//!         id: Some(dataset_id.clone()),
//!         ..Default::default()
//!     };
//!     let listed = client.list_datasets(params).await?;
//!     println!("{listed}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Conversing with a chat assistant
//!
//! ```rust,no_run
//! use ragflow_client::{ChatCompletionRequest, CreateChatRequest, RagflowClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RagflowClient::new("http://localhost:5000", "ragflow-abc123")?;
//!
//! let chat = client
//!     .create_chat(CreateChatRequest::new("docs_helper").datasets(["ds-1"]))
//!     .await?;
//! let chat_id = chat["data"]["id"].as_str().unwrap();
//!
//! let reply = client
//!     .converse_with_chat(chat_id, ChatCompletionRequest::new("What is a chunk?"))
//!     .await?;
//! println!("{}", reply["data"]["answer"]);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

/// Core client: connection configuration, URL building, and the shared
/// request/decode path every operation funnels through.
mod client;

/// Environment-variable helpers for endpoint and API key resolution.
mod config;

/// Error types and conversions. Defines the `Error` enum and the
/// `Result<T>` alias used across all public APIs.
mod error;

/// Request and parameter structures, one per operation with optional inputs.
mod types;

// Resource operations, one module per API surface. Each extends
// `RagflowClient` with its endpoint methods.
mod agents;
mod chat;
mod chunks;
mod datasets;
mod documents;

// ============================================================================
// PUBLIC EXPORTS
// ============================================================================

// --- Core Client API ---

pub use client::{ClientBuilder, RagflowClient};

// --- Configuration ---

pub use config::{DEFAULT_BASE_URL, get_api_key, get_base_url};

// --- Error Handling ---

pub use error::{Error, Result};

// --- Request Types ---

pub use types::{
    AddChunkRequest, AgentCompletionRequest, AgentSessionRequest, ChatCompletionRequest,
    CreateChatRequest, CreateDatasetRequest, CreateSessionRequest, ListAgentSessionsParams,
    ListAgentsParams, ListChatsParams, ListChunksParams, ListDatasetsParams, ListDocumentsParams,
    ListSessionsParams, RetrievalRequest, UpdateChatRequest, UpdateChunkRequest,
    UpdateDatasetRequest, UpdateDocumentRequest, UpdateSessionRequest,
};

// ============================================================================
// CONVENIENCE PRELUDE
// ============================================================================

/// Convenience module containing the most commonly used types.
/// Import with `use ragflow_client::prelude::*;` for typical usage.
pub mod prelude {
    pub use crate::{
        AddChunkRequest, AgentCompletionRequest, ChatCompletionRequest, CreateChatRequest,
        CreateDatasetRequest, CreateSessionRequest, Error, RagflowClient, Result,
        RetrievalRequest,
    };
}
