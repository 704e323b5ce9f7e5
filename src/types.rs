//! Request and parameter types for the RAGFlow API
//!
//! Every operation with optional inputs takes one of these structures. Fields
//! wrapped in `Option` are omitted from the outgoing payload or query string
//! when unset, so the server sees a partial update rather than explicit
//! nulls. `Default` implementations carry the server's documented defaults.

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// DATASETS
// ============================================================================

/// Request body for creating a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDatasetRequest {
    /// Unique dataset name.
    pub name: String,
    /// Base64-encoded avatar image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dataset language.
    pub language: String,
    /// Embedding model used for chunk vectors.
    pub embedding_model: String,
    /// Access permission ("me" or "team").
    pub permission: String,
    /// Chunking method applied when parsing documents.
    pub chunk_method: String,
    /// Parser configuration for the chunk method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_config: Option<Value>,
}

impl CreateDatasetRequest {
    /// Create a request with the given name and server-default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
            description: None,
            language: "English".to_string(),
            embedding_model: "BAAI/bge-zh-v1.5".to_string(),
            permission: "me".to_string(),
            chunk_method: "naive".to_string(),
            parser_config: None,
        }
    }
}

/// Partial update for a dataset. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDatasetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_method: Option<String>,
}

/// Query parameters for listing datasets.
#[derive(Debug, Clone, Serialize)]
pub struct ListDatasetsParams {
    /// Page number, starting at 1.
    pub page: u32,
    /// Results per page.
    pub page_size: u32,
    /// Sort field.
    pub orderby: String,
    /// Sort in descending order.
    pub desc: bool,
    /// Filter by dataset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Filter by dataset ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Default for ListDatasetsParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 30,
            orderby: "create_time".to_string(),
            desc: true,
            name: None,
            id: None,
        }
    }
}

// ============================================================================
// DOCUMENTS
// ============================================================================

/// Partial update for a document. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_config: Option<Value>,
}

/// Query parameters for listing documents in a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct ListDocumentsParams {
    /// Page number, starting at 1.
    pub page: u32,
    /// Results per page.
    pub page_size: u32,
    /// Sort field.
    pub orderby: String,
    /// Sort in descending order.
    pub desc: bool,
    /// Filter by title keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Filter by document ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Filter by document name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for ListDocumentsParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 30,
            orderby: "create_time".to_string(),
            desc: true,
            keywords: None,
            id: None,
            name: None,
        }
    }
}

// ============================================================================
// CHUNKS & RETRIEVAL
// ============================================================================

/// Request body for adding a chunk to a document.
#[derive(Debug, Clone, Serialize)]
pub struct AddChunkRequest {
    /// Chunk text content.
    pub content: String,
    /// Keywords boosting this chunk's retrieval ranking. Always sent, empty
    /// by default.
    pub important_keywords: Vec<String>,
}

impl AddChunkRequest {
    /// Create a request with the given content and no keywords.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            important_keywords: Vec::new(),
        }
    }

    /// Attach retrieval keywords.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.important_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for a chunk. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChunkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Query parameters for listing chunks of a document.
///
/// This endpoint takes no sort parameters; chunks come back in document
/// order.
#[derive(Debug, Clone, Serialize)]
pub struct ListChunksParams {
    /// Page number, starting at 1.
    pub page: u32,
    /// Results per page.
    pub page_size: u32,
    /// Filter by content keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Filter by chunk ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Default for ListChunksParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 1024,
            keywords: None,
            id: None,
        }
    }
}

/// Request body for cross-dataset similarity retrieval.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalRequest {
    /// User query to match chunks against.
    pub question: String,
    /// Datasets to search. Empty means the server decides scope.
    pub dataset_ids: Vec<String>,
    /// Restrict the search to these documents.
    pub document_ids: Vec<String>,
    /// Page number, starting at 1.
    pub page: u32,
    /// Results per page.
    pub page_size: u32,
    /// Minimum similarity for a chunk to qualify.
    pub similarity_threshold: f64,
    /// Weight of vector similarity vs. term similarity.
    pub vector_similarity_weight: f64,
    /// Chunk count entering the vector similarity stage.
    pub top_k: u32,
    /// Rerank model to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank_id: Option<String>,
    /// Enable keyword matching.
    pub keyword: bool,
    /// Highlight matched terms in the results.
    pub highlight: bool,
}

impl RetrievalRequest {
    /// Create a retrieval request with server-default ranking settings.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            dataset_ids: Vec::new(),
            document_ids: Vec::new(),
            page: 1,
            page_size: 30,
            similarity_threshold: 0.2,
            vector_similarity_weight: 0.3,
            top_k: 1024,
            rerank_id: None,
            keyword: false,
            highlight: false,
        }
    }

    /// Search within the given datasets.
    pub fn datasets<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dataset_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the search to the given documents.
    pub fn documents<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

// ============================================================================
// CHAT ASSISTANTS
// ============================================================================

/// Request body for creating a chat assistant.
#[derive(Debug, Clone, Serialize)]
pub struct CreateChatRequest {
    /// Assistant name.
    pub name: String,
    /// Base64-encoded avatar image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Datasets the assistant answers from. Always sent, empty by default.
    pub dataset_ids: Vec<String>,
    /// LLM settings (model name, temperature, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<Value>,
    /// Prompt settings (system prompt, variables, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
}

impl CreateChatRequest {
    /// Create a request with the given name and no bound datasets.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
            dataset_ids: Vec::new(),
            llm: None,
            prompt: None,
        }
    }

    /// Bind the assistant to the given datasets.
    pub fn datasets<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dataset_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for a chat assistant. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
}

/// Query parameters for listing chat assistants.
#[derive(Debug, Clone, Serialize)]
pub struct ListChatsParams {
    /// Page number, starting at 1.
    pub page: u32,
    /// Results per page.
    pub page_size: u32,
    /// Sort field.
    pub orderby: String,
    /// Sort in descending order.
    pub desc: bool,
    /// Filter by assistant name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Filter by assistant ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Default for ListChatsParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 30,
            orderby: "create_time".to_string(),
            desc: true,
            name: None,
            id: None,
        }
    }
}

// ============================================================================
// CHAT SESSIONS
// ============================================================================

/// Request body for creating a session under a chat assistant.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest {
    /// Session name.
    pub name: String,
    /// Caller-defined user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl CreateSessionRequest {
    /// Create a request with the given session name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_id: None,
        }
    }
}

/// Partial update for a session. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Query parameters for listing sessions of a chat assistant.
#[derive(Debug, Clone, Serialize)]
pub struct ListSessionsParams {
    /// Page number, starting at 1.
    pub page: u32,
    /// Results per page.
    pub page_size: u32,
    /// Sort field.
    pub orderby: String,
    /// Sort in descending order.
    pub desc: bool,
    /// Filter by session name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Filter by session ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Filter by caller-defined user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Default for ListSessionsParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 30,
            orderby: "create_time".to_string(),
            desc: true,
            name: None,
            id: None,
            user_id: None,
        }
    }
}

/// Request body for one conversation turn with a chat assistant.
///
/// The client always requests the answer as a single JSON body; there is no
/// incremental streaming mode.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// The question to ask.
    pub question: String,
    /// Session to continue. A new session is created when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Caller-defined user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ChatCompletionRequest {
    /// Create a request for the given question.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            session_id: None,
            user_id: None,
        }
    }

    /// Continue an existing session.
    pub fn session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

// ============================================================================
// AGENTS
// ============================================================================

/// Query parameters for listing agents.
#[derive(Debug, Clone, Serialize)]
pub struct ListAgentsParams {
    /// Page number, starting at 1.
    pub page: u32,
    /// Results per page.
    pub page_size: u32,
    /// Sort field.
    pub orderby: String,
    /// Sort in descending order.
    pub desc: bool,
    /// Filter by agent name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Filter by agent ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Default for ListAgentsParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 30,
            orderby: "create_time".to_string(),
            desc: true,
            name: None,
            id: None,
        }
    }
}

/// Request body for opening a session with an agent.
///
/// Agents define their own begin-component inputs, so the parameters are an
/// open JSON object flattened into the payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentSessionRequest {
    /// Begin-component parameters, flattened into the top-level payload.
    #[serde(flatten)]
    pub params: serde_json::Map<String, Value>,
    /// Caller-defined user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl AgentSessionRequest {
    /// Set a begin-component parameter.
    pub fn param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }
}

/// Query parameters for listing sessions of an agent.
///
/// Agent sessions have no name filter.
#[derive(Debug, Clone, Serialize)]
pub struct ListAgentSessionsParams {
    /// Page number, starting at 1.
    pub page: u32,
    /// Results per page.
    pub page_size: u32,
    /// Sort field.
    pub orderby: String,
    /// Sort in descending order.
    pub desc: bool,
    /// Filter by session ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Filter by caller-defined user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Default for ListAgentSessionsParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 30,
            orderby: "create_time".to_string(),
            desc: true,
            id: None,
            user_id: None,
        }
    }
}

/// Request body for one conversation turn with an agent.
///
/// As with chat completions, the answer comes back as a single JSON body.
/// Extra agent-specific inputs are flattened into the payload.
#[derive(Debug, Clone, Serialize)]
pub struct AgentCompletionRequest {
    /// The question to ask.
    pub question: String,
    /// Session to continue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Caller-defined user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Additional agent inputs, flattened into the top-level payload.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl AgentCompletionRequest {
    /// Create a request for the given question.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            session_id: None,
            user_id: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Continue an existing session.
    pub fn session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set an additional agent input.
    pub fn param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
