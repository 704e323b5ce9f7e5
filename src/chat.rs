//! Chat assistant and chat session operations

use serde_json::{Value, json};

use crate::client::RagflowClient;
use crate::error::Result;
use crate::types::{
    ChatCompletionRequest, CreateChatRequest, CreateSessionRequest, ListChatsParams,
    ListSessionsParams, UpdateChatRequest, UpdateSessionRequest,
};

impl RagflowClient {
    /// Create a chat assistant.
    pub async fn create_chat(&self, request: CreateChatRequest) -> Result<Value> {
        self.post_json("chats", &request).await
    }

    /// List chat assistants, paginated and optionally filtered.
    pub async fn list_chats(&self, params: ListChatsParams) -> Result<Value> {
        self.get_json("chats", &params).await
    }

    /// Update a chat assistant's configuration. Only the fields set on the
    /// request are changed.
    pub async fn update_chat(&self, chat_id: &str, request: UpdateChatRequest) -> Result<Value> {
        self.put_json(&format!("chats/{chat_id}"), &request).await
    }

    /// Delete chat assistants by ID.
    pub async fn delete_chats(&self, ids: &[String]) -> Result<Value> {
        self.delete_json("chats", &json!({ "ids": ids })).await
    }

    /// Create a session under a chat assistant.
    pub async fn create_session(
        &self,
        chat_id: &str,
        request: CreateSessionRequest,
    ) -> Result<Value> {
        self.post_json(&format!("chats/{chat_id}/sessions"), &request)
            .await
    }

    /// List sessions of a chat assistant, paginated and optionally filtered.
    pub async fn list_sessions(&self, chat_id: &str, params: ListSessionsParams) -> Result<Value> {
        self.get_json(&format!("chats/{chat_id}/sessions"), &params)
            .await
    }

    /// Update a session. Only the fields set on the request are changed.
    pub async fn update_session(
        &self,
        chat_id: &str,
        session_id: &str,
        request: UpdateSessionRequest,
    ) -> Result<Value> {
        self.put_json(&format!("chats/{chat_id}/sessions/{session_id}"), &request)
            .await
    }

    /// Delete sessions of a chat assistant by ID.
    pub async fn delete_sessions(&self, chat_id: &str, ids: &[String]) -> Result<Value> {
        self.delete_json(&format!("chats/{chat_id}/sessions"), &json!({ "ids": ids }))
            .await
    }

    /// Ask a chat assistant a question and return its answer.
    ///
    /// The completion is always requested in non-streaming mode
    /// (`"stream": false`) and returned as a single decoded JSON body; the
    /// answer text lives under `data.answer`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ragflow_client::{ChatCompletionRequest, RagflowClient};
    ///
    /// # async fn example() -> ragflow_client::Result<()> {
    /// # let client = RagflowClient::new("http://localhost:5000", "key")?;
    /// let request = ChatCompletionRequest::new("What can RAGFlow do?").session("sess-1");
    /// let response = client.converse_with_chat("chat-1", request).await?;
    /// println!("{}", response["data"]["answer"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn converse_with_chat(
        &self,
        chat_id: &str,
        request: ChatCompletionRequest,
    ) -> Result<Value> {
        let mut payload = serde_json::to_value(&request)?;
        payload["stream"] = json!(false);
        self.post_json(&format!("chats/{chat_id}/completions"), &payload)
            .await
    }
}
