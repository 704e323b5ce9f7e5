//! Agent listing, agent sessions, and agent completions

use serde_json::{Value, json};

use crate::client::RagflowClient;
use crate::error::Result;
use crate::types::{
    AgentCompletionRequest, AgentSessionRequest, ListAgentSessionsParams, ListAgentsParams,
};

impl RagflowClient {
    /// List agents, paginated and optionally filtered.
    pub async fn list_agents(&self, params: ListAgentsParams) -> Result<Value> {
        self.get_json("agents", &params).await
    }

    /// Open a session with an agent, passing its begin-component parameters.
    pub async fn create_agent_session(
        &self,
        agent_id: &str,
        request: AgentSessionRequest,
    ) -> Result<Value> {
        self.post_json(&format!("agents/{agent_id}/sessions"), &request)
            .await
    }

    /// List sessions of an agent, paginated and optionally filtered.
    pub async fn list_agent_sessions(
        &self,
        agent_id: &str,
        params: ListAgentSessionsParams,
    ) -> Result<Value> {
        self.get_json(&format!("agents/{agent_id}/sessions"), &params)
            .await
    }

    /// Ask an agent a question and return its answer.
    ///
    /// As with chat completions, the request always carries
    /// `"stream": false` and the reply is one decoded JSON body. Extra
    /// agent-specific inputs set on the request ride along at the top level
    /// of the payload.
    pub async fn converse_with_agent(
        &self,
        agent_id: &str,
        request: AgentCompletionRequest,
    ) -> Result<Value> {
        let mut payload = serde_json::to_value(&request)?;
        payload["stream"] = json!(false);
        self.post_json(&format!("agents/{agent_id}/completions"), &payload)
            .await
    }
}
