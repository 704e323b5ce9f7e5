//! Chat assistant, session, and completion tests

use ragflow_client::{
    ChatCompletionRequest, CreateChatRequest, CreateSessionRequest, ListSessionsParams,
    RagflowClient, UpdateChatRequest, UpdateSessionRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> RagflowClient {
    RagflowClient::new(server.uri(), "test-key").unwrap()
}

#[tokio::test]
async fn create_chat_binds_datasets_and_omits_unset_settings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chats"))
        .and(body_json(json!({
            "name": "example_chat",
            "dataset_ids": ["ds-1"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"id": "chat-1", "name": "example_chat"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .create_chat(CreateChatRequest::new("example_chat").datasets(["ds-1"]))
        .await
        .unwrap();
    assert_eq!(response["data"]["id"], "chat-1");
}

#[tokio::test]
async fn update_chat_sends_partial_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/chats/chat-1"))
        .and(body_json(json!({"llm": {"model_name": "deepseek-chat"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = UpdateChatRequest {
        llm: Some(json!({"model_name": "deepseek-chat"})),
        ..Default::default()
    };
    client.update_chat("chat-1", request).await.unwrap();
}

#[tokio::test]
async fn delete_chats_sends_ids_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/chats"))
        .and(body_json(json!({"ids": ["chat-1"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.delete_chats(&["chat-1".to_string()]).await.unwrap();
}

#[tokio::test]
async fn session_crud_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chats/chat-1/sessions"))
        .and(body_json(json!({"name": "example_session"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"id": "sess-1", "name": "example_session"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/chats/chat-1/sessions"))
        .and(query_param("user_id", "u-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/chats/chat-1/sessions/sess-1"))
        .and(body_json(json!({"name": "renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/chats/chat-1/sessions"))
        .and(body_json(json!({"ids": ["sess-1"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let session = client
        .create_session("chat-1", CreateSessionRequest::new("example_session"))
        .await
        .unwrap();
    let session_id = session["data"]["id"].as_str().unwrap().to_string();

    client
        .list_sessions(
            "chat-1",
            ListSessionsParams {
                user_id: Some("u-7".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    client
        .update_session(
            "chat-1",
            &session_id,
            UpdateSessionRequest {
                name: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    client.delete_sessions("chat-1", &[session_id]).await.unwrap();
}

#[tokio::test]
async fn chat_completion_requests_single_json_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chats/chat-1/completions"))
        .and(body_json(json!({
            "question": "What can RAGFlow do?",
            "session_id": "sess-1",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"answer": "Document retrieval and chat.", "session_id": "sess-1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = ChatCompletionRequest::new("What can RAGFlow do?").session("sess-1");
    let response = client.converse_with_chat("chat-1", request).await.unwrap();

    assert_eq!(response["data"]["answer"], "Document retrieval and chat.");
}

#[tokio::test]
async fn chat_completion_omits_unset_session_and_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chats/chat-1/completions"))
        .and(body_json(json!({"question": "hello", "stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .converse_with_chat("chat-1", ChatCompletionRequest::new("hello"))
        .await
        .unwrap();
}
