//! Document endpoint tests: upload, listing, download, parse control

use ragflow_client::{ListDocumentsParams, RagflowClient, UpdateDocumentRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> RagflowClient {
    RagflowClient::new(server.uri(), "test-key").unwrap()
}

#[tokio::test]
async fn upload_documents_sends_one_part_per_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/datasets/ds-1/documents"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": [{"id": "doc-1"}, {"id": "doc-2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("test1.txt");
    let second = dir.path().join("test2.pdf");
    std::fs::write(&first, b"first file body").unwrap();
    std::fs::write(&second, b"%PDF-1.4 stub").unwrap();

    let client = client_for(&server).await;
    let response = client
        .upload_documents("ds-1", &[&first, &second])
        .await
        .unwrap();
    assert_eq!(response["data"].as_array().unwrap().len(), 2);

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];

    let content_type = request
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert_eq!(body.matches(r#"name="file""#).count(), 2);
    assert!(body.contains(r#"filename="test1.txt""#));
    assert!(body.contains(r#"filename="test2.pdf""#));
    assert!(body.contains("first file body"));
}

#[tokio::test]
async fn upload_documents_fails_cleanly_on_missing_file() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let err = client
        .upload_documents("ds-1", &["/nonexistent/file.txt"])
        .await
        .unwrap_err();
    assert!(matches!(err, ragflow_client::Error::Io(_)));

    // Nothing was sent.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_documents_sends_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/datasets/ds-1/documents"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "10"))
        .and(query_param("keywords", "chapter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let params = ListDocumentsParams {
        page: 2,
        page_size: 10,
        keywords: Some("chapter".to_string()),
        ..Default::default()
    };
    client.list_documents("ds-1", params).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("id="));
    assert!(!query.contains("name="));
}

#[tokio::test]
async fn update_document_sends_partial_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/datasets/ds-1/documents/doc-7"))
        .and(body_json(json!({"chunk_method": "manual"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = UpdateDocumentRequest {
        chunk_method: Some("manual".to_string()),
        ..Default::default()
    };
    client.update_document("ds-1", "doc-7", request).await.unwrap();
}

#[tokio::test]
async fn download_document_writes_exact_bytes() {
    let server = MockServer::start().await;
    // Binary payload larger than a single network read.
    let payload: Vec<u8> = (0..64 * 1024u32).map(|i| (i % 251) as u8).collect();

    Mock::given(method("GET"))
        .and(path("/api/v1/datasets/ds-1/documents/doc-7"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("downloaded.bin");

    let client = client_for(&server).await;
    client
        .download_document("ds-1", "doc-7", &dest)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), payload);
}

#[tokio::test]
async fn download_document_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/datasets/ds-1/documents/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("document not found"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("never-written.bin");

    let client = client_for(&server).await;
    let err = client
        .download_document("ds-1", "missing", &dest)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("document not found"));
    assert!(!dest.exists());
}

#[tokio::test]
async fn delete_documents_sends_ids_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/datasets/ds-1/documents"))
        .and(body_json(json!({"ids": ["doc-1", "doc-2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .delete_documents("ds-1", &["doc-1".to_string(), "doc-2".to_string()])
        .await
        .unwrap();
}

#[tokio::test]
async fn parse_and_stop_parsing_target_the_chunks_endpoint() {
    let server = MockServer::start().await;
    let ids = vec!["doc-1".to_string(), "doc-2".to_string()];

    Mock::given(method("POST"))
        .and(path("/api/v1/datasets/ds-1/chunks"))
        .and(body_json(json!({"document_ids": ["doc-1", "doc-2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/datasets/ds-1/chunks"))
        .and(body_json(json!({"document_ids": ["doc-1", "doc-2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.parse_documents("ds-1", &ids).await.unwrap();
    client.stop_parsing_documents("ds-1", &ids).await.unwrap();
}
