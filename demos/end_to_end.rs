//! End-to-end walkthrough
//!
//! Creates a dataset, uploads and parses documents, adds and lists chunks,
//! then converses with a chat assistant bound to the dataset, and finally
//! cleans everything up.
//!
//! Run with a live RAGFlow server:
//!
//! ```text
//! RAGFLOW_BASE_URL=http://localhost:5000 RAGFLOW_API_KEY=... \
//!     cargo run --example end_to_end
//! ```

use ragflow_client::{
    AddChunkRequest, ChatCompletionRequest, CreateChatRequest, CreateDatasetRequest,
    CreateSessionRequest, RagflowClient, get_api_key, get_base_url,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = get_base_url(None);
    let api_key = get_api_key().ok_or("RAGFLOW_API_KEY is not set")?;
    let client = RagflowClient::new(base_url, api_key)?;

    // Create a dataset
    println!("Creating dataset...");
    let mut request = CreateDatasetRequest::new("example_dataset");
    request.description = Some("Example dataset".to_string());
    let dataset = client.create_dataset(request).await?;
    let dataset_id = dataset["data"]["id"]
        .as_str()
        .ok_or("dataset response missing data.id")?
        .to_string();
    println!("Dataset created: {dataset_id}");

    // Upload documents
    println!("Uploading documents...");
    let files = ["test_files/test1.txt", "test_files/test2.pdf"];
    let uploaded = client.upload_documents(&dataset_id, &files).await?;
    let document_ids: Vec<String> = uploaded["data"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|doc| doc["id"].as_str().map(String::from))
        .collect();
    println!("Documents uploaded: {document_ids:?}");

    // Parse them into chunks
    println!("Parsing documents...");
    client.parse_documents(&dataset_id, &document_ids).await?;
    println!("Parsing started");

    // Add a manual chunk
    println!("Adding a chunk...");
    let chunk_request = AddChunkRequest::new("This is a test chunk").keywords(["test", "example"]);
    let chunk = client
        .add_chunk(&dataset_id, &document_ids[0], chunk_request)
        .await?;
    println!("Chunk added: {}", chunk["data"]["chunk"]["id"]);

    // List chunks
    println!("Listing chunks...");
    let chunks = client
        .list_chunks(&dataset_id, &document_ids[0], Default::default())
        .await?;
    println!("Chunks: {}", chunks["data"]["chunks"]);

    // Create a chat assistant over the dataset
    println!("Creating chat assistant...");
    let chat = client
        .create_chat(CreateChatRequest::new("example_chat").datasets([dataset_id.clone()]))
        .await?;
    let chat_id = chat["data"]["id"]
        .as_str()
        .ok_or("chat response missing data.id")?
        .to_string();
    println!("Chat assistant created: {chat_id}");

    // Open a session and converse
    println!("Conversing...");
    let session = client
        .create_session(&chat_id, CreateSessionRequest::new("example_session"))
        .await?;
    let session_id = session["data"]["id"]
        .as_str()
        .ok_or("session response missing data.id")?
        .to_string();
    let reply = client
        .converse_with_chat(
            &chat_id,
            ChatCompletionRequest::new("What are RAGFlow's strengths?").session(&session_id),
        )
        .await?;
    println!("Answer: {}", reply["data"]["answer"]);

    // Clean up
    println!("Cleaning up...");
    client.delete_sessions(&chat_id, &[session_id]).await?;
    client.delete_chats(&[chat_id]).await?;
    client.delete_documents(&dataset_id, &document_ids).await?;
    client.delete_datasets(&[dataset_id]).await?;
    println!("Done");

    Ok(())
}
