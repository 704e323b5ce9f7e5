//! Cross-dataset retrieval demo
//!
//! Runs a similarity search over one or more datasets and prints the
//! matching chunks with their scores.
//!
//! ```text
//! RAGFLOW_API_KEY=... cargo run --example retrieval_search -- <dataset_id> "<question>"
//! ```

use ragflow_client::{RagflowClient, RetrievalRequest, get_api_key, get_base_url};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let dataset_id = args.next().ok_or("usage: retrieval_search <dataset_id> <question>")?;
    let question = args.next().ok_or("usage: retrieval_search <dataset_id> <question>")?;

    let api_key = get_api_key().ok_or("RAGFLOW_API_KEY is not set")?;
    let client = RagflowClient::new(get_base_url(None), api_key)?;

    let mut request = RetrievalRequest::new(&question).datasets([dataset_id]);
    request.highlight = true;

    let response = client.retrieve_chunks(request).await?;

    let chunks = response["data"]["chunks"].as_array().cloned().unwrap_or_default();
    println!("{} matching chunks:", chunks.len());
    for chunk in chunks {
        println!(
            "  [{:.3}] {}",
            chunk["similarity"].as_f64().unwrap_or(0.0),
            chunk["content"].as_str().unwrap_or("")
        );
    }

    Ok(())
}
