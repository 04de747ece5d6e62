//! MCP server binary entry point.

use std::sync::Arc;

use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

use audiense_mcp::api::ApiClient;
use audiense_mcp::auth::TokenManager;
use audiense_mcp::config::{ApiConfig, AuthConfig};
use audiense_mcp::server::AudienseServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the MCP transport; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let auth = Arc::new(TokenManager::new(AuthConfig::from_env()));
    let api = Arc::new(ApiClient::new(ApiConfig::from_env(), auth.clone()));

    let service = AudienseServer::new(api, auth).serve(stdio()).await?;
    tracing::info!("Audiense LinkedIn MCP server running on stdio");
    service.waiting().await?;
    Ok(())
}
