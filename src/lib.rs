//! Audiense MCP: LinkedIn audience analytics over the Model Context Protocol.
//!
//! Bridges the Audiense LinkedIn analytics backend (reports, insights,
//! categories, typeahead search, account lookup) to MCP tools, and keeps the
//! server authenticated against Auth0 with the OAuth2 Device Authorization
//! Flow.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use audiense_mcp::auth::TokenManager;
//! use audiense_mcp::api::ApiClient;
//! use audiense_mcp::config::{ApiConfig, AuthConfig};
//! use audiense_mcp::server::AudienseServer;
//!
//! let auth = Arc::new(TokenManager::new(AuthConfig::from_env()));
//! let api = Arc::new(ApiClient::new(ApiConfig::from_env(), auth.clone()));
//! let server = AudienseServer::new(api, auth);
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod facets;
pub mod server;
