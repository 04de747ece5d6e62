use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};

use crate::auth::TokenManager;
use crate::config::ApiConfig;

use super::error::ApiError;
use super::types::{
    AccountResponse, AudienceDefinition, CreateReportRequest, Insight, MainCategory, ReportDetail,
    ReportSummary, TypeaheadSuggestion,
};

/// Authenticated dispatcher for the analytics backend.
///
/// Every call obtains a current access token from the shared [`TokenManager`]
/// first, so a cold or expired cache makes the call noticeably slower than a
/// plain round-trip.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    auth: Arc<TokenManager>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, auth: Arc<TokenManager>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            auth,
        }
    }

    /// All reports visible to the authorized user, optionally windowed.
    pub async fn reports(
        &self,
        pagination_start: Option<u32>,
        pagination_end: Option<u32>,
    ) -> Result<Vec<ReportSummary>, ApiError> {
        let mut query = Vec::new();
        if let Some(start) = pagination_start {
            query.push(("paginationStart", start.to_string()));
        }
        if let Some(end) = pagination_end {
            query.push(("paginationEnd", end.to_string()));
        }
        self.get_json("/reports", &query).await
    }

    pub async fn report(&self, id: &str) -> Result<ReportDetail, ApiError> {
        self.get_json(&format!("/reports/{id}"), &[]).await
    }

    /// Create a report. The backend answers `201 Created` with no body.
    pub async fn create_report(&self, request: &CreateReportRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request)?;
        self.request::<serde_json::Value>(Method::POST, "/reports", &[], Some(&body))
            .await?;
        Ok(())
    }

    pub async fn report_insights(
        &self,
        report_id: &str,
        facet_urns: &[String],
    ) -> Result<Vec<Insight>, ApiError> {
        let query: Vec<(&str, String)> = facet_urns
            .iter()
            .map(|urn| ("facetUrn", urn.clone()))
            .collect();
        self.get_json(&format!("/reports/{report_id}/insights"), &query)
            .await
    }

    pub async fn report_categories(
        &self,
        report_id: &str,
        urns: &[String],
    ) -> Result<Vec<MainCategory>, ApiError> {
        let query: Vec<(&str, String)> = urns.iter().map(|urn| ("urn", urn.clone())).collect();
        self.get_json(&format!("/reports/{report_id}/categories"), &query)
            .await
    }

    pub async fn typeahead(
        &self,
        facet: &str,
        query: Option<&str>,
    ) -> Result<Vec<TypeaheadSuggestion>, ApiError> {
        let mut params = vec![("facet", facet.to_string())];
        if let Some(query) = query {
            params.push(("query", query.to_string()));
        }
        self.get_json("/typeahead", &params).await
    }

    /// Account details, including the LinkedIn token the backend holds.
    pub async fn account(&self) -> Result<AccountResponse, ApiError> {
        self.get_json("/account/me", &[]).await
    }

    /// Estimate the audience size for a definition without creating a report.
    pub async fn estimate_audience(
        &self,
        definition: &AudienceDefinition,
    ) -> Result<serde_json::Value, ApiError> {
        let body = json!({ "audienceDefinition": definition });
        self.request(Method::POST, "/estimation", &[], Some(&body))
            .await?
            .ok_or_else(|| ApiError::EmptyResponse("/estimation".to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, query, None)
            .await?
            .ok_or_else(|| ApiError::EmptyResponse(path.to_string()))
    }

    /// Issue one authenticated call. `201 Created` yields `None` regardless
    /// of any body; every other non-2xx status becomes an error carrying the
    /// status and raw body text.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<Option<T>, ApiError> {
        let token = self.auth.access_token().await?;

        let mut request = self
            .http
            .request(method, format!("{}{path}", self.config.base_url))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, self.config.user_agent.as_str());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| {
            error!(path, error = %err, "request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        if status == StatusCode::CREATED {
            debug!(path, "created; discarding response body");
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }
}
