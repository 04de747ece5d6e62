//! MCP tool surface over the analytics client.
//!
//! Data-fetching tools never fault the protocol: every error is rendered as
//! a `Failed to ...` text in an ordinary result. Only the facet tools set
//! the error flag, and only for an unrecognized facet name.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use serde::Serialize;

use crate::api::types::{AudienceDefinition, CreateReportRequest};
use crate::api::ApiClient;
use crate::auth::TokenManager;
use crate::facets::{self, FixedFacet};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetReportsParams {
    /// First report index to return (optional).
    pub pagination_start: Option<u32>,
    /// Last report index to return (optional).
    pub pagination_end: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetReportParams {
    /// The report ID.
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportParams {
    /// The report title.
    pub title: String,
    /// The audience definition with inclusion and optional exclusion criteria.
    pub audience_definition: AudienceDefinition,
    /// Optional baseline audience definition the report is compared against.
    pub baseline_definition: Option<AudienceDefinition>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetInsightsParams {
    /// The report ID.
    pub report_id: String,
    /// Filter insights by facet URNs (optional).
    pub facet_urns: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCategoriesParams {
    /// The report ID.
    pub report_id: String,
    /// Filter categories by URNs (optional).
    pub urns: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TypeaheadParams {
    /// The facet URN to search for suggestions, with the
    /// `urn:li:adTargetingFacet:` prefix (e.g.
    /// `urn:li:adTargetingFacet:locations`). Use the
    /// list-linkedin-typeahead-facets tool for the full set.
    pub facet: String,
    /// The search query (optional). Use this to filter suggestions by keyword.
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFacetValuesParams {
    /// Optional: the specific facet URN to get values for (e.g.
    /// `urn:li:adTargetingFacet:genders`).
    pub facet: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstimateAudienceParams {
    /// The audience definition to size, with inclusion and optional
    /// exclusion criteria.
    pub audience_definition: AudienceDefinition,
}

#[derive(Clone)]
pub struct AudienseServer {
    api: Arc<ApiClient>,
    auth: Arc<TokenManager>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AudienseServer {
    pub fn new(api: Arc<ApiClient>, auth: Arc<TokenManager>) -> Self {
        Self {
            api,
            auth,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "get-linkedin-reports",
        description = "Get LinkedIn reports for the authorized user"
    )]
    pub async fn get_reports(
        &self,
        Parameters(params): Parameters<GetReportsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .api
            .reports(params.pagination_start, params.pagination_end)
            .await;
        Ok(match result {
            Ok(reports) => json_result(&reports),
            Err(err) => soft_failure("get user reports", err),
        })
    }

    #[tool(
        name = "get-linkedin-report",
        description = "Get a specific LinkedIn report by ID"
    )]
    pub async fn get_report(
        &self,
        Parameters(params): Parameters<GetReportParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(match self.api.report(&params.id).await {
            Ok(report) => json_result(&report),
            Err(err) => soft_failure("get report", err),
        })
    }

    #[tool(
        name = "create-linkedin-report",
        description = "Create a new LinkedIn report with audience definition"
    )]
    pub async fn create_report(
        &self,
        Parameters(params): Parameters<CreateReportParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = CreateReportRequest {
            id: uuid::Uuid::new_v4().to_string(),
            title: params.title,
            audience_definition: params.audience_definition,
            baseline_definition: params.baseline_definition,
        };
        Ok(match self.api.create_report(&request).await {
            Ok(()) => text_result(format!(
                "Report \"{}\" (ID: {}) created successfully. It could take up to 10 minutes \
                 to process. Wait until status is Finished before querying insights.",
                request.title, request.id
            )),
            Err(err) => soft_failure("create report", err),
        })
    }

    #[tool(
        name = "get-linkedin-insights",
        description = "Get LinkedIn insights for a specific report"
    )]
    pub async fn get_insights(
        &self,
        Parameters(params): Parameters<GetInsightsParams>,
    ) -> Result<CallToolResult, McpError> {
        let facet_urns = params.facet_urns.unwrap_or_default();
        let result = self
            .api
            .report_insights(&params.report_id, &facet_urns)
            .await;
        Ok(match result {
            Ok(insights) => json_result(&insights),
            Err(err) => soft_failure("get insights", err),
        })
    }

    #[tool(
        name = "get-linkedin-categories",
        description = "Get LinkedIn categories for a specific report"
    )]
    pub async fn get_categories(
        &self,
        Parameters(params): Parameters<GetCategoriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let urns = params.urns.unwrap_or_default();
        let result = self.api.report_categories(&params.report_id, &urns).await;
        Ok(match result {
            Ok(categories) => json_result(&categories),
            Err(err) => soft_failure("get categories", err),
        })
    }

    #[tool(
        name = "get-linkedin-typeahead",
        description = "Get LinkedIn typeahead suggestions for a specific facet and query. \
                       Use the facet parameter to specify which type of suggestions you want \
                       to retrieve."
    )]
    pub async fn get_typeahead(
        &self,
        Parameters(params): Parameters<TypeaheadParams>,
    ) -> Result<CallToolResult, McpError> {
        if !facets::is_typeahead_facet(&params.facet) {
            let available = facets::TYPEAHEAD_FACETS
                .iter()
                .map(|facet| facet.urn)
                .collect::<Vec<_>>()
                .join("\n");
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Missing or invalid facet parameter. Available facets are:\n{available}"
            ))]));
        }
        let result = self
            .api
            .typeahead(&params.facet, params.query.as_deref())
            .await;
        Ok(match result {
            Ok(suggestions) => json_result(&suggestions),
            Err(err) => soft_failure("get typeahead suggestions", err),
        })
    }

    #[tool(
        name = "get-linkedin-account",
        description = "Get LinkedIn account details including LinkedIn token"
    )]
    pub async fn get_account(&self) -> Result<CallToolResult, McpError> {
        Ok(match self.api.account().await {
            Ok(account) => json_result(&account),
            Err(err) => soft_failure("get account details", err),
        })
    }

    #[tool(
        name = "estimate-linkedin-audience",
        description = "Estimate the audience size for an audience definition without \
                       creating a report"
    )]
    pub async fn estimate_audience(
        &self,
        Parameters(params): Parameters<EstimateAudienceParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.api.estimate_audience(&params.audience_definition).await;
        Ok(match result {
            Ok(estimate) => json_result(&estimate),
            Err(err) => soft_failure("estimate audience", err),
        })
    }

    #[tool(
        name = "list-linkedin-typeahead-facets",
        description = "List all available facets that can be used with the \
                       get-linkedin-typeahead tool"
    )]
    pub async fn list_typeahead_facets(&self) -> Result<CallToolResult, McpError> {
        let listing = facets::TYPEAHEAD_FACETS
            .iter()
            .map(|facet| format!("{} - {}", facet.urn, facet.description))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(text_result(format!(
            "Available facets for typeahead suggestions:\n\n{listing}\n\nUse these facets \
             with the get-linkedin-typeahead tool to retrieve suggestions."
        )))
    }

    #[tool(
        name = "list-linkedin-facet-values",
        description = "List all LinkedIn facets with predefined values, or filter by a \
                       specific facet"
    )]
    pub async fn list_facet_values(
        &self,
        Parameters(params): Parameters<ListFacetValuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(facet) = params.facet else {
            return Ok(text_result(all_facet_values_listing()));
        };

        if let Some(fixed) = facets::fixed_facet(&facet) {
            return Ok(text_result(fixed_facet_listing(fixed)));
        }

        if facets::is_typeahead_facet(&facet) {
            return Ok(text_result(format!(
                "The facet \"{facet}\" is a typeahead facet and does not have predefined \
                 values. Use the \"get-linkedin-typeahead\" tool to search for values for \
                 this facet.\n\nExample: {{ \"facet\": \"{facet}\", \"query\": \"your search term\" }}"
            )));
        }

        let known = facets::FIXED_FACETS
            .iter()
            .map(|fixed| fixed.urn)
            .collect::<Vec<_>>()
            .join("\n");
        Ok(CallToolResult::error(vec![Content::text(format!(
            "Facet \"{facet}\" not found or does not have predefined values. Available \
             facets with predefined values are:\n\n{known}"
        ))]))
    }

    #[tool(
        name = "initiate-linkedin-device-auth",
        description = "Start the device authorization flow to get a device code for \
                       authentication"
    )]
    pub async fn initiate_device_auth(&self) -> Result<CallToolResult, McpError> {
        let session = match self.auth.start_device_flow().await {
            Ok(session) => session,
            Err(err) => return Ok(soft_failure("initiate device authorization", err)),
        };
        let raw = serde_json::to_string_pretty(&session)
            .unwrap_or_else(|_| session.verification_uri_complete.clone());
        Ok(CallToolResult::success(vec![
            Content::text("Device Authorization Flow initiated. Please follow these steps:"),
            Content::text(format!("1. Visit: {}", session.verification_uri_complete)),
            Content::text(format!(
                "2. Verify the code in the browser matches this one: {}",
                session.user_code
            )),
            Content::text(format!(
                "3. The code will expire in {} seconds",
                session.expires_in
            )),
            Content::text(
                "4. After completing the authentication in the browser, the user should \
                 write the request again.",
            ),
            Content::text(raw),
        ]))
    }
}

#[tool_handler]
impl ServerHandler for AudienseServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Bridge to the Audiense LinkedIn audience analytics API. Authenticate \
                 first with initiate-linkedin-device-auth, approve in the browser, then \
                 create reports and query insights, categories, and typeahead suggestions."
                    .to_string(),
            ),
        }
    }
}

fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn soft_failure(action: &str, error: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format!("Failed to {action}: {error}"))])
}

fn json_result<T: Serialize>(data: &T) -> CallToolResult {
    match serde_json::to_string_pretty(data) {
        Ok(text) => text_result(text),
        Err(err) => soft_failure("serialize response", err),
    }
}

fn values_listing(facet: &FixedFacet) -> String {
    facet
        .values
        .iter()
        .map(|value| format!("- `{}` - {}", value.value, value.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn usage_example(facet: &str, value: &str) -> String {
    format!(
        "\n\n## Usage Example\n\nWhen creating a report with the `create-linkedin-report` \
         tool, you can use these values in the audience definition:\n\n```json\n{{\n  \
         \"audienceDefinition\": {{\n    \"include\": {{\n      \"and\": [\n        {{\n          \
         \"or\": {{\n            \"{facet}\": [\n              \"{value}\"\n            ]\n          \
         }}\n        }}\n      ]\n    }}\n  }}\n}}\n```"
    )
}

fn fixed_facet_listing(facet: &FixedFacet) -> String {
    let example_value = facet.values.first().map(|value| value.value).unwrap_or("");
    format!(
        "# {} - {}\n\n{}{}",
        facet.urn,
        facet.description,
        values_listing(facet),
        usage_example(facet.urn, example_value)
    )
}

fn all_facet_values_listing() -> String {
    let body = facets::FIXED_FACETS
        .iter()
        .map(|facet| {
            format!(
                "## {} - {}\n\n{}",
                facet.urn,
                facet.description,
                values_listing(facet)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "# LinkedIn facets with predefined values\n\nThe following facets have predefined \
         values that can be used in audience definitions. For facets not listed here, use \
         the `get-linkedin-typeahead` tool to search for values.\n\n{body}{}",
        usage_example("urn:li:adTargetingFacet:genders", "urn:li:gender:FEMALE")
    )
}
