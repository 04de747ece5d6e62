//! Wire types for the audience analytics backend.

use std::collections::BTreeMap;

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Audience definition: members matching every OR-clause in `include.and`,
/// minus anyone matching `exclude`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AudienceDefinition {
    pub include: IncludeClause,
    /// Optional exclusion criteria.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<OrClause>,
}

/// Conjunction of OR-clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct IncludeClause {
    pub and: Vec<OrClause>,
}

/// OR clause for audience targeting: facet URNs as keys, arrays of facet
/// values as values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct OrClause {
    pub or: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub id: String,
    pub title: String,
    pub audience_definition: AudienceDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_definition: Option<AudienceDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Generating,
    Failed,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportErrorCode {
    RateLimitError,
    AudienceSizeTooSmallError,
    UnknownError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub audience_definition: AudienceDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_size: Option<i64>,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ReportErrorCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetail {
    pub id: String,
    pub title: String,
    pub audience_size: i64,
    pub baseline_size: i64,
    pub created_at: String,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ReportErrorCode>,
}

/// Insight row with penetration/affinity relative to the baseline audience.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub name: String,
    pub urn: String,
    pub count: u64,
    pub penetration: f64,
    pub affinity: f64,
    pub baseline_count: u64,
    pub baseline_penetration: f64,
    pub facet_urn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainCategory {
    pub name: String,
    pub urn: String,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub count: u64,
    pub penetration: f64,
    pub affinity: f64,
    pub baseline_count: u64,
    pub baseline_penetration: f64,
    pub subcategories: Vec<Subcategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub name: String,
    pub count: u64,
    pub penetration: f64,
    pub affinity: f64,
    pub baseline_count: u64,
    pub baseline_penetration: f64,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeaheadSuggestion {
    pub name: String,
    pub urn: String,
    pub facet_urn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub email: String,
    pub identity_id: String,
    pub created_at: String,
}

/// LinkedIn credential the backend holds on the account's behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInToken {
    pub account_id: String,
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_in: Option<u64>,
    pub scope: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ads_account_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account: Account,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in_token: Option<LinkedInToken>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn audience_definition_survives_json_round_trip() {
        let raw = json!({
            "include": {
                "and": [
                    { "or": { "urn:li:adTargetingFacet:genders": ["urn:li:gender:FEMALE"] } }
                ]
            }
        });
        let parsed: AudienceDefinition = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn report_summary_tolerates_null_sizes() {
        let parsed: ReportSummary = serde_json::from_value(json!({
            "id": "r1",
            "title": "Engineers",
            "createdAt": "2024-01-01T00:00:00Z",
            "audienceDefinition": { "include": { "and": [] } },
            "audienceSize": null,
            "status": "Generating"
        }))
        .unwrap();
        assert_eq!(parsed.status, ReportStatus::Generating);
        assert_eq!(parsed.audience_size, None);
        assert_eq!(parsed.error_code, None);
    }

    #[test]
    fn report_error_codes_deserialize_by_name() {
        let parsed: ReportErrorCode = serde_json::from_value(json!("RateLimitError")).unwrap();
        assert_eq!(parsed, ReportErrorCode::RateLimitError);
    }

    #[test]
    fn create_report_request_omits_missing_baseline() {
        let request = CreateReportRequest {
            id: "abc".into(),
            title: "Engineers".into(),
            audience_definition: AudienceDefinition {
                include: IncludeClause { and: vec![] },
                exclude: None,
            },
            baseline_definition: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("baselineDefinition").is_none());
        assert_eq!(value["id"], "abc");
    }
}
