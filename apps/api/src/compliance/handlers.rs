use axum::Json;
use serde::{Deserialize, Serialize};

use crate::compliance::checks::{evaluate, ComplianceReport};
use crate::personalization::placeholders::placeholders_in;

#[derive(Debug, Deserialize)]
pub struct ComplianceCheckRequest {
    pub content: String,
    #[serde(default)]
    pub sender_address: String,
}

#[derive(Debug, Serialize)]
pub struct ComplianceCheckResponse {
    pub report: ComplianceReport,
    /// Recognized placeholder tokens still present in the content.
    pub placeholders: Vec<&'static str>,
}

/// POST /api/v1/compliance/check
///
/// Evaluates raw content, typically a template being edited, before any
/// personalization happens.
pub async fn handle_compliance_check(
    Json(request): Json<ComplianceCheckRequest>,
) -> Json<ComplianceCheckResponse> {
    let report = evaluate(&request.content, &request.sender_address);
    let placeholders = placeholders_in(&request.content)
        .into_iter()
        .map(|p| p.token())
        .collect();

    Json(ComplianceCheckResponse {
        report,
        placeholders,
    })
}
