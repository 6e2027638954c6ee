//! Axum route handlers for the Drafts API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::drafts::generator::generate_drafts;
use crate::drafts::store::DraftBatch;
use crate::drafts::triage::{DraftSummary, DraftView};
use crate::errors::AppError;
use crate::models::contact::{Contact, SenderProfile};
use crate::models::draft::EmailDraft;
use crate::personalization::personalizer::Template;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateDraftsRequest {
    pub contacts: Vec<Contact>,
    pub sender: SenderProfile,
    /// Falls back to the built-in template when omitted.
    #[serde(default)]
    pub template: Option<Template>,
}

#[derive(Debug, Serialize)]
pub struct DraftBatchResponse {
    pub campaign_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub drafts: Vec<EmailDraft>,
    pub summary: DraftSummary,
}

#[derive(Debug, Deserialize)]
pub struct DraftListQuery {
    #[serde(default)]
    pub view: DraftView,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/campaigns/:campaign_id/drafts
///
/// Generates a fresh batch for the campaign, replacing any previous one.
pub async fn handle_generate_drafts(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
    Json(request): Json<GenerateDraftsRequest>,
) -> Result<Json<DraftBatchResponse>, AppError> {
    validate_contacts(&request.contacts)?;

    let template = request.template.unwrap_or_default();
    let drafts = generate_drafts(&request.contacts, &template, &request.sender)?;

    let batch = DraftBatch::new(campaign_id, drafts);
    let summary = state.config.triage.summarize(&batch.drafts);
    state.drafts.replace_batch(batch.clone()).await?;

    info!(
        "Campaign {}: {} drafts generated, {} ready, {} need review",
        campaign_id, summary.total, summary.ready, summary.needs_review
    );

    Ok(Json(DraftBatchResponse {
        campaign_id,
        generated_at: batch.generated_at,
        drafts: batch.drafts,
        summary,
    }))
}

/// GET /api/v1/campaigns/:campaign_id/drafts?view=all|ready|review
///
/// The summary always covers the whole batch, whatever the view.
pub async fn handle_list_drafts(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
    Query(query): Query<DraftListQuery>,
) -> Result<Json<DraftBatchResponse>, AppError> {
    let batch = state
        .drafts
        .get_batch(campaign_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No drafts for campaign {campaign_id}")))?;

    let triage = state.config.triage;
    let summary = triage.summarize(&batch.drafts);
    let drafts = triage
        .filter(&batch.drafts, query.view)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DraftBatchResponse {
        campaign_id,
        generated_at: batch.generated_at,
        drafts,
        summary,
    }))
}

/// PATCH /api/v1/campaigns/:campaign_id/drafts/:draft_id
///
/// Edits the draft in the campaign's current batch.
pub async fn handle_update_draft(
    State(state): State<AppState>,
    Path((campaign_id, draft_id)): Path<(Uuid, String)>,
    Json(request): Json<UpdateDraftRequest>,
) -> Result<Json<EmailDraft>, AppError> {
    let updated = state
        .drafts
        .update_content(campaign_id, &draft_id, request.content)
        .await?;

    Ok(Json(updated))
}

/// DELETE /api/v1/campaigns/:campaign_id/drafts
pub async fn handle_delete_drafts(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.drafts.remove_batch(campaign_id).await? {
        return Err(AppError::NotFound(format!(
            "No drafts for campaign {campaign_id}"
        )));
    }
    info!("Campaign {}: drafts deleted", campaign_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Rejects contacts the ingestion step should never have let through.
fn validate_contacts(contacts: &[Contact]) -> Result<(), AppError> {
    for (index, contact) in contacts.iter().enumerate() {
        if contact.email.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "contacts[{index}] ({}) has an empty email",
                contact.id
            )));
        }
        if contact.name.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "contacts[{index}] ({}) has an empty name",
                contact.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_contacts_rejects_blank_identity() {
        let ok = Contact {
            id: "1".to_string(),
            email: "a@b.vc".to_string(),
            name: "A".to_string(),
            ..Default::default()
        };
        assert!(validate_contacts(&[ok.clone()]).is_ok());

        let blank_email = Contact {
            email: "  ".to_string(),
            ..ok.clone()
        };
        assert!(matches!(
            validate_contacts(&[ok.clone(), blank_email]),
            Err(AppError::Validation(msg)) if msg.starts_with("contacts[1]")
        ));

        let blank_name = Contact {
            name: String::new(),
            ..ok
        };
        assert!(matches!(
            validate_contacts(&[blank_name]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_generate_request_template_is_optional() {
        let json = serde_json::json!({
            "contacts": [],
            "sender": { "name": "Sam", "firm": "Acme", "email": "sam@acme.vc" }
        });
        let request: GenerateDraftsRequest = serde_json::from_value(json).unwrap();
        assert!(request.template.is_none());
    }
}
