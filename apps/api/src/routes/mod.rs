pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::compliance::handlers::handle_compliance_check;
use crate::drafts::handlers;
use crate::personalization::handlers::handle_default_template;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Templates & compliance preview
        .route("/api/v1/templates/default", get(handle_default_template))
        .route("/api/v1/compliance/check", post(handle_compliance_check))
        // Draft batches
        .route(
            "/api/v1/campaigns/:campaign_id/drafts",
            post(handlers::handle_generate_drafts)
                .get(handlers::handle_list_drafts)
                .delete(handlers::handle_delete_drafts),
        )
        .route(
            "/api/v1/campaigns/:campaign_id/drafts/:draft_id",
            patch(handlers::handle_update_draft),
        )
        .with_state(state)
}
