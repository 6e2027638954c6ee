use axum::Json;
use serde::Serialize;

use crate::personalization::personalizer::Template;
use crate::personalization::placeholders::Placeholder;

#[derive(Debug, Serialize)]
pub struct DefaultTemplateResponse {
    pub template: Template,
    pub placeholders: Vec<&'static str>,
}

/// GET /api/v1/templates/default
pub async fn handle_default_template() -> Json<DefaultTemplateResponse> {
    Json(DefaultTemplateResponse {
        template: Template::default(),
        placeholders: Placeholder::ALL.iter().map(|p| p.token()).collect(),
    })
}
