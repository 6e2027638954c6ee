//! Draft storage — pluggable, trait-based store for generated draft batches.
//!
//! `AppState` holds an `Arc<dyn DraftStore>`. The default backend keeps
//! batches in memory, keyed by campaign.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::drafts::editing::update_draft_content;
use crate::errors::AppError;
use crate::models::draft::EmailDraft;

/// The drafts produced by one generation run for a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftBatch {
    pub campaign_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub drafts: Vec<EmailDraft>,
}

impl DraftBatch {
    pub fn new(campaign_id: Uuid, drafts: Vec<EmailDraft>) -> Self {
        Self {
            campaign_id,
            generated_at: Utc::now(),
            drafts,
        }
    }
}

#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Stores `batch`, discarding whatever the campaign held before.
    async fn replace_batch(&self, batch: DraftBatch) -> Result<(), AppError>;

    async fn get_batch(&self, campaign_id: Uuid) -> Result<Option<DraftBatch>, AppError>;

    /// Drops the campaign's batch. Returns whether one existed.
    async fn remove_batch(&self, campaign_id: Uuid) -> Result<bool, AppError>;

    /// Replaces the content of one draft in the campaign's current batch and
    /// returns the updated draft. Lookup and write happen as one step, so an
    /// edit never lands in a batch other than the one it was resolved in.
    async fn update_content(
        &self,
        campaign_id: Uuid,
        draft_id: &str,
        content: String,
    ) -> Result<EmailDraft, AppError>;
}

#[derive(Default)]
pub struct InMemoryDraftStore {
    batches: RwLock<HashMap<Uuid, DraftBatch>>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn replace_batch(&self, batch: DraftBatch) -> Result<(), AppError> {
        self.batches.write().await.insert(batch.campaign_id, batch);
        Ok(())
    }

    async fn get_batch(&self, campaign_id: Uuid) -> Result<Option<DraftBatch>, AppError> {
        Ok(self.batches.read().await.get(&campaign_id).cloned())
    }

    async fn remove_batch(&self, campaign_id: Uuid) -> Result<bool, AppError> {
        Ok(self.batches.write().await.remove(&campaign_id).is_some())
    }

    async fn update_content(
        &self,
        campaign_id: Uuid,
        draft_id: &str,
        content: String,
    ) -> Result<EmailDraft, AppError> {
        let mut batches = self.batches.write().await;
        let batch = batches
            .get_mut(&campaign_id)
            .ok_or_else(|| AppError::NotFound(format!("No drafts for campaign {campaign_id}")))?;
        let slot = batch
            .drafts
            .iter_mut()
            .find(|d| d.id == draft_id)
            .ok_or_else(|| AppError::NotFound(format!("Draft {draft_id} not found")))?;
        *slot = update_draft_content(slot, content);
        Ok(slot.clone())
    }
}
