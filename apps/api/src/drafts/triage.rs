//! Triage — splits a draft batch into "ready to send" and "needs review".

use serde::{Deserialize, Serialize};

use crate::models::draft::EmailDraft;

/// Minimum scores a draft needs to be sent without review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageThresholds {
    pub min_personalization: u32,
    pub min_compliance: u32,
}

impl Default for TriageThresholds {
    fn default() -> Self {
        Self {
            min_personalization: 70,
            min_compliance: 80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftView {
    #[default]
    All,
    Ready,
    Review,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSummary {
    pub total: usize,
    pub ready: usize,
    pub needs_review: usize,
    pub average_personalization: u32,
    pub average_compliance: u32,
}

impl TriageThresholds {
    pub fn is_ready(&self, draft: &EmailDraft) -> bool {
        draft.personalization_score >= self.min_personalization
            && draft.compliance_score >= self.min_compliance
    }

    /// Drafts visible under `view`, in batch order.
    pub fn filter<'a>(&self, drafts: &'a [EmailDraft], view: DraftView) -> Vec<&'a EmailDraft> {
        drafts
            .iter()
            .filter(|d| match view {
                DraftView::All => true,
                DraftView::Ready => self.is_ready(d),
                DraftView::Review => !self.is_ready(d),
            })
            .collect()
    }

    pub fn summarize(&self, drafts: &[EmailDraft]) -> DraftSummary {
        let ready = drafts.iter().filter(|d| self.is_ready(d)).count();
        DraftSummary {
            total: drafts.len(),
            ready,
            needs_review: drafts.len() - ready,
            average_personalization: rounded_mean(drafts.iter().map(|d| d.personalization_score)),
            average_compliance: rounded_mean(drafts.iter().map(|d| d.compliance_score)),
        }
    }
}

/// Mean rounded half-up; 0 for an empty batch.
fn rounded_mean(scores: impl ExactSizeIterator<Item = u32>) -> u32 {
    let count = scores.len();
    if count == 0 {
        return 0;
    }
    let sum: u64 = scores.map(u64::from).sum();
    (sum as f64 / count as f64).round() as u32
}
