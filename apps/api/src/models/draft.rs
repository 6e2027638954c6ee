use serde::{Deserialize, Serialize};

/// One generated outreach email, ready for review or export.
///
/// `contact_id` refers back into the contact batch the draft was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub id: String,
    pub contact_id: String,
    pub subject: String,
    pub content: String,
    pub personalization_score: u32, // 0 – 100
    pub compliance_score: u32,      // 0 – 100
    pub warnings: Vec<String>,
}
