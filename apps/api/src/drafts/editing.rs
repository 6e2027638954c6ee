use crate::models::draft::EmailDraft;

/// Returns a copy of `draft` with its content replaced.
///
/// Scores and warnings describe the generated text and are carried over
/// unchanged; the caller swaps the returned value into its batch.
pub fn update_draft_content(draft: &EmailDraft, new_content: impl Into<String>) -> EmailDraft {
    EmailDraft {
        content: new_content.into(),
        ..draft.clone()
    }
}
