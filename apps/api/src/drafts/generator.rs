//! Draft generation — runs personalization and compliance for a contact batch.
//!
//! Flow per verified contact: personalize → evaluate body → score → EmailDraft.
//! Contacts are independent; output order always matches input order.

use thiserror::Error;
use tracing::{debug, info};

use crate::compliance::checks::evaluate;
use crate::compliance::scoring::{compliance_score, personalization_score};
use crate::models::contact::{Contact, SenderProfile};
use crate::models::draft::EmailDraft;
use crate::personalization::personalizer::{personalize, Template};

/// Batch-level precondition failures. Nothing is generated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("At least one verified contact is required to generate drafts")]
    NoVerifiedContacts,

    #[error("Sender {0} is required to generate drafts")]
    MissingSenderField(&'static str),
}

/// Generates one draft per verified contact. Unverified contacts are skipped.
///
/// Every call produces a fresh batch; draft ids are `draft_1`, `draft_2`, …
/// in the order of the verified contacts.
pub fn generate_drafts(
    contacts: &[Contact],
    template: &Template,
    sender: &SenderProfile,
) -> Result<Vec<EmailDraft>, GenerationError> {
    let verified: Vec<&Contact> = contacts.iter().filter(|c| c.verified).collect();
    if verified.is_empty() {
        return Err(GenerationError::NoVerifiedContacts);
    }
    check_sender(sender)?;

    info!(
        "Generating drafts for {} verified contacts ({} unverified skipped)",
        verified.len(),
        contacts.len() - verified.len()
    );

    let drafts = verified
        .into_iter()
        .enumerate()
        .map(|(index, contact)| build_draft(index, contact, template, sender))
        .collect();

    Ok(drafts)
}

fn check_sender(sender: &SenderProfile) -> Result<(), GenerationError> {
    let required = [
        ("name", &sender.name),
        ("firm", &sender.firm),
        ("email", &sender.email),
    ];
    match required.into_iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(GenerationError::MissingSenderField(field)),
        None => Ok(()),
    }
}

fn build_draft(
    index: usize,
    contact: &Contact,
    template: &Template,
    sender: &SenderProfile,
) -> EmailDraft {
    let message = personalize(template, contact, sender);
    let report = evaluate(&message.body, &sender.physical_address);

    let draft = EmailDraft {
        id: format!("draft_{}", index + 1),
        contact_id: contact.id.clone(),
        subject: message.subject,
        content: message.body,
        personalization_score: personalization_score(contact),
        compliance_score: compliance_score(&report),
        warnings: report.warnings,
    };

    debug!(
        "Draft {} for contact {}: personalization={} compliance={}",
        draft.id, draft.contact_id, draft.personalization_score, draft.compliance_score
    );
    draft
}
