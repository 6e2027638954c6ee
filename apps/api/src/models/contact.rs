use serde::{Deserialize, Serialize};

/// A prospective recipient, as handed over by the contact-ingestion step.
///
/// Read-only input to personalization: nothing in the engine mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub email: String,
    pub name: String,
    pub firm: String,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub thesis: Option<String>,
    #[serde(default)]
    pub research_notes: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Only verified contacts are eligible for draft generation.
    #[serde(default)]
    pub verified: bool,
}

impl Contact {
    pub fn focus(&self) -> Option<&str> {
        non_empty(&self.focus)
    }

    pub fn thesis(&self) -> Option<&str> {
        non_empty(&self.thesis)
    }

    pub fn research_notes(&self) -> Option<&str> {
        non_empty(&self.research_notes)
    }
}

/// The person the outreach is sent on behalf of.
///
/// `name`, `firm` and `email` must be set before drafts can be generated.
/// `physical_address` is optional but its absence is a compliance warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SenderProfile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub firm: String,
    pub email: String,
    #[serde(default)]
    pub physical_address: String,
}

/// An optional field counts as present only when it holds a non-empty string.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optional_fields_are_absent() {
        let contact = Contact {
            focus: Some(String::new()),
            thesis: None,
            research_notes: Some("Series A in fintech".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.focus(), None);
        assert_eq!(contact.thesis(), None);
        assert_eq!(contact.research_notes(), Some("Series A in fintech"));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let contact = Contact {
            focus: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.focus(), Some(" "));
    }

    #[test]
    fn test_contact_deserializes_without_enrichment() {
        let json = serde_json::json!({
            "id": "c1",
            "email": "jane@beta.vc",
            "name": "Jane Doe",
            "firm": "Beta Capital"
        });
        let contact: Contact = serde_json::from_value(json).unwrap();
        assert!(!contact.verified);
        assert!(contact.focus.is_none());
        assert!(contact.linkedin_url.is_none());
    }

    #[test]
    fn test_sender_optional_fields_default_empty() {
        let json = serde_json::json!({
            "name": "Sam Lee",
            "firm": "Acme VC",
            "email": "sam@acme.vc"
        });
        let sender: SenderProfile = serde_json::from_value(json).unwrap();
        assert!(sender.title.is_empty());
        assert!(sender.physical_address.is_empty());
    }
}
