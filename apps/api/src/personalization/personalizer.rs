//! Personalizer — resolves a template against one contact and the sender.
//!
//! Substitution is a single left-to-right scan over the template: each
//! recognized token is replaced by its value exactly once, and the value is
//! never scanned again. Unknown `{{...}}` tokens pass through untouched.

use serde::{Deserialize, Serialize};

use crate::models::contact::{Contact, SenderProfile};
use crate::personalization::placeholders::Placeholder;
use crate::personalization::templates::{DEFAULT_BODY, DEFAULT_SUBJECT};

/// Rendered in place of `{{Focus}}` when the contact has neither focus nor thesis.
pub const FOCUS_FALLBACK: &str = "investment focus";

/// Sentence fragment that research notes are appended to. Must match exactly.
pub const PIPELINE_FRAGMENT: &str = "and swap notes on your pipeline.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub subject: String,
    pub body: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            body: DEFAULT_BODY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalizedMessage {
    pub subject: String,
    pub body: String,
}

/// Renders the subject and body for one contact. Never fails: missing optional
/// data degrades to fallback text.
pub fn personalize(
    template: &Template,
    contact: &Contact,
    sender: &SenderProfile,
) -> PersonalizedMessage {
    let subject = substitute(&template.subject, |p| {
        p.allowed_in_subject().then(|| resolve(p, contact, sender))
    });

    let mut body = substitute(&template.body, |p| Some(resolve(p, contact, sender)));
    if let Some(notes) = contact.research_notes() {
        body = augment_with_research(&body, notes);
    }

    PersonalizedMessage { subject, body }
}

fn resolve<'a>(
    placeholder: Placeholder,
    contact: &'a Contact,
    sender: &'a SenderProfile,
) -> &'a str {
    match placeholder {
        Placeholder::Name => contact.name.as_str(),
        Placeholder::Firm => contact.firm.as_str(),
        Placeholder::Focus => contact
            .focus()
            .or_else(|| contact.thesis())
            .unwrap_or(FOCUS_FALLBACK),
        Placeholder::SenderName => sender.name.as_str(),
        Placeholder::SenderTitle => sender.title.as_str(),
        Placeholder::SenderFirm => sender.firm.as_str(),
        Placeholder::SenderEmail => sender.email.as_str(),
        Placeholder::SenderAddress => sender.physical_address.as_str(),
    }
}

/// Replaces every recognized token for which `value_of` returns a value.
/// Tokens mapped to `None` are copied through verbatim.
fn substitute<'a>(text: &str, value_of: impl Fn(Placeholder) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match Placeholder::at_start_of(candidate) {
            Some(p) => {
                out.push_str(value_of(p).unwrap_or(p.token()));
                rest = &candidate[p.token().len()..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Weaves the contact's research notes into the pipeline sentence. Only the
/// first occurrence is touched; a template without the fragment is left as is.
fn augment_with_research(body: &str, notes: &str) -> String {
    let augmented = format!("and swap notes on your pipeline, especially given your {notes}.");
    body.replacen(PIPELINE_FRAGMENT, &augmented, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact {
            id: "c1".to_string(),
            email: "jane@beta.vc".to_string(),
            name: "Jane Doe".to_string(),
            firm: "Beta Capital".to_string(),
            verified: true,
            ..Default::default()
        }
    }

    fn sender() -> SenderProfile {
        SenderProfile {
            name: "Sam Lee".to_string(),
            title: "Partner".to_string(),
            firm: "Acme VC".to_string(),
            email: "sam@acme.vc".to_string(),
            physical_address: "1 Market St, San Francisco".to_string(),
        }
    }

    fn template(subject: &str, body: &str) -> Template {
        Template {
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let t = template("", "{{Name}} / {{Name}} / {{Firm}}");
        let msg = personalize(&t, &contact(), &sender());
        assert_eq!(msg.body, "Jane Doe / Jane Doe / Beta Capital");
    }

    #[test]
    fn test_sender_fields_resolve_verbatim() {
        let t = template(
            "",
            "{{SenderName}}|{{SenderTitle}}|{{SenderFirm}}|{{SenderEmail}}|{{SenderAddress}}",
        );
        let msg = personalize(&t, &contact(), &sender());
        assert_eq!(
            msg.body,
            "Sam Lee|Partner|Acme VC|sam@acme.vc|1 Market St, San Francisco"
        );
    }

    #[test]
    fn test_unset_sender_fields_render_empty() {
        let mut s = sender();
        s.title.clear();
        s.physical_address.clear();
        let t = template("", "[{{SenderTitle}}][{{SenderAddress}}]");
        assert_eq!(personalize(&t, &contact(), &s).body, "[][]");
    }

    #[test]
    fn test_focus_prefers_focus_then_thesis() {
        let t = template("", "your {{Focus}}");

        let mut c = contact();
        c.focus = Some("Healthcare AI".to_string());
        c.thesis = Some("Vertical SaaS".to_string());
        assert_eq!(personalize(&t, &c, &sender()).body, "your Healthcare AI");

        c.focus = Some(String::new());
        assert_eq!(personalize(&t, &c, &sender()).body, "your Vertical SaaS");
    }

    #[test]
    fn test_focus_fallback_everywhere() {
        let t = template("", "{{Focus}} and again {{Focus}}");
        let msg = personalize(&t, &contact(), &sender());
        assert_eq!(msg.body, "investment focus and again investment focus");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let t = template("", "Hi {{name}}, {{Nmae}} {{Name} {Name}} {{Unknown}}");
        let msg = personalize(&t, &contact(), &sender());
        assert_eq!(msg.body, "Hi {{name}}, {{Nmae}} {{Name} {Name}} {{Unknown}}");
    }

    #[test]
    fn test_token_after_stray_brace_still_matches() {
        let t = template("", "{{{Name}}}");
        assert_eq!(personalize(&t, &contact(), &sender()).body, "{Jane Doe}");
    }

    #[test]
    fn test_values_are_not_expanded_again() {
        let mut c = contact();
        c.name = "{{Firm}}".to_string();
        let t = template("{{Name}}", "Hi {{Name}} at {{Firm}}");
        let msg = personalize(&t, &c, &sender());
        assert_eq!(msg.body, "Hi {{Firm}} at Beta Capital");
        assert_eq!(msg.subject, "{{Firm}}");
    }

    #[test]
    fn test_subject_only_expands_name_and_firm() {
        let t = template("{{Name}} x {{Firm}} re {{Focus}} from {{SenderName}}", "");
        let msg = personalize(&t, &contact(), &sender());
        assert_eq!(msg.subject, "Jane Doe x Beta Capital re {{Focus}} from {{SenderName}}");
    }

    #[test]
    fn test_research_notes_augment_pipeline_sentence() {
        let mut c = contact();
        c.research_notes = Some("recent Series A in digital health".to_string());
        let t = template(
            "",
            "Let's chat and swap notes on your pipeline. Later: and swap notes on your pipeline.",
        );
        let msg = personalize(&t, &c, &sender());
        assert_eq!(
            msg.body,
            "Let's chat and swap notes on your pipeline, especially given your \
             recent Series A in digital health. Later: and swap notes on your pipeline."
        );
    }

    #[test]
    fn test_no_augmentation_without_fragment() {
        let mut c = contact();
        c.research_notes = Some("seed round in devtools".to_string());
        let t = template("", "Let's swap notes on your pipeline!");
        assert_eq!(personalize(&t, &c, &sender()).body, "Let's swap notes on your pipeline!");
    }

    #[test]
    fn test_no_augmentation_without_notes() {
        let mut c = contact();
        c.research_notes = Some(String::new());
        let t = template("", "and swap notes on your pipeline.");
        assert_eq!(personalize(&t, &c, &sender()).body, "and swap notes on your pipeline.");
    }

    #[test]
    fn test_full_personalization_scenario() {
        let c = Contact {
            focus: Some("Healthcare AI".to_string()),
            thesis: Some(String::new()),
            research_notes: Some("recent Series A in digital health".to_string()),
            ..contact()
        };
        let s = SenderProfile {
            physical_address: String::new(),
            ..sender()
        };
        let msg = personalize(&Template::default(), &c, &s);
        assert!(msg.body.contains("Healthcare AI"));
        assert!(msg
            .body
            .contains("especially given your recent Series A in digital health."));
        assert!(msg.body.starts_with("Hi Jane Doe,"));
        assert!(!msg.body.contains("{{"));
        assert_eq!(msg.subject, DEFAULT_SUBJECT);
    }

    #[test]
    fn test_non_ascii_text_survives_scan() {
        let t = template("", "Grüße {{Name}} — {{Firm}} ✓ {");
        let msg = personalize(&t, &contact(), &sender());
        assert_eq!(msg.body, "Grüße Jane Doe — Beta Capital ✓ {");
    }
}
