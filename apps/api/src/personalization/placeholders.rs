//! The closed placeholder vocabulary understood by the personalizer.
//!
//! Adding a placeholder means adding a variant here and a resolution rule in
//! `personalizer`; templates cannot define their own.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Name,
    Firm,
    Focus,
    SenderName,
    SenderTitle,
    SenderFirm,
    SenderEmail,
    SenderAddress,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Placeholder::Name,
        Placeholder::Firm,
        Placeholder::Focus,
        Placeholder::SenderName,
        Placeholder::SenderTitle,
        Placeholder::SenderFirm,
        Placeholder::SenderEmail,
        Placeholder::SenderAddress,
    ];

    /// The literal token, delimiters included, as it appears in a template.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Name => "{{Name}}",
            Placeholder::Firm => "{{Firm}}",
            Placeholder::Focus => "{{Focus}}",
            Placeholder::SenderName => "{{SenderName}}",
            Placeholder::SenderTitle => "{{SenderTitle}}",
            Placeholder::SenderFirm => "{{SenderFirm}}",
            Placeholder::SenderEmail => "{{SenderEmail}}",
            Placeholder::SenderAddress => "{{SenderAddress}}",
        }
    }

    /// Subject lines only ever expand the recipient's name and firm.
    pub fn allowed_in_subject(self) -> bool {
        matches!(self, Placeholder::Name | Placeholder::Firm)
    }

    /// Returns the placeholder whose token starts at the beginning of `text`.
    pub fn at_start_of(text: &str) -> Option<Placeholder> {
        Self::ALL.into_iter().find(|p| text.starts_with(p.token()))
    }
}

/// Lists the recognized placeholders used in `text`, in order of first appearance.
/// Unknown `{{...}}` tokens are ignored.
pub fn placeholders_in(text: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    for (idx, _) in text.char_indices().filter(|&(_, c)| c == '{') {
        if let Some(p) = Placeholder::at_start_of(&text[idx..]) {
            if !found.contains(&p) {
                found.push(p);
            }
        }
    }
    found
}
