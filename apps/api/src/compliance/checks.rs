//! Anti-spam / disclosure heuristics evaluated against a rendered email body.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::compliance::scoring::spam_score;
use crate::personalization::placeholders::Placeholder;

pub const MAX_RECOMMENDED_WORDS: usize = 125;
pub const MAX_RECOMMENDED_LINKS: usize = 2;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

/// A single failed heuristic. `Display` yields the user-facing warning text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceIssue {
    MissingUnsubscribeLink,
    MissingPhysicalAddress,
    TooLong { words: usize },
    TooManyLinks { links: usize },
}

impl fmt::Display for ComplianceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceIssue::MissingUnsubscribeLink => write!(f, "Missing unsubscribe link"),
            ComplianceIssue::MissingPhysicalAddress => write!(f, "Missing physical address"),
            ComplianceIssue::TooLong { words } => write!(
                f,
                "Email too long ({words} words, recommended: 50-{MAX_RECOMMENDED_WORDS})"
            ),
            ComplianceIssue::TooManyLinks { links } => write!(
                f,
                "Too many links ({links}, recommended: 1-{MAX_RECOMMENDED_LINKS})"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub has_unsubscribe_link: bool,
    pub has_physical_address: bool,
    pub word_count: usize,
    pub link_count: usize,
    pub spam_score: u32, // 0 – 100
    pub warnings: Vec<String>,
    pub passed: bool,
}

/// Evaluates `body` against the compliance heuristics. Total over any input.
///
/// Warnings are emitted in a fixed order: unsubscribe, address, length, links.
pub fn evaluate(body: &str, sender_address: &str) -> ComplianceReport {
    let has_unsubscribe_link = body.to_lowercase().contains("unsubscribe");
    // FIXME: an unresolved {{SenderAddress}} token satisfies this check even
    // though no address is rendered. Kept as-is until the intended rule is settled.
    let has_physical_address =
        body.contains(Placeholder::SenderAddress.token()) || !sender_address.is_empty();
    let word_count = body.split_whitespace().count();
    let link_count = URL_PATTERN.find_iter(body).count();

    let mut issues = Vec::new();
    if !has_unsubscribe_link {
        issues.push(ComplianceIssue::MissingUnsubscribeLink);
    }
    if !has_physical_address {
        issues.push(ComplianceIssue::MissingPhysicalAddress);
    }
    if word_count > MAX_RECOMMENDED_WORDS {
        issues.push(ComplianceIssue::TooLong { words: word_count });
    }
    if link_count > MAX_RECOMMENDED_LINKS {
        issues.push(ComplianceIssue::TooManyLinks { links: link_count });
    }

    let warnings: Vec<String> = issues.iter().map(ToString::to_string).collect();

    ComplianceReport {
        has_unsubscribe_link,
        has_physical_address,
        word_count,
        link_count,
        spam_score: spam_score(warnings.len()),
        passed: warnings.is_empty(),
        warnings,
    }
}
