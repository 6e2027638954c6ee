//! Draft-level scores derived from the compliance report and the contact's
//! enrichment data. All scores are integers in 0 – 100.

use crate::compliance::checks::ComplianceReport;
use crate::models::contact::Contact;

const WARNING_PENALTY: u32 = 25;

const BASE_PERSONALIZATION: u32 = 20;
const FOCUS_BONUS: u32 = 25;
const THESIS_BONUS: u32 = 25;
const RESEARCH_NOTES_BONUS: u32 = 30;

/// Spam risk grows by 25 per warning, capped at 100.
pub fn spam_score(warning_count: usize) -> u32 {
    penalty(warning_count).min(100)
}

/// 100 for a passing report, otherwise 100 minus 25 per warning, floored at 0.
pub fn compliance_score(report: &ComplianceReport) -> u32 {
    if report.passed {
        return 100;
    }
    100u32.saturating_sub(penalty(report.warnings.len()))
}

/// Rewards enrichment data actually present on the contact. A `{{Focus}}`
/// rendered from the fallback text earns nothing.
pub fn personalization_score(contact: &Contact) -> u32 {
    let mut score = BASE_PERSONALIZATION;
    if contact.focus().is_some() {
        score += FOCUS_BONUS;
    }
    if contact.thesis().is_some() {
        score += THESIS_BONUS;
    }
    if contact.research_notes().is_some() {
        score += RESEARCH_NOTES_BONUS;
    }
    score.min(100)
}

fn penalty(warning_count: usize) -> u32 {
    u32::try_from(warning_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(WARNING_PENALTY)
}
