//! Stand-in for an AI-generated SWOT summary.
//!
//! The request always answers with the same text after a fixed delay. It is
//! spawned once per dashboard visit and never retried or cancelled.

use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Runtime;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::models::Competitor;

/// Shown whenever a summary cannot be produced.
pub const SUMMARY_UNAVAILABLE: &str = "The AI summary is unavailable right now.";

/// Fixed summary text.
pub const MOCK_SUMMARY: &str = "\
Based on the analysis, **your company** shows strong potential but faces fierce competition from \
established players such as **Innovate Inc.** and **Synergy Solutions**.

**Strengths:** Your feature mix, especially custom branding, is a clear differentiator. User \
reputation is solid, with \"easy to use\" among the most frequent positive mentions.

**Weaknesses:** SEO and organic traffic trail the competition. Innovate Inc. dominates keyword \
rankings and your backlink count is noticeably lower. Social engagement is steady but lacks the \
reach Future Forward has on LinkedIn.

**Opportunities:** Targeted content marketing and SEO investment can close the traffic gap and win \
share. Competitive Pro plan pricing aimed at the mid-market can draw customers away from the \
pricier Synergy Solutions.

**Threats:** Quantum Leap's aggressive entry-level pricing may hurt acquisition at the low end, and \
Apex Digital's fast follower growth signals a brand push that could challenge your position soon.";

/// Produce the SWOT summary for the user's company and its competitors.
///
/// Fails only when the user's company URL is missing.
pub async fn generate_swot_summary(user_url: &str, competitors: &[Competitor], delay: Duration) -> Result<String> {
    if user_url.trim().is_empty() {
        return Err(AppError::summary("user company URL is unknown"));
    }
    debug!("Requesting summary for {} against {} competitors", user_url, competitors.len());
    tokio::time::sleep(delay).await;
    Ok(MOCK_SUMMARY.trim().to_string())
}

/// Spawn the summary request on `rt`; the result arrives on the returned channel.
///
/// `companies` starts with the user's company, followed by its competitors.
pub fn spawn_summary(rt: &Runtime, companies: &[Competitor], delay: Duration) -> mpsc::Receiver<Result<String>> {
    let (tx, rx) = mpsc::channel();
    let user_url = companies.first().map(|c| c.url.clone()).unwrap_or_default();
    let competitors: Vec<Competitor> = companies.iter().skip(1).cloned().collect();

    rt.spawn(async move {
        let result = generate_swot_summary(&user_url, &competitors, delay).await;
        if let Err(e) = &result {
            warn!("Failed to generate AI summary: {}", e);
        }
        let _ = tx.send(result);
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_resolves_fixed_text() {
        let competitors = Competitor::seed_list();
        let text = generate_swot_summary("mycorp.com", &competitors, Duration::from_millis(5))
            .await
            .unwrap();
        assert_eq!(text, MOCK_SUMMARY.trim());
    }

    #[tokio::test]
    async fn test_summary_requires_user_url() {
        let result = generate_swot_summary("  ", &[], Duration::ZERO).await;
        assert!(matches!(result, Err(AppError::Summary(_))));
    }

    #[test]
    fn test_spawn_summary_delivers_over_channel() {
        let rt = Runtime::new().unwrap();
        let mut companies = vec![Competitor::user_company("mycorp.com")];
        companies.extend(Competitor::seed_list());

        let rx = spawn_summary(&rt, &companies, Duration::from_millis(10));
        let result = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result.unwrap(), MOCK_SUMMARY.trim());
    }

    #[test]
    fn test_spawn_summary_without_companies_fails() {
        let rt = Runtime::new().unwrap();
        let rx = spawn_summary(&rt, &[], Duration::ZERO);
        let result = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(result.is_err());
    }
}
