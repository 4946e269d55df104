//! Read-only views derived from a report for the dashboard tabs.
//!
//! Companies without a bundle read as zero or empty, so views never fail.

use crate::models::metrics::{FEATURE_CATALOG, ReputationMetrics, SOCIAL_PLATFORMS, WordCloudEntry};
use crate::models::{CompanyMetricsBundle, Competitor};

use super::AnalysisReport;

/// Radar chart axes, in drawing order.
pub const RADAR_AXES: [&str; 5] = ["SEO", "Traffic", "Features", "Social", "Reputation"];

/// Month offsets for the traffic trend, oldest first.
const TREND_MONTHS: [i32; 6] = [-5, -4, -3, -2, -1, 0];

/// One company's normalized overview scores.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub company: String,
    /// Values on the [`RADAR_AXES`], each within `[0, 100]`.
    pub values: [f64; 5],
}

/// Values for one point of a multi-company chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    /// One value per company, in company order.
    pub values: Vec<f64>,
}

/// Which companies offer a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub feature: &'static str,
    /// One flag per company, in company order.
    pub presence: Vec<bool>,
    /// Only the user's company (first entry) has it.
    pub unique_to_user: bool,
}

/// Review sentiment as percentages of all reviews.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentShares {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Social metric selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialMetric {
    Followers,
    Engagement,
}

/// Apply `f` to each company's bundle, zero when absent.
pub fn metric_by_company<F>(report: &AnalysisReport, companies: &[Competitor], f: F) -> Vec<(String, f64)>
where
    F: Fn(&CompanyMetricsBundle) -> f64,
{
    companies
        .iter()
        .map(|c| (c.name.clone(), report.get(&c.id).map(&f).unwrap_or(0.0)))
        .collect()
}

/// Normalized scores for the overview radar.
pub fn radar_profile(report: &AnalysisReport, companies: &[Competitor]) -> Vec<RadarSeries> {
    companies
        .iter()
        .map(|c| {
            let values = report
                .get(&c.id)
                .map(|b| {
                    [
                        f64::from(b.seo.domain_authority),
                        f64::from(b.traffic.monthly_visits) / 10_000.0,
                        b.features.len() as f64 * 10.0,
                        b.total_followers() as f64 / 10_000.0,
                        f64::from(b.reputation.positive),
                    ]
                    .map(|v| v.clamp(0.0, 100.0))
                })
                .unwrap_or([0.0; 5]);
            RadarSeries {
                company: c.name.clone(),
                values,
            }
        })
        .collect()
}

/// Six-month visit trend around each company's base traffic, rounded to thousands.
pub fn traffic_trend(report: &AnalysisReport, companies: &[Competitor]) -> Vec<SeriesPoint> {
    TREND_MONTHS
        .iter()
        .map(|&offset| {
            let label = if offset == 0 {
                "Today".to_string()
            } else {
                format!("{} mo ago", -offset)
            };
            let values = companies
                .iter()
                .map(|c| {
                    let base = report.get(&c.id).map(|b| f64::from(b.traffic.monthly_visits)).unwrap_or(0.0);
                    let first_unit = c.id.encode_utf16().next().unwrap_or(0);
                    let fluctuation = 1.0 + (f64::from(first_unit) + f64::from(offset)).sin() * 0.2;
                    (base * fluctuation / 1000.0).round() * 1000.0
                })
                .collect();
            SeriesPoint { label, values }
        })
        .collect()
}

/// Feature presence matrix over the full catalog.
///
/// The first company is treated as the user's own.
pub fn feature_matrix(report: &AnalysisReport, companies: &[Competitor]) -> Vec<FeatureRow> {
    FEATURE_CATALOG
        .iter()
        .map(|&feature| {
            let presence: Vec<bool> = companies
                .iter()
                .map(|c| report.get(&c.id).is_some_and(|b| b.has_feature(feature)))
                .collect();
            let unique_to_user = presence.first().copied().unwrap_or(false) && presence.iter().skip(1).all(|p| !p);
            FeatureRow {
                feature,
                presence,
                unique_to_user,
            }
        })
        .collect()
}

/// Positive/neutral/negative as shares of their sum.
pub fn sentiment_shares(reputation: &ReputationMetrics) -> SentimentShares {
    let total = f64::from(reputation.positive + reputation.neutral + reputation.negative);
    if total == 0.0 {
        return SentimentShares::default();
    }
    SentimentShares {
        positive: f64::from(reputation.positive) / total * 100.0,
        neutral: f64::from(reputation.neutral) / total * 100.0,
        negative: f64::from(reputation.negative) / total * 100.0,
    }
}

/// Relative font scale per word: `1 + value / max * 1.5`.
pub fn word_cloud_scales(words: &[WordCloudEntry]) -> Vec<(&WordCloudEntry, f32)> {
    let max = words.iter().map(|w| w.value).max().unwrap_or(0);
    words
        .iter()
        .map(|w| {
            let scale = if max == 0 {
                1.0
            } else {
                1.0 + w.value as f32 / max as f32 * 1.5
            };
            (w, scale)
        })
        .collect()
}

/// One point per platform with a value per company.
pub fn platform_series(report: &AnalysisReport, companies: &[Competitor], metric: SocialMetric) -> Vec<SeriesPoint> {
    SOCIAL_PLATFORMS
        .iter()
        .map(|&platform| SeriesPoint {
            label: platform.to_string(),
            values: companies
                .iter()
                .map(|c| {
                    report
                        .get(&c.id)
                        .and_then(|b| b.platform(platform))
                        .map(|s| match metric {
                            SocialMetric::Followers => f64::from(s.followers),
                            SocialMetric::Engagement => s.engagement_rate,
                        })
                        .unwrap_or(0.0)
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::metrics::Sentiment;

    fn companies() -> Vec<Competitor> {
        let mut list = vec![Competitor::user_company("mycorp.com")];
        list.extend(Competitor::seed_list().into_iter().take(2));
        list
    }

    #[test]
    fn test_radar_values_within_bounds() {
        let companies = companies();
        let report = AnalysisReport::for_companies(&companies);
        let radar = radar_profile(&report, &companies);
        assert_eq!(radar.len(), companies.len());
        for series in &radar {
            assert!(series.values.iter().all(|v| (0.0..=100.0).contains(v)));
        }
        let bundle = report.get("my-company").unwrap();
        assert_eq!(radar[0].values[0], f64::from(bundle.seo.domain_authority));
        assert_eq!(radar[0].values[2], bundle.features.len() as f64 * 10.0);
    }

    #[test]
    fn test_missing_bundle_reads_as_zero() {
        let companies = companies();
        let report = AnalysisReport::default();
        assert!(radar_profile(&report, &companies).iter().all(|s| s.values == [0.0; 5]));
        assert!(metric_by_company(&report, &companies, |b| f64::from(b.hiring.open_roles))
            .iter()
            .all(|(_, v)| *v == 0.0));
        assert!(feature_matrix(&report, &companies).iter().all(|r| !r.unique_to_user));
    }

    #[test]
    fn test_traffic_trend_shape() {
        let companies = companies();
        let report = AnalysisReport::for_companies(&companies);
        let trend = traffic_trend(&report, &companies);
        assert_eq!(trend.len(), 6);
        assert_eq!(trend[0].label, "5 mo ago");
        assert_eq!(trend[5].label, "Today");
        for point in &trend {
            assert_eq!(point.values.len(), companies.len());
            assert!(point.values.iter().all(|v| v % 1000.0 == 0.0));
        }
    }

    #[test]
    fn test_traffic_trend_stays_within_twenty_percent() {
        let companies = companies();
        let report = AnalysisReport::for_companies(&companies);
        for point in traffic_trend(&report, &companies) {
            for (company, value) in companies.iter().zip(&point.values) {
                let base = f64::from(report.get(&company.id).unwrap().traffic.monthly_visits);
                assert!(*value >= (base * 0.8 / 1000.0).floor() * 1000.0);
                assert!(*value <= (base * 1.2 / 1000.0).ceil() * 1000.0);
            }
        }
    }

    #[test]
    fn test_feature_matrix_unique_flag() {
        let companies = companies();
        let report = AnalysisReport::for_companies(&companies);
        let rows = feature_matrix(&report, &companies);
        assert_eq!(rows.len(), FEATURE_CATALOG.len());
        for row in rows {
            let expected = row.presence[0] && !row.presence[1] && !row.presence[2];
            assert_eq!(row.unique_to_user, expected, "{}", row.feature);
        }
    }

    #[test]
    fn test_sentiment_shares_sum_to_hundred() {
        let reputation = ReputationMetrics {
            positive: 70,
            neutral: 10,
            negative: 20,
            word_cloud: Vec::new(),
        };
        let shares = sentiment_shares(&reputation);
        assert!((shares.positive - 70.0).abs() < 1e-9);
        assert!((shares.positive + shares.neutral + shares.negative - 100.0).abs() < 1e-9);

        let empty = ReputationMetrics {
            positive: 0,
            neutral: 0,
            negative: 0,
            word_cloud: Vec::new(),
        };
        assert_eq!(sentiment_shares(&empty), SentimentShares::default());
    }

    #[test]
    fn test_word_cloud_scales() {
        let words = vec![
            WordCloudEntry {
                text: "Easy to use".to_string(),
                value: 80,
                kind: Sentiment::Pro,
            },
            WordCloudEntry {
                text: "Slow".to_string(),
                value: 40,
                kind: Sentiment::Con,
            },
        ];
        let scales = word_cloud_scales(&words);
        assert!((scales[0].1 - 2.5).abs() < f32::EPSILON);
        assert!((scales[1].1 - 1.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_platform_series() {
        let companies = companies();
        let report = AnalysisReport::for_companies(&companies);
        let followers = platform_series(&report, &companies, SocialMetric::Followers);
        assert_eq!(followers.len(), SOCIAL_PLATFORMS.len());
        assert_eq!(followers[1].label, "LinkedIn");
        let linkedin = report.get("c1").unwrap().platform("LinkedIn").unwrap();
        assert_eq!(followers[1].values[1], f64::from(linkedin.followers));

        let engagement = platform_series(&report, &companies, SocialMetric::Engagement);
        assert_eq!(engagement[0].values[0], report.get("my-company").unwrap().social[0].engagement_rate);
    }
}
