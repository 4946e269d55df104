//! Fabricated per-company metrics, one struct per category.

use serde::{Deserialize, Serialize};

/// Every feature the pricing module compares.
pub const FEATURE_CATALOG: [&str; 7] = [
    "Cloud Sync",
    "API Access",
    "24/7 Support",
    "Advanced Analytics",
    "SSO Integration",
    "Team Collaboration",
    "Custom Branding",
];

/// Social platforms tracked, in display order.
pub const SOCIAL_PLATFORMS: [&str; 3] = ["X", "LinkedIn", "Facebook"];

/// Complete metrics for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyMetricsBundle {
    pub seo: SeoMetrics,
    pub traffic: TrafficMetrics,
    pub social: Vec<SocialMetrics>,
    pub features: Vec<String>,
    pub pricing: Vec<PricingTier>,
    pub reputation: ReputationMetrics,
    pub tech_stack: TechStackMetrics,
    pub advertising: AdvertisingMetrics,
    pub hiring: HiringMetrics,
    pub content: ContentMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetrics {
    pub domain_authority: u32,
    pub keywords: u32,
    pub backlinks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficMetrics {
    pub monthly_visits: u32,
    pub sources: Vec<TrafficSource>,
    /// Percent.
    pub bounce_rate: u32,
    /// Minutes.
    pub avg_stay: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSource {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMetrics {
    pub platform: String,
    pub followers: u32,
    /// Percent.
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationMetrics {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub word_cloud: Vec<WordCloudEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Pro,
    Con,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloudEntry {
    pub text: String,
    pub value: u32,
    pub kind: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStackMetrics {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub analytics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisingMetrics {
    /// USD.
    pub monthly_ad_spend: u32,
    pub top_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiringMetrics {
    pub open_roles: u32,
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub blog_frequency: String,
    pub top_topics: Vec<String>,
}

impl CompanyMetricsBundle {
    /// Followers summed over all platforms.
    pub fn total_followers(&self) -> u64 {
        self.social.iter().map(|s| u64::from(s.followers)).sum()
    }

    /// Metrics for a named platform.
    pub fn platform(&self, name: &str) -> Option<&SocialMetrics> {
        self.social.iter().find(|s| s.platform == name)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}
