//! Seeded mock metrics generator.
//!
//! A company identifier is hashed to a 32-bit integer which seeds a ChaCha8
//! stream. Every field draws from that stream in a fixed order, so the same
//! identifier always yields the same bundle, across runs and platforms.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::metrics::{
    AdvertisingMetrics, CompanyMetricsBundle, ContentMetrics, FEATURE_CATALOG, HiringMetrics, PricingTier,
    ReputationMetrics, SOCIAL_PLATFORMS, SeoMetrics, Sentiment, SocialMetrics, TechStackMetrics, TrafficMetrics,
    TrafficSource, WordCloudEntry,
};

const FRONTEND: [&str; 4] = ["React", "Vue.js", "Next.js", "Svelte"];
const BACKEND: [&str; 4] = ["Node.js", "Python", "Go", "Ruby on Rails"];
const ANALYTICS: [&str; 4] = ["Google Analytics", "Amplitude", "Mixpanel", "Hotjar"];
const AD_KEYWORDS: [&str; 5] = ["AI tools", "Data analytics", "Project management", "CRM software", "Cloud storage"];
const FOCUS_AREAS: [&str; 5] = ["Engineering", "Marketing", "Sales", "Product", "Data Science"];
const BLOG_FREQUENCIES: [&str; 3] = ["1 post / week", "2-3 posts / week", "2 posts / month"];
const TOPICS: [&str; 5] = [
    "Industry trends",
    "Customer stories",
    "Product tutorials",
    "Leadership",
    "Company culture",
];

/// String hash: `acc = code + ((acc << 5) - acc)` over UTF-16 units, wrapping at 32 bits.
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |acc, unit| {
        i32::from(unit).wrapping_add(acc.wrapping_shl(5).wrapping_sub(acc))
    })
}

/// Random stream for a company identifier.
pub fn seeded_rng(seed: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(u64::from(seed_hash(seed) as u32))
}

/// Fixed-point draw: an integer in `[min, max)` scaled down by `10^decimals`.
fn decimal<R: Rng>(rng: &mut R, min: u32, max: u32, decimals: i32) -> f64 {
    f64::from(rng.random_range(min..max)) / 10f64.powi(decimals)
}

/// Items whose draw in `[0, 10)` is above `threshold`.
fn subset<R: Rng>(rng: &mut R, items: &[&str], threshold: u32) -> Vec<String> {
    items
        .iter()
        .filter(|_| rng.random_range(0..10) > threshold)
        .map(|s| (*s).to_string())
        .collect()
}

/// Generate the metrics bundle for a company identifier.
pub fn generate(seed: &str) -> CompanyMetricsBundle {
    let mut rng = seeded_rng(seed);

    let seo = SeoMetrics {
        domain_authority: rng.random_range(40..90),
        keywords: rng.random_range(500..10_000),
        backlinks: rng.random_range(1_000..100_000),
    };

    let traffic = TrafficMetrics {
        monthly_visits: rng.random_range(10_000..500_000),
        sources: vec![
            source("Direct", rng.random_range(20..40)),
            source("Search", rng.random_range(40..60)),
            source("Social", rng.random_range(5..15)),
            source("Referral", rng.random_range(5..10)),
        ],
        bounce_rate: rng.random_range(25..60),
        avg_stay: decimal(&mut rng, 20, 80, 1),
    };

    let social_ranges = [
        ((5_000, 100_000), (100, 500)),
        ((10_000, 250_000), (200, 800)),
        ((2_000, 50_000), (50, 300)),
    ];
    let social = SOCIAL_PLATFORMS
        .iter()
        .zip(social_ranges)
        .map(|(platform, ((f_min, f_max), (e_min, e_max)))| SocialMetrics {
            platform: (*platform).to_string(),
            followers: rng.random_range(f_min..f_max),
            engagement_rate: decimal(&mut rng, e_min, e_max, 2),
        })
        .collect();

    let features = subset(&mut rng, &FEATURE_CATALOG, 3);

    let pricing = vec![
        tier("Basic", format!("${}/mo", rng.random_range(10..29u32)), &["Cloud Sync", "Basic Analytics"]),
        tier(
            "Pro",
            format!("${}/mo", rng.random_range(49..99u32)),
            &["Everything in Basic", "API Access", "24/7 Support"],
        ),
        tier(
            "Enterprise",
            "Contact us".to_string(),
            &["Everything in Pro", "SSO Integration", "Custom Branding"],
        ),
    ];

    let reputation = {
        let positive = rng.random_range(60..90);
        let neutral = rng.random_range(5..15);
        let negative = rng.random_range(5..15);
        let mut word_cloud = vec![
            word("Easy to use", rng.random_range(50..100), Sentiment::Pro),
            word("Great support", rng.random_range(40..80), Sentiment::Pro),
            word("Good value", rng.random_range(30..70), Sentiment::Pro),
            word("Reliable", rng.random_range(20..60), Sentiment::Pro),
            word("Slow", rng.random_range(20..50), Sentiment::Con),
            word("Buggy", rng.random_range(15..40), Sentiment::Con),
            word("Expensive", rng.random_range(10..30), Sentiment::Con),
        ];
        word_cloud.shuffle(&mut rng);
        ReputationMetrics {
            positive,
            neutral,
            negative,
            word_cloud,
        }
    };

    let tech_stack = TechStackMetrics {
        frontend: subset(&mut rng, &FRONTEND, 4),
        backend: subset(&mut rng, &BACKEND, 4),
        analytics: subset(&mut rng, &ANALYTICS, 4),
    };

    let advertising = AdvertisingMetrics {
        monthly_ad_spend: rng.random_range(5_000..50_000),
        top_keywords: subset(&mut rng, &AD_KEYWORDS, 4),
    };

    let hiring = HiringMetrics {
        open_roles: rng.random_range(5..50),
        focus_areas: subset(&mut rng, &FOCUS_AREAS, 4),
    };

    let frequency = rng.random_range(0..BLOG_FREQUENCIES.len() as u32) as usize;
    let content = ContentMetrics {
        blog_frequency: BLOG_FREQUENCIES[frequency].to_string(),
        top_topics: subset(&mut rng, &TOPICS, 4),
    };

    CompanyMetricsBundle {
        seo,
        traffic,
        social,
        features,
        pricing,
        reputation,
        tech_stack,
        advertising,
        hiring,
        content,
    }
}

fn source(name: &str, value: u32) -> TrafficSource {
    TrafficSource {
        name: name.to_string(),
        value,
    }
}

fn tier(name: &str, price: String, features: &[&str]) -> PricingTier {
    PricingTier {
        name: name.to_string(),
        price,
        features: features.iter().map(|f| (*f).to_string()).collect(),
    }
}

fn word(text: &str, value: u32, kind: Sentiment) -> WordCloudEntry {
    WordCloudEntry {
        text: text.to_string(),
        value,
        kind,
    }
}
