//! Analysis module catalog.

use serde::{Deserialize, Serialize};

/// Identifier of an analysis module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleId {
    Seo,
    Traffic,
    Features,
    Social,
    Reputation,
    TechStack,
    Advertising,
    Hiring,
    Content,
}

impl ModuleId {
    /// Stable string key.
    pub fn key(&self) -> &'static str {
        match self {
            ModuleId::Seo => "seo",
            ModuleId::Traffic => "traffic",
            ModuleId::Features => "features",
            ModuleId::Social => "social",
            ModuleId::Reputation => "reputation",
            ModuleId::TechStack => "techStack",
            ModuleId::Advertising => "advertising",
            ModuleId::Hiring => "hiring",
            ModuleId::Content => "content",
        }
    }

    /// Catalog entry for this id.
    pub fn module(&self) -> &'static AnalysisModule {
        // Catalog is ordered by enum discriminant.
        &ALL_MODULES[*self as usize]
    }
}

/// A selectable analysis dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisModule {
    pub id: ModuleId,
    pub title: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// All modules, in display order.
pub const ALL_MODULES: [AnalysisModule; 9] = [
    AnalysisModule {
        id: ModuleId::Seo,
        title: "Website & SEO",
        description: "Site speed, domain authority, keyword rankings and backlink analysis.",
        required: true,
    },
    AnalysisModule {
        id: ModuleId::Traffic,
        title: "Traffic & User Behaviour",
        description: "Estimated monthly visits, traffic sources, bounce rate and average time on site.",
        required: false,
    },
    AnalysisModule {
        id: ModuleId::Features,
        title: "Product Features & Pricing",
        description: "Structured comparison of product features and pricing plans.",
        required: false,
    },
    AnalysisModule {
        id: ModuleId::Social,
        title: "Content & Social Media",
        description: "Posting cadence, social media reach, followers and engagement rate.",
        required: false,
    },
    AnalysisModule {
        id: ModuleId::Reputation,
        title: "Reviews & Brand Reputation",
        description: "Sentiment of customer reviews from the major platforms.",
        required: false,
    },
    AnalysisModule {
        id: ModuleId::TechStack,
        title: "Technology Stack",
        description: "Frontend frameworks, backend technologies and analytics tools in use.",
        required: false,
    },
    AnalysisModule {
        id: ModuleId::Advertising,
        title: "Online Advertising",
        description: "Paid search keywords, display creatives and estimated ad spend.",
        required: false,
    },
    AnalysisModule {
        id: ModuleId::Hiring,
        title: "Hiring & Talent",
        description: "Open roles and focus areas that hint at where a company is heading.",
        required: false,
    },
    AnalysisModule {
        id: ModuleId::Content,
        title: "Content Strategy",
        description: "Blog topics, content formats and publishing frequency in depth.",
        required: false,
    },
];

/// Modules that cannot be deselected.
pub fn required_modules() -> impl Iterator<Item = &'static AnalysisModule> {
    ALL_MODULES.iter().filter(|m| m.required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_ids() {
        for (idx, module) in ALL_MODULES.iter().enumerate() {
            assert_eq!(module.id as usize, idx);
            assert_eq!(module.id.module().title, module.title);
        }
    }

    #[test]
    fn test_only_seo_required() {
        let required: Vec<_> = required_modules().map(|m| m.id).collect();
        assert_eq!(required, vec![ModuleId::Seo]);
    }

    #[test]
    fn test_keys_serialize_as_camel_case() {
        let json = serde_json::to_string(&ModuleId::TechStack).unwrap();
        assert_eq!(json, format!("\"{}\"", ModuleId::TechStack.key()));
    }
}
