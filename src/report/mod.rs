//! Mock analysis report: generation, derived views and the summary stub.

pub mod generator;
pub mod insights;
pub mod summary;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::models::{CompanyMetricsBundle, Competitor};

pub use generator::generate;

/// Metrics for every company involved in one analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    bundles: BTreeMap<String, CompanyMetricsBundle>,
}

impl AnalysisReport {
    /// Generate bundles for exactly the given company identifiers.
    pub fn generate<'a>(company_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let bundles: BTreeMap<String, CompanyMetricsBundle> = company_ids
            .into_iter()
            .map(|id| (id.to_string(), generate(id)))
            .collect();
        info!("Generated mock metrics for {} companies", bundles.len());
        Self { bundles }
    }

    /// Generate bundles for a list of companies.
    pub fn for_companies(companies: &[Competitor]) -> Self {
        Self::generate(companies.iter().map(|c| c.id.as_str()))
    }

    pub fn get(&self, company_id: &str) -> Option<&CompanyMetricsBundle> {
        self.bundles.get(company_id)
    }

    /// Identifiers that have metrics, sorted.
    pub fn company_ids(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
