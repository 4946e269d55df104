//! Step flow controller for the analysis walkthrough.
//!
//! Landing -> CompetitorSelection -> ModuleSelection -> Loading -> Dashboard,
//! with [`AnalysisWizard::reset`] returning to Landing from anywhere.

pub mod competitors;
pub mod modules;

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::models::{AnalysisModule, Competitor};
use crate::report::AnalysisReport;

pub use competitors::CompetitorSelection;
pub use modules::ModuleSelection;

/// Current wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Landing,
    CompetitorSelection,
    ModuleSelection,
    /// Simulated analysis; ends at the deadline.
    Loading { until: Instant },
    Dashboard,
}

impl Step {
    pub const COUNT: usize = 5;

    /// Display names in flow order.
    pub const LABELS: [&'static str; Step::COUNT] = ["Start", "Competitors", "Modules", "Analysing", "Report"];

    /// Get the display name for the step.
    pub fn name(&self) -> &'static str {
        Self::LABELS[self.index()]
    }

    /// Zero-based position for the step indicator.
    pub fn index(&self) -> usize {
        match self {
            Step::Landing => 0,
            Step::CompetitorSelection => 1,
            Step::ModuleSelection => 2,
            Step::Loading { .. } => 3,
            Step::Dashboard => 4,
        }
    }
}

/// Wizard state owned by the top-level app.
#[derive(Debug, Clone)]
pub struct AnalysisWizard {
    step: Step,
    user_url: String,
    competitor_selection: CompetitorSelection,
    module_selection: ModuleSelection,
    competitors: Vec<Competitor>,
    modules: Vec<AnalysisModule>,
    report: AnalysisReport,
    loading_delay: Duration,
    /// Survives reset so manual competitors never reuse an id.
    next_manual_id: u32,
}

impl AnalysisWizard {
    pub fn new(loading_delay: Duration) -> Self {
        let module_selection = ModuleSelection::new();
        Self {
            step: Step::Landing,
            user_url: String::new(),
            competitor_selection: CompetitorSelection::new(),
            modules: module_selection.confirm(),
            module_selection,
            competitors: Vec::new(),
            report: AnalysisReport::default(),
            loading_delay,
            next_manual_id: 1,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn user_url(&self) -> &str {
        &self.user_url
    }

    pub fn competitor_selection(&self) -> &CompetitorSelection {
        &self.competitor_selection
    }

    pub fn competitor_selection_mut(&mut self) -> &mut CompetitorSelection {
        &mut self.competitor_selection
    }

    pub fn module_selection(&self) -> &ModuleSelection {
        &self.module_selection
    }

    pub fn module_selection_mut(&mut self) -> &mut ModuleSelection {
        &mut self.module_selection
    }

    /// Competitors confirmed for the analysis.
    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    /// Modules confirmed for the analysis.
    pub fn modules(&self) -> &[AnalysisModule] {
        &self.modules
    }

    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }

    /// The user's company followed by the confirmed competitors.
    pub fn companies(&self) -> Vec<Competitor> {
        std::iter::once(Competitor::user_company(&self.user_url))
            .chain(self.competitors.iter().cloned())
            .collect()
    }

    /// Landing -> CompetitorSelection. Rejects a blank URL.
    pub fn start(&mut self, url: &str) -> bool {
        if self.step != Step::Landing {
            return false;
        }
        let url = url.trim();
        if url.is_empty() {
            warn!("Ignoring start with empty URL");
            return false;
        }
        self.user_url = url.to_string();
        self.competitor_selection = CompetitorSelection::starting_at(self.next_manual_id);
        self.step = Step::CompetitorSelection;
        info!("Starting analysis for {}", self.user_url);
        true
    }

    /// CompetitorSelection -> ModuleSelection. Rejects an empty selection.
    pub fn confirm_competitors(&mut self) -> bool {
        if self.step != Step::CompetitorSelection {
            return false;
        }
        let chosen = self.competitor_selection.confirm();
        if chosen.is_empty() {
            warn!("No competitors selected");
            return false;
        }
        info!("Confirmed {} competitors", chosen.len());
        self.competitors = chosen;
        self.step = Step::ModuleSelection;
        true
    }

    /// ModuleSelection -> Loading. Generates the report for every involved company.
    pub fn confirm_modules(&mut self, now: Instant) -> bool {
        if self.step != Step::ModuleSelection {
            return false;
        }
        self.modules = self.module_selection.confirm();
        self.report = AnalysisReport::for_companies(&self.companies());
        self.step = Step::Loading {
            until: now + self.loading_delay,
        };
        info!(
            "Analysis confirmed with modules: {}",
            self.modules.iter().map(|m| m.id.key()).collect::<Vec<_>>().join(", ")
        );
        true
    }

    /// Loading -> Dashboard once the deadline has passed.
    ///
    /// Returns `true` on the frame the dashboard is entered.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.step {
            Step::Loading { until } if now >= until => {
                self.step = Step::Dashboard;
                info!("Analysis ready");
                true
            }
            _ => false,
        }
    }

    /// Time left on the loading screen.
    pub fn loading_remaining(&self, now: Instant) -> Option<Duration> {
        match self.step {
            Step::Loading { until } => Some(until.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Back to Landing with all choices cleared.
    pub fn reset(&mut self) {
        info!("Resetting analysis");
        let next_manual_id = self.next_manual_id.max(self.competitor_selection.next_manual_id());
        *self = Self::new(self.loading_delay);
        self.next_manual_id = next_manual_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModuleId, USER_COMPANY_ID};

    fn wizard() -> AnalysisWizard {
        AnalysisWizard::new(Duration::from_millis(3500))
    }

    #[test]
    fn test_step_labels_follow_index() {
        assert_eq!(Step::Landing.name(), "Start");
        assert_eq!(Step::Loading { until: Instant::now() }.name(), "Analysing");
        assert_eq!(Step::Dashboard.index(), Step::COUNT - 1);
    }

    #[test]
    fn test_start_rejects_blank_url() {
        let mut w = wizard();
        assert!(!w.start("   "));
        assert_eq!(w.step(), Step::Landing);
        assert!(w.start(" mycorp.com "));
        assert_eq!(w.step(), Step::CompetitorSelection);
        assert_eq!(w.user_url(), "mycorp.com");
    }

    #[test]
    fn test_transitions_only_from_expected_step() {
        let mut w = wizard();
        assert!(!w.confirm_competitors());
        assert!(!w.confirm_modules(Instant::now()));
        assert!(!w.tick(Instant::now()));
        assert_eq!(w.step(), Step::Landing);
    }

    #[test]
    fn test_confirm_competitors_requires_selection() {
        let mut w = wizard();
        w.start("mycorp.com");
        let ids: Vec<String> = w.competitor_selection().candidates().iter().map(|c| c.id.clone()).collect();
        for id in &ids {
            w.competitor_selection_mut().toggle(id);
        }
        assert!(!w.confirm_competitors());
        assert_eq!(w.step(), Step::CompetitorSelection);

        w.competitor_selection_mut().toggle("c3");
        assert!(w.confirm_competitors());
        assert_eq!(w.step(), Step::ModuleSelection);
        assert_eq!(w.competitors().len(), 1);
    }

    #[test]
    fn test_full_flow_and_report_invariant() {
        let mut w = wizard();
        w.start("mycorp.com");
        w.competitor_selection_mut().toggle("c1");
        w.competitor_selection_mut().add_manual("newcomer.io");
        assert!(w.confirm_competitors());

        w.module_selection_mut().toggle(ModuleId::Traffic);
        let t0 = Instant::now();
        assert!(w.confirm_modules(t0));
        assert!(matches!(w.step(), Step::Loading { .. }));

        let mut expected: Vec<String> = w.competitors().iter().map(|c| c.id.clone()).collect();
        expected.push(USER_COMPANY_ID.to_string());
        expected.sort();
        let actual: Vec<String> = w.report().company_ids().map(str::to_string).collect();
        assert_eq!(actual, expected);

        let enabled: Vec<ModuleId> = w.modules().iter().map(|m| m.id).collect();
        assert_eq!(enabled, vec![ModuleId::Seo, ModuleId::Traffic]);

        assert!(!w.tick(t0 + Duration::from_millis(3499)));
        assert_eq!(w.loading_remaining(t0), Some(Duration::from_millis(3500)));
        assert!(w.tick(t0 + Duration::from_millis(3500)));
        assert_eq!(w.step(), Step::Dashboard);
        assert!(!w.tick(t0 + Duration::from_secs(10)));

        let companies = w.companies();
        assert_eq!(companies[0].id, USER_COMPANY_ID);
        assert_eq!(companies.len(), w.competitors().len() + 1);
    }

    #[test]
    fn test_reset_from_dashboard() {
        let mut w = wizard();
        w.start("mycorp.com");
        w.confirm_competitors();
        w.module_selection_mut().toggle(ModuleId::Hiring);
        let t0 = Instant::now();
        w.confirm_modules(t0);
        w.tick(t0 + Duration::from_secs(5));

        w.reset();
        assert_eq!(w.step(), Step::Landing);
        assert!(w.user_url().is_empty());
        assert!(w.competitors().is_empty());
        assert!(w.report().is_empty());
        let enabled: Vec<ModuleId> = w.modules().iter().map(|m| m.id).collect();
        assert_eq!(enabled, vec![ModuleId::Seo]);
        assert!(!w.module_selection().is_selected(ModuleId::Hiring));
    }

    #[test]
    fn test_manual_ids_not_reused_after_reset() {
        let mut w = wizard();
        w.start("mycorp.com");
        let first = w.competitor_selection_mut().add_manual("newcomer.io").cloned().unwrap();
        w.reset();

        w.start("mycorp.com");
        let second = w.competitor_selection_mut().add_manual("newcomer.io").cloned().unwrap();
        w.reset();
        w.reset();
        w.start("mycorp.com");
        let third = w.competitor_selection_mut().add_manual("newcomer.io").cloned().unwrap();
        assert_eq!(first.id, "manual-1");
        assert_eq!(second.id, "manual-2");
        assert_eq!(third.id, "manual-3");
        assert!(w.competitor_selection().is_selected("manual-3"));
        assert!(!w.competitor_selection().is_selected("manual-1"));
    }

    #[test]
    fn test_reset_from_loading() {
        let mut w = wizard();
        w.start("mycorp.com");
        w.confirm_competitors();
        w.confirm_modules(Instant::now());
        w.reset();
        assert_eq!(w.step(), Step::Landing);
        assert_eq!(w.loading_remaining(Instant::now()), None);
    }

    #[test]
    fn test_zero_delay_enters_dashboard_on_first_tick() {
        let mut w = AnalysisWizard::new(Duration::ZERO);
        w.start("mycorp.com");
        w.confirm_competitors();
        let t0 = Instant::now();
        w.confirm_modules(t0);
        assert!(w.tick(t0));
    }
}
