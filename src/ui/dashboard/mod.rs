//! Report dashboard: tab navigation, side panel and per-tab views.

mod action_items;
mod advertising;
mod content;
mod features;
mod hiring;
mod overview;
mod reputation;
mod seo;
mod social;
mod tech_stack;
mod traffic;

use std::sync::mpsc::{self, TryRecvError};

use chrono::NaiveDate;
use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_phosphor::regular::{
    ARROW_COUNTER_CLOCKWISE, CHECK_SQUARE_OFFSET, DOWNLOAD_SIMPLE, FILE_CODE, FILE_XLS, SQUARES_FOUR,
};
use tracing::warn;

use super::module_panel::module_icon;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::models::{AnalysisModule, Competitor, ModuleId, SortOrder, TaskList};
use crate::report::AnalysisReport;

/// Dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    ActionItems,
    Module(ModuleId),
}

impl DashboardTab {
    /// Get the display name for the tab.
    pub fn name(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview & Insights",
            DashboardTab::ActionItems => "Action Items",
            DashboardTab::Module(id) => match id {
                ModuleId::Seo => "SEO Analysis",
                ModuleId::Traffic => "Traffic Analysis",
                ModuleId::Features => "Features & Pricing",
                ModuleId::Social => "Social & Content",
                ModuleId::Reputation => "Brand Reputation",
                ModuleId::TechStack => "Tech Stack",
                ModuleId::Advertising => "Advertising",
                ModuleId::Hiring => "Hiring & Talent",
                ModuleId::Content => "Content Strategy",
            },
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Overview => SQUARES_FOUR,
            DashboardTab::ActionItems => CHECK_SQUARE_OFFSET,
            DashboardTab::Module(id) => module_icon(*id),
        }
    }
}

/// Overview and Action Items, then one tab per enabled module in catalog order.
pub fn enabled_tabs(modules: &[AnalysisModule]) -> Vec<DashboardTab> {
    [DashboardTab::Overview, DashboardTab::ActionItems]
        .into_iter()
        .chain(modules.iter().map(|m| DashboardTab::Module(m.id)))
        .collect()
}

/// AI summary request state.
#[derive(Debug, Default)]
pub enum SummaryState {
    /// Not requested yet.
    #[default]
    Idle,
    Pending(mpsc::Receiver<Result<String>>),
    Ready(String),
    /// Request failed or the channel closed without a value.
    Unavailable,
}

impl SummaryState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SummaryState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SummaryState::Pending(_))
    }

    /// Check the channel once without blocking.
    pub fn poll(&mut self) {
        let next = match self {
            SummaryState::Pending(rx) => match rx.try_recv() {
                Ok(Ok(text)) => Some(SummaryState::Ready(text)),
                Ok(Err(e)) => {
                    warn!("AI summary unavailable: {}", e);
                    Some(SummaryState::Unavailable)
                }
                Err(TryRecvError::Disconnected) => {
                    warn!("AI summary channel closed without a result");
                    Some(SummaryState::Unavailable)
                }
                Err(TryRecvError::Empty) => None,
            },
            _ => None,
        };
        if let Some(next) = next {
            *self = next;
        }
    }
}

/// Per-visit dashboard state. Dropped when a new analysis starts.
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub summary: SummaryState,
    pub tasks: TaskList,
    pub new_task_text: String,
    pub new_task_due: NaiveDate,
    pub sort_order: SortOrder,
}

impl DashboardState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_tab: DashboardTab::default(),
            summary: SummaryState::default(),
            tasks: TaskList::with_examples(),
            new_task_text: String::new(),
            new_task_due: today,
            sort_order: SortOrder::default(),
        }
    }
}

/// Read-only slice of the analysis shared by every tab.
pub struct ReportView<'a> {
    pub report: &'a AnalysisReport,
    /// User's company first, then competitors.
    pub companies: &'a [Competitor],
    pub modules: &'a [AnalysisModule],
}

impl ReportView<'_> {
    /// Company names in series order.
    pub fn names(&self) -> Vec<String> {
        self.companies.iter().map(|c| c.name.clone()).collect()
    }
}

/// Side panel action requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Export(ExportFormat),
    Reset,
}

/// Render the tab list and report actions.
pub fn show_side_panel(ctx: &egui::Context, state: &mut DashboardState, modules: &[AnalysisModule]) -> Action {
    let mut action = Action::None;

    egui::SidePanel::left("dashboard_tabs")
        .resizable(false)
        .exact_width(220.0)
        .show(ctx, |ui| {
            ui.add_space(15.0);
            ui.label(RichText::new("Analysis Report").size(20.0).strong());
            ui.add_space(15.0);

            ui.with_layout(Layout::top_down_justified(Align::LEFT), |ui| {
                for tab in enabled_tabs(modules) {
                    let label = RichText::new(format!("{}  {}", tab.icon(), tab.name())).size(14.0);
                    if ui.selectable_label(state.active_tab == tab, label).clicked() {
                        state.active_tab = tab;
                    }
                    ui.add_space(2.0);
                }
            });

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(10.0);

            ui.menu_button(format!("{}  Export report", DOWNLOAD_SIMPLE), |ui| {
                if ui.button(format!("{}  Excel workbook (.xlsx)", FILE_XLS)).clicked() {
                    action = Action::Export(ExportFormat::Excel);
                    ui.close();
                }
                if ui.button(format!("{}  JSON data (.json)", FILE_CODE)).clicked() {
                    action = Action::Export(ExportFormat::Json);
                    ui.close();
                }
            });

            ui.add_space(8.0);

            if ui
                .button(format!("{}  Start new analysis", ARROW_COUNTER_CLOCKWISE))
                .clicked()
            {
                action = Action::Reset;
            }
        });

    action
}

/// Render the active tab.
pub fn show(ui: &mut Ui, state: &mut DashboardState, view: &ReportView, today: NaiveDate) {
    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.add_space(10.0);
        match state.active_tab {
            DashboardTab::Overview => overview::show(ui, view, &state.summary, state.tasks.overdue_count(today)),
            DashboardTab::ActionItems => action_items::show(ui, state, today),
            DashboardTab::Module(id) => match id {
                ModuleId::Seo => seo::show(ui, view),
                ModuleId::Traffic => traffic::show(ui, view),
                ModuleId::Features => features::show(ui, view),
                ModuleId::Social => social::show(ui, view),
                ModuleId::Reputation => reputation::show(ui, view),
                ModuleId::TechStack => tech_stack::show(ui, view),
                ModuleId::Advertising => advertising::show(ui, view),
                ModuleId::Hiring => hiring::show(ui, view),
                ModuleId::Content => content::show(ui, view),
            },
        }
        ui.add_space(20.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::ALL_MODULES;
    use crate::models::module::required_modules;

    #[test]
    fn test_enabled_tabs_always_has_overview_and_actions() {
        let required: Vec<AnalysisModule> = required_modules().copied().collect();
        let tabs = enabled_tabs(&required);
        assert_eq!(
            tabs,
            vec![
                DashboardTab::Overview,
                DashboardTab::ActionItems,
                DashboardTab::Module(ModuleId::Seo)
            ]
        );
        assert_eq!(enabled_tabs(&[]).len(), 2);
    }

    #[test]
    fn test_enabled_tabs_follow_module_order() {
        let tabs = enabled_tabs(&ALL_MODULES);
        assert_eq!(tabs.len(), ALL_MODULES.len() + 2);
        for (tab, module) in tabs[2..].iter().zip(ALL_MODULES.iter()) {
            assert_eq!(*tab, DashboardTab::Module(module.id));
        }
    }

    #[test]
    fn test_summary_poll_ready() {
        let (tx, rx) = mpsc::channel();
        let mut state = SummaryState::Pending(rx);
        state.poll();
        assert!(state.is_pending());

        tx.send(Ok("summary".to_string())).unwrap();
        state.poll();
        assert!(matches!(state, SummaryState::Ready(ref text) if text == "summary"));
    }

    #[test]
    fn test_summary_poll_error_is_unavailable() {
        let (tx, rx) = mpsc::channel();
        tx.send(Err(AppError::summary("boom"))).unwrap();
        let mut state = SummaryState::Pending(rx);
        state.poll();
        assert!(matches!(state, SummaryState::Unavailable));
    }

    #[test]
    fn test_summary_poll_closed_channel_is_unavailable() {
        let (tx, rx) = mpsc::channel::<Result<String>>();
        drop(tx);
        let mut state = SummaryState::Pending(rx);
        state.poll();
        assert!(matches!(state, SummaryState::Unavailable));
    }

    #[test]
    fn test_new_state_starts_on_overview() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
        let state = DashboardState::new(today);
        assert_eq!(state.active_tab, DashboardTab::Overview);
        assert!(state.summary.is_idle());
        assert_eq!(state.new_task_due, today);
        assert_eq!(state.tasks.len(), 3);
    }
}
