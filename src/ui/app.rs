//! Main application UI.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use eframe::egui::{self, Align, Layout, RichText};
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, MOON, SUN};
use tokio::runtime::Runtime;

use crate::config::AppConfig;
use crate::export::{self, ExportFormat};
use crate::models::Competitor;
use crate::report::summary::spawn_summary;
use crate::wizard::{AnalysisWizard, Step};

use super::components::colors;
use super::dashboard::{self, DashboardState, DashboardTab, ReportView};
use super::{competitor_panel, landing, loader, module_panel};

/// Prefix for exported report files.
const EXPORT_PREFIX: &str = "competitor_report";

/// Main application state.
pub struct RivalLensApp {
    config: AppConfig,
    config_path: PathBuf,
    rt: Runtime,

    // Walkthrough
    wizard: AnalysisWizard,
    url_input: String,
    manual_url_input: String,

    // Dashboard, present only while the report is shown
    dashboard: Option<DashboardState>,
    companies: Vec<Competitor>,

    // Dialogs
    error_message: Option<String>,
    success_message: Option<String>,
}

impl RivalLensApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        config_path: PathBuf,
        rt: Runtime,
        initial_error: Option<String>,
    ) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        apply_theme(&cc.egui_ctx, config.ui.dark_mode);

        Self {
            wizard: AnalysisWizard::new(config.analysis.loading_delay()),
            config,
            config_path,
            rt,
            url_input: String::new(),
            manual_url_input: String::new(),
            dashboard: None,
            companies: Vec::new(),
            error_message: initial_error,
            success_message: None,
        }
    }

    /// Advance time-driven state and poll async results.
    fn poll_async_results(&mut self, now: Instant) {
        if self.wizard.tick(now) {
            self.enter_dashboard();
        }

        if let Some(dashboard) = &mut self.dashboard {
            // The summary is requested the first time the overview is shown
            if dashboard.active_tab == DashboardTab::Overview && dashboard.summary.is_idle() {
                let rx = spawn_summary(&self.rt, &self.companies, self.config.analysis.summary_delay());
                dashboard.summary = dashboard::SummaryState::Pending(rx);
            }
            dashboard.summary.poll();
        }
    }

    fn enter_dashboard(&mut self) {
        self.companies = self.wizard.companies();
        self.dashboard = Some(DashboardState::new(Local::now().date_naive()));
    }

    /// Back to the landing page with everything cleared.
    fn reset(&mut self) {
        self.wizard.reset();
        self.dashboard = None;
        self.companies.clear();
        self.url_input.clear();
        self.manual_url_input.clear();
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.ui.dark_mode = !self.config.ui.dark_mode;
        apply_theme(ctx, self.config.ui.dark_mode);

        if let Err(e) = self.save_config() {
            tracing::error!("Failed to save config: {}", e);
            self.error_message = Some(format!("Failed to save settings: {}", e));
        }
    }

    fn save_config(&self) -> crate::Result<()> {
        self.config.save(&self.config_path)?;
        Ok(())
    }

    /// Ask for a target file and write the report there.
    fn export_report(&mut self, format: ExportFormat) {
        let default_name = export::generate_export_filename(EXPORT_PREFIX, format);
        let Some(path) = export::show_save_dialog(&default_name, format, self.config.export.directory.as_deref())
        else {
            return;
        };

        match export::export_report(format, self.wizard.report(), &self.companies, self.wizard.modules(), &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Render step indicator and global actions.
    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").min_height(36.0).show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(RichText::new("Rival Lens").strong().size(16.0));
                ui.add_space(20.0);

                let current = self.wizard.step().index();
                for (i, label) in Step::LABELS.iter().enumerate() {
                    if i > 0 {
                        ui.label(RichText::new("›").weak());
                    }
                    let text = RichText::new(format!("{}. {}", i + 1, label));
                    if i == current {
                        ui.label(text.strong().color(colors::series(0)));
                    } else if i < current {
                        ui.label(text);
                    } else {
                        ui.label(text.weak());
                    }
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let theme_icon = if self.config.ui.dark_mode { SUN } else { MOON };
                    if ui.button(theme_icon).on_hover_text("Toggle dark mode").clicked() {
                        self.toggle_theme(ui.ctx());
                    }

                    if self.wizard.step() != Step::Landing
                        && ui
                            .button(format!("{} Start over", ARROW_COUNTER_CLOCKWISE))
                            .clicked()
                    {
                        self.reset();
                    }
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    if self.wizard.user_url().is_empty() {
                        ui.label("No analysis running");
                    } else {
                        ui.label(format!(
                            "Analysing {} against {} competitors",
                            self.wizard.user_url(),
                            self.wizard.competitor_selection().selected_count()
                        ));
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self
                            .dashboard
                            .as_ref()
                            .is_some_and(|d| d.summary.is_pending())
                        {
                            ui.label("Generating AI summary...");
                            ui.spinner();
                        }
                    });
                });
            });
    }

    /// Render modal dialogs (error, success).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }
    }

    /// Render the dashboard step: side panel plus the active tab.
    fn show_dashboard(&mut self, ctx: &egui::Context) {
        let today = Local::now().date_naive();
        let Some(state) = self.dashboard.as_mut() else {
            return;
        };

        let action = dashboard::show_side_panel(ctx, state, self.wizard.modules());

        let view = ReportView {
            report: self.wizard.report(),
            companies: &self.companies,
            modules: self.wizard.modules(),
        };
        egui::CentralPanel::default().show(ctx, |ui| dashboard::show(ui, state, &view, today));

        match action {
            dashboard::Action::None => {}
            dashboard::Action::Export(format) => self.export_report(format),
            dashboard::Action::Reset => self.reset(),
        }
    }
}

impl eframe::App for RivalLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Poll async results
        self.poll_async_results(now);

        // Request repaint while waiting on the loader or the summary
        if matches!(self.wizard.step(), Step::Loading { .. })
            || self.dashboard.as_ref().is_some_and(|d| d.summary.is_pending())
        {
            ctx.request_repaint();
        }

        // Top bar
        self.show_top_bar(ctx);

        // Status bar
        self.show_status_bar(ctx);

        // Modal dialogs (error, success)
        self.show_dialogs(ctx);

        // Main content
        match self.wizard.step() {
            Step::Dashboard => self.show_dashboard(ctx),
            Step::Landing => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if landing::show(ui, &mut self.url_input) {
                        self.wizard.start(&self.url_input);
                    }
                });
            }
            Step::CompetitorSelection => {
                let user_url = self.wizard.user_url().to_string();
                egui::CentralPanel::default().show(ctx, |ui| {
                    let action = competitor_panel::show(
                        ui,
                        self.wizard.competitor_selection_mut(),
                        &mut self.manual_url_input,
                        &user_url,
                    );
                    if action == competitor_panel::Action::Confirm {
                        self.wizard.confirm_competitors();
                    }
                });
            }
            Step::ModuleSelection => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if module_panel::show(ui, self.wizard.module_selection_mut()) {
                        self.wizard.confirm_modules(Instant::now());
                    }
                });
            }
            Step::Loading { .. } => {
                let remaining = self.wizard.loading_remaining(now).unwrap_or_default();
                let total = self.config.analysis.loading_delay();
                let company_count = self.wizard.competitors().len() + 1;
                egui::CentralPanel::default().show(ctx, |ui| {
                    loader::show(ui, remaining, total, company_count);
                });
            }
        }
    }
}

/// Switch between the light and dark egui themes.
fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}
