//! Overview tab: headline numbers, AI summary and competitive radar.

use eframe::egui::{RichText, Ui};
use egui_phosphor::regular::SPARKLE;

use super::{ReportView, SummaryState};
use crate::report::insights::{RADAR_AXES, radar_profile};
use crate::report::summary::SUMMARY_UNAVAILABLE;
use crate::ui::charts;
use crate::ui::components::{panel_header, rich_paragraphs, section, stat_card};

pub fn show(ui: &mut Ui, view: &ReportView, summary: &SummaryState, overdue: usize) {
    panel_header(ui, "Overview & Insights", None);

    // Stat cards row
    ui.horizontal(|ui| {
        stat_card(
            ui,
            "Competitors",
            &view.companies.len().saturating_sub(1).to_string(),
            "Companies compared",
        );
        stat_card(ui, "Modules", &view.modules.len().to_string(), "Dimensions analysed");
        stat_card(ui, "Overdue actions", &overdue.to_string(), "Past their due date");
    });

    ui.add_space(20.0);

    section(ui, &format!("{} AI-generated insights", SPARKLE), |ui| match summary {
        SummaryState::Idle | SummaryState::Pending(_) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Writing your SWOT summary...").weak());
            });
        }
        SummaryState::Ready(text) => rich_paragraphs(ui, text),
        SummaryState::Unavailable => {
            ui.label(RichText::new(SUMMARY_UNAVAILABLE).weak());
        }
    });

    ui.add_space(20.0);

    section(ui, "Competitive landscape", |ui| {
        let series = radar_profile(view.report, view.companies);
        charts::radar_chart(ui, &RADAR_AXES, &series, 380.0);
        ui.add_space(8.0);
        charts::legend(ui, &view.names());
    });
}
