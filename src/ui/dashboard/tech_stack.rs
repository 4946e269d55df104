//! Technology stack tab.

use eframe::egui::{self, RichText, Ui};

use super::ReportView;
use crate::ui::components::{company_label, panel_header, section, tag};

pub fn show(ui: &mut Ui, view: &ReportView) {
    panel_header(ui, "Tech Stack", None);

    section(ui, "Technology comparison", |ui| {
        egui::Grid::new("tech_stack_grid")
            .num_columns(4)
            .spacing([30.0, 10.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label(RichText::new("Company").strong());
                ui.label(RichText::new("Frontend").strong());
                ui.label(RichText::new("Backend").strong());
                ui.label(RichText::new("Analytics").strong());
                ui.end_row();

                for company in view.companies {
                    company_label(ui, company);
                    let stack = view.report.get(&company.id).map(|b| &b.tech_stack);
                    for column in [
                        stack.map(|s| s.frontend.as_slice()),
                        stack.map(|s| s.backend.as_slice()),
                        stack.map(|s| s.analytics.as_slice()),
                    ] {
                        ui.horizontal_wrapped(|ui| {
                            for tech in column.unwrap_or_default() {
                                tag(ui, tech);
                            }
                        });
                    }
                    ui.end_row();
                }
            });
    });
}
