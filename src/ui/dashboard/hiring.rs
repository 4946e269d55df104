//! Hiring tab.

use eframe::egui::{self, RichText, Ui};

use super::ReportView;
use crate::report::insights::metric_by_company;
use crate::ui::charts;
use crate::ui::components::{colors, company_label, panel_header, section, tag};

pub fn show(ui: &mut Ui, view: &ReportView) {
    panel_header(ui, "Hiring & Talent", None);

    section(ui, "Hiring signals", |ui| {
        egui::Grid::new("hiring_grid")
            .num_columns(3)
            .spacing([30.0, 10.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label(RichText::new("Company").strong());
                ui.label(RichText::new("Open roles").strong());
                ui.label(RichText::new("Focus areas").strong());
                ui.end_row();

                for company in view.companies {
                    company_label(ui, company);
                    match view.report.get(&company.id) {
                        Some(bundle) => {
                            ui.monospace(bundle.hiring.open_roles.to_string());
                            ui.horizontal_wrapped(|ui| {
                                for area in &bundle.hiring.focus_areas {
                                    tag(ui, area);
                                }
                            });
                        }
                        None => {
                            ui.label("-");
                            ui.label("-");
                        }
                    }
                    ui.end_row();
                }
            });
    });

    ui.add_space(20.0);

    section(ui, "Open roles", |ui| {
        let data = metric_by_company(view.report, view.companies, |b| f64::from(b.hiring.open_roles));
        charts::bar_chart(ui, &data, colors::series(4), 240.0, &charts::compact);
    });
}
