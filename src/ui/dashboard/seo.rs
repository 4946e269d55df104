//! SEO tab.

use eframe::egui::{self, RichText, Ui};

use super::ReportView;
use crate::report::insights::metric_by_company;
use crate::ui::charts;
use crate::ui::components::{colors, company_label, format_thousands, panel_header, section};

pub fn show(ui: &mut Ui, view: &ReportView) {
    panel_header(ui, "SEO Analysis", None);

    section(ui, "Key SEO metrics", |ui| {
        egui::Grid::new("seo_grid")
            .num_columns(4)
            .spacing([40.0, 10.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label(RichText::new("Company").strong());
                ui.label(RichText::new("Domain authority").strong());
                ui.label(RichText::new("Organic keywords").strong());
                ui.label(RichText::new("Backlinks").strong());
                ui.end_row();

                for company in view.companies {
                    company_label(ui, company);
                    match view.report.get(&company.id) {
                        Some(bundle) => {
                            ui.monospace(bundle.seo.domain_authority.to_string());
                            ui.monospace(format_thousands(u64::from(bundle.seo.keywords)));
                            ui.monospace(format_thousands(u64::from(bundle.seo.backlinks)));
                        }
                        None => {
                            ui.label("-");
                            ui.label("-");
                            ui.label("-");
                        }
                    }
                    ui.end_row();
                }
            });
    });

    ui.add_space(20.0);

    let charts_data = [
        (
            "Domain authority",
            metric_by_company(view.report, view.companies, |b| f64::from(b.seo.domain_authority)),
            colors::series(0),
        ),
        (
            "Organic keywords",
            metric_by_company(view.report, view.companies, |b| f64::from(b.seo.keywords)),
            colors::series(1),
        ),
        (
            "Backlinks",
            metric_by_company(view.report, view.companies, |b| f64::from(b.seo.backlinks)),
            colors::series(2),
        ),
    ];

    ui.columns(3, |columns| {
        for (ui, (title, data, color)) in columns.iter_mut().zip(charts_data.iter()) {
            section(ui, title, |ui| {
                charts::bar_chart(ui, data, *color, 240.0, &charts::compact);
            });
        }
    });
}
