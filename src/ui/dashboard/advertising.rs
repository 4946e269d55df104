//! Online advertising tab.

use eframe::egui::{RichText, Ui};

use super::ReportView;
use crate::report::insights::metric_by_company;
use crate::ui::charts;
use crate::ui::components::{colors, company_label, panel_header, section};

pub fn show(ui: &mut Ui, view: &ReportView) {
    panel_header(ui, "Advertising", None);

    section(ui, "Estimated monthly ad spend (USD)", |ui| {
        let data = metric_by_company(view.report, view.companies, |b| f64::from(b.advertising.monthly_ad_spend));
        charts::bar_chart(ui, &data, colors::series(2), 260.0, &charts::dollars);
    });

    ui.add_space(20.0);

    section(ui, "Top paid keywords", |ui| {
        for chunk in view.companies.chunks(3) {
            ui.columns(3, |columns| {
                for (ui, company) in columns.iter_mut().zip(chunk) {
                    company_label(ui, company);
                    let keywords = view
                        .report
                        .get(&company.id)
                        .map(|b| b.advertising.top_keywords.as_slice())
                        .unwrap_or_default();
                    if keywords.is_empty() {
                        ui.label(RichText::new("No data").weak());
                    }
                    for keyword in keywords {
                        ui.label(RichText::new(format!("#{}", keyword)).color(colors::series(1)));
                    }
                }
            });
            ui.add_space(12.0);
        }
    });
}
