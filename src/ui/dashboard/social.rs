//! Social media tab.

use eframe::egui::{RichText, Ui};

use super::ReportView;
use crate::report::insights::{SocialMetric, platform_series};
use crate::ui::charts;
use crate::ui::components::{company_label, format_thousands, panel_header, section};

pub fn show(ui: &mut Ui, view: &ReportView) {
    panel_header(ui, "Social & Content", None);

    // Follower cards, three per row
    for chunk in view.companies.chunks(3) {
        ui.columns(3, |columns| {
            for (ui, company) in columns.iter_mut().zip(chunk) {
                section(ui, &company.name, |ui| {
                    company_label(ui, company);
                    ui.add_space(4.0);
                    if let Some(bundle) = view.report.get(&company.id) {
                        for social in &bundle.social {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(format!("{} followers:", social.platform)).weak());
                                ui.monospace(format_thousands(u64::from(social.followers)));
                            });
                        }
                    }
                });
            }
        });
        ui.add_space(10.0);
    }

    ui.add_space(10.0);

    let names = view.names();

    section(ui, "Followers by platform", |ui| {
        let points = platform_series(view.report, view.companies, SocialMetric::Followers);
        charts::grouped_bar_chart(ui, &points, &names, 260.0, &charts::compact);
        ui.add_space(8.0);
        charts::legend(ui, &names);
    });

    ui.add_space(20.0);

    section(ui, "Engagement rate by platform", |ui| {
        let points = platform_series(view.report, view.companies, SocialMetric::Engagement);
        charts::grouped_bar_chart(ui, &points, &names, 260.0, &charts::percent);
        ui.add_space(8.0);
        charts::legend(ui, &names);
    });
}
