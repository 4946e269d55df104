//! Traffic tab: six-month trend, the user's traffic sources and engagement.

use eframe::egui::{RichText, Ui};

use super::ReportView;
use crate::report::insights::traffic_trend;
use crate::ui::charts;
use crate::ui::components::{colors, company_label, panel_header, section};

pub fn show(ui: &mut Ui, view: &ReportView) {
    panel_header(ui, "Traffic Analysis", None);

    section(ui, "Estimated monthly visits (last 6 months)", |ui| {
        let trend = traffic_trend(view.report, view.companies);
        charts::line_chart(ui, &trend, &view.names(), 280.0, &charts::compact);
        ui.add_space(8.0);
        charts::legend(ui, &view.names());
    });

    ui.add_space(20.0);

    ui.columns(2, |columns| {
        section(&mut columns[0], "Your traffic sources", |ui| {
            let user = view.companies.first().and_then(|c| view.report.get(&c.id));
            match user {
                Some(bundle) => {
                    let slices: Vec<(String, f64, _)> = bundle
                        .traffic
                        .sources
                        .iter()
                        .enumerate()
                        .map(|(i, s)| (s.name.clone(), f64::from(s.value), colors::series(i)))
                        .collect();
                    charts::donut_chart(ui, &slices, 220.0);
                }
                None => {
                    ui.label(RichText::new("No data").weak());
                }
            }
        });

        section(&mut columns[1], "Engagement", |ui| {
            for company in view.companies {
                company_label(ui, company);
                if let Some(bundle) = view.report.get(&company.id) {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Bounce rate:").weak());
                        ui.monospace(format!("{}%", bundle.traffic.bounce_rate));
                        ui.add_space(20.0);
                        ui.label(RichText::new("Avg. time on site:").weak());
                        ui.monospace(format!("{} min", bundle.traffic.avg_stay));
                    });
                }
                ui.add_space(8.0);
            }
        });
    });
}
