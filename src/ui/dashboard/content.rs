//! Content strategy tab.

use eframe::egui::{RichText, Ui};

use super::ReportView;
use crate::ui::components::{colors, company_label, panel_header, section};

pub fn show(ui: &mut Ui, view: &ReportView) {
    panel_header(ui, "Content Strategy", None);

    for chunk in view.companies.chunks(2) {
        ui.columns(2, |columns| {
            for (ui, company) in columns.iter_mut().zip(chunk) {
                section(ui, &company.name, |ui| {
                    company_label(ui, company);
                    ui.add_space(6.0);

                    let content = view.report.get(&company.id).map(|b| &b.content);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Publishing:").weak());
                        ui.label(
                            RichText::new(content.map(|c| c.blog_frequency.as_str()).unwrap_or("N/A"))
                                .color(colors::series(0)),
                        );
                    });

                    ui.label(RichText::new("Top topics:").weak());
                    match content {
                        Some(c) if !c.top_topics.is_empty() => {
                            for topic in &c.top_topics {
                                ui.label(format!("  - {}", topic));
                            }
                        }
                        _ => {
                            ui.label(RichText::new("No data").weak());
                        }
                    }
                });
            }
        });
        ui.add_space(12.0);
    }
}
