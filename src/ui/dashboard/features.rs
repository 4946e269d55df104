//! Features & pricing tab.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{CHECK, SPARKLE, X};

use super::ReportView;
use crate::report::insights::{feature_matrix, metric_by_company};
use crate::ui::charts;
use crate::ui::components::{colors, company_avatar, panel_header, section};

/// Companies shown in the pricing comparison.
const PRICING_COMPANIES: usize = 3;

pub fn show(ui: &mut Ui, view: &ReportView) {
    panel_header(ui, "Features & Pricing", None);

    section(ui, "Feature matrix", |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            egui::Grid::new("feature_grid")
                .num_columns(view.companies.len() + 1)
                .spacing([24.0, 8.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new("Feature").strong());
                    for company in view.companies {
                        ui.vertical_centered(|ui| {
                            company_avatar(ui, company, 26.0);
                            ui.label(RichText::new(&company.name).small());
                        });
                    }
                    ui.end_row();

                    for row in feature_matrix(view.report, view.companies) {
                        if row.unique_to_user {
                            ui.label(
                                RichText::new(format!("{} {}", row.feature, SPARKLE))
                                    .strong()
                                    .color(colors::series(0)),
                            )
                            .on_hover_text("Only you offer this");
                        } else {
                            ui.label(row.feature);
                        }
                        for present in row.presence {
                            ui.vertical_centered(|ui| {
                                if present {
                                    ui.colored_label(colors::POSITIVE, RichText::new(CHECK).size(18.0));
                                } else {
                                    ui.colored_label(colors::NEGATIVE, RichText::new(X).size(16.0));
                                }
                            });
                        }
                        ui.end_row();
                    }
                });
        });
    });

    ui.add_space(20.0);

    section(ui, "Feature count", |ui| {
        let data = metric_by_company(view.report, view.companies, |b| b.features.len() as f64);
        charts::bar_chart(ui, &data, colors::series(3), 220.0, &charts::compact);
    });

    ui.add_space(20.0);

    section(ui, "Pricing plans", |ui| {
        let shown = &view.companies[..view.companies.len().min(PRICING_COMPANIES)];
        ui.columns(shown.len().max(1), |columns| {
            for (ui, company) in columns.iter_mut().zip(shown) {
                let tiers = view.report.get(&company.id).map(|b| b.pricing.as_slice()).unwrap_or_default();
                egui::Frame::new()
                    .fill(if company.is_user_company() {
                        colors::series(0).gamma_multiply(0.12)
                    } else {
                        ui.visuals().faint_bg_color
                    })
                    .inner_margin(egui::Margin::same(12))
                    .corner_radius(egui::CornerRadius::same(8))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(&company.name).strong().size(16.0));
                        });
                        ui.add_space(8.0);
                        for tier in tiers {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&tier.name).strong());
                                ui.label(RichText::new(&tier.price).color(colors::series(0)));
                            });
                            for feature in &tier.features {
                                ui.label(RichText::new(format!("  - {}", feature)).small().weak());
                            }
                            ui.add_space(6.0);
                        }
                    });
            }
        });
    });
}
