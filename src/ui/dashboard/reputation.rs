//! Brand reputation tab: sentiment donut, per-company sentiment bars and word cloud.

use eframe::egui::{self, Rect, RichText, Sense, Ui};

use super::ReportView;
use crate::models::metrics::Sentiment;
use crate::report::insights::{SentimentShares, sentiment_shares, word_cloud_scales};
use crate::ui::charts;
use crate::ui::components::{colors, panel_header, section};

pub fn show(ui: &mut Ui, view: &ReportView) {
    panel_header(ui, "Brand Reputation", None);

    let user = view.companies.first().and_then(|c| view.report.get(&c.id));

    ui.columns(2, |columns| {
        section(&mut columns[0], "Your review sentiment", |ui| match user {
            Some(bundle) => {
                let r = &bundle.reputation;
                let slices = vec![
                    ("Positive".to_string(), f64::from(r.positive), colors::POSITIVE),
                    ("Neutral".to_string(), f64::from(r.neutral), colors::NEUTRAL),
                    ("Negative".to_string(), f64::from(r.negative), colors::NEGATIVE),
                ];
                charts::donut_chart(ui, &slices, 220.0);
            }
            None => {
                ui.label(RichText::new("No data").weak());
            }
        });

        section(&mut columns[1], "Sentiment across competitors", |ui| {
            for company in view.companies {
                let Some(bundle) = view.report.get(&company.id) else {
                    continue;
                };
                ui.label(RichText::new(&company.name).strong());
                sentiment_bar(ui, sentiment_shares(&bundle.reputation));
                ui.add_space(8.0);
            }
        });
    });

    ui.add_space(20.0);

    section(ui, "Most mentioned in reviews", |ui| match user {
        Some(bundle) => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(16.0, 10.0);
                for (word, scale) in word_cloud_scales(&bundle.reputation.word_cloud) {
                    let color = match word.kind {
                        Sentiment::Pro => colors::POSITIVE,
                        Sentiment::Con => colors::NEGATIVE,
                    };
                    ui.label(RichText::new(&word.text).size(14.0 * scale).strong().color(color));
                }
            });
        }
        None => {
            ui.label(RichText::new("No data").weak());
        }
    });
}

/// Horizontal stacked bar of positive, neutral and negative shares.
fn sentiment_bar(ui: &mut Ui, shares: SentimentShares) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 10.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    ui.painter().rect_filled(rect, 5.0, ui.visuals().faint_bg_color);
    let mut left = rect.left();
    for (share, color) in [
        (shares.positive, colors::POSITIVE),
        (shares.neutral, colors::NEUTRAL),
        (shares.negative, colors::NEGATIVE),
    ] {
        let width = rect.width() * (share / 100.0) as f32;
        let segment = Rect::from_min_max(egui::pos2(left, rect.top()), egui::pos2(left + width, rect.bottom()));
        ui.painter().rect_filled(segment, 0.0, color);
        left += width;
    }

    response.on_hover_text(format!(
        "Positive {:.0}%, neutral {:.0}%, negative {:.0}%",
        shares.positive, shares.neutral, shares.negative
    ));
}
