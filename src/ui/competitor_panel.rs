//! Competitor confirmation panel.

use eframe::egui::{self, Align, Key, Layout, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{ARROW_RIGHT, PLUS};

use super::components::{colors, company_avatar, panel_header};
use crate::models::Competitor;
use crate::models::competitor::hostname;
use crate::wizard::CompetitorSelection;

/// Panel action requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Confirm,
}

/// Show the competitor panel.
pub fn show(ui: &mut Ui, selection: &mut CompetitorSelection, manual_input: &mut String, user_url: &str) -> Action {
    let mut action = Action::None;

    panel_header(
        ui,
        "Confirm your competitors",
        Some(&format!("We found these companies competing with {}. Untick any that are not relevant.", user_url)),
    );

    // Your company
    let user = Competitor::user_company(user_url);
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(1.0, colors::series(0)))
        .inner_margin(egui::Margin::same(10))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                company_avatar(ui, &user, 40.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new("Your company").small().weak());
                    ui.label(RichText::new(hostname(user_url)).strong().size(16.0));
                });
            });
        });

    ui.add_space(12.0);

    // Candidate list
    let mut toggled = None;
    ScrollArea::vertical()
        .max_height((ui.available_height() - 140.0).max(120.0))
        .show(ui, |ui| {
            for competitor in selection.candidates() {
                let selected = selection.is_selected(&competitor.id);
                egui::Frame::new()
                    .fill(if selected {
                        colors::series(0).gamma_multiply(0.12)
                    } else {
                        ui.visuals().extreme_bg_color
                    })
                    .inner_margin(egui::Margin::same(10))
                    .corner_radius(egui::CornerRadius::same(8))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let mut checked = selected;
                            if ui.checkbox(&mut checked, "").changed() {
                                toggled = Some(competitor.id.clone());
                            }
                            company_avatar(ui, competitor, 32.0);
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&competitor.name).strong());
                                ui.label(RichText::new(&competitor.url).small().weak());
                            });
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(id) = toggled {
        selection.toggle(&id);
    }

    ui.add_space(10.0);

    // Manual entry
    ui.horizontal(|ui| {
        ui.label("Add a competitor:");
        let response = ui.add(
            egui::TextEdit::singleline(manual_input)
                .desired_width(260.0)
                .hint_text("www.competitor.com"),
        );
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        let can_add = !manual_input.trim().is_empty();
        let clicked = ui
            .add_enabled(can_add, egui::Button::new(format!("{} Add", PLUS)))
            .clicked();
        if can_add && (clicked || entered) && selection.add_manual(manual_input).is_some() {
            manual_input.clear();
        }
    });

    ui.add_space(15.0);
    ui.separator();
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        let count = selection.selected_count();
        if count == 0 {
            ui.colored_label(colors::WARNING, "Select at least one competitor to continue.");
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = format!("{} {}", confirm_label(count), ARROW_RIGHT);
            if ui
                .add_enabled(count > 0, egui::Button::new(RichText::new(label).size(15.0)))
                .clicked()
            {
                action = Action::Confirm;
            }
        });
    });

    action
}

/// Confirm button text; always carries the selection size.
pub fn confirm_label(count: usize) -> String {
    match count {
        1 => "Confirm 1 competitor".to_string(),
        n => format!("Confirm {} competitors", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_label_shows_selection_size() {
        let mut selection = CompetitorSelection::new();
        assert_eq!(confirm_label(selection.selected_count()), "Confirm 5 competitors");

        selection.toggle("c1");
        selection.add_manual("newcomer.io");
        selection.add_manual("other.dev");
        assert_eq!(selection.selected_count(), 6);
        assert!(confirm_label(selection.selected_count()).contains('6'));

        assert_eq!(confirm_label(1), "Confirm 1 competitor");
        assert_eq!(confirm_label(0), "Confirm 0 competitors");
    }

    #[test]
    fn test_user_card_uses_hostname() {
        let url = "https://www.MyCorp.com/about";
        let user = Competitor::user_company(url);
        assert_eq!(user.id, crate::models::USER_COMPANY_ID);
        assert_eq!(hostname(url), "www.mycorp.com");
    }
}
