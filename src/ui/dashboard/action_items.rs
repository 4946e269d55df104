//! Action items tab: add, complete, delete and sort follow-up tasks.

use chrono::NaiveDate;
use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{PLUS, SORT_ASCENDING, SORT_DESCENDING, TRASH};

use super::DashboardState;
use crate::models::SortOrder;
use crate::ui::components::{colors, panel_header, section};

pub fn show(ui: &mut Ui, state: &mut DashboardState, today: NaiveDate) {
    panel_header(ui, "Action Items", Some("Turn the findings into concrete next steps."));

    section(ui, "New task", |ui| {
        egui::Grid::new("new_task_grid")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                ui.label("Description:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.new_task_text)
                        .desired_width(420.0)
                        .hint_text("e.g. Refine our SEO keyword strategy..."),
                );
                ui.end_row();

                ui.label("Due date:");
                ui.add(DatePickerButton::new(&mut state.new_task_due).id_salt("new_task_due"));
                ui.end_row();
            });

        ui.add_space(10.0);

        let can_add = !state.new_task_text.trim().is_empty();
        if ui
            .add_enabled(can_add, egui::Button::new(format!("{} Add task", PLUS)))
            .clicked()
            && state.tasks.add(&state.new_task_text, state.new_task_due).is_some()
        {
            state.new_task_text.clear();
            state.new_task_due = today;
        }
    });

    ui.add_space(20.0);

    section(ui, "Tasks", |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{} tasks", state.tasks.len())).weak());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let icon = match state.sort_order {
                    SortOrder::Ascending => SORT_ASCENDING,
                    SortOrder::Descending => SORT_DESCENDING,
                };
                if ui
                    .button(format!("{} Due date ({})", icon, state.sort_order.label()))
                    .clicked()
                {
                    state.sort_order = state.sort_order.toggled();
                }
            });
        });

        ui.add_space(10.0);

        if state.tasks.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(RichText::new("No tasks yet. Add one above to get started.").weak());
                ui.add_space(20.0);
            });
            return;
        }

        let mut toggled = None;
        let mut deleted = None;

        for task in state.tasks.sorted(state.sort_order) {
            egui::Frame::new()
                .fill(ui.visuals().faint_bg_color)
                .inner_margin(egui::Margin::same(10))
                .corner_radius(egui::CornerRadius::same(6))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let mut done = task.completed;
                        if ui.checkbox(&mut done, "").changed() {
                            toggled = Some(task.id);
                        }

                        ui.vertical(|ui| {
                            let text = RichText::new(&task.text);
                            ui.label(if task.completed { text.strikethrough().weak() } else { text });

                            let due = format!("Due {}", task.due_date_string());
                            if task.is_overdue(today) {
                                ui.colored_label(colors::ERROR, RichText::new(format!("{} (overdue)", due)).small().strong());
                            } else {
                                ui.label(RichText::new(due).small().weak());
                            }
                        });

                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.small_button(TRASH).on_hover_text("Delete task").clicked() {
                                deleted = Some(task.id);
                            }
                        });
                    });
                });
            ui.add_space(4.0);
        }

        if let Some(id) = toggled {
            state.tasks.toggle(id);
        }
        if let Some(id) = deleted {
            state.tasks.delete(id);
        }
    });
}
