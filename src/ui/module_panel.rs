//! Analysis module picker.

use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{
    ARROW_RIGHT, BRIEFCASE, CHART_LINE_UP, CODE, GLOBE, MEGAPHONE, NEWSPAPER, PUZZLE_PIECE, SHARE_NETWORK, STAR,
};

use super::components::{module_card, panel_header};
use crate::models::{ALL_MODULES, ModuleId};
use crate::wizard::ModuleSelection;

/// Icon shown for a module.
pub fn module_icon(id: ModuleId) -> &'static str {
    match id {
        ModuleId::Seo => GLOBE,
        ModuleId::Traffic => CHART_LINE_UP,
        ModuleId::Features => PUZZLE_PIECE,
        ModuleId::Social => SHARE_NETWORK,
        ModuleId::Reputation => STAR,
        ModuleId::TechStack => CODE,
        ModuleId::Advertising => MEGAPHONE,
        ModuleId::Hiring => BRIEFCASE,
        ModuleId::Content => NEWSPAPER,
    }
}

/// Show the module panel.
///
/// Returns `true` when the user starts the analysis.
pub fn show(ui: &mut Ui, selection: &mut ModuleSelection) -> bool {
    let mut start = false;

    panel_header(
        ui,
        "Choose what to analyse",
        Some("Pick the dimensions to compare. Website & SEO is always included."),
    );

    let spacing = 16.0;
    let available = ui.available_width();
    let columns = if available > 900.0 { 3 } else { 2 };
    let card_width = (available - spacing * (columns as f32 - 1.0)) / columns as f32 - 2.0;
    let card_size = egui::vec2(card_width, 110.0);

    ScrollArea::vertical()
        .max_height((ui.available_height() - 70.0).max(150.0))
        .show(ui, |ui| {
            for row in ALL_MODULES.chunks(columns) {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = spacing;
                    for module in row {
                        let selected = selection.is_selected(module.id);
                        let response = module_card(
                            ui,
                            module.title,
                            module.description,
                            module_icon(module.id),
                            selected,
                            module.required,
                            card_size,
                        );
                        if response.clicked() {
                            selection.toggle(module.id);
                        }
                    }
                });
                ui.add_space(spacing);
            }
        });

    ui.separator();
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{} modules selected", selection.selected_count())).weak());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = format!("Start analysis {}", ARROW_RIGHT);
            if ui.button(RichText::new(label).size(15.0)).clicked() {
                start = true;
            }
        });
    });

    start
}
