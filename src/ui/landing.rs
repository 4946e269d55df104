//! Landing page with the company URL input.

use eframe::egui::{self, Key, RichText, Ui};
use egui_phosphor::regular::{BINOCULARS, MAGNIFYING_GLASS};

/// Show the landing page.
///
/// Returns `true` when the user submits a non-blank URL.
pub fn show(ui: &mut Ui, url_input: &mut String) -> bool {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new(BINOCULARS).size(56.0));
        ui.add_space(10.0);
        ui.label(RichText::new("Know your competition").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(
            RichText::new("Enter your company website and get a side-by-side competitor report in minutes.")
                .size(14.0)
                .weak(),
        );
        ui.add_space(30.0);

        let width = ui.available_width().min(520.0);
        ui.allocate_ui(egui::vec2(width, 40.0), |ui| {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(url_input)
                        .desired_width(width - 130.0)
                        .hint_text("e.g. www.yourcompany.com")
                        .font(egui::TextStyle::Heading),
                );
                let entered = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                let can_start = !url_input.trim().is_empty();
                let clicked = ui
                    .add_enabled(
                        can_start,
                        egui::Button::new(RichText::new(format!("{} Analyze", MAGNIFYING_GLASS)).size(16.0)),
                    )
                    .clicked();

                if can_start && (clicked || entered) {
                    submit = true;
                }
            });
        });

        ui.add_space(12.0);
        ui.label(
            RichText::new("Competitors are detected automatically. You can adjust the list in the next step.")
                .small()
                .weak(),
        );
    });

    submit
}
