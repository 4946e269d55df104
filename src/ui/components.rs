//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Sense, Stroke, StrokeKind, Ui};

use crate::models::Competitor;

/// Render a selectable module card with dynamic size.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn module_card(
    ui: &mut Ui,
    title: &str,
    description: &str,
    icon: &str,
    selected: bool,
    required: bool,
    size: egui::Vec2,
) -> Response {
    let sense = if required { Sense::hover() } else { Sense::click() };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let accent = colors::series(0);

        // Card background
        let fill = if selected {
            accent.gamma_multiply(0.15)
        } else {
            visuals.bg_fill
        };
        let stroke = if selected {
            Stroke::new(2.0, accent)
        } else {
            visuals.bg_stroke
        };
        ui.painter().rect_filled(rect, 8.0, fill);
        ui.painter().rect_stroke(rect, 8.0, stroke, StrokeKind::Outside);

        // Icon and title on the first line
        let pad = 14.0;
        let top = rect.top() + pad;
        ui.painter().text(
            egui::pos2(rect.left() + pad, top),
            egui::Align2::LEFT_TOP,
            icon,
            egui::FontId::proportional(22.0),
            if selected { accent } else { visuals.text_color() },
        );
        ui.painter().text(
            egui::pos2(rect.left() + pad + 32.0, top + 2.0),
            egui::Align2::LEFT_TOP,
            title,
            egui::FontId::proportional(16.0),
            visuals.text_color(),
        );

        // Checkbox mark or required badge in the corner
        let corner = egui::pos2(rect.right() - pad, top + 2.0);
        let mark = if required {
            "Required"
        } else if selected {
            egui_phosphor::regular::CHECK_SQUARE
        } else {
            egui_phosphor::regular::SQUARE
        };
        ui.painter().text(
            corner,
            egui::Align2::RIGHT_TOP,
            mark,
            egui::FontId::proportional(if required { 11.0 } else { 18.0 }),
            if required { ui.visuals().weak_text_color() } else { accent },
        );

        // Description, wrapped to the card width
        let galley = ui.painter().layout(
            description.to_string(),
            egui::FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
            rect.width() - pad * 2.0,
        );
        ui.painter()
            .galley(egui::pos2(rect.left() + pad, top + 34.0), galley, Color32::PLACEHOLDER);
    }

    response
}

/// Status indicator and chart colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);

    pub const POSITIVE: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);
    pub const NEGATIVE: Color32 = Color32::from_rgb(0xF5, 0x65, 0x65);

    /// Per-company series palette, repeated when there are more companies.
    pub const SERIES: [Color32; 6] = [
        Color32::from_rgb(0x42, 0x99, 0xE1),
        Color32::from_rgb(0x4F, 0xD1, 0xC5),
        Color32::from_rgb(0xF6, 0xAD, 0x55),
        Color32::from_rgb(0xB7, 0x94, 0xF4),
        Color32::from_rgb(0xED, 0x89, 0x36),
        Color32::from_rgb(0xF5, 0x65, 0x65),
    ];

    pub fn series(index: usize) -> Color32 {
        SERIES[index % SERIES.len()]
    }
}

/// Render a panel header with title and optional subtitle.
pub fn panel_header(ui: &mut Ui, title: &str, subtitle: Option<&str>) {
    ui.heading(RichText::new(title).size(24.0));
    if let Some(subtitle) = subtitle {
        ui.label(RichText::new(subtitle).weak());
    }
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Rounded section frame with a bold title.
pub fn section<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).strong().size(16.0));
            ui.add_space(10.0);
            add_contents(ui)
        })
        .inner
}

/// Small statistic card.
pub fn stat_card(ui: &mut Ui, label: &str, value: &str, hint: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(label).weak());
                ui.label(RichText::new(value).size(28.0).strong());
                ui.label(RichText::new(hint).small().weak());
            });
        });
}

/// Round avatar with the company initials.
///
/// The fill colour is derived from the logo reference so it stays stable
/// for a company across frames.
pub fn company_avatar(ui: &mut Ui, company: &Competitor, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());

    if ui.is_rect_visible(rect) {
        let hash = company
            .logo
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
        ui.painter()
            .circle_filled(rect.center(), size / 2.0, colors::series(hash));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initials(&company.name),
            egui::FontId::proportional(size * 0.42),
            Color32::WHITE,
        );
    }

    response.on_hover_text(company.url.as_str())
}

/// Company name with avatar, highlighted when it is the user's own.
pub fn company_label(ui: &mut Ui, company: &Competitor) {
    ui.horizontal(|ui| {
        company_avatar(ui, company, 22.0);
        let text = RichText::new(&company.name);
        if company.is_user_company() {
            ui.label(text.strong().color(colors::series(0)));
        } else {
            ui.label(text);
        }
    });
}

/// Pill-shaped tag.
pub fn tag(ui: &mut Ui, text: &str) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(Margin::symmetric(8, 2))
        .corner_radius(CornerRadius::same(10))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

/// Render text where `**...**` spans are shown in bold.
pub fn rich_paragraphs(ui: &mut Ui, text: &str) {
    for paragraph in text.split("\n\n") {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for (i, part) in paragraph.split("**").enumerate() {
                if part.is_empty() {
                    continue;
                }
                let part = part.replace('\n', " ");
                if i % 2 == 1 {
                    ui.label(RichText::new(part).strong().color(colors::series(0)));
                } else {
                    ui.label(part);
                }
            }
        });
        ui.add_space(8.0);
    }
}

/// First letters of up to two words.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// Short number for chart axes: 950, 12.5k, 1.2M.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{:.0}k", value / 1000.0)
    } else if abs >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Integer with thousands separators.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Innovate Inc."), "II");
        assert_eq!(initials("Your Company"), "YC");
        assert_eq!(initials("www.newcomer.io"), "WN");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(2.5), "2.5");
        assert_eq!(format_compact(1500.0), "1.5k");
        assert_eq!(format_compact(45_000.0), "45k");
        assert_eq!(format_compact(1_200_000.0), "1.2M");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(123_456_789), "123,456,789");
    }

    #[test]
    fn test_series_palette_wraps() {
        assert_eq!(colors::series(0), colors::series(colors::SERIES.len()));
    }
}
