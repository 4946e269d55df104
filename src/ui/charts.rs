//! Minimal painter-drawn charts.
//!
//! Every chart allocates a fixed-height rect spanning the available width and
//! draws into it. Values are expected to be non-negative.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};

use crate::report::insights::{RadarSeries, SeriesPoint};

use super::components::{colors, format_compact};

const AXIS_WIDTH: f32 = 48.0;
const LABEL_HEIGHT: f32 = 20.0;
const GRID_LINES: usize = 4;

/// Smallest "nice" axis maximum at or above `value`.
pub fn nice_max(value: f64) -> f64 {
    if value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    for step in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let candidate = step * magnitude;
        if candidate >= value {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// Plot area plus the y-axis scale shared by bar and line charts.
struct Axes {
    plot: Rect,
    max: f64,
}

impl Axes {
    fn y(&self, value: f64) -> f32 {
        let t = (value / self.max).clamp(0.0, 1.0) as f32;
        self.plot.bottom() - t * self.plot.height()
    }
}

/// Draw grid lines and y labels, returning the plot area.
fn draw_axes(ui: &Ui, rect: Rect, max: f64, format: &dyn Fn(f64) -> String) -> Axes {
    let plot = Rect::from_min_max(
        egui::pos2(rect.left() + AXIS_WIDTH, rect.top() + 6.0),
        egui::pos2(rect.right() - 6.0, rect.bottom() - LABEL_HEIGHT),
    );
    let painter = ui.painter();
    let grid = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
    let text_color = ui.visuals().weak_text_color();

    for i in 0..=GRID_LINES {
        let value = max * i as f64 / GRID_LINES as f64;
        let y = plot.bottom() - plot.height() * i as f32 / GRID_LINES as f32;
        painter.line_segment([egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)], grid);
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format(value),
            FontId::proportional(11.0),
            text_color,
        );
    }

    Axes { plot, max }
}

fn x_label(ui: &Ui, pos: Pos2, text: &str) {
    ui.painter().text(
        pos,
        Align2::CENTER_TOP,
        text,
        FontId::proportional(11.0),
        ui.visuals().weak_text_color(),
    );
}

/// One bar per entry, all in the same colour.
pub fn bar_chart(ui: &mut Ui, data: &[(String, f64)], color: Color32, height: f32, format: &dyn Fn(f64) -> String) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    if !ui.is_rect_visible(rect) || data.is_empty() {
        return;
    }

    let max = nice_max(data.iter().map(|(_, v)| *v).fold(0.0, f64::max));
    let axes = draw_axes(ui, rect, max, format);
    let slot = axes.plot.width() / data.len() as f32;
    let bar_width = (slot * 0.6).min(64.0);
    let hover = response.hover_pos();

    for (i, (label, value)) in data.iter().enumerate() {
        let center = axes.plot.left() + slot * (i as f32 + 0.5);
        let bar = Rect::from_min_max(
            egui::pos2(center - bar_width / 2.0, axes.y(*value)),
            egui::pos2(center + bar_width / 2.0, axes.plot.bottom()),
        );
        ui.painter().rect_filled(bar, 3.0, color);
        x_label(ui, egui::pos2(center, axes.plot.bottom() + 4.0), label);

        if let Some(pos) = hover
            && bar.expand2(egui::vec2(slot * 0.2, 0.0)).contains(pos)
        {
            response.clone().on_hover_text_at_pointer(format!("{}: {}", label, format(*value)));
        }
    }
}

/// Bars grouped by point, one colour per series.
pub fn grouped_bar_chart(
    ui: &mut Ui,
    points: &[SeriesPoint],
    series_names: &[String],
    height: f32,
    format: &dyn Fn(f64) -> String,
) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    if !ui.is_rect_visible(rect) || points.is_empty() || series_names.is_empty() {
        return;
    }

    let max = nice_max(
        points
            .iter()
            .flat_map(|p| p.values.iter().copied())
            .fold(0.0, f64::max),
    );
    let axes = draw_axes(ui, rect, max, format);
    let slot = axes.plot.width() / points.len() as f32;
    let group_width = slot * 0.8;
    let bar_width = group_width / series_names.len() as f32;
    let hover = response.hover_pos();

    for (i, point) in points.iter().enumerate() {
        let group_left = axes.plot.left() + slot * i as f32 + (slot - group_width) / 2.0;
        for (s, value) in point.values.iter().enumerate() {
            let left = group_left + bar_width * s as f32;
            let bar = Rect::from_min_max(
                egui::pos2(left + 1.0, axes.y(*value)),
                egui::pos2(left + bar_width - 1.0, axes.plot.bottom()),
            );
            ui.painter().rect_filled(bar, 2.0, colors::series(s));

            if let Some(pos) = hover
                && bar.contains(pos)
                && let Some(name) = series_names.get(s)
            {
                response
                    .clone()
                    .on_hover_text_at_pointer(format!("{} / {}: {}", point.label, name, format(*value)));
            }
        }
        x_label(ui, egui::pos2(axes.plot.left() + slot * (i as f32 + 0.5), axes.plot.bottom() + 4.0), &point.label);
    }
}

/// One polyline per series across the points.
pub fn line_chart(
    ui: &mut Ui,
    points: &[SeriesPoint],
    series_names: &[String],
    height: f32,
    format: &dyn Fn(f64) -> String,
) {
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    if !ui.is_rect_visible(rect) || points.len() < 2 {
        return;
    }

    let max = nice_max(
        points
            .iter()
            .flat_map(|p| p.values.iter().copied())
            .fold(0.0, f64::max),
    );
    let axes = draw_axes(ui, rect, max, format);
    let step = axes.plot.width() / (points.len() - 1) as f32;
    let x = |i: usize| axes.plot.left() + step * i as f32;

    for s in 0..series_names.len() {
        let line: Vec<Pos2> = points
            .iter()
            .enumerate()
            .map(|(i, p)| egui::pos2(x(i), axes.y(p.values.get(s).copied().unwrap_or(0.0))))
            .collect();
        let color = colors::series(s);
        for p in &line {
            ui.painter().circle_filled(*p, 3.0, color);
        }
        ui.painter().add(Shape::line(line, Stroke::new(2.0, color)));
    }

    for (i, point) in points.iter().enumerate() {
        x_label(ui, egui::pos2(x(i), axes.plot.bottom() + 4.0), &point.label);
    }
}

/// Ring chart of labelled slices with percentage labels.
pub fn donut_chart(ui: &mut Ui, slices: &[(String, f64, Color32)], size: f32) {
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), size), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let total: f64 = slices.iter().map(|(_, v, _)| *v).sum();
    if total <= 0.0 {
        return;
    }

    let center = rect.center();
    let outer = size / 2.0 - 4.0;
    let inner = outer * 0.6;
    let mut start = -FRAC_PI_2;

    for (label, value, color) in slices {
        let sweep = (*value / total) as f32 * TAU;
        let steps = ((sweep / TAU) * 90.0).ceil().max(1.0) as usize;
        for k in 0..steps {
            let a0 = start + sweep * k as f32 / steps as f32;
            let a1 = start + sweep * (k + 1) as f32 / steps as f32;
            let quad = vec![
                center + outer * egui::vec2(a0.cos(), a0.sin()),
                center + outer * egui::vec2(a1.cos(), a1.sin()),
                center + inner * egui::vec2(a1.cos(), a1.sin()),
                center + inner * egui::vec2(a0.cos(), a0.sin()),
            ];
            ui.painter().add(Shape::convex_polygon(quad, *color, Stroke::NONE));
        }

        // Percentage just outside the ring
        let mid = start + sweep / 2.0;
        let label_pos = center + (outer + 14.0) * egui::vec2(mid.cos(), mid.sin());
        let align = if mid.cos() >= 0.0 { Align2::LEFT_CENTER } else { Align2::RIGHT_CENTER };
        ui.painter().text(
            label_pos,
            align,
            format!("{} {:.0}%", label, *value / total * 100.0),
            FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
        start += sweep;
    }
}

/// Filled polygons on a regular polygon grid scaled to `[0, 100]`.
pub fn radar_chart(ui: &mut Ui, axes: &[&str], series: &[RadarSeries], size: f32) {
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), size), Sense::hover());
    if !ui.is_rect_visible(rect) || axes.len() < 3 {
        return;
    }

    let center = rect.center();
    let radius = size / 2.0 - 24.0;
    let n = axes.len();
    let direction = |i: usize| {
        let angle = -FRAC_PI_2 + TAU * i as f32 / n as f32;
        egui::vec2(angle.cos(), angle.sin())
    };
    let grid = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);

    // Concentric grid rings and spokes
    for ring in 1..=GRID_LINES {
        let r = radius * ring as f32 / GRID_LINES as f32;
        let ring_points: Vec<Pos2> = (0..n).map(|i| center + r * direction(i)).collect();
        ui.painter().add(Shape::closed_line(ring_points, grid));
    }
    for (i, axis) in axes.iter().enumerate() {
        ui.painter().line_segment([center, center + radius * direction(i)], grid);
        ui.painter().text(
            center + (radius + 12.0) * direction(i),
            Align2::CENTER_CENTER,
            *axis,
            FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );
    }

    for (s, entry) in series.iter().enumerate() {
        let color = colors::series(s);
        let outline: Vec<Pos2> = entry
            .values
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, v)| center + radius * (*v / 100.0).clamp(0.0, 1.0) as f32 * direction(i))
            .collect();
        // Value polygons are not guaranteed convex, so fill as a fan from the center
        for i in 0..outline.len() {
            let next = outline[(i + 1) % outline.len()];
            ui.painter().add(Shape::convex_polygon(
                vec![center, outline[i], next],
                color.gamma_multiply(0.25),
                Stroke::NONE,
            ));
        }
        ui.painter().add(Shape::closed_line(outline, Stroke::new(2.0, color)));
    }
}

/// Coloured swatches with the series names.
pub fn legend(ui: &mut Ui, names: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for (i, name) in names.iter().enumerate() {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, colors::series(i));
            ui.label(name);
            ui.add_space(8.0);
        }
    });
}

/// Default number formatter for chart axes.
pub fn compact(value: f64) -> String {
    format_compact(value)
}

/// Percent formatter for chart axes.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Dollar formatter for chart axes.
pub fn dollars(value: f64) -> String {
    format!("${}", format_compact(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(87.0), 100.0);
        assert_eq!(nice_max(100.0), 100.0);
        assert_eq!(nice_max(180.0), 200.0);
        assert_eq!(nice_max(2100.0), 2500.0);
        assert_eq!(nice_max(420_000.0), 500_000.0);
    }

    #[test]
    fn test_nice_max_never_below_value() {
        for value in [0.3, 1.0, 7.7, 33.0, 999.0, 12_345.0] {
            assert!(nice_max(value) >= value);
        }
    }
}
