//! Simulated analysis progress screen.

use std::time::Duration;

use eframe::egui::{ProgressBar, RichText, Ui};

/// Status lines cycled while loading.
const MESSAGES: [&str; 4] = [
    "Collecting public data from the web...",
    "Comparing search visibility...",
    "Reading customer reviews...",
    "Putting the report together...",
];

/// Fraction of the loading time that has elapsed.
pub fn progress(remaining: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (1.0 - remaining.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Message for the current progress.
pub fn message(progress: f32) -> &'static str {
    let index = (progress * MESSAGES.len() as f32) as usize;
    MESSAGES[index.min(MESSAGES.len() - 1)]
}

/// Show the loading screen.
pub fn show(ui: &mut Ui, remaining: Duration, total: Duration, company_count: usize) {
    let fraction = progress(remaining, total);

    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.spinner();
        ui.add_space(20.0);
        ui.label(
            RichText::new(format!("Analysing {} companies", company_count))
                .size(24.0)
                .strong(),
        );
        ui.add_space(5.0);
        ui.label(RichText::new(message(fraction)).weak());
        ui.add_space(20.0);
        ui.add(
            ProgressBar::new(fraction)
                .desired_width(360.0)
                .show_percentage()
                .animate(true),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        let total = Duration::from_millis(3500);
        assert_eq!(progress(total, total), 0.0);
        assert_eq!(progress(Duration::ZERO, total), 1.0);
        assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
        let half = progress(Duration::from_millis(1750), total);
        assert!((half - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_message_covers_full_range() {
        assert_eq!(message(0.0), MESSAGES[0]);
        assert_eq!(message(1.0), MESSAGES[MESSAGES.len() - 1]);
    }
}
