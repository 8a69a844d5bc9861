use eframe::egui;

use crate::gui::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};

pub fn welcome_screen(
    ctx: &egui::Context,
    theme: &Theme,
    root_count: usize,
    actions: &mut ActionQueue,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);
            ui.label(theme.arabic(ctx, "جذور", 56.0));
            ui.heading(theme.heading(ctx, "Quranic Arabic Roots"));
            ui.add_space(8.0);

            if root_count == 0 {
                ui.label(egui::RichText::new("No roots to study").color(theme.red(ctx)));
                ui.label(theme.muted(ctx, "Open a deck file from the File menu."));
                return;
            }

            ui.label(theme.muted(ctx, &format!("{} roots with their derived forms", root_count)));
            ui.add_space(20.0);

            let start = egui::Button::new(egui::RichText::new("Start Learning").size(18.0))
                .min_size(egui::vec2(180.0, 40.0));
            if ui.add(start).clicked() {
                actions.push(UiAction::Start);
            }

            ui.add_space(12.0);
            ui.label(theme.muted(ctx, "← / → to move · Space or Enter to flip"));
        });
    });
}
