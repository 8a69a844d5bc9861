use eframe::egui;

use crate::{
    core::Session,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

const CARD_HEIGHT: f32 = 260.0;

pub struct CardViewOptions {
    pub transliteration_on_front: bool,
    pub shuffle_spinning: bool,
}

pub fn study_screen(
    ctx: &egui::Context,
    session: &Session,
    theme: &Theme,
    options: &CardViewOptions,
    actions: &mut ActionQueue,
) {
    let Some(face) = session.card_face() else {
        return;
    };
    let progress = session.progress().unwrap_or(0.0);
    let flipped = session.is_flipped();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(theme.muted(ctx, &face.counter_label()));
            ui.add(
                egui::ProgressBar::new(progress / 100.0)
                    .desired_height(6.0)
                    .fill(theme.cyan(ctx)),
            );
            ui.add_space(16.0);

            let card = egui::Frame::NONE
                .fill(theme.card_fill(ctx, flipped))
                .corner_radius(12)
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_min_size(egui::vec2(ui.available_width(), CARD_HEIGHT));
                    ui.vertical_centered(|ui| {
                        if flipped {
                            ui.add_space(40.0);
                            ui.label(egui::RichText::new(face.meaning).size(28.0).strong());
                            ui.add_space(8.0);
                            ui.label(theme.muted(ctx, face.transliteration));
                            ui.add_space(8.0);
                            ui.label(
                                egui::RichText::new(format!("{} forms", face.form_count))
                                    .color(theme.orange(ctx)),
                            );
                        } else {
                            ui.add_space(30.0);
                            ui.label(theme.arabic(ctx, face.arabic, 64.0));
                            if options.transliteration_on_front {
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(face.transliteration)
                                        .size(20.0)
                                        .color(theme.green(ctx)),
                                );
                            }
                        }
                    });
                })
                .response
                .interact(egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            if card.clicked() {
                actions.push(UiAction::Flip);
            }

            ui.add_space(16.0);
            navigation_buttons(ui, options, actions);
        });
    });
}

fn navigation_buttons(ui: &mut egui::Ui, options: &CardViewOptions, actions: &mut ActionQueue) {
    ui.horizontal_wrapped(|ui| {
        if ui.button("◀ Previous").clicked() {
            actions.push(UiAction::Previous);
        }
        if ui.button("Flip").clicked() {
            actions.push(UiAction::Flip);
        }
        if ui.button("Next ▶").clicked() {
            actions.push(UiAction::Next);
        }

        ui.separator();

        let shuffle_label = if options.shuffle_spinning { "⟳ Shuffle" } else { "🔀 Shuffle" };
        if ui.button(shuffle_label).clicked() {
            actions.push(UiAction::Shuffle);
        }
        if ui.button("📖 Forms").clicked() {
            actions.push(UiAction::ShowForms);
        }
        if ui.button("🔍 Search").clicked() {
            actions.push(UiAction::OpenSearch);
        }
    });
}
