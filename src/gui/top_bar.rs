use std::path::PathBuf;

use eframe::egui::{
    self,
    containers,
};
use rfd::FileDialog;

use crate::{
    core::deck_source::DeckOrigin,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        settings::SettingsData,
    },
};

pub fn pick_deck_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Open roots deck")
        .add_filter("Deck files", &["json", "hjson"])
        .pick_file()
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        actions: &mut ActionQueue,
        settings: &SettingsData,
        deck_origin: Option<&DeckOrigin>,
        root_count: usize,
        studying: bool,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                let theme_icon = if settings.dark_mode { "🌙" } else { "☀" };
                if ui.selectable_label(false, theme_icon).on_hover_text("Toggle theme").clicked() {
                    actions.push(UiAction::SetDarkMode(!settings.dark_mode));
                }

                ui.menu_button("File", |ui| {
                    if ui.button("Open Deck…").clicked() {
                        if let Some(path) = pick_deck_file() {
                            actions.push(UiAction::OpenDeck(path));
                        }
                        ui.close();
                    }
                    if ui.button("Use Bundled Deck").clicked() {
                        actions.push(UiAction::UseBundledDeck);
                        ui.close();
                    }
                    if ui.add_enabled(studying, egui::Button::new("Home")).clicked() {
                        actions.push(UiAction::Home);
                        ui.close();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut on_front = settings.show_transliteration_on_front;
                    if ui.checkbox(&mut on_front, "Transliteration on front").changed() {
                        actions.push(UiAction::SetTransliterationOnFront(on_front));
                    }
                    ui.separator();
                    if ui.button("Zoom In").clicked() {
                        actions.push(UiAction::ZoomIn);
                    }
                    if ui.button("Zoom Out").clicked() {
                        actions.push(UiAction::ZoomOut);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(origin) = deck_origin {
                        ui.small(format!("{} · {} roots", origin.label(), root_count));
                    }
                });
            });
        });
    }
}
