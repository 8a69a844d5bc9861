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

pub struct SearchModal {
    input: String,
    focus_pending: bool,
}

impl SearchModal {
    pub fn new() -> Self {
        Self { input: String::new(), focus_pending: false }
    }

    /// Called when the session opens search, which always starts blank.
    pub fn reset(&mut self) {
        self.input.clear();
        self.focus_pending = true;
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        session: &Session,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        if !session.is_search_open() {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("search_modal")).show(ctx, |ui| {
            ui.set_width(460.0);
            ui.label(theme.heading(ctx, "Search roots"));
            ui.add_space(6.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("Arabic, transliteration or meaning")
                    .desired_width(f32::INFINITY),
            );
            if self.focus_pending {
                response.request_focus();
                self.focus_pending = false;
            }
            if response.changed() {
                actions.push(UiAction::SetSearch(self.input.clone()));
            }

            ui.add_space(8.0);

            let hits = session.search_results();
            egui::ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
                if hits.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.label(theme.muted(
                            ctx,
                            &format!("No roots found matching \"{}\"", session.query()),
                        ));
                    });
                    return;
                }

                for hit in &hits {
                    let row = egui::Frame::group(ui.style())
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(theme.arabic(ctx, &hit.root.arabic, 24.0));
                            ui.label(theme.muted(ctx, &hit.details_label()));
                        })
                        .response
                        .interact(egui::Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand);

                    if row.clicked() {
                        actions.push(UiAction::SelectFromSearch(hit.index));
                    }
                }
            });
        });

        if modal.should_close() {
            actions.push(UiAction::CloseSearch);
        }
    }
}

impl Default for SearchModal {
    fn default() -> Self {
        Self::new()
    }
}
