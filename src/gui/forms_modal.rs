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

/// Lists the derived forms of the root under the cursor.
pub fn forms_modal(
    ctx: &egui::Context,
    session: &Session,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    if !session.is_forms_open() {
        return;
    }
    let Some(root) = session.current() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("forms_modal")).show(ctx, |ui| {
        ui.set_width(420.0);

        ui.horizontal(|ui| {
            ui.label(theme.arabic(ctx, &root.arabic, 32.0));
            ui.label(theme.heading(ctx, "Derived forms"));
        });
        ui.separator();

        if root.forms.is_empty() {
            ui.label(theme.muted(ctx, "No forms recorded for this root."));
        }

        egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
            for form in session.forms() {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label(theme.arabic(ctx, &form.arabic, 26.0));
                    ui.label(egui::RichText::new(&form.transliteration).color(theme.green(ctx)));
                    ui.label(&form.meaning);
                });
            }
        });

        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Close").clicked() {
                ui.close();
            }
        });
    });

    if modal.should_close() {
        actions.push(UiAction::CloseForms);
    }
}
