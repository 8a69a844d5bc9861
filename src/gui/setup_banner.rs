use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerAction {
    OpenDeck,
    Dismiss,
}

/// Whether the "bundled deck" banner is up. A dismissal lasts until the app
/// closes, even across deck reloads.
#[derive(Debug, Default)]
pub struct BannerState {
    bundled: bool,
    dismissed: bool,
}

impl BannerState {
    pub fn set_bundled(&mut self, bundled: bool) {
        self.bundled = bundled;
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn is_visible(&self) -> bool {
        self.bundled && !self.dismissed
    }
}

pub struct SetupBanner;

impl SetupBanner {
    /// Shown while the bundled deck is in use.
    pub fn show(ctx: &egui::Context, visible: bool) -> Option<BannerAction> {
        if !visible {
            return None;
        }

        let mut action = None;

        egui::TopBottomPanel::top("setup_banner").exact_height(30.0).show(ctx, |ui| {
            let banner_color = egui::Color32::from_rgb(70, 90, 160);
            let frame = egui::Frame::NONE.fill(banner_color);

            frame.show(ui, |ui| {
                ui.horizontal_centered(|ui| {
                    let close = ui.add(
                        egui::Button::new(egui::RichText::new("✕").color(egui::Color32::WHITE))
                            .frame(false),
                    );
                    if close.on_hover_text("Dismiss").clicked() {
                        action = Some(BannerAction::Dismiss);
                    }

                    let text = "ℹ Studying the bundled deck. Click to open your own roots file";
                    let response = ui.add(
                        egui::Label::new(
                            egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE),
                        )
                        .sense(egui::Sense::click()),
                    );

                    if response.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }

                    if response.clicked() {
                        action = Some(BannerAction::OpenDeck);
                    }
                });
            });
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_follows_bundled_deck() {
        let mut banner = BannerState::default();
        assert!(!banner.is_visible());

        banner.set_bundled(true);
        assert!(banner.is_visible());

        banner.set_bundled(false);
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_dismissed_banner_stays_hidden() {
        let mut banner = BannerState::default();
        banner.set_bundled(true);
        banner.dismiss();
        assert!(!banner.is_visible());

        // reloading the bundled deck does not bring it back
        banner.set_bundled(true);
        assert!(!banner.is_visible());
    }
}
