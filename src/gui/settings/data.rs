use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::deck_source::DeckRequest;

pub const SETTINGS_FILENAME: &str = "settings.json";

pub const MIN_ZOOM: f32 = 0.75;
pub const MAX_ZOOM: f32 = 3.0;
const ZOOM_STEP: f32 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub zoom: f32,
    /// Deck file to study instead of the data dir / bundled deck.
    pub deck_path: Option<PathBuf>,
    /// Set by "Use Bundled Deck"; skips `deck_path` and the data dir.
    pub use_bundled_deck: bool,
    /// TTF/OTF with Arabic glyphs; tried before the system font candidates.
    pub font_path: Option<PathBuf>,
    pub show_transliteration_on_front: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            dark_mode: true,
            zoom: 1.5,
            deck_path: None,
            use_bundled_deck: false,
            font_path: None,
            show_transliteration_on_front: true,
        }
    }
}

impl SettingsData {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn deck_request(&self) -> DeckRequest {
        if self.use_bundled_deck {
            DeckRequest::Bundled
        } else {
            DeckRequest::Resolve(self.deck_path.clone())
        }
    }

    pub fn choose_deck_file(&mut self, path: PathBuf) {
        self.deck_path = Some(path);
        self.use_bundled_deck = false;
    }

    pub fn choose_bundled_deck(&mut self) {
        self.deck_path = None;
        self.use_bundled_deck = true;
    }

    /// Hand-edited files can carry anything.
    pub fn sanitized(mut self) -> Self {
        if !self.zoom.is_finite() {
            self.zoom = Self::default().zoom;
        }
        self.zoom = self.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: SettingsData = serde_json::from_str(r#"{ "dark_mode": false }"#).unwrap();
        assert!(!settings.dark_mode);
        assert_eq!(settings.zoom, SettingsData::default().zoom);
        assert!(settings.deck_path.is_none());
        assert!(settings.show_transliteration_on_front);
    }

    #[test]
    fn test_round_trip() {
        let settings = SettingsData {
            deck_path: Some(PathBuf::from("/home/me/roots.hjson")),
            zoom: 2.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: SettingsData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_deck_choice_maps_to_request() {
        let mut settings = SettingsData::default();
        assert_eq!(settings.deck_request(), DeckRequest::Resolve(None));

        let path = PathBuf::from("/home/me/roots.hjson");
        settings.choose_deck_file(path.clone());
        assert_eq!(settings.deck_request(), DeckRequest::Resolve(Some(path.clone())));

        settings.choose_bundled_deck();
        assert_eq!(settings.deck_request(), DeckRequest::Bundled);
        assert!(settings.deck_path.is_none());

        settings.choose_deck_file(path.clone());
        assert_eq!(settings.deck_request(), DeckRequest::Resolve(Some(path)));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut settings = SettingsData::default();
        for _ in 0..20 {
            settings.zoom_in();
        }
        assert_eq!(settings.zoom, MAX_ZOOM);
        for _ in 0..20 {
            settings.zoom_out();
        }
        assert_eq!(settings.zoom, MIN_ZOOM);

        let wild = SettingsData { zoom: 40.0, ..Default::default() }.sanitized();
        assert_eq!(wild.zoom, MAX_ZOOM);
        let broken = SettingsData { zoom: f32::NAN, ..Default::default() }.sanitized();
        assert_eq!(broken.zoom, SettingsData::default().zoom);
    }
}
