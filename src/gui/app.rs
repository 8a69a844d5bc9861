use std::{
    path::Path,
    sync::Arc,
    time::{
        Duration,
        Instant,
    },
};

use eframe::egui;
use tracing::{
    error,
    info,
    warn,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    card_view::{
        study_screen,
        CardViewOptions,
    },
    error_modal::ErrorModal,
    forms_modal::forms_modal,
    message_overlay::MessageOverlay,
    search_modal::SearchModal,
    settings::{
        data::SETTINGS_FILENAME,
        SettingsData,
    },
    setup_banner::{
        BannerAction,
        BannerState,
        SetupBanner,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        pick_deck_file,
        TopBar,
    },
    welcome::welcome_screen,
};
use crate::{
    core::{
        deck_source::{
            DeckOrigin,
            DeckRequest,
            LoadedDeck,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
        RootRecord,
        Session,
        StudyKey,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const ARABIC_FONT: &str = "arabic";
const SHUFFLE_SPIN: Duration = Duration::from_millis(300);

/// Tried after `font_path`, in order. egui's built-in fonts carry no
/// Arabic glyphs.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",
    "/usr/share/fonts/noto/NotoNaskhArabic-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\tahoma.ttf",
];

pub struct JidhrApp {
    // Deck
    source: Vec<RootRecord>,
    deck_origin: Option<DeckOrigin>,
    pub session: Option<Session>,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    pub error_modal: ErrorModal,
    search_modal: SearchModal,
    banner: BannerState,
    shuffled_at: Option<Instant>,
    actions: ActionQueue,

    task_manager: TaskManager,
}

impl JidhrApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILENAME).sanitized();

        let task_manager = TaskManager::new();
        task_manager.load_deck(settings_data.deck_request());

        let app = Self {
            source: Vec::new(),
            deck_origin: None,
            session: None,

            settings_data,

            theme: Theme::dracula(),
            message_overlay: MessageOverlay::new(),
            error_modal: ErrorModal::new(),
            search_modal: SearchModal::new(),
            banner: BannerState::default(),
            shuffled_at: None,
            actions: ActionQueue::new(),

            task_manager,
        };

        app.setup_fonts(&cc.egui_ctx);
        set_theme(&cc.egui_ctx, &app.theme);
        app.apply_view_settings(&cc.egui_ctx);

        app
    }

    fn setup_fonts(&self, ctx: &egui::Context) {
        let configured = self.settings_data.font_path.as_deref();
        let mut candidates = configured
            .into_iter()
            .chain(SYSTEM_FONT_CANDIDATES.iter().map(Path::new));

        let Some((path, bytes)) = candidates.find_map(|path| match std::fs::read(path) {
            Ok(bytes) => Some((path.to_path_buf(), bytes)),
            Err(e) => {
                if Some(path) == configured {
                    warn!(path = %path.display(), error = %e, "configured font unreadable");
                }
                None
            }
        }) else {
            warn!("no Arabic-capable font found, Arabic text may not render");
            return;
        };

        info!(path = %path.display(), "using Arabic font");

        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert(ARABIC_FONT.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));

        // Defaults stay first for Latin text, Arabic falls through to this.
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(ARABIC_FONT.to_owned());
        }

        ctx.set_fonts(fonts);
    }

    fn apply_view_settings(&self, ctx: &egui::Context) {
        ctx.set_zoom_factor(self.settings_data.zoom);

        let (theme, preference) = if self.settings_data.dark_mode {
            (egui::Theme::Dark, egui::ThemePreference::Dark)
        } else {
            (egui::Theme::Light, egui::ThemePreference::Light)
        };
        ctx.set_theme(theme);
        ctx.options_mut(|o| o.theme_preference = preference);
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILENAME) {
            error!(error = %e, "failed to save settings");
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LoadingMessage(message) => self.message_overlay.set_message(message),
            TaskResult::DeckLoaded(Ok(loaded)) => self.install_deck(loaded),
            TaskResult::DeckLoaded(Err(e)) => {
                self.message_overlay.clear_message();
                error!(error = %e, "deck could not be loaded");
                self.error_modal.show_error(
                    "Deck unavailable",
                    "No deck could be loaded.",
                    Some(e),
                );
                self.install_deck(LoadedDeck {
                    roots: Vec::new(),
                    origin: DeckOrigin::Bundled,
                    fallback_reason: None,
                });
            }
        }
    }

    fn install_deck(&mut self, loaded: LoadedDeck) {
        self.message_overlay.clear_message();

        if let Some(reason) = &loaded.fallback_reason {
            self.error_modal.show_error(
                "Deck file not used",
                "The selected deck could not be read, so the bundled deck was loaded instead.",
                Some(reason.clone()),
            );
        }

        self.banner.set_bundled(loaded.origin == DeckOrigin::Bundled);
        self.session = Some(Session::new(&loaded.roots));
        self.source = loaded.roots;
        self.deck_origin = Some(loaded.origin);
        self.search_modal.reset();
    }

    fn reload_deck(&mut self, request: DeckRequest) {
        self.save_settings();
        self.session = None;
        self.message_overlay.set_message(request.loading_message());
        self.task_manager.load_deck(request);
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_started() || self.error_modal.is_open() {
            return;
        }

        // Esc closes our modals even from the search box; the rest only when
        // no text field has focus.
        let typing = ctx.wants_keyboard_input();
        let bindings = [
            (egui::Key::Escape, StudyKey::Escape, true),
            (egui::Key::ArrowLeft, StudyKey::Left, !typing),
            (egui::Key::ArrowRight, StudyKey::Right, !typing),
            (egui::Key::Space, StudyKey::Space, !typing),
            (egui::Key::Enter, StudyKey::Enter, !typing),
        ];

        for (key, study_key, enabled) in bindings {
            if !enabled || !ctx.input(|i| i.key_pressed(key)) {
                continue;
            }
            if session.handle_key(study_key) {
                ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key));
            }
        }
    }

    fn apply_actions(&mut self, ctx: &egui::Context) {
        if self.actions.is_empty() {
            return;
        }

        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            self.apply_action(action, ctx);
        }
        ctx.request_repaint();
    }

    fn apply_action(&mut self, action: UiAction, ctx: &egui::Context) {
        match action {
            UiAction::OpenDeck(path) => {
                self.settings_data.choose_deck_file(path);
                self.reload_deck(self.settings_data.deck_request());
                return;
            }
            UiAction::UseBundledDeck => {
                self.settings_data.choose_bundled_deck();
                self.reload_deck(DeckRequest::Bundled);
                return;
            }
            UiAction::SetDarkMode(dark_mode) => {
                self.settings_data.dark_mode = dark_mode;
                self.apply_view_settings(ctx);
                self.save_settings();
                return;
            }
            UiAction::SetTransliterationOnFront(on_front) => {
                self.settings_data.show_transliteration_on_front = on_front;
                self.save_settings();
                return;
            }
            UiAction::ZoomIn => {
                self.settings_data.zoom_in();
                self.apply_view_settings(ctx);
                self.save_settings();
                return;
            }
            UiAction::ZoomOut => {
                self.settings_data.zoom_out();
                self.apply_view_settings(ctx);
                self.save_settings();
                return;
            }
            _ => {}
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        match action {
            UiAction::Start => {
                if let Err(e) = session.start() {
                    warn!(error = %e, "cannot start session");
                }
            }
            UiAction::Home => session.reset(),
            UiAction::Flip => session.flip(),
            UiAction::Next => session.next(),
            UiAction::Previous => session.previous(),
            UiAction::Shuffle => {
                session.shuffle();
                self.shuffled_at = Some(Instant::now());
                ctx.request_repaint_after(SHUFFLE_SPIN);
            }
            UiAction::ShowForms => session.show_forms(),
            UiAction::CloseForms => session.close_forms(),
            UiAction::OpenSearch => {
                session.open_search();
                self.search_modal.reset();
            }
            UiAction::CloseSearch => session.close_search(),
            UiAction::SetSearch(query) => session.search(query),
            UiAction::SelectFromSearch(index) => session.select_from_search(index),
            _ => {}
        }
    }
}

impl eframe::App for JidhrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.handle_keyboard(ctx);

        let studying = self.session.as_ref().is_some_and(Session::is_started);
        TopBar::show(
            ctx,
            &mut self.actions,
            &self.settings_data,
            self.deck_origin.as_ref(),
            self.source.len(),
            studying,
        );

        match SetupBanner::show(ctx, self.banner.is_visible() && self.session.is_some()) {
            Some(BannerAction::OpenDeck) => {
                if let Some(path) = pick_deck_file() {
                    self.actions.push(UiAction::OpenDeck(path));
                }
            }
            Some(BannerAction::Dismiss) => self.banner.dismiss(),
            None => {}
        }

        let shuffle_spinning = self.shuffled_at.is_some_and(|at| at.elapsed() < SHUFFLE_SPIN);

        if let Some(session) = &self.session {
            if session.is_started() {
                let options = CardViewOptions {
                    transliteration_on_front: self.settings_data.show_transliteration_on_front,
                    shuffle_spinning,
                };
                study_screen(ctx, session, &self.theme, &options, &mut self.actions);
                forms_modal(ctx, session, &self.theme, &mut self.actions);
                self.search_modal.show(ctx, session, &self.theme, &mut self.actions);
            } else {
                welcome_screen(ctx, &self.theme, session.deck().len(), &mut self.actions);
            }
        } else {
            egui::CentralPanel::default().show(ctx, |_ui| {});
        }

        self.message_overlay.show(ctx, &self.theme);
        self.error_modal.show(ctx, &self.theme);

        self.apply_actions(ctx);
    }
}
