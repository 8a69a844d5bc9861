pub mod actions;
pub mod app;
pub mod arabic_text;
pub mod card_view;
pub mod error_modal;
pub mod forms_modal;
pub mod message_overlay;
pub mod search_modal;
pub mod settings;
pub mod setup_banner;
pub mod theme;
pub mod top_bar;
pub mod welcome;

pub use app::JidhrApp;
