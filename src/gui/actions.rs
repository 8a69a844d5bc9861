use std::path::PathBuf;

// Widgets only read the session; their clicks are queued here and applied after drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Session
    Start,
    Home,
    Flip,
    Next,
    Previous,
    Shuffle,

    // Modals
    ShowForms,
    CloseForms,
    OpenSearch,
    CloseSearch,
    SetSearch(String),
    SelectFromSearch(usize),

    // Deck source
    OpenDeck(PathBuf),
    UseBundledDeck,

    // Settings
    SetDarkMode(bool),
    SetTransliterationOnFront(bool),
    ZoomIn,
    ZoomOut,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
