use crate::core::deck_source::LoadedDeck;

#[derive(Debug, Clone)]
pub enum TaskResult {
    DeckLoaded(Result<LoadedDeck, String>),
    LoadingMessage(String),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::DeckLoaded(_) => "deck_loaded",
            TaskResult::LoadingMessage(_) => "loading_message",
        }
    }
}
