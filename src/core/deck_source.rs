use std::path::{
    Path,
    PathBuf,
};

use tracing::{
    info,
    warn,
};

use super::{
    errors::JidhrError,
    models::RootRecord,
};
use crate::persistence::get_app_data_dir;

const BUNDLED_DECK: &str = include_str!("../../assets/roots.json");
pub const USER_DECK_FILENAME: &str = "roots.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckOrigin {
    Bundled,
    File(PathBuf),
}

impl DeckOrigin {
    pub fn label(&self) -> String {
        match self {
            DeckOrigin::Bundled => "Bundled deck".to_string(),
            DeckOrigin::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// What the user asked for. `Resolve` walks the resolution order; `Bundled`
/// skips it entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckRequest {
    Resolve(Option<PathBuf>),
    Bundled,
}

impl DeckRequest {
    pub fn loading_message(&self) -> String {
        match self {
            DeckRequest::Resolve(Some(path)) => format!("Loading {}...", path.display()),
            DeckRequest::Resolve(None) => "Loading roots...".to_string(),
            DeckRequest::Bundled => "Loading bundled roots...".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedDeck {
    pub roots: Vec<RootRecord>,
    pub origin: DeckOrigin,
    /// Set when a deck file was requested but could not be used.
    pub fallback_reason: Option<String>,
}

pub fn bundled_deck() -> Result<Vec<RootRecord>, JidhrError> {
    parse_json_deck(BUNDLED_DECK)
}

pub fn parse_json_deck(content: &str) -> Result<Vec<RootRecord>, JidhrError> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_hjson_deck(content: &str) -> Result<Vec<RootRecord>, JidhrError> {
    Ok(serde_hjson::from_str(content)?)
}

pub fn parse_deck(content: &str, path: &Path) -> Result<Vec<RootRecord>, JidhrError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => parse_json_deck(content),
        "hjson" => parse_hjson_deck(content),
        _ => Err(JidhrError::UnsupportedDeckFormat(path.display().to_string())),
    }
}

pub async fn read_deck_file(path: &Path) -> Result<Vec<RootRecord>, JidhrError> {
    let content = tokio::fs::read_to_string(path).await?;
    parse_deck(&content, path)
}

/// Explicit path first, then `roots.json` in the data dir, then the bundled deck.
pub fn resolve_deck_path(configured: Option<&Path>, data_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = configured {
        return Some(path.to_path_buf());
    }

    let user_deck = data_dir.join(USER_DECK_FILENAME);
    user_deck.is_file().then_some(user_deck)
}

fn load_bundled(fallback_reason: Option<String>) -> Result<LoadedDeck, JidhrError> {
    let roots = bundled_deck()?;
    info!(roots = roots.len(), "loaded bundled deck");
    Ok(LoadedDeck { roots, origin: DeckOrigin::Bundled, fallback_reason })
}

pub async fn load_deck(request: &DeckRequest) -> Result<LoadedDeck, JidhrError> {
    load_deck_from(request, &get_app_data_dir()).await
}

pub async fn load_deck_from(
    request: &DeckRequest,
    data_dir: &Path,
) -> Result<LoadedDeck, JidhrError> {
    let configured = match request {
        DeckRequest::Bundled => return load_bundled(None),
        DeckRequest::Resolve(configured) => configured.as_deref(),
    };

    let Some(path) = resolve_deck_path(configured, data_dir) else {
        return load_bundled(None);
    };

    match read_deck_file(&path).await {
        Ok(roots) => {
            info!(roots = roots.len(), path = %path.display(), "loaded deck file");
            Ok(LoadedDeck { roots, origin: DeckOrigin::File(path), fallback_reason: None })
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "deck file unusable, using bundled deck");
            load_bundled(Some(format!("{}: {}", path.display(), e)))
        }
    }
}
