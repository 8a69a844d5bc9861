use super::models::{
    RootRecord,
    SearchHit,
};

/// Arabic has no case, so the script field is compared literally while the
/// Latin fields are folded to lowercase.
pub fn matches_search(root: &RootRecord, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let lowercase_query = query.to_lowercase();

    root.arabic.contains(query)
        || root.transliteration.to_lowercase().contains(&lowercase_query)
        || root.meaning.to_lowercase().contains(&lowercase_query)
}

/// Filters the deck without reordering it. Each hit keeps its deck position.
pub fn filter_deck<'a>(deck: &'a [RootRecord], query: &str) -> Vec<SearchHit<'a>> {
    deck.iter()
        .enumerate()
        .filter(|(_, root)| matches_search(root, query))
        .map(|(index, root)| SearchHit { index, root })
        .collect()
}
