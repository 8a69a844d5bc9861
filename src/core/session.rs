use rand::{
    seq::SliceRandom,
    Rng,
};
use tracing::{
    debug,
    info,
};

use super::{
    errors::SessionError,
    models::{
        CardFace,
        FormRecord,
        RootRecord,
        SearchHit,
    },
    search::filter_deck,
};

/// Keys the study screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyKey {
    Left,
    Right,
    Space,
    Enter,
    Escape,
}

/// Study session over a working copy of the deck.
///
/// `cursor` is `None` while the welcome screen is up and always points inside
/// `deck` afterwards. Changing card always brings the front face back.
#[derive(Debug, Clone)]
pub struct Session {
    deck: Vec<RootRecord>,
    cursor: Option<usize>,
    flipped: bool,
    search_open: bool,
    forms_open: bool,
    query: String,
}

impl Session {
    pub fn new(source: &[RootRecord]) -> Self {
        Self {
            deck: source.to_vec(),
            cursor: None,
            flipped: false,
            search_open: false,
            forms_open: false,
            query: String::new(),
        }
    }

    pub fn deck(&self) -> &[RootRecord] {
        &self.deck
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_started(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn is_forms_open(&self) -> bool {
        self.forms_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.deck.is_empty() {
            return Err(SessionError::EmptyDeck);
        }

        self.cursor = Some(0);
        self.load_current();
        info!(roots = self.deck.len(), "study session started");
        Ok(())
    }

    /// Back to the welcome screen. Deck order is kept.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.flipped = false;
        self.search_open = false;
        self.forms_open = false;
        self.query.clear();
    }

    fn load_current(&mut self) {
        if self.flipped {
            self.flip();
        }
    }

    pub fn current(&self) -> Option<&RootRecord> {
        self.cursor.and_then(|cursor| self.deck.get(cursor))
    }

    pub fn card_face(&self) -> Option<CardFace<'_>> {
        let cursor = self.cursor?;
        let root = self.deck.get(cursor)?;

        Some(CardFace {
            arabic: &root.arabic,
            transliteration: &root.transliteration,
            meaning: &root.meaning,
            form_count: root.form_count(),
            position: cursor + 1,
            total: self.deck.len(),
        })
    }

    pub fn flip(&mut self) {
        if self.cursor.is_some() {
            self.flipped = !self.flipped;
        }
    }

    pub fn next(&mut self) {
        if let Some(cursor) = self.cursor {
            self.cursor = Some((cursor + 1) % self.deck.len());
            self.load_current();
        }
    }

    pub fn previous(&mut self) {
        if let Some(cursor) = self.cursor {
            let len = self.deck.len();
            self.cursor = Some((cursor + len - 1) % len);
            self.load_current();
        }
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cursor.is_none() {
            return;
        }

        self.deck.shuffle(rng);
        self.cursor = Some(0);
        self.load_current();
        debug!("deck shuffled");
    }

    /// Percentage of the deck reached, in `(0, 100]`.
    pub fn progress(&self) -> Option<f32> {
        let cursor = self.cursor?;
        Some((cursor + 1) as f32 / self.deck.len() as f32 * 100.0)
    }

    pub fn show_forms(&mut self) {
        if self.cursor.is_some() {
            self.forms_open = true;
        }
    }

    pub fn close_forms(&mut self) {
        self.forms_open = false;
    }

    pub fn forms(&self) -> &[FormRecord] {
        self.current().map(|root| root.forms.as_slice()).unwrap_or(&[])
    }

    pub fn open_search(&mut self) {
        self.query.clear();
        self.search_open = true;
    }

    pub fn close_search(&mut self) {
        self.search_open = false;
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn search_results(&self) -> Vec<SearchHit<'_>> {
        filter_deck(&self.deck, &self.query)
    }

    pub fn select_from_search(&mut self, index: usize) {
        if self.cursor.is_none() || index >= self.deck.len() {
            return;
        }

        self.cursor = Some(index);
        self.load_current();
        self.close_search();
    }

    /// Returns true when the key was handled, so the caller can swallow it.
    pub fn handle_key(&mut self, key: StudyKey) -> bool {
        if !self.is_started() {
            return false;
        }

        match key {
            StudyKey::Left => self.previous(),
            StudyKey::Right => self.next(),
            StudyKey::Space | StudyKey::Enter => self.flip(),
            StudyKey::Escape => {
                if self.forms_open {
                    self.close_forms();
                } else if self.search_open {
                    self.close_search();
                } else {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    fn form(arabic: &str) -> FormRecord {
        FormRecord {
            arabic: arabic.to_string(),
            transliteration: arabic.to_string(),
            meaning: arabic.to_string(),
        }
    }

    fn root(arabic: &str, transliteration: &str, meaning: &str, forms: usize) -> RootRecord {
        RootRecord {
            arabic: arabic.to_string(),
            transliteration: transliteration.to_string(),
            meaning: meaning.to_string(),
            forms: (0..forms).map(|i| form(&format!("{arabic}{i}"))).collect(),
        }
    }

    fn example_deck() -> Vec<RootRecord> {
        vec![root("كتب", "k-t-b", "to write", 3), root("قرأ", "q-r-a", "to read", 2)]
    }

    fn larger_deck() -> Vec<RootRecord> {
        (0..7).map(|i| root(&format!("ج{i}"), &format!("r{i}"), &format!("m{i}"), i)).collect()
    }

    fn started(deck: &[RootRecord]) -> Session {
        let mut session = Session::new(deck);
        session.start().unwrap();
        session
    }

    #[test]
    fn test_worked_example() {
        let mut session = started(&example_deck());

        let face = session.card_face().unwrap();
        assert_eq!(face.arabic, "كتب");
        assert_eq!(face.transliteration, "k-t-b");
        assert_eq!(face.meaning, "to write");
        assert_eq!(face.form_count, 3);
        assert_eq!(face.counter_label(), "1 / 2");
        assert_eq!(session.progress(), Some(50.0));

        session.next();
        assert_eq!(session.card_face().unwrap().counter_label(), "2 / 2");
        assert_eq!(session.progress(), Some(100.0));

        session.next();
        assert_eq!(session.cursor(), Some(0));

        session.search("read");
        let hits = session.search_results();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].root.arabic, "قرأ");
    }

    #[test]
    fn test_start_refuses_empty_deck() {
        let mut session = Session::new(&[]);
        assert_eq!(session.start(), Err(SessionError::EmptyDeck));
        assert!(!session.is_started());
        assert_eq!(session.progress(), None);
        assert!(session.card_face().is_none());
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let deck = larger_deck();
        let mut session = started(&deck);
        session.next();
        session.next();
        let origin = session.cursor();

        for _ in 0..deck.len() {
            session.next();
        }
        assert_eq!(session.cursor(), origin);
    }

    #[test]
    fn test_previous_inverts_next() {
        let deck = larger_deck();
        let mut session = started(&deck);

        for _ in 0..deck.len() {
            let before = session.cursor();
            session.next();
            session.previous();
            assert_eq!(session.cursor(), before);

            session.previous();
            session.next();
            assert_eq!(session.cursor(), before);

            session.next();
        }
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let deck = larger_deck();
        let mut session = started(&deck);
        session.previous();
        assert_eq!(session.cursor(), Some(deck.len() - 1));
        assert_eq!(session.progress(), Some(100.0));
    }

    #[test]
    fn test_single_card_deck() {
        let deck = vec![root("كتب", "k-t-b", "to write", 0)];
        let mut session = started(&deck);
        session.next();
        assert_eq!(session.cursor(), Some(0));
        session.previous();
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.progress(), Some(100.0));
        assert!(session.forms().is_empty());
    }

    #[test]
    fn test_shuffle_keeps_roots_and_resets_cursor() {
        let deck = larger_deck();
        let mut session = started(&deck);
        session.next();
        session.next();
        session.flip();

        let mut rng = StdRng::seed_from_u64(7);
        session.shuffle_with(&mut rng);

        assert_eq!(session.cursor(), Some(0));
        assert!(!session.is_flipped());

        let mut shuffled: Vec<_> = session.deck().iter().map(|r| r.arabic.clone()).collect();
        let mut original: Vec<_> = deck.iter().map(|r| r.arabic.clone()).collect();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn test_shuffle_leaves_source_untouched() {
        let deck = larger_deck();
        let snapshot = deck.clone();
        let mut session = started(&deck);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5 {
            session.shuffle_with(&mut rng);
        }
        assert_eq!(deck, snapshot);
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        let deck = vec![
            root("أ", "a", "a", 0),
            root("ب", "b", "b", 0),
            root("ت", "t", "t", 0),
        ];
        let mut session = started(&deck);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..600 {
            session.shuffle_with(&mut rng);
            let order: Vec<_> =
                session.deck().iter().map(|r| r.transliteration.clone()).collect();
            seen.insert(order.join(""));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_double_flip_is_identity() {
        let mut session = started(&example_deck());
        assert!(!session.is_flipped());
        session.flip();
        assert!(session.is_flipped());
        session.flip();
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_card_change_shows_front_face() {
        let mut session = started(&example_deck());

        session.flip();
        session.next();
        assert!(!session.is_flipped());

        session.flip();
        session.previous();
        assert!(!session.is_flipped());

        session.flip();
        session.select_from_search(1);
        assert!(!session.is_flipped());

        session.next();
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_open_search_lists_whole_deck() {
        let deck = larger_deck();
        let mut session = started(&deck);
        session.search("m3");
        session.open_search();

        assert!(session.is_search_open());
        assert_eq!(session.query(), "");
        let opened: Vec<usize> = session.search_results().iter().map(|h| h.index).collect();

        session.search("");
        let blank: Vec<usize> = session.search_results().iter().map(|h| h.index).collect();
        assert_eq!(opened, blank);
        assert_eq!(opened, (0..deck.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_search_follows_current_deck_order() {
        let deck = larger_deck();
        let mut session = started(&deck);
        let mut rng = StdRng::seed_from_u64(3);
        session.shuffle_with(&mut rng);

        session.open_search();
        let listed: Vec<&str> =
            session.search_results().iter().map(|h| h.root.arabic.as_str()).collect();
        let current: Vec<&str> = session.deck().iter().map(|r| r.arabic.as_str()).collect();
        assert_eq!(listed, current);
    }

    #[test]
    fn test_select_from_search_jumps_and_closes() {
        let deck = larger_deck();
        let mut session = started(&deck);
        session.open_search();
        session.search("R4");

        let index = session.search_results()[0].index;
        session.select_from_search(index);

        assert_eq!(session.cursor(), Some(4));
        assert!(!session.is_search_open());
        assert_eq!(session.current().unwrap().transliteration, "r4");
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut session = started(&example_deck());
        session.open_search();
        session.select_from_search(99);
        assert_eq!(session.cursor(), Some(0));
        assert!(session.is_search_open());
    }

    #[test]
    fn test_select_before_start_is_ignored() {
        let mut session = Session::new(&example_deck());
        session.select_from_search(1);
        assert!(!session.is_started());
        assert_eq!(session.cursor(), None);
        assert!(session.card_face().is_none());
        assert!(session.progress().is_none());

        session.start().unwrap();
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn test_forms_follow_current_root() {
        let mut session = started(&example_deck());
        session.show_forms();
        assert!(session.is_forms_open());
        assert_eq!(session.forms().len(), 3);
        assert_eq!(session.forms()[0].arabic, "كتب0");

        session.close_forms();
        session.next();
        assert_eq!(session.forms().len(), 2);
        assert!(!session.is_forms_open());
    }

    #[test]
    fn test_modals_are_independent() {
        let mut session = started(&example_deck());
        session.show_forms();
        session.open_search();
        assert!(session.is_forms_open());
        assert!(session.is_search_open());

        assert!(session.handle_key(StudyKey::Escape));
        assert!(!session.is_forms_open());
        assert!(session.is_search_open());

        assert!(session.handle_key(StudyKey::Escape));
        assert!(!session.is_search_open());

        assert!(!session.handle_key(StudyKey::Escape));
    }

    #[test]
    fn test_key_routing() {
        let deck = larger_deck();
        let mut session = started(&deck);

        assert!(session.handle_key(StudyKey::Right));
        assert_eq!(session.cursor(), Some(1));
        assert!(session.handle_key(StudyKey::Left));
        assert!(session.handle_key(StudyKey::Left));
        assert_eq!(session.cursor(), Some(deck.len() - 1));

        assert!(session.handle_key(StudyKey::Space));
        assert!(session.is_flipped());
        assert!(session.handle_key(StudyKey::Enter));
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_keys_ignored_before_start() {
        let deck = larger_deck();
        let mut session = Session::new(&deck);

        for key in [
            StudyKey::Left,
            StudyKey::Right,
            StudyKey::Space,
            StudyKey::Enter,
            StudyKey::Escape,
        ] {
            assert!(!session.handle_key(key));
        }
        assert_eq!(session.cursor(), None);
        assert!(!session.is_flipped());
    }

    #[test]
    fn test_progress_range() {
        let deck = larger_deck();
        let mut session = started(&deck);

        for _ in 0..deck.len() {
            let progress = session.progress().unwrap();
            assert!(progress > 0.0 && progress <= 100.0);
            let at_end = session.cursor() == Some(deck.len() - 1);
            assert_eq!(progress == 100.0, at_end);
            session.next();
        }
    }

    #[test]
    fn test_reset_returns_to_welcome() {
        let mut session = started(&example_deck());
        session.next();
        session.flip();
        session.show_forms();
        session.reset();

        assert!(!session.is_started());
        assert!(!session.is_flipped());
        assert!(!session.is_forms_open());
        assert!(session.start().is_ok());
        assert_eq!(session.cursor(), Some(0));
    }
}
