use serde::{
    Deserialize,
    Serialize,
};

/// A word built from a root, e.g. كِتَاب from ك-ت-ب.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub arabic: String,
    pub transliteration: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootRecord {
    pub arabic: String,          // Root letters in Arabic script
    pub transliteration: String, // Latin phonetic spelling, e.g. "k-t-b"
    pub meaning: String,         // Short gloss
    #[serde(default)]
    pub forms: Vec<FormRecord>,  // Derived forms, in display order
}

impl RootRecord {
    pub fn form_count(&self) -> usize {
        self.forms.len()
    }
}

/// What the study card shows for the root under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace<'a> {
    pub arabic: &'a str,
    pub transliteration: &'a str,
    pub meaning: &'a str,
    pub form_count: usize,
    pub position: usize, // 1-based
    pub total: usize,
}

impl CardFace<'_> {
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

/// One row of the search overlay. `index` is the root's position in the deck
/// at the time the list was built, which is what selecting it jumps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub index: usize,
    pub root: &'a RootRecord,
}

impl SearchHit<'_> {
    pub fn details_label(&self) -> String {
        format!(
            "{} • {} • {} forms",
            self.root.transliteration,
            self.root.meaning,
            self.root.form_count()
        )
    }
}
