use chrono::{
    DateTime,
    Utc,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct ExamplePair {
    pub source: String, // Sentence in the studied language
    pub target: String, // Its translation
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub phonetic: String, // IPA transcription
    pub translation: String,
    pub definition: String,         // Marked up with **emphasis** spans
    pub mnemonic: String,           // Marked up with **emphasis** spans
    pub examples: Vec<ExamplePair>, // Non-empty
}

#[derive(Debug, Clone)]
pub struct CardSet {
    pub id: Uuid,                  // Assigned at creation, immutable
    pub created_at: DateTime<Utc>, // Recency ordering key
    pub words: Vec<WordEntry>,     // 1-4 entries, order is display order
    pub is_bookmarked: bool,
}

impl CardSet {
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self { id: Uuid::new_v4(), created_at: Utc::now(), words, is_bookmarked: false }
    }
}
