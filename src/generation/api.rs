use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::core::{
    CardSet,
    MnemoError,
    WordEntry,
};

const MODEL: &str = "gemini-2.5-flash";
const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Most words a single card set will hold; anything past this is cut.
const MAX_WORDS: usize = 4;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeneratedWords {
    words: Vec<WordEntry>,
}

fn request_body(input: &str) -> serde_json::Value {
    let word_schema = json!({
        "type": "OBJECT",
        "properties": {
            "word": { "type": "STRING" },
            "phonetic": { "type": "STRING", "description": "IPA phonetic transcription" },
            "translation": { "type": "STRING", "description": "Chinese translation (Hanzi only, no Pinyin)" },
            "definition": { "type": "STRING", "description": "Concise definition in Chinese. Wrap keywords in **double asterisks**." },
            "mnemonic": { "type": "STRING", "description": "A creative memory aid in Chinese. Wrap key associations in **double asterisks**." },
            "examples": {
                "type": "ARRAY",
                "description": "One simple example sentence, bilingual.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "source": { "type": "STRING", "description": "English sentence. Wrap the target word in **double asterisks**." },
                        "target": { "type": "STRING", "description": "Chinese translation. Wrap the translation of the target word in **double asterisks**." }
                    },
                    "required": ["source", "target"]
                }
            }
        },
        "required": ["word", "phonetic", "translation", "definition", "mnemonic", "examples"]
    });

    let prompt = format!(
        "Create a flashcard set for the following words: \"{input}\". \
         If the input is a comma-separated list, generate details for ALL words in it (at most {MAX_WORDS}). \
         1. Translation: Chinese characters only. \
         2. Definition & Mnemonic: must be in CHINESE. \
         3. Examples: provide 1 bilingual example per word. \
         4. IMPORTANT: in definitions, mnemonics, and examples, wrap the target word (or its translation/keyword) \
         in **double asterisks** (e.g. **word**) for highlighting. \
         Ensure the output JSON strictly matches the schema."
    );

    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": { "words": { "type": "ARRAY", "items": word_schema } }
            }
        }
    })
}

/// Validates the model's JSON payload into word entries. Transport
/// succeeded by the time this runs, so every failure here is a
/// contract violation by the generator.
fn parse_generated(text: &str) -> Result<Vec<WordEntry>, MnemoError> {
    let parsed: GeneratedWords =
        serde_json::from_str(text).map_err(|error| MnemoError::InvalidSchema(error.to_string()))?;

    if parsed.words.is_empty() {
        return Err(MnemoError::EmptyResponse);
    }
    if parsed.words.iter().any(|entry| entry.examples.is_empty()) {
        return Err(MnemoError::InvalidSchema("word entry without examples".to_string()));
    }

    let mut words = parsed.words;
    words.truncate(MAX_WORDS);
    Ok(words)
}

/// Asks the generator for a card set covering `input`. The returned
/// set gets a fresh id and timestamp; the store stays untouched until
/// the caller decides to add it.
pub async fn generate(input: &str) -> Result<CardSet, MnemoError> {
    let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| MnemoError::MissingApiKey)?;

    let url = format!("{ENDPOINT}/{MODEL}:generateContent");
    let response: GenerateResponse = Client::new()
        .post(&url)
        .query(&[("key", api_key.as_str())])
        .json(&request_body(input))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let text = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(MnemoError::EmptyResponse)?;

    let words = parse_generated(&text)?;
    Ok(CardSet::new(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "words": [{
            "word": "Dominate",
            "phonetic": "/ˈdɒmɪneɪt/",
            "translation": "支配",
            "definition": "拥有**控制**权。",
            "mnemonic": "多米诺骨牌。",
            "examples": [{ "source": "They **dominate** the market.", "target": "他们**主导**市场。" }]
        }]
    }"#;

    #[test]
    fn test_parse_generated_words() {
        let words = parse_generated(VALID).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "Dominate");
        assert_eq!(words[0].examples[0].target, "他们**主导**市场。");
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        let result = parse_generated(r#"{ "words": [] }"#);
        assert!(matches!(result, Err(MnemoError::EmptyResponse)));
    }

    #[test]
    fn test_schema_mismatch_is_rejected() {
        assert!(matches!(
            parse_generated("not even json"),
            Err(MnemoError::InvalidSchema(_))
        ));
        assert!(matches!(
            parse_generated(r#"{ "words": [{ "word": "x" }] }"#),
            Err(MnemoError::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_entries_without_examples_are_rejected() {
        let text = r#"{
            "words": [{
                "word": "x", "phonetic": "", "translation": "",
                "definition": "", "mnemonic": "", "examples": []
            }]
        }"#;
        assert!(matches!(parse_generated(text), Err(MnemoError::InvalidSchema(_))));
    }

    #[test]
    fn test_request_body_carries_input_and_schema() {
        let body = request_body("dominate, nominate");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("dominate, nominate"));
        assert_eq!(
            body["generationConfig"]["responseMimeType"].as_str().unwrap(),
            "application/json"
        );
    }
}
