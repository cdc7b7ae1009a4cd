//! Source text for the Huffman demo.

use std::path::Path;

/// Used when no speech file is configured or it cannot be read.
pub const FALLBACK_TEXT: &str = "i have a dream that one day this nation will rise up and live out \
the true meaning of its creed we hold these truths to be self evident that all men are created equal";

/// Words encoded by the demo.
pub const DEMO_WORDS: &[&str] = &["dream", "freedom", "equality", "hope", "america"];

/// Where the demo text came from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Read from this file.
    File(String),
    /// Built-in excerpt.
    Fallback,
}

/// Lowercase `raw`, keeping only ASCII letters and spaces.
pub fn clean_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Load and clean the speech text, falling back to [`FALLBACK_TEXT`] when
/// the file is unset, unreadable or has no letters.
pub fn load_text(path: Option<&Path>) -> (String, TextSource) {
    let Some(path) = path else {
        return (FALLBACK_TEXT.to_string(), TextSource::Fallback);
    };

    match std::fs::read_to_string(path) {
        Ok(raw) => {
            let text = clean_text(&raw);
            if !text.chars().any(|c| c.is_ascii_alphabetic()) {
                log::warn!(
                    "{} has no letters; using built-in text",
                    path.display()
                );
                return (FALLBACK_TEXT.to_string(), TextSource::Fallback);
            }
            log::info!(
                "read speech file {}, {} characters after cleaning",
                path.display(),
                text.len()
            );
            (text, TextSource::File(path.display().to_string()))
        }
        Err(e) => {
            log::warn!(
                "could not read {}: {}; using built-in text",
                path.display(),
                e
            );
            (FALLBACK_TEXT.to_string(), TextSource::Fallback)
        }
    }
}
