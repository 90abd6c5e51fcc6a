//! Text renderings of the two screen regions. Every call produces the full
//! replacement content of its region.

use std::fmt::Write;

use wordbank_types::{DictionaryEntry, LookupResult};

pub const FETCHING: &str = "Fetching word...";
pub const EMPTY_INPUT: &str = "Please enter a word to search.";
pub const NOTHING_TO_SAVE: &str = "Nothing to save yet. Search a word first.";
pub const PERSONAL_EMPTY: &str = "Your personal dictionary is empty. Search a word to add some!";
pub const PERSONAL_FALLBACK: &str =
    "An error occurred while displaying your personal dictionary. Please try again later.";
pub const SAVE_ACTION: &str = "[Add to My Vocabulary] type /save";

pub fn render_message(message: &str) -> String {
    message.to_string()
}

pub fn render_lookup(result: &LookupResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.word);

    for (category, definitions) in &result.definitions_by_category {
        let _ = writeln!(out, "  {category}:");
        for definition in definitions {
            let _ = writeln!(out, "    - {definition}");
        }
    }

    out.push('\n');
    out.push_str(SAVE_ACTION);
    out
}

/// Each saved card shows the first stored definition of every category
pub fn render_personal(entries: &[DictionaryEntry]) -> String {
    if entries.is_empty() {
        return PERSONAL_EMPTY.to_string();
    }

    let cards: Vec<String> = entries
        .iter()
        .map(|entry| {
            let mut card = entry.word.clone();
            for (category, definitions) in &entry.categories {
                if let Some(first) = definitions.first() {
                    let _ = write!(card, "\n  {category}:\n    {first}");
                }
            }
            card
        })
        .collect();

    cards.join("\n\n")
}

pub fn added_notice(word: &str) -> String {
    format!("\"{word}\" has been added to your vocabulary!")
}

pub fn duplicate_notice(word: &str) -> String {
    format!("\"{word}\" is already in your vocabulary!")
}
