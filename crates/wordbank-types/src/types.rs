use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category label (part of speech) -> definitions, in arrival order
pub type Definitions = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Search triggered from the input control
    Search(String),
    /// Save triggered on the currently shown result
    SaveWord(LookupResult),
    /// Re-read the personal dictionary and show it
    RefreshPersonal,
    ShowLookup {
        generation: u64,
        outcome: LookupOutcome,
    },
    ShowPersonal(Vec<DictionaryEntry>),
    /// Personal dictionary could not be read
    PersonalUnavailable,
    /// Blocking user notification
    Notify(String),
    /// The search control was released
    SearchSettled,
    Quit,
}

/// Result of one lookup, grouped by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub definitions_by_category: Definitions,
}

impl LookupResult {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definitions_by_category: Definitions::new(),
        }
    }

    /// Append a definition under its category, creating the category on first use
    pub fn push_definition(&mut self, category: impl Into<String>, definition: impl Into<String>) {
        self.definitions_by_category
            .entry(category.into())
            .or_default()
            .push(definition.into());
    }

    pub fn is_empty(&self) -> bool {
        self.definitions_by_category.is_empty()
    }
}

/// Outcome of a search as seen by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(LookupResult),
    Failed { kind: FailureKind, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    EmptyInput,
    NotFound,
    Http,
    Transport,
    NoResults,
}

/// One saved word in the personal dictionary.
///
/// Serialized flat: `{ "word": "cat", "noun": ["..."], "verb": ["..."] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(flatten)]
    pub categories: Definitions,
}

impl DictionaryEntry {
    /// Merge a word with the categories captured from a lookup
    pub fn new(word: impl Into<String>, definitions: &Definitions) -> Self {
        // "word" is the uniqueness key and cannot double as a category
        let categories = definitions
            .iter()
            .filter(|(category, _)| category.as_str() != "word")
            .map(|(category, defs)| (category.clone(), defs.clone()))
            .collect();

        Self {
            word: word.into(),
            categories,
        }
    }
}

impl From<&LookupResult> for DictionaryEntry {
    fn from(result: &LookupResult) -> Self {
        DictionaryEntry::new(result.word.clone(), &result.definitions_by_category)
    }
}
