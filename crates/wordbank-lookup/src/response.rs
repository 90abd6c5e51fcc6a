use serde::Deserialize;
use wordbank_types::LookupResult;

use crate::LookupError;

/// One element of the success array
#[derive(Debug, Clone, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(rename = "sourceUrls", default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Body of a 404 response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub title: String,
    pub message: String,
    pub resolution: String,
}

/// Parse a success body and keep the first definition of every meaning-group
pub(crate) fn parse_success(body: &str) -> Result<LookupResult, LookupError> {
    let entries: Option<Vec<WordEntry>> =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    let Some(entry) = entries.and_then(|e| e.into_iter().next()) else {
        return Err(LookupError::NoResults);
    };

    let mut result = LookupResult::new(entry.word);
    for meaning in entry.meanings {
        match meaning.definitions.into_iter().next() {
            Some(first) => result.push_definition(meaning.part_of_speech, first.definition),
            None => {
                tracing::debug!("Skipping '{}' group without definitions", meaning.part_of_speech);
            }
        }
    }

    if result.is_empty() {
        tracing::debug!("'{}' came back without any definitions", result.word);
        return Err(LookupError::NoResults);
    }

    Ok(result)
}

pub(crate) fn parse_not_found(term: &str, body: &str) -> Result<LookupError, LookupError> {
    let error: ApiErrorBody =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    Ok(LookupError::NotFound {
        term: term.to_string(),
        title: error.title,
        message: error.message,
        resolution: error.resolution,
    })
}
