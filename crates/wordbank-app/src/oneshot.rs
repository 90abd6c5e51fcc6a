use std::io::Write;

use wordbank_core::preprocess::{DefaultPreprocessor, Preprocessor};
use wordbank_lookup::Lookup;
use wordbank_store::AddOutcome;

use crate::context::Store;
use crate::render::{
    EMPTY_INPUT, PERSONAL_FALLBACK, added_notice, duplicate_notice, render_lookup,
    render_personal,
};

/// `wordbank lookup <word> [--save]`
pub async fn run_lookup<W: Write>(
    lookup: &dyn Lookup,
    store: &Store,
    word: &str,
    save: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let term = DefaultPreprocessor.process(word);
    if term.is_empty() {
        writeln!(out, "! {EMPTY_INPUT}")?;
        return Ok(());
    }

    let result = match lookup.lookup(&term).await {
        Ok(result) => result,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(());
        }
    };

    writeln!(out, "{}", render_lookup(&result))?;

    if !save {
        match store.contains(&result.word) {
            Ok(true) => writeln!(out, "! {}", duplicate_notice(&result.word))?,
            Ok(false) => {}
            Err(e) => tracing::warn!("Could not check personal dictionary: {}", e),
        }
    } else {
        match store.add(&result.word, &result.definitions_by_category) {
            Ok(AddOutcome::Added) => writeln!(out, "! {}", added_notice(&result.word))?,
            Ok(AddOutcome::AlreadyExists) => {
                writeln!(out, "! {}", duplicate_notice(&result.word))?
            }
            Err(e) => {
                tracing::error!("Failed to save '{}': {}", result.word, e);
                writeln!(out, "! Could not save \"{}\": {e}", result.word)?;
            }
        }
    }

    Ok(())
}

/// `wordbank list`
pub fn run_list<W: Write>(store: &Store, out: &mut W) -> anyhow::Result<()> {
    match store.load() {
        Ok(entries) => writeln!(out, "{}", render_personal(&entries))?,
        Err(e) => {
            tracing::error!("Error displaying entries from personal dictionary: {}", e);
            writeln!(out, "{PERSONAL_FALLBACK}")?;
        }
    }
    Ok(())
}
