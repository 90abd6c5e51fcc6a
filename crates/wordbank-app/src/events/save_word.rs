use wordbank_store::AddOutcome;
use wordbank_types::{AppEvent, LookupResult};

use crate::context::AppContext;
use crate::render::{added_notice, duplicate_notice};

use super::personal::handle_refresh_personal;

/// Persist the shown result, notify, then re-render the personal list.
///
/// Adds run one at a time on the event loop.
pub async fn handle_save_word(ctx: &AppContext, result: LookupResult) -> anyhow::Result<()> {
    let store = ctx.store.clone();
    let word = result.word.clone();

    let outcome = tokio::task::spawn_blocking(move || {
        store.add(&result.word, &result.definitions_by_category)
    })
    .await?;

    match outcome {
        Ok(AddOutcome::Added) => {
            tracing::info!("Added '{}' to personal dictionary", word);
            ctx.emit(AppEvent::Notify(added_notice(&word))).await;
        }
        Ok(AddOutcome::AlreadyExists) => {
            ctx.emit(AppEvent::Notify(duplicate_notice(&word))).await;
        }
        Err(e) => {
            tracing::error!("Failed to save '{}': {}", word, e);
            ctx.emit(AppEvent::Notify(format!("Could not save \"{word}\": {e}")))
                .await;
        }
    }

    handle_refresh_personal(ctx).await
}
