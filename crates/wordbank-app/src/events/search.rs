use tokio::task::JoinHandle;
use wordbank_lookup::{LookupError, into_outcome};
use wordbank_types::AppEvent;

use crate::context::AppContext;

/// Start a lookup for `term` unless one is already in flight.
///
/// The search control stays disabled until the lookup finishes,
/// whatever the outcome. Each accepted search answers with exactly one
/// `ShowLookup` and one `SearchSettled`, even when the lookup panics.
pub async fn handle_search(ctx: &AppContext, term: String) -> Option<JoinHandle<()>> {
    let Some(guard) = ctx.state.search.begin() else {
        tracing::warn!("Search for '{}' ignored, another lookup is in flight", term);
        ctx.emit(AppEvent::SearchSettled).await;
        return None;
    };

    let generation = ctx.state.next_generation();
    tracing::debug!("Lookup #{} for '{}'", generation, term);

    let ctx = ctx.clone();
    Some(tokio::spawn(async move {
        let lookup = ctx.lookup.clone();
        let task_term = term.clone();
        let result = match tokio::spawn(async move { lookup.lookup(&task_term).await }).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Lookup #{} for '{}' aborted: {}", generation, term, e);
                Err(LookupError::Transport(e.to_string()))
            }
        };
        if let Err(e) = &result {
            tracing::debug!("Lookup #{} for '{}' ended with: {}", generation, term, e);
        }

        ctx.emit(AppEvent::ShowLookup {
            generation,
            outcome: into_outcome(result),
        })
        .await;

        drop(guard);
        ctx.emit(AppEvent::SearchSettled).await;
    }))
}
