use wordbank_types::AppEvent;

use crate::context::AppContext;

/// Read the personal dictionary and hand it to the UI
pub async fn handle_refresh_personal(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.store.clone();
    let loaded = tokio::task::spawn_blocking(move || store.load()).await?;

    match loaded {
        Ok(entries) => {
            tracing::debug!("Showing {} personal entries", entries.len());
            ctx.emit(AppEvent::ShowPersonal(entries)).await;
        }
        Err(e) => {
            tracing::error!("Error displaying entries from personal dictionary: {}", e);
            ctx.emit(AppEvent::PersonalUnavailable).await;
        }
    }

    Ok(())
}
