use kanal::AsyncReceiver;
use wordbank_types::AppEvent;

use crate::context::AppContext;

pub mod personal;
pub mod save_word;
pub mod search;

use personal::handle_refresh_personal;
use save_word::handle_save_word;
use search::handle_search;

/// App's main loop
pub async fn event_loop(
    ctx: AppContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = match ui_to_app_rx.recv().await {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!("[EVENT_LOOP] UI channel closed: {}", e);
                return Ok(());
            }
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if let AppEvent::Quit = event {
            tracing::info!("[EVENT_LOOP] Quit requested");
            return Ok(());
        }

        handle_events(&ctx, event).await?;
    }
}

async fn handle_events(ctx: &AppContext, event: AppEvent) -> anyhow::Result<()> {
    match event {
        AppEvent::Search(term) => {
            // Runs detached; save and refresh keep being served meanwhile
            handle_search(ctx, term).await;
        }
        AppEvent::SaveWord(result) => {
            handle_save_word(ctx, result).await?;
        }
        AppEvent::RefreshPersonal => {
            handle_refresh_personal(ctx).await?;
        }
        AppEvent::ShowLookup { .. }
        | AppEvent::ShowPersonal(_)
        | AppEvent::PersonalUnavailable
        | AppEvent::Notify(_)
        | AppEvent::SearchSettled
        | AppEvent::Quit => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
