use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use wordbank_core::state::AppState;
use wordbank_types::AppEvent;

use crate::console::{Console, Flow};

/// Console UI: stdin lines in, rendered regions out
pub async fn ui_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let prompt = {
        let config = state.config.read().await;
        config.ui.prompt.clone()
    };

    let mut console = Console::new(
        state,
        ui_to_app_tx.clone(),
        std::io::stdout(),
        prompt,
        interactive,
    );
    console.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    loop {
        // Piped input is replayed one request at a time
        let accept_input = input_open && (interactive || console.pending() == 0);

        tokio::select! {
            line = lines.next_line(), if accept_input => match line? {
                Some(line) => {
                    if console.handle_line(&line).await? == Flow::Quit {
                        break;
                    }
                }
                None => {
                    tracing::debug!("[UI] Input closed");
                    input_open = false;
                }
            },
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => console.apply(event)?,
                Err(e) => {
                    tracing::debug!("[UI] Backend channel closed: {}", e);
                    break;
                }
            },
            _ = cancel.cancelled() => {
                tracing::info!("[UI] Stopping");
                break;
            }
        }

        if !input_open && console.pending() == 0 {
            let _ = ui_to_app_tx.send(AppEvent::Quit).await;
            break;
        }
    }

    Ok(())
}
