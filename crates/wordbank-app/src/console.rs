use std::io::{self, Write};
use std::sync::Arc;

use kanal::AsyncSender;
use wordbank_core::preprocess::{DefaultPreprocessor, LinePreprocessor, Preprocessor};
use wordbank_core::state::AppState;
use wordbank_types::{AppEvent, LookupOutcome, LookupResult};

use crate::render::{
    EMPTY_INPUT, FETCHING, NOTHING_TO_SAVE, PERSONAL_FALLBACK, render_lookup, render_message,
    render_personal,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end over the two screen regions
pub struct Console<W> {
    state: Arc<AppState>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    out: W,
    prompt: String,
    interactive: bool,
    /// Result behind the save action
    current: Option<LookupResult>,
    /// Requests sent to the backend that have not been answered yet
    pending: usize,
}

impl<W: Write> Console<W> {
    pub fn new(
        state: Arc<AppState>,
        ui_to_app_tx: AsyncSender<AppEvent>,
        out: W,
        prompt: String,
        interactive: bool,
    ) -> Self {
        Self {
            state,
            ui_to_app_tx,
            out,
            prompt,
            interactive,
            current: None,
            pending: 0,
        }
    }

    pub fn current(&self) -> Option<&LookupResult> {
        self.current.as_ref()
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    async fn request(&mut self, event: AppEvent) -> anyhow::Result<()> {
        self.ui_to_app_tx.send(event).await?;
        self.pending += 1;
        Ok(())
    }

    /// Page-load equivalent: show the stored list
    pub async fn start(&mut self) -> anyhow::Result<()> {
        self.request(AppEvent::RefreshPersonal).await
    }

    pub async fn handle_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        let command = LinePreprocessor.process(line);
        let command = command.as_str();

        match command {
            "/quit" | "/exit" => {
                self.ui_to_app_tx.send(AppEvent::Quit).await?;
                return Ok(Flow::Quit);
            }
            "/save" => self.trigger_save().await?,
            "/list" => self.request(AppEvent::RefreshPersonal).await?,
            "/help" => {
                writeln!(
                    self.out,
                    "<word> or /search <word>  look a word up\n\
                     /save                     add the shown word to your vocabulary\n\
                     /list                     show your vocabulary\n\
                     /quit                     exit"
                )?;
                self.show_prompt()?;
            }
            _ => {
                let raw = command
                    .strip_prefix("/search")
                    .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
                    .unwrap_or(command);
                self.trigger_search(raw).await?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Search trigger: read the input control, validate, dispatch
    pub async fn trigger_search(&mut self, raw: &str) -> anyhow::Result<()> {
        let search = self.state.search.clone();
        if search.is_disabled() {
            tracing::debug!("Search control disabled, ignoring '{}'", raw);
            return Ok(());
        }

        search.set_input(raw);
        let term = DefaultPreprocessor.process(&search.input());
        if term.is_empty() {
            self.notify(EMPTY_INPUT)?;
            self.show_prompt()?;
            return Ok(());
        }

        self.state.screen.replace_results(render_message(FETCHING));
        self.print_results()?;
        self.request(AppEvent::Search(term)).await
    }

    /// Save trigger: hands the last successful result to the backend
    pub async fn trigger_save(&mut self) -> anyhow::Result<()> {
        match self.current.clone() {
            Some(result) => self.request(AppEvent::SaveWord(result)).await,
            None => {
                self.notify(NOTHING_TO_SAVE)?;
                self.show_prompt()?;
                Ok(())
            }
        }
    }

    /// Apply a backend event to the screen
    pub fn apply(&mut self, event: AppEvent) -> io::Result<()> {
        match event {
            AppEvent::ShowLookup {
                generation,
                outcome,
            } => {
                if !self.state.is_current(generation) {
                    tracing::debug!("Dropping stale lookup #{}", generation);
                    return Ok(());
                }

                let text = match outcome {
                    LookupOutcome::Found(result) => {
                        let text = render_lookup(&result);
                        self.current = Some(result);
                        text
                    }
                    LookupOutcome::Failed { message, .. } => {
                        self.current = None;
                        render_message(&message)
                    }
                };
                self.state.screen.replace_results(text);
                self.print_results()?;
            }
            AppEvent::ShowPersonal(entries) => {
                self.settle();
                self.state.screen.replace_personal(render_personal(&entries));
                self.print_personal()?;
                self.show_prompt()?;
            }
            AppEvent::PersonalUnavailable => {
                self.settle();
                self.state
                    .screen
                    .replace_personal(render_message(PERSONAL_FALLBACK));
                self.print_personal()?;
                self.show_prompt()?;
            }
            AppEvent::Notify(message) => self.notify(&message)?,
            AppEvent::SearchSettled => {
                self.settle();
                self.show_prompt()?;
            }
            AppEvent::Search(_)
            | AppEvent::SaveWord(_)
            | AppEvent::RefreshPersonal
            | AppEvent::Quit => {}
        }

        Ok(())
    }

    fn settle(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "! {message}")
    }

    fn print_results(&mut self) -> io::Result<()> {
        let results = self.state.screen.results();
        writeln!(self.out, "{results}")?;
        self.out.flush()
    }

    fn print_personal(&mut self) -> io::Result<()> {
        let personal = self.state.screen.personal();
        writeln!(self.out, "== My Vocabulary ==\n{personal}\n")?;
        self.out.flush()
    }

    pub fn show_prompt(&mut self) -> io::Result<()> {
        if self.interactive && self.pending == 0 {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;
        }
        Ok(())
    }
}
