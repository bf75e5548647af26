use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use chat_core::{update, ChatState, Msg};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use site_logging::site_info;

use super::effects::EffectRunner;
use super::engine::ScriptSettings;
use super::ui;
use super::ui::render::TranscriptPrinter;

/// How often the session wakes up while a timeline is playing. Also
/// the ticker's frame cadence.
const POLL_INTERVAL: Duration = Duration::from_millis(75);

/// Divisor applied to every scripted duration under `--fast`.
const FAST_DIVISOR: u32 = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct AppSettings {
    /// Compress the scripted timelines for demos and manual testing.
    pub fast: bool,
}

/// Runs the interactive session until the user closes the input
/// stream. All state changes flow through `chat_core::update`; this
/// loop only shuttles messages and repaints.
pub fn run_app(settings: AppSettings) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let time_divisor = if settings.fast { FAST_DIVISOR } else { 1 };
    let runner = EffectRunner::new(msg_tx, ScriptSettings { time_divisor });

    let mut session = Session {
        state: ChatState::new(),
        runner,
        msg_rx,
        printer: TranscriptPrinter::new(),
    };

    ui::layout::print_chrome(&session.state.view());

    let mut editor = DefaultEditor::new().context("initialize line editor")?;
    loop {
        match editor.readline(ui::constants::PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                session.drain_pending();
                session.dispatch(Msg::InputChanged(line));
                session.dispatch(Msg::InputSubmitted);
                session.wait_while_loading();
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("read input line"),
        }
    }

    site_info!("chat session ended");
    Ok(())
}

struct Session {
    state: ChatState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    printer: TranscriptPrinter,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.enqueue(effects);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;
        if was_dirty {
            self.printer.render(&view);
        }
    }

    /// Delivers messages that arrived while the prompt was blocking,
    /// such as a follow release from the previous turn.
    fn drain_pending(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
        }
    }

    /// Blocks the prompt while a timeline plays, feeding engine events
    /// into the state machine and advancing the ticker between them.
    fn wait_while_loading(&mut self) {
        while self.state.pending_turn().is_some() {
            match self.msg_rx.recv_timeout(POLL_INTERVAL) {
                Ok(msg) => self.dispatch(msg),
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    self.dispatch(Msg::Tick);
                    let view = self.state.view();
                    self.printer.tick(&view);
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
    }
}
