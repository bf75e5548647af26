//! Timer playback engine for stage scripts.
//!
//! A dedicated thread hosts a Tokio runtime; each command becomes a task
//! that sleeps through the scripted durations and reports back through a
//! [`ScriptSink`]. Dropping the engine cancels every pending timer, which is
//! the entire teardown contract.

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chat_core::{StageSpec, TurnId};
use site_logging::site_debug;
use tokio_util::sync::CancellationToken;

/// Tuning for scripted playback.
#[derive(Debug, Clone)]
pub struct ScriptSettings {
    /// Stage durations are divided by this factor. Demos pass a larger value.
    pub time_divisor: u32,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self { time_divisor: 1 }
    }
}

/// Events reported back from timer playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    StageStarted { turn: TurnId, stage_index: usize },
    ScriptFinished { turn: TurnId },
    FollowReleaseElapsed,
}

/// Sink for playback events.
pub trait ScriptSink: Send + Sync {
    fn emit(&self, event: ScriptEvent);
}

enum EngineCommand {
    Play {
        turn: TurnId,
        stages: &'static [StageSpec],
    },
    Delay {
        event: ScriptEvent,
        delay: Duration,
    },
}

pub struct ScriptEngine {
    cmd_tx: mpsc::Sender<EngineCommand>,
    cancel: CancellationToken,
}

impl ScriptEngine {
    pub fn new(settings: ScriptSettings, sink: Arc<dyn ScriptSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let root = cancel.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let sink = sink.clone();
                let settings = settings.clone();
                let cancel = root.clone();
                runtime.spawn(async move {
                    handle_command(command, settings, sink, cancel).await;
                });
            }
        });

        Self { cmd_tx, cancel }
    }

    /// Starts playback of a stage timeline.
    pub fn play(&self, turn: TurnId, stages: &'static [StageSpec]) {
        let _ = self.cmd_tx.send(EngineCommand::Play { turn, stages });
    }

    /// Emits `event` once `delay` has elapsed.
    pub fn schedule(&self, event: ScriptEvent, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::Delay { event, delay });
    }
}

impl Drop for ScriptEngine {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    command: EngineCommand,
    settings: ScriptSettings,
    sink: Arc<dyn ScriptSink>,
    cancel: CancellationToken,
) {
    match command {
        EngineCommand::Play { turn, stages } => {
            play_script(turn, stages, &settings, sink.as_ref(), &cancel).await;
        }
        EngineCommand::Delay { event, delay } => {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(scaled(delay, &settings)) => sink.emit(event),
            }
        }
    }
}

async fn play_script(
    turn: TurnId,
    stages: &'static [StageSpec],
    settings: &ScriptSettings,
    sink: &dyn ScriptSink,
    cancel: &CancellationToken,
) {
    for (stage_index, stage) in stages.iter().enumerate() {
        sink.emit(ScriptEvent::StageStarted { turn, stage_index });
        tokio::select! {
            _ = cancel.cancelled() => {
                site_debug!("script for turn {turn} cancelled at stage {stage_index}");
                return;
            }
            _ = tokio::time::sleep(scaled(stage.duration, settings)) => {}
        }
    }
    sink.emit(ScriptEvent::ScriptFinished { turn });
}

fn scaled(duration: Duration, settings: &ScriptSettings) -> Duration {
    duration / settings.time_divisor.max(1)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    #[derive(Default)]
    struct CollectingSink {
        events: Mutex<Vec<ScriptEvent>>,
    }

    impl ScriptSink for CollectingSink {
        fn emit(&self, event: ScriptEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stages_are_reported_in_order_then_finished() {
        let sink = CollectingSink::default();
        let cancel = CancellationToken::new();
        let stages = chat_core::script_for_turn(2).stages;

        play_script(2, stages, &ScriptSettings::default(), &sink, &cancel).await;

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), stages.len() + 1);
        for (stage_index, event) in events.iter().take(stages.len()).enumerate() {
            assert_eq!(*event, ScriptEvent::StageStarted { turn: 2, stage_index });
        }
        assert_eq!(
            *events.last().unwrap(),
            ScriptEvent::ScriptFinished { turn: 2 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_stops_playback_mid_stage() {
        let sink = Arc::new(CollectingSink::default());
        let cancel = CancellationToken::new();
        let stages = chat_core::script_for_turn(1).stages;

        let task = tokio::spawn({
            let sink = sink.clone();
            let cancel = cancel.clone();
            async move {
                play_script(1, stages, &ScriptSettings::default(), sink.as_ref(), &cancel).await;
            }
        });

        tokio::time::sleep(Duration::from_secs(1)).await;
        cancel.cancel();
        task.await.unwrap();

        let events = sink.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![ScriptEvent::StageStarted {
                turn: 1,
                stage_index: 0,
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn time_divisor_compresses_the_timeline() {
        let sink = CollectingSink::default();
        let cancel = CancellationToken::new();
        let started = tokio::time::Instant::now();

        play_script(
            1,
            chat_core::script_for_turn(1).stages,
            &ScriptSettings { time_divisor: 20 },
            &sink,
            &cancel,
        )
        .await;

        assert_eq!(started.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_event_fires_after_its_delay() {
        let sink = Arc::new(CollectingSink::default());
        let cancel = CancellationToken::new();
        let started = tokio::time::Instant::now();

        handle_command(
            EngineCommand::Delay {
                event: ScriptEvent::FollowReleaseElapsed,
                delay: Duration::from_millis(1_500),
            },
            ScriptSettings::default(),
            sink.clone() as Arc<dyn ScriptSink>,
            cancel,
        )
        .await;

        assert_eq!(started.elapsed(), Duration::from_millis(1_500));
        assert_eq!(
            *sink.events.lock().unwrap(),
            vec![ScriptEvent::FollowReleaseElapsed]
        );
    }

    #[test]
    fn engine_handle_plays_a_script_end_to_end() {
        let sink = Arc::new(CollectingSink::default());
        let engine = ScriptEngine::new(
            ScriptSettings {
                time_divisor: 1_000,
            },
            sink.clone() as Arc<dyn ScriptSink>,
        );

        engine.play(1, chat_core::script_for_turn(1).stages);

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while sink.events.lock().unwrap().len() < 2 {
            assert!(
                std::time::Instant::now() < deadline,
                "engine did not report back in time"
            );
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(
            *sink.events.lock().unwrap(),
            vec![
                ScriptEvent::StageStarted {
                    turn: 1,
                    stage_index: 0,
                },
                ScriptEvent::ScriptFinished { turn: 1 },
            ]
        );
        drop(engine);
    }
}
