use std::sync::{mpsc, Arc};

use chat_core::{Effect, Msg};
use site_logging::site_info;

use super::engine::{ScriptEngine, ScriptEvent, ScriptSettings, ScriptSink};

/// Executes core effects on the timer engine and routes playback events back
/// into the message pump.
pub struct EffectRunner {
    engine: ScriptEngine,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: ScriptSettings) -> Self {
        let sink: Arc<dyn ScriptSink> = Arc::new(MsgSink { msg_tx });
        Self {
            engine: ScriptEngine::new(settings, sink),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PlayScript { turn, stages } => {
                    site_info!("PlayScript turn={} stages={}", turn, stages.len());
                    self.engine.play(turn, stages);
                }
                Effect::ScheduleFollowRelease { delay } => {
                    self.engine
                        .schedule(ScriptEvent::FollowReleaseElapsed, delay);
                }
            }
        }
    }
}

struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
}

impl ScriptSink for MsgSink {
    fn emit(&self, event: ScriptEvent) {
        let _ = self.msg_tx.send(map_event(event));
    }
}

fn map_event(event: ScriptEvent) -> Msg {
    match event {
        ScriptEvent::StageStarted { turn, stage_index } => Msg::StageStarted { turn, stage_index },
        ScriptEvent::ScriptFinished { turn } => Msg::ScriptFinished { turn },
        ScriptEvent::FollowReleaseElapsed => Msg::FollowReleaseElapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_events_map_onto_core_messages() {
        assert_eq!(
            map_event(ScriptEvent::StageStarted {
                turn: 2,
                stage_index: 3,
            }),
            Msg::StageStarted {
                turn: 2,
                stage_index: 3,
            }
        );
        assert_eq!(
            map_event(ScriptEvent::ScriptFinished { turn: 2 }),
            Msg::ScriptFinished { turn: 2 }
        );
        assert_eq!(
            map_event(ScriptEvent::FollowReleaseElapsed),
            Msg::FollowReleaseElapsed
        );
    }
}
