use crate::script::script_for_turn;
use crate::{ChatState, Effect, Msg, FOLLOW_RELEASE_DELAY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ChatState, msg: Msg) -> (ChatState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::InputSubmitted => {
            // Invariant: at most one placeholder is pending. A submission
            // while a timeline plays is dropped whole, input included.
            let text = state.input().trim().to_owned();
            if text.is_empty() {
                return (state, Vec::new());
            }
            if state.pending_turn().is_some() {
                return (state, Vec::new());
            }

            let turn = state.begin_turn(text);
            let script = script_for_turn(turn);
            vec![Effect::PlayScript {
                turn,
                stages: script.stages,
            }]
        }
        Msg::WelcomeDismissed => {
            state.hide_welcome();
            Vec::new()
        }
        Msg::StageStarted { turn, stage_index } => {
            if state.pending_turn() != Some(turn) {
                log::warn!("stage event for turn {turn} ignored: turn is not pending");
                return (state, Vec::new());
            }
            match script_for_turn(turn).stages.get(stage_index) {
                Some(stage) => state.set_stage(stage.name),
                None => {
                    log::warn!("stage index {stage_index} out of range for turn {turn}");
                }
            }
            Vec::new()
        }
        Msg::ScriptFinished { turn } => {
            if state.pending_turn() != Some(turn) {
                log::warn!("completion for turn {turn} ignored: turn is not pending");
                return (state, Vec::new());
            }
            let script = script_for_turn(turn);
            state.complete_turn(turn, &script.reply);
            vec![Effect::ScheduleFollowRelease {
                delay: FOLLOW_RELEASE_DELAY,
            }]
        }
        Msg::FollowReleaseElapsed => {
            // A release that lands after the next turn has already started
            // is stale; the transcript stays pinned for the new reply.
            if state.pending_turn().is_none() {
                state.release_follow();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
