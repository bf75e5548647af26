use std::sync::Once;

use chat_core::{script_for_turn, update, Author, ChatState, Effect, Msg, FOLLOW_RELEASE_DELAY};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

fn submit(state: ChatState, text: &str) -> (ChatState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(text.to_string()));
    update(state, Msg::InputSubmitted)
}

/// Replays the stage events the timer engine would emit for `turn`, then the
/// completion event. Returns the final state and the completion's effects.
fn play_script(mut state: ChatState, turn: u32) -> (ChatState, Vec<Effect>) {
    for stage_index in 0..script_for_turn(turn).stages.len() {
        let (next, effects) = update(state, Msg::StageStarted { turn, stage_index });
        assert!(effects.is_empty());
        state = next;
    }
    update(state, Msg::ScriptFinished { turn })
}

#[test]
fn submission_appends_user_entry_and_placeholder() {
    init_logging();
    let state = ChatState::new();

    let (state, effects) = submit(state, "  Hello there  ");
    let view = state.view();

    assert_eq!(view.messages.len(), 2);
    assert_eq!(view.messages[0].author, Author::User);
    assert_eq!(view.messages[0].content, "Hello there");
    assert!(!view.messages[0].pending);
    assert_eq!(view.messages[1].author, Author::Assistant);
    assert!(view.messages[1].pending);
    assert_eq!(view.messages[1].content, "");
    assert!(view.input.is_empty());
    assert!(view.loading);
    assert!(view.follow_output);
    assert!(view.dirty);
    assert_eq!(state.pending_turn(), Some(1));
    assert_eq!(
        effects,
        vec![Effect::PlayScript {
            turn: 1,
            stages: script_for_turn(1).stages,
        }]
    );
}

#[test]
fn blank_submission_appends_nothing() {
    init_logging();
    let state = ChatState::new();

    let (state, effects) = submit(state, "   \n  ");
    let view = state.view();

    assert!(view.messages.is_empty());
    assert!(view.welcome_visible);
    assert!(!view.loading);
    assert!(effects.is_empty());
}

#[test]
fn welcome_hides_after_first_submission() {
    init_logging();
    let state = ChatState::new();
    assert!(state.view().welcome_visible);

    let (state, _effects) = submit(state, "Hello");

    assert!(!state.view().welcome_visible);
}

#[test]
fn welcome_dismissal_is_idempotent() {
    init_logging();
    let state = ChatState::new();

    let (mut state, effects) = update(state, Msg::WelcomeDismissed);
    assert!(!state.view().welcome_visible);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::WelcomeDismissed);
    assert!(!state.view().welcome_visible);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn completed_script_fills_the_placeholder() {
    init_logging();
    let state = ChatState::new();
    let (state, _effects) = submit(state, "Hello");

    let (state, effects) = play_script(state, 1);
    let view = state.view();

    assert!(!view.loading);
    assert_eq!(state.pending_turn(), None);
    assert!(view.current_stage.is_empty());
    assert!(!view.messages[1].pending);
    assert_eq!(view.messages[1].content, script_for_turn(1).reply.body);
    assert!(view.messages[1].resource.is_none());
    assert_eq!(
        effects,
        vec![Effect::ScheduleFollowRelease {
            delay: FOLLOW_RELEASE_DELAY,
        }]
    );
}

#[test]
fn second_turn_plays_the_presentation_script() {
    init_logging();
    let state = ChatState::new();
    let (state, _effects) = submit(state, "Hello");
    let (state, _effects) = play_script(state, 1);

    let (state, effects) = submit(state, "Turn this into a presentation");
    assert_eq!(
        effects,
        vec![Effect::PlayScript {
            turn: 2,
            stages: script_for_turn(2).stages,
        }]
    );
    assert_eq!(script_for_turn(2).stages.len(), 6);

    let (state, _effects) = play_script(state, 2);
    let view = state.view();

    assert_eq!(view.messages.len(), 4);
    let reply = &view.messages[3];
    assert!(!reply.pending);
    assert_eq!(reply.content, script_for_turn(2).reply.body);
    let resource = reply.resource.expect("presentation reply links a resource");
    assert_eq!(resource.label, "Presentation");
}

#[test]
fn submission_ignored_while_a_turn_is_pending() {
    init_logging();
    let state = ChatState::new();
    let (state, _effects) = submit(state, "Hello");

    let (state, effects) = submit(state, "Another question");
    let view = state.view();

    assert_eq!(view.messages.len(), 2);
    assert!(view.loading);
    // The ignored submission does not even clear the typed text.
    assert_eq!(view.input, "Another question");
    assert!(effects.is_empty());
}

#[test]
fn stage_events_drive_the_stage_label() {
    init_logging();
    let state = ChatState::new();
    let (state, _effects) = submit(state, "Hello");
    let (state, _effects) = play_script(state, 1);
    let (state, _effects) = submit(state, "Slides please");

    let (state, _effects) = update(
        state,
        Msg::StageStarted {
            turn: 2,
            stage_index: 0,
        },
    );
    assert_eq!(state.view().current_stage, "Just a sec...");

    let (state, _effects) = update(
        state,
        Msg::StageStarted {
            turn: 2,
            stage_index: 4,
        },
    );
    assert_eq!(
        state.view().current_stage,
        "Generating the presentation images..."
    );

    let (state, effects) = update(
        state,
        Msg::StageStarted {
            turn: 2,
            stage_index: 99,
        },
    );
    assert_eq!(
        state.view().current_stage,
        "Generating the presentation images..."
    );
    assert!(effects.is_empty());
}

#[test]
fn stale_script_events_are_ignored() {
    init_logging();
    let state = ChatState::new();
    let (state, _effects) = submit(state, "Hello");
    let (state, _effects) = play_script(state, 1);

    let before = state.view();
    let (state, effects) = update(state, Msg::ScriptFinished { turn: 1 });
    assert_eq!(state.view(), before);
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::StageStarted {
            turn: 7,
            stage_index: 0,
        },
    );
    assert_eq!(state.view(), before);
    assert!(effects.is_empty());
}

#[test]
fn follow_releases_after_the_scheduled_delay() {
    init_logging();
    let state = ChatState::new();
    let (state, _effects) = submit(state, "Hello");
    assert!(state.view().follow_output);

    let (state, effects) = play_script(state, 1);
    assert_eq!(
        effects,
        vec![Effect::ScheduleFollowRelease {
            delay: FOLLOW_RELEASE_DELAY,
        }]
    );
    assert!(state.view().follow_output);

    let (state, effects) = update(state, Msg::FollowReleaseElapsed);
    assert!(!state.view().follow_output);
    assert!(effects.is_empty());
}

#[test]
fn stale_follow_release_keeps_the_transcript_pinned() {
    init_logging();
    let state = ChatState::new();
    let (state, _effects) = submit(state, "Hello");
    let (state, _effects) = play_script(state, 1);
    let (state, _effects) = submit(state, "Slides please");
    assert!(state.view().loading);

    let (state, effects) = update(state, Msg::FollowReleaseElapsed);

    assert!(state.view().follow_output);
    assert!(effects.is_empty());
}

#[test]
fn typing_updates_the_input_buffer() {
    init_logging();
    let state = ChatState::new();

    let (mut state, effects) = update(state, Msg::InputChanged("Hel".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.view().input, "Hel");
    assert!(state.consume_dirty());

    let (mut state, _effects) = update(state, Msg::InputChanged("Hel".to_string()));
    assert!(!state.consume_dirty());
}
