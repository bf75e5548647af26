#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the input box (latest text).
    InputChanged(String),
    /// User submitted the current input as a new turn.
    InputSubmitted,
    /// User dismissed the welcome banner without submitting.
    WelcomeDismissed,
    /// Timer playback reached a stage of the pending turn's timeline.
    StageStarted {
        turn: crate::TurnId,
        stage_index: usize,
    },
    /// Timer playback finished the pending turn's timeline.
    ScriptFinished { turn: crate::TurnId },
    /// The auto-scroll release delay elapsed after a turn completed.
    FollowReleaseElapsed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
