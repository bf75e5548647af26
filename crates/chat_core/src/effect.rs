use std::time::Duration;

use crate::script::StageSpec;

/// How long the transcript stays pinned after a reply lands.
pub const FOLLOW_RELEASE_DELAY: Duration = Duration::from_millis(1_500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Play a stage timeline on the timer engine, reporting back via
    /// [`crate::Msg::StageStarted`] and [`crate::Msg::ScriptFinished`].
    PlayScript {
        turn: crate::TurnId,
        stages: &'static [StageSpec],
    },
    /// Schedule the auto-scroll release timer.
    ScheduleFollowRelease { delay: Duration },
}
