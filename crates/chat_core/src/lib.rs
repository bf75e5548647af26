//! Chat core: pure state machine and view-model helpers for the scripted demo.
mod animation;
mod effect;
mod msg;
mod script;
mod state;
mod update;
mod view_model;

pub use animation::{
    AvatarAnimator, Channel, Playback, Segment, SPARK_HOLD, SPARK_HOLD_DELAY, SPARK_INTRO,
    SPARK_SWEEP, SPINNER_FADE_OUT, SPINNER_LOOP,
};
pub use effect::{Effect, FOLLOW_RELEASE_DELAY};
pub use msg::Msg;
pub use script::{script_for_turn, CannedReply, ResourceLink, StageSpec, TurnScript};
pub use state::{Author, ChatState, MessageEntry, MessageId, TurnId};
pub use update::update;
pub use view_model::{ChatViewModel, MessageView};
