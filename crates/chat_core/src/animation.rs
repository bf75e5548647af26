//! Decorative avatar animation machine.
//!
//! The avatar is drawn by two animation channels: a spinner ring and a spark
//! glyph. Both are driven purely by the loading flag. This module turns flag
//! observations into segment playback commands; executing them (including any
//! start delay) is the renderer's job.

use std::time::Duration;

/// Animation channel of the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Spinner,
    Spark,
}

/// Inclusive frame range of an animation channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: u32,
    pub to: u32,
}

/// One playback command: play `segment` on `channel`, once or looped,
/// starting after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub channel: Channel,
    pub segment: Segment,
    pub looped: bool,
    pub delay: Duration,
}

/// Spinner frames cycled while a reply is being scripted.
pub const SPINNER_LOOP: Segment = Segment { from: 0, to: 179 };
/// Spinner fade-out played once when loading ends.
pub const SPINNER_FADE_OUT: Segment = Segment { from: 2006, to: 2026 };
/// Spark intro played once when loading starts.
pub const SPARK_INTRO: Segment = Segment { from: 0, to: 59 };
/// Spark hold loop entered shortly after the intro.
pub const SPARK_HOLD: Segment = Segment { from: 40, to: 59 };
/// Spark sweep back to the resting glyph, played once when loading ends.
pub const SPARK_SWEEP: Segment = Segment { from: 60, to: 140 };

/// Pause between the spark intro and its hold loop.
pub const SPARK_HOLD_DELAY: Duration = Duration::from_millis(667);

/// Tracks the previously observed loading flag and yields the playback
/// commands each transition triggers.
#[derive(Debug, Clone, Default)]
pub struct AvatarAnimator {
    last_loading: Option<bool>,
}

impl AvatarAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes the current loading flag.
    ///
    /// Returns commands only on a transition. The very first observation of
    /// `false` still plays the settle segments once, so a transcript that
    /// starts idle shows the resting glyph.
    pub fn observe(&mut self, loading: bool) -> Vec<Playback> {
        let previous = self.last_loading.replace(loading);
        if previous == Some(loading) {
            return Vec::new();
        }

        if loading {
            vec![
                Playback {
                    channel: Channel::Spinner,
                    segment: SPINNER_LOOP,
                    looped: true,
                    delay: Duration::ZERO,
                },
                Playback {
                    channel: Channel::Spark,
                    segment: SPARK_INTRO,
                    looped: false,
                    delay: Duration::ZERO,
                },
                Playback {
                    channel: Channel::Spark,
                    segment: SPARK_HOLD,
                    looped: true,
                    delay: SPARK_HOLD_DELAY,
                },
            ]
        } else {
            vec![
                Playback {
                    channel: Channel::Spark,
                    segment: SPARK_SWEEP,
                    looped: false,
                    delay: Duration::ZERO,
                },
                Playback {
                    channel: Channel::Spinner,
                    segment: SPINNER_FADE_OUT,
                    looped: false,
                    delay: Duration::ZERO,
                },
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(commands: &[Playback]) -> Vec<Channel> {
        commands.iter().map(|command| command.channel).collect()
    }

    #[test]
    fn loading_start_spins_and_holds_the_spark() {
        let mut animator = AvatarAnimator::new();
        let commands = animator.observe(true);

        assert_eq!(
            channels(&commands),
            vec![Channel::Spinner, Channel::Spark, Channel::Spark]
        );
        assert_eq!(commands[0].segment, SPINNER_LOOP);
        assert!(commands[0].looped);
        assert_eq!(commands[1].segment, SPARK_INTRO);
        assert!(!commands[1].looped);
        assert_eq!(commands[2].segment, SPARK_HOLD);
        assert!(commands[2].looped);
        assert_eq!(commands[2].delay, SPARK_HOLD_DELAY);
    }

    #[test]
    fn loading_end_sweeps_and_fades() {
        let mut animator = AvatarAnimator::new();
        animator.observe(true);
        let commands = animator.observe(false);

        assert_eq!(channels(&commands), vec![Channel::Spark, Channel::Spinner]);
        assert_eq!(commands[0].segment, SPARK_SWEEP);
        assert_eq!(commands[1].segment, SPINNER_FADE_OUT);
        assert!(commands.iter().all(|command| !command.looped));
        assert!(commands
            .iter()
            .all(|command| command.delay == Duration::ZERO));
    }

    #[test]
    fn first_idle_observation_settles_once() {
        let mut animator = AvatarAnimator::new();
        let commands = animator.observe(false);

        assert_eq!(channels(&commands), vec![Channel::Spark, Channel::Spinner]);
        assert!(animator.observe(false).is_empty());
    }

    #[test]
    fn repeated_observations_are_quiet() {
        let mut animator = AvatarAnimator::new();
        animator.observe(true);
        assert!(animator.observe(true).is_empty());
        animator.observe(false);
        assert!(animator.observe(false).is_empty());
    }
}
