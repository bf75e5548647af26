//! Static stage scripts and canned replies for the scripted conversation.
//!
//! Every turn plays one of the scripts defined here. A script is a finite,
//! fixed list of named stages with display durations, followed by a canned
//! reply that fills the pending placeholder once the last stage has elapsed.

use std::time::Duration;

use crate::TurnId;

/// One named step of a loading timeline with its fixed display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSpec {
    pub name: &'static str,
    pub duration: Duration,
}

/// Outbound link attached to a reply, rendered as a resource card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Final content scripted into the placeholder when a timeline completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedReply {
    pub body: &'static str,
    pub resource: Option<ResourceLink>,
}

/// A complete turn script: the stage timeline plus the reply it ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnScript {
    pub stages: &'static [StageSpec],
    pub reply: CannedReply,
}

impl TurnScript {
    /// Sum of all stage durations, i.e. how long the placeholder stays pending.
    pub fn total_duration(&self) -> Duration {
        self.stages
            .iter()
            .fold(Duration::ZERO, |acc, stage| acc + stage.duration)
    }
}

const QUICK_STAGES: &[StageSpec] = &[StageSpec {
    name: "Just a sec...",
    duration: Duration::from_millis(10_000),
}];

const PRESENTATION_STAGES: &[StageSpec] = &[
    StageSpec {
        name: "Just a sec...",
        duration: Duration::from_millis(2_000),
    },
    StageSpec {
        name: "Defining the presentation scope...",
        duration: Duration::from_millis(4_000),
    },
    StageSpec {
        name: "Outlining the presentation structure...",
        duration: Duration::from_millis(4_000),
    },
    StageSpec {
        name: "Refining the presentation content...",
        duration: Duration::from_millis(4_000),
    },
    StageSpec {
        name: "Generating the presentation images...",
        duration: Duration::from_millis(12_000),
    },
    StageSpec {
        name: "Constructing the closing...",
        duration: Duration::from_millis(4_000),
    },
];

const QUICK_SCRIPT: TurnScript = TurnScript {
    stages: QUICK_STAGES,
    reply: CannedReply {
        body: "I'm Aurora, a large language model. I can help you with writing, \
               planning, learning, and more. How can I assist you today?",
        resource: None,
    },
};

const PRESENTATION_SCRIPT: TurnScript = TurnScript {
    stages: PRESENTATION_STAGES,
    reply: CannedReply {
        body: "Great. Here are your slides. I kept the structure we agreed on \
               and added a short closing section at the end. Open the \
               presentation below and tell me if anything needs adjusting.",
        resource: Some(ResourceLink {
            label: "Presentation",
            url: "https://www.canva.com/design/DAGxKzVt0eQ/view",
        }),
    },
};

/// Selects the script for a 1-based turn number.
///
/// The second turn plays the long presentation timeline; every other turn
/// plays the single-stage quick timeline.
pub fn script_for_turn(turn: TurnId) -> &'static TurnScript {
    if turn == 2 {
        &PRESENTATION_SCRIPT
    } else {
        &QUICK_SCRIPT
    }
}
