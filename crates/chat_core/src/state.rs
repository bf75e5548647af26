use crate::script::{CannedReply, ResourceLink};
use crate::view_model::{ChatViewModel, MessageView};

/// Monotonic identifier for a chat entry.
pub type MessageId = u64;

/// 1-based sequence number of an accepted submission.
pub type TurnId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// One entry of the transcript. Entries are appended, filled once when their
/// scripted timeline completes, and never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub id: MessageId,
    pub turn: TurnId,
    pub author: Author,
    pub content: String,
    pub pending: bool,
    pub resource: Option<ResourceLink>,
}

/// The chat demo's entire state. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    messages: Vec<MessageEntry>,
    input: String,
    next_message_id: MessageId,
    turns_started: TurnId,
    pending_turn: Option<TurnId>,
    welcome_visible: bool,
    current_stage: String,
    follow_output: bool,
    dirty: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            next_message_id: 1,
            turns_started: 0,
            pending_turn: None,
            welcome_visible: true,
            current_stage: String::new(),
            follow_output: false,
            dirty: false,
        }
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ChatViewModel {
        ChatViewModel {
            messages: self
                .messages
                .iter()
                .map(|entry| MessageView {
                    id: entry.id,
                    author: entry.author,
                    content: entry.content.clone(),
                    pending: entry.pending,
                    resource: entry.resource,
                })
                .collect(),
            input: self.input.clone(),
            welcome_visible: self.welcome_visible,
            current_stage: self.current_stage.clone(),
            loading: self.pending_turn.is_some(),
            follow_output: self.follow_output,
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it. Render loops call this to
    /// coalesce repaints.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    /// The turn whose script is currently playing, if any.
    pub fn pending_turn(&self) -> Option<TurnId> {
        self.pending_turn
    }

    pub(crate) fn hide_welcome(&mut self) {
        if self.welcome_visible {
            self.welcome_visible = false;
            self.mark_dirty();
        }
    }

    /// Accepts a submission: appends the user entry and the pending
    /// assistant placeholder, clears the input, hides the welcome banner and
    /// pins the transcript. Returns the new turn's number.
    pub(crate) fn begin_turn(&mut self, text: String) -> TurnId {
        self.turns_started += 1;
        let turn = self.turns_started;

        let user_id = self.allocate_message_id();
        self.messages.push(MessageEntry {
            id: user_id,
            turn,
            author: Author::User,
            content: text,
            pending: false,
            resource: None,
        });

        let placeholder_id = self.allocate_message_id();
        self.messages.push(MessageEntry {
            id: placeholder_id,
            turn,
            author: Author::Assistant,
            content: String::new(),
            pending: true,
            resource: None,
        });

        self.input.clear();
        self.welcome_visible = false;
        self.pending_turn = Some(turn);
        self.follow_output = true;
        self.mark_dirty();
        turn
    }

    pub(crate) fn set_stage(&mut self, name: &str) {
        if self.current_stage != name {
            self.current_stage.clear();
            self.current_stage.push_str(name);
            self.mark_dirty();
        }
    }

    /// Fills the turn's placeholder with its scripted reply and leaves the
    /// loading state. The pending marker is cleared even if the placeholder
    /// cannot be found, so the state never gets stuck mid-turn.
    pub(crate) fn complete_turn(&mut self, turn: TurnId, reply: &CannedReply) {
        if let Some(entry) = self
            .messages
            .iter_mut()
            .find(|entry| entry.turn == turn && entry.pending)
        {
            entry.content = reply.body.to_owned();
            entry.resource = reply.resource;
            entry.pending = false;
        }
        self.current_stage.clear();
        self.pending_turn = None;
        self.mark_dirty();
    }

    pub(crate) fn release_follow(&mut self) {
        if self.follow_output {
            self.follow_output = false;
            self.mark_dirty();
        }
    }

    fn allocate_message_id(&mut self) -> MessageId {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}
