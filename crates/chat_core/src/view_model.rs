use crate::{Author, MessageId, ResourceLink};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatViewModel {
    pub messages: Vec<MessageView>,
    pub input: String,
    pub welcome_visible: bool,
    pub current_stage: String,
    pub loading: bool,
    pub follow_output: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: MessageId,
    pub author: Author,
    pub content: String,
    pub pending: bool,
    pub resource: Option<ResourceLink>,
}
