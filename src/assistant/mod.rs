//! Stoqy, the chat-style assistant: a canned transcript with a simulated
//! typing delay standing in for real inference.

pub mod router;
pub mod service;

pub use router::{assistant_router, AssistantState};
pub use service::{
    AssistantError, AssistantService, ChatMessage, Sender, GREETING, SUGGESTED_QUESTIONS,
};
