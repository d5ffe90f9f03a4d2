use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Greeting that opens every transcript.
pub const GREETING: &str = "Hello! I'm Stoqy, your Livestoq Personal AI Assistant. I can help you \
with livestock health, feeding, nutrition, medicine, marketplace questions, and general \
livestock management. How can I assist you today?";

/// Canned reply standing in for real inference.
const DEMO_REPLY: &str = "I'm here to help! This is a demo interface. In production, I would \
provide real-time AI-powered guidance on livestock health, care, feeding, nutrition, medicine \
suggestions, marketplace assistance, and general livestock management questions. Feel free to \
ask me anything about livestock!";

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "How do I care for a sick cow?",
    "What vitamins should I give my livestock?",
    "What's the best feeding schedule for goats?",
    "How can I verify a livestock listing?",
    "What are signs of healthy livestock?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Stoqy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// The Stoqy chat transcript: greeting first, then user/assistant pairs.
pub struct AssistantService {
    messages: Mutex<Vec<ChatMessage>>,
    typing_delay: Duration,
}

impl AssistantService {
    pub fn new(typing_delay: Duration) -> Self {
        Self {
            messages: Mutex::new(vec![ChatMessage::new(GREETING, Sender::Stoqy)]),
            typing_delay,
        }
    }

    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.messages.lock().expect("transcript mutex poisoned").clone()
    }

    pub fn suggested_questions(&self) -> &'static [&'static str] {
        &SUGGESTED_QUESTIONS
    }

    /// Append the user's message and, after the simulated typing delay, the
    /// canned reply. Blank input is rejected, matching the send button guard.
    pub async fn send(&self, text: &str) -> Result<ChatMessage, AssistantError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        {
            let mut guard = self.messages.lock().expect("transcript mutex poisoned");
            guard.push(ChatMessage::new(trimmed, Sender::User));
        }

        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        let reply = ChatMessage::new(DEMO_REPLY, Sender::Stoqy);
        let mut guard = self.messages.lock().expect("transcript mutex poisoned");
        guard.push(reply.clone());
        Ok(reply)
    }
}

/// Error raised by the assistant.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("message must not be empty")]
    EmptyMessage,
}
