//! Assistant chat model. The widget talks to a server-side proxy that holds
//! the generative-text credentials; nothing secret ships in the bundle. The
//! client sends the fixed persona prompt plus the visitor's latest message
//! and consumes a single text field from the reply.

use serde::{Deserialize, Serialize};

use crate::net;

/// Proxy path that forwards to the generative-text API.
pub const ASSISTANT_ENDPOINT: &str = "/api/assistant";

pub const SYSTEM_PROMPT: &str = "You are the AI assistant for Aditya, a Data Analyst and \
Automation Specialist. Use the following info: \
- Skills: QA, n8n, Python, A/B Testing, SQL, Power BI. \
- Journey: Graduating in Computer Engineering & Visual Arts (7.75 CGPA), interned at Kanishka Software. \
- Tone: Professional, futuristic, helpful, and concise. \
Answer questions about his professional background only.";

/// Opening message seeded into every conversation.
pub const GREETING: &str =
    "Hi! I'm Aditya's AI twin. Ask me anything about his skills in Data Analysis, Python, or Automation!";

/// Shown when the proxy answers but the reply body is empty.
pub const EMPTY_REPLY: &str =
    "I'm sorry, I couldn't process that. Feel free to reach out to Aditya directly!";

/// Shown when the request itself fails. The conversation stays usable.
pub const UNAVAILABLE_REPLY: &str =
    "Service temporarily unavailable. Please try again later or reach out to Aditya directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssistantRequest<'a> {
    pub system: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AssistantReply {
    pub reply: Option<String>,
}

/// Maps a proxy reply onto the text shown in the transcript.
pub fn reply_text(reply: AssistantReply) -> String {
    match reply.reply {
        Some(text) if !text.trim().is_empty() => text,
        _ => EMPTY_REPLY.to_string(),
    }
}

/// Sends one message through the proxy. Failures degrade to a static
/// apology; the caller never sees an error.
pub async fn ask(message: &str) -> String {
    let request = AssistantRequest {
        system: SYSTEM_PROMPT,
        message,
    };
    match net::post_json::<AssistantReply>(ASSISTANT_ENDPOINT, &request).await {
        Ok(reply) => reply_text(reply),
        Err(err) => {
            log::warn!("assistant request failed: {err}");
            UNAVAILABLE_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_text_falls_back_on_empty_bodies() {
        assert_eq!(
            reply_text(AssistantReply {
                reply: Some("He ships fast.".to_string())
            }),
            "He ships fast."
        );
        assert_eq!(reply_text(AssistantReply { reply: None }), EMPTY_REPLY);
        assert_eq!(
            reply_text(AssistantReply {
                reply: Some("   ".to_string())
            }),
            EMPTY_REPLY
        );
    }

    #[test]
    fn request_serializes_system_and_message() {
        let json = serde_json::to_string(&AssistantRequest {
            system: "persona",
            message: "hello",
        })
        .unwrap();
        assert_eq!(json, r#"{"system":"persona","message":"hello"}"#);
    }
}
