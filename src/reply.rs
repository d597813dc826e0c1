//! Response payloads handed back to the transport

use serde::{Deserialize, Serialize};

/// What the assistant says back for one turn
///
/// Serialized untagged: a text reply is a bare JSON string, a rich reply
/// is the `{ image: { url }, caption }` object the transport expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Text(String),
    Rich(RichPayload),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub fn image(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Reply::Rich(RichPayload {
            image: ImageRef { url: url.into() },
            caption: caption.into(),
        })
    }

    /// Text body of the reply (the caption for rich replies)
    pub fn as_text(&self) -> &str {
        match self {
            Reply::Text(text) => text,
            Reply::Rich(payload) => &payload.caption,
        }
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Reply::Text(text)
    }
}

/// Media reference plus caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichPayload {
    pub image: ImageRef,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
}
