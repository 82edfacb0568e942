use serde::{Deserialize, Serialize};

/// Style tag carried by each part of a rendered line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextMode {
    Plain,
    Debug,
    Ok,
    Warn,
    Error,

    /// Any mode this client does not know. Such parts render as nothing.
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPart {
    pub mode: TextMode,
    pub text: String,
}

impl TextPart {
    pub fn new(mode: TextMode, text: impl Into<String>) -> Self {
        Self {
            mode,
            text: text.into(),
        }
    }
}

/// One unit of server output for an executed command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    #[serde(rename = "LINE")]
    Line {
        #[serde(default)]
        parts: Vec<TextPart>,
    },

    #[serde(rename = "TABLE")]
    Table {
        #[serde(default)]
        headers: Vec<String>,
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },

    #[serde(other)]
    Unknown,
}

#[cfg(test)]
#[path = "../tests/model/message_tests.rs"]
mod tests;
