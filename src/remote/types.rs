//! Payloads returned by the shell service.

use super::*;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CompletionResponse {
    /// Characters of the input already matched; negative when nothing matched.
    pub start: i64,
    #[serde(default)]
    pub candidates: Vec<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ExecutionResponse {
    pub path: String,

    /// Absent and `null` both mean "no output".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
}
