use super::*;

/// Classified answer to a completion request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    Unique { prefix: String, candidate: String },
    Ambiguous { prefix: String, candidates: Vec<String> },
    None,
}

impl CompletionOutcome {
    /// Splits `response` against the input it was requested for.
    pub fn classify(input: &str, response: CompletionResponse) -> Self {
        let prefix = kept_prefix(input, response.start);
        let mut candidates = response.candidates;
        match candidates.len() {
            0 => Self::None,
            1 => Self::Unique {
                prefix,
                candidate: candidates.remove(0),
            },
            _ => Self::Ambiguous { prefix, candidates },
        }
    }

    /// Input line after applying this outcome, if it changes the line.
    pub fn completed_input(&self) -> Option<String> {
        match self {
            Self::Unique { prefix, candidate } => Some(format!("{}{}", prefix, candidate)),
            Self::Ambiguous { prefix, candidates } => Some(format!(
                "{}{}",
                prefix,
                crate::prefix::shared_stem(candidates)
            )),
            Self::None => None,
        }
    }
}

fn kept_prefix(input: &str, start: i64) -> String {
    let Ok(start) = usize::try_from(start) else {
        return String::new();
    };
    input.chars().take(start).collect()
}

impl RemoteClient {
    pub async fn complete(&self, session: &Session, input: &str) -> Result<CompletionOutcome> {
        tracing::debug!(path = session.current_path(), input, "complete");
        let resp = self
            .client
            .get(self.url("complete", session)?)
            .query(&[("current", input)])
            .send()
            .await
            .context("complete")?;
        let response: CompletionResponse = self
            .ensure_ok(resp, "complete")?
            .json()
            .await
            .context("parse completion")?;
        Ok(CompletionOutcome::classify(input, response))
    }
}

#[cfg(test)]
#[path = "../tests/remote/completion_tests.rs"]
mod tests;
