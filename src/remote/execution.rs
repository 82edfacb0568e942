use super::*;

/// Result of a successful `execute` round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Execution {
    /// Session to use for the next request; carries the path the server reported.
    pub session: Session,
    pub messages: Vec<Message>,
}

impl From<ExecutionResponse> for Execution {
    fn from(resp: ExecutionResponse) -> Self {
        Self {
            session: Session::new(resp.path),
            messages: resp.messages.unwrap_or_default(),
        }
    }
}

impl RemoteClient {
    /// Runs `command` at the session's path.
    ///
    /// On failure the caller keeps its current session.
    pub async fn execute(&self, session: &Session, command: &str) -> Result<Execution> {
        tracing::debug!(path = session.current_path(), command, "execute");
        let resp = self
            .client
            .get(self.url("execute", session)?)
            .query(&[("command", command)])
            .send()
            .await
            .context("execute")?;
        let response: ExecutionResponse = self
            .ensure_ok(resp, "execute")?
            .json()
            .await
            .context("parse execution")?;
        Ok(Execution::from(response))
    }
}

#[cfg(test)]
#[path = "../tests/remote/execution_tests.rs"]
mod tests;
