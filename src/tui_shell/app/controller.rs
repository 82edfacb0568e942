//! Ready/Busy state machine around the input line.
//!
//! Every request leaves the line Busy; only the matching reply, success or
//! failure, brings it back to Ready. While Busy no second request can be
//! issued. Requests are never cancelled or retried.

use super::*;

const LOCAL_EXIT: [&str; 2] = ["exit", "quit"];

impl App {
    /// Tab: ask the server how the current line could continue.
    pub(in crate::tui_shell) fn request_completion(&mut self) -> Option<Request> {
        if !self.is_ready() {
            return None;
        }
        self.state = InputState::Busy(Pending::Completion);
        self.suggestions.clear();
        Some(Request::Complete {
            session: self.session.clone(),
            input: self.input.buf.clone(),
        })
    }

    /// Enter: send the current line for execution.
    pub(in crate::tui_shell) fn request_execution(&mut self) -> Option<Request> {
        if !self.is_ready() || self.input.buf.is_empty() {
            return None;
        }
        let command = self.input.buf.clone();
        self.suggestions.clear();
        if LOCAL_EXIT.contains(&command.trim()) {
            self.quit = true;
            return None;
        }
        self.input.push_history(&command);
        self.state = InputState::Busy(Pending::Execution);
        Some(Request::Execute {
            session: self.session.clone(),
            command,
        })
    }

    pub(in crate::tui_shell) fn handle_reply(&mut self, reply: Reply) {
        match reply {
            Reply::Completion(Ok(outcome)) => self.apply_completion(outcome),
            Reply::Completion(Err(err)) => {
                tracing::debug!(error = %format!("{:#}", err), "completion failed");
            }
            Reply::Execution { command, result } => match result {
                Ok(execution) => self.apply_execution(&command, execution),
                Err(err) => {
                    tracing::warn!(command = %command, error = %format!("{:#}", err), "execution failed");
                }
            },
        }
        self.state = InputState::Ready;
        self.transcript.follow_tail();
    }

    fn apply_completion(&mut self, outcome: CompletionOutcome) {
        if let Some(line) = outcome.completed_input() {
            self.input.set(line);
        }
        if let CompletionOutcome::Ambiguous { candidates, .. } = outcome {
            self.suggestions = candidates;
        }
    }

    fn apply_execution(&mut self, command: &str, execution: Execution) {
        self.transcript.present(command, &execution);
        self.session = execution.session;
        self.input.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/controller_tests.rs"]
mod tests;
