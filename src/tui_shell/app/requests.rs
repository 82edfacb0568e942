use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::*;

/// A round-trip the controller wants performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Request {
    Complete { session: Session, input: String },
    Execute { session: Session, command: String },
}

/// Outcome of a [`Request`], delivered back to the event loop.
#[derive(Debug)]
pub(in crate::tui_shell) enum Reply {
    Completion(Result<CompletionOutcome>),
    Execution {
        command: String,
        result: Result<Execution>,
    },
}

pub(in crate::tui_shell) async fn perform(client: &RemoteClient, request: Request) -> Reply {
    match request {
        Request::Complete { session, input } => {
            Reply::Completion(client.complete(&session, &input).await)
        }
        Request::Execute { session, command } => {
            let result = client.execute(&session, &command).await;
            Reply::Execution { command, result }
        }
    }
}

/// Runs requests on the async runtime and queues their replies for the UI thread.
pub(in crate::tui_shell) struct Dispatcher {
    client: RemoteClient,
    handle: tokio::runtime::Handle,
    tx: UnboundedSender<Reply>,
}

impl Dispatcher {
    pub(in crate::tui_shell) fn new(
        client: RemoteClient,
        handle: tokio::runtime::Handle,
    ) -> (Self, UnboundedReceiver<Reply>) {
        let (tx, rx) = unbounded_channel();
        (Self { client, handle, tx }, rx)
    }

    pub(in crate::tui_shell) fn dispatch(&self, request: Request) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let reply = perform(&client, request).await;
            // The receiver only goes away when the UI is shutting down.
            let _ = tx.send(reply);
        });
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/requests_tests.rs"]
mod tests;
