use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{error, info};

use super::{AccessToken, AuthError, Result, TokenClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    Unrequested,
    Pending,
    Ready,
    Failed,
}

enum SlotState {
    Unrequested,
    Pending(Receiver<Result<AccessToken>>),
    Ready(AccessToken),
    Failed(String),
}

/// Holds the bearer token for the session. The fetch runs on a worker thread and
/// hands its result back over a channel; nothing here blocks unless `wait` is
/// called.
pub struct TokenSlot {
    state: SlotState,
}

impl Default for TokenSlot {
    fn default() -> Self {
        Self {
            state: SlotState::Unrequested,
        }
    }
}

impl std::fmt::Debug for TokenSlot {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TokenSlot")
            .field("state", &self.state())
            .finish()
    }
}

impl TokenSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fetch that could not even be started.
    pub fn failed(error: AuthError) -> Self {
        let mut slot = Self::default();
        slot.settle(Err(error));
        slot
    }

    /// Starts the token exchange in the background. The result is picked up by
    /// `poll` or `wait`.
    pub fn spawn(client: TokenClient) -> Self {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("token-fetch".to_string())
            .spawn(move || {
                let _ = tx.send(client.request_token());
            });

        match spawned {
            Ok(_) => Self {
                state: SlotState::Pending(rx),
            },
            Err(error) => Self::failed(AuthError::Worker(error.to_string())),
        }
    }

    pub fn state(&self) -> TokenState {
        match self.state {
            SlotState::Unrequested => TokenState::Unrequested,
            SlotState::Pending(_) => TokenState::Pending,
            SlotState::Ready(_) => TokenState::Ready,
            SlotState::Failed(_) => TokenState::Failed,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            SlotState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&AccessToken> {
        match &self.state {
            SlotState::Ready(token) => Some(token),
            _ => None,
        }
    }

    /// Collects a finished fetch without blocking. A token that has not
    /// arrived yet reads as absent.
    pub fn poll(&mut self) -> Option<&AccessToken> {
        if let SlotState::Pending(receiver) = &self.state {
            match receiver.try_recv() {
                Ok(outcome) => self.settle(outcome),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => self.settle(Err(AuthError::Worker(
                    "token worker exited without a result".to_string(),
                ))),
            }
        }
        self.token()
    }

    /// Blocks up to `timeout` for a pending fetch to finish.
    pub fn wait(&mut self, timeout: Duration) -> Option<&AccessToken> {
        if let SlotState::Pending(receiver) = &self.state {
            match receiver.recv_timeout(timeout) {
                Ok(outcome) => self.settle(outcome),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => self.settle(Err(AuthError::Worker(
                    "token worker exited without a result".to_string(),
                ))),
            }
        }
        self.token()
    }

    fn settle(&mut self, outcome: Result<AccessToken>) {
        self.state = match outcome {
            Ok(token) => {
                info!(token = %token.preview(), "access token stored");
                SlotState::Ready(token)
            }
            Err(error) => {
                error!(%error, "error fetching access token");
                SlotState::Failed(error.to_string())
            }
        };
    }
}
