//! Transient status messages with last-write-wins replacement.

use std::cell::{Cell, RefCell};

/// How long a message stays visible before its auto-hide fires, in
/// milliseconds. The frontend owns the actual timer; the engine only
/// decides whether an expiry still applies.
pub const MESSAGE_HIDE_MS: u32 = 5_000;

/// Visual flavor of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// A mutation was accepted by the server.
    Success,
    /// A mutation failed or was blocked locally.
    Error,
}

/// Identity of one posted message.
///
/// Each post bumps a generation counter, and an auto-hide carries the token
/// of the message it was scheduled for. A timer that outlives its message
/// therefore expires nothing: the token no longer matches the current
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageToken(u64);

/// A short-lived user-visible status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    /// Text shown to the user.
    pub text: String,
    /// Success or error styling.
    pub kind: MessageKind,
    token: MessageToken,
}

impl TransientMessage {
    /// The identity to hand to this message's auto-hide timer.
    #[must_use]
    pub fn token(&self) -> MessageToken {
        self.token
    }
}

/// Holds the at-most-one visible message. Replacement is last-write-wins.
#[derive(Debug, Default)]
pub struct MessageBoard {
    current: RefCell<Option<TransientMessage>>,
    generation: Cell<u64>,
}

impl MessageBoard {
    /// Replace whatever is showing with a new message and return a copy of
    /// it, token included, so the caller can schedule the auto-hide.
    pub fn post(&self, kind: MessageKind, text: impl Into<String>) -> TransientMessage {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let message = TransientMessage {
            text: text.into(),
            kind,
            token: MessageToken(generation),
        };
        *self.current.borrow_mut() = Some(message.clone());
        message
    }

    /// Hide the current message, but only if `token` identifies it.
    ///
    /// Returns `true` when the board actually cleared; a stale token (the
    /// message was already replaced) is a no-op.
    pub fn expire(&self, token: MessageToken) -> bool {
        let mut current = self.current.borrow_mut();
        let owns_current = current
            .as_ref()
            .is_some_and(|message| message.token == token);
        if owns_current {
            *current = None;
        }
        owns_current
    }

    /// The currently visible message, if any.
    #[must_use]
    pub fn current(&self) -> Option<TransientMessage> {
        self.current.borrow().clone()
    }
}
