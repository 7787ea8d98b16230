//! Protocol misuse errors.

use std::fmt;

/// Misuse of the item-building protocol.
///
/// These indicate a bug in the code driving the list, not bad data. The
/// frame in progress must be abandoned. The list drops any outstanding
/// request when it reports one, so the next `begin_frame` starts a fresh
/// frame from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// A frame was started or finished while an item request was outstanding.
    UnfinishedItem,
    /// Another item was requested before the outstanding one was submitted.
    RequestPending,
    /// An item was queried or submitted without an outstanding request.
    NoRequest,
}

impl ProtocolError {
    /// Logs the violation and hands it back for returning.
    pub(crate) fn raise(self) -> Self {
        log::error!("list protocol violation: {self}");
        self
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnfinishedItem => write!(f, "unfinished item"),
            ProtocolError::RequestPending => {
                write!(f, "item requested before the previous one was submitted")
            }
            ProtocolError::NoRequest => write!(f, "no item was requested"),
        }
    }
}

impl std::error::Error for ProtocolError {}
