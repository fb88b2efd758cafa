//! Request generation guard for overlapping refresh cycles.
//!
//! Every refresh cycle takes a ticket before it starts fetching. When its
//! results arrive they are applied only if no newer ticket has been issued
//! in the meantime, so a slow response from an old cycle can never overwrite
//! a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationTicket(u64);

impl GenerationTicket {
    /// Returns the raw generation number.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic counter of issued requests. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

impl RequestGeneration {
    /// Creates a counter with no tickets issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket, superseding all earlier ones.
    pub fn issue(&self) -> GenerationTicket {
        GenerationTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns true if `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Returns `value` if `ticket` is still current, dropping it otherwise.
    pub fn accept<T>(&self, ticket: GenerationTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}
