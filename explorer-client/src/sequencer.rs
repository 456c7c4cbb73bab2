//! Request sequencing
//!
//! A user can start a new fetch before the previous one resolves. Each fetch
//! takes a ticket; only the most recently issued ticket may publish results,
//! so a slow stale response can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic token identifying one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Issues tickets and tracks the latest one
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket; every earlier ticket becomes stale
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the latest one issued
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
