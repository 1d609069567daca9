//! Request tickets for refreshable stores
//!
//! A store issues a ticket when a fetch starts and presents it again when the
//! fetch completes. A completion older than one already applied is stale and
//! must not overwrite newer data.

/// Identifies one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Monotonic ticket counter with last-applied tracking
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: u64,
    applied: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    /// Record a completion. Returns false when a newer ticket was already
    /// applied and this result must be dropped.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        true
    }

    /// True when no newer ticket has been issued since this one
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }
}
