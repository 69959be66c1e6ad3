//! Monotonic request tagging.
//!
//! Each exchange takes a ticket when it is issued. When the reply arrives
//! it is applied only if its ticket is still the latest one for that action;
//! older replies are dropped so the most recent request always wins.

#[cfg(test)]
#[path = "seq_test.rs"]
mod seq_test;

/// Ticket identifying one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Issue a new ticket, superseding all earlier ones.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Whether an effect-driving counter has moved past the value it last acted on.
///
/// Zero is the initial value and never fires. Effects that subscribe to a
/// whole state struct rerun on unrelated edits, so they compare against the
/// last handled value instead of just checking for non-zero.
pub fn seq_advanced(seq: u64, last_handled: u64) -> bool {
    seq != 0 && seq != last_handled
}
