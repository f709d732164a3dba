//! Stale-response gate for record sources.

/// Identifies one outgoing page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Drops responses that arrive after a newer request was issued.
///
/// The view itself never deduplicates; a record source that fetches pages
/// asynchronously issues a ticket per request and only applies a response
/// whose ticket is still the latest.
///
/// # Example
///
/// ```
/// use tabula_lib::table::ResponseGate;
///
/// let mut gate = ResponseGate::new();
/// let first = gate.issue();
/// let second = gate.issue();
/// assert!(!gate.accept(first));
/// assert!(gate.accept(second));
/// ```
#[derive(Debug, Default)]
pub struct ResponseGate {
    latest: u64,
}

impl ResponseGate {
    /// Creates a gate with no requests issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new request, superseding earlier ones.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Returns `true` if a response for `ticket` should be applied.
    pub fn accept(&self, ticket: Ticket) -> bool {
        let current = ticket.0 == self.latest;
        if !current {
            log::debug!(
                "[gate] dropping stale response {} (latest {})",
                ticket.0,
                self.latest
            );
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_accepted() {
        let mut gate = ResponseGate::new();
        let tickets: Vec<Ticket> = (0..3).map(|_| gate.issue()).collect();

        assert!(!gate.accept(tickets[0]));
        assert!(!gate.accept(tickets[1]));
        assert!(gate.accept(tickets[2]));
        // Accepting does not consume the ticket.
        assert!(gate.accept(tickets[2]));
    }
}
