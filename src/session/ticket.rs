use crate::Epoch;

/// Handle for one claim attempt, issued when the claim modal opens.
///
/// Closing the modal, playing again or resetting retires the ticket, so a
/// transaction that completes afterwards can no longer mark the prize claimed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(Epoch);

impl Ticket {
    pub fn epoch(&self) -> Epoch {
        self.0
    }
}

impl From<Epoch> for Ticket {
    fn from(epoch: Epoch) -> Self {
        Self(epoch)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
