/// Where a session sits in its lifecycle.
///
/// Derived from [`Session`](super::Session) fields, never stored.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// No round played yet, or the session was reset.
    Idle,
    /// A round exists; a won round may be claimed.
    RoundPlayed,
    /// The claim modal is open and a transaction may be in flight.
    ClaimPending,
    /// The prize for the current round was confirmed on chain.
    Claimed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::RoundPlayed => write!(f, "played"),
            Phase::ClaimPending => write!(f, "pending"),
            Phase::Claimed => write!(f, "claimed"),
        }
    }
}
