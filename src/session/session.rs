use super::phase::Phase;
use crate::gameplay::*;

/// Everything the presentation layer needs to know about the current game.
///
/// Owned by [`Controller`](super::Controller), which is the only writer.
/// Fields stay consistent with each other:
/// - `prize_eligible` iff the current round was won
/// - `claim_modal_open` only while prize-eligible
/// - `prize_claimed` only after a confirmed claim, cleared on reset
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Session {
    round: Option<Round>,
    prize_eligible: bool,
    claim_modal_open: bool,
    prize_claimed: bool,
}

impl Session {
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }
    pub fn prize_eligible(&self) -> bool {
        self.prize_eligible
    }
    pub fn claim_modal_open(&self) -> bool {
        self.claim_modal_open
    }
    pub fn prize_claimed(&self) -> bool {
        self.prize_claimed
    }
    /// Whether the "claim prize" action should be offered.
    pub fn claimable(&self) -> bool {
        self.prize_eligible && !self.prize_claimed
    }
    pub fn phase(&self) -> Phase {
        match (self.round, self.prize_claimed, self.claim_modal_open) {
            (None, _, _) => Phase::Idle,
            (Some(_), true, _) => Phase::Claimed,
            (Some(_), false, true) => Phase::ClaimPending,
            (Some(_), false, false) => Phase::RoundPlayed,
        }
    }
    /// Checks the cross-field invariants.
    pub fn consistent(&self) -> bool {
        let won = self.round.map_or(false, |r| r.outcome().is_win());
        self.prize_eligible == won
            && (!self.claim_modal_open || self.prize_eligible)
            && (!self.prize_claimed || self.prize_eligible)
            && !(self.prize_claimed && self.claim_modal_open)
    }
}

/// Transitions. Only the controller applies these.
impl Session {
    pub(super) fn begin(&mut self, round: Round) {
        *self = Self {
            round: Some(round),
            prize_eligible: round.outcome().is_win(),
            claim_modal_open: false,
            prize_claimed: false,
        };
    }
    pub(super) fn open(&mut self) {
        self.claim_modal_open = true;
    }
    pub(super) fn close(&mut self) {
        self.claim_modal_open = false;
    }
    pub(super) fn settle(&mut self) {
        self.claim_modal_open = false;
        self.prize_claimed = true;
    }
}
