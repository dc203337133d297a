use super::*;
use crate::gameplay::*;
use crate::Epoch;

/// Functional core for a game session.
///
/// Applies user actions and claim-transaction callbacks to a [`Session`].
/// Never talks to the chain: the [`Arcade`](crate::Arcade) shell submits
/// transactions and reports back through [`confirm_claim`](Self::confirm_claim)
/// and [`reject_claim`](Self::reject_claim).
#[derive(Debug, Default)]
pub struct Controller<S> {
    source: S,
    session: Session,
    epoch: Epoch,
}

impl<S> Controller<S>
where
    S: Source,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            session: Session::default(),
            epoch: 0,
        }
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }
    pub fn round(&self) -> Option<&Round> {
        self.session.round()
    }

    /// Play a round against one draw from the source. Replaces any previous
    /// round along with its prize flags and retires outstanding tickets.
    pub fn play(&mut self, choice: Choice) -> Round {
        let computer = self.source.draw();
        let round = Round::from((choice, computer));
        self.retire();
        self.session.begin(round);
        log::debug!("[session] played {}", round);
        self.check();
        round
    }
    /// Back to the initial state. Safe to call from anywhere, any number of times.
    pub fn reset(&mut self) {
        self.retire();
        self.session = Session::default();
        log::debug!("[session] reset");
    }
    /// Open the claim modal for a won, unclaimed round.
    /// Returns the ticket identifying this claim attempt, or None if the
    /// round cannot be claimed. Re-opening an open modal returns the same ticket.
    pub fn open_claim_modal(&mut self) -> Option<Ticket> {
        if !self.session.claimable() {
            log::debug!("[session] claim modal refused in {} phase", self.phase());
            return None;
        }
        if !self.session.claim_modal_open() {
            self.retire();
            self.session.open();
            log::debug!("[session] claim modal opened {}", self.current());
        }
        self.check();
        Some(self.current())
    }
    /// Ticket of the open claim modal, if any.
    pub fn ticket(&self) -> Option<Ticket> {
        self.session.claim_modal_open().then(|| self.current())
    }
    /// Dismiss the claim modal. Any transaction still in flight for it
    /// will be ignored when it completes.
    pub fn close_claim_modal(&mut self) {
        if self.session.claim_modal_open() {
            log::debug!("[session] claim modal closed {}", self.current());
            self.retire();
            self.session.close();
        }
    }
    /// Completion callback for a confirmed claim transaction.
    /// Applies only while the modal for this ticket is still open;
    /// returns whether the prize was marked claimed.
    pub fn confirm_claim(&mut self, ticket: Ticket) -> bool {
        if !self.session.claim_modal_open() || ticket != self.current() {
            log::debug!("[session] ignoring stale confirmation {}", ticket);
            return false;
        }
        self.session.settle();
        log::info!("[session] prize claimed {}", ticket);
        self.check();
        true
    }
    /// Failure callback for a claim transaction. State is left as is so
    /// the modal stays open for another attempt.
    pub fn reject_claim(&self, ticket: Ticket, reason: impl std::fmt::Display) {
        log::warn!("[session] claim {} failed: {}", ticket, reason);
    }
}

impl<S> Controller<S> {
    fn current(&self) -> Ticket {
        Ticket::from(self.epoch)
    }
    fn retire(&mut self) {
        self.epoch += 1;
    }
    fn check(&self) {
        debug_assert!(self.session.consistent(), "{:?}", self.session);
    }
}
