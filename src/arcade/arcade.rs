use super::*;
use crate::*;

/// Imperative shell around a [`Controller`].
///
/// Owns the wallet collaborator, submits the prize claim and feeds the
/// transaction result back into the session. The controller decides what
/// is allowed; the arcade only performs the side effects.
pub struct Arcade<W, S> {
    wallet: W,
    contract: Contract,
    controller: Controller<S>,
}

impl<W, S> Arcade<W, S>
where
    W: Wallet,
    S: Source,
{
    pub fn new(wallet: W, source: S) -> Self {
        Self {
            wallet,
            contract: Contract::default(),
            controller: Controller::new(source),
        }
    }
    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }
    pub fn wallet(&self) -> &W {
        &self.wallet
    }
    pub fn wallet_mut(&mut self) -> &mut W {
        &mut self.wallet
    }
    pub fn contract(&self) -> &Contract {
        &self.contract
    }
    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }
    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    pub async fn connect(&mut self) -> Result<Address, ArcadeError> {
        let address = self.wallet.connect().await?;
        log::info!("[arcade] connected {}", address.shorten());
        Ok(address)
    }
    /// Log out. The session is kept; the view falls back to the connect screen.
    pub async fn disconnect(&mut self) {
        self.wallet.disconnect().await;
        log::info!("[arcade] disconnected");
    }
    pub fn play(&mut self, choice: Choice) -> Round {
        self.controller.play(choice)
    }
    pub fn reset(&mut self) {
        self.controller.reset()
    }
    pub fn open_claim_modal(&mut self) -> bool {
        self.controller.open_claim_modal().is_some()
    }
    pub fn close_claim_modal(&mut self) {
        self.controller.close_claim_modal()
    }
    /// Submit the prize claim for the open modal and wait for the result.
    /// On success the session moves to claimed; on failure it stays pending
    /// so the claim can be retried or the modal closed.
    pub async fn claim(&mut self) -> Result<Receipt, ArcadeError> {
        let ticket = self.controller.ticket().ok_or(ArcadeError::NotClaimable)?;
        let result = match self.wallet.account() {
            None => Err(WalletError::Disconnected),
            Some(to) => {
                log::info!("[arcade] claiming {} tokens to {}", PRIZE_QUANTITY, to.shorten());
                self.wallet.claim(&self.contract, &to, PRIZE_QUANTITY).await
            }
        };
        match result {
            Ok(receipt) => {
                self.controller.confirm_claim(ticket);
                log::info!("[arcade] claimed {}", receipt);
                Ok(receipt)
            }
            Err(e) => {
                self.controller.reject_claim(ticket, &e);
                Err(e.into())
            }
        }
    }
    /// Prize token balance of the connected account. None while
    /// disconnected or when the wallet cannot answer.
    pub async fn balance(&self) -> Option<Balance> {
        let address = self.wallet.account()?;
        self.wallet
            .balance(&self.contract, &address)
            .await
            .inspect_err(|e| log::warn!("[arcade] balance unavailable: {}", e))
            .ok()
    }
    pub async fn view(&self) -> View {
        let account = self.wallet.account();
        let balance = self.balance().await;
        View::render(self.session(), account.as_ref(), balance.as_ref())
    }
}
