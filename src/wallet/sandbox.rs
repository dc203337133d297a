use super::*;
use crate::Tokens;
use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::hash::Hash;
use std::hash::Hasher;

/// In-memory wallet with a single account and a token ledger.
///
/// Claims mint into the ledger and produce receipts with deterministic
/// hashes. Failures can be queued to exercise rejected transactions, and
/// the sandbox can be taken offline to make balance reads fail.
#[derive(Debug)]
pub struct Sandbox {
    account: Address,
    contract: Contract,
    connected: bool,
    offline: bool,
    block: u64,
    ledger: BTreeMap<Address, Tokens>,
    failures: VecDeque<WalletError>,
}

impl Sandbox {
    pub fn new(account: impl Into<Address>) -> Self {
        Self {
            account: account.into(),
            contract: Contract::default(),
            connected: false,
            offline: false,
            block: 0,
            ledger: BTreeMap::new(),
            failures: VecDeque::new(),
        }
    }
    /// Seed the account's token balance.
    pub fn with_balance(mut self, tokens: Tokens) -> Self {
        self.ledger.insert(self.account.clone(), tokens);
        self
    }
    /// Serve a different token contract than the prize default.
    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }
    /// Queue a failure for the next claim. Failures are consumed in order.
    pub fn fail_next(&mut self, error: WalletError) {
        self.failures.push_back(error);
    }
    /// Make balance reads fail until switched back.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }
    /// Tokens held by `address`.
    pub fn tokens(&self, address: &Address) -> Tokens {
        self.ledger.get(address).copied().unwrap_or_default()
    }
    /// Latest block, one per confirmed claim.
    pub fn block(&self) -> u64 {
        self.block
    }
    fn known(&self, contract: &Contract) -> Result<(), WalletError> {
        match *contract == self.contract {
            true => Ok(()),
            false => Err(WalletError::Unavailable(format!("unknown contract {}", contract))),
        }
    }
    fn hash(&self, to: &Address, quantity: Tokens) -> String {
        let ref mut hasher = std::hash::DefaultHasher::new();
        self.contract.address().hash(hasher);
        to.hash(hasher);
        quantity.hash(hasher);
        self.block.hash(hasher);
        format!("0x{:016x}", hasher.finish())
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new("0x9a3Cb1E4b7f0D2c6E8a5F1b3C7d9E0f2A4b6C8d1")
    }
}

#[async_trait::async_trait]
impl Wallet for Sandbox {
    fn is_connected(&self) -> bool {
        self.connected
    }
    async fn connect(&mut self) -> Result<Address, WalletError> {
        self.connected = true;
        log::debug!("[sandbox] connected {}", self.account);
        Ok(self.account.clone())
    }
    async fn disconnect(&mut self) {
        self.connected = false;
        log::debug!("[sandbox] disconnected {}", self.account);
    }
    fn account(&self) -> Option<Address> {
        self.connected.then(|| self.account.clone())
    }
    async fn balance(&self, contract: &Contract, address: &Address) -> Result<Balance, WalletError> {
        if self.offline {
            return Err(WalletError::Unavailable("sandbox offline".into()));
        }
        self.known(contract)?;
        Ok(Balance::from(self.tokens(address)))
    }
    async fn claim(
        &mut self,
        contract: &Contract,
        to: &Address,
        quantity: &str,
    ) -> Result<Receipt, WalletError> {
        if !self.connected {
            return Err(WalletError::Disconnected);
        }
        self.known(contract)?;
        let amount = quantity
            .trim()
            .parse::<Tokens>()
            .map_err(|_| WalletError::InvalidQuantity(quantity.to_string()))?;
        if let Some(error) = self.failures.pop_front() {
            log::debug!("[sandbox] claim failed: {}", error);
            return Err(error);
        }
        let total = self
            .tokens(to)
            .checked_add(amount)
            .ok_or_else(|| WalletError::Rejected("balance overflow".into()))?;
        self.ledger.insert(to.clone(), total);
        self.block += 1;
        let receipt = Receipt {
            hash: self.hash(to, amount),
            block: self.block,
            to: to.clone(),
            quantity: amount.to_string(),
        };
        log::debug!("[sandbox] minted {}", receipt);
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_disconnected() {
        let mut sandbox = Sandbox::default();
        assert!(!sandbox.is_connected());
        assert_eq!(sandbox.account(), None);
        let address = sandbox.connect().await.unwrap();
        assert!(sandbox.is_connected());
        assert_eq!(sandbox.account(), Some(address));
        sandbox.disconnect().await;
        assert_eq!(sandbox.account(), None);
    }

    #[tokio::test]
    async fn claim_credits_ledger() {
        let mut sandbox = Sandbox::default().with_balance(5);
        let contract = Contract::default();
        let address = sandbox.connect().await.unwrap();
        let receipt = sandbox.claim(&contract, &address, "10").await.unwrap();
        assert_eq!(receipt.block, 1);
        assert_eq!(receipt.to, address);
        assert_eq!(receipt.quantity, "10");
        assert!(receipt.hash.starts_with("0x"));
        assert_eq!(sandbox.tokens(&address), 15);
        assert_eq!(
            sandbox.balance(&contract, &address).await,
            Ok(Balance::Ready("15".into()))
        );
    }

    #[tokio::test]
    async fn claim_refuses_overflowing_balance() {
        let mut sandbox = Sandbox::default().with_balance(Tokens::MAX);
        let contract = Contract::default();
        let address = sandbox.connect().await.unwrap();
        assert_eq!(
            sandbox.claim(&contract, &address, "10").await,
            Err(WalletError::Rejected("balance overflow".into()))
        );
        assert_eq!(sandbox.tokens(&address), Tokens::MAX);
        assert_eq!(sandbox.block(), 0);
    }

    #[tokio::test]
    async fn claim_requires_connection() {
        let mut sandbox = Sandbox::default();
        let address = Address::from("0x01");
        let result = sandbox.claim(&Contract::default(), &address, "10").await;
        assert_eq!(result, Err(WalletError::Disconnected));
        assert_eq!(sandbox.block(), 0);
    }

    #[tokio::test]
    async fn claim_rejects_bad_quantity() {
        let mut sandbox = Sandbox::default();
        let address = sandbox.connect().await.unwrap();
        let result = sandbox.claim(&Contract::default(), &address, "ten").await;
        assert_eq!(result, Err(WalletError::InvalidQuantity("ten".into())));
    }

    #[tokio::test]
    async fn queued_failures_are_consumed_in_order() {
        let mut sandbox = Sandbox::default();
        let contract = Contract::default();
        let address = sandbox.connect().await.unwrap();
        sandbox.fail_next(WalletError::Rejected("denied".into()));
        sandbox.fail_next(WalletError::Unavailable("timeout".into()));
        assert_eq!(
            sandbox.claim(&contract, &address, "10").await,
            Err(WalletError::Rejected("denied".into()))
        );
        assert_eq!(
            sandbox.claim(&contract, &address, "10").await,
            Err(WalletError::Unavailable("timeout".into()))
        );
        assert!(sandbox.claim(&contract, &address, "10").await.is_ok());
        assert_eq!(sandbox.tokens(&address), 10);
    }

    #[tokio::test]
    async fn unknown_contract_is_unavailable() {
        let sandbox = Sandbox::default();
        let other = Contract::new("mainnet", "0xdead");
        let address = Address::from("0x01");
        assert!(matches!(
            sandbox.balance(&other, &address).await,
            Err(WalletError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn offline_balance_fails() {
        let mut sandbox = Sandbox::default();
        let address = sandbox.connect().await.unwrap();
        sandbox.set_offline(true);
        assert!(sandbox.balance(&Contract::default(), &address).await.is_err());
        sandbox.set_offline(false);
        assert!(sandbox.balance(&Contract::default(), &address).await.is_ok());
    }

    #[tokio::test]
    async fn receipts_differ_per_block() {
        let mut sandbox = Sandbox::default();
        let contract = Contract::default();
        let address = sandbox.connect().await.unwrap();
        let a = sandbox.claim(&contract, &address, "10").await.unwrap();
        let b = sandbox.claim(&contract, &address, "10").await.unwrap();
        assert_ne!(a.hash, b.hash);
        assert_eq!(b.block, 2);
    }
}
