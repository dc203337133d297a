use super::*;

/// The external wallet and token-contract SDK.
///
/// Connection, signing and broadcasting all live behind this trait; the game
/// only reads the account and balance and submits the prize claim. Any
/// implementation works: a browser wallet bridge, an RPC client, or the
/// in-memory [`Sandbox`].
#[async_trait::async_trait]
pub trait Wallet: Send + Sync {
    fn is_connected(&self) -> bool;
    /// Connect and return the active account.
    async fn connect(&mut self) -> Result<Address, WalletError>;
    async fn disconnect(&mut self);
    /// The active account, if connected.
    fn account(&self) -> Option<Address>;
    /// Token balance of `address` on the prize contract.
    async fn balance(&self, contract: &Contract, address: &Address) -> Result<Balance, WalletError>;
    /// Submit a claim of `quantity` tokens to `to`. Resolves once the
    /// transaction is confirmed or has failed.
    async fn claim(
        &mut self,
        contract: &Contract,
        to: &Address,
        quantity: &str,
    ) -> Result<Receipt, WalletError>;
}
