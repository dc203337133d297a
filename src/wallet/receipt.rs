use super::address::Address;

/// Proof that a claim transaction was included on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Receipt {
    pub hash: String,
    pub block: u64,
    pub to: Address,
    pub quantity: String,
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} tokens to {} in block {} ({})",
            self.quantity,
            self.to.shorten(),
            self.block,
            self.hash
        )
    }
}
