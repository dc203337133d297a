use super::address::Address;

/// Deployed token contract the prize is claimed from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Contract {
    chain: String,
    address: Address,
}

impl Contract {
    pub fn new(chain: impl Into<String>, address: impl Into<Address>) -> Self {
        Self {
            chain: chain.into(),
            address: address.into(),
        }
    }
    pub fn chain(&self) -> &str {
        &self.chain
    }
    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// The prize token deployment.
impl Default for Contract {
    fn default() -> Self {
        Self::new(crate::PRIZE_CHAIN, crate::PRIZE_CONTRACT)
    }
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.chain, self.address)
    }
}
