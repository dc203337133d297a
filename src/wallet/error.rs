/// Failures reported by the wallet collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// No account is connected.
    Disconnected,
    /// The user or the chain declined the transaction.
    Rejected(String),
    /// The wallet or RPC endpoint could not be reached.
    Unavailable(String),
    /// The claim quantity is not a whole token amount.
    InvalidQuantity(String),
}

impl std::fmt::Display for WalletError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "wallet not connected"),
            Self::Rejected(s) => write!(f, "transaction rejected: {}", s),
            Self::Unavailable(s) => write!(f, "wallet unavailable: {}", s),
            Self::InvalidQuantity(s) => write!(f, "invalid quantity: {}", s),
        }
    }
}

impl std::error::Error for WalletError {}
