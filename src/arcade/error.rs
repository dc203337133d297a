use crate::wallet::WalletError;

/// Errors surfaced by [`Arcade`](super::Arcade) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArcadeError {
    /// A claim was attempted without an open claim modal.
    NotClaimable,
    /// The wallet collaborator failed.
    Wallet(WalletError),
}

impl From<WalletError> for ArcadeError {
    fn from(e: WalletError) -> Self {
        Self::Wallet(e)
    }
}

impl std::fmt::Display for ArcadeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotClaimable => write!(f, "no prize to claim"),
            Self::Wallet(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ArcadeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotClaimable => None,
            Self::Wallet(e) => Some(e),
        }
    }
}
