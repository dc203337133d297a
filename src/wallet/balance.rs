use crate::Tokens;

/// Token balance as the wallet reports it.
///
/// Reads are asynchronous, so a balance may not have arrived yet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Balance {
    Loading,
    Ready(String),
}

impl Balance {
    /// The displayable value, if loaded.
    pub fn display(&self) -> Option<&str> {
        match self {
            Balance::Loading => None,
            Balance::Ready(value) => Some(value.as_str()),
        }
    }
}

impl From<Tokens> for Balance {
    fn from(tokens: Tokens) -> Self {
        Balance::Ready(tokens.to_string())
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Balance::Loading => write!(f, "..."),
            Balance::Ready(value) => write!(f, "{}", value),
        }
    }
}
