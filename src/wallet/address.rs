/// Account address as reported by the wallet, e.g. `0x1f9a...`.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// Abbreviated form for narrow displays: first 6 and last 4 characters.
    pub fn shorten(&self) -> String {
        let chars = self.0.chars().collect::<Vec<_>>();
        match chars.len() {
            n if n <= 10 => self.0.clone(),
            n => format!(
                "{}...{}",
                chars[..6].iter().collect::<String>(),
                chars[n - 4..].iter().collect::<String>()
            ),
        }
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
