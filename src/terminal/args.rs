use crate::*;
use clap::Parser;

/// Play rock-paper-scissors for tokens against an in-memory wallet.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for the computer's moves. Random when omitted.
    #[arg(long, env = "MINIGAME_SEED")]
    pub seed: Option<u64>,
    /// Starting token balance of the sandbox account.
    #[arg(long, default_value_t = 0)]
    pub balance: Tokens,
    /// Reject this many claim transactions before accepting one.
    #[arg(long, default_value_t = 0)]
    pub fail_claims: usize,
    /// Address of the sandbox account.
    #[arg(long)]
    pub address: Option<String>,
}

impl Args {
    pub fn source(&self) -> Box<dyn Source + Send> {
        match self.seed {
            Some(seed) => Box::new(Seeded::new(seed)),
            None => Box::new(Uniform),
        }
    }
    pub fn wallet(&self) -> Sandbox {
        let sandbox = match self.address.as_deref() {
            Some(address) => Sandbox::new(address),
            None => Sandbox::default(),
        };
        let mut sandbox = sandbox.with_balance(self.balance);
        for _ in 0..self.fail_claims {
            sandbox.fail_next(WalletError::Rejected("declined in sandbox".into()));
        }
        sandbox
    }
    pub fn arcade(&self) -> Arcade<Sandbox, Box<dyn Source + Send>> {
        Arcade::new(self.wallet(), self.source())
    }
}
