//! Rock-paper-scissors against the house, with a token prize for a win.
//!
//! - [`gameplay`]: choices, outcomes, rounds and the computer's move source
//! - [`session`]: the session state machine driven by user actions
//! - [`wallet`]: the wallet/contract collaborator and an in-memory sandbox
//! - [`arcade`]: shell joining a session to a wallet, plus the render model
pub mod arcade;
pub mod gameplay;
pub mod session;
pub mod wallet;
#[cfg(feature = "cli")]
pub mod terminal;

pub use arcade::*;
pub use gameplay::*;
pub use session::*;
pub use wallet::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Whole token units held or transferred.
pub type Tokens = u64;
/// Monotonic identifier for claim attempts within a session.
pub type Epoch = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PRIZE CONTRACT
// ============================================================================
/// Tokens awarded for a won round.
pub const PRIZE_TOKENS: Tokens = 10;
/// Prize quantity as passed to the token contract's claim method.
pub const PRIZE_QUANTITY: &str = "10";
/// Chain the prize token is deployed on.
pub const PRIZE_CHAIN: &str = "sepolia";
/// Address of the prize token contract.
pub const PRIZE_CONTRACT: &str = "0x251015dbF61303060c8cDc0c4AA9bb8853629dD4";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so the interactive menus stay readable.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
