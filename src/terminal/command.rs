use crate::*;

/// A menu entry the terminal offers for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Connect,
    Play(Choice),
    TryAgain,
    OpenClaim,
    SubmitClaim,
    CloseClaim,
    Logout,
    Quit,
}

impl Command {
    /// Entries available from `view`, in display order.
    pub fn options(view: &View) -> Vec<Command> {
        let body = match view.screen() {
            None => vec![Command::Connect],
            Some(Screen::Choosing { choices }) => choices.iter().copied().map(Command::Play).collect(),
            Some(Screen::Result { modal: Some(_), .. }) => {
                vec![Command::SubmitClaim, Command::CloseClaim]
            }
            Some(Screen::Result { claim_button, .. }) => match claim_button {
                true => vec![Command::TryAgain, Command::OpenClaim],
                false => vec![Command::TryAgain],
            },
        };
        let tail = match view {
            View::Disconnected => vec![Command::Quit],
            View::Connected { .. } => vec![Command::Logout, Command::Quit],
        };
        body.into_iter().chain(tail).collect()
    }
    pub fn label(&self) -> String {
        match self {
            Command::Connect => "Connect wallet".into(),
            Command::Play(choice) => format!("{} {}", choice.emoji(), choice),
            Command::TryAgain => "Try again".into(),
            Command::OpenClaim => "Claim prize".into(),
            Command::SubmitClaim => format!("Claim {} tokens", PRIZE_TOKENS),
            Command::CloseClaim => "Close".into(),
            Command::Logout => "Logout".into(),
            Command::Quit => "Quit".into(),
        }
    }
}
