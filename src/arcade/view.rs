use crate::*;

/// What the presentation layer should draw.
///
/// Pure function of the session, the connected account and its balance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum View {
    /// No account: show the connect button.
    Disconnected,
    /// Account header plus the game screen.
    Connected {
        address: String,
        balance: Option<String>,
        screen: Screen,
    },
}

/// Body of the connected view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Screen {
    /// Waiting for the player to pick a move.
    Choosing { choices: [Choice; 3] },
    /// A round was played.
    Result {
        round: Round,
        claim_button: bool,
        claimed: bool,
        modal: Option<Modal>,
    },
}

/// Claim dialog contents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Modal {
    pub title: String,
    pub body: String,
    pub quantity: Tokens,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            title: format!("Claim {} tokens!", PRIZE_TOKENS),
            body: format!(
                "You won and can claim {} tokens to your wallet.",
                PRIZE_TOKENS
            ),
            quantity: PRIZE_TOKENS,
        }
    }
}

impl View {
    pub fn render(session: &Session, account: Option<&Address>, balance: Option<&Balance>) -> Self {
        match account {
            None => View::Disconnected,
            Some(address) => View::Connected {
                address: address.shorten(),
                balance: balance.and_then(Balance::display).map(String::from),
                screen: Screen::from(session),
            },
        }
    }
    pub fn screen(&self) -> Option<&Screen> {
        match self {
            View::Disconnected => None,
            View::Connected { screen, .. } => Some(screen),
        }
    }
}

impl From<&Session> for Screen {
    fn from(session: &Session) -> Self {
        match session.round() {
            None => Screen::Choosing {
                choices: Choice::all(),
            },
            Some(round) => Screen::Result {
                round: *round,
                claim_button: session.claimable(),
                claimed: session.prize_claimed(),
                modal: session.claim_modal_open().then(Modal::default),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::from("0x251015dbF61303060c8cDc0c4AA9bb8853629dD4")
    }

    #[test]
    fn disconnected_without_account() {
        let session = Session::default();
        assert_eq!(View::render(&session, None, None), View::Disconnected);
        assert_eq!(View::Disconnected.screen(), None);
    }

    #[test]
    fn choosing_before_first_round() {
        let session = Session::default();
        let ref balance = Balance::from(3);
        let view = View::render(&session, Some(&address()), Some(balance));
        assert_eq!(
            view,
            View::Connected {
                address: "0x2510...9dD4".into(),
                balance: Some("3".into()),
                screen: Screen::Choosing {
                    choices: Choice::all()
                },
            }
        );
    }

    #[test]
    fn loading_balance_is_absent() {
        let session = Session::default();
        let view = View::render(&session, Some(&address()), Some(&Balance::Loading));
        assert!(matches!(view, View::Connected { balance: None, .. }));
        let view = View::render(&session, Some(&address()), None);
        assert!(matches!(view, View::Connected { balance: None, .. }));
    }

    #[test]
    fn claim_flow_screens() {
        let mut controller = Controller::new(Forced(Choice::Scissors));
        controller.play(Choice::Rock);
        let screen = Screen::from(controller.session());
        assert!(matches!(
            screen,
            Screen::Result {
                claim_button: true,
                claimed: false,
                modal: None,
                ..
            }
        ));
        let ticket = controller.open_claim_modal().unwrap();
        let screen = Screen::from(controller.session());
        assert!(matches!(
            screen,
            Screen::Result {
                modal: Some(Modal { quantity: 10, .. }),
                ..
            }
        ));
        controller.confirm_claim(ticket);
        let screen = Screen::from(controller.session());
        assert!(matches!(
            screen,
            Screen::Result {
                claim_button: false,
                claimed: true,
                modal: None,
                ..
            }
        ));
    }

    #[test]
    fn losing_round_offers_no_claim() {
        let mut controller = Controller::new(Forced(Choice::Paper));
        controller.play(Choice::Rock);
        assert!(matches!(
            Screen::from(controller.session()),
            Screen::Result {
                claim_button: false,
                modal: None,
                ..
            }
        ));
    }

    #[test]
    fn serializes_for_frontends() {
        let mut controller = Controller::new(Forced(Choice::Rock));
        controller.play(Choice::Paper);
        let view = View::render(controller.session(), Some(&address()), None);
        let json = serde_json::to_value(&view).unwrap();
        let result = &json["Connected"]["screen"]["Result"];
        assert_eq!(result["round"]["player"], "Paper");
        assert_eq!(result["round"]["outcome"], "Win");
        assert_eq!(result["claim_button"], true);
        let back = serde_json::from_value::<View>(json).unwrap();
        assert_eq!(back, view);
    }
}
