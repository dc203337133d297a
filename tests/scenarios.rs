use minigame::*;

#[test]
fn every_pair_is_decided() {
    let wins = [
        (Choice::Rock, Choice::Scissors),
        (Choice::Paper, Choice::Rock),
        (Choice::Scissors, Choice::Paper),
    ];
    for player in Choice::all() {
        for computer in Choice::all() {
            let expected = if player == computer {
                Outcome::Tie
            } else if wins.contains(&(player, computer)) {
                Outcome::Win
            } else {
                Outcome::Lose
            };
            assert_eq!(Outcome::determine(player, computer), expected);
        }
    }
}

#[test]
fn won_round_is_claimed_then_reset() {
    let mut controller = Controller::new(Forced(Choice::Scissors));
    let round = controller.play(Choice::Rock);
    assert_eq!(round.outcome(), Outcome::Win);
    assert!(controller.session().prize_eligible());
    let ticket = controller.open_claim_modal().expect("won round is claimable");
    assert!(controller.session().claim_modal_open());
    assert!(controller.confirm_claim(ticket));
    assert!(controller.session().prize_claimed());
    assert!(!controller.session().claim_modal_open());
    controller.reset();
    assert_eq!(*controller.session(), Session::default());
}

#[test]
fn tied_round_cannot_open_claim() {
    let mut controller = Controller::new(Forced(Choice::Rock));
    let round = controller.play(Choice::Rock);
    assert_eq!(round.outcome(), Outcome::Tie);
    assert!(!controller.session().prize_eligible());
    assert!(controller.open_claim_modal().is_none());
    assert!(!controller.session().claim_modal_open());
}

#[test]
fn late_confirmation_after_reset_is_ignored() {
    let mut controller = Controller::new(Forced(Choice::Paper));
    controller.play(Choice::Scissors);
    let ticket = controller.open_claim_modal().unwrap();
    controller.reset();
    assert!(!controller.confirm_claim(ticket));
    assert!(!controller.session().prize_claimed());
}

#[test]
fn invariants_hold_over_random_play() {
    let mut controller = Controller::new(Seeded::new(2024));
    let mut tickets = Vec::new();
    for step in 0..512u32 {
        match step % 7 {
            0 | 3 => {
                controller.play(Choice::try_from((step % 3) as u8).unwrap());
            }
            1 | 4 => tickets.extend(controller.open_claim_modal()),
            2 => {
                if let Some(ticket) = tickets.pop() {
                    controller.confirm_claim(ticket);
                }
            }
            5 => controller.close_claim_modal(),
            _ => controller.reset(),
        }
        let session = controller.session();
        assert!(session.consistent(), "step {}: {:?}", step, session);
    }
}

#[tokio::test]
async fn sandbox_game_end_to_end() {
    let mut arcade = Arcade::new(Sandbox::default().with_balance(1), Forced(Choice::Rock));
    assert_eq!(arcade.view().await, View::Disconnected);
    let address = arcade.connect().await.unwrap();
    arcade.play(Choice::Paper);
    assert!(arcade.open_claim_modal());
    arcade.claim().await.unwrap();
    assert_eq!(arcade.wallet().tokens(&address), 1 + PRIZE_TOKENS);
    match arcade.view().await {
        View::Connected {
            balance, screen, ..
        } => {
            assert_eq!(balance.as_deref(), Some("11"));
            assert!(matches!(screen, Screen::Result { claimed: true, .. }));
        }
        View::Disconnected => panic!("still connected"),
    }
    arcade.reset();
    assert_eq!(arcade.session().phase(), Phase::Idle);
}
