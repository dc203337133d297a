use super::command::Command;
use crate::*;
use colored::*;
use dialoguer::Select;

/// Interactive terminal front end.
///
/// Renders the arcade's [`View`] after every action and offers the
/// commands that view allows.
pub struct Console<W, S>(Arcade<W, S>);

impl<W, S> Console<W, S>
where
    W: Wallet,
    S: Source,
{
    pub fn new(arcade: Arcade<W, S>) -> Self {
        Self(arcade)
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            let view = self.0.view().await;
            Self::draw(&view);
            let options = Command::options(&view);
            let labels = options.iter().map(Command::label).collect::<Vec<_>>();
            let selection = Select::new()
                .with_prompt("Mini game")
                .report(false)
                .items(labels.as_slice())
                .default(0)
                .interact()?;
            match options[selection] {
                Command::Quit => break,
                command => self.handle(command).await,
            }
        }
        log::info!("[console] goodbye");
        Ok(())
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::Connect => match self.0.connect().await {
                Ok(_) => {}
                Err(e) => println!("{}", format!("connect failed: {}", e).red()),
            },
            Command::Play(choice) => {
                self.0.play(choice);
            }
            Command::TryAgain => self.0.reset(),
            Command::OpenClaim => {
                self.0.open_claim_modal();
            }
            Command::SubmitClaim => match self.0.claim().await {
                Ok(receipt) => println!("{}", format!("Prize claimed! {}", receipt).green()),
                Err(e) => println!("{}", format!("claim failed: {}", e).red()),
            },
            Command::CloseClaim => self.0.close_claim_modal(),
            Command::Logout => self.0.disconnect().await,
            Command::Quit => {}
        }
    }

    fn draw(view: &View) {
        println!();
        match view {
            View::Disconnected => println!("{}", "Connect a wallet to play".dimmed()),
            View::Connected {
                address,
                balance,
                screen,
            } => {
                println!(
                    "{}  Balance: {}",
                    address.dimmed(),
                    balance.as_deref().unwrap_or("...")
                );
                Self::draw_screen(screen);
            }
        }
    }

    fn draw_screen(screen: &Screen) {
        match screen {
            Screen::Choosing { .. } => println!("{}", "Choose your option".bold()),
            Screen::Result {
                round,
                claimed,
                modal,
                ..
            } => {
                println!("You chose: {}", round.player());
                println!("Computer chose: {}", round.computer());
                println!(
                    "{}",
                    match round.outcome() {
                        Outcome::Win => "You win!".green().bold(),
                        Outcome::Lose => "You lose.".red().bold(),
                        Outcome::Tie => "It's a tie.".yellow().bold(),
                    }
                );
                if *claimed {
                    println!("{}", "Prize claimed".green());
                }
                if let Some(modal) = modal {
                    println!();
                    println!("{}", modal.title.bold());
                    println!("{}", modal.body);
                }
            }
        }
    }
}
