//! Interactive session loop.
//!
//! A session prompts for a bankroll, then plays rounds against a [`Table`]
//! until the player runs out of money or declines to continue. Input and
//! output are generic so a session can be scripted.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::deck::Deck;
use crate::error::{ParseDecisionError, SessionError};
use crate::options::TableOptions;
use crate::pot::Pot;
use crate::result::{RoundOutcome, RoundResult};
use crate::table::{RoundState, Table};

const RULE: &str = "---------------------";

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl FromStr for Decision {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("h") {
            Ok(Self::Hit)
        } else if trimmed.eq_ignore_ascii_case("s") {
            Ok(Self::Stand)
        } else {
            Err(ParseDecisionError(trimmed.to_string()))
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The bankroll reached zero.
    OutOfMoney,
    /// The player chose not to continue (or input ended).
    Declined,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    /// Number of rounds settled.
    pub rounds_played: usize,
    /// Bankroll when the session ended.
    pub final_bankroll: f64,
    /// Why the session ended.
    pub reason: StopReason,
}

/// A player's sitting at the table.
pub struct Session<R, W> {
    input: R,
    output: W,
    options: TableOptions,
    seed: u64,
    bankroll: Option<f64>,
    deck: Option<Deck>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading commands from `input` and writing the
    /// transcript to `output`.
    pub fn new(input: R, output: W, options: TableOptions, seed: u64) -> Self {
        Self {
            input,
            output,
            options,
            seed,
            bankroll: None,
            deck: None,
        }
    }

    /// Uses `bankroll` instead of prompting for one.
    ///
    /// An invalid amount is reported and the player is prompted instead.
    #[must_use]
    pub fn with_bankroll(mut self, bankroll: f64) -> Self {
        self.bankroll = Some(bankroll);
        self
    }

    /// Starts from `deck` instead of a freshly shuffled one.
    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Plays rounds until the player is out of money or stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written, or the
    /// table hits an invariant violation such as an empty deck mid-round.
    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        self.options.validate()?;
        let pays = self.options.blackjack_pays;
        writeln!(
            self.output,
            "Welcome to the blackjack table! Naturals pay {pays} times your bet, \
             so for every 10 you bet you win {} for being dealt a blackjack.",
            pays * 10.0
        )?;
        writeln!(
            self.output,
            "The deck is refilled and reshuffled once it runs below {} cards.",
            self.options.refill_below
        )?;
        writeln!(self.output, "Opening a new deck of cards ...")?;

        let Some(pot) = self.read_bankroll()? else {
            return Ok(SessionSummary {
                rounds_played: 0,
                final_bankroll: 0.0,
                reason: StopReason::Declined,
            });
        };

        let mut table = Table::new(self.options.clone(), pot, self.seed)?;
        if let Some(deck) = self.deck.take() {
            table.replace_deck(deck)?;
        }

        let mut rounds_played = 0;
        let reason = 'session: loop {
            if table.pot().is_broke() {
                writeln!(self.output, "You've run out of money!")?;
                break StopReason::OutOfMoney;
            }

            writeln!(self.output, "=====================")?;
            writeln!(self.output, "New round ...")?;
            writeln!(self.output, "{RULE}")?;

            if let Some(left) = table.check_and_refill()? {
                writeln!(
                    self.output,
                    "Re-filling and re-shuffling the deck, there are only {left} cards left"
                )?;
            }

            if !self.read_bet(&mut table)? {
                break StopReason::Declined;
            }

            writeln!(self.output, "Dealing cards ...")?;
            table.deal()?;
            writeln!(self.output, "Your hand: {}", table.player_hand())?;
            if let Some(card) = table.dealer_visible_card() {
                writeln!(self.output, "The dealer has {card}")?;
            }

            while table.state() == RoundState::PlayerTurn {
                let Some(decision) = self.read_decision()? else {
                    table.clear_round();
                    break 'session StopReason::Declined;
                };

                match decision {
                    Decision::Hit => {
                        let card = table.hit()?;
                        writeln!(self.output, "Card drawn is {card}")?;
                        writeln!(self.output, "Your hand: {}", table.player_hand())?;
                    }
                    Decision::Stand => {
                        table.stand()?;
                        writeln!(
                            self.output,
                            "You chose to stand. It's the dealer's turn now ..."
                        )?;
                        writeln!(self.output, "{RULE}")?;
                    }
                }
            }

            if table.state() == RoundState::DealerTurn {
                writeln!(self.output, "Dealer's hand: {}", table.dealer_hand())?;
                for card in table.dealer_play()? {
                    writeln!(self.output, "Dealer draws {card}")?;
                }
                writeln!(self.output, "Dealer's hand: {}", table.dealer_hand())?;
            } else if matches!(
                table.outcome(),
                Some(RoundOutcome::Natural | RoundOutcome::NaturalPush)
            ) {
                writeln!(self.output, "You were dealt a blackjack!")?;
                writeln!(self.output, "Let's see what the dealer has ...")?;
                writeln!(self.output, "Dealer's hand: {}", table.dealer_hand())?;
            }

            let result = table.settle()?;
            rounds_played += 1;
            writeln!(self.output, "{}", describe(&result))?;
            writeln!(self.output, "{}", table.pot())?;
            table.clear_round();

            match self.prompt("Press Y to play again, or any other key to stop ")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {}
                _ => break StopReason::Declined,
            }
        };

        let final_bankroll = table.pot().bankroll();
        if reason == StopReason::Declined {
            writeln!(self.output, "You walked away with a pot of {final_bankroll}")?;
        }
        self.output.flush()?;

        info!(rounds_played, final_bankroll, ?reason, "session ended");

        Ok(SessionSummary {
            rounds_played,
            final_bankroll,
            reason,
        })
    }

    /// Writes `text` and reads one trimmed line. Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until a number is entered. Returns `None` at end of input.
    fn read_amount(&mut self, text: &str) -> Result<Option<f64>, SessionError> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.parse::<f64>() {
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => writeln!(self.output, "Try again - the amount must be a number")?,
            }
        }
    }

    fn read_bankroll(&mut self) -> Result<Option<Pot>, SessionError> {
        if let Some(bankroll) = self.bankroll.take() {
            match Pot::new(bankroll) {
                Ok(pot) => return Ok(Some(pot)),
                Err(err) => writeln!(self.output, "Invalid starting pot: {err}")?,
            }
        }

        loop {
            let Some(amount) = self.read_amount("What's your total pot of money? ")? else {
                return Ok(None);
            };
            match Pot::new(amount) {
                Ok(pot) => return Ok(Some(pot)),
                Err(err) => writeln!(self.output, "Try again - {err}")?,
            }
        }
    }

    /// Prompts until the table accepts a wager. Returns `false` at end of
    /// input.
    fn read_bet(&mut self, table: &mut Table) -> Result<bool, SessionError> {
        loop {
            let Some(amount) = self.read_amount("How much would you like to bet? ")? else {
                return Ok(false);
            };
            match table.bet(amount) {
                Ok(()) => {
                    debug!(amount, "wager accepted");
                    return Ok(true);
                }
                Err(err) => writeln!(self.output, "Try again - {err}")?,
            }
        }
    }

    fn read_decision(&mut self) -> Result<Option<Decision>, SessionError> {
        loop {
            let Some(line) = self.prompt("Enter 'H' to hit or 'S' to stand: ")? else {
                return Ok(None);
            };
            match line.parse::<Decision>() {
                Ok(decision) => return Ok(Some(decision)),
                Err(_) => writeln!(self.output, "Command not recognised, try again")?,
            }
        }
    }
}

fn describe(result: &RoundResult) -> String {
    let player = result.player_total;
    let dealer = result.dealer_total;
    let outcome = result.outcome;
    match outcome {
        RoundOutcome::Win => format!("You win by {player} to {dealer}"),
        RoundOutcome::Lose => format!("Dealer wins by {dealer} to {player}"),
        RoundOutcome::Push => format!("Tied game! You both have {player}!"),
        _ if outcome.is_win() => format!("{outcome}! You win {}!", result.net),
        _ if outcome.is_push() => format!("{outcome}! Your bet of {} is returned", result.wager),
        _ => format!("{outcome}! You lose {}!", result.wager),
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "payouts are exact in binary")]

    use std::io::Cursor;

    use super::*;
    use crate::card::{Card, Rank, Suit};

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Diamonds, rank)
    }

    fn play(script: &str, draws: &[Card]) -> (SessionSummary, String) {
        let options = TableOptions::default().with_refill_below(0);
        let mut output = Vec::new();
        let summary = Session::new(Cursor::new(script), &mut output, options, 1)
            .with_deck(Deck::stacked(draws))
            .run()
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_decisions_case_insensitively() {
        assert_eq!("h".parse::<Decision>(), Ok(Decision::Hit));
        assert_eq!(" S \n".parse::<Decision>(), Ok(Decision::Stand));
        assert!("hit me".parse::<Decision>().is_err());
    }

    #[test]
    fn stand_and_beat_dealer() {
        let draws = [
            card(Rank::Ten),   // player
            card(Rank::Nine),  // player
            card(Rank::Ten),   // dealer hidden
            card(Rank::Eight), // dealer shown
        ];
        let (summary, transcript) = play("100\n20\ns\nn\n", &draws);

        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.final_bankroll, 120.0);
        assert_eq!(summary.reason, StopReason::Declined);
        assert!(transcript.contains("The dealer has 8 of Diamonds"));
        assert!(transcript.contains("You win by 19 to 18"));
        assert!(transcript.contains("You walked away with a pot of 120"));
    }

    #[test]
    fn reprompts_on_bad_input() {
        let draws = [
            card(Rank::Ten),
            card(Rank::Seven),
            card(Rank::Ten),
            card(Rank::Seven),
        ];
        let script = "lots\n-3\n100\nten\n500\n20\nx\nS\nno\n";
        let (summary, transcript) = play(script, &draws);

        assert_eq!(summary.final_bankroll, 100.0);
        assert_eq!(
            transcript.matches("Try again - the amount must be a number").count(),
            2
        );
        assert!(transcript.contains("Try again - bankroll must be greater than zero"));
        assert!(transcript.contains("insufficient funds, only 100 available"));
        assert!(transcript.contains("Command not recognised, try again"));
        assert!(transcript.contains("Tied game! You both have 17!"));
    }

    #[test]
    fn busting_the_whole_pot_ends_session() {
        let draws = [
            card(Rank::Ten),
            card(Rank::Six),
            card(Rank::Nine),
            card(Rank::Eight),
            card(Rank::King), // player hit
        ];
        let (summary, transcript) = play("50\n50\nh\ny\n", &draws);

        assert_eq!(summary.reason, StopReason::OutOfMoney);
        assert_eq!(summary.final_bankroll, 0.0);
        assert!(transcript.contains("You went bust! You lose 50!"));
        assert!(transcript.contains("Press Y to play again"));
        assert!(transcript.contains("You've run out of money!"));
    }

    #[test]
    fn plays_another_round_on_yes() {
        let draws = [
            card(Rank::Ace),
            card(Rank::King),
            card(Rank::Five),
            card(Rank::Six),
            card(Rank::Ten),
            card(Rank::Nine),
            card(Rank::Ten),
            card(Rank::Ten),
        ];
        let (summary, transcript) = play("100\n10\ny\n10\ns\nn\n", &draws);

        // Natural pays 15, then a 19 against 20 loses 10.
        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.final_bankroll, 105.0);
        assert!(transcript.contains("You were dealt a blackjack!\nLet's see what the dealer has"));
        assert!(transcript.contains("You win 15!"));
        assert!(transcript.contains("Dealer wins by 20 to 19"));
    }

    #[test]
    fn preset_bankroll_skips_prompt() {
        let draws = [
            card(Rank::Ten),
            card(Rank::Nine),
            card(Rank::Ten),
            card(Rank::Seven),
        ];
        let mut output = Vec::new();
        let summary = Session::new(
            Cursor::new("10\ns\n"),
            &mut output,
            TableOptions::default().with_refill_below(0),
            1,
        )
        .with_bankroll(40.0)
        .with_deck(Deck::stacked(&draws))
        .run()
        .unwrap();

        assert_eq!(summary.final_bankroll, 50.0);
        let transcript = String::from_utf8(output).unwrap();
        assert!(!transcript.contains("What's your total pot"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let (summary, _) = play("", &[]);
        assert_eq!(summary.rounds_played, 0);
        assert_eq!(summary.reason, StopReason::Declined);
    }

    #[test]
    fn refills_low_deck_before_round() {
        let draws = [card(Rank::Two); 3];
        let mut output = Vec::new();
        let summary = Session::new(Cursor::new("100\n"), &mut output, TableOptions::default(), 5)
            .with_deck(Deck::stacked(&draws))
            .run()
            .unwrap();

        assert_eq!(summary.rounds_played, 0);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("there are only 3 cards left"));
    }

    #[test]
    fn broke_player_can_still_walk_away() {
        let draws = [
            card(Rank::Ten),
            card(Rank::Seven),
            card(Rank::Ten),
            card(Rank::Nine),
        ];
        let (summary, transcript) = play("30\n30\ns\nn\n", &draws);

        assert_eq!(summary.reason, StopReason::Declined);
        assert_eq!(summary.final_bankroll, 0.0);
        assert!(transcript.contains("Dealer wins by 19 to 17"));
        assert!(transcript.contains("You walked away with a pot of 0"));
    }

    #[test]
    fn natural_against_natural_announces_both() {
        let draws = [
            card(Rank::Ace),
            card(Rank::Queen),
            card(Rank::King),
            card(Rank::Ace),
        ];
        let (summary, transcript) = play("100\n10\nn\n", &draws);

        assert_eq!(summary.final_bankroll, 100.0);
        assert!(transcript.contains("You were dealt a blackjack!"));
        assert!(transcript.contains("Dealer also has blackjack! It's a draw! Your bet of 10 is returned"));
    }

    #[test]
    fn welcome_quotes_configured_payout() {
        let mut output = Vec::new();
        let options = TableOptions::default().with_blackjack_pays(2.0);
        Session::new(Cursor::new(""), &mut output, options, 1)
            .run()
            .unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Naturals pay 2 times your bet"));
        assert!(transcript.contains("you win 20 for being dealt a blackjack"));
    }

    #[test]
    fn unusable_payout_stops_before_play() {
        for ratio in [f64::NAN, -1.5] {
            let mut output = Vec::new();
            let options = TableOptions::default().with_blackjack_pays(ratio);
            let err = Session::new(Cursor::new("100\n10\n"), &mut output, options, 1)
                .run()
                .unwrap_err();
            assert!(matches!(err, SessionError::Options(_)), "{ratio} accepted");
            assert!(output.is_empty());
        }
    }
}
