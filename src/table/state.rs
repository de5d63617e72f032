//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// Between rounds; the deck may be refilled.
    #[default]
    Idle,
    /// A wager has been staked and cards can be dealt.
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// The outcome is decided and the round can be settled.
    RoundOver,
}
