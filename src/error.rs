use thiserror::Error;

/// The result of attempting an invalid operation on a
/// [`GameSession`](crate::state::GameSession).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("too few players to start a round")]
    TooFewPlayers,
    #[error("player names cannot be empty")]
    InvalidName,
    #[error("no player exists with the given id")]
    PlayerNotFound,
    #[error("this action cannot be performed during this phase of the game")]
    InvalidAction,
    #[error("the current player has not revealed their card yet")]
    RevealPending,
    #[error("submitted words cannot be empty")]
    EmptyWord,
    #[error("no round is currently in progress")]
    NoActiveRound,
}
