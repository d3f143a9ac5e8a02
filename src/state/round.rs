//! Per-round state: the pass order, the secret word(s) and the reveal
//! cursor driven while the device goes around the table.

use super::assign::Assignment;
use crate::error::GameError;
use crate::types::{Player, PlayerId, RoleCard};
use serde::Serialize;

/// The outcome of role assignment and word resolution for one round.
/// Read-only for the presentation layer; the only mutation after
/// creation is advancing the reveal cursor.
#[derive(Debug, Clone, Serialize)]
pub struct RoundState {
    /// The pass order for this round.
    pub ordered_players: Vec<Player>,
    pub impostor_ids: Vec<PlayerId>,
    pub secret_word: String,
    /// The impostors' decoy word in duel rounds.
    pub secret_word_alt: Option<String>,
    /// Who opens the discussion, as an index into `ordered_players`.
    pub starter_index: usize,
    pub current_reveal_index: usize,
    peeked: bool,
    pub started_at: String,
}

impl RoundState {
    pub(crate) fn new(
        assignment: Assignment,
        secret_word: String,
        secret_word_alt: Option<String>,
    ) -> Self {
        Self {
            ordered_players: assignment.ordered_players,
            impostor_ids: assignment.impostor_ids,
            secret_word,
            secret_word_alt,
            starter_index: assignment.starter_index,
            current_reveal_index: 0,
            peeked: false,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The player currently holding the device.
    pub fn current_player(&self) -> &Player {
        &self.ordered_players[self.current_reveal_index]
    }

    /// The player who opens the discussion.
    pub fn starter(&self) -> &Player {
        &self.ordered_players[self.starter_index]
    }

    /// Whether the current player has flipped their card.
    pub fn has_peeked(&self) -> bool {
        self.peeked
    }

    /// Flip the current player's card. Idempotent: flipping again shows
    /// the same card.
    pub(crate) fn peek(&mut self) -> RoleCard {
        self.peeked = true;
        let player = &self.ordered_players[self.current_reveal_index];
        if player.is_impostor {
            RoleCard::Impostor {
                decoy: self.secret_word_alt.clone(),
            }
        } else {
            RoleCard::Civilian {
                word: self.secret_word.clone(),
            }
        }
    }

    /// Move the device to the next player. Rejected until the current
    /// player has peeked. Returns `true` once every player has seen
    /// their card.
    pub(crate) fn advance(&mut self) -> Result<bool, GameError> {
        if !self.peeked {
            return Err(GameError::RevealPending);
        }
        if self.current_reveal_index + 1 < self.ordered_players.len() {
            self.current_reveal_index += 1;
            self.peeked = false;
            Ok(false)
        } else {
            Ok(true)
        }
    }
}
