//! Roster management during setup.
//!
//! The roster belongs to the setup screen: players can only be added or
//! removed between rounds, and the impostor count is clamped eagerly so
//! it can never be inconsistent when a round starts.

use super::GameSession;
use crate::error::GameError;
use crate::types::{max_impostors, GamePhase, Player, PlayerId};

impl GameSession {
    /// Add a player to the roster. Names are trimmed and must be
    /// non-empty; ids are generated fresh and unique for the session.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::InvalidAction);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidName);
        }
        let player = Player::new(name);
        let id = player.id.clone();
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player between rounds, clamping the impostor count down
    /// immediately if the smaller roster no longer supports it.
    pub fn remove_player(&mut self, id: &str) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::InvalidAction);
        }
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(GameError::PlayerNotFound)?;
        self.players.remove(index);
        self.clamp_impostor_count();
        Ok(())
    }

    /// Request an impostor count; returns the value actually applied
    /// after clamping to `1..=max_impostors(roster size)`.
    pub fn set_impostor_count(&mut self, count: usize) -> usize {
        self.config.impostor_count = count;
        self.clamp_impostor_count();
        self.config.impostor_count
    }

    pub(super) fn clamp_impostor_count(&mut self) {
        let max = max_impostors(self.players.len());
        self.config.impostor_count = self.config.impostor_count.clamp(1, max);
    }
}
