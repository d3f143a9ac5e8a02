mod assign;
mod roster;
mod round;

pub use assign::{assign_roles, Assignment, RoundHistory};
pub use round::RoundState;

use crate::error::GameError;
use crate::rng::SecureRandom;
use crate::types::*;
use crate::words::WordSource;

/// The single shared-device game controller.
///
/// Owns the roster, the round lifecycle, the repeat history and the
/// session-scoped used-word log. Everything is mutated synchronously
/// between user-triggered events; the only suspension point is the
/// word fetch inside [`start_round`](GameSession::start_round).
pub struct GameSession {
    players: Vec<Player>,
    config: GameConfig,
    phase: GamePhase,
    history: RoundHistory,
    /// Append-only within a session so consecutive rounds avoid
    /// repeating recent words.
    used_words: Vec<String>,
    round: Option<RoundState>,
    /// Roles assigned for a custom round still waiting on word input.
    pending_assignment: Option<Assignment>,
    custom_words: Vec<String>,
    rng: SecureRandom,
    words: WordSource,
}

impl GameSession {
    pub fn new(words: WordSource) -> Self {
        Self {
            players: Vec::new(),
            config: GameConfig::default(),
            phase: GamePhase::Setup,
            history: RoundHistory::default(),
            used_words: Vec::new(),
            round: None,
            pending_assignment: None,
            custom_words: Vec::new(),
            rng: SecureRandom::new(),
            words,
        }
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn set_language(&mut self, language: Language) {
        self.config.language = language;
    }

    /// Check if a phase transition is valid
    fn is_valid_phase_transition(from: &GamePhase, to: &GamePhase) -> bool {
        use GamePhase::*;

        match (from, to) {
            // Normal forward flow
            (Setup, ModeSelect) => true,
            (ModeSelect, Resolving) => true,
            (ModeSelect, CustomInput) => true,
            (Resolving, Distribute) => true,
            (CustomInput, Distribute) => true,
            (Distribute, Playing) => true,
            (Playing, Reveal) => true,

            // Any phase can return to setup (reset / abandoned round)
            (_, Setup) => true,

            // All other transitions are invalid
            _ => false,
        }
    }

    fn transition(&mut self, to: GamePhase) -> Result<(), GameError> {
        if !Self::is_valid_phase_transition(&self.phase, &to) {
            return Err(GameError::InvalidAction);
        }
        tracing::debug!(from = ?self.phase, to = ?to, "phase transition");
        self.phase = to;
        Ok(())
    }

    /// Leave setup once the roster is big enough. Clamps the impostor
    /// count so mode selection always sees a consistent value.
    pub fn begin_mode_select(&mut self) -> Result<(), GameError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers);
        }
        self.clamp_impostor_count();
        self.transition(GamePhase::ModeSelect)
    }

    /// Assign roles and resolve the secret word for the chosen mode.
    ///
    /// Custom mode parks the assignment and collects one word per
    /// player first; every other mode resolves the word (racing the
    /// configured generator against its timeout) and moves straight to
    /// distribution. A failing or absent generator is not an error.
    pub async fn start_round(&mut self, mode: GameMode) -> Result<(), GameError> {
        if self.phase != GamePhase::ModeSelect {
            return Err(GameError::InvalidAction);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers);
        }
        // Guard against a stale count from a previously larger roster.
        self.clamp_impostor_count();

        let assignment = assign_roles(
            &self.players,
            self.config.impostor_count,
            &mut self.history,
            &mut self.rng,
        );

        match mode {
            GameMode::Custom => {
                self.pending_assignment = Some(assignment);
                self.custom_words.clear();
                self.transition(GamePhase::CustomInput)
            }
            GameMode::Word(category) => {
                self.transition(GamePhase::Resolving)?;
                let word = self
                    .words
                    .fetch_word(category, self.config.language, &self.used_words)
                    .await;
                self.used_words.push(word.clone());
                self.finish_round_setup(assignment, word, None)
            }
            GameMode::Duel(category) => {
                self.transition(GamePhase::Resolving)?;
                let pair = self
                    .words
                    .fetch_pair(category, self.config.language, &self.used_words)
                    .await;
                self.used_words.push(pair.word_a.clone());
                self.used_words.push(pair.word_b.clone());
                self.finish_round_setup(assignment, pair.word_a, Some(pair.word_b))
            }
            GameMode::PlayerHunt => {
                let name = self
                    .rng
                    .pick(&assignment.ordered_players)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                self.transition(GamePhase::Resolving)?;
                self.finish_round_setup(assignment, name, None)
            }
        }
    }

    fn finish_round_setup(
        &mut self,
        assignment: Assignment,
        secret_word: String,
        secret_word_alt: Option<String>,
    ) -> Result<(), GameError> {
        // Mirror the role flags onto the setup roster so reads stay
        // consistent whichever list the caller looks at.
        for player in &mut self.players {
            player.is_impostor = assignment.impostor_ids.contains(&player.id);
        }
        self.round = Some(RoundState::new(assignment, secret_word, secret_word_alt));
        self.transition(GamePhase::Distribute)
    }

    /// The player whose turn it is to type a word during custom input.
    pub fn custom_turn(&self) -> Option<&Player> {
        if self.phase != GamePhase::CustomInput {
            return None;
        }
        self.pending_assignment
            .as_ref()
            .and_then(|a| a.ordered_players.get(self.custom_words.len()))
    }

    /// Collect one custom word per player in pass order. Once the last
    /// player has submitted, one entry is chosen at random and the
    /// round moves to distribution.
    pub fn submit_custom_word(&mut self, word: &str) -> Result<(), GameError> {
        if self.phase != GamePhase::CustomInput {
            return Err(GameError::InvalidAction);
        }
        let word = word.trim();
        if word.is_empty() {
            return Err(GameError::EmptyWord);
        }
        self.custom_words.push(word.to_string());

        if self.custom_words.len() >= self.players.len() {
            let secret = self
                .rng
                .pick(&self.custom_words)
                .cloned()
                .unwrap_or_default();
            self.used_words.push(secret.clone());
            self.custom_words.clear();
            let assignment = self
                .pending_assignment
                .take()
                .ok_or(GameError::NoActiveRound)?;
            self.finish_round_setup(assignment, secret, None)?;
        }
        Ok(())
    }

    /// Reveal the current player's role card during distribution.
    pub fn peek_current(&mut self) -> Result<RoleCard, GameError> {
        if self.phase != GamePhase::Distribute {
            return Err(GameError::InvalidAction);
        }
        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        Ok(round.peek())
    }

    /// Pass the device to the next player. Rejected until the current
    /// player has peeked; the last advance opens the discussion.
    pub fn advance_reveal(&mut self) -> Result<&GamePhase, GameError> {
        if self.phase != GamePhase::Distribute {
            return Err(GameError::InvalidAction);
        }
        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        if round.advance()? {
            self.transition(GamePhase::Playing)?;
        }
        Ok(&self.phase)
    }

    /// End the discussion and show every role.
    pub fn begin_reveal(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::InvalidAction);
        }
        self.transition(GamePhase::Reveal)
    }

    /// Back to setup for another round. The repeat history and the
    /// used-word log survive; role flags and round state do not.
    pub fn reset_round(&mut self) {
        self.round = None;
        self.pending_assignment = None;
        self.custom_words.clear();
        for player in &mut self.players {
            player.is_impostor = false;
        }
        self.phase = GamePhase::Setup;
    }

    /// Start an entirely fresh session: also clears the repeat history
    /// and the used-word log. The roster is kept.
    pub fn reset_session(&mut self) {
        self.reset_round();
        self.history = RoundHistory::default();
        self.used_words.clear();
    }
}
