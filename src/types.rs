use serde::{Deserialize, Serialize};

/// Opaque ID type for type safety
pub type PlayerId = String;

/// A round may not start with fewer players than this.
pub const MIN_PLAYERS: usize = 3;

/// Upper bound on the impostor count for a roster of the given size.
/// At least one impostor is always allowed, even for degenerate rosters.
pub fn max_impostors(player_count: usize) -> usize {
    std::cmp::max(1, player_count / 2)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_impostor: bool,
}

impl Player {
    /// Create a player with a fresh session-unique id.
    /// Role flags are owned by role assignment, never set here.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name: name.to_string(),
            is_impostor: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Famous,
    Animals,
    Food,
    Movies,
    Cities,
    Objects,
    Jobs,
    Sports,
    Clothing,
    Countries,
    Brands,
    Cartoons,
    Instruments,
    Songs,
}

impl Category {
    /// English topic descriptor used when prompting the word generator.
    pub fn topic(self) -> &'static str {
        match self {
            Category::Famous => "famous people, real or fictional",
            Category::Animals => "animals",
            Category::Food => "food and dishes",
            Category::Movies => "movies",
            Category::Cities => "cities of the world",
            Category::Objects => "everyday objects",
            Category::Jobs => "jobs and professions",
            Category::Sports => "sports",
            Category::Clothing => "clothing and accessories",
            Category::Countries => "countries",
            Category::Brands => "well-known brands",
            Category::Cartoons => "cartoon characters",
            Category::Instruments => "musical instruments",
            Category::Songs => "popular songs",
        }
    }
}

/// How the secret for a round is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    /// A single generated/bank word from the given category.
    Word(Category),
    /// Two related-but-different words; impostors receive the second one.
    Duel(Category),
    /// A random player's own name becomes the secret.
    PlayerHunt,
    /// Every player writes a word, one is chosen at random.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Setup,
    ModeSelect,
    CustomInput,
    Resolving,
    Distribute,
    Playing,
    Reveal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub impostor_count: usize,
    pub language: Language,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            impostor_count: 1,
            language: Language::Es,
        }
    }
}

/// Two related secret words for duel-style rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPair {
    pub word_a: String,
    pub word_b: String,
}

/// What the current player sees when they flip their card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleCard {
    /// Knows the secret word and must find the impostors.
    Civilian { word: String },
    /// Gets no word, except the decoy word in duel rounds.
    Impostor { decoy: Option<String> },
}
