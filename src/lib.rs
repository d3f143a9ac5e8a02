// Core logic for a pass-the-phone social deduction word game.
// The presentation layer (screens, card gestures, animations) lives
// elsewhere and drives this crate through `state::GameSession`.

pub mod error;
pub mod rng;
pub mod state;
pub mod types;
pub mod words;
