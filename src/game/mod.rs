//! Game rounds
//!
//! [`GameSession`] holds the state of a round; [`Game`] starts rounds and
//! runs submitted words through the validation pipeline.

mod engine;
mod error;
mod session;
pub mod validation;

pub use engine::Game;
pub use error::GameError;
pub use session::{GameSession, Outcome};
