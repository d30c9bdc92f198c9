use state::SessionState;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::Dialogue};

pub mod commands;
pub mod config;
pub mod gemini;
pub mod generator;
pub mod keyboard;
pub mod prompts;
pub mod quiz;
pub mod runner;
pub mod schema;
pub mod state;

type UserDialogue = Dialogue<SessionState, InMemStorage<SessionState>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;
