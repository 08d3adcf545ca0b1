pub mod chat;
pub mod conversations;
pub mod error;
pub mod state;

pub use state::AppState;
