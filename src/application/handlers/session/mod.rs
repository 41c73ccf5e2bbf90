//! Session handlers - worksheet session lifecycle.

mod create_session;
mod end_session;

pub use create_session::{CreateSessionHandler, CreateSessionResult};
pub use end_session::EndSessionHandler;
