// ============================================================================
// Console - Line-oriented front end for one ordering session
// ============================================================================

mod command;
mod session;
pub mod view;

pub use session::Session;
