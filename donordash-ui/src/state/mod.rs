//! State Management
//!
//! Session state shared across the component tree.

pub mod session;

pub use session::{provide_session, use_session, Session};
