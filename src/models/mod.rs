//! UI-independent state behind the two views.
//!
//! Each view model is a plain struct with synchronous transitions so the
//! components only have to own it in a `Signal`, spawn the request, and hand
//! the outcome back.

pub mod chat;
pub mod logs;

pub use chat::{BACKEND_UNREACHABLE, ChatSession, NO_RESPONSE};
pub use logs::{FilterError, LOADING_PLACEHOLDER, LOGS_UNAVAILABLE, LogConsole, Navigator};
