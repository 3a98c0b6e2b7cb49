pub mod chat;
pub mod logs;
pub mod shared;

pub use chat::{ChatController, ChatPane, ChatView, use_chat};
pub use logs::LogsView;
pub use shared::{PaneScroller, ScrollerHandle};
