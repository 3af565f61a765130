//! Interactive terminal front end.
//!
//! - [`model`]: the selection cursor over the file table
//! - [`render`]: drawing the table and modal notifications
//! - [`input`]: mapping key presses to commands
//! - [`session`]: the event loop tying them to the extractor
//! - [`terminal`]: raw mode and alternate screen setup

pub mod input;
pub mod model;
pub mod notification;
pub mod render;
pub mod session;
pub mod terminal;

pub use input::{Command, InputEvent, InputSource, TerminalInput};
pub use model::{Direction, SelectionChange, TableModel};
pub use notification::{Notification, NotificationKind};
pub use render::{Layout, Renderer, humanized_size};
pub use session::{LoopState, Session};
pub use terminal::TerminalGuard;
