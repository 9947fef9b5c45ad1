//! Interactive terminal UI

mod app;
mod rendering;

pub use app::{App, Flash, INSUFFICIENT_FLASH, INVALID_FLASH, Message, MessageStyle, Overlay, run_tui};
