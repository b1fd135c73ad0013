//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Field, run_tui};
