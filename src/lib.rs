//! clipmemo - a clipboard snippet manager.
//!
//! Short labeled snippets are kept in an ordered list, persisted to a single
//! key in local storage after every change, and copied to the system
//! clipboard from the command line or the interactive list.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod storage;
pub mod store;
pub mod ui;

// Re-export
pub use app::App;
pub use cli::{handle_command, run_command, Clipmemo, Commands};
pub use clipboard::{ClipboardWriter, MemoryClipboard, SystemClipboard};
pub use config::{get_config_dir, STORAGE_KEY};
pub use error::{ClipmemoError, Result};
pub use models::{Snippet, SnippetId};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::SnippetStore;
pub use ui::display_snippet_manager;
