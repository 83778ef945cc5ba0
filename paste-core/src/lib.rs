//! Paste Core - Rust business logic for the Paste emoji search app
//!
//! Owns the recent emoji list and its persistence, the emoji matcher, the search
//! screen session and the options menu. The Swift app only renders and presents.
//!
//! Types are exported via UniFFI proc-macros (#[derive(uniffi::Record/Enum/Object)]).

pub mod catalog;
pub mod database;
pub mod interface;
pub mod matcher;
pub mod options;
pub mod preferences;
pub mod ranking;
pub mod recents;
pub mod session;

pub use interface::*;
pub use matcher::EmojiFetcher;
pub use options::{MenuAction, MenuOption};
pub use preferences::{MemoryPreferences, PreferenceStore};
pub use recents::{RecentEmojiStore, RecentList, RECENTS_CAPACITY, RECENTS_KEY};
pub use session::SearchSession;

uniffi::setup_scaffolding!("paste_core");
