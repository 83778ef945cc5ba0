//! SearchSession - state behind the emoji search screen
//!
//! Swift forwards text-field and table events here and renders `results()`.
//! The session owns no UI; it ties the fetcher, the recent emoji store and the
//! pasteboard together.
//!
//! Every query bumps a generation counter. A query whose generation is no longer
//! current when it completes (because of a newer query or a reset) leaves the
//! results untouched and resolves to `PasteError::Cancelled`.

use crate::interface::{Emoji, PasteError, Pasteboard, Selection};
use crate::matcher::EmojiFetcher;
use crate::recents::RecentEmojiStore;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct SessionState {
    query_text: String,
    results: Vec<Emoji>,
    generation: u64,
}

#[derive(uniffi::Object)]
pub struct SearchSession {
    store: Arc<RecentEmojiStore>,
    fetcher: Arc<EmojiFetcher>,
    pasteboard: Arc<dyn Pasteboard>,
    state: Mutex<SessionState>,
}

// Internal implementation (not exported via FFI)
impl SearchSession {
    /// Record a new query text and return its generation
    fn begin_query(&self, text: String) -> u64 {
        let mut state = self.state.lock();
        state.query_text = text;
        state.generation += 1;
        state.generation
    }

    /// Publish `matches` if `generation` is still the latest query
    fn apply_results(&self, generation: u64, matches: Vec<Emoji>) -> Result<Vec<Emoji>, PasteError> {
        let mut state = self.state.lock();
        if state.generation != generation {
            log::debug!("Dropping results of superseded query {}", generation);
            return Err(PasteError::Cancelled);
        }
        state.results = matches.clone();
        Ok(matches)
    }
}

// FFI-exported constructor (must be in standalone impl block)
#[uniffi::export]
impl SearchSession {
    /// Start a session showing the recent emoji
    #[uniffi::constructor]
    pub fn new(
        store: Arc<RecentEmojiStore>,
        fetcher: Arc<EmojiFetcher>,
        pasteboard: Arc<dyn Pasteboard>,
    ) -> Self {
        let results = store.get();
        Self {
            store,
            fetcher,
            pasteboard,
            state: Mutex::new(SessionState {
                results,
                ..SessionState::default()
            }),
        }
    }
}

#[uniffi::export]
impl SearchSession {
    /// Cancel in-flight queries, clear the query text and show the recent emoji
    pub fn reset(&self) {
        self.fetcher.cancel_fetches();
        let results = self.store.get();
        let mut state = self.state.lock();
        state.generation += 1;
        state.query_text.clear();
        state.results = results;
    }

    /// Called on every text change. Empty text resets to the recent emoji.
    pub async fn update_query(&self, text: String) -> Result<Vec<Emoji>, PasteError> {
        if text.is_empty() {
            self.reset();
            return Ok(self.results());
        }

        let generation = self.begin_query(text.clone());
        let matches = self.fetcher.query(text).await?;
        self.apply_results(generation, matches)
    }

    /// The user tapped row `index`: copy the emoji, remember it and go back
    /// to the recent emoji.
    pub fn select(&self, index: u64) -> Result<Selection, PasteError> {
        let emoji = self
            .result_at(index)
            .ok_or_else(|| PasteError::InvalidInput(format!("no result at row {}", index)))?;

        self.pasteboard.set_string(emoji.character.clone());
        self.store.record_selection(emoji.clone());
        self.reset();

        Ok(Selection {
            confirmation: format!("Copied {}", emoji.character),
            emoji,
        })
    }

    pub fn results(&self) -> Vec<Emoji> {
        self.state.lock().results.clone()
    }

    pub fn result_count(&self) -> u64 {
        self.state.lock().results.len() as u64
    }

    pub fn result_at(&self, index: u64) -> Option<Emoji> {
        let index = usize::try_from(index).ok()?;
        self.state.lock().results.get(index).cloned()
    }

    pub fn query_text(&self) -> String {
        self.state.lock().query_text.clone()
    }
}
