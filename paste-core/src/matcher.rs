//! EmojiFetcher - ranked emoji search for the search screen
//!
//! Async Cancellation Architecture:
//! Every query gets a child of the fetcher's current CancellationToken.
//! `cancel_fetches()` cancels the current token (and with it every in-flight query)
//! and installs a fresh one. When Swift cancels an async Task, UniFFI drops the Rust
//! Future; a DropGuard then cancels that query's own child token. The blocking
//! scoring work checks its token between candidates and aborts mid-flight.

use crate::catalog::{self, CatalogEntry};
use crate::interface::{Emoji, PasteError};
use crate::ranking::{score_entry, tokenize_words, MatchScore};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Maximum results to return from a query.
pub(crate) const MAX_RESULTS: usize = 200;

/// Global fallback Tokio runtime for when async functions are called outside any runtime context.
/// Used by UniFFI which doesn't provide a tokio runtime.
static FALLBACK_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("paste-fetcher")
        .enable_all()
        .build()
        .expect("Failed to create fallback tokio runtime")
});

/// RAII guard that cancels a token when dropped.
struct DropGuard {
    token: CancellationToken,
}

impl DropGuard {
    fn new(token: CancellationToken) -> Self {
        Self { token }
    }
}

impl Drop for DropGuard {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Text-to-emoji search over a fixed dataset.
#[derive(uniffi::Object)]
pub struct EmojiFetcher {
    entries: Arc<Vec<CatalogEntry>>,
    /// Parent of every query started since the last `cancel_fetches`
    current: Mutex<CancellationToken>,
}

impl Default for EmojiFetcher {
    fn default() -> Self {
        Self::new()
    }
}

// Internal implementation (not exported via FFI)
impl EmojiFetcher {
    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
            current: Mutex::new(CancellationToken::new()),
        }
    }

    /// Get a tokio runtime handle - uses current runtime if available, otherwise global fallback
    fn runtime_handle(&self) -> tokio::runtime::Handle {
        tokio::runtime::Handle::try_current()
            .unwrap_or_else(|_| FALLBACK_RUNTIME.handle().clone())
    }

    /// Score every entry and return the best matches in rank order.
    /// Catalog order breaks ties so results are stable.
    pub(crate) fn search_sync(
        entries: &[CatalogEntry],
        query: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Emoji>, PasteError> {
        if token.is_cancelled() {
            return Err(PasteError::Cancelled);
        }

        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        let query_words = tokenize_words(trimmed);

        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();

        use rayon::prelude::*;
        let mut scored: Vec<(MatchScore, usize)> = entries
            .par_iter()
            .enumerate()
            .take_any_while(|_| !token.is_cancelled())
            .filter_map(|(index, entry)| {
                score_entry(entry, trimmed, &query_words).map(|score| (score, index))
            })
            .collect();

        // take_any_while may stop early without telling us
        if token.is_cancelled() {
            return Err(PasteError::Cancelled);
        }

        scored.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.truncate(MAX_RESULTS);

        #[cfg(feature = "perf-log")]
        eprintln!(
            "[perf] query={:?} scored={:.1}ms matches={}",
            trimmed,
            t0.elapsed().as_secs_f64() * 1000.0,
            scored.len(),
        );

        Ok(scored
            .into_iter()
            .map(|(_, index)| entries[index].emoji.clone())
            .collect())
    }
}

// FFI-exported constructors (must be in standalone impl block)
#[uniffi::export]
impl EmojiFetcher {
    /// Create a fetcher over the built-in emoji table
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::with_entries(catalog::builtin())
    }

    /// Create a fetcher over a JSON dataset
    #[uniffi::constructor]
    pub fn from_json(json: String) -> Result<Self, PasteError> {
        Ok(Self::with_entries(catalog::from_json(&json)?))
    }
}

#[uniffi::export]
impl EmojiFetcher {
    /// Number of emoji in the dataset
    pub fn dataset_size(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Ranked matches for `text`. Blank text yields no matches.
    ///
    /// Resolves to `PasteError::Cancelled` if `cancel_fetches` ran while the
    /// query was in flight; callers must then discard it.
    pub async fn query(&self, text: String) -> Result<Vec<Emoji>, PasteError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let token = self.current.lock().child_token();
        let _guard = DropGuard::new(token.clone());

        let runtime = self.runtime_handle();
        let entries = Arc::clone(&self.entries);
        let token_clone = token.clone();

        // runtime.spawn_blocking() rather than tokio::task::spawn_blocking()
        // because UniFFI doesn't provide a tokio runtime context
        let handle = runtime.spawn_blocking(move || Self::search_sync(&entries, &text, &token_clone));

        match handle.await {
            Ok(Ok(_)) if token.is_cancelled() => Err(PasteError::Cancelled),
            Ok(result) => result,
            // JoinError means the task panicked or was aborted
            Err(_join_error) => Err(PasteError::Cancelled),
        }
    }

    /// Abort every in-flight query without delivering its results
    pub fn cancel_fetches(&self) {
        let mut current = self.current.lock();
        let previous = std::mem::replace(&mut *current, CancellationToken::new());
        previous.cancel();
    }
}
