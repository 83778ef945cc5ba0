//! Recent emoji: the bounded, most-recent-first list of selections
//!
//! `RecentList` holds the list policy (dedup, promote, truncate) with no I/O.
//! `RecentEmojiStore` owns one list, loads it once from the preferences medium
//! and writes it back after every mutation.
//!
//! Failure model: reads that fail or return undecodable data yield an empty list,
//! writes that fail are logged and retried on the next mutation. The in-memory
//! list stays authoritative for the session either way.

use crate::interface::{Emoji, PasteError};
use crate::preferences::PreferenceStore;
use parking_lot::Mutex;
use std::sync::Arc;

/// Maximum number of recent emoji kept.
pub const RECENTS_CAPACITY: usize = 10;

/// Preferences key the list is persisted under.
pub const RECENTS_KEY: &str = "recents";

/// Ordered, deduplicated, bounded list. Index 0 is the most recent selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentList {
    items: Vec<Emoji>,
}

impl RecentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from arbitrary input, keeping the first occurrence of each
    /// emoji and at most `RECENTS_CAPACITY` of them.
    pub fn from_unchecked(items: Vec<Emoji>) -> Self {
        let mut kept: Vec<Emoji> = Vec::with_capacity(RECENTS_CAPACITY);
        for emoji in items {
            if kept.len() == RECENTS_CAPACITY {
                break;
            }
            if !kept.contains(&emoji) {
                kept.push(emoji);
            }
        }
        Self { items: kept }
    }

    /// Move `emoji` to the front: drop its existing occurrence, insert at 0,
    /// then truncate to capacity.
    pub fn promote(&mut self, emoji: Emoji) {
        if let Some(index) = self.items.iter().position(|e| *e == emoji) {
            self.items.remove(index);
        }
        self.items.insert(0, emoji);
        self.items.truncate(RECENTS_CAPACITY);
    }

    pub fn as_slice(&self) -> &[Emoji] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<Emoji> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Decode the persisted JSON form. Malformed data decodes to `None`.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str::<Vec<Emoji>>(raw)
            .ok()
            .map(Self::from_unchecked)
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.items)
    }
}

struct RecentState {
    list: RecentList,
    /// False while the medium holds an older list than `list`
    persisted: bool,
}

/// Owner and sole writer of the persisted recent emoji list.
///
/// Constructed once at app start and handed to the search session.
#[derive(uniffi::Object)]
pub struct RecentEmojiStore {
    prefs: Arc<dyn PreferenceStore>,
    state: Mutex<RecentState>,
}

// Internal implementation (not exported via FFI)
impl RecentEmojiStore {
    /// Open a store over any preferences medium
    pub fn with_preferences(prefs: Arc<dyn PreferenceStore>) -> Self {
        let list = Self::load(prefs.as_ref());
        Self {
            prefs,
            state: Mutex::new(RecentState { list, persisted: true }),
        }
    }

    /// Create a store over a fresh in-memory medium (for testing)
    #[cfg(test)]
    pub(crate) fn new_in_memory() -> Self {
        Self::with_preferences(Arc::new(crate::preferences::MemoryPreferences::new()))
    }

    fn load(prefs: &dyn PreferenceStore) -> RecentList {
        match prefs.get_string(RECENTS_KEY) {
            Ok(Some(raw)) => RecentList::decode(&raw).unwrap_or_else(|| {
                log::warn!("Discarding malformed recent emoji data ({} bytes)", raw.len());
                RecentList::new()
            }),
            Ok(None) => RecentList::new(),
            Err(e) => {
                log::warn!("Could not read recent emoji, starting empty: {}", e);
                RecentList::new()
            }
        }
    }

    /// Write the current list; on failure mark the state stale so the next
    /// mutation writes again.
    fn persist(&self, state: &mut RecentState) {
        let result = state
            .list
            .encode()
            .map_err(|e| e.to_string())
            .and_then(|raw| {
                self.prefs
                    .set_string(RECENTS_KEY, &raw)
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(()) => state.persisted = true,
            Err(e) => {
                log::warn!("Could not persist recent emoji, keeping in memory: {}", e);
                state.persisted = false;
            }
        }
    }
}

// FFI-exported constructor (must be in standalone impl block)
#[uniffi::export]
impl RecentEmojiStore {
    /// Open the store backed by the preferences database at `db_path`
    #[uniffi::constructor]
    pub fn new(db_path: String) -> Result<Self, PasteError> {
        let db = crate::database::Database::open(&db_path)?;
        Ok(Self::with_preferences(Arc::new(db)))
    }
}

#[uniffi::export]
impl RecentEmojiStore {
    /// Current list, most recent first
    pub fn get(&self) -> Vec<Emoji> {
        self.state.lock().list.to_vec()
    }

    /// Record that the user picked `emoji`: promote it to the front and persist.
    pub fn record_selection(&self, emoji: Emoji) {
        let mut state = self.state.lock();
        state.list.promote(emoji);
        self.persist(&mut state);
    }

    /// Replace the whole list. Input is normalized: duplicates after the first
    /// occurrence are dropped and the list is cut to capacity.
    pub fn replace_all(&self, emojis: Vec<Emoji>) {
        let mut state = self.state.lock();
        state.list = RecentList::from_unchecked(emojis);
        self.persist(&mut state);
    }

    pub fn len(&self) -> u64 {
        self.state.lock().list.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().list.is_empty()
    }

    pub fn capacity(&self) -> u64 {
        RECENTS_CAPACITY as u64
    }

    /// False while a failed write is waiting to be retried
    pub fn is_persisted(&self) -> bool {
        self.state.lock().persisted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferences;

    fn emoji(character: &str) -> Emoji {
        Emoji::new(character, format!("name of {}", character))
    }

    fn characters(list: &[Emoji]) -> Vec<&str> {
        list.iter().map(|e| e.character.as_str()).collect()
    }

    #[test]
    fn test_empty_store_read() {
        let store = RecentEmojiStore::new_in_memory();
        assert!(store.get().is_empty());
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 10);
    }

    #[test]
    fn test_reselecting_front_is_idempotent() {
        let store = RecentEmojiStore::new_in_memory();
        store.record_selection(emoji("😀"));
        store.record_selection(emoji("😀"));
        assert_eq!(store.get(), vec![emoji("😀")]);

        store.record_selection(emoji("😂"));
        let before = store.get();
        store.record_selection(emoji("😂"));
        assert_eq!(store.get(), before);
    }

    #[test]
    fn test_dedup_and_promote() {
        let store = RecentEmojiStore::new_in_memory();
        store.replace_all(vec![emoji("a"), emoji("b"), emoji("c")]);
        store.record_selection(emoji("b"));
        assert_eq!(characters(&store.get()), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_same_glyph_different_name_is_distinct() {
        let store = RecentEmojiStore::new_in_memory();
        store.record_selection(Emoji::new("❤️", "red heart"));
        store.record_selection(Emoji::new("❤️", "heart"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_capacity_bound_drops_oldest() {
        let store = RecentEmojiStore::new_in_memory();
        let full: Vec<Emoji> = (0..10).map(|i| emoji(&i.to_string())).collect();
        store.replace_all(full.clone());
        assert_eq!(store.len(), 10);

        store.record_selection(emoji("new"));
        let list = store.get();
        assert_eq!(list.len(), 10);
        assert_eq!(list[0], emoji("new"));
        assert_eq!(&list[1..], &full[..9]);
        assert!(!list.contains(&full[9]));
    }

    #[test]
    fn test_promoting_existing_at_capacity_keeps_all() {
        let store = RecentEmojiStore::new_in_memory();
        let full: Vec<Emoji> = (0..10).map(|i| emoji(&i.to_string())).collect();
        store.replace_all(full.clone());

        store.record_selection(full[9].clone());
        let list = store.get();
        assert_eq!(list.len(), 10);
        assert_eq!(list[0], full[9]);
        assert_eq!(&list[1..], &full[..9]);
    }

    #[test]
    fn test_example_scenario() {
        let store = RecentEmojiStore::new_in_memory();
        store.record_selection(emoji("😀"));
        assert_eq!(characters(&store.get()), vec!["😀"]);
        store.record_selection(emoji("😂"));
        assert_eq!(characters(&store.get()), vec!["😂", "😀"]);
        store.record_selection(emoji("😀"));
        assert_eq!(characters(&store.get()), vec!["😀", "😂"]);
    }

    #[test]
    fn test_replace_all_normalizes() {
        let store = RecentEmojiStore::new_in_memory();
        let mut input = vec![emoji("a"), emoji("b"), emoji("a")];
        input.extend((0..20).map(|i| emoji(&i.to_string())));
        store.replace_all(input);

        let list = store.get();
        assert_eq!(list.len(), 10);
        assert_eq!(characters(&list[..3]), vec!["a", "b", "0"]);
    }

    #[test]
    fn test_roundtrip_through_same_medium() {
        let prefs = Arc::new(MemoryPreferences::new());
        let store = RecentEmojiStore::with_preferences(prefs.clone());
        store.record_selection(emoji("😀"));
        store.record_selection(emoji("🎉"));

        let reopened = RecentEmojiStore::with_preferences(prefs);
        assert_eq!(reopened.get(), store.get());
        assert_eq!(reopened.get()[0], emoji("🎉"));
    }

    #[test]
    fn test_persisted_layout_is_json_records() {
        let prefs = Arc::new(MemoryPreferences::new());
        let store = RecentEmojiStore::with_preferences(prefs.clone());
        store.record_selection(Emoji::new("👍", "thumbs up"));

        let raw = prefs.get_string(RECENTS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "character": "👍", "name": "thumbs up" }])
        );
    }

    #[test]
    fn test_corrupt_data_reads_as_empty() {
        for raw in ["not json", "{\"character\":\"x\"}", "[{\"character\":1}]", ""] {
            let prefs = Arc::new(MemoryPreferences::new());
            prefs.set_string(RECENTS_KEY, raw).unwrap();
            let store = RecentEmojiStore::with_preferences(prefs);
            assert!(store.get().is_empty(), "expected empty for {:?}", raw);
        }
    }

    #[test]
    fn test_corrupt_data_is_overwritten_on_next_selection() {
        let prefs = Arc::new(MemoryPreferences::new());
        prefs.set_string(RECENTS_KEY, "garbage").unwrap();

        let store = RecentEmojiStore::with_preferences(prefs.clone());
        store.record_selection(emoji("😀"));

        let reopened = RecentEmojiStore::with_preferences(prefs);
        assert_eq!(reopened.get(), vec![emoji("😀")]);
    }

    #[test]
    fn test_oversized_persisted_list_is_normalized() {
        let prefs = Arc::new(MemoryPreferences::new());
        let oversized: Vec<Emoji> = (0..15).map(|i| emoji(&i.to_string())).collect();
        prefs
            .set_string(RECENTS_KEY, &serde_json::to_string(&oversized).unwrap())
            .unwrap();

        let store = RecentEmojiStore::with_preferences(prefs);
        assert_eq!(store.get(), oversized[..10].to_vec());
    }

    #[test]
    fn test_persist_failure_keeps_memory_and_retries() {
        let prefs = Arc::new(MemoryPreferences::new());
        let store = RecentEmojiStore::with_preferences(prefs.clone());
        store.record_selection(emoji("a"));
        assert!(store.is_persisted());

        prefs.set_writable(false);
        store.record_selection(emoji("b"));
        assert_eq!(characters(&store.get()), vec!["b", "a"]);
        assert!(!store.is_persisted());

        // Medium still has the last good write
        assert_eq!(
            RecentEmojiStore::with_preferences(prefs.clone()).get(),
            vec![emoji("a")]
        );

        prefs.set_writable(true);
        store.record_selection(emoji("c"));
        assert!(store.is_persisted());
        assert_eq!(
            characters(&RecentEmojiStore::with_preferences(prefs).get()),
            vec!["c", "b", "a"]
        );
    }

    #[test]
    fn test_concurrent_selections_keep_invariants() {
        let store = Arc::new(RecentEmojiStore::new_in_memory());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.record_selection(emoji(&((t * 50 + i) % 13).to_string()));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let list = store.get();
        assert_eq!(list.len(), 10);
        let mut unique = list.clone();
        unique.sort_by(|a, b| a.character.cmp(&b.character));
        unique.dedup();
        assert_eq!(unique.len(), list.len());
    }

    #[test]
    fn test_recent_list_promote_on_empty() {
        let mut list = RecentList::new();
        list.promote(emoji("x"));
        assert_eq!(list.as_slice(), &[emoji("x")]);
    }

    #[test]
    fn test_recent_list_decode_empty_array() {
        assert_eq!(RecentList::decode("[]"), Some(RecentList::new()));
        assert_eq!(RecentList::decode("[1, 2]"), None);
    }
}
