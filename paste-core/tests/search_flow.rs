//! End-to-end search screen flow through the public API

use paste_core::{Emoji, EmojiFetcher, Pasteboard, RecentEmojiStore, SearchSession};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct TestPasteboard {
    contents: Mutex<Option<String>>,
}

impl Pasteboard for TestPasteboard {
    fn set_string(&self, value: String) {
        *self.contents.lock().unwrap() = Some(value);
    }
}

fn open_session(path: &str, pasteboard: Arc<TestPasteboard>) -> SearchSession {
    let store = Arc::new(RecentEmojiStore::new(path.to_string()).unwrap());
    SearchSession::new(store, Arc::new(EmojiFetcher::new()), pasteboard)
}

#[tokio::test]
async fn test_search_select_and_relaunch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paste.sqlite").to_string_lossy().to_string();
    let pasteboard = Arc::new(TestPasteboard::default());

    let session = open_session(&path, pasteboard.clone());
    assert_eq!(session.result_count(), 0);

    let results = session.update_query("thumbs".to_string()).await.unwrap();
    let thumbs_up = results
        .iter()
        .position(|e| e.character == "👍")
        .expect("thumbs up in results");
    let selection = session.select(thumbs_up as u64).unwrap();
    assert_eq!(selection.confirmation, "Copied 👍");
    assert_eq!(pasteboard.contents.lock().unwrap().as_deref(), Some("👍"));

    session.update_query("rocket".to_string()).await.unwrap();
    session.select(0).unwrap();
    assert_eq!(pasteboard.contents.lock().unwrap().as_deref(), Some("🚀"));

    // A new launch starts on the recent list
    let relaunched = open_session(&path, Arc::new(TestPasteboard::default()));
    assert_eq!(
        relaunched.results(),
        vec![Emoji::new("🚀", "rocket"), Emoji::new("👍", "thumbs up")]
    );
}

#[tokio::test]
async fn test_clearing_text_shows_recents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paste.sqlite").to_string_lossy().to_string();
    let session = open_session(&path, Arc::new(TestPasteboard::default()));

    session.update_query("fire".to_string()).await.unwrap();
    session.select(0).unwrap();

    session.update_query("f".to_string()).await.unwrap();
    assert!(session.result_count() > 1);

    session.reset();
    assert_eq!(session.results(), vec![Emoji::new("🔥", "fire")]);
    assert_eq!(session.query_text(), "");
}
