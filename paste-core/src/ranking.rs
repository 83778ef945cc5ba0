//! Bucket ranking for emoji search results.
//!
//! Implements a lexicographic tuple where higher-priority signals always dominate
//! lower ones: an exact name beats any word match, exact words beat prefixes,
//! prefixes beat substrings, and hits in the display name beat keyword hits.

use crate::catalog::CatalogEntry;

/// Bucket score tuple — derived Ord gives lexicographic comparison.
/// All components: higher = better.
///
/// Tuple order (most to least important):
/// 1. exactness — 3=whole name (or glyph) equals query, 2=all words exact,
///    1=all words at least prefix, 0=some word only as substring
/// 2. name_words_matched — query words found in the display name
/// 3. shortness — u16::MAX - name length, so shorter names come first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchScore {
    pub exactness: u8,
    pub name_words_matched: u8,
    pub shortness: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WordMatchKind {
    Substring = 0,
    Prefix = 1,
    Exact = 2,
}

/// Lowercase and split on anything that is not alphanumeric
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// How `query_word` matches `doc_word`, if at all
pub fn does_word_match(query_word: &str, doc_word: &str) -> Option<WordMatchKind> {
    if doc_word == query_word {
        Some(WordMatchKind::Exact)
    } else if doc_word.starts_with(query_word) {
        Some(WordMatchKind::Prefix)
    } else if doc_word.contains(query_word) {
        Some(WordMatchKind::Substring)
    } else {
        None
    }
}

fn best_match<'a>(query_word: &str, words: impl Iterator<Item = &'a str>) -> Option<WordMatchKind> {
    words.filter_map(|w| does_word_match(query_word, w)).max()
}

/// Score one catalog entry. Returns `None` unless every query word matches
/// some word of the name or keywords.
///
/// `query_trimmed` is the raw query with surrounding whitespace removed,
/// `query_words` its tokenized form.
pub fn score_entry(entry: &CatalogEntry, query_trimmed: &str, query_words: &[String]) -> Option<MatchScore> {
    let name_lower = entry.emoji.name.to_lowercase();
    let shortness = u16::MAX.saturating_sub(name_lower.chars().count() as u16);

    if entry.emoji.character == query_trimmed || name_lower == query_trimmed.to_lowercase() {
        return Some(MatchScore {
            exactness: 3,
            name_words_matched: query_words.len().min(u8::MAX as usize) as u8,
            shortness,
        });
    }

    if query_words.is_empty() {
        return None;
    }

    let name_words = tokenize_words(&name_lower);
    let keyword_words: Vec<String> = entry
        .keywords
        .iter()
        .flat_map(|k| tokenize_words(k))
        .collect();

    let mut weakest = WordMatchKind::Exact;
    let mut name_words_matched: u8 = 0;

    for query_word in query_words {
        let in_name = best_match(query_word, name_words.iter().map(String::as_str));
        let in_keywords = best_match(query_word, keyword_words.iter().map(String::as_str));

        let kind = match (in_name, in_keywords) {
            (None, None) => return None,
            (Some(n), Some(k)) => n.max(k),
            (Some(n), None) => n,
            (None, Some(k)) => k,
        };
        if in_name.is_some() {
            name_words_matched = name_words_matched.saturating_add(1);
        }
        weakest = weakest.min(kind);
    }

    Some(MatchScore {
        exactness: weakest as u8,
        name_words_matched,
        shortness,
    })
}
