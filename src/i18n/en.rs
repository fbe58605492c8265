//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Lyrics
    m.insert(Key::NoLyrics, "No lyrics available");

    // Play modes
    m.insert(Key::PlayModeLoopAll, "Loop All");
    m.insert(Key::PlayModeLoopOne, "Loop One");
    m.insert(Key::PlayModeShuffle, "Shuffle");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
