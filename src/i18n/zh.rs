//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Lyrics
    m.insert(Key::NoLyrics, "暂无歌词");

    // Play modes
    m.insert(Key::PlayModeLoopAll, "列表循环");
    m.insert(Key::PlayModeLoopOne, "单曲循环");
    m.insert(Key::PlayModeShuffle, "随机播放");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
