//! LRC line grammar
//!
//! One directive per line: `[mm:ss.xx]text` for timed entries,
//! `[ti:...]` / `[ar:...]` / `[by:...]` for header metadata. Each line is
//! validated independently and a malformed line simply parses to `None` —
//! a broken lyric file loses lines, it never fails to load.

use super::types::{LyricLine, MetaTag};

/// Parse the `mm:ss` / `mm:ss.frac` body of a time tag into seconds
fn parse_timestamp(body: &str) -> Option<f64> {
    let (minutes, seconds) = body.split_once(':')?;
    let minutes: f64 = minutes.trim().parse().ok()?;
    let seconds: f64 = seconds.trim().parse().ok()?;
    if minutes < 0.0 || seconds < 0.0 {
        return None;
    }
    Some(minutes * 60.0 + seconds)
}

/// Parse a timed lyric line: `[mm:ss.xx]text`
///
/// Returns `None` for metadata tags, comments, and anything malformed.
pub fn parse_timed_line(line: &str) -> Option<LyricLine> {
    let line = line.trim();
    let rest = line.strip_prefix('[')?;
    let (body, text) = rest.split_once(']')?;
    let timestamp = parse_timestamp(body)?;
    Some(LyricLine::new(timestamp, text.trim()))
}

/// Parse a metadata header line: `[ti:...]`, `[ar:...]`, `[by:...]`
///
/// Unrecognized tags (`[al:...]`, `[offset:...]`, …) return `None` and
/// are ignored by the caller, like every other unusable line.
pub fn parse_metadata_tag(line: &str) -> Option<(MetaTag, &str)> {
    let rest = line.trim().strip_prefix('[')?;
    let (body, after) = rest.split_once(']')?;
    if !after.trim().is_empty() {
        return None;
    }
    let (key, value) = body.split_once(':')?;
    let tag = match key.trim() {
        "ti" => MetaTag::Title,
        "ar" => MetaTag::Artist,
        "by" => MetaTag::By,
        _ => return None,
    };
    Some((tag, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("00:01.12"), Some(1.12));
        assert_eq!(parse_timestamp("01:10.5"), Some(70.5));
        assert_eq!(parse_timestamp("00:00"), Some(0.0));
        assert_eq!(parse_timestamp("02:30"), Some(150.0));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp("ab:cd"), None);
        assert_eq!(parse_timestamp("12"), None);
        assert_eq!(parse_timestamp("-1:00"), None);
        assert_eq!(parse_timestamp("00:-5"), None);
    }

    #[test]
    fn test_parse_timed_line() {
        let line = parse_timed_line("[00:01.12] test LyRiC").unwrap();
        assert_eq!(line.timestamp, 1.12);
        assert_eq!(line.text, "test LyRiC");
    }

    #[test]
    fn test_parse_timed_line_rejects_malformed() {
        assert!(parse_timed_line("[bad]Oops").is_none());
        assert!(parse_timed_line("no brackets at all").is_none());
        assert!(parse_timed_line("[12:34 no close").is_none());
        assert!(parse_timed_line("").is_none());
    }

    #[test]
    fn test_parse_timed_line_skips_metadata() {
        assert!(parse_timed_line("[ti:Song Title]").is_none());
        assert!(parse_timed_line("[ar:Artist]").is_none());
    }

    #[test]
    fn test_parse_metadata_tag() {
        assert_eq!(
            parse_metadata_tag("[ti:Fly Me to the Moon]"),
            Some((MetaTag::Title, "Fly Me to the Moon"))
        );
        assert_eq!(parse_metadata_tag("[ar: Sinatra ]"), Some((MetaTag::Artist, "Sinatra")));
        assert_eq!(parse_metadata_tag("[by:someone]"), Some((MetaTag::By, "someone")));
    }

    #[test]
    fn test_parse_metadata_tag_ignores_others() {
        assert_eq!(parse_metadata_tag("[al:Album]"), None);
        assert_eq!(parse_metadata_tag("[00:01.00]Hello"), None);
        assert_eq!(parse_metadata_tag("[ti:Song] trailing"), None);
    }
}
