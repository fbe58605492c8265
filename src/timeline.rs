//! Mapping playback position to the active lyric line
//!
//! The active line at time `t` is the last line whose timestamp is `<= t`.
//! Pure and deterministic: the same `(lines, query_time)` always yields
//! the same index, which is what keeps the scrolled view jitter-free.

use crate::parser::LyricLine;

/// Index of the line active at `query_time` seconds
///
/// Negative query times are treated as 0; a query past the final
/// timestamp pins to the last line. Returns 0 for an empty slice, though
/// the parser never produces one.
pub fn active_index_at(lines: &[LyricLine], query_time: f64) -> usize {
    if lines.is_empty() {
        return 0;
    }
    let query_time = query_time.max(0.0);
    // partition_point is a binary search: count of lines starting at or
    // before the query time.
    let upcoming = lines.partition_point(|line| line.timestamp <= query_time);
    upcoming.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<LyricLine> {
        vec![
            LyricLine::new(0.0, "Intro"),
            LyricLine::new(1.0, "Hello"),
            LyricLine::new(5.5, "World"),
        ]
    }

    #[test]
    fn test_between_lines() {
        assert_eq!(active_index_at(&lines(), 3.0), 1);
    }

    #[test]
    fn test_exact_timestamp_activates_line() {
        assert_eq!(active_index_at(&lines(), 1.0), 1);
        assert_eq!(active_index_at(&lines(), 5.5), 2);
    }

    #[test]
    fn test_before_first_line() {
        let late_start = vec![LyricLine::new(2.0, "late"), LyricLine::new(4.0, "later")];
        assert_eq!(active_index_at(&late_start, 0.5), 0);
    }

    #[test]
    fn test_past_the_end_pins_to_last() {
        assert_eq!(active_index_at(&lines(), 100.0), 2);
        assert_eq!(active_index_at(&lines(), 5.5), 2);
    }

    #[test]
    fn test_negative_time_treated_as_zero() {
        assert_eq!(active_index_at(&lines(), -3.0), 0);
    }

    #[test]
    fn test_idempotent() {
        let ls = lines();
        assert_eq!(active_index_at(&ls, 2.7), active_index_at(&ls, 2.7));
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(active_index_at(&[], 10.0), 0);
    }

    #[test]
    fn test_duplicate_timestamps_pick_last_in_order() {
        let dup = vec![
            LyricLine::new(1.0, "a"),
            LyricLine::new(1.0, "b"),
            LyricLine::new(2.0, "c"),
        ];
        // Both share t=1.0; the later file-order line wins once reached.
        assert_eq!(active_index_at(&dup, 1.5), 1);
    }
}
