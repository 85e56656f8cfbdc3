//! Scoring, level progression, and gravity speed.

use std::time::Duration;

use crate::types::{
    DROP_INTERVALS_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES, MAX_LEVEL,
};

/// Points for clearing `cleared` lines in one lock at the given level.
/// `cleared` is at most 4 (one tetromino completes at most 4 rows).
pub fn line_score(cleared: usize, level: u32) -> u32 {
    LINE_SCORES[cleared] * level
}

/// Bonus for a hard drop over `distance` rows, independent of line scores.
pub fn hard_drop_score(distance: u32) -> u32 {
    distance * HARD_DROP_POINTS_PER_ROW
}

/// Level from total cleared lines: one level per ten lines, starting at 1,
/// capped at `MAX_LEVEL`.
pub fn level_for_lines(total_lines: u32) -> u32 {
    (total_lines / LINES_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Time between gravity ticks at the given level. Owned here; the timing
/// loop consults it, never computes it.
pub fn drop_interval(level: u32) -> Duration {
    let index = level.clamp(1, MAX_LEVEL) as usize - 1;
    Duration::from_millis(DROP_INTERVALS_MS[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_table() {
        assert_eq!(line_score(0, 5), 0);
        assert_eq!(line_score(1, 1), 40);
        assert_eq!(line_score(2, 3), 300);
        assert_eq!(line_score(3, 2), 600);
        assert_eq!(line_score(4, 10), 12000);
    }

    #[test]
    fn test_level_starts_at_one_and_caps_at_ten() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
        assert_eq!(level_for_lines(90), 10);
        assert_eq!(level_for_lines(500), 10);
    }

    #[test]
    fn test_drop_interval_endpoints() {
        assert_eq!(drop_interval(1), Duration::from_millis(800));
        assert_eq!(drop_interval(10), Duration::from_millis(100));
        // Out-of-range levels clamp instead of indexing past the table.
        assert_eq!(drop_interval(0), drop_interval(1));
        assert_eq!(drop_interval(11), drop_interval(10));
    }

    #[test]
    fn test_hard_drop_bonus_scales_with_distance() {
        assert_eq!(hard_drop_score(0), 0);
        assert_eq!(hard_drop_score(18), 36);
    }
}
