//! Scoring module - line clear points, level progression and gravity speed

use crate::types::{GRAVITY_TICKS, GRAVITY_TICKS_FLOOR, LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows in one lock at `level` (1-based).
///
/// Clears outside 1..=4 score nothing.
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines as usize] * level
}

/// Level for a total number of cleared lines (starts at 1)
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in ticks per row at `level`
pub fn gravity_ticks(level: u32) -> u32 {
    let idx = level.saturating_sub(1) as usize;
    GRAVITY_TICKS
        .get(idx)
        .copied()
        .unwrap_or(GRAVITY_TICKS_FLOOR)
}
