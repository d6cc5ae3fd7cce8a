//! Layout rotation.
//!
//! Each period starts the layout list at a different offset so that, over
//! the era, layouts are spread across periods instead of the first few
//! always being picked. When a period needs more layouts than exist, the
//! rotated list is reused from its start.

use crate::error::{InputKind, ScheduleError, ScheduleResult};

/// Selects `match_count` layouts for the period at 1-based `period_index`.
///
/// The list is rotated left by `(period_index - 1) mod len` and then read
/// cyclically. A `period_index` of 0 wraps to an offset of `len - 1`.
///
/// # Errors
/// [`ScheduleError::InvalidInputSize`] if `layouts` is empty while
/// `match_count > 0`.
pub fn rotate_layouts<T: Clone>(
    layouts: &[T],
    match_count: usize,
    period_index: usize,
) -> ScheduleResult<Vec<T>> {
    if match_count == 0 {
        return Ok(Vec::new());
    }
    let len = layouts.len();
    if len == 0 {
        return Err(ScheduleError::InvalidInputSize {
            input: InputKind::Layouts,
            len,
        });
    }

    let shift = (period_index % len + len - 1) % len;
    Ok((0..match_count)
        .map(|i| layouts[(shift + i) % len].clone())
        .collect())
}
