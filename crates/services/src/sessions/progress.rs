use serde::Serialize;

/// Aggregated view of round progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    /// 1-based position of the current question; 0 before the round starts.
    pub position: usize,
    pub total: usize,
    /// Share of the round reached, including the current question.
    pub percent: u8,
    pub score: u32,
    pub is_complete: bool,
}

impl QuizProgress {
    pub(crate) fn new(position: usize, total: usize, score: u32, is_complete: bool) -> Self {
        let percent = if total == 0 {
            0
        } else {
            u8::try_from(position.min(total) * 100 / total).unwrap_or(100)
        };
        Self {
            position,
            total,
            percent,
            score,
            is_complete,
        }
    }
}
