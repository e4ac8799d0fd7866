//! History windowing over the surviving turns.

use std::ops::Range;

use tracker_core::models::{HistoryWindow, Turn};

/// A window ending right before a labelled turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingWindow {
    /// Turns (positions in the surviving sequence) whose states form the window.
    pub span: Range<usize>,
    pub window: HistoryWindow,
    /// Action chosen from the window's last state.
    pub label_action: String,
}

/// The last `max_history` positions before `end`, or all of them when unset.
pub fn window_span(end: usize, max_history: Option<usize>) -> Range<usize> {
    let start = max_history.map_or(0, |k| end.saturating_sub(k));
    start..end
}

/// Keep the most recent `max_history` items, in order.
pub fn slice_history<T: Clone>(items: &[T], max_history: Option<usize>) -> Vec<T> {
    items[window_span(items.len(), max_history)].to_vec()
}

fn window_of(turns: &[Turn], span: Range<usize>) -> HistoryWindow {
    HistoryWindow::new(turns[span].iter().map(|t| t.state.clone()).collect())
}

/// One window per labelled turn: the states before it, truncated.
pub fn training_windows(turns: &[Turn], max_history: Option<usize>) -> Vec<TrainingWindow> {
    turns
        .iter()
        .enumerate()
        .filter_map(|(position, turn)| {
            let label = turn.label_action()?;
            let span = window_span(position, max_history);
            Some(TrainingWindow {
                window: window_of(turns, span.clone()),
                span,
                label_action: label.to_string(),
            })
        })
        .collect()
}

/// The trailing window over every surviving turn.
pub fn prediction_window(turns: &[Turn], max_history: Option<usize>) -> (Range<usize>, HistoryWindow) {
    let span = window_span(turns.len(), max_history);
    let window = window_of(turns, span.clone());
    (span, window)
}
