use std::collections::VecDeque;

use crate::core::types::ScoredDocument;

/// Sliding-window zero-result counter.
/// A pure observer: it has no reference to `SearchEngine` and only ever sees
/// the result list of a completed find call.
pub struct RequestTracker {
    window: usize,
    history: VecDeque<bool>,
    zero_result_count: usize,
}

impl RequestTracker {
    pub fn new(window: usize) -> Self {
        RequestTracker {
            window: window.max(1),
            history: VecDeque::with_capacity(window),
            zero_result_count: 0,
        }
    }

    /// Record the outcome of one find call.
    pub fn observe(&mut self, results: &[ScoredDocument]) {
        let was_zero = results.is_empty();
        if self.history.len() == self.window {
            if let Some(evicted) = self.history.pop_front() {
                if evicted {
                    self.zero_result_count -= 1;
                }
            }
        }
        self.history.push_back(was_zero);
        if was_zero {
            self.zero_result_count += 1;
        }
    }

    pub fn zero_result_count(&self) -> usize {
        self.zero_result_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit() -> Vec<ScoredDocument> {
        vec![ScoredDocument {
            id: crate::core::types::DocId(0),
            relevance: 1.0,
            rating: 0,
        }]
    }

    #[test]
    fn sliding_window_tracks_zero_results() {
        let mut tracker = RequestTracker::new(1440);
        for _ in 0..1439 {
            tracker.observe(&[]);
        }
        tracker.observe(&hit());
        assert_eq!(tracker.zero_result_count(), 1439);

        tracker.observe(&hit());
        assert_eq!(tracker.zero_result_count(), 1438);

        tracker.observe(&hit());
        assert_eq!(tracker.zero_result_count(), 1437);
    }

    #[test]
    fn window_of_one_keeps_only_latest() {
        let mut tracker = RequestTracker::new(1);
        tracker.observe(&[]);
        assert_eq!(tracker.zero_result_count(), 1);
        tracker.observe(&hit());
        assert_eq!(tracker.zero_result_count(), 0);
    }
}
