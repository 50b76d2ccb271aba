//! Committed transition history.
//!
//! A bounded, ordered log of the transitions a stepper committed. Prevented
//! changes never reach it since they leave the state untouched.

use super::state::{Input, WidgetState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions a history keeps.
pub const DEFAULT_HISTORY_CAPACITY: usize = 32;

/// Record of a single committed transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: WidgetState,
    /// The state being transitioned to
    pub to: WidgetState,
    /// The input that caused it
    pub input: Input,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions, oldest first.
///
/// Once `capacity` records are held the oldest is evicted on each new
/// record. A capacity of zero keeps nothing.
///
/// # Example
///
/// ```rust
/// use cart_stepper::core::{Input, StateHistory, StateTransition, WidgetState};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(2);
/// let one = WidgetState { quantity: 1, expanded: true };
///
/// history.record(StateTransition {
///     from: WidgetState::new(),
///     to: one,
///     input: Input::PrimaryTap,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&WidgetState::new(), &one]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory {
    capacity: usize,
    transitions: VecDeque<StateTransition>,
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHistory {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a transition, evicting the oldest when full.
    pub fn record(&mut self, transition: StateTransition) {
        if self.capacity == 0 {
            return;
        }
        while self.transitions.len() >= self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition, then the
    /// `to` state of each transition.
    pub fn get_path(&self) -> Vec<&WidgetState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: usize, to: usize, input: Input) -> StateTransition {
        StateTransition {
            from: WidgetState {
                quantity: from,
                expanded: from > 0,
            },
            to: WidgetState {
                quantity: to,
                expanded: to > 0,
            },
            input,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn record_adds_transition() {
        let mut history = StateHistory::new();
        history.record(transition(0, 1, Input::PrimaryTap));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|t| t.input), Some(Input::PrimaryTap));
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(transition(0, 1, Input::PrimaryTap));
        history.record(transition(1, 2, Input::Increment));

        let quantities: Vec<usize> = history.get_path().iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, vec![0, 1, 2]);
    }

    #[test]
    fn oldest_transition_is_evicted_at_capacity() {
        let mut history = StateHistory::with_capacity(2);
        history.record(transition(0, 1, Input::PrimaryTap));
        history.record(transition(1, 2, Input::Increment));
        history.record(transition(2, 3, Input::Increment));

        assert_eq!(history.len(), 2);
        let quantities: Vec<usize> = history.get_path().iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, vec![1, 2, 3]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = StateHistory::with_capacity(0);
        history.record(transition(0, 1, Input::PrimaryTap));

        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        history.record(transition(0, 1, Input::PrimaryTap));

        std::thread::sleep(std::time::Duration::from_millis(10));

        history.record(transition(1, 0, Input::Decrement));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(transition(0, 1, Input::PrimaryTap));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), deserialized.len());
        assert_eq!(history.last(), deserialized.last());
    }
}
