//! A renderer that records what it was asked to do.

use super::{ExpansionCompletion, Renderer, RollDirection};
use crate::config::Style;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One call made on a [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    Style(Style),
    Quantity(String),
    Roll(RollDirection),
    Expansion(bool),
    IncrementEnabled(bool),
    BackgroundActive(bool),
}

#[derive(Default)]
struct Recording {
    calls: Vec<RenderCall>,
    pending: VecDeque<ExpansionCompletion>,
}

/// Records every call and holds expansion animations until told to finish
/// them. Useful for tests and for hosts that run the control headless.
///
/// # Example
///
/// ```rust
/// use cart_stepper::render::{RecordingRenderer, RenderCall};
/// use cart_stepper::StepperBuilder;
///
/// let (renderer, log) = RecordingRenderer::new();
/// let mut stepper = StepperBuilder::new().renderer(renderer).build().unwrap();
///
/// stepper.primary_tap();
/// assert_eq!(log.pending_animations(), 1);
/// assert!(log.calls().contains(&RenderCall::Quantity("1".to_string())));
///
/// log.finish_animations();
/// assert_eq!(stepper.deliver_completions(), 1);
/// ```
pub struct RecordingRenderer {
    recording: Rc<RefCell<Recording>>,
    immediate: bool,
}

/// Shared view of what a [`RecordingRenderer`] recorded.
#[derive(Clone)]
pub struct RenderLog {
    recording: Rc<RefCell<Recording>>,
}

impl RecordingRenderer {
    /// Renderer that holds expansion animations until
    /// [`RenderLog::finish_animations`] is called.
    pub fn new() -> (Self, RenderLog) {
        Self::build(false)
    }

    /// Renderer whose expansion animations finish the moment they start.
    pub fn immediate() -> (Self, RenderLog) {
        Self::build(true)
    }

    fn build(immediate: bool) -> (Self, RenderLog) {
        let recording = Rc::new(RefCell::new(Recording::default()));
        let log = RenderLog {
            recording: Rc::clone(&recording),
        };
        (
            Self {
                recording,
                immediate,
            },
            log,
        )
    }

    fn push(&self, call: RenderCall) {
        self.recording.borrow_mut().calls.push(call);
    }
}

impl Renderer for RecordingRenderer {
    fn apply_style(&mut self, style: &Style) {
        self.push(RenderCall::Style(*style));
    }

    fn render_quantity(&mut self, text: &str) {
        self.push(RenderCall::Quantity(text.to_string()));
    }

    fn animate_roll(&mut self, direction: RollDirection) {
        self.push(RenderCall::Roll(direction));
    }

    fn animate_expansion(&mut self, expanded: bool, completion: ExpansionCompletion) {
        self.push(RenderCall::Expansion(expanded));
        if self.immediate {
            completion.complete();
        } else {
            self.recording.borrow_mut().pending.push_back(completion);
        }
    }

    fn set_increment_enabled(&mut self, enabled: bool) {
        self.push(RenderCall::IncrementEnabled(enabled));
    }

    fn set_background_active(&mut self, active: bool) {
        self.push(RenderCall::BackgroundActive(active));
    }
}

impl RenderLog {
    pub fn calls(&self) -> Vec<RenderCall> {
        self.recording.borrow().calls.clone()
    }

    /// Most recent quantity text, if any was rendered.
    pub fn displayed_quantity(&self) -> Option<String> {
        self.recording
            .borrow()
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::Quantity(text) => Some(text.clone()),
                _ => None,
            })
    }

    /// Most recent increment affordance state, if any was set.
    pub fn increment_enabled(&self) -> Option<bool> {
        self.recording
            .borrow()
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::IncrementEnabled(enabled) => Some(*enabled),
                _ => None,
            })
    }

    pub fn clear(&self) {
        self.recording.borrow_mut().calls.clear();
    }

    /// Expansion animations started but not yet finished.
    pub fn pending_animations(&self) -> usize {
        self.recording.borrow().pending.len()
    }

    /// Finish the oldest running expansion animation.
    pub fn finish_next(&self) -> bool {
        let next = self.recording.borrow_mut().pending.pop_front();
        match next {
            Some(completion) => {
                completion.complete();
                true
            }
            None => false,
        }
    }

    /// Finish every running expansion animation, oldest first.
    pub fn finish_animations(&self) -> usize {
        let mut finished = 0;
        while self.finish_next() {
            finished += 1;
        }
        finished
    }
}
