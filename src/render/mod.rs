//! Renderer seam.
//!
//! The stepper does not draw anything itself. After every committed
//! transition it drives a [`Renderer`], which owns images, layout and
//! animation timing for whatever toolkit hosts the control.
//!
//! Expansion animations finish asynchronously: the renderer receives an
//! [`ExpansionCompletion`] and fires it when the animation is done. The
//! widget delivers the matching notification the next time the host calls
//! [`CartStepper::deliver_completions`](crate::widget::CartStepper::deliver_completions).

mod recording;

pub use recording::{RecordingRenderer, RenderCall, RenderLog};

pub use crate::core::RollDirection;

use crate::config::Style;
use std::sync::mpsc::Sender;

/// Drawing operations the stepper needs from its host toolkit.
pub trait Renderer {
    /// Apply size metrics and tint. Called at construction and whenever
    /// either changes.
    fn apply_style(&mut self, _style: &Style) {}

    /// Display the current quantity.
    fn render_quantity(&mut self, text: &str);

    /// Run the rolling-number transition.
    fn animate_roll(&mut self, direction: RollDirection);

    /// Slide/crossfade between the collapsed icon and the counter row.
    ///
    /// `completion` must be completed once the animation is over. Dropping
    /// it completes it too.
    fn animate_expansion(&mut self, expanded: bool, completion: ExpansionCompletion);

    /// Reflect whether plus is currently usable.
    fn set_increment_enabled(&mut self, enabled: bool);

    /// Show the quantity on the collapsed icon instead of the plain glyph.
    fn set_background_active(&mut self, active: bool);
}

/// Single-fire continuation for an expansion animation.
///
/// Completing consumes the handle. A handle dropped without being completed
/// completes on drop, so every started animation yields exactly one
/// expansion notification. The handle is `Send` and may be completed from
/// a timer thread or task.
#[derive(Debug)]
pub struct ExpansionCompletion {
    expanded: bool,
    sender: Option<Sender<bool>>,
}

impl ExpansionCompletion {
    pub(crate) fn new(expanded: bool, sender: Sender<bool>) -> Self {
        Self {
            expanded,
            sender: Some(sender),
        }
    }

    /// The expansion state the animation moves to.
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Signal that the animation has finished.
    pub fn complete(mut self) {
        self.fire();
    }

    fn fire(&mut self) {
        if let Some(sender) = self.sender.take() {
            if sender.send(self.expanded).is_err() {
                tracing::trace!(
                    expanded = self.expanded,
                    "stepper dropped before expansion animation completed"
                );
            }
        }
    }
}

impl Drop for ExpansionCompletion {
    fn drop(&mut self) {
        self.fire();
    }
}
