//! The stepper widget and its observer contract.
//!
//! This is the imperative shell around [`crate::core`]: it owns the state
//! store, runs each [`Step`](crate::core::Step) the engine produces against
//! the renderer and forwards notifications to the observer.

mod observer;
mod stepper;

pub(crate) use observer::downgrade;
pub use observer::{EventLog, StepperEvent, StepperObserver};
pub use stepper::CartStepper;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of one stepper, for observers watching several.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(Uuid);

impl WidgetId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
