//! Observer contract and the non-owning handle the stepper keeps.

use super::{CartStepper, WidgetId};
use crate::core::QuantityChange;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Receives stepper notifications.
///
/// Every method has an empty default so observers only implement what they
/// care about. The stepper holds its observer weakly and never keeps it
/// alive.
pub trait StepperObserver {
    /// A quantity change was committed. Fires once per committed increment
    /// or decrement, including the implicit increment of a primary tap.
    fn on_quantity_changed(&self, _stepper: &CartStepper, _change: QuantityChange) {}

    /// An increment was refused because the maximum was reached. `change`
    /// is the change that would have happened.
    fn on_change_prevented(&self, _stepper: &CartStepper, _change: QuantityChange) {}

    /// The stepper finished collapsing or expanding.
    fn on_expansion_changed(&self, _stepper: &CartStepper, _expanded: bool) {}
}

/// Weak slot for the single observer.
#[derive(Default)]
pub(crate) struct Notifier {
    observer: Option<Weak<dyn StepperObserver>>,
}

impl Notifier {
    pub(crate) fn new(observer: Option<Weak<dyn StepperObserver>>) -> Self {
        Self { observer }
    }

    pub(crate) fn set(&mut self, observer: Weak<dyn StepperObserver>) {
        self.observer = Some(observer);
    }

    pub(crate) fn clear(&mut self) {
        self.observer = None;
    }

    /// The observer, if one is registered and still alive.
    pub(crate) fn observer(&self) -> Option<Rc<dyn StepperObserver>> {
        let observer = self.observer.as_ref()?.upgrade();
        if observer.is_none() {
            tracing::trace!("stepper observer dropped, skipping notification");
        }
        observer
    }
}

/// Downgrade a shared observer into the handle the stepper stores.
pub(crate) fn downgrade<O: StepperObserver + 'static>(
    observer: &Rc<O>,
) -> Weak<dyn StepperObserver> {
    let weak: Weak<O> = Rc::downgrade(observer);
    weak
}

/// A notification as recorded by [`EventLog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepperEvent {
    QuantityChanged(QuantityChange),
    ChangePrevented(QuantityChange),
    ExpansionChanged(bool),
}

/// Observer that records every notification with the id of the stepper
/// that sent it.
///
/// # Example
///
/// ```rust
/// use cart_stepper::core::QuantityChange;
/// use cart_stepper::render::RecordingRenderer;
/// use cart_stepper::widget::{EventLog, StepperEvent};
/// use cart_stepper::StepperBuilder;
/// use std::rc::Rc;
///
/// let log = Rc::new(EventLog::default());
/// let (renderer, _) = RecordingRenderer::immediate();
/// let mut stepper = StepperBuilder::new()
///     .renderer(renderer)
///     .observer(&log)
///     .build()
///     .unwrap();
///
/// stepper.primary_tap();
///
/// assert_eq!(
///     log.events(),
///     vec![
///         StepperEvent::QuantityChanged(QuantityChange::Increase(1)),
///         StepperEvent::ExpansionChanged(true),
///     ]
/// );
/// ```
#[derive(Default)]
pub struct EventLog {
    entries: RefCell<Vec<(WidgetId, StepperEvent)>>,
}

impl EventLog {
    pub fn events(&self) -> Vec<StepperEvent> {
        self.entries.borrow().iter().map(|(_, event)| *event).collect()
    }

    /// Events sent by one stepper.
    pub fn events_for(&self, id: WidgetId) -> Vec<StepperEvent> {
        self.entries
            .borrow()
            .iter()
            .filter(|(sender, _)| *sender == id)
            .map(|(_, event)| *event)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn push(&self, stepper: &CartStepper, event: StepperEvent) {
        self.entries.borrow_mut().push((stepper.id(), event));
    }
}

impl StepperObserver for EventLog {
    fn on_quantity_changed(&self, stepper: &CartStepper, change: QuantityChange) {
        self.push(stepper, StepperEvent::QuantityChanged(change));
    }

    fn on_change_prevented(&self, stepper: &CartStepper, change: QuantityChange) {
        self.push(stepper, StepperEvent::ChangePrevented(change));
    }

    fn on_expansion_changed(&self, stepper: &CartStepper, expanded: bool) {
        self.push(stepper, StepperEvent::ExpansionChanged(expanded));
    }
}
