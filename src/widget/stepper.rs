//! The stepper widget: state store plus the shell that executes engine steps.

use super::observer::{downgrade, Notifier, StepperObserver};
use super::WidgetId;
use crate::config::{ResolvedConfig, Size, Style, Tint};
use crate::core::{
    engine, Directive, Input, Limits, Notice, Phase, StateHistory, StateTransition, Step,
    WidgetState,
};
use crate::render::{ExpansionCompletion, Renderer};
use chrono::Utc;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::debug;

/// An add-to-cart stepper.
///
/// Starts collapsed at quantity zero. Inputs are applied synchronously: the
/// state is committed, the renderer driven and quantity notifications sent
/// before the input method returns. Expansion notifications are sent once
/// the renderer completes the expansion animation; completions that are
/// ready are delivered at the end of every input, and the host delivers
/// the rest from its event loop with [`CartStepper::deliver_completions`].
///
/// Build one with [`StepperBuilder`](crate::StepperBuilder).
pub struct CartStepper {
    id: WidgetId,
    state: WidgetState,
    limits: Limits,
    style: Style,
    history: StateHistory,
    renderer: Box<dyn Renderer>,
    notifier: Notifier,
    completion_tx: Sender<bool>,
    completion_rx: Receiver<bool>,
}

impl CartStepper {
    pub(crate) fn new(
        renderer: Box<dyn Renderer>,
        config: ResolvedConfig,
        observer: Option<Weak<dyn StepperObserver>>,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel();
        let mut stepper = Self {
            id: WidgetId::new(),
            state: WidgetState::new(),
            limits: config.limits,
            style: config.style,
            history: StateHistory::with_capacity(config.history_capacity),
            renderer,
            notifier: Notifier::new(observer),
            completion_tx,
            completion_rx,
        };
        stepper.render_all();
        debug!(
            id = %stepper.id,
            maximum = stepper.limits.maximum_count,
            size = %stepper.style.size,
            "stepper created"
        );
        stepper
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Current committed quantity.
    pub fn quantity(&self) -> usize {
        self.state.quantity
    }

    /// True while the quantity is non-zero.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_expanded(&self) -> bool {
        self.state.expanded
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn maximum_count(&self) -> usize {
        self.limits.maximum_count
    }

    /// Whether plus would currently be accepted.
    pub fn is_increment_enabled(&self) -> bool {
        self.limits.allows_increment(self.state.quantity)
    }

    pub fn size(&self) -> Size {
        self.style.size
    }

    pub fn tint(&self) -> Tint {
        self.style.tint
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Tap on the collapsed cart icon: expand, then increment.
    pub fn primary_tap(&mut self) {
        self.dispatch(Input::PrimaryTap);
    }

    /// Tap on plus. While collapsed this expands first, like a primary tap.
    pub fn increment(&mut self) {
        self.dispatch(Input::Increment);
    }

    /// Tap on minus. At one or below this empties and collapses the stepper.
    pub fn decrement(&mut self) {
        self.dispatch(Input::Decrement);
    }

    /// Return to quantity zero, collapsed. Does nothing if already there.
    pub fn reset(&mut self) {
        self.dispatch(Input::Reset);
    }

    /// Change the ceiling. A quantity above the new maximum is clamped down.
    pub fn set_maximum_count(&mut self, maximum_count: usize) {
        self.limits = Limits::new(maximum_count);
        self.dispatch(Input::Reconfigure);
    }

    pub fn set_size(&mut self, size: Size) {
        self.restyle(Style::new(size, self.style.tint));
    }

    /// Set the size from its name. Unknown names fall back to `L`.
    pub fn set_size_str(&mut self, name: &str) {
        self.set_size(Size::parse_lossy(name));
    }

    pub fn set_tint(&mut self, tint: Tint) {
        self.restyle(Style::new(self.style.size, tint));
    }

    /// Register the observer. The stepper only keeps a weak handle to it.
    pub fn set_observer<O: StepperObserver + 'static>(&mut self, observer: &Rc<O>) {
        self.notifier.set(downgrade(observer));
    }

    pub fn clear_observer(&mut self) {
        self.notifier.clear();
    }

    /// Apply one input.
    pub fn dispatch(&mut self, input: Input) {
        let step = engine::apply(&self.state, input, &self.limits);
        self.execute(step);
        self.deliver_completions();
    }

    /// Deliver expansion notifications for every animation that finished
    /// since the last call. Returns how many were delivered.
    pub fn deliver_completions(&self) -> usize {
        let finished: Vec<bool> = self.completion_rx.try_iter().collect();
        for &expanded in &finished {
            debug!(id = %self.id, expanded, "expansion animation completed");
            if let Some(observer) = self.notifier.observer() {
                observer.on_expansion_changed(self, expanded);
            }
        }
        finished.len()
    }

    fn execute(&mut self, step: Step) {
        if step.is_noop() {
            debug!(id = %self.id, input = %step.input, "input ignored, nothing to change");
            return;
        }

        if step.is_committed() {
            debug!(
                id = %self.id,
                input = %step.input,
                from = step.from.quantity,
                to = step.to.quantity,
                phase = %step.to.phase(),
                "transition committed"
            );
            self.history.record(StateTransition {
                from: step.from,
                to: step.to,
                input: step.input,
                timestamp: Utc::now(),
            });
        }
        self.state = step.to;

        for directive in &step.directives {
            self.render(*directive);
        }

        match step.notice {
            Some(Notice::Changed(change)) => {
                if let Some(observer) = self.notifier.observer() {
                    observer.on_quantity_changed(self, change);
                }
            }
            Some(Notice::Prevented(change)) => {
                debug!(
                    id = %self.id,
                    %change,
                    maximum = self.limits.maximum_count,
                    "change prevented by maximum"
                );
                if let Some(observer) = self.notifier.observer() {
                    observer.on_change_prevented(self, change);
                }
            }
            None => {}
        }
    }

    fn render(&mut self, directive: Directive) {
        match directive {
            Directive::AnimateExpansion(expanded) => {
                let completion = ExpansionCompletion::new(expanded, self.completion_tx.clone());
                self.renderer.animate_expansion(expanded, completion);
            }
            Directive::RenderQuantity(quantity) => {
                self.renderer.render_quantity(&quantity.to_string());
            }
            Directive::Roll(direction) => self.renderer.animate_roll(direction),
            Directive::IncrementEnabled(enabled) => self.renderer.set_increment_enabled(enabled),
            Directive::BackgroundActive(active) => self.renderer.set_background_active(active),
        }
    }

    fn restyle(&mut self, style: Style) {
        if style == self.style {
            return;
        }
        self.style = style;
        self.renderer.apply_style(&self.style);
    }

    fn render_all(&mut self) {
        self.renderer.apply_style(&self.style);
        self.renderer
            .render_quantity(&self.state.quantity.to_string());
        self.renderer
            .set_increment_enabled(self.limits.allows_increment(self.state.quantity));
        self.renderer.set_background_active(self.state.shows_badge());
    }
}

impl fmt::Debug for CartStepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStepper")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("limits", &self.limits)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QuantityChange;
    use crate::render::{RecordingRenderer, RenderCall, RenderLog, RollDirection};
    use crate::widget::{EventLog, StepperEvent};

    fn stepper(maximum_count: usize) -> (CartStepper, RenderLog, Rc<EventLog>) {
        let (renderer, render_log) = RecordingRenderer::new();
        let events = Rc::new(EventLog::default());
        let config = ResolvedConfig {
            limits: Limits::new(maximum_count),
            ..ResolvedConfig::default()
        };
        let mut stepper = CartStepper::new(Box::new(renderer), config, None);
        stepper.set_observer(&events);
        render_log.clear();
        (stepper, render_log, events)
    }

    #[test]
    fn construction_renders_initial_state() {
        let (renderer, log) = RecordingRenderer::new();
        let stepper = CartStepper::new(Box::new(renderer), ResolvedConfig::default(), None);

        assert_eq!(stepper.quantity(), 0);
        assert_eq!(stepper.phase(), Phase::Collapsed);
        assert_eq!(
            log.calls(),
            vec![
                RenderCall::Style(Style::default()),
                RenderCall::Quantity("0".to_string()),
                RenderCall::IncrementEnabled(true),
                RenderCall::BackgroundActive(false),
            ]
        );
    }

    #[test]
    fn primary_tap_notifies_quantity_before_expansion() {
        let (mut stepper, render_log, events) = stepper(5);

        stepper.primary_tap();

        assert_eq!(stepper.quantity(), 1);
        assert!(stepper.is_expanded());
        assert_eq!(
            events.events(),
            vec![StepperEvent::QuantityChanged(QuantityChange::Increase(1))]
        );

        render_log.finish_animations();
        assert_eq!(stepper.deliver_completions(), 1);
        assert_eq!(
            events.events(),
            vec![
                StepperEvent::QuantityChanged(QuantityChange::Increase(1)),
                StepperEvent::ExpansionChanged(true),
            ]
        );
    }

    #[test]
    fn primary_tap_drives_renderer() {
        let (mut stepper, render_log, _) = stepper(5);

        stepper.primary_tap();

        assert_eq!(
            render_log.calls(),
            vec![
                RenderCall::Expansion(true),
                RenderCall::BackgroundActive(false),
                RenderCall::Quantity("1".to_string()),
                RenderCall::Roll(RollDirection::Up),
            ]
        );
    }

    #[test]
    fn prevented_increment_leaves_state_alone() {
        let (mut stepper, render_log, events) = stepper(1);
        stepper.primary_tap();
        render_log.clear();
        events.clear();

        stepper.increment();

        assert_eq!(stepper.quantity(), 1);
        assert!(render_log.calls().is_empty());
        assert_eq!(
            events.events(),
            vec![StepperEvent::ChangePrevented(QuantityChange::Increase(2))]
        );
    }

    #[test]
    fn decrement_to_zero_collapses_after_animation() {
        let (mut stepper, render_log, events) = stepper(5);
        stepper.primary_tap();
        render_log.finish_animations();
        stepper.deliver_completions();
        events.clear();

        stepper.decrement();

        assert_eq!(stepper.state(), WidgetState::new());
        assert_eq!(
            events.events(),
            vec![StepperEvent::QuantityChanged(QuantityChange::Decrease(0))]
        );

        render_log.finish_animations();
        stepper.deliver_completions();
        assert_eq!(
            events.events(),
            vec![
                StepperEvent::QuantityChanged(QuantityChange::Decrease(0)),
                StepperEvent::ExpansionChanged(false),
            ]
        );
    }

    #[test]
    fn decrement_when_collapsed_at_zero_is_silent() {
        let (mut stepper, render_log, events) = stepper(5);

        stepper.decrement();

        assert!(render_log.calls().is_empty());
        assert!(events.is_empty());
        assert!(stepper.history().is_empty());
    }

    #[test]
    fn history_records_committed_transitions_only() {
        let (mut stepper, _, _) = stepper(1);

        stepper.primary_tap();
        stepper.increment();
        stepper.decrement();

        let inputs: Vec<Input> = stepper.history().transitions().map(|t| t.input).collect();
        assert_eq!(inputs, vec![Input::PrimaryTap, Input::Decrement]);
    }

    #[test]
    fn restyle_only_when_style_changes() {
        let (mut stepper, render_log, _) = stepper(5);

        stepper.set_size(Size::L);
        assert!(render_log.calls().is_empty());

        stepper.set_size_str("s");
        stepper.set_tint(Tint::new(1, 2, 3));

        assert_eq!(
            render_log.calls(),
            vec![
                RenderCall::Style(Style::new(Size::S, Tint::default())),
                RenderCall::Style(Style::new(Size::S, Tint::new(1, 2, 3))),
            ]
        );
        assert_eq!(stepper.size(), Size::S);
    }

    #[test]
    fn cleared_observer_hears_nothing() {
        let (mut stepper, _, events) = stepper(5);
        stepper.clear_observer();

        stepper.primary_tap();

        assert!(events.is_empty());
    }
}
