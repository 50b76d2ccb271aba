//! Pure transition engine.
//!
//! [`apply`] takes the committed state, an input and the configured limits and
//! returns a [`Step`]: the next state plus everything the widget shell has to
//! do about it, in order. Nothing here touches a renderer or an observer.

use super::state::{Input, QuantityChange, WidgetState};
use serde::{Deserialize, Serialize};

/// Bounds the engine consults at transition time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Limits {
    pub maximum_count: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Limits {
    pub fn new(maximum_count: usize) -> Self {
        Self { maximum_count }
    }

    /// No practical ceiling: the largest representable quantity.
    pub fn unbounded() -> Self {
        Self {
            maximum_count: usize::MAX,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.maximum_count == usize::MAX
    }

    /// Whether one more item fits on top of `quantity`.
    pub fn allows_increment(&self, quantity: usize) -> bool {
        quantity < self.maximum_count
    }
}

/// Direction of the rolling-number animation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RollDirection {
    Up,
    Down,
}

impl From<QuantityChange> for RollDirection {
    fn from(change: QuantityChange) -> Self {
        match change {
            QuantityChange::Increase(_) => Self::Up,
            QuantityChange::Decrease(_) => Self::Down,
        }
    }
}

/// A render instruction produced by the engine, executed by the shell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Directive {
    /// Start the collapse/expand animation. The expansion notification is
    /// owed once that animation completes.
    AnimateExpansion(bool),
    /// Show this quantity.
    RenderQuantity(usize),
    Roll(RollDirection),
    IncrementEnabled(bool),
    BackgroundActive(bool),
}

/// Synchronous notification owed to the observer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Notice {
    Changed(QuantityChange),
    Prevented(QuantityChange),
}

/// Outcome of applying one input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Step {
    pub input: Input,
    pub from: WidgetState,
    pub to: WidgetState,
    pub directives: Vec<Directive>,
    pub notice: Option<Notice>,
}

impl Step {
    fn unchanged(input: Input, state: WidgetState) -> Self {
        Self {
            input,
            from: state,
            to: state,
            directives: Vec::new(),
            notice: None,
        }
    }

    /// True when the committed state differs from the starting one.
    pub fn is_committed(&self) -> bool {
        self.from != self.to
    }

    /// True when there is nothing to render and nobody to tell.
    pub fn is_noop(&self) -> bool {
        !self.is_committed() && self.directives.is_empty() && self.notice.is_none()
    }

    /// The expansion flag this step animates towards, if it animates one.
    pub fn expansion(&self) -> Option<bool> {
        self.directives.iter().find_map(|d| match d {
            Directive::AnimateExpansion(expanded) => Some(*expanded),
            _ => None,
        })
    }
}

/// Apply one input to `state` under `limits`.
///
/// # Example
///
/// ```rust
/// use cart_stepper::core::{engine, Input, Limits, QuantityChange, WidgetState};
/// use cart_stepper::core::engine::Notice;
///
/// let step = engine::apply(&WidgetState::new(), Input::PrimaryTap, &Limits::new(3));
/// assert_eq!(step.to.quantity, 1);
/// assert!(step.to.expanded);
/// assert_eq!(step.notice, Some(Notice::Changed(QuantityChange::Increase(1))));
/// assert_eq!(step.expansion(), Some(true));
/// ```
pub fn apply(state: &WidgetState, input: Input, limits: &Limits) -> Step {
    match input {
        Input::PrimaryTap => expand_then_increment(Input::PrimaryTap, *state, limits),
        // Plus is only on screen while expanded.
        Input::Increment if !state.expanded => {
            expand_then_increment(Input::Increment, *state, limits)
        }
        Input::Increment => increment(Input::Increment, *state, *state, Vec::new(), limits),
        Input::Decrement => decrement(*state, limits),
        Input::Reset => floor(Input::Reset, *state, limits),
        Input::Reconfigure => reconfigure(*state, limits),
    }
}

fn expand_then_increment(input: Input, state: WidgetState, limits: &Limits) -> Step {
    let mut base = state;
    let mut directives = Vec::new();

    if !state.expanded {
        base.expanded = true;
        directives.push(Directive::AnimateExpansion(true));
        directives.push(Directive::BackgroundActive(base.shows_badge()));
    }

    increment(input, state, base, directives, limits)
}

/// Refresh the badge after a quantity change that leaves the stepper collapsed.
fn refresh_badge(to: WidgetState, directives: &mut Vec<Directive>) {
    if !to.expanded {
        directives.push(Directive::BackgroundActive(to.shows_badge()));
    }
}

/// Increment on top of `base`; `from` is the state before the whole input.
fn increment(
    input: Input,
    from: WidgetState,
    base: WidgetState,
    mut directives: Vec<Directive>,
    limits: &Limits,
) -> Step {
    let attempted = base.quantity.saturating_add(1);

    if !limits.allows_increment(base.quantity) {
        return Step {
            input,
            from,
            to: base,
            directives,
            notice: Some(Notice::Prevented(QuantityChange::Increase(attempted))),
        };
    }

    let change = QuantityChange::Increase(attempted);
    directives.push(Directive::RenderQuantity(attempted));
    directives.push(Directive::Roll(change.into()));
    if attempted == limits.maximum_count {
        directives.push(Directive::IncrementEnabled(false));
    }
    let to = WidgetState {
        quantity: attempted,
        ..base
    };
    refresh_badge(to, &mut directives);

    Step {
        input,
        from,
        to,
        directives,
        notice: Some(Notice::Changed(change)),
    }
}

fn decrement(state: WidgetState, limits: &Limits) -> Step {
    if state.quantity <= 1 {
        return floor(Input::Decrement, state, limits);
    }

    let quantity = state.quantity - 1;
    let change = QuantityChange::Decrease(quantity);
    let mut directives = vec![
        Directive::RenderQuantity(quantity),
        Directive::Roll(change.into()),
    ];
    if limits.allows_increment(quantity) {
        directives.push(Directive::IncrementEnabled(true));
    }
    let to = WidgetState { quantity, ..state };
    refresh_badge(to, &mut directives);

    Step {
        input: Input::Decrement,
        from: state,
        to,
        directives,
        notice: Some(Notice::Changed(change)),
    }
}

/// Drop to zero and collapse. Shared by the decrement floor and reset.
fn floor(input: Input, state: WidgetState, limits: &Limits) -> Step {
    if state.is_initial() {
        return Step::unchanged(input, state);
    }

    let to = WidgetState::new();
    let mut directives = Vec::new();
    let mut notice = None;

    if state.quantity != 0 {
        directives.push(Directive::RenderQuantity(0));
        if limits.allows_increment(0) {
            directives.push(Directive::IncrementEnabled(true));
        }
        notice = Some(Notice::Changed(QuantityChange::Decrease(0)));
    }
    if state.expanded {
        directives.push(Directive::AnimateExpansion(false));
        directives.push(Directive::BackgroundActive(to.shows_badge()));
    }

    Step {
        input,
        from: state,
        to,
        directives,
        notice,
    }
}

fn reconfigure(state: WidgetState, limits: &Limits) -> Step {
    let mut step = if state.quantity <= limits.maximum_count {
        Step::unchanged(Input::Reconfigure, state)
    } else if limits.maximum_count == 0 {
        floor(Input::Reconfigure, state, limits)
    } else {
        let quantity = limits.maximum_count;
        let change = QuantityChange::Decrease(quantity);
        let to = WidgetState { quantity, ..state };
        let mut directives = vec![
            Directive::RenderQuantity(quantity),
            Directive::Roll(change.into()),
        ];
        refresh_badge(to, &mut directives);
        Step {
            input: Input::Reconfigure,
            from: state,
            to,
            directives,
            notice: Some(Notice::Changed(change)),
        }
    };

    step.directives.push(Directive::IncrementEnabled(
        limits.allows_increment(step.to.quantity),
    ));
    step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(quantity: usize, expanded: bool) -> WidgetState {
        WidgetState { quantity, expanded }
    }

    #[test]
    fn primary_tap_expands_and_increments() {
        let step = apply(&WidgetState::new(), Input::PrimaryTap, &Limits::unbounded());

        assert_eq!(step.to, state(1, true));
        assert_eq!(
            step.notice,
            Some(Notice::Changed(QuantityChange::Increase(1)))
        );
        assert_eq!(
            step.directives,
            vec![
                Directive::AnimateExpansion(true),
                Directive::BackgroundActive(false),
                Directive::RenderQuantity(1),
                Directive::Roll(RollDirection::Up),
            ]
        );
    }

    #[test]
    fn primary_tap_when_expanded_is_a_plain_increment() {
        let step = apply(&state(2, true), Input::PrimaryTap, &Limits::unbounded());

        assert_eq!(step.to, state(3, true));
        assert_eq!(step.expansion(), None);
    }

    #[test]
    fn primary_tap_with_zero_maximum_expands_but_prevents() {
        let step = apply(&WidgetState::new(), Input::PrimaryTap, &Limits::new(0));

        assert_eq!(step.to, state(0, true));
        assert_eq!(step.expansion(), Some(true));
        assert_eq!(
            step.notice,
            Some(Notice::Prevented(QuantityChange::Increase(1)))
        );
    }

    #[test]
    fn increment_while_collapsed_expands_first() {
        let step = apply(&WidgetState::new(), Input::Increment, &Limits::new(1));

        assert_eq!(step.input, Input::Increment);
        assert_eq!(step.to, state(1, true));
        assert_eq!(step.expansion(), Some(true));
        assert_eq!(
            step.notice,
            Some(Notice::Changed(QuantityChange::Increase(1)))
        );
        assert_eq!(
            step.directives,
            vec![
                Directive::AnimateExpansion(true),
                Directive::BackgroundActive(false),
                Directive::RenderQuantity(1),
                Directive::Roll(RollDirection::Up),
                Directive::IncrementEnabled(false),
            ]
        );
    }

    #[test]
    fn increment_while_collapsed_at_zero_maximum_expands_but_prevents() {
        let step = apply(&WidgetState::new(), Input::Increment, &Limits::new(0));

        assert_eq!(step.to, state(0, true));
        assert_eq!(
            step.notice,
            Some(Notice::Prevented(QuantityChange::Increase(1)))
        );
    }

    #[test]
    fn collapsed_quantity_change_refreshes_badge() {
        let decremented = apply(&state(3, false), Input::Decrement, &Limits::unbounded());
        assert_eq!(decremented.to, state(2, false));
        assert_eq!(
            decremented.directives.last(),
            Some(&Directive::BackgroundActive(true))
        );

        let clamped = apply(&state(3, false), Input::Reconfigure, &Limits::new(2));
        assert!(clamped
            .directives
            .contains(&Directive::BackgroundActive(true)));
    }

    #[test]
    fn expanded_quantity_change_leaves_badge_alone() {
        for input in [Input::Increment, Input::Decrement] {
            let step = apply(&state(2, true), input, &Limits::unbounded());
            assert!(!step
                .directives
                .iter()
                .any(|d| matches!(d, Directive::BackgroundActive(_))));
        }
    }

    #[test]
    fn increment_commits_below_maximum() {
        let step = apply(&state(1, true), Input::Increment, &Limits::new(5));

        assert_eq!(step.to.quantity, 2);
        assert!(!step.directives.contains(&Directive::IncrementEnabled(false)));
    }

    #[test]
    fn increment_reaching_maximum_disables_affordance() {
        let step = apply(&state(2, true), Input::Increment, &Limits::new(3));

        assert_eq!(step.to.quantity, 3);
        assert_eq!(
            step.directives.last(),
            Some(&Directive::IncrementEnabled(false))
        );
    }

    #[test]
    fn increment_at_maximum_is_prevented() {
        let current = state(3, true);
        let step = apply(&current, Input::Increment, &Limits::new(3));

        assert!(!step.is_committed());
        assert_eq!(step.to, current);
        assert!(step.directives.is_empty());
        assert_eq!(
            step.notice,
            Some(Notice::Prevented(QuantityChange::Increase(4)))
        );
    }

    #[test]
    fn decrement_above_one_rolls_down() {
        let step = apply(&state(3, true), Input::Decrement, &Limits::new(3));

        assert_eq!(step.to, state(2, true));
        assert_eq!(
            step.notice,
            Some(Notice::Changed(QuantityChange::Decrease(2)))
        );
        assert_eq!(
            step.directives,
            vec![
                Directive::RenderQuantity(2),
                Directive::Roll(RollDirection::Down),
                Directive::IncrementEnabled(true),
            ]
        );
    }

    #[test]
    fn decrement_from_one_collapses_to_zero() {
        let step = apply(&state(1, true), Input::Decrement, &Limits::unbounded());

        assert_eq!(step.to, WidgetState::new());
        assert_eq!(step.expansion(), Some(false));
        assert_eq!(
            step.notice,
            Some(Notice::Changed(QuantityChange::Decrease(0)))
        );
    }

    #[test]
    fn decrement_when_initial_is_noop() {
        let step = apply(&WidgetState::new(), Input::Decrement, &Limits::unbounded());

        assert!(step.is_noop());
    }

    #[test]
    fn decrement_expanded_at_zero_only_collapses() {
        let step = apply(&state(0, true), Input::Decrement, &Limits::new(0));

        assert_eq!(step.to, WidgetState::new());
        assert_eq!(step.expansion(), Some(false));
        assert_eq!(step.notice, None);
    }

    #[test]
    fn reset_uses_floor_path() {
        let step = apply(&state(4, true), Input::Reset, &Limits::unbounded());

        assert_eq!(step.input, Input::Reset);
        assert_eq!(step.to, WidgetState::new());
        assert_eq!(
            step.notice,
            Some(Notice::Changed(QuantityChange::Decrease(0)))
        );

        let again = apply(&step.to, Input::Reset, &Limits::unbounded());
        assert!(again.is_noop());
    }

    #[test]
    fn lowering_maximum_clamps_quantity() {
        let step = apply(&state(5, true), Input::Reconfigure, &Limits::new(2));

        assert_eq!(step.to, state(2, true));
        assert_eq!(
            step.notice,
            Some(Notice::Changed(QuantityChange::Decrease(2)))
        );
        assert_eq!(
            step.directives.last(),
            Some(&Directive::IncrementEnabled(false))
        );
    }

    #[test]
    fn lowering_maximum_to_zero_collapses() {
        let step = apply(&state(5, true), Input::Reconfigure, &Limits::new(0));

        assert_eq!(step.to, WidgetState::new());
        assert_eq!(step.expansion(), Some(false));
        assert!(!step.directives.contains(&Directive::IncrementEnabled(true)));
        assert_eq!(
            step.directives.last(),
            Some(&Directive::IncrementEnabled(false))
        );
    }

    #[test]
    fn raising_maximum_only_refreshes_affordance() {
        let step = apply(&state(3, true), Input::Reconfigure, &Limits::new(10));

        assert!(!step.is_committed());
        assert_eq!(step.notice, None);
        assert_eq!(step.directives, vec![Directive::IncrementEnabled(true)]);
    }

    #[test]
    fn unbounded_limits_allow_large_quantities() {
        let limits = Limits::unbounded();
        assert!(limits.is_unbounded());
        assert!(limits.allows_increment(usize::MAX - 1));
        assert!(!limits.allows_increment(usize::MAX));
    }
}
