//! Stepper state, inputs and quantity changes.
//!
//! These are plain values: the engine takes them in and hands new ones back,
//! and nothing in this module has side effects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two composite states of the stepper.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// A single cart icon is shown; the counter row is hidden.
    Collapsed,
    /// The minus/count/plus row is shown.
    Expanded,
}

impl Phase {
    /// Stable name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Collapsed => "Collapsed",
            Self::Expanded => "Expanded",
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded)
    }
}

impl From<bool> for Phase {
    fn from(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Committed state of one stepper.
///
/// `quantity` never exceeds the configured maximum; the engine is the only
/// code that produces new values of this type after construction.
///
/// # Example
///
/// ```rust
/// use cart_stepper::core::{Phase, WidgetState};
///
/// let state = WidgetState::new();
/// assert_eq!(state.quantity, 0);
/// assert_eq!(state.phase(), Phase::Collapsed);
/// assert!(!state.is_active());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct WidgetState {
    pub quantity: usize,
    pub expanded: bool,
}

impl WidgetState {
    /// Initial state: collapsed, nothing in the cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        Phase::from(self.expanded)
    }

    /// True while the quantity is non-zero.
    pub fn is_active(&self) -> bool {
        self.quantity > 0
    }

    /// The collapsed icon shows the quantity baked in instead of the plain
    /// cart glyph when the stepper is active but collapsed.
    pub fn shows_badge(&self) -> bool {
        self.is_active() && !self.expanded
    }

    /// True when nothing would change by resetting.
    pub fn is_initial(&self) -> bool {
        self.quantity == 0 && !self.expanded
    }
}

/// Input events the engine consumes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Input {
    /// Tap on the collapsed cart icon.
    PrimaryTap,
    /// Tap on plus.
    Increment,
    /// Tap on minus.
    Decrement,
    /// Owner-driven return to the initial state.
    Reset,
    /// The owner changed the maximum bound.
    Reconfigure,
}

impl Input {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrimaryTap => "PrimaryTap",
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
            Self::Reset => "Reset",
            Self::Reconfigure => "Reconfigure",
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A quantity change, carrying the quantity after the change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum QuantityChange {
    Increase(usize),
    Decrease(usize),
}

impl QuantityChange {
    /// The quantity this change leads to.
    pub fn quantity(&self) -> usize {
        match self {
            Self::Increase(n) | Self::Decrease(n) => *n,
        }
    }

    pub fn is_increase(&self) -> bool {
        matches!(self, Self::Increase(_))
    }
}

impl fmt::Display for QuantityChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increase(n) => write!(f, "+{n}"),
            Self::Decrease(n) => write!(f, "-{n}"),
        }
    }
}
