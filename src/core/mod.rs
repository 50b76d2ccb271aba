//! Core stepper types and transition logic.
//!
//! This module contains the pure functional core of the stepper:
//! - State, inputs and quantity changes
//! - The transition engine that maps (state, input, limits) to a [`engine::Step`]
//! - Bounded history of committed transitions
//!
//! All logic in this module is pure (no side effects). The widget shell in
//! [`crate::widget`] executes the steps it produces.

pub mod engine;
mod history;
mod state;

pub use engine::{Directive, Limits, Notice, RollDirection, Step};
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_CAPACITY};
pub use state::{Input, Phase, QuantityChange, WidgetState};
