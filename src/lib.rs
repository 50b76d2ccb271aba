//! Cart Stepper: a headless add-to-cart stepper control
//!
//! The stepper is a single cart icon that expands into a minus/count/plus
//! counter. It tracks a quantity bounded by a configurable maximum and tells
//! an observer about every change.
//!
//! The crate follows a "pure core, imperative shell" split. The transition
//! engine in [`core`] is a set of pure functions from (state, input, limits)
//! to a [`core::Step`]. The [`widget::CartStepper`] shell commits each step,
//! drives a [`render::Renderer`] supplied by the host toolkit and notifies a
//! weakly held [`widget::StepperObserver`].
//!
//! # Core Concepts
//!
//! - **State**: quantity plus collapsed/expanded flag, see [`core::WidgetState`]
//! - **Engine**: pure transitions for primary tap, plus and minus
//! - **Renderer**: drawing and animation, owned by the host
//! - **Observer**: quantity changes, prevented changes and expansion changes
//!
//! # Example
//!
//! ```rust
//! use cart_stepper::core::QuantityChange;
//! use cart_stepper::render::RecordingRenderer;
//! use cart_stepper::widget::{EventLog, StepperEvent};
//! use cart_stepper::StepperBuilder;
//! use std::rc::Rc;
//!
//! let events = Rc::new(EventLog::default());
//! let (renderer, animations) = RecordingRenderer::new();
//! let mut stepper = StepperBuilder::new()
//!     .renderer(renderer)
//!     .maximum_count(2)
//!     .observer(&events)
//!     .build()
//!     .unwrap();
//!
//! stepper.primary_tap();
//! stepper.increment();
//! stepper.increment();
//! assert_eq!(stepper.quantity(), 2);
//!
//! // The expansion notification waits for the animation.
//! animations.finish_animations();
//! stepper.deliver_completions();
//!
//! assert_eq!(
//!     events.events(),
//!     vec![
//!         StepperEvent::QuantityChanged(QuantityChange::Increase(1)),
//!         StepperEvent::QuantityChanged(QuantityChange::Increase(2)),
//!         StepperEvent::ChangePrevented(QuantityChange::Increase(3)),
//!         StepperEvent::ExpansionChanged(true),
//!     ]
//! );
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod render;
pub mod widget;

// Re-export commonly used types
pub use builder::{BuildError, StepperBuilder};
pub use config::{Size, StepperConfig, Tint};
pub use crate::core::{Input, Phase, QuantityChange, WidgetState};
pub use render::{ExpansionCompletion, Renderer, RollDirection};
pub use widget::{CartStepper, StepperObserver, WidgetId};
