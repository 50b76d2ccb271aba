//! Builder API for stepper construction.
//!
//! Explicit setters win over values loaded through
//! [`StepperBuilder::config`], which in turn win over defaults.

pub mod error;

pub use error::BuildError;

use crate::config::{ResolvedConfig, Size, StepperConfig, Style, Tint};
use crate::core::Limits;
use crate::render::Renderer;
use crate::widget::{downgrade, CartStepper, StepperObserver};
use std::rc::{Rc, Weak};

/// Builder for constructing a [`CartStepper`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use cart_stepper::config::Size;
/// use cart_stepper::render::RecordingRenderer;
/// use cart_stepper::StepperBuilder;
///
/// let (renderer, _log) = RecordingRenderer::new();
/// let stepper = StepperBuilder::new()
///     .renderer(renderer)
///     .maximum_count(3)
///     .size(Size::M)
///     .build()
///     .unwrap();
///
/// assert_eq!(stepper.maximum_count(), 3);
/// assert_eq!(stepper.size(), Size::M);
/// ```
#[derive(Default)]
pub struct StepperBuilder {
    renderer: Option<Box<dyn Renderer>>,
    config: Option<StepperConfig>,
    maximum_count: Option<usize>,
    size: Option<Size>,
    tint: Option<Tint>,
    history_capacity: Option<usize>,
    observer: Option<Weak<dyn StepperObserver>>,
}

impl StepperBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the renderer (required).
    pub fn renderer<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Set an already boxed renderer (required).
    pub fn boxed_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Start from a loaded configuration.
    pub fn config(mut self, config: StepperConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the quantity ceiling. Unbounded if never set.
    pub fn maximum_count(mut self, maximum_count: usize) -> Self {
        self.maximum_count = Some(maximum_count);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the size from its name. Unknown names fall back to `L`.
    pub fn size_str(self, name: &str) -> Self {
        self.size(Size::parse_lossy(name))
    }

    pub fn tint(mut self, tint: Tint) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(capacity);
        self
    }

    /// Register the observer. Only a weak handle is kept.
    pub fn observer<O: StepperObserver + 'static>(mut self, observer: &Rc<O>) -> Self {
        self.observer = Some(downgrade(observer));
        self
    }

    /// Build the stepper.
    /// Returns an error if the renderer is missing or the configuration is
    /// rejected.
    pub fn build(self) -> Result<CartStepper, BuildError> {
        let renderer = self.renderer.ok_or(BuildError::MissingRenderer)?;

        let base = match &self.config {
            Some(config) => config.resolve()?,
            None => ResolvedConfig::default(),
        };

        let resolved = ResolvedConfig {
            limits: self.maximum_count.map(Limits::new).unwrap_or(base.limits),
            style: Style::new(
                self.size.unwrap_or(base.style.size),
                self.tint.unwrap_or(base.style.tint),
            ),
            history_capacity: self.history_capacity.unwrap_or(base.history_capacity),
        };

        Ok(CartStepper::new(renderer, resolved, self.observer))
    }
}
