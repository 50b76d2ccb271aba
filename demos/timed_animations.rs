//! Timed Animations
//!
//! This example runs expansion animations on a timer, the way a real toolkit
//! would, and shows that the expansion notification only arrives once the
//! animation has finished.
//!
//! Key concepts:
//! - Handing an `ExpansionCompletion` to an asynchronous task
//! - Delivering completions from the host's event loop
//! - Quantity notifications arriving before the expansion notification
//!
//! Run with: cargo run --example timed_animations

use cart_stepper::widget::{EventLog, StepperEvent};
use cart_stepper::{ExpansionCompletion, Renderer, RollDirection, StepperBuilder};
use std::rc::Rc;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

const ANIMATION: Duration = Duration::from_millis(300);
const FRAME: Duration = Duration::from_millis(16);

// Renderer whose expansion animation completes after a fixed delay
struct TimedRenderer;

impl Renderer for TimedRenderer {
    fn render_quantity(&mut self, text: &str) {
        info!(text, "render quantity");
    }

    fn animate_roll(&mut self, direction: RollDirection) {
        info!(?direction, "roll");
    }

    fn animate_expansion(&mut self, expanded: bool, completion: ExpansionCompletion) {
        info!(expanded, "expansion animation started");
        tokio::spawn(async move {
            sleep(ANIMATION).await;
            completion.complete();
        });
    }

    fn set_increment_enabled(&mut self, enabled: bool) {
        info!(enabled, "plus affordance");
    }

    fn set_background_active(&mut self, active: bool) {
        info!(active, "badge background");
    }
}

fn describe(events: &[StepperEvent]) {
    for event in events {
        match event {
            StepperEvent::QuantityChanged(change) => println!("  quantity changed {}", change),
            StepperEvent::ChangePrevented(change) => println!("  change prevented {}", change),
            StepperEvent::ExpansionChanged(expanded) => println!("  expanded = {}", expanded),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Timed Animations ===\n");

    let events = Rc::new(EventLog::default());
    let mut stepper = StepperBuilder::new()
        .renderer(TimedRenderer)
        .maximum_count(5)
        .observer(&events)
        .build()?;

    stepper.primary_tap();
    println!("Right after the tap:");
    describe(&events.events());

    // Host event loop: one frame at a time until the animation lands.
    let started = Instant::now();
    let mut delivered = 0;
    while delivered == 0 {
        sleep(FRAME).await;
        delivered = stepper.deliver_completions();
    }
    println!("\nAfter {} ms:", started.elapsed().as_millis());
    describe(&events.events());

    events.clear();
    stepper.decrement();
    stepper.primary_tap();
    println!("\nCollapse and re-expand before either animation finishes:");
    describe(&events.events());

    let mut remaining = 2;
    while remaining > 0 {
        sleep(FRAME).await;
        remaining -= stepper.deliver_completions().min(remaining);
    }
    println!("\nOnce both animations finished:");
    describe(&events.events());

    println!("\n=== Complete ===");
    Ok(())
}
