//! Walkthrough
//!
//! This example drives a stepper through a short shopping session and prints
//! every renderer call and observer notification.
//!
//! Key concepts:
//! - A host renderer implementing the `Renderer` trait
//! - An observer held weakly by the stepper
//! - Maximum count and the prevented-change notification
//! - Collapsing back to the cart icon at zero
//!
//! Run with: RUST_LOG=cart_stepper=debug cargo run --example walkthrough

use cart_stepper::config::Style;
use cart_stepper::{
    CartStepper, ExpansionCompletion, QuantityChange, Renderer, RollDirection, StepperBuilder,
    StepperObserver,
};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

// Renderer that prints instead of drawing
struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn apply_style(&mut self, style: &Style) {
        println!(
            "  [render] style size={} label={}pt tint={}",
            style.size,
            style.metrics.label_font.points,
            style.tint.to_hex()
        );
    }

    fn render_quantity(&mut self, text: &str) {
        println!("  [render] quantity \"{}\"", text);
    }

    fn animate_roll(&mut self, direction: RollDirection) {
        println!("  [render] roll {:?}", direction);
    }

    fn animate_expansion(&mut self, expanded: bool, completion: ExpansionCompletion) {
        let label = if expanded { "expand" } else { "collapse" };
        println!("  [render] {} animation (finishes at once)", label);
        completion.complete();
    }

    fn set_increment_enabled(&mut self, enabled: bool) {
        println!("  [render] plus enabled = {}", enabled);
    }

    fn set_background_active(&mut self, active: bool) {
        println!("  [render] badge background = {}", active);
    }
}

// Observer standing in for the host's cart model
struct CartLine {
    product: &'static str,
}

impl StepperObserver for CartLine {
    fn on_quantity_changed(&self, stepper: &CartStepper, change: QuantityChange) {
        println!(
            "  [cart] {} quantity {} (now {})",
            self.product,
            change,
            stepper.quantity()
        );
    }

    fn on_change_prevented(&self, stepper: &CartStepper, change: QuantityChange) {
        println!(
            "  [cart] {} cannot go to {}: limit is {}",
            self.product,
            change.quantity(),
            stepper.maximum_count()
        );
    }

    fn on_expansion_changed(&self, _stepper: &CartStepper, expanded: bool) {
        println!(
            "  [cart] {} stepper {}",
            self.product,
            if expanded { "expanded" } else { "collapsed" }
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Cart Stepper Walkthrough ===\n");

    let line = Rc::new(CartLine {
        product: "espresso beans",
    });

    println!("Building stepper (maximum 3, size M):");
    let mut stepper = StepperBuilder::new()
        .renderer(ConsoleRenderer)
        .maximum_count(3)
        .size_str("M")
        .observer(&line)
        .build()?;

    println!("\nTap the cart icon:");
    stepper.primary_tap();

    println!("\nTap plus twice:");
    stepper.increment();
    stepper.increment();

    println!("\nTap plus at the limit:");
    stepper.increment();

    println!("\nTap minus:");
    stepper.decrement();

    println!("\nLower the limit to 1:");
    stepper.set_maximum_count(1);

    println!("\nTap minus at one:");
    stepper.decrement();

    println!("\nTransitions recorded:");
    for transition in stepper.history().transitions() {
        println!(
            "  {} : {} ({}) -> {} ({})",
            transition.input,
            transition.from.quantity,
            transition.from.phase(),
            transition.to.quantity,
            transition.to.phase()
        );
    }
    if let Some(elapsed) = stepper.history().duration() {
        println!("  session took {} ms", elapsed.as_millis());
    }

    println!("\n=== Walkthrough Complete ===");
    Ok(())
}
