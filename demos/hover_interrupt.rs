//! Hover Interrupt
//!
//! This example shows how a reveal that is interrupted part way through
//! reverses from the characters already shown, and how reduced motion
//! turns every animation into an immediate change.
//!
//! Run with: RUST_LOG=text_cascade=trace cargo run --example hover_interrupt

use text_cascade::builder::{hover_cascade, CascadeBuilder};
use text_cascade::motion::ReducedMotionSignal;
use text_cascade::render::project_chars;
use text_cascade::scheduler::ManualScheduler;
use text_cascade::{HostEvent, TextCascade};

fn shown(cascade: &TextCascade) -> String {
    project_chars(cascade.state())
        .iter()
        .map(|c| if c.is_active { c.ch } else { '.' })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "text_cascade=info".into()),
        )
        .init();

    println!("=== Hover Interrupt ===\n");

    let mut cascade = hover_cascade("Documentation", ManualScheduler::new());

    for leave_after in [30, 130, 400, 1_000] {
        cascade.dispatch(HostEvent::PointerEnter);
        cascade.advance(leave_after);
        cascade.dispatch(HostEvent::PointerLeave);

        let state = cascade.state();
        println!(
            "leave after {:>4}ms: {:<8} {} reveal={}",
            leave_after,
            state.phase.name(),
            shown(&cascade),
            state.reveal_count
        );

        cascade.advance(2_000);
    }

    println!("\nReduced motion:");
    let signal = ReducedMotionSignal::new(true);
    let mut reduced = CascadeBuilder::new(ManualScheduler::new())
        .text("Documentation")
        .reduced_motion(signal.clone())
        .build()
        .unwrap();

    reduced.enter();
    println!("  after enter: {} {}", reduced.phase(), shown(&reduced));
    reduced.exit();
    println!("  after exit:  {} {}", reduced.phase(), shown(&reduced));

    signal.set(false);
    reduced.enter();
    println!("  motion back on, after enter: {}", reduced.phase());

    println!("\n=== Example Complete ===");
}
