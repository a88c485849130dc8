//! Copy Button
//!
//! This example walks a "Copy" -> "Copied" button through one full
//! confirmation on a virtual clock.
//!
//! Key concepts:
//! - Building a cascade with a click text
//! - Lifecycle hooks
//! - Stepping timers with `advance`
//! - Projecting snapshots for rendering
//!
//! Run with: RUST_LOG=text_cascade=debug cargo run --example copy_button

use text_cascade::builder::CascadeBuilder;
use text_cascade::render::{project_chars, project_container, ContainerOptions};
use text_cascade::scheduler::{ManualScheduler, Scheduler};
use text_cascade::TextCascade;

fn render(cascade: &TextCascade, options: &ContainerOptions) {
    let state = cascade.state();
    let container = project_container(state, cascade.timing(), options);
    let chars: String = project_chars(state)
        .iter()
        .map(|c| match (c.is_glowing, c.is_active) {
            (true, _) => format!("[{}]", c.ch),
            (false, true) => c.ch.to_string(),
            (false, false) => "_".to_string(),
        })
        .collect();

    println!(
        "  {:>5}ms  {:<10} width={:<5} {}",
        cascade.scheduler().now_ms(),
        state.phase.name(),
        container.max_width,
        chars
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "text_cascade=info".into()),
        )
        .init();

    println!("=== Copy Button ===\n");

    let mut cascade = CascadeBuilder::new(ManualScheduler::new())
        .text("Copy")
        .click_text("Copied")
        .on_enter(|| println!("  -> entered"))
        .on_confirm(|| println!("  -> copied to clipboard"))
        .on_exit(|| println!("  -> back to rest"))
        .build()
        .unwrap();

    let options = ContainerOptions {
        glow_color: Some("#7dd3fc".to_string()),
        ..ContainerOptions::default()
    };

    println!("Hover:");
    cascade.enter();
    render(&cascade, &options);
    cascade.advance(330);
    render(&cascade, &options);

    println!("\nClick:");
    cascade.confirm();
    render(&cascade, &options);
    for _ in 0..6 {
        cascade.advance(60);
        render(&cascade, &options);
    }

    println!("\nHold, then dismiss:");
    cascade.advance(1_500);
    render(&cascade, &options);
    cascade.advance(450);
    render(&cascade, &options);

    println!("\nPhase path: {:?}", cascade.history().path());
    println!("\n=== Example Complete ===");
}
